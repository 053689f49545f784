//! Per-frame key handlers.
//!
//! Each handler consumes one key for one focus and reports what happened
//! as a [`KeyResult`](super::KeyResult). The router picks the handler with
//! an exhaustive match over [`Focus`](crate::focus::Focus).

mod confirm;
mod edit;
mod goto;
mod modify;
mod search;
mod select;

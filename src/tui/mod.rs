//! Terminal front end.
//!
//! Owns the terminal for the lifetime of a session and drives the
//! draw/read/dispatch loop.

mod app;
mod guard;

pub use app::run;
pub use guard::{Tui, TerminalGuard};

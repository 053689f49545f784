//! Integration tests for hexe.
//!
//! A single test binary: CLI behavior through the built executable and full
//! editing sessions against real files.

mod cli_test;
mod helpers;
mod session_test;

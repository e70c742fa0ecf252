//! paramprog command-line front end.
//!
//! The binary lives in `main.rs`; the pieces here are shared with tests.

pub mod commands;
pub mod params;

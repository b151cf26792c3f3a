//! Common utilities for the srcset tools.
//!
//! This crate provides shared infrastructure used by the command-line front end:
//! - **Warning System** - colored terminal output for dropped candidates

pub mod warning;

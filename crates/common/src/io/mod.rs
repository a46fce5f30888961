//! Utilities for writing to the terminal.

#[macro_use]
mod macros;

pub mod shell;

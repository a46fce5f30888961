//! # minter-cli
//!
//! Argument parsing and subcommands of the `minter` binary.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate minter_common;

#[macro_use]
extern crate tracing;

pub mod args;
pub mod cmd;
pub mod opts;
pub mod utils;

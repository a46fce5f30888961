//! # minter-common
//!
//! Calldata encoding, batch preparation and console output shared by the zk-minter crates.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

#[macro_use]
pub mod io;
pub use io::shell;

pub mod abi;
pub mod batch;
pub mod errors;

pub use abi::{decode_calldata, encode_args, encode_call, get_func, selector};
pub use batch::{CallSpec, prepare_calls, prepare_specs};
pub use errors::AbiError;

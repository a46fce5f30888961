//! Subcommands of the `minter` binary.

pub mod calldata;
pub mod decode;
pub mod deploy;
pub mod drip;
pub mod sig;

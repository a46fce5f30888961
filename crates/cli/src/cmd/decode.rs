use crate::utils::format_value;
use alloy_primitives::Bytes;
use clap::Parser;
use eyre::{Context, Result};
use minter_common::{decode_calldata, shell};

/// CLI arguments for `minter decode`.
#[derive(Clone, Debug, Parser)]
pub struct DecodeArgs {
    /// The function signature the calldata was encoded with.
    pub sig: String,

    /// The calldata, including the selector.
    pub calldata: Bytes,
}

impl DecodeArgs {
    pub fn run(self) -> Result<()> {
        let values = decode_calldata(&self.sig, &self.calldata)
            .wrap_err_with(|| format!("failed to decode calldata for `{}`", self.sig))?;
        let formatted: Vec<String> = values.iter().map(format_value).collect();

        if shell::is_json() {
            sh_println!("{}", serde_json::to_string_pretty(&formatted)?)?;
            return Ok(());
        }

        for value in formatted {
            sh_println!("{value}")?;
        }
        Ok(())
    }
}

use clap::Parser;
use eyre::Result;
use minter_common::{get_func, shell};
use serde_json::json;

/// CLI arguments for `minter sig`.
#[derive(Clone, Debug, Parser)]
pub struct SigArgs {
    /// The function signature, e.g. `addMerkleTree(bytes32,bytes32,address,uint256)`.
    pub sig: String,
}

impl SigArgs {
    pub fn run(self) -> Result<()> {
        let func = get_func(&self.sig)?;
        let selector = func.selector();

        if shell::is_json() {
            let output = json!({ "signature": func.signature(), "selector": selector });
            sh_println!("{}", serde_json::to_string_pretty(&output)?)?;
        } else {
            sh_println!("{selector}")?;
        }
        Ok(())
    }
}

use clap::{Parser, ValueHint};
use eyre::{Context, Result};
use minter_common::{CallSpec, prepare_specs, shell};
use minter_config::CallsFile;
use std::path::PathBuf;

/// The batch encoded when neither a signature nor a calls file is given: mint 10 tokens, then
/// transfer 1 token to each of two recipients.
pub fn default_calls() -> Vec<CallSpec> {
    vec![
        CallSpec::new(
            "mint(address,uint256)",
            ["0xA00F1d7c90BaA48650a79859C0950016469F01B1", "10000000000000000000"],
        ),
        CallSpec::new(
            "transfer(address,uint256)",
            ["0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E", "1000000000000000000"],
        ),
        CallSpec::new(
            "transfer(address,uint256)",
            ["0x5144EDF6a2E7677433BBbD04618702c1c9DF3C25", "1000000000000000000"],
        ),
    ]
}

/// CLI arguments for `minter calldata`.
#[derive(Clone, Debug, Parser)]
pub struct CalldataArgs {
    /// The function signature, e.g. `transfer(address,uint256)`.
    #[arg(conflicts_with = "calls")]
    pub sig: Option<String>,

    /// The arguments of the function.
    #[arg(allow_negative_numbers = true, requires = "sig")]
    pub args: Vec<String>,

    /// TOML file listing the calls to encode as `[[calls]]` entries.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub calls: Option<PathBuf>,
}

impl CalldataArgs {
    pub fn specs(&self) -> Result<Vec<CallSpec>> {
        if let Some(path) = &self.calls {
            let file = CallsFile::load(path)?;
            if file.calls.is_empty() {
                eyre::bail!("no calls found in {}", path.display());
            }
            return Ok(file.calls);
        }
        Ok(match &self.sig {
            Some(sig) => vec![CallSpec::new(sig.as_str(), self.args.iter().map(String::as_str))],
            None => default_calls(),
        })
    }

    pub fn run(self) -> Result<()> {
        let specs = self.specs()?;
        let calldatas = prepare_specs(&specs).wrap_err("failed to encode calldata")?;

        if shell::is_json() {
            sh_println!("{}", serde_json::to_string_pretty(&calldatas)?)?;
            return Ok(());
        }

        sh_println!("callDatas:")?;
        for (i, calldata) in calldatas.iter().enumerate() {
            sh_println!("{}: {calldata}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn default_batch_matches_known_calldata() {
        let calldatas = prepare_specs(&default_calls()).unwrap();
        assert_eq!(calldatas.len(), 3);
        assert_eq!(&calldatas[0][..4], hex!("40c10f19"));
        assert_eq!(
            calldatas[1].to_string(),
            "0xa9059cbb0000000000000000000000007a860e9c0986b5f7b1ab6ae7f0017d793dfcea2e0000000000000000000000000000000000000000000000000de0b6b3a7640000"
        );
    }

    #[test]
    fn single_signature_from_args() {
        let args = CalldataArgs::parse_from([
            "calldata",
            "transfer(address,uint256)",
            "0x5144EDF6a2E7677433BBbD04618702c1c9DF3C25",
            "1",
        ]);
        let specs = args.specs().unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].args.len(), 2);
    }

    #[test]
    fn sig_conflicts_with_calls_file() {
        let res = CalldataArgs::try_parse_from([
            "calldata",
            "transfer(address,uint256)",
            "--calls",
            "calls.toml",
        ]);
        assert!(res.is_err());
    }
}

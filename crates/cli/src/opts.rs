use crate::cmd::{
    calldata::CalldataArgs, decode::DecodeArgs, deploy::DeployArgs, drip::DripArgs, sig::SigArgs,
};
use clap::{Parser, Subcommand, ValueHint};
use eyre::{Context, Result};
use minter_common::shell::{OutputFormat, OutputMode, Shell};
use minter_config::MinterConfig;
use std::path::PathBuf;

/// Prepare calldata for the minter trigger and deploy it on ZKsync.
#[derive(Parser)]
#[command(name = "minter", version, next_display_order = None)]
pub struct Minter {
    /// Include the global arguments.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: MinterSubcommand,
}

#[derive(Subcommand)]
pub enum MinterSubcommand {
    /// ABI-encode a batch of function calls.
    #[command(visible_alias = "cd")]
    Calldata(CalldataArgs),

    /// Build the `transfer` calldata that sends minted tokens to a Drips list.
    Drip(DripArgs),

    /// Get the selector of a function signature.
    #[command(visible_alias = "si")]
    Sig(SigArgs),

    /// Decode calldata against a function signature.
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),

    /// Deploy the minter trigger contract.
    Deploy(DeployArgs),
}

/// Global arguments for the CLI.
#[derive(Clone, Debug, Default, Parser)]
pub struct GlobalArgs {
    /// Do not print informational messages.
    #[arg(help_heading = "Display options", global = true, short, long, alias = "silent")]
    quiet: bool,

    /// Format output as JSON.
    #[arg(help_heading = "Display options", global = true, long, alias = "format-json")]
    json: bool,

    /// Path to the configuration file.
    ///
    /// Defaults to `minter.toml` in the current directory.
    #[arg(global = true, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Initialize the global options.
    pub fn init(&self) {
        let mode = if self.quiet { OutputMode::Quiet } else { OutputMode::Normal };
        let format = if self.json { OutputFormat::Json } else { OutputFormat::Text };
        Shell::set(mode, format);
    }

    /// Loads the configuration, honouring `--config`.
    pub fn load_config(&self) -> Result<MinterConfig> {
        MinterConfig::load_with(self.config.as_deref()).wrap_err("failed to load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Minter::command().debug_assert();
    }

    #[test]
    fn global_args_anywhere() {
        let args = Minter::parse_from(["minter", "sig", "transfer(address,uint256)", "--json"]);
        assert!(args.global.json);
        assert!(matches!(args.cmd, MinterSubcommand::Sig(_)));

        let args = Minter::parse_from(["minter", "-q", "--config", "custom.toml", "calldata"]);
        assert!(args.global.quiet);
        assert_eq!(args.global.config, Some(PathBuf::from("custom.toml")));
    }
}

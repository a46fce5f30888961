use crate::{
    opts::{Minter, MinterSubcommand},
    utils,
};
use clap::Parser;
use eyre::Result;

/// Run the `minter` command line interface.
pub fn run() -> Result<()> {
    setup()?;

    let args = Minter::parse();
    args.global.init();

    run_command(args)
}

/// Setup the global logger and other utilities.
pub fn setup() -> Result<()> {
    utils::common_setup()?;
    utils::subscriber();

    Ok(())
}

/// Run the subcommand.
pub fn run_command(args: Minter) -> Result<()> {
    let global = args.global;
    match args.cmd {
        MinterSubcommand::Calldata(cmd) => cmd.run(),
        MinterSubcommand::Drip(cmd) => cmd.run(),
        MinterSubcommand::Sig(cmd) => cmd.run(),
        MinterSubcommand::Decode(cmd) => cmd.run(),
        MinterSubcommand::Deploy(cmd) => utils::block_on(cmd.run(&global))?,
    }
}

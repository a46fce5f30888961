//! The `minter` CLI: prepares calldata for the minter trigger and deploys it on ZKsync.

use minter_cli::args::run;

fn main() {
    if let Err(err) = run() {
        let _ = minter_common::sh_err!("{err:?}");
        std::process::exit(1);
    }
}

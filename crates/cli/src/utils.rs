use alloy_dyn_abi::DynSolValue;
use alloy_primitives::hex;
use color_eyre::config::{HookBuilder, Theme};
use eyre::{Context, Result};
use std::{future::Future, io::IsTerminal};
use tracing_subscriber::prelude::*;

/// Noisy dependencies that are silenced unless `RUST_LOG` sets a level for their target.
const DEFAULT_DIRECTIVES: &[&str] = &["hyper=off", "hyper_util=off", "reqwest=off", "rustls=off"];

/// Common setup for all CLI tools. Does not include [tracing subscriber](subscriber).
pub fn common_setup() -> Result<()> {
    install_error_handler()?;
    minter_config::load_dotenv();
    enable_paint();
    Ok(())
}

/// Installs the `color-eyre` report handler, without colors when stderr is not a terminal.
fn install_error_handler() -> Result<()> {
    let theme = if std::io::stderr().is_terminal() { Theme::dark() } else { Theme::new() };
    HookBuilder::default().theme(theme).display_env_section(false).install()
}

/// Enables terminal colors only when the output supports them.
pub fn enable_paint() {
    let enable = yansi::Condition::os_support() && yansi::Condition::tty_and_color_live();
    yansi::whenever(yansi::Condition::cached(enable));
}

/// Initializes a tracing subscriber that logs to stderr, filtered by `RUST_LOG`.
pub fn subscriber() {
    tracing_subscriber::Registry::default()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init()
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    let rust_log =
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in default_directives(&rust_log) {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// The [`DEFAULT_DIRECTIVES`] whose target `rust_log` does not configure.
fn default_directives(rust_log: &str) -> impl Iterator<Item = &'static str> + '_ {
    DEFAULT_DIRECTIVES.iter().copied().filter(move |directive| {
        let target = directive.split('=').next().unwrap_or_default();
        !rust_log.split(',').any(|configured| {
            let configured = configured.trim().split(['=', '[']).next().unwrap_or_default();
            configured == target || configured.starts_with(&format!("{target}::"))
        })
    })
}

/// Runs `future` to completion on a fresh multi-threaded tokio runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("could not start tokio runtime")?;
    Ok(rt.block_on(future))
}

/// Pretty-prints a decoded ABI value.
pub fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_checksum(None),
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Uint(n, _) => n.to_string(),
        DynSolValue::Int(n, _) => n.to_string(),
        DynSolValue::FixedBytes(word, size) => hex::encode_prefixed(&word[..*size]),
        DynSolValue::Bytes(bytes) => hex::encode_prefixed(bytes),
        DynSolValue::String(s) => format!("{s:?}"),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
            format!("[{}]", format_values(values))
        }
        DynSolValue::Tuple(values) => format!("({})", format_values(values)),
        other => format!("{other:?}"),
    }
}

fn format_values(values: &[DynSolValue]) -> String {
    values.iter().map(format_value).collect::<Vec<_>>().join(", ")
}

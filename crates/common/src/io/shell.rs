//! Process-wide output settings.

use std::{
    fmt,
    io::{self, Write},
    sync::{Mutex, MutexGuard, PoisonError},
};
use yansi::Paint;

static GLOBAL_SHELL: Mutex<Shell> = Mutex::new(Shell::new());

/// Returns `true` if output should be machine readable JSON.
pub fn is_json() -> bool {
    Shell::get().output_format == OutputFormat::Json
}

/// Returns `true` if informational output is suppressed.
pub fn is_quiet() -> bool {
    Shell::get().output_mode == OutputMode::Quiet
}

/// How much is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Normal,
    /// Only errors and requested data.
    Quiet,
}

/// How results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug)]
pub struct Shell {
    output_mode: OutputMode,
    output_format: OutputFormat,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub const fn new() -> Self {
        Self { output_mode: OutputMode::Normal, output_format: OutputFormat::Text }
    }

    /// Locks the global shell.
    pub fn get() -> MutexGuard<'static, Self> {
        GLOBAL_SHELL.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the global shell settings.
    pub fn set(mode: OutputMode, format: OutputFormat) {
        let mut shell = Self::get();
        shell.output_mode = mode;
        shell.output_format = format;
    }

    /// Writes to stdout. JSON documents are printed even in quiet mode since they are the
    /// requested data.
    pub fn print_out(args: fmt::Arguments<'_>) -> io::Result<()> {
        let shell = Self::get();
        if shell.output_mode == OutputMode::Quiet && shell.output_format == OutputFormat::Text {
            return Ok(());
        }
        drop(shell);
        let mut out = anstream::stdout().lock();
        out.write_fmt(args)?;
        out.flush()
    }

    pub fn warn(args: fmt::Arguments<'_>) -> io::Result<()> {
        if is_quiet() {
            return Ok(());
        }
        let mut err = anstream::stderr().lock();
        writeln!(err, "{}: {args}", "Warning".yellow().bold())
    }

    pub fn error(args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut err = anstream::stderr().lock();
        writeln!(err, "{}: {args}", "Error".red().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shell_is_verbose_text() {
        let shell = Shell::default();
        assert_eq!(shell.output_mode, OutputMode::Normal);
        assert_eq!(shell.output_format, OutputFormat::Text);
    }
}

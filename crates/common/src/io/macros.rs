/// Prints a message to [`stdout`][std::io::stdout] unless the shell is quiet.
///
/// Returns a [`std::io::Result<()>`].
#[macro_export]
macro_rules! sh_print {
    ($($t:tt)*) => {
        $crate::shell::Shell::print_out(::core::format_args!($($t)*))
    };
}

/// Same as [`sh_print!`], followed by a newline.
#[macro_export]
macro_rules! sh_println {
    () => {
        $crate::sh_print!("\n")
    };
    ($($t:tt)*) => {
        $crate::sh_print!("{}\n", ::core::format_args!($($t)*))
    };
}

/// Prints a warning to [`stderr`][std::io::stderr] unless the shell is quiet.
#[macro_export]
macro_rules! sh_warn {
    ($($t:tt)*) => {
        $crate::shell::Shell::warn(::core::format_args!($($t)*))
    };
}

/// Prints an error to [`stderr`][std::io::stderr]. Errors are never silenced.
#[macro_export]
macro_rules! sh_err {
    ($($t:tt)*) => {
        $crate::shell::Shell::error(::core::format_args!($($t)*))
    };
}

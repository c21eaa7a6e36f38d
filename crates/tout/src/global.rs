//! The default outputs for standard output and standard error.
//!
//! Both outputs are created on first use. Standard output starts out
//! unstyled, whereas standard error starts out with a red foreground. Each
//! output sits behind its own mutex, so individual calls are synchronized.
//! Sequences of calls are not atomic, however. Applications should configure
//! the default outputs at startup, before spawning threads.

use std::fmt::Display;
use std::io::{Result, Write};
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::opt::Options;
use crate::output::{BoxedOutput, Output};
use crate::style::Format;
use crate::termco::Colorant;

static OUTPUT: OnceLock<Mutex<BoxedOutput>> = OnceLock::new();
static ERROR_OUTPUT: OnceLock<Mutex<BoxedOutput>> = OnceLock::new();

fn create_output(options: &Options) -> BoxedOutput {
    Output::stdout_with_options(options)
}

fn create_error_output(options: &Options) -> BoxedOutput {
    let mut output = Output::stderr_with_options(options);
    if let Some(color) = options.error_color() {
        output.set_foreground(color);
    }
    output
}

#[inline]
fn lock(
    cell: &'static OnceLock<Mutex<BoxedOutput>>,
    create: fn(&Options) -> BoxedOutput,
) -> MutexGuard<'static, BoxedOutput> {
    cell.get_or_init(|| Mutex::new(create(&Options::default())))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

fn install(
    cell: &'static OnceLock<Mutex<BoxedOutput>>,
    output: BoxedOutput,
) -> Option<BoxedOutput> {
    match cell.set(Mutex::new(output)) {
        Ok(()) => None,
        Err(mutex) => {
            let output = mutex.into_inner().unwrap_or_else(|e| e.into_inner());
            let mut current = cell
                .get()?
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            Some(std::mem::replace(&mut *current, output))
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Recreate both default outputs from the options.
///
/// Unless the options force a fidelity, this function detects the fidelity of
/// standard output and standard error. If the options have an error color, it
/// becomes the foreground color of the error output.
///
/// This function flushes the writers of the replaced outputs. It installs both
/// new outputs even if flushing fails and then returns the first error.
pub fn init(options: &Options) -> Result<()> {
    let output = create_output(options);
    let error_output = create_error_output(options);
    tracing::debug!(
        fidelity = ?output.fidelity(),
        error_fidelity = ?error_output.fidelity(),
        "initializing default outputs"
    );

    let flushed = flush_replaced(install(&OUTPUT, output));
    let error_flushed = flush_replaced(install(&ERROR_OUTPUT, error_output));
    flushed.and(error_flushed)
}

fn flush_replaced(output: Option<BoxedOutput>) -> Result<()> {
    output.map_or(Ok(()), |mut output| output.writer_mut().flush())
}

/// Replace the default output.
///
/// This function returns the previous default output, unless it had not been
/// created yet.
pub fn set_output(output: BoxedOutput) -> Option<BoxedOutput> {
    tracing::debug!(fidelity = ?output.fidelity(), "replacing default output");
    install(&OUTPUT, output)
}

/// Replace the default error output.
///
/// This function returns the previous default error output, unless it had not
/// been created yet.
pub fn set_error_output(output: BoxedOutput) -> Option<BoxedOutput> {
    tracing::debug!(fidelity = ?output.fidelity(), "replacing default error output");
    install(&ERROR_OUTPUT, output)
}

/// Run the closure with exclusive access to the default output.
///
/// The closure must not call any of this module's functions that access the
/// default output. Doing so deadlocks.
pub fn with_output<F, R>(f: F) -> R
where
    F: FnOnce(&mut BoxedOutput) -> R,
{
    f(&mut lock(&OUTPUT, create_output))
}

/// Run the closure with exclusive access to the default error output.
///
/// The closure must not call any of this module's functions that access the
/// default error output. Doing so deadlocks.
pub fn with_error_output<F, R>(f: F) -> R
where
    F: FnOnce(&mut BoxedOutput) -> R,
{
    f(&mut lock(&ERROR_OUTPUT, create_error_output))
}

// ----------------------------------------------------------------------------------------------------------

/// Get the text format of the default output.
pub fn format() -> Format {
    with_output(|o| o.format())
}

/// Replace the text format of the default output.
pub fn set_format<F: Into<Format>>(format: F) {
    with_output(|o| o.set_format(format))
}

/// Clear the text format of the default output.
pub fn reset_format() {
    with_output(BoxedOutput::reset_format)
}

/// Add the attributes to the text format of the default output.
pub fn add_style<F: Into<Format>>(format: F) {
    with_output(|o| o.add_style(format))
}

/// Remove the attributes from the text format of the default output.
pub fn remove_style<F: Into<Format>>(format: F) {
    with_output(|o| o.remove_style(format))
}

/// Set the foreground color of the default output.
pub fn foreground<C: Into<Colorant>>(color: C) {
    with_output(|o| o.set_foreground(color))
}

/// Unset the foreground color of the default output.
pub fn reset_foreground() {
    with_output(BoxedOutput::reset_foreground)
}

/// Set the foreground color of the default output to the terminal's default.
pub fn default_foreground() {
    with_output(BoxedOutput::set_default_foreground)
}

/// Set the background color of the default output.
pub fn background<C: Into<Colorant>>(color: C) {
    with_output(|o| o.set_background(color))
}

/// Unset the background color of the default output.
pub fn reset_background() {
    with_output(BoxedOutput::reset_background)
}

/// Set the background color of the default output to the terminal's default.
pub fn default_background() {
    with_output(BoxedOutput::set_default_background)
}

// ----------------------------------------------------------------------------------------------------------

/// Write the bytes to the default output without styling.
pub fn write<B: AsRef<[u8]>>(bytes: B) -> Result<()> {
    with_output(|o| o.write_raw(bytes))
}

/// Write the value to the default output.
pub fn print<T: Display>(value: T) -> Result<()> {
    with_output(|o| o.print(value))
}

/// Write the value and a newline to the default output.
pub fn println<T: Display>(value: T) -> Result<()> {
    with_output(|o| o.println(value))
}

/// Write the formatted arguments to the default output.
///
/// The [`printf!`](crate::printf!) macro is more convenient.
pub fn printf(args: std::fmt::Arguments<'_>) -> Result<()> {
    with_output(|o| o.printf(args))
}

/// Write the value to the default error output.
pub fn error<T: Display>(value: T) -> Result<()> {
    with_error_output(|o| o.print(value))
}

/// Write the value and a newline to the default error output.
pub fn errorln<T: Display>(value: T) -> Result<()> {
    with_error_output(|o| o.println(value))
}

/// Write the formatted arguments to the default error output.
///
/// The [`errorf!`](crate::errorf!) macro is more convenient.
pub fn errorf(args: std::fmt::Arguments<'_>) -> Result<()> {
    with_error_output(|o| o.printf(args))
}

/// Flush the default output and the default error output.
///
/// None of the other functions in this module flush.
pub fn flush() -> Result<()> {
    with_output(|o| o.writer_mut().flush())?;
    with_error_output(|o| o.writer_mut().flush())
}

// ----------------------------------------------------------------------------------------------------------

/// Write formatted text to the default output.
///
/// This macro takes the same arguments as [`format!`] and returns an
/// [`std::io::Result`].
///
/// ```no_run
/// tout::printf!("{} + {} = {}", 1, 2, 1 + 2)?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! printf {
    ($($arg:tt)*) => {
        $crate::printf(::std::format_args!($($arg)*))
    };
}

/// Write formatted text to the default error output.
///
/// This macro takes the same arguments as [`format!`] and returns an
/// [`std::io::Result`].
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::errorf(::std::format_args!($($arg)*))
    };
}

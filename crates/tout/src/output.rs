use std::fmt::Display;
use std::io::{IsTerminal, Result, Write};

use crate::opt::Options;
use crate::style::{Fidelity, Format, StyleState};
use crate::termco::Colorant;

/// An output with a boxed writer.
///
/// This is the type of the [default outputs](crate::init).
pub type BoxedOutput = Output<Box<dyn Write + Send>>;

/// A styled output.
///
/// An output binds a [`StyleState`] to a writer and the writer's
/// [`Fidelity`]. Its setters update the style, and its print methods write
/// text wrapped in the style's escape sequences. Each print method issues one
/// write for the styled text and, for [`Output::println`], one more for the
/// unstyled newline. Outputs never flush their writers.
///
/// An output is not safe for unsynchronized concurrent use. Since all mutating
/// methods take `&mut self`, Rust enforces this anyways.
///
/// ```
/// # use tout::Output;
/// # use tout::style::{Attribute, Fidelity};
/// # use tout::termco::AnsiColor;
/// let mut output = Output::with_fidelity(Vec::new(), Fidelity::Ansi);
/// output.set_foreground(AnsiColor::GREEN);
/// output.add_style(Attribute::Italic);
/// output.println("ok")?;
/// output.reset_foreground();
/// output.print(42)?;
///
/// assert_eq!(output.writer(), b"\x1b[32;3mok\x1b[0m\n\x1b[3m42\x1b[0m");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Output<W: Write> {
    writer: W,
    state: StyleState,
}

impl<W: Write> Output<W> {
    /// Create a new output for a writer that is not a terminal.
    ///
    /// The output's fidelity is [`Fidelity::Plain`], i.e., it never emits
    /// escape sequences.
    pub fn new(writer: W) -> Self {
        Self::with_fidelity(writer, Fidelity::Plain)
    }

    /// Create a new output with the given fidelity.
    pub fn with_fidelity(writer: W, fidelity: Fidelity) -> Self {
        Self {
            writer,
            state: StyleState::new(fidelity),
        }
    }

    // ----------------------------------------------------------------------------------------------------------

    /// Get the writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get the writer mutably.
    ///
    /// Bytes written directly to the writer are not styled.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume this output and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Replace the writer with one that is not a terminal.
    ///
    /// This method also resets the fidelity to [`Fidelity::Plain`] and returns
    /// the previous writer. The style is retained and renders again once the
    /// fidelity is raised.
    pub fn set_writer(&mut self, writer: W) -> W {
        self.set_fidelity(Fidelity::Plain);
        std::mem::replace(&mut self.writer, writer)
    }

    /// Get the fidelity.
    pub fn fidelity(&self) -> Fidelity {
        self.state.fidelity()
    }

    /// Force the fidelity.
    ///
    /// Colors the new fidelity does not cover are retained but not rendered.
    pub fn set_fidelity(&mut self, fidelity: Fidelity) {
        if fidelity != self.state.fidelity() {
            tracing::debug!(from = ?self.state.fidelity(), to = ?fidelity, "changing output fidelity");
        }
        self.state.set_fidelity(fidelity);
    }

    /// Get the style state.
    pub fn state(&self) -> &StyleState {
        &self.state
    }

    // ----------------------------------------------------------------------------------------------------------

    /// Set the foreground color.
    ///
    /// If the fidelity does not cover the color, the foreground becomes unset.
    pub fn set_foreground<C: Into<Colorant>>(&mut self, color: C) {
        self.state.set_foreground(color);
    }

    /// Set the background color.
    ///
    /// If the fidelity does not cover the color, the background becomes unset.
    pub fn set_background<C: Into<Colorant>>(&mut self, color: C) {
        self.state.set_background(color);
    }

    /// Set the foreground to the terminal's default color.
    pub fn set_default_foreground(&mut self) {
        self.state.set_default_foreground();
    }

    /// Set the background to the terminal's default color.
    pub fn set_default_background(&mut self) {
        self.state.set_default_background();
    }

    /// Unset the foreground color.
    pub fn reset_foreground(&mut self) {
        self.state.reset_foreground();
    }

    /// Unset the background color.
    pub fn reset_background(&mut self) {
        self.state.reset_background();
    }

    /// Get the text format.
    pub fn format(&self) -> Format {
        self.state.format()
    }

    /// Replace the text format.
    pub fn set_format<F: Into<Format>>(&mut self, format: F) {
        self.state.set_format(format);
    }

    /// Add the attributes to the text format.
    pub fn add_style<F: Into<Format>>(&mut self, format: F) {
        self.state.add_style(format);
    }

    /// Remove the attributes from the text format.
    pub fn remove_style<F: Into<Format>>(&mut self, format: F) {
        self.state.remove_style(format);
    }

    /// Clear the text format.
    pub fn reset_format(&mut self) {
        self.state.reset_format();
    }

    // ----------------------------------------------------------------------------------------------------------

    fn emit(&mut self, payload: &[u8]) -> Result<()> {
        let bytes = self.state.render(payload);
        self.writer.write_all(&bytes)
    }

    /// Write the value in the current style.
    pub fn print<T: Display>(&mut self, value: T) -> Result<()> {
        self.emit(value.to_string().as_bytes())
    }

    /// Write the value in the current style followed by a newline.
    ///
    /// The newline is written after the escape sequence resetting the style
    /// and hence is never styled.
    pub fn println<T: Display>(&mut self, value: T) -> Result<()> {
        self.emit(value.to_string().as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// Write the formatted arguments in the current style.
    ///
    /// Use with [`format_args!`] or the [`printf!`](crate::printf!) macro.
    pub fn printf(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        self.emit(std::fmt::format(args).as_bytes())
    }

    /// Write the bytes without any styling.
    pub fn write_raw<B: AsRef<[u8]>>(&mut self, bytes: B) -> Result<()> {
        self.writer.write_all(bytes.as_ref())
    }
}

impl<W: Write + IsTerminal> Output<W> {
    /// Create a new output for a stream that may be a terminal.
    ///
    /// This method detects the fidelity from the stream and the environment.
    pub fn terminal(stream: W) -> Self {
        let fidelity = Fidelity::detect(&stream);
        Self::with_fidelity(stream, fidelity)
    }

    /// Create a new output configured by the options.
    ///
    /// Unless the options force a fidelity, this method detects it.
    pub fn with_options(stream: W, options: &Options) -> Self {
        let fidelity = options
            .fidelity()
            .unwrap_or_else(|| Fidelity::detect(&stream));
        Self::with_fidelity(stream, fidelity)
    }

    /// Replace the writer with a stream that may be a terminal.
    ///
    /// This method also detects the new fidelity and returns the previous
    /// writer.
    pub fn set_terminal(&mut self, stream: W) -> W {
        let fidelity = Fidelity::detect(&stream);
        self.set_fidelity(fidelity);
        std::mem::replace(&mut self.writer, stream)
    }
}

impl BoxedOutput {
    /// Create a new output for standard output.
    pub fn stdout() -> Self {
        Self::stdout_with_options(&Options::default())
    }

    /// Create a new output for standard error.
    pub fn stderr() -> Self {
        Self::stderr_with_options(&Options::default())
    }

    /// Create a new output for standard output configured by the options.
    pub fn stdout_with_options(options: &Options) -> Self {
        let stream = std::io::stdout();
        let fidelity = options
            .fidelity()
            .unwrap_or_else(|| Fidelity::detect(&stream));
        Self::with_fidelity(Box::new(stream), fidelity)
    }

    /// Create a new output for standard error configured by the options.
    ///
    /// This method does *not* apply the options' error color.
    pub fn stderr_with_options(options: &Options) -> Self {
        let stream = std::io::stderr();
        let fidelity = options
            .fidelity()
            .unwrap_or_else(|| Fidelity::detect(&stream));
        Self::with_fidelity(Box::new(stream), fidelity)
    }

    /// Create a new output for a boxed writer that is not a terminal.
    pub fn boxed<T: Write + Send + 'static>(writer: T) -> Self {
        Self::new(Box::new(writer))
    }
}

/// The default output writes to standard output.
impl Default for BoxedOutput {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> std::fmt::Debug for Output<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// ----------------------------------------------------------------------------------------------------------

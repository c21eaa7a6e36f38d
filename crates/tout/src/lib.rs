//! # Tout
//!
//! Tout writes colored and formatted text to terminals with ANSI SGR escape
//! sequences. It determines what the terminal can display, silently drops
//! colors the terminal cannot display, and emits nothing but the plain text
//! when output is not going to a terminal.
//!
//!
//! ## 1. Overview
//!
//! Tout's main abstractions are:
//!
//!   * The [`termco`] module offers a choice of **terminal-specific color
//!     formats** [`AnsiColor`](termco::AnsiColor),
//!     [`EmbeddedRgb`](termco::EmbeddedRgb),
//!     [`GrayGradient`](termco::GrayGradient), and [`Rgb`](termco::Rgb), as
//!     well as the wrapper [`Colorant`](termco::Colorant). The [`palette`]
//!     module names some of them.
//!   * The [`style`] module defines the [`Fidelity`](style::Fidelity) of a
//!     terminal, the text [`Format`](style::Format), and the
//!     [`StyleState`](style::StyleState), which combines foreground and
//!     background colors with a format and renders them as escape sequences.
//!   * [`Output`] binds a style state to a writer. It is the **styled output
//!     channel** applications print through.
//!   * The **default outputs** for standard output and standard error are
//!     accessible through free functions such as [`foreground`], [`println`],
//!     and [`errorln`] as well as the [`printf!`] and [`errorf!`] macros.
//!
//!
//! ## 2. Capabilities
//!
//! [`Fidelity::detect`](style::Fidelity::detect) determines a stream's
//! fidelity from whether the stream is a terminal and from environment
//! variables including `NO_COLOR`, `FORCE_COLOR`, `TERM`, `COLORTERM`, and
//! `TERM_PROGRAM`. An output never emits a color its fidelity does not cover.
//! Instead, it leaves that color unset. When the fidelity is
//! [`Fidelity::Plain`](style::Fidelity::Plain), an output writes the text only.
//!
//!
//! ## 3. Styled Output
//!
//! An output wraps each printed value in the escape sequence for its current
//! style and the escape sequence resetting all attributes. Newlines written by
//! [`Output::println`] come after the reset and hence are never styled.
//!
//! ```
//! # use tout::Output;
//! # use tout::style::{Attribute, Fidelity};
//! # use tout::termco::{AnsiColor, Rgb};
//! let mut output = Output::with_fidelity(Vec::new(), Fidelity::EightBit);
//! output.set_foreground(Rgb::new(255, 0, 0));
//! output.set_background(AnsiColor::BLUE);
//! output.add_style(Attribute::Bold + Attribute::Blinking);
//! output.println("Hello")?;
//!
//! // The 24-bit foreground is not covered by 8-bit fidelity.
//! assert_eq!(output.writer(), b"\x1b[44;5;1mHello\x1b[0m\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! The default outputs work the same, but are shared by the entire process:
//!
//! ```no_run
//! # use tout::style::Attribute;
//! # use tout::termco::AnsiColor;
//! tout::foreground(AnsiColor::GREEN);
//! tout::add_style(Attribute::Underlined);
//! tout::println("Success!")?;
//! tout::errorln("Failure!")?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//!
//! ## 4. Configuration
//!
//! [`Options`](opt::Options) force a fidelity or change the color of the
//! default error output. [`init`] applies them to the default outputs, and
//! [`Output::with_options`] applies them to a new output.
//!
//!
//! ## 5. Logging
//!
//! Tout logs fidelity detection and changes at debug level and dropped colors
//! at trace level through [`tracing`](https://docs.rs/tracing). It never
//! installs a subscriber.

pub mod error;
mod global;
pub mod opt;
mod output;
pub mod palette;
pub mod style;
pub mod termco;
mod util;

pub use global::{
    add_style, background, default_background, default_foreground, error, errorf, errorln,
    flush, foreground, format, init, print, printf, println, remove_style, reset_background,
    reset_foreground, reset_format, set_error_output, set_format, set_output, with_error_output,
    with_output, write,
};
pub use output::{BoxedOutput, Output};

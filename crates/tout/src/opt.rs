//! Helper module with the options for creating outputs.
//!
//! This module provides the options for an [`Output`](crate::Output) and for
//! the default outputs as well as the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use tout::opt::Options;
//! # use tout::style::Fidelity;
//! # use tout::termco::AnsiColor;
//! let options = Options::builder()
//!     .fidelity(Fidelity::Ansi)
//!     .error_color(AnsiColor::BRIGHT_RED)
//!     .build();
//!
//! assert_eq!(options.fidelity(), Some(Fidelity::Ansi));
//! ```

use crate::palette;
use crate::style::Fidelity;
use crate::termco::Colorant;

#[derive(Clone, Debug)]
struct OptionData {
    fidelity: Option<Fidelity>,
    error_color: Option<Colorant>,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            fidelity: None,
            error_color: Some(Colorant::Rgb(palette::rgb::RED)),
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Force the fidelity instead of detecting it.
    pub fn fidelity(&mut self, fidelity: Fidelity) -> &mut Self {
        self.0.fidelity = Some(fidelity);
        self
    }

    /// Detect the fidelity from the output stream and environment.
    pub fn detect_fidelity(&mut self) -> &mut Self {
        self.0.fidelity = None;
        self
    }

    /// Set the foreground color for the default error output.
    pub fn error_color<C: Into<Colorant>>(&mut self, color: C) -> &mut Self {
        self.0.error_color = Some(color.into());
        self
    }

    /// Leave the default error output unstyled.
    pub fn plain_errors(&mut self) -> &mut Self {
        self.0.error_color = None;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
///
/// By default, the fidelity is detected and the default error output uses
/// 24-bit red for its foreground.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with the given fidelity.
    pub fn with_fidelity(fidelity: Fidelity) -> Options {
        Self::builder().fidelity(fidelity).build()
    }

    /// Get the forced fidelity, if any.
    pub fn fidelity(&self) -> Option<Fidelity> {
        self.0.fidelity
    }

    /// Get the foreground color for the default error output, if any.
    pub fn error_color(&self) -> Option<Colorant> {
        self.0.error_color
    }
}

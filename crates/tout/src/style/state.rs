use std::borrow::Cow;

use super::{Fidelity, Format, Layer};
use crate::termco::Colorant;

/// The control sequence introducer.
const CSI: &[u8] = b"\x1b[";

/// The escape sequence resetting all attributes.
const RESET: &[u8] = b"\x1b[0m";

/// The current style of an output.
///
/// A style state tracks a foreground color, a background color, and a text
/// format together with the fidelity of the output it belongs to. Colors that
/// exceed the fidelity are dropped when they are set. Colors that were set
/// under a richer fidelity are kept when the fidelity changes, but they only
/// render while the fidelity covers them.
///
/// A foreground or background color can be *unset*, in which case rendering
/// omits it altogether, or it can be the *default* color, in which case
/// rendering explicitly requests the terminal's default color with SGR
/// parameter `39` or `49`.
///
/// ```
/// # use tout::style::{Attribute, Fidelity, StyleState};
/// # use tout::termco::Rgb;
/// let mut state = StyleState::new(Fidelity::TwentyFourBit);
/// state.set_foreground(Rgb::new(255, 0, 0));
/// state.add_style(Attribute::Bold);
/// assert_eq!(state.render_parameters(), "38;2;255;0;0;1");
/// assert_eq!(&*state.render(b"hi"), b"\x1b[38;2;255;0;0;1mhi\x1b[0m");
///
/// state.set_fidelity(Fidelity::Plain);
/// assert_eq!(&*state.render(b"hi"), b"hi");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    foreground: Option<Colorant>,
    background: Option<Colorant>,
    format: Format,
    fidelity: Fidelity,
}

impl StyleState {
    /// Create a new, empty style state for output with the given fidelity.
    pub fn new(fidelity: Fidelity) -> Self {
        Self {
            fidelity,
            ..Self::default()
        }
    }

    /// Get the fidelity.
    pub fn fidelity(&self) -> Fidelity {
        self.fidelity
    }

    /// Update the fidelity.
    ///
    /// The stored colors are retained. Colors that the new fidelity does not
    /// cover are suppressed until the fidelity covers them again.
    pub fn set_fidelity(&mut self, fidelity: Fidelity) {
        self.fidelity = fidelity;
    }

    #[inline]
    fn effective<'a>(&self, colorant: Option<&'a Colorant>) -> Option<&'a Colorant> {
        colorant.filter(|c| self.fidelity.covers(**c))
    }

    /// Get the foreground color, if set and covered by the current fidelity.
    pub fn foreground(&self) -> Option<&Colorant> {
        self.effective(self.foreground.as_ref())
    }

    /// Get the background color, if set and covered by the current fidelity.
    pub fn background(&self) -> Option<&Colorant> {
        self.effective(self.background.as_ref())
    }

    /// Get the text format.
    pub fn format(&self) -> Format {
        self.format
    }

    fn negotiate(&self, colorant: Colorant, layer: Layer) -> Option<Colorant> {
        if self.fidelity.covers(colorant) {
            Some(colorant)
        } else {
            tracing::trace!(
                ?colorant,
                ?layer,
                fidelity = ?self.fidelity,
                "dropping color beyond output fidelity"
            );
            None
        }
    }

    /// Set the foreground color.
    ///
    /// If this state's fidelity does not cover the color, the foreground
    /// becomes unset instead.
    pub fn set_foreground<C: Into<Colorant>>(&mut self, color: C) {
        self.foreground = self.negotiate(color.into(), Layer::Foreground);
    }

    /// Set the background color.
    ///
    /// If this state's fidelity does not cover the color, the background
    /// becomes unset instead.
    pub fn set_background<C: Into<Colorant>>(&mut self, color: C) {
        self.background = self.negotiate(color.into(), Layer::Background);
    }

    /// Set the foreground to the terminal's default color.
    pub fn set_default_foreground(&mut self) {
        self.foreground = Some(Colorant::Default());
    }

    /// Set the background to the terminal's default color.
    pub fn set_default_background(&mut self) {
        self.background = Some(Colorant::Default());
    }

    /// Unset the foreground color.
    pub fn reset_foreground(&mut self) {
        self.foreground = None;
    }

    /// Unset the background color.
    pub fn reset_background(&mut self) {
        self.background = None;
    }

    /// Replace the text format.
    pub fn set_format<F: Into<Format>>(&mut self, format: F) {
        self.format = format.into();
    }

    /// Add the attributes to the text format.
    pub fn add_style<F: Into<Format>>(&mut self, format: F) {
        self.format.insert(format);
    }

    /// Remove the attributes from the text format.
    pub fn remove_style<F: Into<Format>>(&mut self, format: F) {
        self.format.remove(format);
    }

    /// Clear the text format.
    pub fn reset_format(&mut self) {
        self.format.clear();
    }

    /// Determine whether rendering produces any escape sequences.
    pub fn is_plain(&self) -> bool {
        self.fidelity == Fidelity::Plain
            || (self.foreground().is_none()
                && self.background().is_none()
                && self.format.is_empty())
    }

    /// Render the SGR parameters for this state.
    ///
    /// The parameters are the foreground color, the background color, and then
    /// the text attributes in [display
    /// order](super::Attribute::DISPLAY_ORDER), all separated by semicolons.
    /// The result is empty for plain output or an empty state.
    pub fn render_parameters(&self) -> String {
        if self.is_plain() {
            return String::new();
        }

        Parameters(self).to_string()
    }

    /// Wrap the payload in this state's escape sequences.
    ///
    /// If this state renders no parameters, the payload is returned unchanged.
    /// Otherwise, it is preceded by the escape sequence with the parameters
    /// and followed by the escape sequence resetting all attributes.
    pub fn render<'a>(&self, payload: &'a [u8]) -> Cow<'a, [u8]> {
        let params = self.render_parameters();
        if params.is_empty() {
            return Cow::Borrowed(payload);
        }

        let mut bytes =
            Vec::with_capacity(CSI.len() + params.len() + 1 + payload.len() + RESET.len());
        bytes.extend_from_slice(CSI);
        bytes.extend_from_slice(params.as_bytes());
        bytes.push(b'm');
        bytes.extend_from_slice(payload);
        bytes.extend_from_slice(RESET);
        Cow::Owned(bytes)
    }
}

/// Displaying a style state writes the escape sequence that applies it, or
/// nothing at all if the state is plain.
impl std::fmt::Display for StyleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_plain() {
            return Ok(());
        }

        write!(f, "\x1b[{}m", Parameters(self))
    }
}

/// The semicolon-separated SGR parameters of a style state.
struct Parameters<'a>(&'a StyleState);

impl std::fmt::Display for Parameters<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        macro_rules! maybe_emit_semicolon {
            () => {
                if first {
                    #[allow(unused_assignments)]
                    {
                        first = false;
                    }
                } else {
                    f.write_str(";")?;
                }
            };
        }

        if let Some(colorant) = self.0.foreground() {
            maybe_emit_semicolon!();
            colorant.write_sgr_params(Layer::Foreground, f)?;
        }
        if let Some(colorant) = self.0.background() {
            maybe_emit_semicolon!();
            colorant.write_sgr_params(Layer::Background, f)?;
        }
        for attr in self.0.format.attributes() {
            maybe_emit_semicolon!();
            write!(f, "{}", attr.enable_sgr())?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::Attribute::*;
    use crate::termco::{AnsiColor, Rgb};

    #[test]
    fn test_empty_state() {
        for fidelity in [
            Fidelity::Plain,
            Fidelity::Ansi,
            Fidelity::EightBit,
            Fidelity::TwentyFourBit,
        ] {
            let state = StyleState::new(fidelity);
            assert_eq!(state.render_parameters(), "");
            assert!(matches!(state.render(b"text"), Cow::Borrowed(b"text")));
            assert_eq!(format!("{}", state), "");
        }
    }

    #[test]
    fn test_negotiation() {
        let mut state = StyleState::new(Fidelity::Ansi);
        state.set_foreground(Rgb::new(255, 0, 0));
        assert_eq!(state.foreground(), None);
        state.set_background(Colorant::EightBit(17));
        assert_eq!(state.background(), None);
        assert_eq!(state.render_parameters(), "");

        state.set_foreground(AnsiColor::RED);
        state.set_background(AnsiColor::BRIGHT_BLUE);
        assert_eq!(state.render_parameters(), "31;104");

        // A rejected color also clears a previously accepted one.
        state.set_foreground(Colorant::EightBit(200));
        assert_eq!(state.render_parameters(), "104");

        let mut state = StyleState::new(Fidelity::EightBit);
        state.set_foreground(Colorant::EightBit(200));
        state.set_background(Rgb::new(0, 0, 0));
        assert_eq!(state.render_parameters(), "38;5;200");
    }

    #[test]
    fn test_default_versus_unset() {
        let mut state = StyleState::new(Fidelity::Ansi);
        state.set_default_foreground();
        assert_eq!(state.render_parameters(), "39");
        state.set_default_background();
        assert_eq!(state.render_parameters(), "39;49");
        state.reset_foreground();
        assert_eq!(state.render_parameters(), "49");
        state.reset_background();
        assert_eq!(state.render_parameters(), "");

        state.set_foreground(AnsiColor::new(99));
        state.set_background(AnsiColor::new(99));
        assert_eq!(state.render_parameters(), "39;49");
    }

    #[test]
    fn test_format_rendering() {
        let mut state = StyleState::new(Fidelity::Ansi);
        state.add_style(Underlined);
        state.add_style(Bold);
        state.add_style(Blinking);
        assert_eq!(state.render_parameters(), "5;1;4");

        state.remove_style(Bold + Blinking);
        assert_eq!(state.render_parameters(), "4");

        state.set_format(Reversed + Stricken + Thin + Italic);
        assert_eq!(state.render_parameters(), "9;3;2;7");

        state.reset_format();
        assert_eq!(state.render_parameters(), "");
    }

    #[test]
    fn test_render() {
        let mut state = StyleState::new(Fidelity::TwentyFourBit);
        state.set_foreground(Rgb::new(255, 0, 0));
        state.set_format(Bold);
        assert_eq!(&*state.render(b"hi"), b"\x1b[38;2;255;0;0;1mhi\x1b[0m");
        assert_eq!(format!("{}", state), "\x1b[38;2;255;0;0;1m");

        state.set_background(AnsiColor::WHITE);
        assert_eq!(&*state.render(b""), b"\x1b[38;2;255;0;0;47;1m\x1b[0m");
    }

    #[test]
    fn test_plain_output() {
        let mut state = StyleState::new(Fidelity::Plain);
        state.set_default_foreground();
        state.set_default_background();
        state.set_format(Bold + Underlined);
        assert_eq!(state.render_parameters(), "");
        assert_eq!(&*state.render(b"hi"), b"hi");
        assert_eq!(format!("{}", state), "");
    }

    #[test]
    fn test_fidelity_change() {
        let mut state = StyleState::new(Fidelity::TwentyFourBit);
        state.set_foreground(Rgb::new(1, 2, 3));
        state.set_background(AnsiColor::BLACK);
        state.set_fidelity(Fidelity::Ansi);
        assert_eq!(state.foreground(), None);
        assert_eq!(state.background(), Some(&Colorant::Ansi(AnsiColor::BLACK)));
        assert_eq!(state.render_parameters(), "40");
        state.set_fidelity(Fidelity::Plain);
        assert_eq!(state.background(), None);
        assert_eq!(state.render_parameters(), "");

        state.set_fidelity(Fidelity::TwentyFourBit);
        assert_eq!(state.foreground(), Some(&Colorant::Rgb(Rgb::new(1, 2, 3))));
        assert_eq!(state.render_parameters(), "38;2;1;2;3;40");
    }

    #[test]
    fn test_default_colors_survive_plain() {
        let mut state = StyleState::new(Fidelity::Ansi);
        state.set_default_foreground();
        state.set_default_background();
        state.set_fidelity(Fidelity::Plain);
        assert_eq!(format!("{}", state), "");
        state.set_fidelity(Fidelity::Ansi);
        assert_eq!(state.render_parameters(), "39;49");

        // The order of setting the color and the fidelity does not matter.
        let mut state = StyleState::new(Fidelity::Plain);
        state.set_default_foreground();
        state.set_fidelity(Fidelity::Ansi);
        assert_eq!(state.render_parameters(), "39");
    }
}

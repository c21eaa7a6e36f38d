//! Terminal color representations.
//!
//! This module offers [`AnsiColor`], [`EmbeddedRgb`], [`GrayGradient`], and
//! [`Rgb`] as the color representations used by terminals. All of them can be
//! wrapped as [`Colorant`]s, which also include a variant for the terminal's
//! default color.
//!
//! Every colorant belongs to exactly one [`Fidelity`] level, which is
//! determined by its variant when it is created. The ANSI colors and the
//! default color need [`Fidelity::Ansi`], 8-bit indexed colors need
//! [`Fidelity::EightBit`], and 24-bit colors need [`Fidelity::TwentyFourBit`].
//! Colorants are never converted between levels. A terminal that cannot display
//! a colorant simply does not get it.

use crate::error::OutOfBoundsError;
use crate::style::{Fidelity, Layer};

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// One of the 16 extended ANSI colors.
///
/// Unlike the other color representations, an ANSI color can be created from
/// any index with [`AnsiColor::new`]. Only indices `0..=15` denote actual
/// colors. An ANSI color with any other index is displayed as the terminal's
/// default color, i.e., with SGR parameter `39` for the foreground and `49`
/// for the background. Use [`AnsiColor as
/// TryFrom<u8>`](struct.AnsiColor.html#impl-TryFrom%3Cu8%3E-for-AnsiColor) to
/// reject such indices instead.
///
/// ```
/// # use tout::style::Layer;
/// # use tout::termco::AnsiColor;
/// assert_eq!(AnsiColor::BRIGHT_RED.sgr(Layer::Foreground), 91);
/// assert_eq!(AnsiColor::new(99).sgr(Layer::Foreground), 39);
/// assert!(AnsiColor::try_from(99_u8).is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnsiColor(u8);

impl AnsiColor {
    pub const BLACK: AnsiColor = AnsiColor(0);
    pub const RED: AnsiColor = AnsiColor(1);
    pub const GREEN: AnsiColor = AnsiColor(2);
    pub const YELLOW: AnsiColor = AnsiColor(3);
    pub const BLUE: AnsiColor = AnsiColor(4);
    pub const MAGENTA: AnsiColor = AnsiColor(5);
    pub const CYAN: AnsiColor = AnsiColor(6);
    pub const WHITE: AnsiColor = AnsiColor(7);
    pub const BRIGHT_BLACK: AnsiColor = AnsiColor(8);
    pub const BRIGHT_RED: AnsiColor = AnsiColor(9);
    pub const BRIGHT_GREEN: AnsiColor = AnsiColor(10);
    pub const BRIGHT_YELLOW: AnsiColor = AnsiColor(11);
    pub const BRIGHT_BLUE: AnsiColor = AnsiColor(12);
    pub const BRIGHT_MAGENTA: AnsiColor = AnsiColor(13);
    pub const BRIGHT_CYAN: AnsiColor = AnsiColor(14);
    pub const BRIGHT_WHITE: AnsiColor = AnsiColor(15);

    /// Create a new ANSI color from an arbitrary index.
    ///
    /// This constructor does not validate the index. Out-of-range indices
    /// render as the default color.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get an iterator over all valid ANSI colors in order.
    pub fn all() -> AnsiColorIterator {
        AnsiColorIterator::new()
    }

    /// Get this color's index.
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Determine whether this color's index is in `0..=15`.
    pub const fn is_valid(&self) -> bool {
        self.0 < 16
    }

    /// Determine whether this ANSI color is bright.
    pub const fn is_bright(&self) -> bool {
        8 <= self.0 && self.0 < 16
    }

    /// Get the base version of this ANSI color.
    ///
    /// If this color is bright, this method returns its non-bright version.
    /// Otherwise, it returns the same color.
    pub const fn to_base(&self) -> AnsiColor {
        if self.is_bright() {
            Self(self.0 - 8)
        } else {
            *self
        }
    }

    /// Get the bright version of this ANSI color.
    ///
    /// If the color is not bright, this method returns its bright version.
    /// Otherwise, it returns the same color.
    pub const fn to_bright(&self) -> AnsiColor {
        if self.0 < 8 {
            Self(self.0 + 8)
        } else {
            *self
        }
    }

    /// Get the SGR parameter for this color on the given layer.
    pub const fn sgr(&self, layer: Layer) -> u8 {
        let base = match self.0 {
            0..=7 => 30 + self.0,
            8..=15 => 90 + self.0 - 8,
            _ => 39,
        };
        base + layer.offset()
    }

    /// Get this ANSI color's name.
    ///
    /// This method returns the human-readable name, e.g., `"bright green"` for
    /// [`AnsiColor::BRIGHT_GREEN`], or `None` for an out-of-range index.
    pub const fn name(&self) -> Option<&'static str> {
        Some(match self.0 {
            0 => "black",
            1 => "red",
            2 => "green",
            3 => "yellow",
            4 => "blue",
            5 => "magenta",
            6 => "cyan",
            7 => "white",
            8 => "bright black",
            9 => "bright red",
            10 => "bright green",
            11 => "bright yellow",
            12 => "bright blue",
            13 => "bright magenta",
            14 => "bright cyan",
            15 => "bright white",
            _ => return None,
        })
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 16 {
            Ok(Self(value))
        } else {
            Err(OutOfBoundsError::new(value, 0..=15))
        }
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value.index()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over ANSI colors.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[derive(Debug)]
pub struct AnsiColorIterator {
    index: u8,
}

impl AnsiColorIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for AnsiColorIterator {
    type Item = AnsiColor;

    fn next(&mut self) -> Option<Self::Item> {
        if 16 <= self.index {
            None
        } else {
            let index = self.index;
            self.index += 1;
            Some(AnsiColor(index))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 16 - self.index as usize;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for AnsiColorIterator {
    fn len(&self) -> usize {
        16 - self.index as usize
    }
}

impl std::iter::FusedIterator for AnsiColorIterator {}

// ====================================================================================================================
// The Embedded 6x6x6 RGB Cube
// ====================================================================================================================

/// The 6x6x6 RGB cube embedded in 8-bit terminal colors.
///
/// ```
/// # use tout::termco::EmbeddedRgb;
/// # use tout::error::OutOfBoundsError;
/// let orange = EmbeddedRgb::new(5, 2, 0)?;
/// let orange_too = EmbeddedRgb::try_from(208_u8)?;
/// assert_eq!(orange, orange_too);
/// assert_eq!(u8::from(orange), 208);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmbeddedRgb([u8; 3]);

impl EmbeddedRgb {
    /// Create a new embedded RGB value from its coordinates.
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self, OutOfBoundsError> {
        if 6 <= r {
            Err(OutOfBoundsError::new(r, 0..=5))
        } else if 6 <= g {
            Err(OutOfBoundsError::new(g, 0..=5))
        } else if 6 <= b {
            Err(OutOfBoundsError::new(b, 0..=5))
        } else {
            Ok(Self([r, g, b]))
        }
    }
}

impl TryFrom<u8> for EmbeddedRgb {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(16..=231).contains(&value) {
            Err(OutOfBoundsError::new(value, 16..=231))
        } else {
            let mut b = value - 16;
            let r = b / 36;
            b -= r * 36;
            let g = b / 6;
            b -= g * 6;

            Self::new(r, g, b)
        }
    }
}

impl From<EmbeddedRgb> for u8 {
    fn from(value: EmbeddedRgb) -> u8 {
        let [r, g, b] = value.0;
        16 + 36 * r + 6 * g + b
    }
}

// ====================================================================================================================
// Gray Gradient
// ====================================================================================================================

/// The 24-step gray gradient embedded in 8-bit terminal colors.
///
/// ```
/// # use tout::termco::GrayGradient;
/// # use tout::error::OutOfBoundsError;
/// let almost_black = GrayGradient::new(4)?;
/// let almost_black_too = GrayGradient::try_from(236_u8)?;
/// assert_eq!(almost_black, almost_black_too);
/// assert_eq!(almost_black.level(), 4);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GrayGradient(u8);

impl GrayGradient {
    /// Create a new gray gradient color from its level `0..=23`.
    pub fn new(level: u8) -> Result<Self, OutOfBoundsError> {
        if level <= 23 {
            Ok(Self(level))
        } else {
            Err(OutOfBoundsError::new(level, 0..=23))
        }
    }

    /// Access the gray level.
    pub const fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for GrayGradient {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 232 {
            Err(OutOfBoundsError::new(value, 232..=255))
        } else {
            Self::new(value - 232)
        }
    }
}

impl From<GrayGradient> for u8 {
    fn from(value: GrayGradient) -> u8 {
        232 + value.0
    }
}

// ====================================================================================================================
// Rgb ("True Color")
// ====================================================================================================================

/// A "true," 24-bit RGB color.
///
/// ```
/// # use tout::termco::Rgb;
/// let sand = Rgb::new(0xee, 0xdc, 0xad);
/// assert_eq!(sand, Rgb::from(0xeedcad_u32));
/// assert_eq!(sand.as_ref(), &[238_u8, 220, 173]);
/// assert_eq!(format!("{}", sand), "#eedcad");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new true color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<u32> for Rgb {
    /// Convert a `0xRRGGBB` value. The top byte is ignored.
    fn from(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self([r, g, b])
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// ====================================================================================================================
// Colorant
// ====================================================================================================================

/// A terminal color.
///
/// This enumeration unifies the default color, ANSI colors, 8-bit indexed
/// colors, and 24-bit colors. The variant fixes the [`Fidelity`] a terminal
/// needs for displaying the colorant, as reported by [`Colorant::fidelity`].
///
/// ```
/// # use tout::style::{Fidelity, Layer};
/// # use tout::termco::{AnsiColor, Colorant, Rgb};
/// let red = Colorant::from(Rgb::new(255, 0, 0));
/// assert_eq!(red.fidelity(), Fidelity::TwentyFourBit);
/// assert_eq!(red.foreground_code(), "38;2;255;0;0");
/// assert_eq!(red.background_code(), "48;2;255;0;0");
///
/// let red = Colorant::from(AnsiColor::RED);
/// assert_eq!(red.fidelity(), Fidelity::Ansi);
/// assert_eq!(red.sgr(Layer::Background), "41");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colorant {
    /// The terminal's default foreground or background color.
    Default(),
    /// One of the 16 ANSI colors.
    Ansi(AnsiColor),
    /// An 8-bit indexed color.
    EightBit(u8),
    /// A 24-bit color.
    Rgb(Rgb),
}

impl Colorant {
    /// Determine the fidelity required for displaying this colorant.
    pub fn fidelity(&self) -> Fidelity {
        Fidelity::from(self)
    }

    /// Write the SGR parameters for this colorant on the given layer.
    ///
    /// This method writes only the parameters, i.e., neither the leading
    /// control sequence introducer nor the trailing `m`.
    pub fn write_sgr_params(
        &self,
        layer: Layer,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Default() => write!(f, "{}", 39 + layer.offset()),
            Self::Ansi(c) => write!(f, "{}", c.sgr(layer)),
            Self::EightBit(c) => write!(f, "{};5;{}", 38 + layer.offset(), c),
            Self::Rgb(c) => write!(f, "{};2;{};{};{}", 38 + layer.offset(), c[0], c[1], c[2]),
        }
    }

    /// Get the SGR parameters for this colorant on the given layer.
    pub fn sgr(&self, layer: Layer) -> String {
        LayeredColorant {
            layer,
            colorant: self,
        }
        .to_string()
    }

    /// Get the SGR parameters for using this colorant as foreground color.
    pub fn foreground_code(&self) -> String {
        self.sgr(Layer::Foreground)
    }

    /// Get the SGR parameters for using this colorant as background color.
    pub fn background_code(&self) -> String {
        self.sgr(Layer::Background)
    }
}

impl From<AnsiColor> for Colorant {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi(value)
    }
}

impl From<EmbeddedRgb> for Colorant {
    fn from(value: EmbeddedRgb) -> Self {
        Self::EightBit(value.into())
    }
}

impl From<GrayGradient> for Colorant {
    fn from(value: GrayGradient) -> Self {
        Self::EightBit(value.into())
    }
}

impl From<Rgb> for Colorant {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A colorant on a layer, ready for display.
struct LayeredColorant<'a> {
    layer: Layer,
    colorant: &'a Colorant,
}

impl std::fmt::Display for LayeredColorant<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.colorant.write_sgr_params(self.layer, f)
    }
}

// ====================================================================================================================

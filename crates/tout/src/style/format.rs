/// A text attribute other than regular.
///
/// This enumeration models attributes that differ from the default appearance.
/// Discriminants are powers of two and hence can be combined into a bit vector,
/// i.e., a [`Format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold = 0x1,
    /// Light or half-bright text.
    Thin = 0x2,
    Italic = 0x4,
    Underlined = 0x8,
    Blinking = 0x10,
    Reversed = 0x20,
    /// Crossed-out text.
    Stricken = 0x40,
}

impl Attribute {
    /// All attributes in display order.
    ///
    /// Formats emit their SGR parameters in this order, no matter their bit
    /// values or the order in which they were added. Terminal output depends on
    /// it and it must not change.
    pub const DISPLAY_ORDER: [Attribute; 7] = [
        Attribute::Blinking,
        Attribute::Bold,
        Attribute::Stricken,
        Attribute::Underlined,
        Attribute::Italic,
        Attribute::Thin,
        Attribute::Reversed,
    ];

    #[inline]
    const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Get the SGR parameter for enabling this attribute.
    pub const fn enable_sgr(&self) -> u8 {
        use self::Attribute::*;

        match self {
            Bold => 1,
            Thin => 2,
            Italic => 3,
            Underlined => 4,
            Blinking => 5,
            Reversed => 7,
            Stricken => 9,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A text format combining zero or more text attributes.
///
/// A format is a bit set of [`Attribute`]s. It supports union with `+`,
/// difference with `-`, and membership tests with [`Format::contains`].
///
/// ```
/// # use tout::style::{Attribute, Format};
/// let format = Attribute::Bold + Attribute::Underlined + Attribute::Blinking;
/// assert_eq!(format.len(), 3);
/// assert!(format.contains(Attribute::Bold));
///
/// let format = format - Attribute::Bold;
/// assert!(!format.contains(Attribute::Bold));
/// assert_eq!(format!("{:?}", format), "{Blinking, Underlined}");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Format(u8);

impl Format {
    /// Create a new empty format.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    const fn bits(&self) -> u8 {
        self.0
    }

    /// Determine whether this format is the default format.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Get the number of format attributes that diverge from the default
    /// formatting.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Determine whether this format includes all attributes of the other
    /// format.
    pub fn contains<F: Into<Format>>(&self, other: F) -> bool {
        let other = other.into().bits();
        self.0 & other == other
    }

    /// Add the attributes of the other format.
    pub fn insert<F: Into<Format>>(&mut self, other: F) {
        self.0 |= other.into().bits();
    }

    /// Remove the attributes of the other format.
    pub fn remove<F: Into<Format>>(&mut self, other: F) {
        self.0 &= !other.into().bits();
    }

    /// Remove all attributes.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Get an iterator over the non-default text attributes.
    ///
    /// The iterator yields attributes in [`Attribute::DISPLAY_ORDER`].
    #[inline]
    pub const fn attributes(&self) -> AttributeIter {
        AttributeIter {
            format: *self,
            cursor: 0,
            remaining: self.len(),
        }
    }
}

impl std::fmt::Debug for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.attributes()).finish()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// An iterator over text attributes.
#[derive(Debug)]
pub struct AttributeIter {
    format: Format,
    cursor: usize,
    remaining: usize,
}

impl std::iter::Iterator for AttributeIter {
    type Item = Attribute;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(attr) = Attribute::DISPLAY_ORDER.get(self.cursor) {
            self.cursor += 1;
            if self.format.bits() & attr.bits() != 0 {
                self.remaining -= 1;
                return Some(*attr);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AttributeIter {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl std::iter::FusedIterator for AttributeIter {}

// ----------------------------------------------------------------------------------------------------------
// From

impl From<Attribute> for Format {
    fn from(value: Attribute) -> Self {
        Self(value.bits())
    }
}

impl FromIterator<Attribute> for Format {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut format = Format::empty();
        for attr in iter {
            format.insert(attr);
        }
        format
    }
}

// ----------------------------------------------------------------------------------------------------------
// Add

impl std::ops::Add for Attribute {
    type Output = Format;

    fn add(self, other: Self) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add<Format> for Attribute {
    type Output = Format;

    fn add(self, other: Format) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add<Attribute> for Format {
    type Output = Format;

    fn add(self, other: Attribute) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

impl std::ops::Add for Format {
    type Output = Format;

    fn add(self, other: Self) -> Self::Output {
        Format(self.bits() | other.bits())
    }
}

// ----------------------------------------------------------------------------------------------------------
// Sub

impl std::ops::Sub<Attribute> for Format {
    type Output = Format;

    fn sub(self, other: Attribute) -> Self::Output {
        Format(self.bits() & !other.bits())
    }
}

impl std::ops::Sub for Format {
    type Output = Format;

    fn sub(self, other: Self) -> Self::Output {
        Format(self.bits() & !other.bits())
    }
}

//! Utility module with tout's errors.
//!
//! Rendering styles never fails. Errors only arise from the strict color
//! constructors, which reject indices outside their range, and from the
//! underlying sinks, which report [`std::io::Error`]s.

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=5` for coordinates of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `0..=15` for index values of [`AnsiColor`](crate::termco::AnsiColor);
///   * `0..=23` for the gray levels of [`GrayGradient`](crate::termco::GrayGradient);
///   * `16..=231` for index values of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `232..=255` for index values of [`GrayGradient`](crate::termco::GrayGradient).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

impl From<OutOfBoundsError> for std::io::Error {
    fn from(value: OutOfBoundsError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, value)
    }
}

#[cfg(test)]
mod test {
    use super::OutOfBoundsError;

    #[test]
    fn test_display() {
        let error = OutOfBoundsError::new(99_u8, 0..=15);
        assert_eq!(error.to_string(), "99 does not fit into range 0..=15");

        let io: std::io::Error = error.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidInput);
    }
}

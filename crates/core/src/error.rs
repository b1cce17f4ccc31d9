use core::fmt;

/// Errors reported when configuring a display.
///
/// Unknown characters, over-long text and out-of-range element indices are
/// never errors; they are absorbed by the display.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// The cell count is not a non-negative integer.
    ///
    /// This is the configuration error for the `cell_count` field. It has its
    /// own variant because counts also arrive as text through
    /// [`ElementArray::resize_from_str`](crate::ElementArray::resize_from_str).
    InvalidCount,
    /// A configuration field is outside its allowed range.
    InvalidConfiguration(&'static str),
    /// A colour string is not of the form `#RRGGBB`.
    InvalidColor,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCount => f.write_str("invalid element count"),
            Self::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
            Self::InvalidColor => f.write_str("invalid colour, expected #RRGGBB"),
        }
    }
}

impl core::error::Error for Error {}

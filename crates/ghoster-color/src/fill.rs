//! Fill color configuration
//!
//! The fill color is the fixed RGB color applied uniformly to every output
//! pixel of the ghost transform, independent of the source image's color.
//! It is configured from a `#RRGGBB` hex string and defaults to opaque
//! black fill.

use crate::{ColorError, ColorResult};
use std::str::FromStr;

/// The uniform foreground color of a ghosted image.
///
/// Defaults to black (0, 0, 0).
///
/// # Examples
///
/// ```
/// use ghoster_color::FillColor;
///
/// let fill: FillColor = "#4e21ed".parse().unwrap();
/// assert_eq!(fill, FillColor::new(0x4e, 0x21, 0xed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillColor {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl FillColor {
    /// Create a fill color from its RGB components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for FillColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}

impl FromStr for FillColor {
    type Err = ColorError;

    /// Parse a `#RRGGBB` hex string (case-insensitive digits).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] unless the input is
    /// exactly `#` followed by 6 hex digits.
    fn from_str(s: &str) -> ColorResult<Self> {
        let invalid = || ColorError::InvalidColorFormat(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let red = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
        let green = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
        let blue = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;

        Ok(Self { red, green, blue })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase() {
        let fill: FillColor = "#4e21ed".parse().unwrap();
        assert_eq!(fill.red, 78);
        assert_eq!(fill.green, 33);
        assert_eq!(fill.blue, 237);
    }

    #[test]
    fn test_parse_uppercase_and_mixed() {
        let fill: FillColor = "#FFAA00".parse().unwrap();
        assert_eq!(fill, FillColor::new(255, 170, 0));

        let fill: FillColor = "#fFaA0c".parse().unwrap();
        assert_eq!(fill, FillColor::new(255, 170, 12));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "bad", "#ggg123", "4e21ed", "#4e21e", "#4e21ed0", "", "#", "# e21ed", "#4e21é",
        ] {
            let err = input.parse::<FillColor>().unwrap_err();
            assert!(
                matches!(err, ColorError::InvalidColorFormat(ref s) if s == input),
                "input {input:?} produced {err:?}"
            );
        }
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(FillColor::default(), FillColor::new(0, 0, 0));
    }

    #[test]
    fn test_from_tuple() {
        let fill: FillColor = (1, 2, 3).into();
        assert_eq!(fill, FillColor::new(1, 2, 3));
    }
}

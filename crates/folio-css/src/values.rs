//! Declared-value types: colors and single length tokens.

use std::fmt;

/// CSS color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color (#RGB, #RRGGBB, #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse a named color
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "cyan" | "aqua" => Self::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Self::rgb(255, 0, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "silver" => Self::rgb(192, 192, 192),
            "maroon" => Self::rgb(128, 0, 0),
            "olive" => Self::rgb(128, 128, 0),
            "lime" => Self::rgb(0, 255, 0),
            "navy" => Self::rgb(0, 0, 128),
            "purple" => Self::rgb(128, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            _ => return None,
        })
    }

    /// Fully transparent colors paint nothing
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// Units recognized in a single declared length token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssUnit {
    None,
    Ems,
    Ex,
    Pixels,
    Inches,
    Centimeters,
    Millimeters,
    Points,
    Picas,
}

impl CssUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "em" => Self::Ems,
            "ex" => Self::Ex,
            "px" => Self::Pixels,
            "in" => Self::Inches,
            "cm" => Self::Centimeters,
            "mm" => Self::Millimeters,
            "pt" => Self::Points,
            "pc" => Self::Picas,
            _ => return None,
        })
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ems => "em",
            Self::Ex => "ex",
            Self::Pixels => "px",
            Self::Inches => "in",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
            Self::Points => "pt",
            Self::Picas => "pc",
        }
    }
}

/// A single parsed CSS length token.
///
/// Malformed input sets the error flag instead of failing; a bare number
/// with no unit counts as malformed (percentages aside).
#[derive(Debug, Clone)]
pub struct CssLength {
    number: f64,
    unit: CssUnit,
    is_percentage: bool,
    has_error: bool,
}

impl CssLength {
    pub fn new(length: &str) -> Self {
        let length = length.trim();
        if length.is_empty() || length == "0" {
            return Self {
                number: 0.0,
                unit: CssUnit::None,
                is_percentage: false,
                has_error: false,
            };
        }

        if let Some(number) = length.strip_suffix('%') {
            return match number.trim().parse::<f64>() {
                Ok(number) => Self {
                    number,
                    unit: CssUnit::None,
                    is_percentage: true,
                    has_error: false,
                },
                Err(_) => Self::error(),
            };
        }

        if length.len() < 3 || !length.is_char_boundary(length.len() - 2) {
            return Self::error();
        }
        let (number, suffix) = length.split_at(length.len() - 2);
        let Some(unit) = CssUnit::from_suffix(suffix) else {
            return Self::error();
        };
        match number.trim().parse::<f64>() {
            Ok(number) => Self {
                number,
                unit,
                is_percentage: false,
                has_error: false,
            },
            Err(_) => Self::error(),
        }
    }

    fn error() -> Self {
        Self {
            number: 0.0,
            unit: CssUnit::None,
            is_percentage: false,
            has_error: true,
        }
    }

    pub fn number(&self) -> f64 {
        self.number
    }

    pub fn unit(&self) -> CssUnit {
        self.unit
    }

    pub fn is_percentage(&self) -> bool {
        self.is_percentage
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Lengths that depend on context rather than being absolute
    pub fn is_relative(&self) -> bool {
        self.is_percentage || matches!(self.unit, CssUnit::Ems | CssUnit::Ex)
    }

    /// Convert an em length to an absolute pixel length against `factor`.
    /// Non-em lengths are returned unchanged.
    pub fn convert_em_to_pixels(&self, factor: f64) -> CssLength {
        if self.unit != CssUnit::Ems {
            return self.clone();
        }
        CssLength {
            number: self.number * factor,
            unit: CssUnit::Pixels,
            is_percentage: false,
            has_error: false,
        }
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_error {
            return Ok(());
        }
        if self.is_percentage {
            return write!(f, "{}%", self.number);
        }
        write!(f, "{}{}", self.number, self.unit.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#f00"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("#ff000080"), Some(Color::rgba(255, 0, 0, 128)));
        assert_eq!(Color::from_hex("#zzz"), None);
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("black"), Some(Color::BLACK));
        assert_eq!(Color::from_name("transparent"), Some(Color::TRANSPARENT));
        assert_eq!(Color::from_name("no-such-color"), None);
    }

    #[test]
    fn test_length_units() {
        let len = CssLength::new("12px");
        assert_eq!(len.number(), 12.0);
        assert_eq!(len.unit(), CssUnit::Pixels);
        assert!(!len.has_error());

        let len = CssLength::new("1.5em");
        assert_eq!(len.number(), 1.5);
        assert_eq!(len.unit(), CssUnit::Ems);
        assert!(len.is_relative());
    }

    #[test]
    fn test_length_percentage() {
        let len = CssLength::new("50%");
        assert_eq!(len.number(), 50.0);
        assert!(len.is_percentage());
        assert!(!len.has_error());
    }

    #[test]
    fn test_length_malformed() {
        // A bare number carries no unit and is malformed
        assert!(CssLength::new("42").has_error());
        assert!(CssLength::new("12zz").has_error());
        assert!(CssLength::new("px").has_error());
        // Zero needs no unit
        assert!(!CssLength::new("0").has_error());
    }

    #[test]
    fn test_em_to_pixels() {
        let len = CssLength::new("2em").convert_em_to_pixels(11.0);
        assert_eq!(len.number(), 22.0);
        assert_eq!(len.unit(), CssUnit::Pixels);
        assert_eq!(len.to_string(), "22px");
    }
}

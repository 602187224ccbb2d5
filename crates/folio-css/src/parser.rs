//! Declared-value parsing.
//!
//! Stateless helpers that turn a raw declared string plus numeric context
//! (percent base, em factor) into a resolved number or color. All functions
//! are total: unparseable input resolves to `0` or `None`, never an error,
//! so a single bad declaration cannot abort rendering.

use crate::constants;
use crate::values::{Color, CssLength, CssUnit};

/// Parse a plain number, or a percentage of `hundred_percent`.
pub fn parse_number(raw: &str, hundred_percent: f64) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    if let Some(number) = raw.strip_suffix('%') {
        return number
            .trim()
            .parse::<f64>()
            .map_or(0.0, |n| n / 100.0 * hundred_percent);
    }
    raw.parse().unwrap_or(0.0)
}

/// Resolve a declared length to device pixels.
///
/// Percentages resolve against `hundred_percent`; `em`/`ex` against
/// `em_factor`. A bare number without a unit is malformed and resolves
/// to zero.
pub fn parse_length(raw: &str, hundred_percent: f64, em_factor: f64) -> f64 {
    parse_length_with_default(raw, hundred_percent, em_factor, None)
}

/// Same as [`parse_length`], but a bare number assumes `default_unit`.
pub fn parse_length_with_default(
    raw: &str,
    hundred_percent: f64,
    em_factor: f64,
    default_unit: Option<CssUnit>,
) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() || raw == "0" {
        return 0.0;
    }
    if raw.ends_with('%') {
        return parse_number(raw, hundred_percent);
    }

    let (number, unit) = split_unit(raw, default_unit);
    let factor = match unit {
        CssUnit::Ems => em_factor,
        CssUnit::Ex => em_factor / 2.0,
        CssUnit::Pixels => 1.0,
        CssUnit::Points => 96.0 / 72.0,
        CssUnit::Inches => 96.0,
        CssUnit::Centimeters => 37.8,
        CssUnit::Millimeters => 3.78,
        CssUnit::Picas => 16.0,
        CssUnit::None => return 0.0,
    };
    number.trim().parse::<f64>().map_or(0.0, |n| factor * n)
}

fn split_unit(raw: &str, default_unit: Option<CssUnit>) -> (&str, CssUnit) {
    if raw.len() >= 3 && raw.is_char_boundary(raw.len() - 2) {
        let (number, suffix) = raw.split_at(raw.len() - 2);
        if let Some(unit) = unit_from_suffix(suffix) {
            return (number, unit);
        }
    }
    (raw, default_unit.unwrap_or(CssUnit::None))
}

fn unit_from_suffix(suffix: &str) -> Option<CssUnit> {
    Some(match suffix {
        "em" => CssUnit::Ems,
        "ex" => CssUnit::Ex,
        "px" => CssUnit::Pixels,
        "in" => CssUnit::Inches,
        "cm" => CssUnit::Centimeters,
        "mm" => CssUnit::Millimeters,
        "pt" => CssUnit::Points,
        "pc" => CssUnit::Picas,
        _ => return None,
    })
}

/// Resolve a declared font size against the parent's resolved size.
///
/// `em` and `%` are relative to the parent size; `px` maps one to one.
/// Keywords are handled by the caller, a malformed length resolves to zero
/// (which the caller clamps to the base size).
pub fn parse_font_size(raw: &str, parent_size: f64) -> f64 {
    parse_length(raw, parent_size, parent_size)
}

/// Resolve a declared border width: keyword or length.
pub fn parse_border_width(raw: &str, em_factor: f64) -> f64 {
    match raw.trim() {
        "" | "medium" => constants::BORDER_WIDTH_MEDIUM,
        "thin" => constants::BORDER_WIDTH_THIN,
        "thick" => constants::BORDER_WIDTH_THICK,
        value => parse_length(value, 1.0, em_factor).abs(),
    }
}

/// Parse a declared color: named, `#hex`, `rgb()` or `rgba()`.
pub fn parse_color(raw: &str) -> Option<Color> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with('#') {
        return Color::from_hex(raw);
    }
    if let Some(args) = raw.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
        return parse_rgb_args(args, true);
    }
    if let Some(args) = raw.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        return parse_rgb_args(args, false);
    }
    Color::from_name(raw)
}

fn parse_rgb_args(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if with_alpha { 4 } else { 3 } {
        return None;
    }
    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    let a = if with_alpha {
        let alpha = parts[3].parse::<f64>().ok()?;
        if alpha <= 1.0 {
            (alpha * 255.0).round() as u8
        } else {
            alpha.min(255.0) as u8
        }
    } else {
        255
    };
    Some(Color::rgba(r, g, b, a))
}

/// Extract the valid length tokens from a space-separated list, skipping
/// malformed tokens. Feeds shorthand expansion and border spacing; a bare
/// number counts as a token here (its missing unit resolves it to zero
/// later).
pub fn match_lengths(raw: &str) -> Vec<&str> {
    raw.split_whitespace()
        .filter(|token| token.parse::<f64>().is_ok() || !CssLength::new(token).has_error())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1.5", 0.0), 1.5);
        assert_eq!(parse_number("50%", 200.0), 100.0);
        assert_eq!(parse_number("bogus", 100.0), 0.0);
        assert_eq!(parse_number("", 100.0), 0.0);
    }

    #[test]
    fn test_parse_length_units() {
        assert_eq!(parse_length("10px", 0.0, 0.0), 10.0);
        assert_eq!(parse_length("2em", 0.0, 11.0), 22.0);
        assert_eq!(parse_length("2ex", 0.0, 11.0), 11.0);
        assert_eq!(parse_length("72pt", 0.0, 0.0), 96.0);
        assert_eq!(parse_length("1in", 0.0, 0.0), 96.0);
        assert_eq!(parse_length("50%", 200.0, 0.0), 100.0);
    }

    #[test]
    fn test_parse_length_malformed() {
        // Keywords and unitless numbers resolve to zero
        assert_eq!(parse_length("auto", 100.0, 10.0), 0.0);
        assert_eq!(parse_length("normal", 100.0, 10.0), 0.0);
        assert_eq!(parse_length("42", 100.0, 10.0), 0.0);
        assert_eq!(parse_length("", 100.0, 10.0), 0.0);
    }

    #[test]
    fn test_parse_length_default_unit() {
        // line-height style: a bare number is an em multiple
        let v = parse_length_with_default("1.5", 0.0, 10.0, Some(CssUnit::Ems));
        assert_eq!(v, 15.0);
    }

    #[test]
    fn test_parse_font_size() {
        assert_eq!(parse_font_size("20px", 11.0), 20.0);
        assert_eq!(parse_font_size("2em", 11.0), 22.0);
        assert_eq!(parse_font_size("150%", 10.0), 15.0);
        assert_eq!(parse_font_size("junk", 11.0), 0.0);
    }

    #[test]
    fn test_parse_border_width() {
        assert_eq!(parse_border_width("thin", 10.0), 1.0);
        assert_eq!(parse_border_width("medium", 10.0), 2.0);
        assert_eq!(parse_border_width("thick", 10.0), 4.0);
        assert_eq!(parse_border_width("", 10.0), 2.0);
        assert_eq!(parse_border_width("5px", 10.0), 5.0);
        assert_eq!(parse_border_width("-5px", 10.0), 5.0);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("red"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parse_color("#0000ff"), Some(Color::rgb(0, 0, 255)));
        assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Color::rgb(1, 2, 3)));
        assert_eq!(
            parse_color("rgba(1, 2, 3, 0.5)"),
            Some(Color::rgba(1, 2, 3, 128))
        );
        assert_eq!(parse_color("bogus"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_match_lengths() {
        assert_eq!(match_lengths("5px 10px"), vec!["5px", "10px"]);
        assert_eq!(match_lengths("5px junk 10px"), vec!["5px", "10px"]);
        assert_eq!(match_lengths("5"), vec!["5"]);
        assert!(match_lengths("none").is_empty());
    }
}

//! Engine base constants.
//!
//! Root-context queries (a box with no parent) fall back to these rather
//! than failing.

/// Base font size in device pixels; anchor for the keyword size table.
pub const FONT_SIZE: f64 = 11.0;

/// Font family used when none is declared.
pub const DEFAULT_FONT_FAMILY: &str = "Segoe UI";

/// Resolved widths of the border width keywords
pub const BORDER_WIDTH_THIN: f64 = 1.0;
pub const BORDER_WIDTH_MEDIUM: f64 = 2.0;
pub const BORDER_WIDTH_THICK: f64 = 4.0;

/// Fallback declared value for a malformed font size
pub const MEDIUM: &str = "medium";

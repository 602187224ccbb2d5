//! Font handles and metrics.

use std::cell::Cell;

use crate::backend::TextMeasure;

/// Style flags applied to a resolved font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle { bold: false, italic: false };
    pub const BOLD: FontStyle = FontStyle { bold: true, italic: false };
    pub const ITALIC: FontStyle = FontStyle { bold: false, italic: true };
    pub const BOLD_ITALIC: FontStyle = FontStyle { bold: true, italic: true };
}

/// Raw metrics supplied by the font backend for one resolved font
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Line spacing in device pixels
    pub height: f64,
    /// Vertical offset of the underline from the top of the line
    pub underline_offset: f64,
}

/// A resolved font, shared by every box that requests the same
/// (family, size, style) triple.
///
/// Immutable once resolved, except for the whitespace width which is
/// measured once through the paint backend and cached on the handle.
#[derive(Debug)]
pub struct Font {
    family: String,
    size: f64,
    style: FontStyle,
    height: f64,
    underline_offset: f64,
    whitespace_width: Cell<Option<f64>>,
}

impl Font {
    pub(crate) fn new(family: &str, size: f64, style: FontStyle, metrics: FontMetrics) -> Self {
        Self {
            family: family.to_owned(),
            size,
            style,
            height: metrics.height,
            underline_offset: metrics.underline_offset,
            whitespace_width: Cell::new(None),
        }
    }

    /// Requested family name
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Em size in device pixels
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Line spacing in device pixels
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Vertical offset of the underline from the top of the line
    pub fn underline_offset(&self) -> f64 {
        self.underline_offset
    }

    /// Width of the whitespace between words, measured once and cached.
    pub fn whitespace_width(&self, g: &dyn TextMeasure) -> f64 {
        if let Some(width) = self.whitespace_width.get() {
            return width;
        }
        let width = g.measure_text(" ", self).width;
        self.whitespace_width.set(Some(width));
        width
    }
}

//! Capability interfaces to the concrete font and paint system.

use folio_geom::Size;

use crate::font::{Font, FontMetrics, FontStyle};

/// Errors surfaced by a font backend
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("font family not available: {0}")]
    UnknownFamily(String),
    #[error("no metrics for {family} at {size}px")]
    MetricsUnavailable { family: String, size: f64 },
}

/// Supplies real glyph metrics for resolved fonts.
///
/// Implemented once per output backend (rasterizer, document writer); the
/// style core never depends on a concrete backend type.
pub trait FontBackend {
    fn metrics(&self, family: &str, size: f64, style: FontStyle) -> Result<FontMetrics, FontError>;
}

/// Text measurement capability of the paint backend.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font: &Font) -> Size;
}

//! Font cache sharing and lazy whitespace measurement.

use std::cell::Cell;
use std::rc::Rc;

use folio_geom::Size;
use folio_text::{Font, FontBackend, FontCache, FontError, FontMetrics, FontStyle, TextMeasure};

struct StubBackend;

impl FontBackend for StubBackend {
    fn metrics(&self, _family: &str, size: f64, _style: FontStyle) -> Result<FontMetrics, FontError> {
        Ok(FontMetrics {
            height: size * 1.5,
            underline_offset: size,
        })
    }
}

struct CountingMeasure {
    calls: Cell<usize>,
}

impl TextMeasure for CountingMeasure {
    fn measure_text(&self, text: &str, _font: &Font) -> Size {
        self.calls.set(self.calls.get() + 1);
        Size::new(text.len() as f64 * 6.0, 10.0)
    }
}

#[test]
fn test_equal_triples_share_one_font() {
    let cache = FontCache::new(Box::new(StubBackend));

    let a = cache.resolve("Serif", 12.0, FontStyle::BOLD);
    let b = cache.resolve("Serif", 12.0, FontStyle::BOLD);
    let c = cache.resolve("Serif", 14.0, FontStyle::BOLD);

    assert!(Rc::ptr_eq(&a, &b));
    assert!(!Rc::ptr_eq(&a, &c));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_whitespace_measured_once_per_font() {
    let cache = FontCache::new(Box::new(StubBackend));
    let measure = CountingMeasure { calls: Cell::new(0) };

    let font = cache.resolve("Serif", 12.0, FontStyle::REGULAR);
    assert_eq!(font.whitespace_width(&measure), 6.0);
    assert_eq!(font.whitespace_width(&measure), 6.0);
    assert_eq!(measure.calls.get(), 1);

    // The measurement is cached on the shared handle, so another resolve
    // of the same triple sees it too
    let again = cache.resolve("Serif", 12.0, FontStyle::REGULAR);
    assert_eq!(again.whitespace_width(&measure), 6.0);
    assert_eq!(measure.calls.get(), 1);
}

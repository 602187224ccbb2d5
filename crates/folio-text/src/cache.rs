//! Shared font cache.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::backend::FontBackend;
use crate::font::{Font, FontMetrics, FontStyle};

/// Fonts are shared by value equality of the requested triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
    family: String,
    size: u64,
    style: FontStyle,
}

impl FontKey {
    fn new(family: &str, size: f64, style: FontStyle) -> Self {
        Self {
            family: family.to_owned(),
            size: size.to_bits(),
            style,
        }
    }
}

/// Resolves (family, size, style) triples to shared [`Font`] handles.
///
/// One instance per document tree (or shared between trees on the same
/// thread via `Rc`); nothing here is global or synchronized, a concurrent
/// render gets its own cache.
pub struct FontCache {
    backend: Box<dyn FontBackend>,
    fonts: RefCell<HashMap<FontKey, Rc<Font>>>,
}

impl FontCache {
    pub fn new(backend: Box<dyn FontBackend>) -> Self {
        Self {
            backend,
            fonts: RefCell::new(HashMap::new()),
        }
    }

    /// Resolve a triple to a shared handle.
    ///
    /// Idempotent: equal triples return the same handle. A backend failure
    /// falls back to approximate metrics rather than propagating, so
    /// resolution itself never fails.
    pub fn resolve(&self, family: &str, size: f64, style: FontStyle) -> Rc<Font> {
        let key = FontKey::new(family, size, style);
        if let Some(font) = self.fonts.borrow().get(&key) {
            return Rc::clone(font);
        }

        tracing::debug!("resolving font {} {}px", family, size);
        let metrics = self.backend.metrics(family, size, style).unwrap_or_else(|err| {
            tracing::warn!("font backend fallback for {}: {}", family, err);
            FontMetrics {
                height: size * 1.2,
                underline_offset: size,
            }
        });

        let font = Rc::new(Font::new(family, size, style, metrics));
        self.fonts.borrow_mut().insert(key, Rc::clone(&font));
        font
    }

    /// Number of resolved fonts
    pub fn len(&self) -> usize {
        self.fonts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.borrow().is_empty()
    }
}

impl fmt::Debug for FontCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontCache")
            .field("fonts", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FontError;

    struct StubBackend;

    impl FontBackend for StubBackend {
        fn metrics(
            &self,
            family: &str,
            size: f64,
            _style: FontStyle,
        ) -> Result<FontMetrics, FontError> {
            if family == "Missing" {
                return Err(FontError::UnknownFamily(family.to_owned()));
            }
            Ok(FontMetrics {
                height: size * 1.5,
                underline_offset: size * 1.1,
            })
        }
    }

    #[test]
    fn test_resolve_shares_handles() {
        let cache = FontCache::new(Box::new(StubBackend));

        let a = cache.resolve("Serif", 12.0, FontStyle::REGULAR);
        let b = cache.resolve("Serif", 12.0, FontStyle::REGULAR);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        // A different style is a different font
        let c = cache.resolve("Serif", 12.0, FontStyle::BOLD);
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_backend_metrics_stored() {
        let cache = FontCache::new(Box::new(StubBackend));
        let font = cache.resolve("Serif", 10.0, FontStyle::REGULAR);

        assert_eq!(font.size(), 10.0);
        assert_eq!(font.height(), 15.0);
        assert_eq!(font.underline_offset(), 11.0);
    }

    #[test]
    fn test_backend_failure_falls_back() {
        let cache = FontCache::new(Box::new(StubBackend));
        let font = cache.resolve("Missing", 10.0, FontStyle::REGULAR);

        assert_eq!(font.height(), 12.0);
        assert_eq!(cache.len(), 1);
    }
}

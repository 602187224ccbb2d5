//! Box arena and geometry facade.
//!
//! The tree owns every box in a flat arena; a box refers to its parent by
//! stable index only, so context lookups are O(1) and there is no shared
//! ownership between nodes. One tree is owned and mutated by exactly one
//! thread for its whole build/cascade/layout/paint lifetime.

use std::cell::Cell;
use std::rc::Rc;

use folio_geom::{Point, Rect, Size};
use folio_text::FontCache;

use crate::cascade::HoverBlock;
use crate::computed::ComputedCache;
use crate::parser;
use crate::properties::StyleProps;

/// Stable index of a box inside its tree.
///
/// Ids are handed out by [`BoxTree::new_box`] and never invalidated; using
/// an id from a different tree is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxId(u32);

impl BoxId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One rendered element: raw declared style, cached actual values, and the
/// location/size assigned by layout.
#[derive(Debug)]
pub struct StyledBox {
    pub(crate) props: StyleProps,
    pub(crate) cache: ComputedCache,
    pub(crate) location: Cell<Option<Point>>,
    pub(crate) size: Size,
    pub(crate) parent: Option<BoxId>,
    pub(crate) hover: Option<HoverBlock>,
}

/// Resolves the raw left/top offsets of a `position: fixed` box into an
/// absolute point. Implemented by the surrounding layout context; the
/// style core only calls through it.
pub trait PlacementHook {
    fn resolve(&self, left: &str, top: &str) -> Point;
}

/// Default placement: offsets parsed against a page size. Em offsets have
/// no font context here and resolve to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PagePlacement {
    pub page: Size,
}

impl PlacementHook for PagePlacement {
    fn resolve(&self, left: &str, top: &str) -> Point {
        Point::new(
            parser::parse_length(left, self.page.width, 0.0),
            parser::parse_length(top, self.page.height, 0.0),
        )
    }
}

/// Arena-owned tree of styled boxes.
///
/// The font cache is injected, never ambient: concurrent documents use
/// independent caches (or share one `Rc` on a single thread).
pub struct BoxTree {
    boxes: Vec<StyledBox>,
    pub(crate) fonts: Rc<FontCache>,
    pub(crate) placement: Box<dyn PlacementHook>,
}

impl BoxTree {
    pub fn new(fonts: Rc<FontCache>) -> Self {
        Self {
            boxes: Vec::new(),
            fonts,
            placement: Box::new(PagePlacement::default()),
        }
    }

    pub fn with_placement(fonts: Rc<FontCache>, placement: Box<dyn PlacementHook>) -> Self {
        Self {
            boxes: Vec::new(),
            fonts,
            placement,
        }
    }

    pub fn set_placement(&mut self, placement: Box<dyn PlacementHook>) {
        self.placement = placement;
    }

    pub fn fonts(&self) -> &FontCache {
        &self.fonts
    }

    /// Create a box with default declared values. The builder applies the
    /// cascade afterwards via
    /// [`inherit_style`](Self::inherit_style).
    pub fn new_box(&mut self, parent: Option<BoxId>) -> BoxId {
        let id = BoxId(self.boxes.len() as u32);
        self.boxes.push(StyledBox {
            props: StyleProps::default(),
            cache: ComputedCache::default(),
            location: Cell::new(None),
            size: Size::ZERO,
            parent,
            hover: None,
        });
        id
    }

    pub fn get(&self, id: BoxId) -> &StyledBox {
        &self.boxes[id.index()]
    }

    pub fn get_mut(&mut self, id: BoxId) -> &mut StyledBox {
        &mut self.boxes[id.index()]
    }

    pub fn parent(&self, id: BoxId) -> Option<BoxId> {
        self.get(id).parent
    }

    /// Number of boxes in the tree
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    // Geometry facade

    /// Location of the box. Assigned by layout for normal flow; computed
    /// on demand through the placement hook for `position: fixed` boxes.
    pub fn location(&self, id: BoxId) -> Point {
        let b = self.get(id);
        if let Some(location) = b.location.get() {
            return location;
        }
        if b.props.position == "fixed" {
            let location = self.placement.resolve(&b.props.left, &b.props.top);
            b.location.set(Some(location));
            return location;
        }
        Point::ZERO
    }

    pub fn set_location(&mut self, id: BoxId, location: Point) {
        self.get(id).location.set(Some(location));
    }

    /// Size of the box as assigned by layout
    pub fn size(&self, id: BoxId) -> Size {
        self.get(id).size
    }

    pub fn set_size(&mut self, id: BoxId, size: Size) {
        self.get_mut(id).size = size;
    }

    /// Bounds of the box
    pub fn bounds(&self, id: BoxId) -> Rect {
        Rect::new(self.location(id), self.size(id))
    }

    /// Width available for content, inside borders and padding.
    pub fn available_width(&self, id: BoxId) -> f64 {
        self.size(id).width
            - self.actual_border_left_width(id)
            - self.actual_padding_left(id)
            - self.actual_padding_right(id)
            - self.actual_border_right_width(id)
    }

    /// Right edge of the box
    pub fn actual_right(&self, id: BoxId) -> f64 {
        self.location(id).x + self.size(id).width
    }

    /// Move the right edge; only the width changes, the location holds.
    pub fn set_actual_right(&mut self, id: BoxId, value: f64) {
        let left = self.location(id).x;
        let height = self.size(id).height;
        self.get_mut(id).size = Size::new(value - left, height);
    }

    /// Bottom edge of the box
    pub fn actual_bottom(&self, id: BoxId) -> f64 {
        self.location(id).y + self.size(id).height
    }

    /// Move the bottom edge; only the height changes, the location holds.
    pub fn set_actual_bottom(&mut self, id: BoxId, value: f64) {
        let top = self.location(id).y;
        let width = self.size(id).width;
        self.get_mut(id).size = Size::new(width, value - top);
    }

    /// Left edge of the client rectangle, where content starts rendering
    pub fn client_left(&self, id: BoxId) -> f64 {
        self.location(id).x + self.actual_border_left_width(id) + self.actual_padding_left(id)
    }

    /// Top edge of the client rectangle, where content starts rendering
    pub fn client_top(&self, id: BoxId) -> f64 {
        self.location(id).y + self.actual_border_top_width(id) + self.actual_padding_top(id)
    }

    pub fn client_right(&self, id: BoxId) -> f64 {
        self.actual_right(id) - self.actual_padding_right(id) - self.actual_border_right_width(id)
    }

    pub fn client_bottom(&self, id: BoxId) -> f64 {
        self.actual_bottom(id)
            - self.actual_padding_bottom(id)
            - self.actual_border_bottom_width(id)
    }

    /// The content box: the bounds inset by border and padding on all
    /// sides.
    pub fn client_rectangle(&self, id: BoxId) -> Rect {
        Rect::from_ltrb(
            self.client_left(id),
            self.client_top(id),
            self.client_right(id),
            self.client_bottom(id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_text::{FontBackend, FontError, FontMetrics, FontStyle};

    struct StubBackend;

    impl FontBackend for StubBackend {
        fn metrics(
            &self,
            _family: &str,
            size: f64,
            _style: FontStyle,
        ) -> Result<FontMetrics, FontError> {
            Ok(FontMetrics {
                height: size * 1.2,
                underline_offset: size,
            })
        }
    }

    fn tree() -> BoxTree {
        BoxTree::new(Rc::new(FontCache::new(Box::new(StubBackend))))
    }

    #[test]
    fn test_new_box_parent_links() {
        let mut tree = tree();
        let root = tree.new_box(None);
        let child = tree.new_box(Some(root));

        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_unassigned_location_defaults_to_origin() {
        let mut tree = tree();
        let id = tree.new_box(None);
        assert_eq!(tree.location(id), Point::ZERO);
    }

    #[test]
    fn test_actual_right_setter_keeps_location() {
        let mut tree = tree();
        let id = tree.new_box(None);
        tree.set_location(id, Point::new(10.0, 20.0));
        tree.set_size(id, Size::new(100.0, 50.0));

        assert_eq!(tree.actual_right(id), 110.0);
        tree.set_actual_right(id, 150.0);
        assert_eq!(tree.location(id), Point::new(10.0, 20.0));
        assert_eq!(tree.size(id), Size::new(140.0, 50.0));

        tree.set_actual_bottom(id, 100.0);
        assert_eq!(tree.size(id), Size::new(140.0, 80.0));
    }

    #[test]
    fn test_fixed_position_location_from_hook() {
        let mut tree = tree();
        let id = tree.new_box(None);
        tree.get_mut(id).set_position("fixed");
        tree.set_left(id, "30px");
        tree.set_top(id, "40px");

        assert_eq!(tree.location(id), Point::new(30.0, 40.0));
    }
}

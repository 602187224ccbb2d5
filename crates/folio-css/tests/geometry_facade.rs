//! Geometry facade: derived edges, client rectangle and placement.

use std::rc::Rc;

use folio_css::{BoxId, BoxTree, PagePlacement, PlacementHook};
use folio_geom::{Point, Rect, Size};
use folio_text::{FontBackend, FontCache, FontError, FontMetrics, FontStyle};

struct StubBackend;

impl FontBackend for StubBackend {
    fn metrics(&self, _family: &str, size: f64, _style: FontStyle) -> Result<FontMetrics, FontError> {
        Ok(FontMetrics {
            height: size + 4.0,
            underline_offset: size,
        })
    }
}

fn new_tree() -> BoxTree {
    BoxTree::new(Rc::new(FontCache::new(Box::new(StubBackend))))
}

fn framed_box(tree: &mut BoxTree) -> BoxId {
    let id = tree.new_box(None);
    tree.set_location(id, Point::new(10.0, 10.0));
    tree.set_size(id, Size::new(200.0, 100.0));
    tree.get_mut(id).set_all_borders(Some("solid"), Some("5px"), None);
    tree.set_property(id, "padding-top", "10px");
    tree.set_property(id, "padding-right", "10px");
    tree.set_property(id, "padding-bottom", "10px");
    tree.set_property(id, "padding-left", "10px");
    id
}

#[test]
fn test_available_width_subtracts_frame() {
    let mut tree = new_tree();
    let id = framed_box(&mut tree);

    // 200 - 5 - 10 - 10 - 5
    assert_eq!(tree.available_width(id), 170.0);
}

#[test]
fn test_client_rectangle_is_content_box() {
    let mut tree = new_tree();
    let id = framed_box(&mut tree);

    assert_eq!(tree.client_left(id), 25.0);
    assert_eq!(tree.client_top(id), 25.0);
    assert_eq!(tree.client_right(id), 195.0);
    assert_eq!(tree.client_bottom(id), 95.0);
    assert_eq!(
        tree.client_rectangle(id),
        Rect::from_ltrb(25.0, 25.0, 195.0, 95.0)
    );
}

#[test]
fn test_borderless_client_rectangle_equals_bounds() {
    let mut tree = new_tree();
    let id = tree.new_box(None);
    tree.set_location(id, Point::new(10.0, 10.0));
    tree.set_size(id, Size::new(200.0, 100.0));

    assert_eq!(tree.bounds(id), Rect::from_xywh(10.0, 10.0, 200.0, 100.0));
    assert_eq!(tree.client_rectangle(id), tree.bounds(id));
}

#[test]
fn test_page_placement_resolves_fixed_offsets() {
    let fonts = Rc::new(FontCache::new(Box::new(StubBackend)));
    let placement = PagePlacement {
        page: Size::new(800.0, 600.0),
    };
    let mut tree = BoxTree::with_placement(fonts, Box::new(placement));

    let id = tree.new_box(None);
    tree.get_mut(id).set_position("fixed");
    tree.set_left(id, "50%");
    tree.set_top(id, "60px");

    assert_eq!(tree.location(id), Point::new(400.0, 60.0));
}

#[test]
fn test_custom_placement_hook() {
    struct SnapToGrid;

    impl PlacementHook for SnapToGrid {
        fn resolve(&self, left: &str, top: &str) -> Point {
            let x = left.trim_end_matches("px").parse::<f64>().unwrap_or(0.0);
            let y = top.trim_end_matches("px").parse::<f64>().unwrap_or(0.0);
            Point::new((x / 8.0).round() * 8.0, (y / 8.0).round() * 8.0)
        }
    }

    let fonts = Rc::new(FontCache::new(Box::new(StubBackend)));
    let mut tree = BoxTree::with_placement(fonts, Box::new(SnapToGrid));

    let id = tree.new_box(None);
    tree.get_mut(id).set_position("fixed");
    tree.set_left(id, "13px");
    tree.set_top(id, "29px");

    assert_eq!(tree.location(id), Point::new(16.0, 32.0));
}

#[test]
fn test_left_write_relocates_fixed_box() {
    let mut tree = new_tree();
    let id = tree.new_box(None);
    tree.get_mut(id).set_position("fixed");
    tree.set_location(id, Point::new(99.0, 99.0));
    tree.set_left(id, "10px");

    // A left/top write on a fixed box relocates it immediately
    assert_eq!(tree.location(id), Point::new(10.0, 0.0));
}

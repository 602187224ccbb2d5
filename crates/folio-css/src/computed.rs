//! Computed-Value Cache
//!
//! Lazily derived "actual" values: each getter checks the per-field cache,
//! resolves the raw declared string against the node's context (container
//! size for percentages, the node's own font height for em units) on first
//! access, and stores the result. The matching raw setter resets exactly
//! the dependent entry, so reads are idempotent until a setter runs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_text::{Font, FontStyle, TextMeasure};

use crate::constants;
use crate::parser;
use crate::tree::{BoxId, BoxTree};
use crate::values::{Color, CssLength, CssUnit};

/// Per-box cache of derived values. `None` means "not yet computed"; a
/// setter writes `None` to invalidate. Interior-mutable so reads stay
/// `&self`.
#[derive(Debug, Default)]
pub(crate) struct ComputedCache {
    pub(crate) corner_nw: Cell<Option<f64>>,
    pub(crate) corner_ne: Cell<Option<f64>>,
    pub(crate) corner_se: Cell<Option<f64>>,
    pub(crate) corner_sw: Cell<Option<f64>>,
    pub(crate) width: Cell<Option<f64>>,
    pub(crate) height: Cell<Option<f64>>,
    pub(crate) padding_top: Cell<Option<f64>>,
    pub(crate) padding_right: Cell<Option<f64>>,
    pub(crate) padding_bottom: Cell<Option<f64>>,
    pub(crate) padding_left: Cell<Option<f64>>,
    pub(crate) margin_top: Cell<Option<f64>>,
    pub(crate) margin_right: Cell<Option<f64>>,
    pub(crate) margin_bottom: Cell<Option<f64>>,
    pub(crate) margin_left: Cell<Option<f64>>,
    pub(crate) collapsed_margin_top: Cell<Option<f64>>,
    pub(crate) border_top_width: Cell<Option<f64>>,
    pub(crate) border_right_width: Cell<Option<f64>>,
    pub(crate) border_bottom_width: Cell<Option<f64>>,
    pub(crate) border_left_width: Cell<Option<f64>>,
    pub(crate) border_top_color: Cell<Option<Color>>,
    pub(crate) border_right_color: Cell<Option<Color>>,
    pub(crate) border_bottom_color: Cell<Option<Color>>,
    pub(crate) border_left_color: Cell<Option<Color>>,
    pub(crate) color: Cell<Option<Color>>,
    pub(crate) background_color: Cell<Option<Color>>,
    pub(crate) background_gradient: Cell<Option<Color>>,
    pub(crate) background_gradient_angle: Cell<Option<f64>>,
    pub(crate) line_height: Cell<Option<f64>>,
    pub(crate) word_spacing: Cell<Option<f64>>,
    pub(crate) text_indent: Cell<Option<f64>>,
    pub(crate) border_spacing_horizontal: Cell<Option<f64>>,
    pub(crate) border_spacing_vertical: Cell<Option<f64>>,
    pub(crate) font: RefCell<Option<Rc<Font>>>,
}

impl BoxTree {
    /// Line spacing of the box's resolved font: the em factor every other
    /// length resolution uses.
    pub fn em_height(&self, id: BoxId) -> f64 {
        self.actual_font(id).height()
    }

    /// The font used to paint the box's text, resolved once from the
    /// declared family/size/style/weight and shared through the font cache.
    pub fn actual_font(&self, id: BoxId) -> Rc<Font> {
        {
            let cached = self.get(id).cache.font.borrow();
            if let Some(font) = cached.as_ref() {
                return Rc::clone(font);
            }
        }
        let font = self.resolve_font(id);
        *self.get(id).cache.font.borrow_mut() = Some(Rc::clone(&font));
        font
    }

    /// The parent's resolved font, or the box's own at the root.
    pub fn actual_parent_font(&self, id: BoxId) -> Rc<Font> {
        match self.get(id).parent {
            Some(parent) => self.actual_font(parent),
            None => self.actual_font(id),
        }
    }

    fn resolve_font(&self, id: BoxId) -> Rc<Font> {
        let b = self.get(id);
        let props = &b.props;

        let mut style = FontStyle::REGULAR;
        if props.font_style == "italic" || props.font_style == "oblique" {
            style.italic = true;
        }
        let weight = props.font_weight.as_str();
        if !weight.is_empty() && weight != "normal" && weight != "lighter" && weight != "inherit" {
            style.bold = true;
        }

        let parent_size = match b.parent {
            Some(parent) => self.actual_font(parent).size(),
            None => constants::FONT_SIZE,
        };
        let mut size = match props.font_size.as_str() {
            "medium" => constants::FONT_SIZE,
            "xx-small" => constants::FONT_SIZE - 4.0,
            "x-small" => constants::FONT_SIZE - 3.0,
            "small" => constants::FONT_SIZE - 2.0,
            "large" => constants::FONT_SIZE + 2.0,
            "x-large" => constants::FONT_SIZE + 3.0,
            "xx-large" => constants::FONT_SIZE + 4.0,
            "smaller" => parent_size - 2.0,
            "larger" => parent_size + 2.0,
            other => parser::parse_font_size(other, parent_size),
        };
        // Degenerate sizes fall back to the base size
        if size <= 1.0 {
            size = constants::FONT_SIZE;
        }

        let family = if props.font_family.is_empty() {
            constants::DEFAULT_FONT_FAMILY
        } else {
            props.font_family.as_str()
        };
        self.fonts.resolve(family, size, style)
    }

    pub fn actual_width(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.width.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.width, b.size.width, self.em_height(id));
        b.cache.width.set(Some(v));
        v
    }

    pub fn actual_height(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.height.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.height, b.size.height, self.em_height(id));
        b.cache.height.set(Some(v));
        v
    }

    pub fn actual_padding_top(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.padding_top.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.padding_top, b.size.width, self.em_height(id));
        b.cache.padding_top.set(Some(v));
        v
    }

    pub fn actual_padding_right(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.padding_right.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.padding_right, b.size.width, self.em_height(id));
        b.cache.padding_right.set(Some(v));
        v
    }

    pub fn actual_padding_bottom(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.padding_bottom.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.padding_bottom, b.size.width, self.em_height(id));
        b.cache.padding_bottom.set(Some(v));
        v
    }

    pub fn actual_padding_left(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.padding_left.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.padding_left, b.size.width, self.em_height(id));
        b.cache.padding_left.set(Some(v));
        v
    }

    // Margins. Auto-margin centering is not implemented: `auto` is
    // rewritten to `"0"` before resolving, observable through the raw
    // getter afterwards (hence `&mut self`). A percentage margin depends
    // on the mutable container width and is never cached.

    pub fn actual_margin_top(&mut self, id: BoxId) -> f64 {
        if let Some(v) = self.get(id).cache.margin_top.get() {
            return v;
        }
        if self.get(id).props.margin_top == "auto" {
            self.get_mut(id).set_margin_top("0");
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let v = parser::parse_length(&b.props.margin_top, b.size.width, em);
        if b.props.margin_top.ends_with('%') {
            return v;
        }
        b.cache.margin_top.set(Some(v));
        v
    }

    pub fn actual_margin_right(&mut self, id: BoxId) -> f64 {
        if let Some(v) = self.get(id).cache.margin_right.get() {
            return v;
        }
        if self.get(id).props.margin_right == "auto" {
            self.get_mut(id).set_margin_right("0");
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let v = parser::parse_length(&b.props.margin_right, b.size.width, em);
        if b.props.margin_right.ends_with('%') {
            return v;
        }
        b.cache.margin_right.set(Some(v));
        v
    }

    pub fn actual_margin_bottom(&mut self, id: BoxId) -> f64 {
        if let Some(v) = self.get(id).cache.margin_bottom.get() {
            return v;
        }
        if self.get(id).props.margin_bottom == "auto" {
            self.get_mut(id).set_margin_bottom("0");
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let v = parser::parse_length(&b.props.margin_bottom, b.size.width, em);
        if b.props.margin_bottom.ends_with('%') {
            return v;
        }
        b.cache.margin_bottom.set(Some(v));
        v
    }

    pub fn actual_margin_left(&mut self, id: BoxId) -> f64 {
        if let Some(v) = self.get(id).cache.margin_left.get() {
            return v;
        }
        if self.get(id).props.margin_left == "auto" {
            self.get_mut(id).set_margin_left("0");
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let v = parser::parse_length(&b.props.margin_left, b.size.width, em);
        if b.props.margin_left.ends_with('%') {
            return v;
        }
        b.cache.margin_left.set(Some(v));
        v
    }

    /// The margin top after margin collapse, assigned by layout; zero when
    /// no collapse happened.
    pub fn collapsed_margin_top(&self, id: BoxId) -> f64 {
        self.get(id).cache.collapsed_margin_top.get().unwrap_or(0.0)
    }

    pub fn set_collapsed_margin_top(&mut self, id: BoxId, value: f64) {
        self.get(id).cache.collapsed_margin_top.set(Some(value));
    }

    // Border widths. Style absence always wins over the declared width.

    pub fn actual_border_top_width(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.border_top_width.get() {
            return v;
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let mut v = parser::parse_border_width(&b.props.border_top_width, em);
        if b.props.border_top_style.is_empty() || b.props.border_top_style == "none" {
            v = 0.0;
        }
        b.cache.border_top_width.set(Some(v));
        v
    }

    pub fn actual_border_right_width(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.border_right_width.get() {
            return v;
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let mut v = parser::parse_border_width(&b.props.border_right_width, em);
        if b.props.border_right_style.is_empty() || b.props.border_right_style == "none" {
            v = 0.0;
        }
        b.cache.border_right_width.set(Some(v));
        v
    }

    pub fn actual_border_bottom_width(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.border_bottom_width.get() {
            return v;
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let mut v = parser::parse_border_width(&b.props.border_bottom_width, em);
        if b.props.border_bottom_style.is_empty() || b.props.border_bottom_style == "none" {
            v = 0.0;
        }
        b.cache.border_bottom_width.set(Some(v));
        v
    }

    pub fn actual_border_left_width(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.border_left_width.get() {
            return v;
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let mut v = parser::parse_border_width(&b.props.border_left_width, em);
        if b.props.border_left_style.is_empty() || b.props.border_left_style == "none" {
            v = 0.0;
        }
        b.cache.border_left_width.set(Some(v));
        v
    }

    // Colors. An unparseable declaration resolves to black rather than
    // failing the box.

    pub fn actual_border_top_color(&self, id: BoxId) -> Color {
        let b = self.get(id);
        if let Some(c) = b.cache.border_top_color.get() {
            return c;
        }
        let c = parser::parse_color(&b.props.border_top_color).unwrap_or(Color::BLACK);
        b.cache.border_top_color.set(Some(c));
        c
    }

    pub fn actual_border_right_color(&self, id: BoxId) -> Color {
        let b = self.get(id);
        if let Some(c) = b.cache.border_right_color.get() {
            return c;
        }
        let c = parser::parse_color(&b.props.border_right_color).unwrap_or(Color::BLACK);
        b.cache.border_right_color.set(Some(c));
        c
    }

    pub fn actual_border_bottom_color(&self, id: BoxId) -> Color {
        let b = self.get(id);
        if let Some(c) = b.cache.border_bottom_color.get() {
            return c;
        }
        let c = parser::parse_color(&b.props.border_bottom_color).unwrap_or(Color::BLACK);
        b.cache.border_bottom_color.set(Some(c));
        c
    }

    pub fn actual_border_left_color(&self, id: BoxId) -> Color {
        let b = self.get(id);
        if let Some(c) = b.cache.border_left_color.get() {
            return c;
        }
        let c = parser::parse_color(&b.props.border_left_color).unwrap_or(Color::BLACK);
        b.cache.border_left_color.set(Some(c));
        c
    }

    /// The color used for the box's text
    pub fn actual_color(&self, id: BoxId) -> Color {
        let b = self.get(id);
        if let Some(c) = b.cache.color.get() {
            return c;
        }
        let c = parser::parse_color(&b.props.color).unwrap_or(Color::BLACK);
        b.cache.color.set(Some(c));
        c
    }

    pub fn actual_background_color(&self, id: BoxId) -> Color {
        let b = self.get(id);
        if let Some(c) = b.cache.background_color.get() {
            return c;
        }
        let c = parser::parse_color(&b.props.background_color).unwrap_or(Color::TRANSPARENT);
        b.cache.background_color.set(Some(c));
        c
    }

    /// Second color of the background gradient, when one is declared
    pub fn actual_background_gradient(&self, id: BoxId) -> Color {
        let b = self.get(id);
        if let Some(c) = b.cache.background_gradient.get() {
            return c;
        }
        let c = parser::parse_color(&b.props.background_gradient).unwrap_or(Color::TRANSPARENT);
        b.cache.background_gradient.set(Some(c));
        c
    }

    pub fn actual_background_gradient_angle(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.background_gradient_angle.get() {
            return v;
        }
        let v = parser::parse_number(&b.props.background_gradient_angle, 360.0);
        b.cache.background_gradient_angle.set(Some(v));
        v
    }

    // Corner radii

    pub fn actual_corner_nw(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.corner_nw.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.corner_nw_radius, 0.0, self.em_height(id));
        b.cache.corner_nw.set(Some(v));
        v
    }

    pub fn actual_corner_ne(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.corner_ne.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.corner_ne_radius, 0.0, self.em_height(id));
        b.cache.corner_ne.set(Some(v));
        v
    }

    pub fn actual_corner_se(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.corner_se.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.corner_se_radius, 0.0, self.em_height(id));
        b.cache.corner_se.set(Some(v));
        v
    }

    pub fn actual_corner_sw(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.corner_sw.get() {
            return v;
        }
        let v = parser::parse_length(&b.props.corner_sw_radius, 0.0, self.em_height(id));
        b.cache.corner_sw.set(Some(v));
        v
    }

    /// True when at least one corner of the box is rounded
    pub fn is_rounded(&self, id: BoxId) -> bool {
        self.actual_corner_ne(id) > 0.0
            || self.actual_corner_nw(id) > 0.0
            || self.actual_corner_se(id) > 0.0
            || self.actual_corner_sw(id) > 0.0
    }

    pub fn actual_line_height(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.line_height.get() {
            return v;
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let v = 0.9 * parser::parse_length(&b.props.line_height, b.size.height, em);
        b.cache.line_height.set(Some(v));
        v
    }

    /// Text indentation of the first line
    pub fn actual_text_indent(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.text_indent.get() {
            return v;
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let v = parser::parse_length(&b.props.text_indent, b.size.width, em);
        b.cache.text_indent.set(Some(v));
        v
    }

    /// Horizontal border spacing for tables: the first declared length
    pub fn actual_border_spacing_horizontal(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.border_spacing_horizontal.get() {
            return v;
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let v = match parser::match_lengths(&b.props.border_spacing).first() {
            Some(token) => parser::parse_length(token, 1.0, em),
            None => 0.0,
        };
        b.cache.border_spacing_horizontal.set(Some(v));
        v
    }

    /// Vertical border spacing for tables: the second declared length, or
    /// the first when only one is declared
    pub fn actual_border_spacing_vertical(&self, id: BoxId) -> f64 {
        let b = self.get(id);
        if let Some(v) = b.cache.border_spacing_vertical.get() {
            return v;
        }
        let em = self.em_height(id);
        let b = self.get(id);
        let tokens = parser::match_lengths(&b.props.border_spacing);
        let v = match tokens.as_slice() {
            [] => 0.0,
            [single] => parser::parse_length(single, 1.0, em),
            [_, second, ..] => parser::parse_length(second, 1.0, em),
        };
        b.cache.border_spacing_vertical.set(Some(v));
        v
    }

    /// The width of whitespace between words; `None` until
    /// [`measure_word_spacing`](Self::measure_word_spacing) has run.
    pub fn actual_word_spacing(&self, id: BoxId) -> Option<f64> {
        self.get(id).cache.word_spacing.get()
    }

    /// Measure the whitespace width through the paint backend and add the
    /// declared extra spacing. No-op when already measured.
    pub fn measure_word_spacing(&self, id: BoxId, g: &dyn TextMeasure) {
        if self.get(id).cache.word_spacing.get().is_some() {
            return;
        }
        let mut spacing = self.actual_font(id).whitespace_width(g);
        let b = self.get(id);
        if b.props.word_spacing != "normal" {
            if let Some(token) = parser::match_lengths(&b.props.word_spacing).first() {
                spacing += parser::parse_length(token, 1.0, self.em_height(id));
            }
        }
        self.get(id).cache.word_spacing.set(Some(spacing));
    }

    // Setters that resolve against the box's context at assignment time.

    /// Set the declared font size, eagerly normalizing a parseable length
    /// to an absolute size string: `em` resolves against the parent's
    /// resolved size, a malformed length falls back to `"medium"`, and
    /// keywords are stored verbatim.
    pub fn set_font_size(&mut self, id: BoxId, value: &str) {
        let token = parser::match_lengths(value).first().copied();
        let computed = match token {
            Some(token) => {
                let len = CssLength::new(token);
                if len.has_error() {
                    constants::MEDIUM.to_owned()
                } else if len.unit() == CssUnit::Ems && self.get(id).parent.is_some() {
                    let parent_size = self.actual_parent_font(id).size();
                    len.convert_em_to_pixels(parent_size).to_string()
                } else {
                    len.to_string()
                }
            }
            None => value.to_owned(),
        };
        let b = self.get_mut(id);
        b.props.font_size = computed;
        b.cache.font.replace(None);
    }

    /// Set the declared word spacing; `em` input is resolved to pixels
    /// immediately against the current font.
    pub fn set_word_spacing(&mut self, id: BoxId, value: &str) {
        let value = self.no_ems(id, value);
        let b = self.get_mut(id);
        b.props.word_spacing = value;
        b.cache.word_spacing.set(None);
    }

    /// Set the declared text indent; `em` input is resolved to pixels
    /// immediately against the current font.
    pub fn set_text_indent(&mut self, id: BoxId, value: &str) {
        let value = self.no_ems(id, value);
        let b = self.get_mut(id);
        b.props.text_indent = value;
        b.cache.text_indent.set(None);
    }

    /// Set the declared line height, eagerly converted to a pixel string.
    /// A bare number is an em multiple.
    pub fn set_line_height(&mut self, id: BoxId, value: &str) {
        let height = self.get(id).size.height;
        let em = self.em_height(id);
        let px = parser::parse_length_with_default(value, height, em, Some(CssUnit::Ems));
        let b = self.get_mut(id);
        b.props.line_height = format!("{px}px");
        b.cache.line_height.set(None);
    }

    /// Set the declared left offset; relocates the box immediately when it
    /// is `position: fixed`.
    pub fn set_left(&mut self, id: BoxId, value: &str) {
        self.get_mut(id).props.left = value.to_owned();
        self.update_fixed_location(id);
    }

    /// Set the declared top offset; relocates the box immediately when it
    /// is `position: fixed`.
    pub fn set_top(&mut self, id: BoxId, value: &str) {
        self.get_mut(id).props.top = value.to_owned();
        self.update_fixed_location(id);
    }

    fn update_fixed_location(&mut self, id: BoxId) {
        let b = self.get(id);
        if b.props.position == "fixed" {
            let location = self.placement.resolve(&b.props.left, &b.props.top);
            b.location.set(Some(location));
        }
    }

    /// Converts an em length to pixels against the box's own font height;
    /// anything else passes through unchanged.
    fn no_ems(&self, id: BoxId, length: &str) -> String {
        let len = CssLength::new(length);
        if len.unit() == CssUnit::Ems {
            len.convert_em_to_pixels(self.em_height(id)).to_string()
        } else {
            length.to_owned()
        }
    }
}

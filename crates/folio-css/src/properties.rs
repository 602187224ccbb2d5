//! Style Property Store
//!
//! One raw declared string per recognized CSS property, with the engine's
//! defaults. Setters reset the dependent cached actual value synchronously,
//! so a getter can never observe a stale computation.

use crate::parser;
use crate::tree::{BoxId, BoxTree, StyledBox};

/// Raw declared values of one box.
///
/// Values are kept as author-supplied strings until an `actual_*` getter
/// resolves them; the shorthand setters on [`StyledBox`] fan out into these
/// longhand fields.
#[derive(Debug, Clone)]
pub struct StyleProps {
    pub(crate) border_top_width: String,
    pub(crate) border_right_width: String,
    pub(crate) border_bottom_width: String,
    pub(crate) border_left_width: String,
    pub(crate) border_top_style: String,
    pub(crate) border_right_style: String,
    pub(crate) border_bottom_style: String,
    pub(crate) border_left_style: String,
    pub(crate) border_top_color: String,
    pub(crate) border_right_color: String,
    pub(crate) border_bottom_color: String,
    pub(crate) border_left_color: String,
    pub(crate) border_spacing: String,
    pub(crate) border_collapse: String,
    pub(crate) corner_radius: String,
    pub(crate) corner_nw_radius: String,
    pub(crate) corner_ne_radius: String,
    pub(crate) corner_se_radius: String,
    pub(crate) corner_sw_radius: String,
    pub(crate) margin_top: String,
    pub(crate) margin_right: String,
    pub(crate) margin_bottom: String,
    pub(crate) margin_left: String,
    pub(crate) padding_top: String,
    pub(crate) padding_right: String,
    pub(crate) padding_bottom: String,
    pub(crate) padding_left: String,
    pub(crate) page_break_inside: String,
    pub(crate) left: String,
    pub(crate) top: String,
    pub(crate) right: String,
    pub(crate) bottom: String,
    pub(crate) width: String,
    pub(crate) max_width: String,
    pub(crate) height: String,
    pub(crate) background_color: String,
    pub(crate) background_image: String,
    pub(crate) background_position: String,
    pub(crate) background_repeat: String,
    pub(crate) background_gradient: String,
    pub(crate) background_gradient_angle: String,
    pub(crate) color: String,
    pub(crate) content: String,
    pub(crate) display: String,
    pub(crate) direction: String,
    pub(crate) empty_cells: String,
    pub(crate) float: String,
    pub(crate) position: String,
    pub(crate) line_height: String,
    pub(crate) vertical_align: String,
    pub(crate) text_indent: String,
    pub(crate) text_align: String,
    pub(crate) text_decoration: String,
    pub(crate) white_space: String,
    pub(crate) visibility: String,
    pub(crate) word_spacing: String,
    pub(crate) word_break: String,
    pub(crate) font_family: String,
    pub(crate) font_size: String,
    pub(crate) font_style: String,
    pub(crate) font_variant: String,
    pub(crate) font_weight: String,
    pub(crate) list_style: String,
    pub(crate) list_style_position: String,
    pub(crate) list_style_image: String,
    pub(crate) list_style_type: String,
    pub(crate) overflow: String,
}

impl Default for StyleProps {
    fn default() -> Self {
        Self {
            border_top_width: "medium".into(),
            border_right_width: "medium".into(),
            border_bottom_width: "medium".into(),
            border_left_width: "medium".into(),
            border_top_style: "none".into(),
            border_right_style: "none".into(),
            border_bottom_style: "none".into(),
            border_left_style: "none".into(),
            border_top_color: "black".into(),
            border_right_color: "black".into(),
            border_bottom_color: "black".into(),
            border_left_color: "black".into(),
            border_spacing: "0".into(),
            border_collapse: "separate".into(),
            corner_radius: "0".into(),
            corner_nw_radius: "0".into(),
            corner_ne_radius: "0".into(),
            corner_se_radius: "0".into(),
            corner_sw_radius: "0".into(),
            margin_top: "0".into(),
            margin_right: "0".into(),
            margin_bottom: "0".into(),
            margin_left: "0".into(),
            padding_top: "0".into(),
            padding_right: "0".into(),
            padding_bottom: "0".into(),
            padding_left: "0".into(),
            page_break_inside: "auto".into(),
            left: "auto".into(),
            top: "auto".into(),
            right: String::new(),
            bottom: String::new(),
            width: "auto".into(),
            max_width: "none".into(),
            height: "auto".into(),
            background_color: "transparent".into(),
            background_image: "none".into(),
            background_position: "0% 0%".into(),
            background_repeat: "repeat".into(),
            background_gradient: "none".into(),
            background_gradient_angle: "90".into(),
            color: "black".into(),
            content: "normal".into(),
            display: "inline".into(),
            direction: "ltr".into(),
            empty_cells: "show".into(),
            float: "none".into(),
            position: "static".into(),
            line_height: "normal".into(),
            vertical_align: "baseline".into(),
            text_indent: "0".into(),
            text_align: String::new(),
            text_decoration: String::new(),
            white_space: "normal".into(),
            visibility: "visible".into(),
            word_spacing: "normal".into(),
            word_break: "normal".into(),
            font_family: crate::constants::DEFAULT_FONT_FAMILY.into(),
            font_size: "medium".into(),
            font_style: "normal".into(),
            font_variant: "normal".into(),
            font_weight: "normal".into(),
            list_style: String::new(),
            list_style_position: "outside".into(),
            list_style_image: String::new(),
            list_style_type: "disc".into(),
            overflow: "visible".into(),
        }
    }
}

impl StyledBox {
    // Raw declared values

    pub fn border_top_width(&self) -> &str {
        &self.props.border_top_width
    }

    pub fn border_right_width(&self) -> &str {
        &self.props.border_right_width
    }

    pub fn border_bottom_width(&self) -> &str {
        &self.props.border_bottom_width
    }

    pub fn border_left_width(&self) -> &str {
        &self.props.border_left_width
    }

    pub fn border_top_style(&self) -> &str {
        &self.props.border_top_style
    }

    pub fn border_right_style(&self) -> &str {
        &self.props.border_right_style
    }

    pub fn border_bottom_style(&self) -> &str {
        &self.props.border_bottom_style
    }

    pub fn border_left_style(&self) -> &str {
        &self.props.border_left_style
    }

    pub fn border_top_color(&self) -> &str {
        &self.props.border_top_color
    }

    pub fn border_right_color(&self) -> &str {
        &self.props.border_right_color
    }

    pub fn border_bottom_color(&self) -> &str {
        &self.props.border_bottom_color
    }

    pub fn border_left_color(&self) -> &str {
        &self.props.border_left_color
    }

    pub fn border_spacing(&self) -> &str {
        &self.props.border_spacing
    }

    pub fn border_collapse(&self) -> &str {
        &self.props.border_collapse
    }

    pub fn corner_radius(&self) -> &str {
        &self.props.corner_radius
    }

    pub fn corner_nw_radius(&self) -> &str {
        &self.props.corner_nw_radius
    }

    pub fn corner_ne_radius(&self) -> &str {
        &self.props.corner_ne_radius
    }

    pub fn corner_se_radius(&self) -> &str {
        &self.props.corner_se_radius
    }

    pub fn corner_sw_radius(&self) -> &str {
        &self.props.corner_sw_radius
    }

    pub fn margin_top(&self) -> &str {
        &self.props.margin_top
    }

    pub fn margin_right(&self) -> &str {
        &self.props.margin_right
    }

    pub fn margin_bottom(&self) -> &str {
        &self.props.margin_bottom
    }

    pub fn margin_left(&self) -> &str {
        &self.props.margin_left
    }

    pub fn padding_top(&self) -> &str {
        &self.props.padding_top
    }

    pub fn padding_right(&self) -> &str {
        &self.props.padding_right
    }

    pub fn padding_bottom(&self) -> &str {
        &self.props.padding_bottom
    }

    pub fn padding_left(&self) -> &str {
        &self.props.padding_left
    }

    pub fn page_break_inside(&self) -> &str {
        &self.props.page_break_inside
    }

    pub fn left(&self) -> &str {
        &self.props.left
    }

    pub fn top(&self) -> &str {
        &self.props.top
    }

    pub fn right(&self) -> &str {
        &self.props.right
    }

    pub fn bottom(&self) -> &str {
        &self.props.bottom
    }

    pub fn width(&self) -> &str {
        &self.props.width
    }

    pub fn max_width(&self) -> &str {
        &self.props.max_width
    }

    pub fn height(&self) -> &str {
        &self.props.height
    }

    pub fn background_color(&self) -> &str {
        &self.props.background_color
    }

    pub fn background_image(&self) -> &str {
        &self.props.background_image
    }

    pub fn background_position(&self) -> &str {
        &self.props.background_position
    }

    pub fn background_repeat(&self) -> &str {
        &self.props.background_repeat
    }

    pub fn background_gradient(&self) -> &str {
        &self.props.background_gradient
    }

    pub fn background_gradient_angle(&self) -> &str {
        &self.props.background_gradient_angle
    }

    pub fn color(&self) -> &str {
        &self.props.color
    }

    pub fn content(&self) -> &str {
        &self.props.content
    }

    pub fn display(&self) -> &str {
        &self.props.display
    }

    pub fn direction(&self) -> &str {
        &self.props.direction
    }

    pub fn empty_cells(&self) -> &str {
        &self.props.empty_cells
    }

    pub fn float(&self) -> &str {
        &self.props.float
    }

    pub fn position(&self) -> &str {
        &self.props.position
    }

    pub fn line_height(&self) -> &str {
        &self.props.line_height
    }

    pub fn vertical_align(&self) -> &str {
        &self.props.vertical_align
    }

    pub fn text_indent(&self) -> &str {
        &self.props.text_indent
    }

    pub fn text_align(&self) -> &str {
        &self.props.text_align
    }

    pub fn text_decoration(&self) -> &str {
        &self.props.text_decoration
    }

    pub fn white_space(&self) -> &str {
        &self.props.white_space
    }

    pub fn visibility(&self) -> &str {
        &self.props.visibility
    }

    pub fn word_spacing(&self) -> &str {
        &self.props.word_spacing
    }

    pub fn word_break(&self) -> &str {
        &self.props.word_break
    }

    pub fn font_family(&self) -> &str {
        &self.props.font_family
    }

    pub fn font_size(&self) -> &str {
        &self.props.font_size
    }

    pub fn font_style(&self) -> &str {
        &self.props.font_style
    }

    pub fn font_variant(&self) -> &str {
        &self.props.font_variant
    }

    pub fn font_weight(&self) -> &str {
        &self.props.font_weight
    }

    pub fn list_style(&self) -> &str {
        &self.props.list_style
    }

    pub fn list_style_position(&self) -> &str {
        &self.props.list_style_position
    }

    pub fn list_style_image(&self) -> &str {
        &self.props.list_style_image
    }

    pub fn list_style_type(&self) -> &str {
        &self.props.list_style_type
    }

    pub fn overflow(&self) -> &str {
        &self.props.overflow
    }

    // Setters. Each one resets the cache entry its actual value is derived
    // from, before returning.

    pub fn set_border_top_width(&mut self, value: impl Into<String>) {
        self.props.border_top_width = value.into();
        self.cache.border_top_width.set(None);
    }

    pub fn set_border_right_width(&mut self, value: impl Into<String>) {
        self.props.border_right_width = value.into();
        self.cache.border_right_width.set(None);
    }

    pub fn set_border_bottom_width(&mut self, value: impl Into<String>) {
        self.props.border_bottom_width = value.into();
        self.cache.border_bottom_width.set(None);
    }

    pub fn set_border_left_width(&mut self, value: impl Into<String>) {
        self.props.border_left_width = value.into();
        self.cache.border_left_width.set(None);
    }

    // The actual border width depends on the style (an absent style forces
    // it to zero), so style setters invalidate the width cache.

    pub fn set_border_top_style(&mut self, value: impl Into<String>) {
        self.props.border_top_style = value.into();
        self.cache.border_top_width.set(None);
    }

    pub fn set_border_right_style(&mut self, value: impl Into<String>) {
        self.props.border_right_style = value.into();
        self.cache.border_right_width.set(None);
    }

    pub fn set_border_bottom_style(&mut self, value: impl Into<String>) {
        self.props.border_bottom_style = value.into();
        self.cache.border_bottom_width.set(None);
    }

    pub fn set_border_left_style(&mut self, value: impl Into<String>) {
        self.props.border_left_style = value.into();
        self.cache.border_left_width.set(None);
    }

    pub fn set_border_top_color(&mut self, value: impl Into<String>) {
        self.props.border_top_color = value.into();
        self.cache.border_top_color.set(None);
    }

    pub fn set_border_right_color(&mut self, value: impl Into<String>) {
        self.props.border_right_color = value.into();
        self.cache.border_right_color.set(None);
    }

    pub fn set_border_bottom_color(&mut self, value: impl Into<String>) {
        self.props.border_bottom_color = value.into();
        self.cache.border_bottom_color.set(None);
    }

    pub fn set_border_left_color(&mut self, value: impl Into<String>) {
        self.props.border_left_color = value.into();
        self.cache.border_left_color.set(None);
    }

    pub fn set_border_spacing(&mut self, value: impl Into<String>) {
        self.props.border_spacing = value.into();
        self.cache.border_spacing_horizontal.set(None);
        self.cache.border_spacing_vertical.set(None);
    }

    pub fn set_border_collapse(&mut self, value: impl Into<String>) {
        self.props.border_collapse = value.into();
    }

    /// Set the style, width and/or color of all four borders at once.
    /// A `None` argument leaves that aspect untouched.
    pub fn set_all_borders(
        &mut self,
        style: Option<&str>,
        width: Option<&str>,
        color: Option<&str>,
    ) {
        if let Some(style) = style {
            self.set_border_top_style(style);
            self.set_border_right_style(style);
            self.set_border_bottom_style(style);
            self.set_border_left_style(style);
        }
        if let Some(width) = width {
            self.set_border_top_width(width);
            self.set_border_right_width(width);
            self.set_border_bottom_width(width);
            self.set_border_left_width(width);
        }
        if let Some(color) = color {
            self.set_border_top_color(color);
            self.set_border_right_color(color);
            self.set_border_bottom_color(color);
            self.set_border_left_color(color);
        }
    }

    /// Corner radius shorthand: 1-4 space-separated lengths fan out into
    /// the four longhand corners.
    ///
    /// Expansion table (NE / NW / SE / SW):
    /// 1 token:  v0 v0 v0 v0
    /// 2 tokens: v0 v0 v1 v1
    /// 3 tokens: v0 v1 v2 --   (SW keeps its previous value)
    /// 4 tokens: v0 v1 v2 v3
    ///
    /// The 3-token case leaving SW untouched is long-standing behavior the
    /// paint pass depends on; it is not the usual border-radius mirroring.
    /// Zero or more than four tokens fan nothing out; malformed tokens are
    /// skipped and the prior longhand values stay intact either way. The
    /// raw shorthand string is stored regardless.
    pub fn set_corner_radius(&mut self, value: impl Into<String>) {
        let value = value.into();
        match parser::match_lengths(&value).as_slice() {
            &[v0] => {
                self.set_corner_ne_radius(v0);
                self.set_corner_nw_radius(v0);
                self.set_corner_se_radius(v0);
                self.set_corner_sw_radius(v0);
            }
            &[v0, v1] => {
                self.set_corner_ne_radius(v0);
                self.set_corner_nw_radius(v0);
                self.set_corner_se_radius(v1);
                self.set_corner_sw_radius(v1);
            }
            &[v0, v1, v2] => {
                self.set_corner_ne_radius(v0);
                self.set_corner_nw_radius(v1);
                self.set_corner_se_radius(v2);
            }
            &[v0, v1, v2, v3] => {
                self.set_corner_ne_radius(v0);
                self.set_corner_nw_radius(v1);
                self.set_corner_se_radius(v2);
                self.set_corner_sw_radius(v3);
            }
            _ => {}
        }
        self.props.corner_radius = value;
    }

    pub fn set_corner_nw_radius(&mut self, value: impl Into<String>) {
        self.props.corner_nw_radius = value.into();
        self.cache.corner_nw.set(None);
    }

    pub fn set_corner_ne_radius(&mut self, value: impl Into<String>) {
        self.props.corner_ne_radius = value.into();
        self.cache.corner_ne.set(None);
    }

    pub fn set_corner_se_radius(&mut self, value: impl Into<String>) {
        self.props.corner_se_radius = value.into();
        self.cache.corner_se.set(None);
    }

    pub fn set_corner_sw_radius(&mut self, value: impl Into<String>) {
        self.props.corner_sw_radius = value.into();
        self.cache.corner_sw.set(None);
    }

    pub fn set_margin_top(&mut self, value: impl Into<String>) {
        self.props.margin_top = value.into();
        self.cache.margin_top.set(None);
    }

    pub fn set_margin_right(&mut self, value: impl Into<String>) {
        self.props.margin_right = value.into();
        self.cache.margin_right.set(None);
    }

    pub fn set_margin_bottom(&mut self, value: impl Into<String>) {
        self.props.margin_bottom = value.into();
        self.cache.margin_bottom.set(None);
    }

    pub fn set_margin_left(&mut self, value: impl Into<String>) {
        self.props.margin_left = value.into();
        self.cache.margin_left.set(None);
    }

    pub fn set_padding_top(&mut self, value: impl Into<String>) {
        self.props.padding_top = value.into();
        self.cache.padding_top.set(None);
    }

    pub fn set_padding_right(&mut self, value: impl Into<String>) {
        self.props.padding_right = value.into();
        self.cache.padding_right.set(None);
    }

    pub fn set_padding_bottom(&mut self, value: impl Into<String>) {
        self.props.padding_bottom = value.into();
        self.cache.padding_bottom.set(None);
    }

    pub fn set_padding_left(&mut self, value: impl Into<String>) {
        self.props.padding_left = value.into();
        self.cache.padding_left.set(None);
    }

    pub fn set_page_break_inside(&mut self, value: impl Into<String>) {
        self.props.page_break_inside = value.into();
    }

    pub fn set_right(&mut self, value: impl Into<String>) {
        self.props.right = value.into();
    }

    pub fn set_bottom(&mut self, value: impl Into<String>) {
        self.props.bottom = value.into();
    }

    pub fn set_width(&mut self, value: impl Into<String>) {
        self.props.width = value.into();
        self.cache.width.set(None);
    }

    pub fn set_max_width(&mut self, value: impl Into<String>) {
        self.props.max_width = value.into();
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.props.height = value.into();
        self.cache.height.set(None);
    }

    pub fn set_background_color(&mut self, value: impl Into<String>) {
        self.props.background_color = value.into();
        self.cache.background_color.set(None);
    }

    pub fn set_background_image(&mut self, value: impl Into<String>) {
        self.props.background_image = value.into();
    }

    pub fn set_background_position(&mut self, value: impl Into<String>) {
        self.props.background_position = value.into();
    }

    pub fn set_background_repeat(&mut self, value: impl Into<String>) {
        self.props.background_repeat = value.into();
    }

    pub fn set_background_gradient(&mut self, value: impl Into<String>) {
        self.props.background_gradient = value.into();
        self.cache.background_gradient.set(None);
    }

    pub fn set_background_gradient_angle(&mut self, value: impl Into<String>) {
        self.props.background_gradient_angle = value.into();
        self.cache.background_gradient_angle.set(None);
    }

    pub fn set_color(&mut self, value: impl Into<String>) {
        self.props.color = value.into();
        self.cache.color.set(None);
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.props.content = value.into();
    }

    pub fn set_display(&mut self, value: impl Into<String>) {
        self.props.display = value.into();
    }

    pub fn set_direction(&mut self, value: impl Into<String>) {
        self.props.direction = value.into();
    }

    pub fn set_empty_cells(&mut self, value: impl Into<String>) {
        self.props.empty_cells = value.into();
    }

    pub fn set_float(&mut self, value: impl Into<String>) {
        self.props.float = value.into();
    }

    pub fn set_position(&mut self, value: impl Into<String>) {
        self.props.position = value.into();
    }

    pub fn set_vertical_align(&mut self, value: impl Into<String>) {
        self.props.vertical_align = value.into();
    }

    pub fn set_text_align(&mut self, value: impl Into<String>) {
        self.props.text_align = value.into();
    }

    pub fn set_text_decoration(&mut self, value: impl Into<String>) {
        self.props.text_decoration = value.into();
    }

    pub fn set_white_space(&mut self, value: impl Into<String>) {
        self.props.white_space = value.into();
    }

    pub fn set_visibility(&mut self, value: impl Into<String>) {
        self.props.visibility = value.into();
    }

    pub fn set_word_break(&mut self, value: impl Into<String>) {
        self.props.word_break = value.into();
    }

    pub fn set_font_family(&mut self, value: impl Into<String>) {
        self.props.font_family = value.into();
        self.cache.font.replace(None);
    }

    pub fn set_font_style(&mut self, value: impl Into<String>) {
        self.props.font_style = value.into();
        self.cache.font.replace(None);
    }

    pub fn set_font_variant(&mut self, value: impl Into<String>) {
        self.props.font_variant = value.into();
        self.cache.font.replace(None);
    }

    pub fn set_font_weight(&mut self, value: impl Into<String>) {
        self.props.font_weight = value.into();
        self.cache.font.replace(None);
    }

    pub fn set_list_style(&mut self, value: impl Into<String>) {
        self.props.list_style = value.into();
    }

    pub fn set_list_style_position(&mut self, value: impl Into<String>) {
        self.props.list_style_position = value.into();
    }

    pub fn set_list_style_image(&mut self, value: impl Into<String>) {
        self.props.list_style_image = value.into();
    }

    pub fn set_list_style_type(&mut self, value: impl Into<String>) {
        self.props.list_style_type = value.into();
    }

    pub fn set_overflow(&mut self, value: impl Into<String>) {
        self.props.overflow = value.into();
    }
}

impl BoxTree {
    /// Set a declared property by its CSS name.
    ///
    /// This is the surface used by matched selectors, inline styles and
    /// hover blocks. Unrecognized names are ignored.
    pub fn set_property(&mut self, id: BoxId, name: &str, value: &str) {
        match name {
            "border-top-width" => self.get_mut(id).set_border_top_width(value),
            "border-right-width" => self.get_mut(id).set_border_right_width(value),
            "border-bottom-width" => self.get_mut(id).set_border_bottom_width(value),
            "border-left-width" => self.get_mut(id).set_border_left_width(value),
            "border-top-style" => self.get_mut(id).set_border_top_style(value),
            "border-right-style" => self.get_mut(id).set_border_right_style(value),
            "border-bottom-style" => self.get_mut(id).set_border_bottom_style(value),
            "border-left-style" => self.get_mut(id).set_border_left_style(value),
            "border-top-color" => self.get_mut(id).set_border_top_color(value),
            "border-right-color" => self.get_mut(id).set_border_right_color(value),
            "border-bottom-color" => self.get_mut(id).set_border_bottom_color(value),
            "border-left-color" => self.get_mut(id).set_border_left_color(value),
            "border-spacing" => self.get_mut(id).set_border_spacing(value),
            "border-collapse" => self.get_mut(id).set_border_collapse(value),
            "corner-radius" | "border-radius" => self.get_mut(id).set_corner_radius(value),
            "corner-nw-radius" => self.get_mut(id).set_corner_nw_radius(value),
            "corner-ne-radius" => self.get_mut(id).set_corner_ne_radius(value),
            "corner-se-radius" => self.get_mut(id).set_corner_se_radius(value),
            "corner-sw-radius" => self.get_mut(id).set_corner_sw_radius(value),
            "margin-top" => self.get_mut(id).set_margin_top(value),
            "margin-right" => self.get_mut(id).set_margin_right(value),
            "margin-bottom" => self.get_mut(id).set_margin_bottom(value),
            "margin-left" => self.get_mut(id).set_margin_left(value),
            "padding-top" => self.get_mut(id).set_padding_top(value),
            "padding-right" => self.get_mut(id).set_padding_right(value),
            "padding-bottom" => self.get_mut(id).set_padding_bottom(value),
            "padding-left" => self.get_mut(id).set_padding_left(value),
            "page-break-inside" => self.get_mut(id).set_page_break_inside(value),
            "left" => self.set_left(id, value),
            "top" => self.set_top(id, value),
            "right" => self.get_mut(id).set_right(value),
            "bottom" => self.get_mut(id).set_bottom(value),
            "width" => self.get_mut(id).set_width(value),
            "max-width" => self.get_mut(id).set_max_width(value),
            "height" => self.get_mut(id).set_height(value),
            "background-color" => self.get_mut(id).set_background_color(value),
            "background-image" => self.get_mut(id).set_background_image(value),
            "background-position" => self.get_mut(id).set_background_position(value),
            "background-repeat" => self.get_mut(id).set_background_repeat(value),
            "background-gradient" => self.get_mut(id).set_background_gradient(value),
            "background-gradient-angle" => self.get_mut(id).set_background_gradient_angle(value),
            "color" => self.get_mut(id).set_color(value),
            "content" => self.get_mut(id).set_content(value),
            "display" => self.get_mut(id).set_display(value),
            "direction" => self.get_mut(id).set_direction(value),
            "empty-cells" => self.get_mut(id).set_empty_cells(value),
            "float" => self.get_mut(id).set_float(value),
            "position" => self.get_mut(id).set_position(value),
            "line-height" => self.set_line_height(id, value),
            "vertical-align" => self.get_mut(id).set_vertical_align(value),
            "text-indent" => self.set_text_indent(id, value),
            "text-align" => self.get_mut(id).set_text_align(value),
            "text-decoration" => self.get_mut(id).set_text_decoration(value),
            "white-space" => self.get_mut(id).set_white_space(value),
            "visibility" => self.get_mut(id).set_visibility(value),
            "word-spacing" => self.set_word_spacing(id, value),
            "word-break" => self.get_mut(id).set_word_break(value),
            "font-family" => self.get_mut(id).set_font_family(value),
            "font-size" => self.set_font_size(id, value),
            "font-style" => self.get_mut(id).set_font_style(value),
            "font-variant" => self.get_mut(id).set_font_variant(value),
            "font-weight" => self.get_mut(id).set_font_weight(value),
            "list-style" => self.get_mut(id).set_list_style(value),
            "list-style-position" => self.get_mut(id).set_list_style_position(value),
            "list-style-image" => self.get_mut(id).set_list_style_image(value),
            "list-style-type" => self.get_mut(id).set_list_style_type(value),
            "overflow" => self.get_mut(id).set_overflow(value),
            _ => tracing::trace!("ignoring unsupported property {}", name),
        }
    }

    /// Read a declared property by its CSS name.
    pub fn property(&self, id: BoxId, name: &str) -> Option<&str> {
        let b = self.get(id);
        Some(match name {
            "border-top-width" => b.border_top_width(),
            "border-right-width" => b.border_right_width(),
            "border-bottom-width" => b.border_bottom_width(),
            "border-left-width" => b.border_left_width(),
            "border-top-style" => b.border_top_style(),
            "border-right-style" => b.border_right_style(),
            "border-bottom-style" => b.border_bottom_style(),
            "border-left-style" => b.border_left_style(),
            "border-top-color" => b.border_top_color(),
            "border-right-color" => b.border_right_color(),
            "border-bottom-color" => b.border_bottom_color(),
            "border-left-color" => b.border_left_color(),
            "border-spacing" => b.border_spacing(),
            "border-collapse" => b.border_collapse(),
            "corner-radius" | "border-radius" => b.corner_radius(),
            "corner-nw-radius" => b.corner_nw_radius(),
            "corner-ne-radius" => b.corner_ne_radius(),
            "corner-se-radius" => b.corner_se_radius(),
            "corner-sw-radius" => b.corner_sw_radius(),
            "margin-top" => b.margin_top(),
            "margin-right" => b.margin_right(),
            "margin-bottom" => b.margin_bottom(),
            "margin-left" => b.margin_left(),
            "padding-top" => b.padding_top(),
            "padding-right" => b.padding_right(),
            "padding-bottom" => b.padding_bottom(),
            "padding-left" => b.padding_left(),
            "page-break-inside" => b.page_break_inside(),
            "left" => b.left(),
            "top" => b.top(),
            "right" => b.right(),
            "bottom" => b.bottom(),
            "width" => b.width(),
            "max-width" => b.max_width(),
            "height" => b.height(),
            "background-color" => b.background_color(),
            "background-image" => b.background_image(),
            "background-position" => b.background_position(),
            "background-repeat" => b.background_repeat(),
            "background-gradient" => b.background_gradient(),
            "background-gradient-angle" => b.background_gradient_angle(),
            "color" => b.color(),
            "content" => b.content(),
            "display" => b.display(),
            "direction" => b.direction(),
            "empty-cells" => b.empty_cells(),
            "float" => b.float(),
            "position" => b.position(),
            "line-height" => b.line_height(),
            "vertical-align" => b.vertical_align(),
            "text-indent" => b.text_indent(),
            "text-align" => b.text_align(),
            "text-decoration" => b.text_decoration(),
            "white-space" => b.white_space(),
            "visibility" => b.visibility(),
            "word-spacing" => b.word_spacing(),
            "word-break" => b.word_break(),
            "font-family" => b.font_family(),
            "font-size" => b.font_size(),
            "font-style" => b.font_style(),
            "font-variant" => b.font_variant(),
            "font-weight" => b.font_weight(),
            "list-style" => b.list_style(),
            "list-style-position" => b.list_style_position(),
            "list-style-image" => b.list_style_image(),
            "list-style-type" => b.list_style_type(),
            "overflow" => b.overflow(),
            _ => return None,
        })
    }
}

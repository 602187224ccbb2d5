//! Cascade/Inheritance Resolver
//!
//! Copies declared values from an ancestor (or an arbitrary source box,
//! for synthetic pseudo-boxes) into a box. Only raw declared strings are
//! copied, never cached actual values: the target re-derives its own
//! actuals against its own context, since its resolved font may differ.

use crate::computed::ComputedCache;
use crate::tree::{BoxId, BoxTree};

/// A parallel declaration set activated on pointer hover.
///
/// Attached alongside the base declarations of a box, not merged into
/// them; the base style stays intact until the block is applied.
#[derive(Debug, Clone, Default)]
pub struct HoverBlock {
    declarations: Vec<(String, String)>,
}

impl HoverBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push((property.into(), value.into()));
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl BoxTree {
    /// Attach the `:hover` declaration block of a box.
    pub fn set_hover_block(&mut self, id: BoxId, block: HoverBlock) {
        self.get_mut(id).hover = Some(block);
    }

    pub fn hover_block(&self, id: BoxId) -> Option<&HoverBlock> {
        self.get(id).hover.as_ref()
    }

    /// Apply the box's hover declarations on top of its base style,
    /// through the regular property setters.
    pub fn apply_hover(&mut self, id: BoxId) {
        let Some(block) = self.get(id).hover.clone() else {
            return;
        };
        tracing::debug!("applying {} hover declarations", block.len());
        for (property, value) in block.declarations() {
            self.set_property(id, property, value);
        }
    }

    /// Copy declared values from `source` into `target`.
    ///
    /// With `everything = false` only the CSS-inheritable properties are
    /// copied (the normal cascade for non-reset properties). With
    /// `everything = true` the box-model and other non-inheritable
    /// properties come along too, for building anonymous wrapper boxes
    /// that must look identical to their source.
    pub fn inherit_style(&mut self, target: BoxId, source: BoxId, everything: bool) {
        let src = self.get(source).props.clone();
        let b = self.get_mut(target);
        let p = &mut b.props;

        p.border_spacing = src.border_spacing;
        p.border_collapse = src.border_collapse;
        p.color = src.color;
        p.empty_cells = src.empty_cells;
        p.white_space = src.white_space;
        p.visibility = src.visibility;
        p.text_indent = src.text_indent;
        p.text_align = src.text_align;
        p.vertical_align = src.vertical_align;
        p.font_family = src.font_family;
        p.font_size = src.font_size;
        p.font_style = src.font_style;
        p.font_variant = src.font_variant;
        p.font_weight = src.font_weight;
        p.list_style_image = src.list_style_image;
        p.list_style_position = src.list_style_position;
        p.list_style_type = src.list_style_type;
        p.list_style = src.list_style;
        p.line_height = src.line_height;
        p.word_break = src.word_break;
        p.direction = src.direction;

        if everything {
            p.background_color = src.background_color;
            p.background_gradient = src.background_gradient;
            p.background_gradient_angle = src.background_gradient_angle;
            p.background_image = src.background_image;
            p.background_position = src.background_position;
            p.background_repeat = src.background_repeat;
            p.border_top_width = src.border_top_width;
            p.border_right_width = src.border_right_width;
            p.border_bottom_width = src.border_bottom_width;
            p.border_left_width = src.border_left_width;
            p.border_top_color = src.border_top_color;
            p.border_right_color = src.border_right_color;
            p.border_bottom_color = src.border_bottom_color;
            p.border_left_color = src.border_left_color;
            p.border_top_style = src.border_top_style;
            p.border_right_style = src.border_right_style;
            p.border_bottom_style = src.border_bottom_style;
            p.border_left_style = src.border_left_style;
            p.bottom = src.bottom;
            p.corner_nw_radius = src.corner_nw_radius;
            p.corner_ne_radius = src.corner_ne_radius;
            p.corner_se_radius = src.corner_se_radius;
            p.corner_sw_radius = src.corner_sw_radius;
            p.corner_radius = src.corner_radius;
            p.display = src.display;
            p.float = src.float;
            p.height = src.height;
            p.margin_bottom = src.margin_bottom;
            p.margin_left = src.margin_left;
            p.margin_right = src.margin_right;
            p.margin_top = src.margin_top;
            p.left = src.left;
            p.overflow = src.overflow;
            p.padding_left = src.padding_left;
            p.padding_bottom = src.padding_bottom;
            p.padding_right = src.padding_right;
            p.padding_top = src.padding_top;
            p.right = src.right;
            p.text_decoration = src.text_decoration;
            p.top = src.top;
            p.position = src.position;
            p.width = src.width;
            p.max_width = src.max_width;
            p.word_spacing = src.word_spacing;
        }

        // Everything copied is raw; drop any derived value so the target
        // recomputes against its own size and ancestry.
        b.cache = ComputedCache::default();
    }
}

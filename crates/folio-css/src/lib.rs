//! Folio CSS Style System
//!
//! Style resolution and box geometry for the Folio renderer: every box
//! carries raw author-declared property strings, lazily resolves them into
//! cached "actual" values against its geometric and font context, and
//! exposes the computed geometry the layout and paint passes consume.
//! Selector matching and stylesheet parsing happen upstream; this crate
//! receives declaration strings and hands back numbers, colors and fonts.

pub mod constants;
pub mod parser;

mod cascade;
mod computed;
mod properties;
mod tree;
mod values;

pub use cascade::HoverBlock;
pub use tree::{BoxId, BoxTree, PagePlacement, PlacementHook, StyledBox};
pub use values::{Color, CssLength, CssUnit};

//! blockfont: block-letter banners from 8-row bitmap fonts.
//!
//! A font definition is parsed into a [`GlyphTable`], input text is split
//! into [`Segment`]s, and [`render`] joins glyph rows into a [`Banner`].
//! [`FontLoader`] only hands out sources whose SHA-256 digest matches the
//! [`FontRegistry`], and [`check_width`] decides whether a banner fits the
//! terminal.

mod error;
mod glyph;
mod loader;
mod registry;
mod render;
mod segment;
pub mod terminal;

pub use error::{BannerError, Result};
pub use glyph::{Glyph, GlyphTable, Layout, FIRST_CHAR, GLYPH_HEIGHT};
pub use loader::{sha256_hex, FontLoader};
pub use registry::{FontRegistry, FontSpec};
pub use render::{render, render_str, Banner};
pub use segment::{normalize_escapes, segment, Segment};
pub use terminal::{check_width, FixedColumns, SttyProbe, TerminalProbe, WidthPolicy};

// Test utilities
pub mod test_support;

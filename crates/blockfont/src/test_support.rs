//! Test support utilities for blockfont.
//!
//! Helpers for building small synthetic fonts. Not part of the stable API.

use crate::{Glyph, GlyphTable, GLYPH_HEIGHT};

/// Build a definition source in the default layout: a header line, then one
/// 8-line block per entry with every row equal to that entry.
pub fn definition_source(rows: &[&str]) -> String {
    let mut source = String::from("test font\n");
    for row in rows {
        for _ in 0..GLYPH_HEIGHT {
            source.push_str(row);
            source.push('\n');
        }
    }
    source
}

/// Same as [`definition_source`] in the padded layout: blank header and a
/// blank line after every block.
pub fn padded_definition_source(rows: &[&str]) -> String {
    let mut source = String::from("\n");
    for row in rows {
        for _ in 0..GLYPH_HEIGHT {
            source.push_str(row);
            source.push('\n');
        }
        source.push('\n');
    }
    source
}

/// A table with a uniform glyph for each `(char, row)` pair.
pub fn uniform_table(entries: &[(char, &str)]) -> GlyphTable {
    let mut table = GlyphTable::new();
    for (ch, row) in entries {
        table.insert(*ch, Glyph::uniform(row));
    }
    table
}

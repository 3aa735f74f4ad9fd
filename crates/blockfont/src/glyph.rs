use std::collections::BTreeMap;

/// Number of rows in every glyph.
pub const GLYPH_HEIGHT: usize = 8;

/// Character assigned to the first glyph block of a definition source.
pub const FIRST_CHAR: char = ' ';

/// One character's bitmap: exactly [`GLYPH_HEIGHT`] rows of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [String; GLYPH_HEIGHT],
}

impl Glyph {
    pub fn new(rows: [String; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// A glyph whose rows are all `row`.
    pub fn uniform(row: &str) -> Self {
        Self {
            rows: std::array::from_fn(|_| row.to_string()),
        }
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// Widest row, in characters.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Framing of a glyph definition source around its 8-line blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Lines skipped before the first block.
    pub header_lines: usize,
    /// Lines skipped after each completed block.
    pub separator_lines: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            header_lines: 1,
            separator_lines: 0,
        }
    }
}

impl Layout {
    /// Layout of the stock font files: a blank first line and a blank line
    /// after every glyph.
    pub fn padded() -> Self {
        Self {
            header_lines: 1,
            separator_lines: 1,
        }
    }
}

/// Mapping from character to glyph, keyed from [`FIRST_CHAR`] upwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: BTreeMap<char, Glyph>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a definition source with the default [`Layout`]:
    /// one header line, then back-to-back 8-line blocks.
    pub fn parse(source: &str) -> Self {
        Self::parse_with(source, Layout::default())
    }

    /// Build a table from a definition source.
    ///
    /// Lines are collected into a buffer; each time it holds exactly
    /// [`GLYPH_HEIGHT`] lines it becomes the glyph of the next character,
    /// starting at space. A trailing partial block is dropped without error.
    /// A trailing `\r` is removed from every line.
    pub fn parse_with(source: &str, layout: Layout) -> Self {
        let mut table = GlyphTable::new();
        let mut code = FIRST_CHAR as u32;
        let mut buffer: Vec<String> = Vec::with_capacity(GLYPH_HEIGHT);
        let mut skip = 0usize;

        for line in source.split('\n').skip(layout.header_lines) {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            buffer.push(line.strip_suffix('\r').unwrap_or(line).to_string());
            if buffer.len() < GLYPH_HEIGHT {
                continue;
            }

            let Some(ch) = char::from_u32(code) else {
                break;
            };
            // The buffer holds exactly GLYPH_HEIGHT lines here.
            let rows = {
                let mut block = buffer.drain(..);
                std::array::from_fn(|_| block.next().unwrap_or_default())
            };
            table.glyphs.insert(ch, Glyph::new(rows));
            code += 1;
            skip = layout.separator_lines;
        }

        if !buffer.is_empty() {
            tracing::debug!(lines = buffer.len(), "dropping incomplete trailing glyph block");
        }
        tracing::debug!(glyphs = table.len(), "built glyph table");
        table
    }

    pub fn insert(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch, glyph);
    }

    pub fn get(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    /// Number of defined characters.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Defined characters in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }
}

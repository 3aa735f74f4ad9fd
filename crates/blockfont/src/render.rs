use crate::{
    glyph::{GlyphTable, GLYPH_HEIGHT},
    segment::{segment, Segment},
};

/// Rendered output together with its widest line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    text: String,
    width: usize,
}

impl Banner {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Length in characters of the longest line.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl std::fmt::Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render pre-segmented text.
///
/// A newline segment contributes one empty line. A run contributes
/// [`GLYPH_HEIGHT`] lines, each the concatenation of the matching glyph row
/// of every character in the run. Characters missing from `table` are
/// skipped.
pub fn render(table: &GlyphTable, segments: &[Segment]) -> Banner {
    let mut text = String::new();

    for seg in segments {
        let run = match seg {
            Segment::NewLine => {
                text.push('\n');
                continue;
            }
            Segment::Run(run) => run,
        };
        for row in 0..GLYPH_HEIGHT {
            for ch in run.chars() {
                if let Some(line) = table.get(ch).and_then(|g| g.row(row)) {
                    text.push_str(line);
                }
            }
            text.push('\n');
        }
    }

    let width = text
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    Banner { text, width }
}

/// Segment `text` and render it.
pub fn render_str(table: &GlyphTable, text: &str) -> Banner {
    render(table, &segment(text))
}

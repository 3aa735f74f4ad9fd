//! Splitting input text into newline markers and renderable runs.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A single line break.
    NewLine,
    /// One or more consecutive non-newline characters.
    Run(String),
}

/// Replace every literal backslash-n pair with a real newline.
pub fn normalize_escapes(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Tokenize `text` in order, after escape normalization.
///
/// Runs are never empty, and consecutive newlines produce consecutive
/// [`Segment::NewLine`] entries.
pub fn segment(text: &str) -> Vec<Segment> {
    let text = normalize_escapes(text);
    let mut segments = Vec::new();
    let mut run = String::new();

    for ch in text.chars() {
        if ch == '\n' {
            if !run.is_empty() {
                segments.push(Segment::Run(std::mem::take(&mut run)));
            }
            segments.push(Segment::NewLine);
        } else {
            run.push(ch);
        }
    }
    if !run.is_empty() {
        segments.push(Segment::Run(run));
    }
    segments
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("unknown font: {0}")]
    UnknownFont(String),
    #[error("cannot read font file {}: {source}", path.display())]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("digest mismatch for font {name}: expected {expected}, got {actual}")]
    DigestMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    #[error("registry error: {0}")]
    Registry(String),
    #[error("terminal size query failed: {0}")]
    TerminalQuery(String),
    #[error("banner is {width} columns wide, terminal has {columns}")]
    TooWide { width: usize, columns: usize },
}

impl BannerError {
    /// True for every failure that means the requested font cannot be trusted.
    pub fn is_font_error(&self) -> bool {
        matches!(
            self,
            BannerError::UnknownFont(_)
                | BannerError::FontIo { .. }
                | BannerError::DigestMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BannerError>;

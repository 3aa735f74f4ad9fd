use std::{fs, path::PathBuf};

use sha2::{Digest, Sha256};

use crate::{
    error::{BannerError, Result},
    glyph::GlyphTable,
    registry::{FontRegistry, FontSpec},
};

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Resolves font names through a [`FontRegistry`] and reads verified
/// definition sources from a font directory.
#[derive(Clone, Debug)]
pub struct FontLoader {
    dir: PathBuf,
    registry: FontRegistry,
}

impl FontLoader {
    pub fn new(dir: impl Into<PathBuf>, registry: FontRegistry) -> Self {
        Self {
            dir: dir.into(),
            registry,
        }
    }

    /// Look up `name`, or the registry default when `None`.
    pub fn resolve(&self, name: Option<&str>) -> Result<&FontSpec> {
        let name = name.unwrap_or_else(|| self.registry.default_font());
        self.registry
            .get(name)
            .ok_or_else(|| BannerError::UnknownFont(name.to_string()))
    }

    /// Read the definition source of a font and check it against the
    /// registered digest. Nothing is returned unless the digest matches.
    pub fn load_source(&self, name: Option<&str>) -> Result<String> {
        let spec = self.resolve(name)?;
        let path = self.dir.join(&spec.file);
        tracing::debug!(font = %spec.name, path = %path.display(), "reading font");

        let bytes = fs::read(&path).map_err(|source| BannerError::FontIo {
            path: path.clone(),
            source,
        })?;
        let actual = sha256_hex(&bytes);
        if !actual.eq_ignore_ascii_case(&spec.sha256) {
            tracing::warn!(font = %spec.name, expected = %spec.sha256, %actual, "font digest mismatch");
            return Err(BannerError::DigestMismatch {
                name: spec.name.clone(),
                expected: spec.sha256.clone(),
                actual,
            });
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Load, verify and parse a font into a glyph table.
    pub fn load(&self, name: Option<&str>) -> Result<GlyphTable> {
        let spec = self.resolve(name)?;
        let source = self.load_source(Some(&spec.name))?;
        Ok(GlyphTable::parse_with(&source, spec.layout()))
    }
}

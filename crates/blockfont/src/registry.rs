//! Trusted fonts: which names may be loaded, from which file, with which digest.

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{BannerError, Result},
    glyph::Layout,
};

const STANDARD_SHA256: &str = "e194f1033442617ab8a78e1ca63a2061f5cc07a3f05ac226ed32eb9dfd22a6bf";
const SHADOW_SHA256: &str = "26b94d0b134b77e9fd23e0360bfd81740f80fb7f6541d1d8c5d85e73ee550f73";
const THINKERTOY_SHA256: &str = "64285e4960d199f4819323c4dc6319ba34f1f0dd9da14d07111345f5d76c3fa3";

/// One trusted font.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub name: String,
    /// Path of the definition file, relative to the font directory.
    pub file: PathBuf,
    /// Lowercase hex SHA-256 of the file contents.
    pub sha256: String,
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,
    #[serde(default)]
    pub separator_lines: usize,
}

fn default_header_lines() -> usize {
    1
}

impl FontSpec {
    /// Entry for `<name>.txt` in the stock padded layout.
    pub fn stock(name: &str, sha256: &str) -> Self {
        let layout = Layout::padded();
        Self {
            name: name.to_string(),
            file: PathBuf::from(format!("{name}.txt")),
            sha256: sha256.to_string(),
            header_lines: layout.header_lines,
            separator_lines: layout.separator_lines,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout {
            header_lines: self.header_lines,
            separator_lines: self.separator_lines,
        }
    }
}

/// The set of fonts a [`crate::FontLoader`] will accept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRegistry {
    default: String,
    #[serde(rename = "font", default)]
    fonts: Vec<FontSpec>,
}

impl FontRegistry {
    /// Build a registry, checking that names are unique and that `default`
    /// is one of them.
    pub fn new(default: impl Into<String>, fonts: Vec<FontSpec>) -> Result<Self> {
        let registry = Self {
            default: default.into(),
            fonts,
        };
        registry.validate()?;
        Ok(registry)
    }

    /// The stock fonts: `standard` (default), `shadow` and `thinkertoy`.
    pub fn builtin() -> Self {
        Self {
            default: "standard".to_string(),
            fonts: vec![
                FontSpec::stock("standard", STANDARD_SHA256),
                FontSpec::stock("shadow", SHADOW_SHA256),
                FontSpec::stock("thinkertoy", THINKERTOY_SHA256),
            ],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let registry: FontRegistry =
            toml::from_str(content).map_err(|e| BannerError::Registry(e.to_string()))?;
        registry.validate()?;
        Ok(registry)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BannerError::Registry(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        for (i, spec) in self.fonts.iter().enumerate() {
            if self.fonts[..i].iter().any(|s| s.name == spec.name) {
                return Err(BannerError::Registry(format!(
                    "duplicate font name: {}",
                    spec.name
                )));
            }
        }
        if self.get(&self.default).is_none() {
            return Err(BannerError::Registry(format!(
                "default font {} is not registered",
                self.default
            )));
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FontSpec> {
        self.fonts.iter().find(|s| s.name == name)
    }

    pub fn default_font(&self) -> &str {
        &self.default
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(|s| s.name.as_str())
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

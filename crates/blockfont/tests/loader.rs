use std::fs;

use blockfont::{
    sha256_hex,
    test_support::{definition_source, padded_definition_source},
    BannerError, FontLoader, FontRegistry, FontSpec, Glyph,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn compact_spec(name: &str, content: &str) -> FontSpec {
    FontSpec {
        name: name.to_string(),
        file: format!("{name}.txt").into(),
        sha256: sha256_hex(content.as_bytes()),
        header_lines: 1,
        separator_lines: 0,
    }
}

fn setup(content: &str) -> (TempDir, FontLoader) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("mini.txt"), content).unwrap();
    let registry = FontRegistry::new("mini", vec![compact_spec("mini", content)]).unwrap();
    let loader = FontLoader::new(dir.path(), registry);
    (dir, loader)
}

#[test]
fn sha256_hex_is_lowercase_hex() {
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn verified_font_loads() {
    let content = definition_source(&[" ", "!"]);
    let (_dir, loader) = setup(&content);
    assert_eq!(loader.load_source(None).unwrap(), content);
    let table = loader.load(Some("mini")).unwrap();
    assert_eq!(table.get('!'), Some(&Glyph::uniform("!")));
}

#[test]
fn tampered_font_is_rejected() {
    let content = definition_source(&[" ", "!"]);
    let (dir, loader) = setup(&content);
    fs::write(dir.path().join("mini.txt"), content.replace('!', "?")).unwrap();
    let err = loader.load(None).unwrap_err();
    assert!(matches!(err, BannerError::DigestMismatch { ref name, .. } if name == "mini"));
    assert!(err.is_font_error());
}

#[test]
fn missing_file_is_a_font_error() {
    let content = definition_source(&[" "]);
    let (dir, loader) = setup(&content);
    fs::remove_file(dir.path().join("mini.txt")).unwrap();
    let err = loader.load(None).unwrap_err();
    assert!(matches!(err, BannerError::FontIo { .. }));
    assert!(err.is_font_error());
}

#[test]
fn unknown_name_is_a_font_error() {
    let (_dir, loader) = setup(&definition_source(&[" "]));
    let err = loader.load(Some("comic")).unwrap_err();
    assert!(matches!(err, BannerError::UnknownFont(ref n) if n == "comic"));
    assert!(err.is_font_error());
}

#[test]
fn uppercase_digest_is_accepted() {
    let content = definition_source(&[" "]);
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("mini.txt"), &content).unwrap();
    let mut spec = compact_spec("mini", &content);
    spec.sha256 = spec.sha256.to_uppercase();
    let loader = FontLoader::new(dir.path(), FontRegistry::new("mini", vec![spec]).unwrap());
    assert!(loader.load(None).is_ok());
}

#[test]
fn stock_layout_is_applied_from_registry() {
    let content = padded_definition_source(&[" ", "|"]);
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stock.txt"), &content).unwrap();
    let spec = FontSpec::stock("stock", &sha256_hex(content.as_bytes()));
    let loader = FontLoader::new(dir.path(), FontRegistry::new("stock", vec![spec]).unwrap());
    let table = loader.load(None).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get('!'), Some(&Glyph::uniform("|")));
}

#[test]
fn builtin_registry_rejects_foreign_standard_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("standard.txt"), definition_source(&[" "])).unwrap();
    let loader = FontLoader::new(dir.path(), FontRegistry::builtin());
    assert!(matches!(
        loader.load(None),
        Err(BannerError::DigestMismatch { .. })
    ));
}

use std::io::Write;

use dropdown::{Appearance, Color, ConfigError, ListAlignment, TextStyle};
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_reads_file() {
    let file = write_config(
        r##"{
            "item_font": { "bold": true },
            "item_background": "oklch(0.2, 0, 0)",
            "scrim_tint": "rgba(0, 0, 0, 0.4)",
            "alignment": "from_zero",
            "border_width": 2,
            "separators": true
        }"##,
    );

    let appearance = Appearance::load(file.path()).unwrap();
    assert_eq!(appearance.item_font, TextStyle::new().bold());
    assert_eq!(appearance.item_background, Color::oklch(0.2, 0.0, 0.0));
    assert_eq!(appearance.scrim_tint, Color::BLACK.alpha(0.4));
    assert_eq!(appearance.alignment, ListAlignment::FromZero);
    assert_eq!(appearance.border_width, 2);
    assert!(appearance.separators);
    assert_eq!(appearance.row_height, 1);
}

#[test]
fn test_saved_config_loads_back() {
    let appearance = Appearance::new()
        .item_text_color(Color::hex(0x336699))
        .corner_radius(0)
        .row_height(2);
    let file = write_config(&appearance.to_json().unwrap());

    assert_eq!(Appearance::load(file.path()).unwrap(), appearance);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = Appearance::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = write_config(r#"{ "row_height": 0 }"#);
    let err = Appearance::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "row_height", .. }));
    assert_eq!(err.to_string(), "Invalid row_height: must be at least 1");

    let file = write_config("{ not json");
    assert!(matches!(
        Appearance::load(file.path()).unwrap_err(),
        ConfigError::Parse(_)
    ));
}

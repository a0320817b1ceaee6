use super::*;

#[test]
fn load_font_reports_missing_file() {
    let err = load_font(Some(Path::new("/nonexistent/font.ttf"))).unwrap_err();
    assert!(err.to_string().contains("font"));
}

#[test]
fn load_font_rejects_non_font_bytes() {
    let tmp = std::env::temp_dir().join(format!(
        "winecloud_fonts_bad_{}_{}.ttf",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&tmp, b"definitely not a font").unwrap();
    let err = load_font(Some(&tmp)).unwrap_err();
    assert!(matches!(err, crate::error::CloudError::Render(_)));
    std::fs::remove_file(&tmp).ok();
}

#[test]
fn discovered_system_fonts_parse() {
    let Some(path) = find_system_font() else {
        eprintln!("skipping: no system font found");
        return;
    };
    load_font(Some(&path)).unwrap();
}

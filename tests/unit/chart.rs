use super::*;

#[test]
fn tick_rotation_snaps_to_quarter_turns() {
    assert!(matches!(tick_transform(0), FontTransform::None));
    assert!(matches!(tick_transform(30), FontTransform::None));
    assert!(matches!(tick_transform(50), FontTransform::Rotate90));
    assert!(matches!(tick_transform(90), FontTransform::Rotate90));
    assert!(matches!(tick_transform(180), FontTransform::Rotate180));
    assert!(matches!(tick_transform(270), FontTransform::Rotate270));
    assert!(matches!(tick_transform(350), FontTransform::None));
    assert!(matches!(tick_transform(360), FontTransform::None));
}

#[test]
fn render_rejects_empty_series_and_zero_size() {
    let out = std::env::temp_dir().join("winecloud_chart_unused.png");
    let err = BarChart::new().render(&[], &out).unwrap_err();
    assert!(matches!(err, CloudError::Chart(_)));

    let bars = vec![("Italy".to_string(), 3.0)];
    let err = BarChart::new().size(0, 100).render(&bars, &out).unwrap_err();
    assert!(matches!(err, CloudError::Chart(_)));
}

#[test]
fn render_writes_a_png() {
    if crate::fonts::find_system_font().is_none() {
        eprintln!("skipping: no system font found");
        return;
    }
    let out = std::env::temp_dir().join(format!(
        "winecloud_chart_{}_{}.png",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let bars = vec![
        ("Italy".to_string(), 3.0),
        ("France".to_string(), 5.0),
        ("US".to_string(), 2.0),
    ];
    BarChart::new()
        .title("Wines by country")
        .x_label("Country of Origin")
        .y_label("Number of Wines")
        .size(640, 480)
        .render(&bars, &out)
        .unwrap();

    let meta = std::fs::metadata(&out).unwrap();
    assert!(meta.len() > 0);
    std::fs::remove_file(&out).ok();
}

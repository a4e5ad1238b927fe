use approx::assert_abs_diff_eq;
use pie_chart_rs::ChartError;
use pie_chart_rs::api::{EngineSnapshot, PieChartConfig, PieChartEngine, PointerEvent};
use pie_chart_rs::core::{SliceConfig, Viewport};
use pie_chart_rs::interaction::InteractionMode;
use pie_chart_rs::render::{Color, NullRenderer};

fn slices() -> Vec<SliceConfig> {
    vec![
        SliceConfig::new(2.0, Color::rgb(0.8, 0.1, 0.1), "rent"),
        SliceConfig::new(1.0, Color::rgb(0.1, 0.8, 0.1), "food"),
        SliceConfig::new(1.0, Color::rgb(0.1, 0.1, 0.8), "misc"),
    ]
}

#[test]
fn config_defaults_fill_missing_fields_when_deserializing() {
    let config: PieChartConfig =
        serde_json::from_str(r#"{"viewport":{"width":320,"height":240}}"#).expect("parse config");
    assert_eq!(config, PieChartConfig::new(Viewport::new(320, 240)));
    assert_abs_diff_eq!(config.radius, 80.0);
    assert_abs_diff_eq!(config.selection_offset, 8.0);
    assert!(config.rotation_enabled);
    assert!(!config.show_ratio_only);
}

#[test]
fn builder_methods_override_defaults() {
    let config = PieChartConfig::new(Viewport::new(640, 480))
        .with_radius(120.0)
        .with_selection_offset(12.0)
        .with_text_style(14.0, Color::rgb(0.2, 0.2, 0.2))
        .with_show_ratio_only(true)
        .with_connector_lengths(20.0, 10.0)
        .with_rotation_enabled(false)
        .with_drag_threshold_px(4.0);

    assert_abs_diff_eq!(config.radius, 120.0);
    assert_abs_diff_eq!(config.selection_offset, 12.0);
    assert_abs_diff_eq!(config.text_size, 14.0);
    assert!(config.show_ratio_only);
    assert_abs_diff_eq!(config.connector_length1, 20.0);
    assert_abs_diff_eq!(config.connector_length2, 10.0);
    assert!(!config.rotation_enabled);
    assert_abs_diff_eq!(config.drag_threshold_px, 4.0);
}

#[test]
fn invalid_config_is_rejected() {
    let err = PieChartEngine::new(
        NullRenderer::default(),
        PieChartConfig::new(Viewport::new(0, 200)),
    )
    .err()
    .expect("zero width");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 200 }));

    let err = PieChartEngine::new(
        NullRenderer::default(),
        PieChartConfig::new(Viewport::new(200, 200)).with_radius(0.0),
    )
    .err()
    .expect("zero radius");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = PieChartEngine::new(
        NullRenderer::default(),
        PieChartConfig::new(Viewport::new(200, 200)).with_selection_offset(f64::NAN),
    )
    .err()
    .expect("nan offset");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn preferred_height_reserves_room_for_labels() {
    let config = PieChartConfig::new(Viewport::new(300, 300));
    let engine = PieChartEngine::new(NullRenderer::default(), config).expect("engine init");
    // (radius + offset + radial connector + half line + padding) * 2
    assert_abs_diff_eq!(engine.preferred_height(), (80.0 + 8.0 + 14.0 + 5.0 + 2.0) * 2.0);
}

#[test]
fn resizing_recenters_the_pie_and_keeps_slices() {
    let mut engine = PieChartEngine::new(
        NullRenderer::default(),
        PieChartConfig::new(Viewport::new(300, 300)),
    )
    .expect("engine init");
    engine.set_slices(slices()).expect("set slices");
    engine.render().expect("render");

    engine.set_viewport(Viewport::new(500, 260)).expect("resize");
    assert_eq!(engine.center().x, 250.0);
    assert_eq!(engine.center().y, 130.0);
    assert_eq!(engine.slices().len(), 3);
    assert!(engine.has_pending_invalidation());

    let err = engine
        .set_viewport(Viewport::new(500, 0))
        .expect_err("invalid viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert_eq!(engine.viewport(), Viewport::new(500, 260));
}

#[test]
fn invalid_slices_keep_the_previous_chart() {
    let mut engine = PieChartEngine::new(
        NullRenderer::default(),
        PieChartConfig::new(Viewport::new(300, 300)),
    )
    .expect("engine init");
    engine.set_slices(slices()).expect("set slices");

    let err = engine
        .set_slices(vec![SliceConfig::new(-1.0, Color::BLACK, "bad")])
        .expect_err("negative value");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(engine.slices().len(), 3);
    assert_eq!(engine.slices()[0].label, "rent");
}

#[test]
fn snapshot_json_captures_state() {
    let mut engine = PieChartEngine::new(
        NullRenderer::default(),
        PieChartConfig::new(Viewport::new(300, 300)),
    )
    .expect("engine init");
    engine.set_slices(slices()).expect("set slices");
    engine.handle_pointer(PointerEvent::down(150.0, 200.0));

    let snapshot = engine.snapshot().expect("snapshot");
    assert_eq!(snapshot.slices.len(), 3);
    assert_eq!(snapshot.labels.len(), 3);
    assert_eq!(snapshot.interaction_mode, InteractionMode::Pressed);
    assert!(!snapshot.degenerate);
    assert_abs_diff_eq!(snapshot.total_value, 4.0);
    assert!(snapshot.plugin_ids.is_empty());

    let json = engine.snapshot_json_pretty().expect("snapshot json");
    assert!(json.contains("\"rotation\""));
    assert!(json.contains("\"rent\""));
    let decoded: EngineSnapshot = serde_json::from_str(&json).expect("decode snapshot");
    assert_eq!(decoded.config, snapshot.config);
    assert_eq!(decoded.interaction_mode, InteractionMode::Pressed);
    let labels: Vec<&str> = decoded.slices.iter().map(|slice| slice.label.as_str()).collect();
    assert_eq!(labels, vec!["rent", "food", "misc"]);
    for (decoded, original) in decoded.labels.iter().zip(&snapshot.labels) {
        assert_eq!(decoded.text, original.text);
        assert_eq!(decoded.visible, original.visible);
        assert_abs_diff_eq!(decoded.bisector, original.bisector, epsilon = 1e-9);
    }
}

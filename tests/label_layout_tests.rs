use approx::assert_abs_diff_eq;
use pie_chart_rs::api::{PieChartConfig, PieChartEngine};
use pie_chart_rs::core::{
    FontMetrics, LabelDirection, LabelLayoutParams, Point, SliceConfig, Viewport,
    compute_pie_geometry, label_text, layout_labels,
};
use pie_chart_rs::render::{Color, NullRenderer};

fn configs(values: &[f64]) -> Vec<SliceConfig> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| SliceConfig::new(*value, Color::BLACK, format!("L{i}")))
        .collect()
}

fn params() -> LabelLayoutParams {
    LabelLayoutParams {
        center: Point::new(200.0, 200.0),
        pie_radius: 80.0,
        selection_offset: 8.0,
        connector_length1: 14.0,
        connector_length2: 6.0,
        rotation: 0.0,
        show_ratio_only: true,
        font_metrics: FontMetrics::estimate(10.0),
    }
}

#[test]
fn connector_runs_radially_then_horizontally_away_from_the_pie() {
    let geometry = compute_pie_geometry(&configs(&[1.0, 1.0, 1.0, 1.0])).expect("geometry");
    let params = params();
    let layouts = layout_labels(geometry.drawable(), &params, |_| 30.0).expect("layout");
    assert_eq!(layouts.len(), 4);

    let right = &layouts[0];
    assert_abs_diff_eq!(right.bisector, 45.0, epsilon = 1e-9);
    assert_eq!(right.direction, LabelDirection::Rightward);
    assert_abs_diff_eq!(right.anchor.distance_to(params.center), 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(right.connector[1].distance_to(params.center), 94.0, epsilon = 1e-9);
    assert_abs_diff_eq!(right.connector[2].x - right.connector[1].x, 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(right.connector[2].y, right.connector[1].y);
    assert_abs_diff_eq!(right.text_box.left, right.connector[2].x);

    let left = &layouts[1];
    assert_abs_diff_eq!(left.bisector, 135.0, epsilon = 1e-9);
    assert_eq!(left.direction, LabelDirection::Leftward);
    assert_abs_diff_eq!(left.connector[2].x - left.connector[1].x, -6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(left.text_box.right(), left.connector[2].x, epsilon = 1e-9);

    assert!(layouts.iter().all(|layout| layout.visible));
}

#[test]
fn text_box_is_vertically_centered_on_the_elbow() {
    let geometry = compute_pie_geometry(&configs(&[1.0, 1.0])).expect("geometry");
    let params = params();
    let layouts = layout_labels(geometry.drawable(), &params, |_| 24.0).expect("layout");

    for layout in &layouts {
        let elbow = layout.connector[1];
        assert_abs_diff_eq!(layout.text_box.height, 10.0);
        assert_abs_diff_eq!(layout.text_box.center().y, elbow.y, epsilon = 1e-9);
        assert_abs_diff_eq!(layout.baseline_y, layout.text_box.top + 8.0, epsilon = 1e-9);
    }
}

#[test]
fn selected_slice_label_moves_out_with_the_wedge() {
    let geometry = compute_pie_geometry(&configs(&[1.0, 1.0])).expect("geometry");
    let mut slices = geometry.slices().to_vec();
    slices[1].selected = true;
    let params = params();
    let layouts = layout_labels(&slices, &params, |_| 24.0).expect("layout");

    assert_abs_diff_eq!(layouts[0].anchor.distance_to(params.center), 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layouts[1].anchor.distance_to(params.center), 88.0, epsilon = 1e-9);
}

#[test]
fn crowded_labels_never_overlap_their_previous_drawn_neighbor() {
    let geometry = compute_pie_geometry(&configs(&[1.0; 20])).expect("geometry");
    let layouts = layout_labels(geometry.drawable(), &params(), |_| 60.0).expect("layout");

    assert_eq!(layouts.len(), 20);
    assert!(layouts[0].visible);
    assert!(layouts.iter().any(|layout| !layout.visible));

    let drawn: Vec<_> = layouts.iter().filter(|layout| layout.visible).collect();
    for pair in drawn.windows(2) {
        assert!(!pair[0].text_box.intersects(pair[1].text_box));
    }
}

#[test]
fn closing_label_yields_to_the_first_label() {
    let geometry = compute_pie_geometry(&configs(&[1.0, 98.0, 1.0])).expect("geometry");
    let layouts = layout_labels(geometry.drawable(), &params(), |_| 40.0).expect("layout");

    let visible: Vec<bool> = layouts.iter().map(|layout| layout.visible).collect();
    assert_eq!(visible, vec![true, true, false]);
    assert!(layouts[2].text_box.intersects(layouts[0].text_box));
}

#[test]
fn zero_value_slices_get_no_label() {
    let geometry = compute_pie_geometry(&configs(&[3.0, 0.0, 1.0])).expect("geometry");
    let layouts = layout_labels(geometry.slices(), &params(), |_| 20.0).expect("layout");
    let indices: Vec<usize> = layouts.iter().map(|layout| layout.slice_index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn label_text_uses_label_and_truncated_percent() {
    let geometry = compute_pie_geometry(&configs(&[1.0, 2.0, 5.0])).expect("geometry");
    let slices = geometry.slices();

    assert_eq!(label_text(&slices[0], true).expect("text"), "12.5%");
    assert_eq!(label_text(&slices[0], false).expect("text"), "L0(12.5%)");
    assert_eq!(label_text(&slices[1], false).expect("text"), "L1(25%)");
}

#[test]
fn engine_measures_label_text_through_its_renderer() {
    let config = PieChartConfig::new(Viewport::new(400, 400)).with_show_ratio_only(true);
    let mut engine = PieChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_slices(configs(&[1.0, 1.0, 2.0]))
        .expect("set slices");

    let layouts = engine.label_layouts().expect("layouts");
    assert_eq!(layouts.len(), 3);
    // "25%" at 10px with the 0.6 glyph estimate.
    assert_abs_diff_eq!(layouts[0].text_box.width, 18.0, epsilon = 1e-9);
    assert_eq!(layouts[2].text, "50%");
}

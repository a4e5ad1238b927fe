use pie_chart_rs::core::{
    Point, SliceConfig, compute_pie_geometry, pointer_angle, slice_index_at_angle,
};
use pie_chart_rs::render::Color;
use proptest::prelude::*;

fn configs(values: &[f64]) -> Vec<SliceConfig> {
    values
        .iter()
        .map(|value| SliceConfig::new(*value, Color::rgb(0.5, 0.5, 0.5), "p"))
        .collect()
}

proptest! {
    #[test]
    fn drawable_sweeps_close_the_circle(
        values in prop::collection::vec(0.0f64..1000.0, 1..64)
    ) {
        prop_assume!(values.iter().any(|value| *value > 0.0));
        let geometry = compute_pie_geometry(&configs(&values)).expect("geometry");

        let sweep_sum: f64 = geometry.drawable().map(|slice| slice.sweep_angle).sum();
        prop_assert!((sweep_sum - 360.0).abs() < 1e-9);

        for slice in geometry.slices() {
            prop_assert!((0.0..360.0).contains(&slice.start_angle));
            prop_assert!((0.0..=360.0).contains(&slice.sweep_angle));
            prop_assert_eq!(slice.sweep_angle == 0.0, slice.value == 0.0);
        }
    }

    #[test]
    fn corrected_ratios_stay_within_rounding_of_one(
        values in prop::collection::vec(0.0f64..1000.0, 1..64)
    ) {
        prop_assume!(values.iter().any(|value| *value > 0.0));
        let geometry = compute_pie_geometry(&configs(&values)).expect("geometry");

        let ratio_sum: f64 = geometry.slices().iter().map(|slice| slice.ratio).sum();
        prop_assert!((ratio_sum - 1.0).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn pointer_angle_stays_in_range(dx in -500.0f64..500.0, dy in -500.0f64..500.0) {
        let center = Point::new(250.0, 250.0);
        let angle = pointer_angle(center, Point::new(center.x + dx, center.y + dy));
        prop_assert!((0.0..360.0).contains(&angle));
    }

    #[test]
    fn every_angle_hits_exactly_the_covering_slice(
        values in prop::collection::vec(1.0f64..100.0, 1..24),
        angle in 0.0f64..360.0,
        rotation in 0.0f64..360.0,
    ) {
        let geometry = compute_pie_geometry(&configs(&values)).expect("geometry");
        let hit = slice_index_at_angle(geometry.drawable(), angle, rotation);
        prop_assert!(hit.is_some());
        prop_assert!(hit.is_some_and(|index| index < values.len()));
    }
}

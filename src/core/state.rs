use serde::{Deserialize, Serialize};

use super::angle::normalize_degrees;
use super::geometry::PieGeometry;
use super::slice::Slice;

/// Session-scoped chart state: slice geometry plus rotation.
///
/// Slices are replaced wholesale; only rotation and selection flags are
/// mutated in place. At most one slice is selected at any time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartState {
    geometry: PieGeometry,
    rotation: f64,
}

impl ChartState {
    #[must_use]
    pub fn geometry(&self) -> &PieGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        self.geometry.slices()
    }

    /// Rotation in degrees, kept in `[0, 360)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Installs a freshly computed geometry and resets rotation.
    ///
    /// Returns `false` without touching anything for [`PieGeometry::Empty`].
    pub fn replace_geometry(&mut self, geometry: PieGeometry) -> bool {
        if geometry.is_empty() {
            return false;
        }
        self.geometry = geometry;
        self.rotation = 0.0;
        true
    }

    pub fn rotate_by(&mut self, delta_degrees: f64) {
        if delta_degrees.is_finite() {
            self.rotation = normalize_degrees(self.rotation + delta_degrees);
        }
    }

    #[must_use]
    pub fn selected_slice(&self) -> Option<&Slice> {
        self.slices().iter().find(|slice| slice.selected)
    }

    pub fn clear_selection(&mut self) {
        self.clear_selection_except(None);
    }

    /// Clears every selection flag except the one at `keep`.
    pub fn clear_selection_except(&mut self, keep: Option<usize>) {
        for slice in self.geometry.slices_mut() {
            if Some(slice.index) != keep {
                slice.selected = false;
            }
        }
    }

    /// Tap semantics: clears the others, then flips `index`.
    ///
    /// Zero-sweep slices and unknown indices are ignored. Returns the new
    /// flag of the toggled slice.
    pub fn toggle_selection(&mut self, index: usize) -> Option<bool> {
        if !self.is_selectable(index) {
            return None;
        }
        self.clear_selection_except(Some(index));
        let slice = self.geometry.slices_mut().get_mut(index)?;
        slice.selected = !slice.selected;
        Some(slice.selected)
    }

    /// Selects `index` exclusively. Returns `false` when it is not selectable.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.is_selectable(index) {
            return false;
        }
        for slice in self.geometry.slices_mut() {
            slice.selected = slice.index == index;
        }
        true
    }

    fn is_selectable(&self, index: usize) -> bool {
        self.geometry
            .drawable()
            .any(|slice| slice.index == index)
    }
}

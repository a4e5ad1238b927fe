//! Degree-space helpers shared by geometry, layout, rendering and hit-testing.
//!
//! All angles are degrees measured clockwise from the 3 o'clock direction in
//! screen space (Y grows downward), matching arc-drawing conventions of
//! Cairo-like surfaces.

use super::types::Point;

pub const FULL_TURN_DEG: f64 = 360.0;

/// Wraps any finite angle into `[0, 360)`. Non-finite input maps to `0`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round tiny negatives up to exactly 360.
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Screen quadrant around the pie center, clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Lower right: `[0, 90]`.
    First,
    /// Lower left: `(90, 180]`.
    Second,
    /// Upper left: `(180, 270]`.
    Third,
    /// Upper right: `(270, 360)`.
    Fourth,
}

/// Per-quadrant entry of the shared branch table.
///
/// Offsets use the local angle between the direction and `offset_ref_deg`;
/// only `Third` puts sine on the X leg. Pointer mapping measures from
/// `base_deg`, and in `Second` and `Fourth` the opposite leg is the X
/// distance.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QuadrantSpec {
    base_deg: f64,
    offset_ref_deg: f64,
    x_sign: f64,
    y_sign: f64,
    offset_swaps_legs: bool,
    pointer_swaps_legs: bool,
}

impl Quadrant {
    const fn spec(self) -> QuadrantSpec {
        match self {
            Self::First => QuadrantSpec {
                base_deg: 0.0,
                offset_ref_deg: 0.0,
                x_sign: 1.0,
                y_sign: 1.0,
                offset_swaps_legs: false,
                pointer_swaps_legs: false,
            },
            Self::Second => QuadrantSpec {
                base_deg: 90.0,
                offset_ref_deg: 180.0,
                x_sign: -1.0,
                y_sign: 1.0,
                offset_swaps_legs: false,
                pointer_swaps_legs: true,
            },
            Self::Third => QuadrantSpec {
                base_deg: 180.0,
                offset_ref_deg: 270.0,
                x_sign: -1.0,
                y_sign: -1.0,
                offset_swaps_legs: true,
                pointer_swaps_legs: false,
            },
            Self::Fourth => QuadrantSpec {
                base_deg: 270.0,
                offset_ref_deg: 360.0,
                x_sign: 1.0,
                y_sign: -1.0,
                offset_swaps_legs: false,
                pointer_swaps_legs: true,
            },
        }
    }

    /// Quadrant of a normalized angle; upper boundaries are inclusive.
    #[must_use]
    pub fn of_degrees(degrees: f64) -> Self {
        let degrees = normalize_degrees(degrees);
        if degrees <= 90.0 {
            Self::First
        } else if degrees <= 180.0 {
            Self::Second
        } else if degrees <= 270.0 {
            Self::Third
        } else {
            Self::Fourth
        }
    }

    /// Quadrant of a non-zero offset from the center.
    ///
    /// Each axis ray belongs to the quadrant it opens, so the adjacent leg is
    /// always strictly positive: the positive X ray is `First`, positive Y is
    /// `Second`, negative X is `Third` and negative Y is `Fourth`.
    #[must_use]
    pub fn of_offset(dx: f64, dy: f64) -> Self {
        if dx > 0.0 && dy >= 0.0 {
            Self::First
        } else if dx <= 0.0 && dy > 0.0 {
            Self::Second
        } else if dx < 0.0 && dy <= 0.0 {
            Self::Third
        } else {
            Self::Fourth
        }
    }
}

/// Signed `(dx, dy)` displacement of length `distance` along `degrees`.
#[must_use]
pub fn polar_offset(degrees: f64, distance: f64) -> (f64, f64) {
    let degrees = normalize_degrees(degrees);
    let spec = Quadrant::of_degrees(degrees).spec();
    let local = (degrees - spec.offset_ref_deg).abs().to_radians();
    let (along_x, along_y) = if spec.offset_swaps_legs {
        (local.sin(), local.cos())
    } else {
        (local.cos(), local.sin())
    };
    (
        spec.x_sign * along_x * distance,
        spec.y_sign * along_y * distance,
    )
}

/// Point at `radius` from `center` along `degrees`.
#[must_use]
pub fn point_on_circle(center: Point, radius: f64, degrees: f64) -> Point {
    let (dx, dy) = polar_offset(degrees, radius);
    center.offset(dx, dy)
}

/// Whole-pixel shift applied to the selected wedge's bounds.
///
/// Each leg is truncated toward zero so the pulled-out wedge stays
/// pixel-aligned.
#[must_use]
pub fn selection_shift(bisector_deg: f64, selection_offset: f64) -> (f64, f64) {
    let (dx, dy) = polar_offset(bisector_deg, selection_offset);
    (dx.trunc(), dy.trunc())
}

/// Maps a pointer position to its angle around `center`, in `[0, 360)`.
///
/// The mapping is continuous and increases clockwise from 3 o'clock. A
/// pointer exactly on the center has no defined direction and maps to `0`.
#[must_use]
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    if !dx.is_finite() || !dy.is_finite() {
        return 0.0;
    }

    let quadrant = Quadrant::of_offset(dx, dy);
    let spec = quadrant.spec();
    let (opposite, adjacent) = if spec.pointer_swaps_legs {
        (dx.abs(), dy.abs())
    } else {
        (dy.abs(), dx.abs())
    };
    normalize_degrees(spec.base_deg + (opposite / adjacent).atan().to_degrees())
}

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::angle::{FULL_TURN_DEG, normalize_degrees};
use super::slice::{Slice, SliceConfig};

/// Decimal places kept when summing the non-largest ratios.
pub const RATIO_CORRECTION_DECIMALS: u32 = 2;

/// Output of the geometry pass.
///
/// Degenerate input is classified once here so layout, rendering and
/// hit-testing only ever consult [`PieGeometry::drawable`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum PieGeometry {
    /// No slices were ever configured.
    #[default]
    Empty,
    /// Slices exist but their values sum to zero; nothing is drawn.
    Degenerate { slices: Vec<Slice> },
    /// Normal chart with a positive total.
    Ready { slices: Vec<Slice>, total: f64 },
}

impl PieGeometry {
    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        match self {
            Self::Empty => &[],
            Self::Degenerate { slices } | Self::Ready { slices, .. } => slices,
        }
    }

    pub(crate) fn slices_mut(&mut self) -> &mut [Slice] {
        match self {
            Self::Empty => &mut [],
            Self::Degenerate { slices } | Self::Ready { slices, .. } => slices,
        }
    }

    /// Slices with a positive sweep, in input order.
    pub fn drawable(&self) -> impl Iterator<Item = &Slice> {
        let slices: &[Slice] = match self {
            Self::Ready { slices, .. } => slices,
            Self::Empty | Self::Degenerate { .. } => &[],
        };
        slices.iter().filter(|slice| slice.is_drawable())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        match self {
            Self::Ready { total, .. } => *total,
            Self::Empty | Self::Degenerate { .. } => 0.0,
        }
    }
}

/// Converts slice weights into ratios and start/sweep angles.
///
/// Empty input yields [`PieGeometry::Empty`]; callers treat that as "keep
/// the previous state". Invalid values (negative or non-finite) are rejected.
pub fn compute_pie_geometry(configs: &[SliceConfig]) -> ChartResult<PieGeometry> {
    if configs.is_empty() {
        return Ok(PieGeometry::Empty);
    }
    for config in configs {
        config.validate()?;
    }

    let total: f64 = configs.iter().map(|config| config.value).sum();
    if total <= 0.0 {
        let slices = configs
            .iter()
            .enumerate()
            .map(|(index, config)| blank_slice(index, config))
            .collect();
        return Ok(PieGeometry::Degenerate { slices });
    }

    // The closing wedge is the last one with a value; trailing zero-value
    // slices keep a zero sweep.
    let closing_index = configs
        .iter()
        .rposition(|config| config.value > 0.0)
        .unwrap_or(configs.len() - 1);

    let mut preceding = 0.0;
    let mut slices = Vec::with_capacity(configs.len());
    for (index, config) in configs.iter().enumerate() {
        let ratio = config.value / total;
        let raw_start = preceding / total * FULL_TURN_DEG;
        preceding += config.value;

        let sweep_angle = if config.value == 0.0 {
            0.0
        } else if index == closing_index {
            FULL_TURN_DEG - raw_start
        } else {
            ratio * FULL_TURN_DEG
        };

        slices.push(Slice {
            value: config.value,
            ratio,
            start_angle: normalize_degrees(raw_start),
            sweep_angle,
            color: config.color,
            label: config.label.clone(),
            selected: false,
            index,
        });
    }

    correct_largest_ratio(&mut slices);
    Ok(PieGeometry::Ready { slices, total })
}

/// Reassigns rounding error to the largest slice so displayed percentages
/// add up to 100%: `largest = 1 - round(sum(other ratios), 2)`.
///
/// The first slice wins ties. The result is not clamped, so unusual
/// distributions can push it slightly past 1.0.
pub fn correct_largest_ratio(slices: &mut [Slice]) {
    let Some(largest) = slices
        .iter()
        .enumerate()
        .min_by_key(|(_, slice)| Reverse(OrderedFloat(slice.ratio)))
        .map(|(position, _)| position)
    else {
        return;
    };

    let others: f64 = slices
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != largest)
        .map(|(_, slice)| slice.ratio)
        .sum();
    slices[largest].ratio = 1.0 - round_ratio_sum(others);
}

/// Half-even rounding to [`RATIO_CORRECTION_DECIMALS`] places on the exact
/// decimal expansion of `value`.
#[must_use]
pub fn round_ratio_sum(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .or_else(|| Decimal::from_f64(value))
        .map(|decimal| {
            decimal.round_dp_with_strategy(
                RATIO_CORRECTION_DECIMALS,
                RoundingStrategy::MidpointNearestEven,
            )
        })
        .and_then(|decimal| decimal.to_f64())
        .unwrap_or(value)
}

fn blank_slice(index: usize, config: &SliceConfig) -> Slice {
    Slice {
        value: config.value,
        ratio: 0.0,
        start_angle: 0.0,
        sweep_angle: 0.0,
        color: config.color,
        label: config.label.clone(),
        selected: false,
        index,
    }
}

//! The Curve Assembler (§4.4): uniform grid generation, discount-factor and
//! forward-rate derivation, non-negativity clamping, and pillar/interpolated
//! source tagging.

use crate::compounding::Compounding;
use crate::conversion::forward_rate_from_dfs;
use crate::interpolation::BootstrapMethod;
use crate::point::{BootstrapPoint, CurvePoint, DiscountFactor, Source};

/// Grid step used when the longest pillar tenor exceeds 10 years.
const LONG_GRID_STEP: f64 = 0.5;
/// Grid step used otherwise.
const SHORT_GRID_STEP: f64 = 0.25;
/// Pillar threshold above which the coarser grid step applies.
const LONG_GRID_THRESHOLD: f64 = 10.0;

/// Source-tagging tolerance: a grid point within this many years of a
/// pillar copies that pillar's source instead of `interpolated`.
const PILLAR_TAG_TOLERANCE: f64 = 0.01;
/// Widened tolerance used for Nelson-Siegel, whose fitted curve rarely
/// touches a pillar tenor exactly.
const NELSON_SIEGEL_TAG_TOLERANCE: f64 = 0.05;

/// Builds the uniform tenor grid `{step, 2*step, ..., max_tenor + step}` (§4.3).
#[must_use]
pub fn build_grid(pillars: &[BootstrapPoint]) -> Vec<f64> {
    let Some(max_tenor) = pillars.iter().map(|p| p.tenor).fold(None, |acc, t| {
        Some(acc.map_or(t, |m: f64| m.max(t)))
    }) else {
        return Vec::new();
    };

    let step = if max_tenor > LONG_GRID_THRESHOLD { LONG_GRID_STEP } else { SHORT_GRID_STEP };
    let n = ((max_tenor + step) / step).ceil() as usize;

    (1..=n).map(|i| i as f64 * step).collect()
}

/// Turns zero rates on the grid into discount factors, forwards, and
/// source tags (§4.4).
#[must_use]
pub fn assemble(pillars: &[BootstrapPoint], grid: &[f64], zero_rates: &[f64], method: BootstrapMethod) -> Vec<DiscountFactor> {
    let tolerance = if method == BootstrapMethod::NelsonSiegel { NELSON_SIEGEL_TAG_TOLERANCE } else { PILLAR_TAG_TOLERANCE };

    let mut dfs = Vec::with_capacity(grid.len());
    let mut prev_df = 1.0;
    let mut prev_t = 0.0;

    for (i, (&t, &r)) in grid.iter().zip(zero_rates.iter()).enumerate() {
        let df = (-r * t).exp();
        let forward = if i == 0 { r } else { forward_rate_from_dfs(prev_df, df, prev_t, t, Compounding::Continuous) }.max(0.0);

        let source = nearest_source(pillars, t, tolerance);

        dfs.push(DiscountFactor { tenor: t, df, zero_rate: r, forward_rate: forward, source });

        prev_df = df;
        prev_t = t;
    }

    dfs
}

fn nearest_source(pillars: &[BootstrapPoint], t: f64, tolerance: f64) -> Source {
    pillars
        .iter()
        .map(|p| (p, (p.tenor - t).abs()))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .filter(|(_, dist)| *dist <= tolerance)
        .map(|(p, _)| p.source)
        .unwrap_or(Source::Interpolated)
}

/// Projects the discount-factor grid into the `(tenor, zero_rate)` pairs
/// used for display (§3).
#[must_use]
pub fn curve_points(discount_factors: &[DiscountFactor]) -> Vec<CurvePoint> {
    discount_factors.iter().map(|d| CurvePoint { tenor: d.tenor, zero_rate: d.zero_rate }).collect()
}

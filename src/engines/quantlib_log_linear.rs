//! §4.3.5 QuantLib-style piecewise log-linear discount factors.
//!
//! Outside the pillar span the raw log-DF interpolant is held flat by
//! [`piecewise_linear`] at the nearest pillar's value; dividing that flat
//! log DF by a different `t` would not hold the zero rate flat, so (as in
//! the Bloomberg engine's §4.3.4 step 2) this engine instead scales by
//! `t/t_0` below the first pillar and holds the last pillar's continuous
//! rate flat beyond it.

use crate::point::BootstrapPoint;

use super::piecewise_linear;

#[must_use]
pub fn zero_rate_curve(pillars: &[BootstrapPoint], grid: &[f64]) -> Vec<f64> {
    if pillars.is_empty() {
        return vec![0.0; grid.len()];
    }

    let xs: Vec<f64> = pillars.iter().map(|p| p.tenor).collect();
    let log_dfs: Vec<f64> = pillars.iter().map(|p| -p.rate * p.tenor).collect();
    let t0 = xs[0];
    let r0 = pillars[0].rate;
    let r_last = pillars.last().unwrap().rate;

    grid.iter()
        .map(|&t| {
            let log_df = if t < t0 {
                (-r0 * t0) * (t / t0)
            } else if t > *xs.last().unwrap() {
                -r_last * t
            } else {
                piecewise_linear(&xs, &log_dfs, t)
            };
            if t > 0.0 {
                -log_df / t
            } else {
                0.0
            }
        })
        .collect()
}

//! §4.3.6 QuantLib-style piecewise log-cubic discount factors.
//!
//! Reuses the natural cubic spline kernel (§9) on `log DF` instead of on
//! the rate directly. As in [`super::quantlib_log_linear`], holding the raw
//! spline value flat outside the pillar span would not hold the zero rate
//! flat, so the same `t/t_0` scaling (below the first pillar) and
//! flat-continuous-rate extrapolation (beyond the last) are applied before
//! dividing by `t`.

use crate::point::BootstrapPoint;

use super::spline_kernel::NaturalCubicSpline;

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
    let t_last = *xs.last().unwrap();
    let spline = NaturalCubicSpline::fit(xs, log_dfs);

    grid.iter()
        .map(|&t| {
            let log_df = if t < t0 {
                (-r0 * t0) * (t / t0)
            } else if t > t_last {
                -r_last * t
            } else {
                spline.eval(t)
            };
            if t > 0.0 {
                -log_df / t
            } else {
                0.0
            }
        })
        .collect()
}

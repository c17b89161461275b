//! §4.3.2 Natural cubic spline on zero rates.

use crate::point::BootstrapPoint;

use super::spline_kernel::NaturalCubicSpline;

#[must_use]
pub fn zero_rate_curve(pillars: &[BootstrapPoint], grid: &[f64]) -> Vec<f64> {
    let xs: Vec<f64> = pillars.iter().map(|p| p.tenor).collect();
    let ys: Vec<f64> = pillars.iter().map(|p| p.rate).collect();
    let spline = NaturalCubicSpline::fit(xs, ys);
    grid.iter().map(|&t| spline.eval(t)).collect()
}

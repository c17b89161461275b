//! §4.3.1 Linear: piecewise-linear interpolation of zero rates, flat
//! extrapolation at both ends.

use crate::point::BootstrapPoint;

use super::piecewise_linear;

#[must_use]
pub fn zero_rate_curve(pillars: &[BootstrapPoint], grid: &[f64]) -> Vec<f64> {
    let xs: Vec<f64> = pillars.iter().map(|p| p.tenor).collect();
    let ys: Vec<f64> = pillars.iter().map(|p| p.rate).collect();
    grid.iter().map(|&t| piecewise_linear(&xs, &ys, t)).collect()
}

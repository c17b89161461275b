//! §4.3.7 QuantLib-style piecewise linear forward.
//!
//! Documented deviation (§9 open question): the interpolated forward is
//! assigned directly to the zero rate rather than integrated. This is
//! retained verbatim because downstream consumers depend on the exact
//! numeric output; integrating `f(s) ds` properly would produce different
//! values. The Curve Assembler still derives its own forward curve from
//! the resulting discount factors, so the emitted forward curve stays
//! internally consistent even though it no longer equals this `f(t)`.

use crate::point::BootstrapPoint;

use super::piecewise_linear;

#[must_use]
pub fn zero_rate_curve(pillars: &[BootstrapPoint], grid: &[f64]) -> Vec<f64> {
    if pillars.is_empty() {
        return vec![0.0; grid.len()];
    }

    let xs: Vec<f64> = pillars.iter().map(|p| p.tenor).collect();
    let mut forwards = vec![0.0; pillars.len()];
    forwards[0] = pillars[0].rate;
    for i in 1..pillars.len() {
        let dt = pillars[i].tenor - pillars[i - 1].tenor;
        forwards[i] = if dt.abs() < 1e-12 {
            pillars[i].rate
        } else {
            pillars[i].rate + pillars[i].tenor * (pillars[i].rate - pillars[i - 1].rate) / dt
        };
    }

    grid.iter().map(|&t| piecewise_linear(&xs, &forwards, t)).collect()
}

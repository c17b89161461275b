//! §4.3.4 Bloomberg-style log discount-factor interpolation with forward
//! smoothing.

use crate::point::BootstrapPoint;

use super::piecewise_linear;

/// Forwards are never allowed to fall below this floor during smoothing.
const MIN_FORWARD: f64 = 1e-4;

#[must_use]
pub fn zero_rate_curve(pillars: &[BootstrapPoint], grid: &[f64]) -> Vec<f64> {
    if pillars.is_empty() || grid.is_empty() {
        return vec![0.0; grid.len()];
    }

    let xs: Vec<f64> = pillars.iter().map(|p| p.tenor).collect();
    let log_dfs: Vec<f64> = pillars.iter().map(|p| -p.rate * p.tenor).collect();
    let t0 = xs[0];
    let r0 = pillars[0].rate;

    // Step 2: interpolate log DF on the grid; before the first pillar scale
    // by t/t0, beyond the last pillar hold the last continuous rate flat.
    let log_df_on_grid: Vec<f64> = grid
        .iter()
        .map(|&t| {
            if t < t0 {
                (-r0 * t0) * (t / t0)
            } else if t > *xs.last().unwrap() {
                let r_last = pillars.last().unwrap().rate;
                -r_last * t
            } else {
                piecewise_linear(&xs, &log_dfs, t)
            }
        })
        .collect();

    // Step 3: DF and per-interval forward.
    let dfs: Vec<f64> = log_df_on_grid.iter().map(|&l| l.exp()).collect();
    let mut forwards = vec![0.0; grid.len()];
    forwards[0] = -dfs[0].ln() / grid[0];
    for i in 1..grid.len() {
        let dt = grid[i] - grid[i - 1];
        forwards[i] = if dt.abs() < 1e-12 { forwards[i - 1] } else { -(dfs[i] / dfs[i - 1]).ln() / dt };
    }

    // Step 4: smooth interior forwards, clamp to the floor.
    let mut smoothed = forwards.clone();
    if forwards.len() > 2 {
        for i in 1..forwards.len() - 1 {
            smoothed[i] = 0.6 * forwards[i] + 0.2 * forwards[i - 1] + 0.2 * forwards[i + 1];
        }
    }
    for f in &mut smoothed {
        *f = f.max(MIN_FORWARD);
    }

    // Step 5: rebuild DFs from smoothed forwards, derive zero rates.
    let mut rebuilt_df = vec![1.0; grid.len()];
    rebuilt_df[0] = (-smoothed[0] * grid[0]).exp();
    for i in 1..grid.len() {
        let dt = grid[i] - grid[i - 1];
        rebuilt_df[i] = rebuilt_df[i - 1] * (-smoothed[i] * dt).exp();
    }

    grid.iter()
        .zip(rebuilt_df.iter())
        .map(|(&t, &df)| if t > 0.0 { -df.ln() / t } else { 0.0 })
        .collect()
}

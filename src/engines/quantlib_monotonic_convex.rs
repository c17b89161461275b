//! §4.3.8 QuantLib-style monotonic-convex (Hagan-West flavour): Hyman-filtered
//! cubic Hermite interpolation of zero rates with equal endpoint slopes per
//! interval.

use crate::point::BootstrapPoint;

#[must_use]
pub fn zero_rate_curve(pillars: &[BootstrapPoint], grid: &[f64]) -> Vec<f64> {
    let n = pillars.len();
    if n == 0 {
        return vec![0.0; grid.len()];
    }
    if n == 1 {
        return vec![pillars[0].rate; grid.len()];
    }

    grid.iter().map(|&t| eval(pillars, t)).collect()
}

fn eval(pillars: &[BootstrapPoint], t: f64) -> f64 {
    let n = pillars.len();
    if t <= pillars[0].tenor {
        return pillars[0].rate;
    }
    if t >= pillars[n - 1].tenor {
        return pillars[n - 1].rate;
    }

    let i = segment_index(pillars, t);
    let t_i = pillars[i].tenor;
    let t_ip1 = pillars[i + 1].tenor;
    let r_i = pillars[i].rate;
    let r_ip1 = pillars[i + 1].rate;
    let dt = t_ip1 - t_i;

    let local_slope = (r_ip1 - r_i) / dt;

    let slope_before = if i > 0 {
        (r_i - pillars[i - 1].rate) / (t_i - pillars[i - 1].tenor)
    } else {
        local_slope
    };
    let slope_after = if i + 2 < n {
        (pillars[i + 2].rate - r_ip1) / (pillars[i + 2].tenor - t_ip1)
    } else {
        local_slope
    };

    // Hyman monotonicity filter.
    let mut s = local_slope;
    if slope_before * s < 0.0 || s * slope_after < 0.0 {
        s = 0.0;
    }

    let x = (t - t_i) / dt;
    let x2 = x * x;
    let x3 = x2 * x;

    let h00 = 2.0 * x3 - 3.0 * x2 + 1.0;
    let h10 = x3 - 2.0 * x2 + x;
    let h01 = -2.0 * x3 + 3.0 * x2;
    let h11 = x3 - x2;

    h00 * r_i + h10 * dt * s + h01 * r_ip1 + h11 * dt * s
}

fn segment_index(pillars: &[BootstrapPoint], t: f64) -> usize {
    for i in 0..pillars.len() - 1 {
        if t >= pillars[i].tenor && t <= pillars[i + 1].tenor {
            return i;
        }
    }
    pillars.len() - 2
}

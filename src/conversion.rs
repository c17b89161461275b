//! Forward-rate derivation from adjacent zero rates / discount factors.
//!
//! The rate ↔ discount-factor conversions themselves live on
//! [`crate::compounding::Compounding`]; this module holds the handful of
//! two-point forward-rate formulas the Curve Assembler (§4.4) needs once it
//! has zero rates or discount factors at adjacent grid tenors.

use crate::compounding::Compounding;

/// Computes the forward rate between `t1` and `t2` from continuously
/// compounded zero rates: `F = (t2*r2 - t1*r1) / (t2 - t1)`.
#[must_use]
pub fn forward_rate_from_zeros(zero1: f64, zero2: f64, t1: f64, t2: f64) -> f64 {
    if (t2 - t1).abs() < 1e-10 {
        return zero2;
    }
    (t2 * zero2 - t1 * zero1) / (t2 - t1)
}

/// Computes the forward rate between `t1` and `t2` from discount factors,
/// expressed in the given compounding convention.
///
/// `F(t1,t2) = ln(DF1/DF2) / (t2 - t1)` for continuous compounding; other
/// conventions are obtained by converting the continuous forward.
#[must_use]
pub fn forward_rate_from_dfs(df1: f64, df2: f64, t1: f64, t2: f64, compounding: Compounding) -> f64 {
    let dt = t2 - t1;
    if dt.abs() < 1e-10 || df2 <= 0.0 || df1 <= 0.0 {
        return 0.0;
    }

    let ratio = df1 / df2;
    match compounding {
        Compounding::Continuous => ratio.ln() / dt,
        Compounding::Simple => (ratio - 1.0) / dt,
        _ => {
            let continuous_fwd = ratio.ln() / dt;
            compounding.zero_rate((-continuous_fwd * dt).exp(), dt)
        }
    }
}

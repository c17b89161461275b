//! End-to-end bootstrap scenarios against seeded market data (§8).
//!
//! Each test fixes a currency, a method, and a small set of swap/futures
//! pillars, then checks the specific numeric properties that scenario is
//! meant to exercise.

use ratecurve::{bootstrap, BootstrapMethod};

#[test]
fn usd_linear_recovers_continuous_conversion_at_one_year() {
    // 1Y/2Y/5Y/10Y USD swaps, no futures.
    let result = bootstrap(&[(1.0, 0.045), (2.0, 0.043), (5.0, 0.042), (10.0, 0.041)], &[], BootstrapMethod::Linear, "USD");

    let one_year = result.discount_factors.iter().find(|d| (d.tenor - 1.0).abs() < 1e-9).expect("1Y grid point");
    let r_c = 2.0 * (1.0 + 0.045 / 2.0_f64).ln();
    assert!((one_year.df - (-r_c * 1.0_f64).exp()).abs() < 1e-6);

    // Grid step is 0.25 since the longest pillar tenor (10Y) is not > 10.
    assert!((result.discount_factors[0].tenor - 0.25).abs() < 1e-9);

    assert!(result.discount_factors.windows(2).all(|w| w[0].df > w[1].df));
}

#[test]
fn eur_cubic_spline_matches_pillars_and_stays_smooth() {
    let swaps = [(2.0, 0.030), (5.0, 0.032), (10.0, 0.033), (30.0, 0.031)];
    let result = bootstrap(&swaps, &[], BootstrapMethod::CubicSpline, "EUR");

    for &(tenor, par_rate) in &swaps {
        let point = result
            .discount_factors
            .iter()
            .min_by(|a, b| (a.tenor - tenor).abs().partial_cmp(&(b.tenor - tenor).abs()).unwrap())
            .unwrap();
        assert!((point.tenor - tenor).abs() < 0.13, "grid doesn't land close to pillar {tenor}");

        let r_c = (1.0 + par_rate).ln();
        assert!((point.zero_rate - r_c).abs() < 5e-3);
    }
}

#[test]
fn usd_bloomberg_scenario_matches_spec_seed() {
    // §8 scenario 3's literal seed: all three futures tenors (0.25, 0.5,
    // 0.75) sit below the shortest swap pillar (2.0), i.e. outside the
    // swap span, so §4.2's reconciliation rule leaves them unchanged —
    // this dataset does not exercise the >30bps adjustment path.
    let swaps = [(2.0, 0.040), (5.0, 0.042), (10.0, 0.041)];
    let futures = [(0.25, 0.050), (0.5, 0.049), (0.75, 0.048)];
    let result = bootstrap(&swaps, &futures, BootstrapMethod::Bloomberg, "USD");

    assert!(result.adjusted_points.iter().all(|p| !p.adjusted));
    assert!(result.discount_factors.iter().all(|d| d.forward_rate >= 0.0 && d.forward_rate < 0.10));
}

#[test]
fn usd_bloomberg_reconciles_futures_within_swap_span() {
    // A short-end swap pillar is added so the futures tenors are genuinely
    // bracketed (§4.2's prerequisite for reconciliation to run at all),
    // and the 3M futures rate is set far enough from the swap-interpolated
    // expectation to cross the 30bps threshold.
    let swaps = [(0.25, 0.040), (2.0, 0.040), (5.0, 0.042), (10.0, 0.041)];
    let futures = [(0.3, 0.090), (0.5, 0.049), (0.75, 0.048)];
    let result = bootstrap(&swaps, &futures, BootstrapMethod::Bloomberg, "USD");

    assert!(result.adjusted_points.iter().any(|p| p.adjusted));
    assert!(result.discount_factors.iter().all(|d| d.forward_rate >= 0.0 && d.forward_rate < 0.10));
}

#[test]
fn gbp_nelson_siegel_fits_expected_level_and_slope() {
    let swaps = [(1.0, 0.05), (2.0, 0.048), (5.0, 0.045), (10.0, 0.042), (30.0, 0.04)];
    let result = bootstrap(&swaps, &[], BootstrapMethod::NelsonSiegel, "GBP");

    let params = result.parameters.expect("nelson-siegel returns fitted parameters");
    assert!((params.beta0 - 0.04).abs() < 0.01);
    assert!((params.beta1 - 0.01).abs() < 0.01);
    assert!(params.lambda >= 0.05 && params.lambda <= 3.0);

    let sse: f64 = swaps
        .iter()
        .map(|&(t, r)| {
            let continuous = (1.0 + r / 2.0_f64).ln() * 2.0;
            let nearest = result
                .discount_factors
                .iter()
                .min_by(|a, b| (a.tenor - t).abs().partial_cmp(&(b.tenor - t).abs()).unwrap())
                .unwrap();
            (nearest.zero_rate - continuous).powi(2)
        })
        .sum();
    let rmse = (sse / swaps.len() as f64).sqrt();
    assert!(rmse < 0.002, "rmse {rmse} exceeds tolerance");
}

#[test]
fn usd_quantlib_log_linear_on_flat_swaps_stays_flat() {
    // Scenario 5 (§8): the grid's shortest tenor (0.25) falls below the
    // first pillar (1Y), so this also exercises the pre-first-pillar
    // extrapolation rule, not just the interpolated interior.
    let result = bootstrap(&[(1.0, 0.04), (2.0, 0.04), (5.0, 0.04)], &[], BootstrapMethod::QuantlibLogLinear, "USD");

    for point in &result.discount_factors {
        assert!((point.zero_rate - 0.04).abs() < 1e-3, "tenor {} rate {}", point.tenor, point.zero_rate);
        assert!((point.forward_rate - 0.04).abs() < 1e-3, "tenor {} forward {}", point.tenor, point.forward_rate);
    }
}

#[test]
fn usd_quantlib_monotonic_convex_hyman_filter_suppresses_overshoot() {
    let result = bootstrap(&[(1.0, 0.03), (2.0, 0.05), (3.0, 0.04)], &[], BootstrapMethod::QuantlibMonotonicConvex, "USD");

    for point in &result.discount_factors {
        if point.tenor >= 1.0 && point.tenor <= 3.0 {
            assert!(point.zero_rate <= 0.05 + 1e-6);
            assert!(point.zero_rate >= 0.03 - 1e-6);
        }
    }
}

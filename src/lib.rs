//! # ratecurve
//!
//! Multi-method zero-coupon discount curve bootstrapping from money-market
//! futures, interest-rate swaps, and government bonds.
//!
//! The pipeline is four stages composed left-to-right: the [`conventions`]
//! book maps a currency to its market basis, [`normalise`] harmonises raw
//! observations into continuously-compounded pillars, one of the
//! [`engines`] fits a zero-rate curve through those pillars, and
//! [`assembler`] turns that curve into discount factors and forwards on a
//! uniform tenor grid.
//!
//! ## Quick start
//!
//! ```rust
//! use ratecurve::{bootstrap, BootstrapMethod};
//!
//! let result = bootstrap(
//!     &[(1.0, 0.045), (2.0, 0.043), (5.0, 0.042), (10.0, 0.041)],
//!     &[],
//!     BootstrapMethod::Linear,
//!     "USD",
//! );
//!
//! assert!(!result.discount_factors.is_empty());
//! ```
//!
//! Nothing in this crate raises an error for malformed market data: empty
//! input, out-of-range tenors, and unknown currency/method tags all
//! degrade to a sensible default (§7 in the design notes). The one
//! fallible surface is [`normalise::parse_maturity_tag`], an optional
//! helper for turning a futures contract's maturity string into a tenor.

#![warn(missing_docs)]

pub mod assembler;
pub mod compounding;
pub mod conventions;
pub mod conversion;
pub mod csv_export;
pub mod engines;
pub mod error;
pub mod interpolation;
pub mod normalise;
pub mod point;

pub use compounding::Compounding;
pub use conventions::{BasisConvention, DayCount};
pub use csv_export::export_csv;
pub use error::{ParseError, ParseResult};
pub use interpolation::BootstrapMethod;
pub use point::{BootstrapPoint, BootstrapResult, CurvePoint, DiscountFactor, NelsonSiegelParams, Source};

/// Minimum number of bond pillars required to produce a non-empty result
/// from [`bootstrap_bonds`] (§4.5).
const MIN_BOND_PILLARS: usize = 2;

/// Bootstraps a discount curve from swap and futures observations (§4.5).
///
/// `swaps` and `futures` are `(tenor_years, rate)` pairs: swap rates are
/// par, decimal; futures rates are price-implied (`(100 - price) / 100`).
/// Empty input yields an empty result with `method`/`currency`/
/// `basis_convention` still populated.
#[must_use]
pub fn bootstrap(swaps: &[(f64, f64)], futures: &[(f64, f64)], method: BootstrapMethod, currency: &str) -> BootstrapResult {
    let basis_convention = conventions::for_currency(currency);

    if swaps.is_empty() && futures.is_empty() {
        return BootstrapResult::empty(method, currency);
    }

    let input_points = raw_points(swaps, futures);
    let adjusted_points = normalise::normalise(swaps, futures, basis_convention);

    if adjusted_points.is_empty() {
        let mut result = BootstrapResult::empty(method, currency);
        result.input_points = input_points;
        return result;
    }

    finish(method, currency, basis_convention, input_points, adjusted_points)
}

/// Bootstraps a discount curve from bond yields (§4.5). Bonds are
/// normalised as swap-equivalent yields with `source = bond`; no
/// futures-vs-swap reconciliation runs. Fewer than two bonds yields an
/// empty result.
#[must_use]
pub fn bootstrap_bonds(bonds: &[(f64, f64)], method: BootstrapMethod, currency: &str) -> BootstrapResult {
    let basis_convention = conventions::for_currency(currency);

    if bonds.len() < MIN_BOND_PILLARS {
        return BootstrapResult::empty(method, currency);
    }

    let input_points = bonds.iter().map(|&(t, r)| BootstrapPoint::new(t, r, Source::Bond)).collect();
    let adjusted_points = normalise::normalise_bonds(bonds, basis_convention);

    if adjusted_points.is_empty() {
        let mut result = BootstrapResult::empty(method, currency);
        result.input_points = input_points;
        return result;
    }

    finish(method, currency, basis_convention, input_points, adjusted_points)
}

fn finish(
    method: BootstrapMethod,
    currency: &str,
    basis_convention: BasisConvention,
    input_points: Vec<BootstrapPoint>,
    adjusted_points: Vec<BootstrapPoint>,
) -> BootstrapResult {
    let grid = assembler::build_grid(&adjusted_points);
    let (zero_rates, parameters) = engines::compute(method, &adjusted_points, &grid);
    let discount_factors = assembler::assemble(&adjusted_points, &grid, &zero_rates, method);
    let curve_points = assembler::curve_points(&discount_factors);

    BootstrapResult {
        method,
        currency: currency.to_string(),
        basis_convention,
        input_points,
        adjusted_points,
        discount_factors,
        curve_points,
        parameters,
    }
}

/// Builds the `input_points` array (§3: pillars as received, before
/// normalisation or unit conversion).
fn raw_points(swaps: &[(f64, f64)], futures: &[(f64, f64)]) -> Vec<BootstrapPoint> {
    let mut points: Vec<BootstrapPoint> = swaps.iter().map(|&(t, r)| BootstrapPoint::new(t, r, Source::Swap)).collect();
    points.extend(futures.iter().map(|&(t, r)| BootstrapPoint::new(t, r, Source::Futures)));
    points
}

//! The Input Normaliser (§4.2): rate-convention harmonisation, maturity-tag
//! parsing, futures-vs-swap reconciliation, de-duplication, and the final
//! tenor sort that produces the pillar set an engine consumes.

use chrono::{NaiveDate, Utc};

use crate::conventions::BasisConvention;
use crate::error::{ParseError, ParseResult};
use crate::point::{BootstrapPoint, Source};

/// Money-market accrual assumed for futures-implied rates (3 months).
const FUTURES_ACCRUAL: f64 = 0.25;
/// Reconciliation kicks in past this absolute rate gap (30bp).
const RECONCILE_THRESHOLD: f64 = 0.003;
/// Blend weights applied to a reconciled futures pillar: `0.3*futures + 0.7*expected`.
const FUTURES_BLEND_WEIGHT: f64 = 0.3;
const EXPECTED_BLEND_WEIGHT: f64 = 0.7;
/// Tenor de-duplication key precision, in years.
const TENOR_DEDUP_DP: i32 = 3;
/// Floor applied to a maturity-tag-derived tenor.
const MIN_PARSED_TENOR: f64 = 0.01;

/// Converts a par swap/bond rate at `tenor` years under `convention` into a
/// continuously compounded zero rate (§4.2).
#[must_use]
pub fn swap_rate_to_continuous(rate: f64, tenor: f64, convention: BasisConvention) -> f64 {
    use crate::compounding::Compounding;

    if convention.compounding == Compounding::Continuous {
        return rate;
    }
    if convention.compounding == Compounding::Simple || tenor <= 1.0 {
        return (1.0 + rate * tenor).ln() / tenor;
    }
    let n = f64::from(convention.payment_frequency.max(1));
    n * (1.0 + rate / n).ln()
}

/// Converts a futures price-implied rate into a continuously compounded
/// rate, assuming a 3-month money-market accrual (§4.2).
#[must_use]
pub fn futures_rate_to_continuous(rate: f64) -> f64 {
    (1.0 + rate * FUTURES_ACCRUAL).ln() / FUTURES_ACCRUAL
}

/// Parses a `"Mon 'YY"` futures maturity tag (e.g. `"Dec '25"`) into a
/// tenor in years from today, floored at [`MIN_PARSED_TENOR`].
pub fn parse_maturity_tag(tag: &str) -> ParseResult<f64> {
    let trimmed = tag.trim();
    let mut parts = trimmed.splitn(2, |c: char| c.is_whitespace());
    let month_str = parts.next().unwrap_or("");
    let year_str = parts.next().unwrap_or("").trim_start_matches('\'').trim();

    if month_str.is_empty() || year_str.is_empty() {
        return Err(ParseError::MalformedTag(tag.to_string()));
    }

    let month = month_number(month_str).ok_or_else(|| ParseError::UnknownMonth(month_str.to_string()))?;
    let yy: i32 = year_str.parse().map_err(|_| ParseError::InvalidYear(year_str.to_string()))?;
    let year = 2000 + yy;

    let maturity = NaiveDate::from_ymd_opt(year, month, 15).ok_or_else(|| ParseError::MalformedTag(tag.to_string()))?;
    let today = Utc::now().date_naive();
    let days = (maturity - today).num_days() as f64;
    let tenor = days / 365.25;

    Ok(tenor.max(MIN_PARSED_TENOR))
}

fn month_number(s: &str) -> Option<u32> {
    let lower = s.to_lowercase();
    Some(match lower.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    })
}

/// Reconciles futures pillars against swap pillars (§4.2). Runs only when
/// at least two swap pillars are present; a futures pillar outside the
/// swap tenor span is left unchanged.
fn reconcile(swaps: &[BootstrapPoint], futures: &mut [BootstrapPoint]) {
    if swaps.len() < 2 {
        return;
    }
    let mut sorted_swaps: Vec<&BootstrapPoint> = swaps.iter().collect();
    sorted_swaps.sort_by(|a, b| a.tenor.partial_cmp(&b.tenor).unwrap());

    for f in futures.iter_mut() {
        let Some((lo, hi)) = bracket(&sorted_swaps, f.tenor) else {
            continue;
        };

        let expected = if (hi.tenor - lo.tenor).abs() < 1e-12 {
            lo.rate
        } else {
            let w = (f.tenor - lo.tenor) / (hi.tenor - lo.tenor);
            lo.rate * (1.0 - w) + hi.rate * w
        };

        if (f.rate - expected).abs() > RECONCILE_THRESHOLD {
            log::debug!(
                "adjusting futures pillar at tenor {} ({} vs expected {}) toward swap interpolation",
                f.tenor,
                f.rate,
                expected
            );
            f.original_rate = Some(f.rate);
            f.rate = FUTURES_BLEND_WEIGHT * f.rate + EXPECTED_BLEND_WEIGHT * expected;
            f.adjusted = true;
        }
    }
}

fn bracket<'a>(sorted_swaps: &[&'a BootstrapPoint], t: f64) -> Option<(&'a BootstrapPoint, &'a BootstrapPoint)> {
    if t < sorted_swaps[0].tenor || t > sorted_swaps[sorted_swaps.len() - 1].tenor {
        return None;
    }
    for w in sorted_swaps.windows(2) {
        if t >= w[0].tenor && t <= w[1].tenor {
            return Some((w[0], w[1]));
        }
    }
    let last = sorted_swaps[sorted_swaps.len() - 1];
    Some((last, last))
}

/// De-duplicates by tenor (rounded to 3dp), priority ascending (swaps
/// before futures) so a swap always wins a collision, then sorts by tenor.
fn dedup_and_sort(mut points: Vec<BootstrapPoint>) -> Vec<BootstrapPoint> {
    points.sort_by(|a, b| a.priority.cmp(&b.priority));

    let mut seen = std::collections::HashSet::new();
    let mut kept = Vec::with_capacity(points.len());
    for p in points {
        let key = (p.tenor * 10f64.powi(TENOR_DEDUP_DP)).round() as i64;
        if seen.insert(key) {
            kept.push(p);
        }
    }

    kept.sort_by(|a, b| a.tenor.partial_cmp(&b.tenor).unwrap());
    kept
}

/// Drops observations that cannot possibly be valid pillars (§7.2):
/// non-positive or non-finite tenor, or a non-finite rate. Emits a
/// `log::warn!` naming the offending tenor/rate so a host application can
/// observe the drop (§4.6); the return value alone still drives control
/// flow. A NaN tenor must be caught here rather than left to `tenor <=
/// 0.0` (which is `false` for NaN) — otherwise it survives into the
/// `partial_cmp(...).unwrap()` sorts downstream and panics, breaking the
/// infallible-pipeline guarantee.
fn is_valid(tenor: f64, rate: f64) -> bool {
    if !tenor.is_finite() || tenor <= 0.0 {
        log::warn!("dropping observation with non-positive or non-finite tenor {tenor}");
        return false;
    }
    if !rate.is_finite() {
        log::warn!("dropping observation at tenor {tenor} with non-finite rate {rate}");
        return false;
    }
    true
}

/// Normalises swap and futures observations into the pillar set `P` an
/// engine consumes (§4.2). Each input tuple is `(tenor_years, rate)`.
#[must_use]
pub fn normalise(swaps: &[(f64, f64)], futures: &[(f64, f64)], convention: BasisConvention) -> Vec<BootstrapPoint> {
    let mut swap_points: Vec<BootstrapPoint> = swaps
        .iter()
        .filter(|&&(t, r)| is_valid(t, r))
        .map(|&(t, r)| BootstrapPoint::new(t, swap_rate_to_continuous(r, t, convention), Source::Swap))
        .collect();

    let mut futures_points: Vec<BootstrapPoint> = futures
        .iter()
        .filter(|&&(t, r)| is_valid(t, r))
        .map(|&(t, r)| BootstrapPoint::new(t, futures_rate_to_continuous(r), Source::Futures))
        .collect();

    reconcile(&swap_points, &mut futures_points);

    swap_points.append(&mut futures_points);
    dedup_and_sort(swap_points)
}

/// Normalises bond yields as swap-equivalent pillars (§4.5): `source =
/// bond`, `priority = 1`, no futures reconciliation.
#[must_use]
pub fn normalise_bonds(bonds: &[(f64, f64)], convention: BasisConvention) -> Vec<BootstrapPoint> {
    let points: Vec<BootstrapPoint> = bonds
        .iter()
        .filter(|&&(t, r)| is_valid(t, r))
        .map(|&(t, r)| BootstrapPoint::new(t, swap_rate_to_continuous(r, t, convention), Source::Bond))
        .collect();

    dedup_and_sort(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions;
    use approx::assert_relative_eq;

    #[test]
    fn usd_swap_conversion_matches_spec_scenario() {
        let usd = conventions::for_currency("USD");
        let r_c = swap_rate_to_continuous(0.045, 1.0, usd);
        assert_relative_eq!(r_c, 2.0 * (1.0 + 0.045 / 2.0_f64).ln(), epsilon = 1e-12);
    }

    #[test]
    fn futures_rate_three_month_accrual() {
        let r_c = futures_rate_to_continuous(0.05);
        assert_relative_eq!(r_c, (1.0 + 0.05 * 0.25).ln() / 0.25, epsilon = 1e-12);
    }

    #[test]
    fn parses_month_year_tag() {
        let tenor = parse_maturity_tag("Dec '25").unwrap();
        assert!(tenor > 0.0);
    }

    #[test]
    fn rejects_unknown_month() {
        assert!(matches!(parse_maturity_tag("Xyz '25"), Err(ParseError::UnknownMonth(_))));
    }

    #[test]
    fn rejects_malformed_tag() {
        assert!(matches!(parse_maturity_tag("garbage"), Err(ParseError::MalformedTag(_))));
    }

    #[test]
    fn futures_outside_swap_span_unchanged() {
        let usd = conventions::for_currency("USD");
        let pillars = normalise(&[(2.0, 0.04), (5.0, 0.042)], &[(10.0, 0.09)], usd);
        let fut = pillars.iter().find(|p| p.source == Source::Futures).unwrap();
        assert!(!fut.adjusted);
    }

    #[test]
    fn futures_deviating_past_threshold_is_adjusted() {
        let usd = conventions::for_currency("USD");
        let pillars = normalise(&[(2.0, 0.040), (5.0, 0.042)], &[(3.0, 0.090)], usd);
        let fut = pillars.iter().find(|p| p.source == Source::Futures).unwrap();
        assert!(fut.adjusted);
        assert!(fut.original_rate.is_some());
    }

    #[test]
    fn dedup_prefers_swap_over_futures_on_tenor_collision() {
        let usd = conventions::for_currency("USD");
        let pillars = normalise(&[(1.0, 0.04)], &[(1.0, 0.05)], usd);
        assert_eq!(pillars.len(), 1);
        assert_eq!(pillars[0].source, Source::Swap);
    }

    #[test]
    fn nan_and_non_positive_tenor_dropped() {
        let usd = conventions::for_currency("USD");
        let pillars = normalise(&[(1.0, f64::NAN), (0.0, 0.04), (2.0, 0.04)], &[], usd);
        assert_eq!(pillars.len(), 1);
        assert_relative_eq!(pillars[0].tenor, 2.0);
    }

    #[test]
    fn nan_tenor_dropped_without_panicking() {
        let usd = conventions::for_currency("USD");
        let pillars = normalise(&[(f64::NAN, 0.04), (2.0, 0.04)], &[], usd);
        assert_eq!(pillars.len(), 1);
        assert_relative_eq!(pillars[0].tenor, 2.0);
    }

    #[test]
    fn output_is_sorted_by_tenor() {
        let usd = conventions::for_currency("USD");
        let pillars = normalise(&[(5.0, 0.04), (1.0, 0.03)], &[], usd);
        assert!(pillars.windows(2).all(|w| w[0].tenor <= w[1].tenor));
    }
}

//! Currency-specific market conventions — the Convention Book (§4.1).
//!
//! A closed, compile-time mapping from an ISO currency code to the
//! `(day-count, compounding, payment-frequency)` triple used to convert a
//! par swap/bond quote into a continuously-compounded zero rate. Unknown
//! currencies silently fall back to the USD convention; nothing here ever
//! raises an error.

use serde::{Deserialize, Serialize};

use crate::compounding::Compounding;

/// Day count conventions used to label a currency's basis convention.
///
/// The grid math in this crate works entirely in tenor-years, so day count
/// conventions are descriptive metadata (surfaced in [`BasisConvention`]'s
/// `Display` impl and the CSV export's "Day Count" column) rather than an
/// input to a day-counting routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCount {
    /// Actual/360.
    Act360,
    /// Actual/365 (fixed).
    Act365,
    /// Actual/Actual.
    ActAct,
    /// 30/360.
    Thirty360,
}

impl std::fmt::Display for DayCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Act360 => "ACT/360",
            Self::Act365 => "ACT/365",
            Self::ActAct => "ACT/ACT",
            Self::Thirty360 => "30/360",
        };
        write!(f, "{s}")
    }
}

/// A currency's standard swap/bond market convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasisConvention {
    /// ISO currency code this convention applies to.
    pub currency: &'static str,
    /// Day count convention (descriptive; see [`DayCount`]).
    pub day_count: DayCount,
    /// Compounding convention used to interpret a par quote.
    pub compounding: Compounding,
    /// Coupons/fixed-leg payments per year.
    pub payment_frequency: u32,
}

impl std::fmt::Display for BasisConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} / {} / {}x per year",
            self.currency, self.day_count, self.compounding, self.payment_frequency
        )
    }
}

const USD: BasisConvention = BasisConvention {
    currency: "USD",
    day_count: DayCount::Act360,
    compounding: Compounding::SemiAnnual,
    payment_frequency: 2,
};

const EUR: BasisConvention = BasisConvention {
    currency: "EUR",
    day_count: DayCount::Act360,
    compounding: Compounding::Annual,
    payment_frequency: 1,
};

const GBP: BasisConvention = BasisConvention {
    currency: "GBP",
    day_count: DayCount::Act365,
    compounding: Compounding::SemiAnnual,
    payment_frequency: 2,
};

const CHF: BasisConvention = BasisConvention {
    currency: "CHF",
    day_count: DayCount::Act360,
    compounding: Compounding::Annual,
    payment_frequency: 1,
};

const JPY: BasisConvention = BasisConvention {
    currency: "JPY",
    day_count: DayCount::Act365,
    compounding: Compounding::SemiAnnual,
    payment_frequency: 2,
};

const CAD: BasisConvention = BasisConvention {
    currency: "CAD",
    day_count: DayCount::Act365,
    compounding: Compounding::SemiAnnual,
    payment_frequency: 2,
};

const SGD: BasisConvention = BasisConvention {
    currency: "SGD",
    day_count: DayCount::Act365,
    compounding: Compounding::SemiAnnual,
    payment_frequency: 2,
};

/// Returns the basis convention for a currency code, falling back to USD
/// for anything this book does not recognise.
///
/// Lookup is case-insensitive; no error is ever raised (§4.1, §7.3).
#[must_use]
pub fn for_currency(currency: &str) -> BasisConvention {
    match currency.to_uppercase().as_str() {
        "USD" => USD,
        "EUR" => EUR,
        "GBP" => GBP,
        "CHF" => CHF,
        "JPY" => JPY,
        "CAD" => CAD,
        "SGD" => SGD,
        other => {
            log::debug!("unknown currency {other:?}, falling back to USD convention");
            USD
        }
    }
}

/// Lists the currencies with an explicit (non-fallback) entry in the book.
#[must_use]
pub fn supported_currencies() -> &'static [&'static str] {
    &["USD", "EUR", "GBP", "CHF", "JPY", "CAD", "SGD"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_convention() {
        let c = for_currency("USD");
        assert_eq!(c.day_count, DayCount::Act360);
        assert_eq!(c.compounding, Compounding::SemiAnnual);
        assert_eq!(c.payment_frequency, 2);
    }

    #[test]
    fn eur_convention() {
        let c = for_currency("eur");
        assert_eq!(c.day_count, DayCount::Act360);
        assert_eq!(c.compounding, Compounding::Annual);
        assert_eq!(c.payment_frequency, 1);
    }

    #[test]
    fn unknown_currency_falls_back_to_usd() {
        let c = for_currency("XXX");
        assert_eq!(c.currency, "USD");
    }

    #[test]
    fn all_required_currencies_present() {
        for code in ["USD", "EUR", "GBP", "CHF", "JPY", "CAD", "SGD"] {
            assert_eq!(for_currency(code).currency, code);
        }
    }

    #[test]
    fn display_format() {
        let s = format!("{}", for_currency("USD"));
        assert!(s.contains("USD"));
        assert!(s.contains("ACT/360"));
    }
}

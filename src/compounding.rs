//! Compounding conventions for interest rate calculations.
//!
//! This module provides the [`Compounding`] enum used by the Convention
//! Book and the Input Normaliser to convert par rates into the
//! continuously-compounded convention the bootstrapping engines require.

use serde::{Deserialize, Serialize};

/// Compounding conventions for interest rates.
///
/// # Mathematical Relationships
///
/// Given a zero rate `r` and time `t`:
///
/// | Compounding | Discount Factor Formula |
/// |-------------|------------------------|
/// | Continuous | `DF = exp(-r * t)` |
/// | Annual | `DF = (1 + r)^(-t)` |
/// | SemiAnnual | `DF = (1 + r/2)^(-2t)` |
/// | Quarterly | `DF = (1 + r/4)^(-4t)` |
/// | Simple | `DF = 1 / (1 + r * t)` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Continuous compounding: `DF = exp(-r * t)`.
    #[default]
    Continuous,
    /// Annual compounding: `DF = (1 + r)^(-t)`.
    Annual,
    /// Semi-annual compounding: `DF = (1 + r/2)^(-2t)`.
    SemiAnnual,
    /// Quarterly compounding: `DF = (1 + r/4)^(-4t)`.
    Quarterly,
    /// Simple (linear) interest: `DF = 1 / (1 + r * t)`.
    Simple,
}

impl Compounding {
    /// Number of compounding periods per year, where that concept applies.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Self::Continuous | Self::Simple => None,
            Self::Annual => Some(1),
            Self::SemiAnnual => Some(2),
            Self::Quarterly => Some(4),
        }
    }

    /// Calculates the discount factor from a zero rate and time.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }

        match self {
            Self::Continuous => (-rate * t).exp(),
            Self::Simple => 1.0 / (1.0 + rate * t),
            Self::Annual => (1.0 + rate).powf(-t),
            Self::SemiAnnual => (1.0 + rate / 2.0).powf(-2.0 * t),
            Self::Quarterly => (1.0 + rate / 4.0).powf(-4.0 * t),
        }
    }

    /// Calculates the zero rate from a discount factor and time.
    #[must_use]
    pub fn zero_rate(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 || df <= 0.0 {
            return 0.0;
        }

        match self {
            Self::Continuous => -df.ln() / t,
            Self::Simple => (1.0 / df - 1.0) / t,
            Self::Annual => df.powf(-1.0 / t) - 1.0,
            Self::SemiAnnual => 2.0 * (df.powf(-1.0 / (2.0 * t)) - 1.0),
            Self::Quarterly => 4.0 * (df.powf(-1.0 / (4.0 * t)) - 1.0),
        }
    }

    /// Converts a rate from this compounding convention to another, at time `t`.
    #[must_use]
    pub fn convert_to(&self, rate: f64, to: Compounding, t: f64) -> f64 {
        if *self == to {
            return rate;
        }
        let df = self.discount_factor(rate, t);
        to.zero_rate(df, t)
    }
}

impl std::fmt::Display for Compounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continuous => write!(f, "Continuous"),
            Self::Annual => write!(f, "Annual"),
            Self::SemiAnnual => write!(f, "Semi-Annual"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Simple => write!(f, "Simple"),
        }
    }
}

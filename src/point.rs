//! The data model (§3): pillars, grid points, and the bootstrap result.

use serde::{Deserialize, Serialize};

use crate::conventions::BasisConvention;
use crate::interpolation::BootstrapMethod;

/// Where a value originated, closed over the four possibilities this
/// crate ever produces or consumes (§9 design note: a sum type, not
/// string comparison).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// A money-market futures contract.
    Futures,
    /// A par interest-rate swap quote.
    Swap,
    /// A government bond yield.
    Bond,
    /// Not an input observation — produced by an engine between pillars.
    Interpolated,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Futures => "futures",
            Self::Swap => "swap",
            Self::Bond => "bond",
            Self::Interpolated => "interpolated",
        };
        write!(f, "{s}")
    }
}

/// A single calibration pillar fed to an engine, after normalisation.
///
/// `priority` follows §3: swaps and bonds are priority 1 (highest
/// authority), futures are priority 2. `adjusted`/`original_rate` record
/// whether the futures-vs-swap reconciliation pass (§4.2) moved this
/// pillar's rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapPoint {
    /// Tenor in years, strictly positive.
    pub tenor: f64,
    /// Continuously compounded zero rate after normalisation.
    pub rate: f64,
    /// Which kind of instrument this pillar came from.
    pub source: Source,
    /// 1 for swap/bond, 2 for futures. Lower is higher authority.
    pub priority: u8,
    /// True iff reconciliation moved this pillar's rate toward the swap curve.
    pub adjusted: bool,
    /// The pre-reconciliation rate, present iff `adjusted`.
    pub original_rate: Option<f64>,
}

impl BootstrapPoint {
    /// Builds an unadjusted pillar with the priority implied by `source`.
    #[must_use]
    pub fn new(tenor: f64, rate: f64, source: Source) -> Self {
        let priority = match source {
            Source::Swap | Source::Bond => 1,
            Source::Futures => 2,
            Source::Interpolated => 1,
        };
        Self {
            tenor,
            rate,
            source,
            priority,
            adjusted: false,
            original_rate: None,
        }
    }
}

/// One point on the output tenor grid (§3, §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountFactor {
    /// Tenor in years.
    pub tenor: f64,
    /// Discount factor, in `(0, 1]`.
    pub df: f64,
    /// Continuously compounded zero rate, `-ln(df)/tenor`.
    pub zero_rate: f64,
    /// Instantaneous forward rate from the previous grid point, clamped to `>= 0`.
    pub forward_rate: f64,
    /// Whether this point copies a pillar's source tag or is purely interpolated.
    pub source: Source,
}

/// Fitted Nelson-Siegel parameters (§3, §4.3.3). `lambda` is always kept
/// within `[0.05, 3.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NelsonSiegelParams {
    pub beta0: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub lambda: f64,
}

/// A `(tenor, zero_rate)` pair used for display/plotting (§3's `curve_points`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub tenor: f64,
    pub zero_rate: f64,
}

/// The output of a bootstrap call (§3). Every field is populated even for
/// an empty result (§7.1): `method`, `currency`, and `basis_convention`
/// always reflect the request, while the arrays are zero-length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapResult {
    pub method: BootstrapMethod,
    pub currency: String,
    pub basis_convention: BasisConvention,
    /// Pillars as received, before normalisation.
    pub input_points: Vec<BootstrapPoint>,
    /// Pillars after normalisation (conversion, reconciliation,
    /// de-duplication), sorted by tenor.
    pub adjusted_points: Vec<BootstrapPoint>,
    /// The output grid.
    pub discount_factors: Vec<DiscountFactor>,
    /// `(tenor, zero_rate)` view of the same grid.
    pub curve_points: Vec<CurvePoint>,
    /// Populated only for [`BootstrapMethod::NelsonSiegel`].
    pub parameters: Option<NelsonSiegelParams>,
}

impl BootstrapResult {
    /// Builds the benign-empty result (§7.1): method/currency/basis
    /// populated, every array zero-length.
    #[must_use]
    pub fn empty(method: BootstrapMethod, currency: &str) -> Self {
        Self {
            method,
            currency: currency.to_string(),
            basis_convention: crate::conventions::for_currency(currency),
            input_points: Vec::new(),
            adjusted_points: Vec::new(),
            discount_factors: Vec::new(),
            curve_points: Vec::new(),
            parameters: None,
        }
    }
}

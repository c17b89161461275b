//! Error types.
//!
//! The bootstrap pipeline itself is infallible by design (see the crate's
//! top-level error handling notes): empty input, out-of-range tenors, and
//! unknown currency/method tags all degrade to a sensible default rather than
//! propagating an error. The one place a caller-supplied value can be
//! genuinely malformed is the optional month-year maturity parser, so that is
//! the only place this crate returns a `Result`.

use thiserror::Error;

/// A specialized `Result` for the maturity-tag parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors from parsing a futures contract maturity tag such as `"Dec '25"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The tag did not match the `"Mon 'YY"` shape at all.
    #[error("maturity tag {0:?} is not in \"Mon 'YY\" form")]
    MalformedTag(String),

    /// The month abbreviation was not recognised.
    #[error("unrecognised month abbreviation {0:?}")]
    UnknownMonth(String),

    /// The two-digit year could not be parsed as a number.
    #[error("unparseable year in maturity tag {0:?}")]
    InvalidYear(String),
}

use thiserror::Error;

/// Enumerates the ways formatting a [`CustomDate`](crate::date::CustomDate) can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The date components did not resolve to a calendar date.
    #[error("invalid date")]
    InvalidDate,

    /// The pattern contains a field symbol the formatter does not know.
    #[error("unsupported pattern field '{symbol}' (width {width})")]
    UnsupportedField { symbol: char, width: usize },

    /// A quoted literal was opened but never closed.
    #[error("unterminated quote in pattern")]
    UnterminatedQuote,
}

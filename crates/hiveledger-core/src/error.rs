use thiserror::Error;

/// Validation and contract errors exposed by `hiveledger-core`.
///
/// Every variant is surfaced immediately to the caller of the failing
/// operation; nothing here is ever silently coerced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("invalid asset symbol '{value}', expected one of HIVE, HBD, VESTS, TESTS, TBD, STEEM, SBD")]
    InvalidSymbol { value: String },
    #[error("expected asset symbol {expected}, got {actual}")]
    UnexpectedSymbol { expected: String, actual: String },
    #[error("cannot {operation} assets with different symbols ({left} vs {right})")]
    SymbolMismatch {
        operation: &'static str,
        left: String,
        right: String,
    },

    #[error("invalid asset amount '{value}'")]
    InvalidAmount { value: String },
    #[error("asset amount must be finite")]
    NonFiniteAmount,
    #[error("malformed asset string '{value}', expected '<amount> <SYMBOL>'")]
    MalformedAsset { value: String },

    #[error("price base and quote assets must be non-zero")]
    ZeroPriceLeg,
    #[error("price base and quote cannot share the symbol {symbol}")]
    SameSymbolPrice { symbol: String },
    #[error("{side} amount must be greater than zero")]
    NonPositiveDivisor { side: &'static str },
    #[error("cannot convert {asset} with price {price}")]
    UnrelatedConversion { asset: String, price: String },

    #[error("invalid history timestamp '{value}'")]
    InvalidTimestamp { value: String },

    #[error("operation '{operation}' payload is missing field '{field}'")]
    MissingPayloadField {
        operation: &'static str,
        field: &'static str,
    },
}

/// Integrity errors raised by the CSV exporter.
///
/// A single bad entry aborts the whole export; partial tables would
/// misstate a financial history.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("ledger entry {row} is missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },
}

/// Top-level failure of a history extraction run.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(transparent)]
    Source(#[from] crate::source::SourceError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

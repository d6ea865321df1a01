//! Account-history extraction and normalization for Hive ledgers.
//!
//! This crate contains:
//! - Canonical domain models (assets, prices, ledger entries) and validation
//! - The operation catalog and the account-history filter bitmask
//! - The history source trait plus its condenser JSON-RPC adapter
//! - The backward-paginated fetch/normalize pipeline and the CSV exporter

pub mod adapters;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod export;
pub mod filter;
pub mod normalizer;
pub mod paginator;
pub mod source;

pub use adapters::CondenserClient;
pub use domain::{
    local_datetime_string, parse_history_timestamp, Asset, AssetSymbol, LedgerEntry, Price,
    TimestampPolicy,
};
pub use error::{ConfigurationError, ExportError, HistoryError};
pub use export::{generate_csv, CSV_HEADER};
pub use filter::FilterMask;
pub use paginator::{fetch_account_history, FetchOptions, PAGE_SIZE};
pub use source::{
    last_history_index, HistoryEntry, HistorySource, RawOperation, RawRecord, SourceError,
    SourceErrorKind, SourceFuture,
};

mod asset;
mod ledger;
mod price;
mod timestamp;

pub use asset::{Asset, AssetSymbol};
pub use ledger::LedgerEntry;
pub use price::Price;
pub use timestamp::{local_datetime_string, parse_history_timestamp, TimestampPolicy};

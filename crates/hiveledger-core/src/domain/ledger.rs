use serde::{Deserialize, Serialize};

/// One normalized leg of an on-chain operation.
///
/// Produced once per raw record during normalization and immutable after
/// that; a single record may expand into several entries (a conversion
/// fill yields both its inflow and its outflow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub operation_type: String,
    /// Local datetime string, `YYYY-MM-DD HH:MM:SS`, or the raw wire
    /// timestamp when it could not be parsed.
    pub datetime: String,
    pub transaction_id: String,
    pub block_number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub amount: f64,
    pub currency: String,
}

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::FilterMask;

/// One raw account-history record as returned by the node: a monotonically
/// increasing sequence index paired with the transaction envelope.
///
/// Wire shape is a two-element array, `[index, { ... }]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub index: u64,
    pub entry: HistoryEntry,
}

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (index, entry) = <(u64, HistoryEntry)>::deserialize(deserializer)?;
        Ok(Self { index, entry })
    }
}

impl Serialize for RawRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.index, &self.entry).serialize(serializer)
    }
}

/// Shared envelope of a history record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub trx_id: String,
    pub block: u64,
    /// Raw wire timestamp; may lack a zone designator.
    pub timestamp: String,
    pub op: RawOperation,
}

/// Tagged operation payload, wire shape `[name, { ... }]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOperation {
    pub kind: String,
    pub payload: Value,
}

impl<'de> Deserialize<'de> for RawOperation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (kind, payload) = <(String, Value)>::deserialize(deserializer)?;
        Ok(Self { kind, payload })
    }
}

impl Serialize for RawOperation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.kind, &self.payload).serialize(serializer)
    }
}

/// Source-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    MalformedPage,
    InvalidRequest,
    Internal,
}

/// Structured failure of the remote history feed.
///
/// Any source error aborts the whole extraction; partial histories are
/// never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn malformed_page(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::MalformedPage,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::MalformedPage => "source.malformed_page",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Boxed future returned by [`HistorySource`] methods, so the trait stays
/// object safe for mock and transport implementations alike.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

/// Read-only account-history feed.
///
/// `fetch_page` returns up to `limit` records ending at `cursor`
/// (`-1` means "most recent"), filtered by `mask`, ordered ascending by
/// index within the page: element 0 is the oldest record of the window.
pub trait HistorySource: Send + Sync {
    fn fetch_page<'a>(
        &'a self,
        account: &'a str,
        cursor: i64,
        limit: u32,
        mask: &'a FilterMask,
    ) -> SourceFuture<'a, Vec<RawRecord>>;
}

/// Resolve the sequence index of an account's most recent operation via a
/// single unfiltered probe. `None` means the account has no history.
pub async fn last_history_index(
    source: &dyn HistorySource,
    account: &str,
) -> Result<Option<u64>, SourceError> {
    let mask = FilterMask::all();
    let records = source.fetch_page(account, -1, 1, &mask).await?;
    Ok(records.first().map(|record| record.index))
}

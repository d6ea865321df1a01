// Shared harness for pipeline behavior tests: a scripted history source
// that replays canned pages and records every call it receives.
use std::collections::VecDeque;
use std::sync::Mutex;

pub use hiveledger_core::{
    fetch_account_history, generate_csv, FetchOptions, FilterMask, HistoryEntry, HistorySource,
    LedgerEntry, RawOperation, RawRecord, SourceError, SourceFuture, TimestampPolicy,
};

/// One recorded `fetch_page` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedCall {
    pub cursor: i64,
    pub limit: u32,
    pub mask: FilterMask,
}

/// History source replaying a fixed script of page results.
pub struct ScriptedSource {
    pages: Mutex<VecDeque<Result<Vec<RawRecord>, SourceError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<Result<Vec<RawRecord>, SourceError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

impl HistorySource for ScriptedSource {
    fn fetch_page<'a>(
        &'a self,
        _account: &'a str,
        cursor: i64,
        limit: u32,
        mask: &'a FilterMask,
    ) -> SourceFuture<'a, Vec<RawRecord>> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(RecordedCall {
                cursor,
                limit,
                mask: *mask,
            });
        let next = self
            .pages
            .lock()
            .expect("script poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()));
        Box::pin(async move { next })
    }
}

/// A raw transfer record at the given index and wire timestamp.
pub fn transfer_record(index: u64, timestamp: &str, amount: &str) -> RawRecord {
    raw_record(
        index,
        timestamp,
        "transfer",
        serde_json::json!({ "from": "alice", "to": "bob", "amount": amount, "memo": "" }),
    )
}

pub fn raw_record(
    index: u64,
    timestamp: &str,
    kind: &str,
    payload: serde_json::Value,
) -> RawRecord {
    RawRecord {
        index,
        entry: HistoryEntry {
            trx_id: format!("trx-{index}"),
            block: 80_000_000 + index,
            timestamp: timestamp.to_owned(),
            op: RawOperation {
                kind: kind.to_owned(),
                payload,
            },
        },
    }
}

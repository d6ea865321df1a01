//! Backward-paginated walk over an account's operation history.
//!
//! The pipeline is strictly sequential: one page request at a time, because
//! the termination decision for a page depends on having decoded its oldest
//! record first. Each invocation owns its cursor, accumulator and mask, so
//! exports for different accounts can run in parallel without coordination.

use log::debug;
use time::{Date, Duration, OffsetDateTime};

use crate::domain::{local_datetime_string, parse_history_timestamp, LedgerEntry, TimestampPolicy};
use crate::error::HistoryError;
use crate::filter::FilterMask;
use crate::normalizer;
use crate::source::{last_history_index, HistorySource, RawRecord, SourceError};

/// Records requested per page, also the minimum cursor the walk descends to.
pub const PAGE_SIZE: u32 = 1000;

/// Caller-supplied bounds and policies for one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Inclusive day-granularity lower bound; the walk stops permanently at
    /// the first older record.
    pub start_date: Option<Date>,
    /// Inclusive day-granularity upper bound, defaulting to today (UTC).
    pub end_date: Option<Date>,
    pub timestamp_policy: TimestampPolicy,
}

/// Fetch, filter and normalize an account's financial operation history,
/// newest first.
///
/// `on_progress` is invoked synchronously after each processed page with a
/// percentage in `[0, 100]`; it must return promptly since the walk cannot
/// advance until it does. Any source failure aborts the whole run and the
/// partial accumulation is discarded: a truncated export would misstate the
/// account's totals.
pub async fn fetch_account_history(
    source: &dyn HistorySource,
    account: &str,
    options: &FetchOptions,
    mut on_progress: impl FnMut(f64),
) -> Result<Vec<LedgerEntry>, HistoryError> {
    let Some(last_index) = last_history_index(source, account).await? else {
        return Ok(Vec::new());
    };

    let end_day = options
        .end_date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    // End-of-day instant used by the date-span progress formula.
    let end_instant = end_day.midnight().assume_utc() + Duration::days(1);
    let span = options
        .start_date
        .map(|start_day| end_instant - start_day.midnight().assume_utc());

    let mask = FilterMask::export();
    let limit = last_index.max(1).min(u64::from(PAGE_SIZE)) as u32;
    let mut cursor = last_index as i64;
    let mut entries = Vec::new();

    loop {
        let page = source.fetch_page(account, cursor, limit, &mask).await?;
        if page.is_empty() {
            return Err(SourceError::malformed_page(format!(
                "empty history page at cursor {cursor} for account '{account}'"
            ))
            .into());
        }
        debug!(
            "page of {} records at cursor {cursor} for '{account}'",
            page.len()
        );

        let mut stopped = false;
        for record in page.iter().rev() {
            let parsed =
                parse_history_timestamp(&record.entry.timestamp, options.timestamp_policy).ok();
            // An unparseable wire timestamp keeps its raw form in the Date
            // column and is treated as "now" for window comparisons.
            let datetime = parsed
                .map(local_datetime_string)
                .unwrap_or_else(|| record.entry.timestamp.clone());
            let record_day = parsed.unwrap_or_else(OffsetDateTime::now_utc).date();

            if record_day > end_day {
                continue;
            }
            if let Some(start_day) = options.start_date {
                if record_day < start_day {
                    stopped = true;
                    break;
                }
            }

            entries.extend(normalizer::normalize(record, &datetime)?);
        }

        let oldest = &page[0];
        on_progress(progress(oldest, last_index, end_instant, span));

        if stopped {
            break;
        }
        cursor = (cursor - i64::from(PAGE_SIZE)).min(oldest.index as i64 - 1);
        if cursor <= i64::from(PAGE_SIZE) {
            break;
        }
    }

    Ok(entries)
}

/// Completion percentage after a page, two deliberate formulas.
///
/// With a start date the natural denominator is the requested date span:
/// elapsed time from the page's oldest record back to the end bound over
/// the whole window. Without one there is no bounded span, so progress is
/// the index distance walked relative to the account's entire history.
fn progress(
    oldest: &RawRecord,
    last_index: u64,
    end_instant: OffsetDateTime,
    span: Option<Duration>,
) -> f64 {
    let percentage = match span {
        Some(span) => {
            let oldest_instant =
                parse_history_timestamp(&oldest.entry.timestamp, TimestampPolicy::AssumeUtc)
                    .unwrap_or_else(|_| OffsetDateTime::now_utc());
            let elapsed = end_instant - oldest_instant;
            elapsed.as_seconds_f64() / span.as_seconds_f64() * 100.0
        }
        None => {
            let walked = last_index.saturating_sub(oldest.index);
            walked as f64 / last_index.max(1) as f64 * 100.0
        }
    };
    percentage.clamp(0.0, 100.0)
}

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ConfigurationError;

/// Wire timestamps look like `2024-01-01T12:30:00`, with or without a
/// trailing zone designator.
const WIRE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Date column format of the exported table.
const TABLE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// How to interpret a history timestamp that carries no zone designator.
///
/// The chain emits UTC without a marker, so `AssumeUtc` is the default.
/// `LocalOffset` preserves the behavior of environments that feed the
/// pipeline timestamps already shifted to local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPolicy {
    AssumeUtc,
    LocalOffset,
}

impl Default for TimestampPolicy {
    fn default() -> Self {
        Self::AssumeUtc
    }
}

/// Parse a raw history timestamp under the given designator policy.
pub fn parse_history_timestamp(
    raw: &str,
    policy: TimestampPolicy,
) -> Result<OffsetDateTime, ConfigurationError> {
    let (naked, designated) = match raw.strip_suffix(['z', 'Z']) {
        Some(stripped) => (stripped, true),
        None => (raw, false),
    };

    let parsed = PrimitiveDateTime::parse(naked, WIRE_FORMAT).map_err(|_| {
        ConfigurationError::InvalidTimestamp {
            value: raw.to_owned(),
        }
    })?;

    let offset = if designated || policy == TimestampPolicy::AssumeUtc {
        UtcOffset::UTC
    } else {
        // Indeterminate local offsets (e.g. multi-threaded environments on
        // some platforms) fall back to UTC.
        UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
    };

    Ok(parsed.assume_offset(offset))
}

/// Render a timestamp as the exporter's `YYYY-MM-DD HH:MM:SS` date column.
pub fn local_datetime_string(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(TABLE_FORMAT)
        .expect("datetime must be formattable")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_naked_timestamp_as_utc() {
        let parsed = parse_history_timestamp("2024-01-01T12:30:00", TimestampPolicy::AssumeUtc)
            .expect("must parse");
        assert_eq!(parsed, datetime!(2024-01-01 12:30:00 UTC));
    }

    #[test]
    fn parses_designated_timestamp_regardless_of_policy() {
        let parsed = parse_history_timestamp("2024-01-01T12:30:00Z", TimestampPolicy::LocalOffset)
            .expect("must parse");
        assert_eq!(parsed, datetime!(2024-01-01 12:30:00 UTC));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_history_timestamp("yesterday", TimestampPolicy::AssumeUtc)
            .expect_err("must fail");
        assert!(matches!(err, ConfigurationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn renders_table_datetime() {
        let rendered = local_datetime_string(datetime!(2024-01-01 12:30:00 UTC));
        assert_eq!(rendered, "2024-01-01 12:30:00");
    }
}

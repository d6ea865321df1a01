use crate::domain::LedgerEntry;
use crate::error::ExportError;

/// Fixed header row of the exported table. The wording and spacing are part
/// of the output contract consumed by downstream spreadsheets.
pub const CSV_HEADER: &str = "Operation Type,Date,Transaction ID, Block number,From,To,Amount,Currency";

const FIELD_PLACEHOLDER: &str = "NA";

/// Render ordered ledger entries as a CRLF-terminated comma-delimited table.
///
/// Every field is sanitized so the output stays parseable without quoting.
/// An entry missing a required envelope field fails the whole export; no
/// partial table is ever produced.
pub fn generate_csv(entries: &[LedgerEntry]) -> Result<String, ExportError> {
    let mut table = String::from(CSV_HEADER);
    table.push_str("\r\n");

    for (row, entry) in entries.iter().enumerate() {
        if entry.operation_type.is_empty() {
            return Err(ExportError::MissingField {
                row,
                field: "operation_type",
            });
        }
        if entry.datetime.is_empty() {
            return Err(ExportError::MissingField {
                row,
                field: "datetime",
            });
        }
        if entry.transaction_id.is_empty() {
            return Err(ExportError::MissingField {
                row,
                field: "transaction_id",
            });
        }
        if entry.block_number == 0 {
            return Err(ExportError::MissingField {
                row,
                field: "block_number",
            });
        }

        let from = entry.from.as_deref().unwrap_or(FIELD_PLACEHOLDER);
        let to = entry.to.as_deref().unwrap_or(FIELD_PLACEHOLDER);

        table.push_str(&format!(
            "{},{},{},{},{},{},{},{}\r\n",
            sanitize(&entry.operation_type),
            sanitize(&entry.datetime),
            sanitize(&entry.transaction_id),
            entry.block_number,
            sanitize(from),
            sanitize(to),
            entry.amount,
            sanitize(&entry.currency),
        ));
    }

    Ok(table)
}

/// Replace delimiter-breaking characters with a single space each.
fn sanitize(field: &str) -> String {
    field
        .chars()
        .map(|ch| match ch {
            ',' | '\r' | '\n' | '"' => ' ',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> LedgerEntry {
        LedgerEntry {
            operation_type: String::from("transfer"),
            datetime: String::from("2024-01-01 12:30:00"),
            transaction_id: String::from("feedbeef"),
            block_number: 90_000_000,
            from: Some(String::from("alice")),
            to: Some(String::from("bob")),
            amount: 1.5,
            currency: String::from("HIVE"),
        }
    }

    #[test]
    fn empty_input_yields_header_only() {
        let table = generate_csv(&[]).expect("must render");
        assert_eq!(table, format!("{CSV_HEADER}\r\n"));
    }

    #[test]
    fn renders_one_row_per_entry() {
        let table = generate_csv(&[entry()]).expect("must render");
        let rows = table.split("\r\n").collect::<Vec<_>>();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], CSV_HEADER);
        assert_eq!(
            rows[1],
            "transfer,2024-01-01 12:30:00,feedbeef,90000000,alice,bob,1.5,HIVE"
        );
        assert_eq!(rows[2], "");
    }

    #[test]
    fn missing_sides_render_as_na() {
        let mut anonymous = entry();
        anonymous.from = None;
        anonymous.to = None;
        let table = generate_csv(&[anonymous]).expect("must render");
        assert!(table.contains(",NA,NA,"));
    }

    #[test]
    fn fields_are_sanitized_without_quoting() {
        let mut hostile = entry();
        hostile.from = Some(String::from("al,ice\"\r\n"));
        let table = generate_csv(&[hostile]).expect("must render");

        let data_row = table.split("\r\n").nth(1).expect("data row");
        assert_eq!(data_row.matches(',').count(), 7);
        assert!(data_row.contains("al ice"));
        assert!(!data_row.contains('"'));
    }

    #[test]
    fn missing_envelope_field_aborts_export() {
        let mut broken = entry();
        broken.transaction_id = String::new();
        let err = generate_csv(&[entry(), broken]).expect_err("must fail");
        assert_eq!(
            err,
            ExportError::MissingField {
                row: 1,
                field: "transaction_id"
            }
        );
    }

    #[test]
    fn zero_block_number_aborts_export() {
        let mut broken = entry();
        broken.block_number = 0;
        let err = generate_csv(&[broken]).expect_err("must fail");
        assert!(matches!(err, ExportError::MissingField { field: "block_number", .. }));
    }
}

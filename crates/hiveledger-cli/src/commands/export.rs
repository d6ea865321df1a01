use std::fs;
use std::io::{self, Write};

use log::info;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use hiveledger_core::{
    fetch_account_history, generate_csv, CondenserClient, FetchOptions, TimestampPolicy,
};

use crate::cli::ExportArgs;
use crate::error::CliError;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

pub async fn run(args: &ExportArgs) -> Result<(), CliError> {
    if args.account.trim().is_empty() {
        return Err(CliError::Command(String::from("account must not be empty")));
    }

    let options = FetchOptions {
        start_date: parse_date(args.start_date.as_deref())?,
        end_date: parse_date(args.end_date.as_deref())?,
        timestamp_policy: if args.local_timestamps {
            TimestampPolicy::LocalOffset
        } else {
            TimestampPolicy::AssumeUtc
        },
    };

    let source = CondenserClient::new(&args.node)?;
    info!("exporting history of '{}' via {}", args.account, source.endpoint());

    let quiet = args.quiet;
    let entries = fetch_account_history(&source, &args.account, &options, |percentage| {
        if !quiet {
            eprintln!("fetched {percentage:.1}%");
        }
    })
    .await?;

    let table = generate_csv(&entries)?;
    match &args.output {
        Some(path) => {
            fs::write(path, table.as_bytes())?;
            if !quiet {
                eprintln!("wrote {} entries to {}", entries.len(), path.display());
            }
        }
        None => io::stdout().write_all(table.as_bytes())?,
    }

    Ok(())
}

fn parse_date(value: Option<&str>) -> Result<Option<Date>, CliError> {
    value
        .map(|raw| {
            Date::parse(raw, DATE_FORMAT)
                .map_err(|_| CliError::Command(format!("invalid date '{raw}', expected YYYY-MM-DD")))
        })
        .transpose()
}

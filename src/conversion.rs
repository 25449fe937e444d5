//! Statement-to-OFX conversion.
//!
//! Ties the Nordea parser and the OFX writer together: maps parsed
//! transaction records to OFX transaction blocks and drives the
//! file-to-file conversion used by the CLI.

use crate::error::{Error, Result};
use crate::nordea_format::{statement_period, DatePrompt, NordeaStatement};
use crate::ofx_format::{OfxDocument, OfxTransaction};
use crate::types::StatementPeriod;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Extension of generated output files.
pub const OUTPUT_EXTENSION: &str = "ofx";

impl OfxDocument {
    /// Build an OFX document from a parsed statement.
    ///
    /// Transactions keep their source row order. Amounts are carried
    /// over verbatim; the posting timestamp and transaction type are
    /// derived per record.
    pub fn from_statement(
        statement: &NordeaStatement,
        period: StatementPeriod,
        currency: &str,
        server_time: String,
    ) -> Self {
        let transactions = statement
            .transactions
            .iter()
            .map(|record| OfxTransaction {
                trans_type: record.transaction_type(),
                posted: record.posted_timestamp(),
                amount: record.amount.clone(),
                id: record.reference.clone(),
                name: record.name.clone(),
                memo: record.message.clone(),
            })
            .collect();

        OfxDocument {
            currency: currency.to_string(),
            account_id: statement.account_id.clone(),
            period,
            server_time,
            transactions,
        }
    }
}

/// Convert one opened Nordea export into an OFX file next to it.
///
/// The source is parsed in full before the output file is created, so a
/// malformed statement never leaves a partial output file behind.
/// Returns the path of the written file.
pub fn convert<R: Read>(
    path: &Path,
    reader: &mut R,
    currency: &str,
    prompt: &mut dyn DatePrompt,
) -> Result<PathBuf> {
    let statement = NordeaStatement::from_read(reader)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let period = statement_period(&file_name, prompt)?;
    let server_time = server_timestamp(path)?;

    let document = OfxDocument::from_statement(&statement, period, currency, server_time);

    let out_path = output_path(path);
    let mut output = File::create(&out_path).map_err(|source| Error::OutputCreation {
        path: out_path.clone(),
        source,
    })?;
    document.write_to(&mut output)?;

    Ok(out_path)
}

/// Derive the output path: the file name up to its first `.`, with the
/// OFX extension appended, in the same directory as the input.
pub fn output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or(&name);
    input.with_file_name(format!("{stem}.{OUTPUT_EXTENSION}"))
}

/// Document-level generation timestamp from the source file's
/// modification time, as local `YYYYMMDDHHMMSS`.
pub fn server_timestamp(path: &Path) -> Result<String> {
    let modified = std::fs::metadata(path)?.modified()?;
    let local: DateTime<Local> = modified.into();
    Ok(local.format("%Y%m%d%H%M%S").to_string())
}

//! Nordea transaction export parser.
//!
//! Nordea exports are tab-delimited text files: row 1 carries account
//! info (second field is the account id), rows 2-4 are metadata and are
//! discarded, rows 5 onward are 14-field transaction rows. The statement
//! period is not in the file itself; it is encoded in the file name as
//! underscore-delimited 8-digit date tokens.

use crate::error::{Error, Result};
use crate::types::{StatementPeriod, TransactionRecord};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;

/// Number of fields in a transaction row, including the trailing empty cell.
const ROW_FIELDS: usize = 14;

/// First line carrying a transaction; lines 2-4 are metadata.
const FIRST_TRANSACTION_LINE: u64 = 5;

/// Noon, used wherever the export gives a date without a time of day.
const NOON_SUFFIX: &str = "120000";

/// Raw transaction row in export column order.
#[derive(Debug, Deserialize)]
struct RawRow {
    entry_date: String,
    value_date: String,
    payment_date: String,
    amount: String,
    name: String,
    account: String,
    bic: String,
    description: String,
    reference: String,
    original_reference: String,
    message: String,
    card_number: String,
    receipt: String,
    #[allow(dead_code)]
    trailer: String,
}

/// A parsed Nordea statement.
#[derive(Debug, Clone, PartialEq)]
pub struct NordeaStatement {
    /// Account id, taken verbatim from the second field of the first row.
    pub account_id: String,

    /// Transactions in source row order.
    pub transactions: Vec<TransactionRecord>,
}

impl NordeaStatement {
    /// Parse a Nordea export from any source implementing `Read`.
    ///
    /// Fails with [`Error::MalformedHeader`] if the first row has fewer
    /// than two fields, and with [`Error::MalformedRow`] if any
    /// transaction row does not have exactly 14 fields. A malformed row
    /// aborts the whole statement; there is no per-row recovery.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use nordea_ofx::nordea_format::NordeaStatement;
    ///
    /// let mut file = File::open("Tapahtumat_FI001_20210101_20210131.csv")?;
    /// let statement = NordeaStatement::from_read(&mut file)?;
    /// println!("Account: {}", statement.account_id);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut record = csv::StringRecord::new();

        if !csv_reader.read_record(&mut record)? {
            return Err(Error::MalformedHeader { found: 0 });
        }
        let account_id = record
            .get(1)
            .ok_or(Error::MalformedHeader {
                found: record.len(),
            })?
            .to_string();

        let mut transactions = Vec::new();
        while csv_reader.read_record(&mut record)? {
            // Lines 2-4 carry column titles and bank metadata. The
            // reader never yields blank lines, so the decision has to
            // come from where each record starts, not from a skip
            // count: a blank metadata line must not shift a transaction
            // into the discarded region.
            if record.position().map_or(0, csv::Position::line) < FIRST_TRANSACTION_LINE {
                continue;
            }

            // Blank rows between transactions are not an error.
            if record.iter().all(str::is_empty) {
                continue;
            }

            if record.len() != ROW_FIELDS {
                let line = record.position().map_or(0, csv::Position::line);
                return Err(Error::MalformedRow {
                    line,
                    expected: ROW_FIELDS,
                    found: record.len(),
                });
            }

            let raw: RawRow = record.deserialize(None)?;
            transactions.push(TransactionRecord {
                entry_date: parse_entry_date(&raw.entry_date)?,
                value_date: raw.value_date,
                payment_date: raw.payment_date,
                amount: raw.amount,
                name: raw.name,
                account: raw.account,
                bic: raw.bic,
                description: raw.description,
                reference: raw.reference,
                original_reference: raw.original_reference,
                message: raw.message,
                card_number: raw.card_number,
                receipt: raw.receipt,
            });
        }

        Ok(NordeaStatement {
            account_id,
            transactions,
        })
    }
}

/// Parse the `DD.MM.YYYY` entry date used by the export.
fn parse_entry_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%d.%m.%Y")
        .map_err(|_| Error::InvalidDate(date_str.to_string()))
}

/// Source for statement period dates when the file name does not encode
/// them. The CLI backs this with stdin; tests use canned values.
pub trait DatePrompt {
    /// Ask the operator for one 8-digit `YYYYMMDD` date.
    fn read_date(&mut self, label: &str) -> Result<String>;
}

/// Derive the statement period from a Nordea export file name.
///
/// Export names look like `Tapahtumat_FI1234567_20210101_20210131.csv`:
/// splitting on underscore, the 3rd and 4th tokens are the period start
/// and end, the 4th with its extension still attached. When the name
/// does not carry enough tokens the period is requested through the
/// given [`DatePrompt`]. Either way the dates get the fixed noon suffix.
pub fn statement_period(file_name: &str, prompt: &mut dyn DatePrompt) -> Result<StatementPeriod> {
    let tokens: Vec<&str> = file_name.split('_').collect();

    if let (Some(start), Some(end)) = (tokens.get(2), tokens.get(3)) {
        let end = end.split_once('.').map_or(*end, |(head, _)| head);
        return Ok(StatementPeriod {
            start: format!("{start}{NOON_SUFFIX}"),
            end: format!("{end}{NOON_SUFFIX}"),
        });
    }

    let start = prompted_date(prompt, "start date")?;
    let end = prompted_date(prompt, "end date")?;
    Ok(StatementPeriod { start, end })
}

fn prompted_date(prompt: &mut dyn DatePrompt, label: &str) -> Result<String> {
    let date = prompt.read_date(label)?;
    let date = date.trim();
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDate(date.to_string()));
    }
    Ok(format!("{date}{NOON_SUFFIX}"))
}

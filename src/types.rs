//! Common types used across parsing and OFX serialization.

use chrono::NaiveDate;

/// OFX standardized transaction type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// ATM cash withdrawal.
    Atm,
    /// Deposit.
    Deposit,
    /// Interest earned.
    Interest,
    /// Direct debit.
    DirectDebit,
    /// Electronic payment.
    Payment,
    /// Transfer between own accounts.
    Transfer,
    /// Bank service fee.
    Fee,
    /// Generic debit (fallback for negative amounts).
    Debit,
    /// Generic credit (fallback for non-negative amounts).
    Credit,
}

impl TransactionType {
    /// The OFX `TRNTYPE` code for this transaction type.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Atm => "ATM",
            TransactionType::Deposit => "DEP",
            TransactionType::Interest => "INT",
            TransactionType::DirectDebit => "DIRECTDEBIT",
            TransactionType::Payment => "PAYMENT",
            TransactionType::Transfer => "XFER",
            TransactionType::Fee => "FEE",
            TransactionType::Debit => "DEBIT",
            TransactionType::Credit => "CREDIT",
        }
    }
}

/// Known Nordea transaction descriptions, English and Finnish, evaluated
/// top to bottom. First match wins. Adding another language only means
/// extending the phrase lists.
const CLASSIFICATION_RULES: &[(&[&str], TransactionType)] = &[
    (
        &["ATM withdr/Otto.", "Debit cash withdrawal", "ATMotto/Otto."],
        TransactionType::Atm,
    ),
    (&["Deposit interest", "Talletuskorko"], TransactionType::Interest),
    (&["Deposit", "Pano"], TransactionType::Deposit),
    (&["Direct debit", "Suoraveloitus"], TransactionType::DirectDebit),
    (
        &["e-invoice", "e-payment", "e-lasku", "e-maksu"],
        TransactionType::Payment,
    ),
    (
        &["ePiggy savings transfer", "Own transfer", "Oma siirto"],
        TransactionType::Transfer,
    ),
    (
        &["Service fee VAT 0%", "Palvelumaksu ALV 0%"],
        TransactionType::Fee,
    ),
];

/// Classify a transaction from its bank description and raw amount string.
///
/// Matching against the description table is exact and case-sensitive.
/// Unknown descriptions fall back to the sign of the amount: a leading
/// minus yields [`TransactionType::Debit`], anything else
/// [`TransactionType::Credit`].
pub fn classify(description: &str, amount: &str) -> TransactionType {
    for (phrases, trans_type) in CLASSIFICATION_RULES {
        if phrases.contains(&description) {
            return *trans_type;
        }
    }

    if amount.starts_with('-') {
        TransactionType::Debit
    } else {
        TransactionType::Credit
    }
}

/// Statement period boundaries as OFX `YYYYMMDDHHMMSS` timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementPeriod {
    /// Period start, e.g. `20210101120000`.
    pub start: String,
    /// Period end, e.g. `20210131120000`.
    pub end: String,
}

/// One transaction row from a Nordea export, with all 14 positional
/// fields named. The trailing empty cell is checked for arity but not
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Booking date of the entry.
    pub entry_date: NaiveDate,

    /// Value date, as printed in the export.
    pub value_date: String,

    /// Payment date, as printed in the export.
    pub payment_date: String,

    /// Signed amount, kept verbatim. The sign character is significant
    /// for classification and is emitted unmodified.
    pub amount: String,

    /// Payee or payer name.
    pub name: String,

    /// Counterparty account.
    pub account: String,

    /// Counterparty BIC.
    pub bic: String,

    /// Free-text transaction description, e.g. "Direct debit".
    pub description: String,

    /// Reference number, used as the unique OFX transaction id.
    pub reference: String,

    /// Original reference number.
    pub original_reference: String,

    /// Free-text message/memo.
    pub message: String,

    /// Card number, masked by the bank.
    pub card_number: String,

    /// Receipt marker.
    pub receipt: String,
}

impl TransactionRecord {
    /// Entry date as an OFX posting timestamp, with the fixed noon
    /// time-of-day the export lacks.
    pub fn posted_timestamp(&self) -> String {
        format!("{}120000", self.entry_date.format("%Y%m%d"))
    }

    /// Classify this record from its description and amount sign.
    pub fn transaction_type(&self) -> TransactionType {
        classify(&self.description, &self.amount)
    }
}

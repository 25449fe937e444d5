//! OFX document model and serializer.
//!
//! The output is an OFX 2.0 bank statement response: a fixed declaration
//! line, a synthetic sign-on acknowledgment, and one statement response
//! carrying the account block, the statement period and the transaction
//! list. The document is streamed to the writer tag by tag; no tree is
//! built. Downstream importers are picky about the structure, so the
//! layout is fixed and pinned by tests.

use crate::error::Result;
use crate::types::{StatementPeriod, TransactionType};
use std::io::Write;

/// Fixed bank identifier emitted in the account block.
const BANK_ID: &str = "Nordea";

/// Fixed account type for Nordea transaction exports.
const ACCOUNT_TYPE: &str = "CHECKING";

/// One OFX `STMTTRN` transaction block.
#[derive(Debug, Clone, PartialEq)]
pub struct OfxTransaction {
    /// Standardized transaction type.
    pub trans_type: TransactionType,

    /// Posting timestamp, `YYYYMMDDHHMMSS`.
    pub posted: String,

    /// Signed amount, emitted verbatim.
    pub amount: String,

    /// Unique transaction id (`FITID`).
    pub id: String,

    /// Payee or payer name.
    pub name: String,

    /// Free-text memo.
    pub memo: String,
}

/// A complete OFX statement document. Write-once: constructed in full,
/// then streamed out.
#[derive(Debug, Clone, PartialEq)]
pub struct OfxDocument {
    /// 3-letter currency code for `CURDEF`.
    pub currency: String,

    /// Account id from the source statement.
    pub account_id: String,

    /// Statement period for `DTSTART`/`DTEND`.
    pub period: StatementPeriod,

    /// Server timestamp for `DTSERVER`, `YYYYMMDDHHMMSS`.
    pub server_time: String,

    /// Transaction blocks in source row order.
    pub transactions: Vec<OfxTransaction>,
}

impl OfxDocument {
    /// Write the document to any destination implementing `Write`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use nordea_ofx::ofx_format::OfxDocument;
    /// use nordea_ofx::types::StatementPeriod;
    ///
    /// let document = OfxDocument {
    ///     currency: "EUR".into(),
    ///     account_id: "FI001".into(),
    ///     period: StatementPeriod {
    ///         start: "20210101120000".into(),
    ///         end: "20210131120000".into(),
    ///     },
    ///     server_time: "20210201103000".into(),
    ///     transactions: Vec::new(),
    /// };
    /// let mut file = File::create("output.ofx")?;
    /// document.write_to(&mut file)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(
            writer,
            "<?OFX OFXHEADER=\"200\" VERSION=\"200\" SECURITY=\"NONE\" \
             OLDFILEUID=\"NONE\" NEWFILEUID=\"NONE\"?>"
        )?;
        writeln!(writer, "<OFX>")?;

        // Sign-on acknowledgment.
        writeln!(writer, "  <SIGNONMSGSRSV1>")?;
        writeln!(writer, "    <SONRS>")?;
        writeln!(writer, "      <STATUS>")?;
        writeln!(writer, "        <CODE>0</CODE>")?;
        writeln!(writer, "        <SEVERITY>INFO</SEVERITY>")?;
        writeln!(writer, "      </STATUS>")?;
        writeln!(writer, "      <DTSERVER>{}</DTSERVER>", self.server_time)?;
        writeln!(writer, "      <LANGUAGE>ENG</LANGUAGE>")?;
        writeln!(writer, "    </SONRS>")?;
        writeln!(writer, "  </SIGNONMSGSRSV1>")?;

        // Statement response envelope.
        writeln!(writer, "  <BANKMSGSRSV1>")?;
        writeln!(writer, "    <STMTTRNRS>")?;
        writeln!(writer, "      <TRNUID>0</TRNUID>")?;
        writeln!(writer, "      <STATUS>")?;
        writeln!(writer, "        <CODE>0</CODE>")?;
        writeln!(writer, "        <SEVERITY>INFO</SEVERITY>")?;
        writeln!(writer, "      </STATUS>")?;
        writeln!(writer, "      <STMTRS>")?;
        writeln!(writer, "        <CURDEF>{}</CURDEF>", self.currency)?;
        writeln!(writer, "        <BANKACCTFROM>")?;
        writeln!(writer, "          <BANKID>{BANK_ID}</BANKID>")?;
        writeln!(
            writer,
            "          <ACCTID>{}</ACCTID>",
            escape_text(&self.account_id)
        )?;
        writeln!(writer, "          <ACCTTYPE>{ACCOUNT_TYPE}</ACCTTYPE>")?;
        writeln!(writer, "        </BANKACCTFROM>")?;
        writeln!(writer, "        <BANKTRANLIST>")?;
        writeln!(writer, "          <DTSTART>{}</DTSTART>", self.period.start)?;
        writeln!(writer, "          <DTEND>{}</DTEND>", self.period.end)?;

        for transaction in &self.transactions {
            self.write_transaction(writer, transaction)?;
        }

        writeln!(writer, "        </BANKTRANLIST>")?;
        writeln!(writer, "      </STMTRS>")?;
        writeln!(writer, "    </STMTTRNRS>")?;
        writeln!(writer, "  </BANKMSGSRSV1>")?;
        writeln!(writer, "</OFX>")?;

        Ok(())
    }

    fn write_transaction<W: Write>(
        &self,
        writer: &mut W,
        transaction: &OfxTransaction,
    ) -> Result<()> {
        writeln!(writer, "          <STMTTRN>")?;
        writeln!(
            writer,
            "            <TRNTYPE>{}</TRNTYPE>",
            transaction.trans_type.code()
        )?;
        writeln!(
            writer,
            "            <DTPOSTED>{}</DTPOSTED>",
            transaction.posted
        )?;
        writeln!(writer, "            <TRNAMT>{}</TRNAMT>", transaction.amount)?;
        writeln!(
            writer,
            "            <FITID>{}</FITID>",
            escape_text(&transaction.id)
        )?;
        writeln!(
            writer,
            "            <NAME>{}</NAME>",
            escape_text(&transaction.name)
        )?;
        writeln!(
            writer,
            "            <MEMO>{}</MEMO>",
            escape_text(&transaction.memo)
        )?;
        writeln!(writer, "          </STMTTRN>")?;
        Ok(())
    }
}

/// Escape the markup-reserved characters in free-text fields. Bank
/// exports routinely contain `&` in company names; left unescaped they
/// would corrupt the document.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

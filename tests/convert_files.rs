//! End-to-end file conversion tests.

use nordea_ofx::conversion::convert;
use nordea_ofx::nordea_format::DatePrompt;
use nordea_ofx::{Error, Result};
use std::fs;
use std::path::Path;

struct NoPrompt;

impl DatePrompt for NoPrompt {
    fn read_date(&mut self, _label: &str) -> Result<String> {
        panic!("prompt should not be used");
    }
}

struct FixedPrompt(Vec<&'static str>);

impl DatePrompt for FixedPrompt {
    fn read_date(&mut self, _label: &str) -> Result<String> {
        Ok(self.0.remove(0).to_string())
    }
}

const EXPORT: &str = "\
Account\tFI1234567890123456\n\
Statement period\t01.01.2021 - 31.01.2021\n\
Currency\tEUR\n\
Entry date\tValue date\tPayment date\tAmount\tName\tAccount\tBIC\tTransaction\tReference\tOriginal reference\tMessage\tCard number\tReceipt\t\n\
01.01.2021\t01.01.2021\t01.01.2021\t-12.50\tJohn Doe\t\t\tDirect debit\tREF123\t\tMonthly bill\t\t\t\n\
\n\
05.01.2021\t05.01.2021\t05.01.2021\t1500.00\tACME Oy\t\t\tPano\tREF124\t\tSalary\t\t\t\n\
15.01.2021\t15.01.2021\t15.01.2021\t-40.00\tNordea\t\t\tATM withdr/Otto.\tREF125\t\t\t\t\t\n";

fn write_export(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn converts_export_to_ofx() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path(), "Tapahtumat_FI001_20210101_20210131.csv", EXPORT);
    let mut file = fs::File::open(&input).unwrap();

    let out_path = convert(&input, &mut file, "EUR", &mut NoPrompt).unwrap();

    assert_eq!(
        out_path,
        dir.path().join("Tapahtumat_FI001_20210101_20210131.ofx")
    );

    let output = fs::read_to_string(&out_path).unwrap();

    // Account id round-trips verbatim.
    assert!(output.contains("<ACCTID>FI1234567890123456</ACCTID>"));
    assert!(output.contains("<BANKID>Nordea</BANKID>"));
    assert!(output.contains("<ACCTTYPE>CHECKING</ACCTTYPE>"));
    assert!(output.contains("<CURDEF>EUR</CURDEF>"));

    // Period from the file name tokens, with the noon suffix.
    assert!(output.contains("<DTSTART>20210101120000</DTSTART>"));
    assert!(output.contains("<DTEND>20210131120000</DTEND>"));

    // Blank row in the middle produces no transaction block.
    assert_eq!(output.matches("<STMTTRN>").count(), 3);

    // Classified transaction blocks in source order.
    assert!(output.contains("<TRNTYPE>DIRECTDEBIT</TRNTYPE>"));
    assert!(output.contains("<TRNTYPE>DEP</TRNTYPE>"));
    assert!(output.contains("<TRNTYPE>ATM</TRNTYPE>"));
    assert!(output.contains("<DTPOSTED>20210101120000</DTPOSTED>"));
    assert!(output.contains("<TRNAMT>-12.50</TRNAMT>"));
    assert!(output.contains("<FITID>REF123</FITID>"));
    assert!(output.contains("<NAME>John Doe</NAME>"));
    assert!(output.contains("<MEMO>Monthly bill</MEMO>"));
}

#[test]
fn malformed_row_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let broken = "\
Account\tFI001\n\
meta\n\
meta\n\
meta\n\
01.01.2021\t\t\t-1.00\tName\tDeposit\tREF1\n";
    let input = write_export(dir.path(), "Tapahtumat_FI001_20210101_20210131.csv", broken);
    let mut file = fs::File::open(&input).unwrap();

    let err = convert(&input, &mut file, "EUR", &mut NoPrompt).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { .. }));

    // Parsing failed before the output file was created.
    assert!(!dir
        .path()
        .join("Tapahtumat_FI001_20210101_20210131.ofx")
        .exists());
}

#[test]
fn renamed_file_uses_prompted_period() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path(), "export.csv", EXPORT);
    let mut file = fs::File::open(&input).unwrap();

    let mut prompt = FixedPrompt(vec!["20210101", "20210131"]);
    let out_path = convert(&input, &mut file, "EUR", &mut prompt).unwrap();

    let output = fs::read_to_string(&out_path).unwrap();
    assert!(output.contains("<DTSTART>20210101120000</DTSTART>"));
    assert!(output.contains("<DTEND>20210131120000</DTEND>"));
}

#[test]
fn currency_is_threaded_through() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path(), "Tapahtumat_FI001_20210101_20210131.csv", EXPORT);
    let mut file = fs::File::open(&input).unwrap();

    let out_path = convert(&input, &mut file, "SEK", &mut NoPrompt).unwrap();
    let output = fs::read_to_string(&out_path).unwrap();
    assert!(output.contains("<CURDEF>SEK</CURDEF>"));
}

#[test]
fn server_timestamp_has_ofx_shape() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path(), "Tapahtumat_FI001_20210101_20210131.csv", EXPORT);

    let stamp = nordea_ofx::conversion::server_timestamp(&input).unwrap();
    assert_eq!(stamp.len(), 14);
    assert!(stamp.bytes().all(|b| b.is_ascii_digit()));
}

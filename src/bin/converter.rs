//! Nordea to OFX - CLI tool for converting Nordea transaction exports.

use clap::Parser;
use nordea_ofx::conversion::convert;
use nordea_ofx::nordea_format::DatePrompt;
use nordea_ofx::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nordea2ofx")]
#[command(about = "Convert Nordea transaction exports (CSV) to OFX", long_about = None)]
struct Cli {
    /// Input export files
    files: Vec<PathBuf>,

    /// 3-letter currency code applied to every converted file
    #[arg(short, long, default_value = "EUR")]
    currency: String,
}

/// Reads period dates from the terminal when the file name does not
/// encode them.
#[derive(Default)]
struct StdinPrompt {
    explained: bool,
}

impl DatePrompt for StdinPrompt {
    fn read_date(&mut self, label: &str) -> Result<String> {
        if !self.explained {
            println!("Unable to automatically retrieve the start/end dates for your file.");
            println!("Please enter the start/end dates in the following format: YYYYMMDD (8 digits).");
            self.explained = true;
        }

        print!("Please enter a {label}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        println!("Error: no file names were given.");
        println!("Usage: nordea2ofx [OPTIONS] <FILES>...");
        std::process::exit(1);
    }

    let mut failed = false;
    for path in &cli.files {
        // Files are processed strictly one at a time; a failure on one
        // does not stop the rest.
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Error: file {} couldn't be opened: {e}", path.display());
                continue;
            }
        };

        println!("Converting {}", path.display());
        let mut prompt = StdinPrompt::default();
        match convert(path, &mut file, &cli.currency, &mut prompt) {
            Ok(out_path) => println!("Wrote {}", out_path.display()),
            Err(e) => {
                eprintln!("Error converting {}: {e}", path.display());
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

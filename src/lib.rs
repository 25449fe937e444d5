//! Nordea to OFX Converter Library
//!
//! A library for converting Nordea bank transaction exports (tab-delimited
//! text) into OFX statement documents for use with personal-finance
//! software.
//!
//! # Features
//!
//! - Parse Nordea transaction exports with explicit per-row validation
//! - Classify bank descriptions (English and Finnish) into standardized
//!   OFX transaction type codes
//! - Derive the statement period from the export file name, with an
//!   injectable prompt fallback for renamed files
//! - Stream well-formed OFX output using the standard `Write` trait
//!
//! # Examples
//!
//! ## Converting an export file
//!
//! ```no_run
//! use std::fs::File;
//! use nordea_ofx::conversion::convert;
//! use nordea_ofx::nordea_format::DatePrompt;
//!
//! struct NoPrompt;
//!
//! impl DatePrompt for NoPrompt {
//!     fn read_date(&mut self, _label: &str) -> nordea_ofx::Result<String> {
//!         Err(std::io::Error::other("no terminal").into())
//!     }
//! }
//!
//! let path = std::path::Path::new("Tapahtumat_FI001_20210101_20210131.csv");
//! let mut file = File::open(path)?;
//! let written = convert(path, &mut file, "EUR", &mut NoPrompt)?;
//! println!("Wrote {}", written.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Parsing only
//!
//! ```no_run
//! use std::fs::File;
//! use nordea_ofx::nordea_format::NordeaStatement;
//!
//! let mut file = File::open("Tapahtumat_FI001_20210101_20210131.csv")?;
//! let statement = NordeaStatement::from_read(&mut file)?;
//! println!("{} transactions", statement.transactions.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod conversion;
pub mod error;
pub mod nordea_format;
pub mod ofx_format;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{classify, StatementPeriod, TransactionRecord, TransactionType};

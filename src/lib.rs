//! # inspire-bib
//!
//! Builds a BibTeX document from a Google Sheets reference list, resolving
//! each row against the [INSPIRE-HEP](https://inspirehep.net) literature API.
//!
//! Provides:
//! - **Library**: async [`BibClient`] for the spreadsheet download and INSPIRE lookups
//! - **Server**: `inspire-bib` binary serving `GET /<sheet id>.csv` (feature `server`)
//!
//! ## Spreadsheet layout
//!
//! The first row is the header. Recognised columns are `InspireId`, `BibTeX`,
//! `Comment` and `Title`; others are ignored. A row with a blank `InspireId`
//! is skipped. A row whose `BibTeX` cell already contains an entry is used
//! verbatim. Every other row is looked up on INSPIRE.
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn example() -> inspire_bib::error::Result<()> {
//! use inspire_bib::BibClient;
//!
//! let client = BibClient::new();
//! let document = client.generate_bibtex("1AbCdEfGhIjKlMnOp").await?;
//! println!("{}", document);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod inspire;
pub mod parse;
pub mod resolve;
pub mod sheet;
pub mod types;

#[cfg(feature = "server")]
pub mod server;

// Re-export key types at the crate root.
pub use client::BibClient;
pub use config::Config;
pub use error::{BibError, ResolveError};
pub use sheet::parse_sheet_csv;
pub use types::*;

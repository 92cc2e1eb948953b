//! Google Sheets CSV export.

use crate::client::{endpoint, BibClient};
use crate::error::{BibError, Result};
use crate::types::Record;
use url::Url;

impl BibClient {
    /// Address of the CSV export for a spreadsheet.
    pub fn sheet_export_url(&self, spreadsheet_id: &str) -> Result<Url> {
        endpoint(
            &self.sheets_base_url,
            &["spreadsheets", "d", spreadsheet_id, "export"],
            &[("format", "csv")],
        )
    }

    /// Download a spreadsheet and parse it into rows keyed by the header.
    ///
    /// Any failure here is fatal for the request and is reported as
    /// [`BibError::Retrieval`].
    pub async fn fetch_records(&self, spreadsheet_id: &str) -> Result<Vec<Record>> {
        let url = self.sheet_export_url(spreadsheet_id)?;
        tracing::debug!(%url, "Accessing spreadsheet");

        let body = self.get(url.clone()).await.map_err(|e| {
            tracing::error!(error = %e, %url, "Error accessing spreadsheet");
            BibError::Retrieval {
                url: url.to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(parse_sheet_csv(&body))
    }
}

/// Parse a CSV export into records.
///
/// The body is split on CRLF and each line is read as exactly one CSV record,
/// so a bare `\n` inside a cell never ends a row. The first line is the
/// header; every later line becomes a [`Record`], including blank ones.
pub fn parse_sheet_csv(body: &str) -> Vec<Record> {
    let mut lines = body.split("\r\n");
    let headers = match lines.next() {
        Some(line) => parse_csv_line(line),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let cells = parse_csv_line(line);
            tracing::debug!(row = ?cells, "Processing row");
            Record::from_row(&headers, cells)
        })
        .collect()
}

/// Read a single line as one CSV record. A blank line has no cells.
///
/// A bare newline outside quotes splits the line into several records; only
/// the first is kept.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut records = reader.records();
    let cells: Vec<String> = match records.next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        Some(Err(e)) => {
            tracing::warn!(error = %e, line, "Unreadable CSV line");
            Vec::new()
        }
        None => Vec::new(),
    };

    let extra = records.count();
    if extra > 0 {
        tracing::warn!(line, extra, "Unquoted line break in CSV row, trailing text dropped");
    }
    cells
}

//! Turn spreadsheet rows into a single BibTeX document.

use crate::client::BibClient;
use crate::error::{ResolveError, Result};
use crate::types::{join_fragments, Fragment, Record};

impl BibClient {
    /// Resolve one row.
    ///
    /// Rows whose `BibTeX` cell already holds an entry are used verbatim;
    /// everything else goes through an INSPIRE search and fetch.
    pub async fn resolve_record(
        &self,
        record: &Record,
    ) -> std::result::Result<Fragment, ResolveError> {
        let inspire_id = record
            .inspire_id()
            .ok_or_else(|| ResolveError::MissingIdentifier {
                row: format!("{:?}", record),
            })?;

        let bibtex = match record.embedded_bibtex() {
            Some(embedded) => embedded.to_string(),
            None => self.lookup_bibtex(inspire_id).await?,
        };

        Ok(Fragment::citation(record.comment(), record.title(), bibtex))
    }

    /// Resolve rows in order. Failed rows become error markers; rows
    /// without an identifier are dropped.
    pub async fn resolve_records(&self, records: &[Record]) -> Vec<Fragment> {
        let mut fragments = Vec::with_capacity(records.len());
        for record in records {
            match self.resolve_record(record).await {
                Ok(fragment) => fragments.push(fragment),
                Err(err) => {
                    tracing::error!(error = %err, "Could not resolve row");
                    fragments.extend(err.placeholder(record.comment()));
                }
            }
        }
        fragments
    }

    /// Download a spreadsheet and build its BibTeX document.
    ///
    /// Only a failed spreadsheet download is an error; problems with
    /// individual rows show up as `%%` markers in the returned text.
    pub async fn generate_bibtex(&self, spreadsheet_id: &str) -> Result<String> {
        let records = self.fetch_records(spreadsheet_id).await?;
        let fragments = self.resolve_records(&records).await;

        let failed = fragments.iter().filter(|f| f.is_error()).count();
        tracing::info!(
            spreadsheet_id,
            rows = records.len(),
            fragments = fragments.len(),
            failed,
            "Generated BibTeX"
        );

        Ok(join_fragments(&fragments))
    }
}

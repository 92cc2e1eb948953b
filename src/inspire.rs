//! INSPIRE-HEP literature endpoints.
//!
//! Covers the two calls a lookup needs: free-text search, then the BibTeX
//! rendering of the first hit.

use crate::client::{endpoint, BibClient};
use crate::error::{BibError, ResolveError, Result};
use crate::parse::parse_search_response;
use url::Url;

impl BibClient {
    /// `GET {base}/literature?q=<query>`
    pub fn literature_search_url(&self, query: &str) -> Result<Url> {
        endpoint(&self.inspire_base_url, &["literature"], &[("q", query)])
    }

    /// `GET {base}/literature/<control_number>?format=bibtex`
    pub fn literature_bibtex_url(&self, control_number: u64) -> Result<Url> {
        let record = control_number.to_string();
        endpoint(
            &self.inspire_base_url,
            &["literature", record.as_str()],
            &[("format", "bibtex")],
        )
    }

    /// Search INSPIRE and return the control number of the first hit.
    pub async fn search_control_number(
        &self,
        inspire_id: &str,
    ) -> std::result::Result<u64, ResolveError> {
        let transport = |source: BibError| ResolveError::SearchTransport {
            inspire_id: inspire_id.to_string(),
            source,
        };

        let url = self.literature_search_url(inspire_id).map_err(transport)?;
        let body = self.get(url).await.map_err(transport)?;

        match parse_search_response(&body) {
            Ok(Some(control_number)) => Ok(control_number),
            Ok(None) => Err(ResolveError::SearchEmpty {
                inspire_id: inspire_id.to_string(),
            }),
            Err(source) => Err(ResolveError::SearchDecode {
                inspire_id: inspire_id.to_string(),
                body,
                source,
            }),
        }
    }

    /// Download the BibTeX rendering of an INSPIRE record.
    pub async fn fetch_bibtex(
        &self,
        inspire_id: &str,
        control_number: u64,
    ) -> std::result::Result<String, ResolveError> {
        let transport = |source: BibError| ResolveError::FetchTransport {
            inspire_id: inspire_id.to_string(),
            control_number,
            source,
        };

        let url = self
            .literature_bibtex_url(control_number)
            .map_err(transport)?;
        self.get(url).await.map_err(transport)
    }

    /// Search then fetch: the full remote resolution of one identifier.
    pub async fn lookup_bibtex(
        &self,
        inspire_id: &str,
    ) -> std::result::Result<String, ResolveError> {
        let control_number = self.search_control_number(inspire_id).await?;
        tracing::debug!(inspire_id, control_number, "Resolved INSPIRE record");
        self.fetch_bibtex(inspire_id, control_number).await
    }
}

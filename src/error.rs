//! Error types for the spreadsheet-to-BibTeX pipeline.

use crate::types::Fragment;

/// Errors that abort a whole request.
#[derive(Debug, thiserror::Error)]
pub enum BibError {
    /// HTTP request failed (network, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote service returned an error status code.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Resource not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured base URL cannot carry path segments (e.g. `mailto:`).
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Failed to parse a remote response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The spreadsheet could not be downloaded.
    #[error("Failed to retrieve spreadsheet from {url}: {source}")]
    Retrieval {
        url: String,
        #[source]
        source: Box<BibError>,
    },

    /// Socket or stdio failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for Results using [`BibError`].
pub type Result<T> = std::result::Result<T, BibError>;

/// Why a single spreadsheet row could not be turned into a citation.
///
/// None of these abort the request: the row is either dropped
/// ([`ResolveError::MissingIdentifier`]) or replaced by an error marker.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Missing InspireId in row {row}")]
    MissingIdentifier { row: String },

    #[error("Error {source} accessing inspire record {inspire_id}")]
    SearchTransport {
        inspire_id: String,
        #[source]
        source: BibError,
    },

    #[error("Failed decoding JSON for {inspire_id}: {source}\n{body}")]
    SearchDecode {
        inspire_id: String,
        body: String,
        #[source]
        source: BibError,
    },

    #[error("No INSPIRE records found for {inspire_id}")]
    SearchEmpty { inspire_id: String },

    #[error("Failed retrieving BibTeX for {inspire_id} (#{control_number}): {source}")]
    FetchTransport {
        inspire_id: String,
        control_number: u64,
        #[source]
        source: BibError,
    },
}

impl ResolveError {
    /// The marker that stands in for the row in the output document.
    ///
    /// Rows without an identifier leave no trace, so this is `None` for them.
    pub fn placeholder(&self, comment: &str) -> Option<Fragment> {
        let comment = comment.to_string();
        match self {
            ResolveError::MissingIdentifier { .. } => None,
            ResolveError::SearchTransport { inspire_id, .. }
            | ResolveError::SearchDecode { inspire_id, .. }
            | ResolveError::SearchEmpty { inspire_id } => Some(Fragment::InspireError {
                inspire_id: inspire_id.clone(),
                comment,
            }),
            ResolveError::FetchTransport { inspire_id, .. } => Some(Fragment::BibtexError {
                inspire_id: inspire_id.clone(),
                comment,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_has_no_placeholder() {
        let err = ResolveError::MissingIdentifier {
            row: "{}".to_string(),
        };
        assert!(err.placeholder("note").is_none());
    }

    #[test]
    fn test_search_failures_share_marker() {
        let empty = ResolveError::SearchEmpty {
            inspire_id: "Witten:1998qj".to_string(),
        };
        let decode = ResolveError::SearchDecode {
            inspire_id: "Witten:1998qj".to_string(),
            body: "<html>".to_string(),
            source: BibError::Parse("expected value".to_string()),
        };
        let expected = "%% INSPIRE ERROR FOR Witten:1998qj (AdS/CFT)";
        assert_eq!(empty.placeholder("AdS/CFT").unwrap().to_string(), expected);
        assert_eq!(decode.placeholder("AdS/CFT").unwrap().to_string(), expected);
    }

    #[test]
    fn test_fetch_failure_marker() {
        let err = ResolveError::FetchTransport {
            inspire_id: "123".to_string(),
            control_number: 999,
            source: BibError::Api {
                status: 500,
                message: String::new(),
            },
        };
        assert_eq!(
            err.placeholder("c1").unwrap().to_string(),
            "%% ERROR RETRIEVING BIBTEX FOR 123 (c1)"
        );
        assert!(err.to_string().contains("(#999)"));
    }
}

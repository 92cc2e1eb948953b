//! Public types for the spreadsheet-to-BibTeX pipeline.

use std::collections::HashMap;
use std::fmt;

/// Column holding the INSPIRE identifier (texkey, arXiv number, DOI, ...).
pub const INSPIRE_ID_COLUMN: &str = "InspireId";
/// Column holding an optional hand-written BibTeX entry.
pub const BIBTEX_COLUMN: &str = "BibTeX";
/// Free-text annotation copied into the fragment header.
pub const COMMENT_COLUMN: &str = "Comment";
/// Title copied into the fragment header.
pub const TITLE_COLUMN: &str = "Title";

/// One spreadsheet row, keyed by the header labels.
///
/// Only columns that actually have a cell in this row are present: a row
/// shorter than the header has no entry at all for the trailing labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Pair header labels with cells by position, stopping at the shorter side.
    ///
    /// Repeated labels keep the value of the rightmost column.
    pub fn from_row<H, C>(headers: H, cells: C) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let fields = headers
            .into_iter()
            .zip(cells)
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { fields }
    }

    /// Raw cell lookup.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The INSPIRE identifier, unless absent or blank.
    pub fn inspire_id(&self) -> Option<&str> {
        self.get(INSPIRE_ID_COLUMN).filter(|id| !id.trim().is_empty())
    }

    /// The `BibTeX` cell, if it already holds a usable entry.
    pub fn embedded_bibtex(&self) -> Option<&str> {
        self.get(BIBTEX_COLUMN).filter(|b| is_bibtex_entry(b))
    }

    pub fn comment(&self) -> &str {
        self.get(COMMENT_COLUMN).unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.get(TITLE_COLUMN).unwrap_or_default()
    }
}

/// A cell counts as BibTeX when it has a brace and is not commented out.
pub fn is_bibtex_entry(text: &str) -> bool {
    text.contains('{') && !text.starts_with('%')
}

/// One unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A citation with its two-line comment header.
    Citation {
        comment: String,
        title: String,
        bibtex: String,
    },
    /// The INSPIRE search failed, was unreadable, or found nothing.
    InspireError { inspire_id: String, comment: String },
    /// The search succeeded but the BibTeX download did not.
    BibtexError { inspire_id: String, comment: String },
}

impl Fragment {
    pub fn citation(comment: &str, title: &str, bibtex: impl Into<String>) -> Self {
        Fragment::Citation {
            comment: comment.to_string(),
            title: title.to_string(),
            bibtex: bibtex.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Fragment::Citation { .. })
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Citation {
                comment,
                title,
                bibtex,
            } => write!(f, "%%  {} \n%%  {}\n{}", comment, title, bibtex),
            Fragment::InspireError {
                inspire_id,
                comment,
            } => write!(f, "%% INSPIRE ERROR FOR {} ({})", inspire_id, comment),
            Fragment::BibtexError {
                inspire_id,
                comment,
            } => write!(
                f,
                "%% ERROR RETRIEVING BIBTEX FOR {} ({})",
                inspire_id, comment
            ),
        }
    }
}

/// Render fragments separated by a blank line.
pub fn join_fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::from_row(
            pairs.iter().map(|(k, _)| *k),
            pairs.iter().map(|(_, v)| *v),
        )
    }

    #[test]
    fn test_short_row_omits_trailing_keys() {
        let r = Record::from_row(["InspireId", "BibTeX", "Comment"], ["123"]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("InspireId"), Some("123"));
        assert_eq!(r.get("BibTeX"), None);
        assert_eq!(r.comment(), "");
    }

    #[test]
    fn test_long_row_drops_extra_cells() {
        let r = Record::from_row(["InspireId"], ["1", "2", "3"]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("InspireId"), Some("1"));
    }

    #[test]
    fn test_duplicate_header_keeps_last() {
        let r = Record::from_row(["Title", "Title"], ["first", "second"]);
        assert_eq!(r.title(), "second");
    }

    #[test]
    fn test_blank_inspire_id_is_missing() {
        for blank in ["", " ", "  ", "\t"] {
            assert_eq!(record(&[("InspireId", blank)]).inspire_id(), None);
        }
        assert_eq!(Record::default().inspire_id(), None);
        assert_eq!(
            record(&[("InspireId", "Maldacena:1997re")]).inspire_id(),
            Some("Maldacena:1997re")
        );
    }

    #[test]
    fn test_embedded_bibtex_detection() {
        assert!(is_bibtex_entry("@article{foo, title={Bar}}"));
        assert!(!is_bibtex_entry(""));
        assert!(!is_bibtex_entry("TODO"));
        assert!(!is_bibtex_entry("%@article{foo}"));

        let r = record(&[("InspireId", "1"), ("BibTeX", "@book{x}")]);
        assert_eq!(r.embedded_bibtex(), Some("@book{x}"));
        assert_eq!(record(&[("InspireId", "1")]).embedded_bibtex(), None);
    }

    #[test]
    fn test_citation_rendering() {
        let f = Fragment::citation("c1", "t1", "@article{foo,...}");
        assert_eq!(f.to_string(), "%%  c1 \n%%  t1\n@article{foo,...}");
        assert!(!f.is_error());
    }

    #[test]
    fn test_empty_header_still_rendered() {
        let f = Fragment::citation("", "", "@misc{x}");
        assert_eq!(f.to_string(), "%%   \n%%  \n@misc{x}");
    }

    #[test]
    fn test_error_rendering() {
        let search = Fragment::InspireError {
            inspire_id: "abc".to_string(),
            comment: "note".to_string(),
        };
        let fetch = Fragment::BibtexError {
            inspire_id: "abc".to_string(),
            comment: String::new(),
        };
        assert_eq!(search.to_string(), "%% INSPIRE ERROR FOR abc (note)");
        assert_eq!(fetch.to_string(), "%% ERROR RETRIEVING BIBTEX FOR abc ()");
        assert!(search.is_error() && fetch.is_error());
    }

    #[test]
    fn test_join_fragments() {
        assert_eq!(join_fragments(&[]), "");
        let a = Fragment::citation("a", "A", "@a{1}");
        let b = Fragment::InspireError {
            inspire_id: "2".to_string(),
            comment: "b".to_string(),
        };
        assert_eq!(
            join_fragments(&[a, b]),
            "%%  a \n%%  A\n@a{1}\n\n%% INSPIRE ERROR FOR 2 (b)"
        );
    }
}

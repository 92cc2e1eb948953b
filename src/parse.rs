//! INSPIRE API response parsing.

use crate::error::BibError;
use serde::Deserialize;
use serde_json::Value;

/// `GET /api/literature?q=...` response. Only the fields we touch.
#[derive(Debug, Deserialize)]
pub(crate) struct InspireSearchResponse {
    pub hits: InspireHits,
}

/// Hits stay untyped: only the first one's `id` is ever read.
#[derive(Debug, Deserialize)]
pub(crate) struct InspireHits {
    pub hits: Vec<Value>,
}

/// INSPIRE sends record ids as strings (`"id": "451647"`); older dumps and
/// mirrors use plain integers, sometimes written as `5.0`. Accept all three.
fn deserialize_control_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ControlNumberVisitor;

    impl<'de> Visitor<'de> for ControlNumberVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a string of digits")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
                Ok(v as u64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(ControlNumberVisitor)
}

/// Parse a search response into the control number of its first hit.
///
/// `Ok(None)` means the search ran fine but matched nothing.
pub fn parse_search_response(json: &str) -> crate::error::Result<Option<u64>> {
    let response: InspireSearchResponse = serde_json::from_str(json)
        .map_err(|e| BibError::Parse(format!("Invalid INSPIRE JSON: {}", e)))?;

    let Some(first) = response.hits.hits.first() else {
        return Ok(None);
    };
    let id = first
        .get("id")
        .ok_or_else(|| BibError::Parse("First INSPIRE hit has no id".to_string()))?;
    deserialize_control_number(id)
        .map(Some)
        .map_err(|e| BibError::Parse(format!("Invalid INSPIRE record id: {}", e)))
}

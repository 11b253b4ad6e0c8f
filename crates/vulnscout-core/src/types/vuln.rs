use serde::{Deserialize, Deserializer, Serialize};

/// Most records kept from a single search
pub const MAX_RESULTS: usize = 5;

/// A vulnerability record as returned by the search service.
///
/// Only `id` and `summary` are interpreted; every other field is carried
/// through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Identifier, usually a CVE id
    #[serde(default, deserialize_with = "string_or_null")]
    pub id: String,

    /// Human-readable summary
    #[serde(default, deserialize_with = "string_or_null")]
    pub summary: String,

    /// Remaining fields from the service
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Vulnerability {
    /// Create a record with just an id and summary
    #[must_use]
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            extra: serde_json::Map::new(),
        }
    }
}

fn string_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Search response body.
///
/// The list has been seen under both `results` and `data`. `results` wins
/// when both are present, and a body with neither yields no records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching records in the service's ranking order
    #[serde(default)]
    pub results: Option<Vec<Vulnerability>>,

    /// Same list under its alternate name
    #[serde(default)]
    pub data: Option<Vec<Vulnerability>>,
}

impl SearchResponse {
    /// Take at most [`MAX_RESULTS`] records
    #[must_use]
    pub fn into_top(self) -> Vec<Vulnerability> {
        let mut records = self.results.or(self.data).unwrap_or_default();
        records.truncate(MAX_RESULTS);
        records
    }
}

/// Outcome of one vulnerability lookup.
///
/// Keeps "nothing known" (`Found` with no records) apart from "could not
/// ask" (`Failed`).
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The service answered; the list may be empty
    Found(Vec<Vulnerability>),
    /// The lookup could not be completed
    Failed {
        /// Human-readable reason
        reason: String,
    },
}

impl LookupOutcome {
    /// Records found, empty when the lookup failed
    #[must_use]
    pub fn records(&self) -> &[Vulnerability] {
        match self {
            Self::Found(records) => records,
            Self::Failed { .. } => &[],
        }
    }

    /// Consume into the records, empty when the lookup failed
    #[must_use]
    pub fn into_records(self) -> Vec<Vulnerability> {
        match self {
            Self::Found(records) => records,
            Self::Failed { .. } => Vec::new(),
        }
    }

    /// Returns true if the lookup failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Failure reason, if any
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            Self::Found(_) => None,
        }
    }
}

impl<E: std::fmt::Display> From<Result<Vec<Vulnerability>, E>> for LookupOutcome {
    fn from(result: Result<Vec<Vulnerability>, E>) -> Self {
        match result {
            Ok(records) => Self::Found(records),
            Err(e) => Self::Failed {
                reason: e.to_string(),
            },
        }
    }
}

//! List-response normalization.
//!
//! The backend is inconsistent about collection responses: most endpoints
//! return a bare JSON array, but paginated ones wrap the records in a
//! `{"count": ..., "results": [...]}` envelope. Screens must treat both as
//! valid and work with a plain sequence of records.

use serde::Deserialize;

/// Either shape of a collection response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// A bare array of records.
    Bare(Vec<T>),
    /// A pagination envelope; only `results` matters to the client.
    Paginated { results: Vec<T> },
}

impl<T> ListEnvelope<T> {
    /// Unwrap to the record sequence, whichever shape arrived.
    pub fn into_records(self) -> Vec<T> {
        match self {
            Self::Bare(records) => records,
            Self::Paginated { results } => results,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Bare(records) => records.len(),
            Self::Paginated { results } => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

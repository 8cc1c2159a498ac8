use thiserror::Error;

/// Errors surfaced by the persistence layer.
///
/// None of these are fatal to a running session: callers surface them as a
/// transient notification and carry on. A corrupted persisted record is not
/// an error at all; readers treat it as "no data".
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The operation targeted an id that is not in the collection. The
    /// collection is left untouched.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The backing key-value store failed to read or write (the canonical
    /// case is the browser storage quota). The operation is aborted without
    /// partial mutation.
    #[error("storage failure: {0}")]
    Persistence(String),

    /// An import payload did not parse as a document archive. The existing
    /// collection is untouched.
    #[error("invalid import payload: {0}")]
    ImportFormat(String),
}

use thiserror::Error;

/// Record-level failures of the interaction loader.
///
/// These never reach the graph core: the loader logs and skips the offending
/// line (see [`crate::io::InteractionReader`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected exactly two comma-separated fields in {line:?}")]
    FieldCount { line: String },

    #[error("empty identifier in {line:?}")]
    EmptyIdentifier { line: String },
}

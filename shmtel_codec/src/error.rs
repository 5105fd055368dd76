//! Error types for record encode/decode.

use crate::record::RecordKind;
use thiserror::Error;

/// Errors raised while turning bytes into records and back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input (or output) buffer is shorter than the record's fixed layout.
    #[error("{kind} needs {required} bytes, buffer has {actual}")]
    BufferTooShort {
        /// Record being decoded or encoded
        kind: RecordKind,
        /// Fixed layout size in bytes
        required: usize,
        /// Length of the buffer supplied
        actual: usize,
    },

    /// A count or extent exceeds the record's fixed slot capacity.
    #[error("{kind}.{field}: {requested} exceeds fixed capacity {capacity}")]
    CapacityExceeded {
        /// Record being decoded or encoded
        kind: RecordKind,
        /// Offending field
        field: &'static str,
        /// Fixed number of slots available
        capacity: usize,
        /// Count that was requested or found in the buffer
        requested: usize,
    },
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

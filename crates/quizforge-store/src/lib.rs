//! quizforge-store — the key-value exam store.
//!
//! The persistence boundary is a deliberately small string-keyed,
//! string-valued store with JSON-serialized values and no schema migration.
//! The [`KvStore`] trait is the injected port; [`FileStore`] backs it with
//! one file per key, [`MemoryStore`] keeps everything in memory for tests,
//! and [`ExamStore`] is the typed layer over the two well-known keys.

pub mod exams;
pub mod file;
pub mod memory;

use thiserror::Error;

pub use exams::{ExamStore, MY_EXAMS_KEY, STAGED_EXAM_KEY};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from the storage boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored value did not deserialize. No migration exists; the
    /// caller decides whether to treat this as fatal.
    #[error("stored value under '{key}' is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed, string-valued storage port.
///
/// Values are JSON blobs; the store itself knows nothing about their shape.
pub trait KvStore {
    /// Read the value under `key`, or `None` if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

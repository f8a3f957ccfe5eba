//! # Storage Layer
//!
//! Blog records live behind the [`BlogStore`] trait so the command layer can run
//! against the filesystem in production and against memory in tests.
//!
//! ## Storage Layout
//!
//! ```text
//! .data/
//! ├── ai-in-2026.json        # one file per record, comments embedded
//! └── cancer-and-medical.json
//! ```
//!
//! There is no index file. Listings are derived by scanning the records (see
//! [`crate::index`]), so they can never disagree with what is on disk.
//!
//! ## Result Semantics
//!
//! - Missing record: `Ok(None)`.
//! - Record present but not decodable: `Ok(None)`, logged at `warn`.
//! - I/O failure (permissions, full disk): `Err(BlogError::Io)`.
//!
//! ## Concurrency
//!
//! Single writer assumed. Every `put_record` rewrites the whole file and the last
//! writer wins; two callers doing read-modify-write on the same id can lose an
//! update. Nothing here arbitrates between them.

use crate::error::Result;
use crate::model::BlogRecord;

pub mod fs;
pub mod memory;

pub const RECORD_EXT: &str = ".json";

pub trait BlogStore {
    /// Read and decode the record stored under `id`.
    fn get_record(&self, id: &str) -> Result<Option<BlogRecord>>;

    /// Write the full record under its own id, replacing any previous version.
    fn put_record(&mut self, record: &BlogRecord) -> Result<()>;

    /// Ids of every record file, in ascending name order.
    fn record_ids(&self) -> Result<Vec<String>>;

    /// True when the backing location holds no entries at all, records or otherwise.
    fn is_empty(&self) -> Result<bool>;
}

/// Ids double as file name stems, so anything that could escape the store
/// directory or hide as a dotfile is rejected.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && !id.contains(['/', '\\', '\0'])
}

pub fn record_filename(id: &str) -> String {
    format!("{}{}", id, RECORD_EXT)
}

/// Maps a directory entry name back to a record id, if it names a record file.
pub fn id_from_filename(name: &str) -> Option<&str> {
    let id = name.strip_suffix(RECORD_EXT)?;
    is_valid_id(id).then_some(id)
}

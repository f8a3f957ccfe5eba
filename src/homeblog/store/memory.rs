use super::{id_from_filename, is_valid_id, record_filename, BlogStore};
use crate::codec::{decode_record, encode_record};
use crate::error::{BlogError, Result};
use crate::model::BlogRecord;
use std::collections::BTreeMap;
use std::io;
use tracing::warn;

/// In-memory store for tests.
///
/// Holds encoded file contents keyed by file name, so records go through the same
/// codec as on disk and corrupt or unrelated entries can be planted with
/// [`InMemoryStore::insert_raw`].
#[derive(Default)]
pub struct InMemoryStore {
    files: BTreeMap<String, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place arbitrary content under a file name, bypassing the codec.
    pub fn insert_raw(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.files.insert(name.into(), content.into());
    }

    pub fn raw(&self, id: &str) -> Option<&str> {
        self.files.get(&record_filename(id)).map(String::as_str)
    }

    /// Make every subsequent write fail with an I/O error.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl BlogStore for InMemoryStore {
    fn get_record(&self, id: &str) -> Result<Option<BlogRecord>> {
        if !is_valid_id(id) {
            return Ok(None);
        }
        let Some(text) = self.files.get(&record_filename(id)) else {
            return Ok(None);
        };
        match decode_record(text.as_bytes()) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(id, error = %e, "ignoring undecodable blog record");
                Ok(None)
            }
        }
    }

    fn put_record(&mut self, record: &BlogRecord) -> Result<()> {
        if !is_valid_id(&record.id) {
            return Err(BlogError::InvalidId(record.id.clone()));
        }
        if self.simulate_write_error {
            return Err(BlogError::Io(io::Error::new(
                io::ErrorKind::Other,
                "simulated write error",
            )));
        }
        let content = encode_record(record)?;
        self.files.insert(record_filename(&record.id), content);
        Ok(())
    }

    fn record_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .files
            .keys()
            .filter_map(|name| id_from_filename(name))
            .map(str::to_string)
            .collect())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.files.is_empty())
    }
}

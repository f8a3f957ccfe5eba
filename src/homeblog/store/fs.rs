use super::{id_from_filename, is_valid_id, record_filename, BlogStore};
use crate::codec::{decode_record, encode_record};
use crate::error::{BlogError, Result};
use crate::model::BlogRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Production store: one `<id>.json` file per record inside `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, id: &str) -> PathBuf {
        self.root.join(record_filename(id))
    }

    fn ensure_dir(&self) -> Result<()> {
        // create_dir_all succeeds if the directory appeared in the meantime.
        if !self.root.exists() {
            debug!(dir = %self.root.display(), "creating store directory");
            fs::create_dir_all(&self.root).map_err(BlogError::Io)?;
        }
        Ok(())
    }
}

impl BlogStore for FileStore {
    fn get_record(&self, id: &str) -> Result<Option<BlogRecord>> {
        if !is_valid_id(id) {
            return Ok(None);
        }

        let path = self.record_path(id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BlogError::Io(e)),
        };

        match decode_record(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring undecodable blog record");
                Ok(None)
            }
        }
    }

    fn put_record(&mut self, record: &BlogRecord) -> Result<()> {
        if !is_valid_id(&record.id) {
            return Err(BlogError::InvalidId(record.id.clone()));
        }
        self.ensure_dir()?;

        let content = encode_record(record)?;
        let target = self.record_path(&record.id);

        // Write to a dotfile first; listings skip it until the rename lands.
        let tmp = self.root.join(format!(".record-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(BlogError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(BlogError::Io(e));
        }

        debug!(id = %record.id, comments = record.comments.len(), "wrote blog record");
        Ok(())
    }

    fn record_ids(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BlogError::Io(e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(BlogError::Io)?;
            if !entry.file_type().map_err(BlogError::Io)?.is_file() {
                continue;
            }
            if let Some(id) = entry.file_name().to_str().and_then(id_from_filename) {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn is_empty(&self) -> Result<bool> {
        self.ensure_dir()?;
        let mut entries = fs::read_dir(&self.root).map_err(BlogError::Io)?;
        Ok(entries.next().is_none())
    }
}

//! # Metadata Index
//!
//! The listing view over blog records. It is derived on every call by reading and
//! decoding each record file, projecting it to [`BlogMetadata`], and sorting newest
//! first. Nothing is cached or persisted, so the listing always reflects what is on
//! disk.
//!
//! ## Cost
//!
//! Each call is a full scan: O(n) file reads and decodes. That is the scalability
//! ceiling of this store and is acceptable for the handful of records a personal
//! blog holds.
//!
//! ## Ordering
//!
//! Records are visited in ascending id order, then stably sorted by date
//! descending. Equal dates therefore keep a fixed relative order (by id) across
//! calls. Dates that do not parse sort after every dated record.
//!
//! ## Corrupt Records
//!
//! A record file that fails to decode is skipped (and logged at `warn` by the
//! store); the rest of the listing is still returned. I/O errors abort the listing.

use crate::error::Result;
use crate::model::{parse_date, BlogMetadata};
use crate::store::BlogStore;
use std::cmp::Reverse;
use tracing::debug;

pub fn list_metadata<S: BlogStore>(store: &S) -> Result<Vec<BlogMetadata>> {
    let ids = store.record_ids()?;
    let mut listed = Vec::with_capacity(ids.len());
    let mut skipped = 0usize;

    for id in &ids {
        match store.get_record(id)? {
            Some(record) => listed.push(record.metadata()),
            None => skipped += 1,
        }
    }

    listed.sort_by_key(|meta| Reverse(parse_date(&meta.date)));
    debug!(listed = listed.len(), skipped, "built metadata listing");
    Ok(listed)
}

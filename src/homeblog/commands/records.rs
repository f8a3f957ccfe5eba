use crate::clock::Clock;
use crate::error::{BlogError, Result};
use crate::model::{format_date, slugify, BlogRecord};
use crate::store::BlogStore;
use tracing::info;

pub fn get<S: BlogStore>(store: &S, id: &str) -> Result<Option<BlogRecord>> {
    store.get_record(id)
}

pub fn put<S: BlogStore>(store: &mut S, record: &BlogRecord) -> Result<()> {
    store.put_record(record)
}

/// Creates a new record whose id is derived from `title`. The id is fixed from
/// here on; later title changes would not move the file.
pub fn create<S: BlogStore>(
    store: &mut S,
    clock: &dyn Clock,
    title: &str,
    excerpt: &str,
    author: &str,
) -> Result<BlogRecord> {
    let id = slugify(title);
    if id.is_empty() {
        return Err(BlogError::InvalidInput(format!(
            "title {:?} does not produce a usable id",
            title
        )));
    }
    if store.get_record(&id)?.is_some() {
        return Err(BlogError::RecordExists(id));
    }

    let record = BlogRecord::new(
        id,
        title.trim(),
        excerpt,
        author,
        format_date(clock.today()),
    );
    store.put_record(&record)?;
    info!(id = %record.id, "created blog record");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    #[test]
    fn get_of_missing_id_is_absent() {
        let store = InMemoryStore::new();
        assert_eq!(get(&store, "missing-id").unwrap(), None);
    }

    #[test]
    fn put_overwrites_unconditionally() {
        let mut store = InMemoryStore::new();
        put(&mut store, &BlogRecord::new("a", "One", "E", "X", "2026-01-01")).unwrap();
        put(&mut store, &BlogRecord::new("a", "Two", "E", "X", "2026-01-01")).unwrap();
        assert_eq!(get(&store, "a").unwrap().unwrap().title, "Two");
    }

    #[test]
    fn put_of_unchanged_record_writes_identical_bytes() {
        let mut store = InMemoryStore::new();
        let record = BlogRecord::new("a", "T", "E", "X", "2026-01-01");
        put(&mut store, &record).unwrap();
        let first = store.raw("a").unwrap().to_string();
        put(&mut store, &record).unwrap();
        assert_eq!(store.raw("a").unwrap(), first);
    }

    #[test]
    fn create_derives_id_and_date() {
        let mut store = InMemoryStore::new();
        let record = create(&mut store, &clock(), "Hello, World!", "E", "X").unwrap();
        assert_eq!(record.id, "hello-world");
        assert_eq!(record.title, "Hello, World!");
        assert_eq!(record.date, "2026-10-17");
        assert!(record.comments.is_empty());
        assert_eq!(get(&store, "hello-world").unwrap(), Some(record));
    }

    #[test]
    fn create_refuses_existing_id() {
        let mut store = InMemoryStore::new();
        create(&mut store, &clock(), "Hello", "E", "X").unwrap();
        let err = create(&mut store, &clock(), "hello!", "E2", "Y").unwrap_err();
        assert!(matches!(err, BlogError::RecordExists(id) if id == "hello"));
    }

    #[test]
    fn create_refuses_titles_without_slug_characters() {
        let mut store = InMemoryStore::new();
        let err = create(&mut store, &clock(), "???", "E", "X").unwrap_err();
        assert!(matches!(err, BlogError::InvalidInput(_)));
        assert!(store.is_empty().unwrap());
    }
}

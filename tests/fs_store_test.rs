use chrono::NaiveDate;
use homeblog::api::BlogApi;
use homeblog::clock::{Clock, FixedClock, SequentialIds, SystemClock};
use homeblog::commands::{comments, seed};
use homeblog::error::BlogError;
use homeblog::index::list_metadata;
use homeblog::model::{format_date, BlogRecord, Comment, NewComment};
use homeblog::posts::PostStore;
use homeblog::store::fs::FileStore;
use homeblog::store::BlogStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join(".data"));
    (dir, store)
}

fn record(id: &str, date: &str) -> BlogRecord {
    BlogRecord::new(id, "Title", "Excerpt", "Author", date)
}

fn fixed_clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
}

#[test]
fn put_creates_directory_and_round_trips() {
    let (_dir, mut store) = setup();
    assert!(!store.root().exists());

    let mut rec = record("a", "2026-01-01");
    rec.comments.push(Comment {
        id: "comment-1".into(),
        author: "B".into(),
        email: "b@e.com".into(),
        content: "first".into(),
        date: "2026-01-02".into(),
    });
    rec.comments.push(Comment {
        id: "comment-2".into(),
        author: "C".into(),
        email: "c@e.com".into(),
        content: "second".into(),
        date: "2026-01-03".into(),
    });
    store.put_record(&rec).unwrap();

    assert!(store.record_path("a").exists());
    assert_eq!(store.get_record("a").unwrap(), Some(rec));
}

#[test]
fn repeated_put_is_byte_identical_and_leaves_no_temp_files() {
    let (_dir, mut store) = setup();
    let rec = record("a", "2026-01-01");

    store.put_record(&rec).unwrap();
    let first = fs::read(store.record_path("a")).unwrap();
    store.put_record(&rec).unwrap();
    let second = fs::read(store.record_path("a")).unwrap();
    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("\n  \"title\": \"Title\""));

    for entry in fs::read_dir(store.root()).unwrap() {
        let name = entry.unwrap().file_name().into_string().unwrap();
        assert!(!name.ends_with(".tmp"), "leftover temp file {}", name);
    }
}

#[test]
fn get_of_missing_record_is_absent_without_creating_anything() {
    let (_dir, store) = setup();
    assert_eq!(store.get_record("missing-id").unwrap(), None);
    assert!(!store.root().exists());
    assert!(store.record_ids().unwrap().is_empty());
}

#[test]
fn corrupt_file_is_absent_and_skipped_in_listing() {
    let (_dir, mut store) = setup();
    store.put_record(&record("good", "2026-01-01")).unwrap();
    fs::write(store.record_path("broken"), "{ \"id\": \"broken\"").unwrap();

    assert_eq!(store.get_record("broken").unwrap(), None);
    let listed = list_metadata(&store).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "good");
}

#[test]
fn non_utf8_file_is_absent_and_skipped_in_listing() {
    let (_dir, mut store) = setup();
    store.put_record(&record("good", "2026-01-01")).unwrap();
    fs::write(store.record_path("bad"), [0xff, 0xfe, b'{']).unwrap();

    assert_eq!(store.get_record("bad").unwrap(), None);
    let listed = list_metadata(&store).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "good");
}

#[test]
fn listing_orders_by_date_descending() {
    let (_dir, mut store) = setup();
    store.put_record(&record("x", "2026-02-04")).unwrap();
    store.put_record(&record("y", "2026-02-01")).unwrap();
    store.put_record(&record("z", "2026-02-03")).unwrap();

    let dates: Vec<String> = list_metadata(&store)
        .unwrap()
        .into_iter()
        .map(|m| m.date)
        .collect();
    assert_eq!(dates, vec!["2026-02-04", "2026-02-03", "2026-02-01"]);
}

#[test]
fn listing_is_derived_from_current_files() {
    let (_dir, mut store) = setup();
    store.put_record(&record("a", "2026-01-01")).unwrap();
    assert_eq!(list_metadata(&store).unwrap().len(), 1);

    fs::remove_file(store.record_path("a")).unwrap();
    assert!(list_metadata(&store).unwrap().is_empty());
}

#[test]
fn seeding_is_idempotent_on_disk() {
    let (_dir, mut store) = setup();
    let first = seed::seed_if_empty(&mut store).unwrap();
    assert_eq!(first.written, 5);

    let snapshot: Vec<(String, Vec<u8>)> = store
        .record_ids()
        .unwrap()
        .into_iter()
        .map(|id| {
            let bytes = fs::read(store.record_path(&id)).unwrap();
            (id, bytes)
        })
        .collect();

    let second = seed::seed_if_empty(&mut store).unwrap();
    assert!(!second.seeded());
    for (id, bytes) in snapshot {
        assert_eq!(fs::read(store.record_path(&id)).unwrap(), bytes);
    }
}

#[test]
fn unrelated_file_prevents_seeding() {
    let (_dir, mut store) = setup();
    fs::create_dir_all(store.root()).unwrap();
    fs::write(store.root().join("notes.txt"), "hello").unwrap();

    let report = seed::seed_if_empty(&mut store).unwrap();
    assert!(!report.seeded());
    assert!(store.record_ids().unwrap().is_empty());
}

#[test]
fn append_to_missing_record_creates_no_file() {
    let (_dir, mut store) = setup();
    let mut ids = SequentialIds::new("");
    let result = comments::append(
        &mut store,
        &fixed_clock(),
        &mut ids,
        "missing-id",
        NewComment::new("B", "b@e.com", "hi"),
    )
    .unwrap();
    assert_eq!(result, None);
    assert!(!store.record_path("missing-id").exists());
}

#[test]
fn io_failure_is_an_error_not_absent() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file in the way").unwrap();

    let mut store = FileStore::new(&blocker);
    let err = store.put_record(&record("a", "2026-01-01")).unwrap_err();
    assert!(matches!(err, BlogError::Io(_)));
}

#[test]
fn interleaved_read_modify_write_loses_an_update() {
    // Known non-guarantee: no locking, last put wins.
    let (dir, mut writer_a) = setup();
    let mut writer_b = FileStore::new(dir.path().join(".data"));
    writer_a.put_record(&record("a", "2026-01-01")).unwrap();

    let mut seen_by_a = writer_a.get_record("a").unwrap().unwrap();
    let mut seen_by_b = writer_b.get_record("a").unwrap().unwrap();

    seen_by_a.comments.push(Comment {
        id: "comment-a".into(),
        author: "A".into(),
        email: "a@e.com".into(),
        content: "from a".into(),
        date: "2026-01-01".into(),
    });
    seen_by_b.comments.push(Comment {
        id: "comment-b".into(),
        author: "B".into(),
        email: "b@e.com".into(),
        content: "from b".into(),
        date: "2026-01-01".into(),
    });
    writer_a.put_record(&seen_by_a).unwrap();
    writer_b.put_record(&seen_by_b).unwrap();

    let stored = writer_a.get_record("a").unwrap().unwrap();
    assert_eq!(stored.comments.len(), 1);
    assert_eq!(stored.comments[0].id, "comment-b");
}

#[test]
fn end_to_end_with_real_clock() {
    let dir = TempDir::new().unwrap();
    let mut api = BlogApi::new(
        FileStore::new(dir.path().join(".data")),
        PostStore::new(dir.path().join("posts")),
    );

    api.seed_if_empty().unwrap();
    api.put_record(&BlogRecord::new("a", "T", "E", "X", "2026-01-01"))
        .unwrap();
    let before = list_metadata(api.store()).unwrap();
    let count_before = before.iter().find(|m| m.id == "a").unwrap().comment_count;

    api.append_comment("a", NewComment::new("B", "b@e.com", "hi"))
        .unwrap()
        .unwrap();

    let record = api.get_record("a").unwrap().unwrap();
    assert_eq!(record.comments.len(), 1);
    assert_eq!(record.comments[0].content, "hi");
    let today = format_date(SystemClock.today());
    assert_eq!(record.comments[0].date, today);

    let after = api.list_metadata().unwrap();
    let count_after = after.iter().find(|m| m.id == "a").unwrap().comment_count;
    assert_eq!(count_after, count_before + 1);

    assert!(api.list_comments("missing-id").unwrap().is_empty());
    assert_eq!(api.get_record("missing-id").unwrap(), None);
}

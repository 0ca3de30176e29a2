#[path = "common/mod.rs"]
mod common;

use common::*;
use redpulse::{snapshot_value, write_snapshot};
use serde_json::Value;
use std::fs;
use time::macros::date;

/// The snapshot is a JSON array of raw thread objects, each with its raw
/// comments attached, under the `{date}_{community}.json` name.
#[test]
fn snapshot_round_trips_threads_with_comments() {
    let dir = tempfile::tempdir().unwrap();

    let mut thread = make_thread("a", "BTC thread", "body", 1_609_459_260);
    thread.comments = vec![make_comment("c1", "first"), make_comment("c2", "second")];

    let path = write_snapshot(&[thread], dir.path(), "cryptocurrency", date!(2021 - 01 - 01))
        .unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "2021-01-01_cryptocurrency.json"
    );

    let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let threads = doc.as_array().unwrap();
    assert_eq!(threads.len(), 1);

    // Raw API fields survive untouched alongside the injected comments.
    assert_eq!(threads[0]["id"], "a");
    assert_eq!(threads[0]["score"], 42);
    assert_eq!(threads[0]["author"], "alice");
    let comments = threads[0]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["body"], "first");
    assert_eq!(comments[1]["author"], "bob");
}

/// Output is human-readable: indented, with non-ASCII characters written
/// as-is rather than \u escapes.
#[test]
fn snapshot_is_pretty_and_keeps_non_ascii() {
    let dir = tempfile::tempdir().unwrap();

    let mut thread = make_thread("u", "naïve título", "köp mer ₿", 0);
    thread.comments = vec![make_comment("c1", "срочно в луну")];

    let path = write_snapshot(&[thread], dir.path(), "testing", date!(2021 - 06 - 15)).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains('\n'), "expected indented output");
    assert!(text.contains("naïve título"));
    assert!(text.contains("köp mer ₿"));
    assert!(text.contains("срочно в луну"));
    assert!(!text.contains("\\u"), "non-ASCII must not be escaped");
}

/// `snapshot_value` leaves the stored raw object untouched and only adds
/// the comments array.
#[test]
fn snapshot_value_injects_comments_only() {
    let mut thread = make_thread("a", "t", "b", 0);
    thread.comments = vec![make_comment("c1", "x")];

    let v = snapshot_value(&thread);
    assert_eq!(v["title"], "t");
    assert_eq!(v["comments"].as_array().unwrap().len(), 1);
    // the record itself still has no comments key in its raw form
    assert!(thread.raw.get("comments").is_none());
}

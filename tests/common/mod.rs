use redpulse::{Comment, Thing, Thread};
use serde_json::{json, Value};

/// Raw `t3` data object the way the listing endpoint returns it, with a
/// couple of extra fields so snapshot tests can verify nothing is dropped.
pub fn thread_data(id: &str, title: &str, selftext: &str, created_utc: i64) -> Value {
    json!({
        "id": id,
        "title": title,
        "selftext": selftext,
        "created_utc": created_utc as f64,
        "subreddit": "testing",
        "score": 42,
        "author": "alice"
    })
}

pub fn thread_thing(id: &str, title: &str, selftext: &str, created_utc: i64) -> Thing {
    Thing {
        kind: "t3".to_string(),
        data: thread_data(id, title, selftext, created_utc),
    }
}

pub fn make_thread(id: &str, title: &str, selftext: &str, created_utc: i64) -> Thread {
    Thread::from_data(thread_data(id, title, selftext, created_utc)).unwrap()
}

/// Raw `t1` data object as returned by the comments endpoints.
pub fn comment_data(id: &str, body: &str) -> Value {
    json!({
        "id": id,
        "body": body,
        "author": "bob",
        "score": 7
    })
}

pub fn comment_thing(id: &str, body: &str) -> Thing {
    Thing {
        kind: "t1".to_string(),
        data: comment_data(id, body),
    }
}

pub fn make_comment(id: &str, body: &str) -> Comment {
    Comment::from_data(comment_data(id, body)).unwrap()
}

/// A `more` placeholder thing carrying unresolved child IDs.
pub fn more_thing(children: &[&str]) -> Thing {
    Thing {
        kind: "more".to_string(),
        data: json!({
            "id": "_",
            "children": children,
            "count": children.len()
        }),
    }
}

//! Wire envelopes for the listing/comments/morechildren endpoints, plus the
//! domain records. Records keep the full API object (`raw`) next to a typed
//! minimal projection so logic stays fast and snapshots stay lossless.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Thing kind for a normal comment.
pub const KIND_COMMENT: &str = "t1";
/// Thing kind for a "load more comments" placeholder.
pub const KIND_MORE: &str = "more";
/// Fullname prefix for link (thread) IDs.
pub const LINK_PREFIX: &str = "t3_";

// -------- Wire envelopes --------

/// One element of a listing: `{"kind": "...", "data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Thing {
    pub kind: String,
    pub data: Value,
}

#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// `/api/morechildren` wraps its payload one level deeper.
#[derive(Debug, Deserialize)]
pub struct MoreChildrenResponse {
    pub json: MoreChildrenBody,
}

#[derive(Debug, Deserialize)]
pub struct MoreChildrenBody {
    #[serde(default)]
    pub data: Option<MoreChildrenData>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MoreChildrenData {
    #[serde(default)]
    pub things: Vec<Thing>,
}

/// Payload of a `more` placeholder: the unresolved child comment IDs.
#[derive(Debug, Deserialize)]
pub struct MoreData {
    #[serde(default)]
    pub children: Vec<String>,
}

// -------- Minimal projections (fast path over raw objects) --------

#[derive(Debug, Deserialize)]
struct MinimalThread {
    id: Option<String>,
    title: Option<String>,
    selftext: Option<String>,
    created_utc: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MinimalComment {
    id: Option<String>,
    body: Option<String>,
}

// -------- Domain records --------

/// A top-level post. `comments` is attached once after expansion and the
/// record is read-only from then on.
#[derive(Debug, Clone)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub selftext: String,
    pub created_utc: i64,
    pub comments: Vec<Comment>,
    pub raw: Value,
}

impl Thread {
    /// Build a `Thread` from the `data` object of a `t3` thing.
    pub fn from_data(raw: Value) -> Result<Self> {
        let min: MinimalThread =
            serde_json::from_value(raw.clone()).context("malformed thread object")?;
        Ok(Self {
            id: min.id.context("thread object missing id")?,
            title: min.title.unwrap_or_default(),
            selftext: min.selftext.unwrap_or_default(),
            created_utc: min.created_utc.context("thread object missing created_utc")? as i64,
            comments: Vec::new(),
            raw,
        })
    }
}

/// A normal (`t1`) comment. Placeholders never survive into this type.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: String,
    pub body: String,
    pub raw: Value,
}

impl Comment {
    /// Build a `Comment` from the `data` object of a `t1` thing.
    pub fn from_data(raw: Value) -> Result<Self> {
        let min: MinimalComment =
            serde_json::from_value(raw.clone()).context("malformed comment object")?;
        Ok(Self {
            id: min.id.context("comment object missing id")?,
            body: min.body.unwrap_or_default(),
            raw,
        })
    }
}

/// Unresolved child IDs carried by a `more` placeholder thing.
pub fn more_children_ids(data: &Value) -> Result<Vec<String>> {
    let more: MoreData =
        serde_json::from_value(data.clone()).context("malformed more placeholder")?;
    Ok(more.children)
}

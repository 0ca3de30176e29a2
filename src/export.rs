//! Snapshot export: one pretty-printed JSON document per run with the full
//! raw thread objects and their attached comment arrays. Non-ASCII content
//! is preserved unescaped (UTF-8 throughout).

use crate::date::iso_day;
use crate::models::Thread;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use time::Date;

/// Raw thread object with its `comments` array injected, mirroring what the
/// API returned plus the expansion result.
pub fn snapshot_value(thread: &Thread) -> Value {
    let mut obj = thread.raw.clone();
    let comments: Vec<Value> = thread.comments.iter().map(|c| c.raw.clone()).collect();
    if let Value::Object(map) = &mut obj {
        map.insert("comments".to_string(), Value::Array(comments));
    }
    obj
}

/// Write `{ISO-date}_{community}.json` into `dir` and return its path.
pub fn write_snapshot(
    threads: &[Thread],
    dir: &Path,
    community: &str,
    date: Date,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating snapshot dir {}", dir.display()))?;
    let path = dir.join(format!("{}_{}.json", iso_day(date), community));

    let doc: Vec<Value> = threads.iter().map(snapshot_value).collect();
    let file = File::create(&path)
        .with_context(|| format!("creating snapshot {}", path.display()))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, &doc)
        .with_context(|| format!("writing snapshot {}", path.display()))?;
    w.flush()?;

    tracing::info!("wrote snapshot {}", path.display());
    Ok(path)
}

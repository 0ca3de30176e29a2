//! Comment expander: fetches a thread's comment listing and resolves every
//! "load more comments" placeholder through the batch endpoint.
//!
//! Resolution runs off an explicit worklist of ID chunks instead of
//! recursing, with a request cap so a self-referential placeholder chain
//! from the API cannot loop forever. Result order is the initially returned
//! comments first, then resolved ones in worklist order; true tree order is
//! not reconstructed.

use crate::auth::Session;
use crate::config::PulseOptions;
use crate::models::{
    more_children_ids, Comment, Listing, MoreChildrenResponse, Thing, KIND_COMMENT, KIND_MORE,
    LINK_PREFIX,
};
use anyhow::{anyhow, bail, Context, Result};
use std::collections::VecDeque;

/// Split pending IDs into request-sized chunks. Every ID lands in exactly
/// one chunk and no chunk exceeds `limit`.
pub fn chunk_ids(ids: &[String], limit: usize) -> Vec<Vec<String>> {
    ids.chunks(limit.max(1)).map(|c| c.to_vec()).collect()
}

/// Partition a comment listing's children: parsed `t1` comments out, the
/// child IDs of every `more` placeholder collected for later resolution.
pub fn partition_children(children: Vec<Thing>) -> Result<(Vec<Comment>, Vec<String>)> {
    let mut comments = Vec::new();
    let mut pending = Vec::new();
    for thing in children {
        match thing.kind.as_str() {
            KIND_COMMENT => comments.push(Comment::from_data(thing.data)?),
            KIND_MORE => pending.extend(more_children_ids(&thing.data)?),
            _ => {}
        }
    }
    Ok((comments, pending))
}

/// Fold one resolved batch into the result: comments append, fresh
/// placeholders push their children onto the worklist as new chunks.
pub fn ingest_resolved(
    things: Vec<Thing>,
    out: &mut Vec<Comment>,
    worklist: &mut VecDeque<Vec<String>>,
    chunk: usize,
) -> Result<()> {
    for thing in things {
        match thing.kind.as_str() {
            KIND_COMMENT => out.push(Comment::from_data(thing.data)?),
            KIND_MORE => {
                let ids = more_children_ids(&thing.data)?;
                worklist.extend(chunk_ids(&ids, chunk));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Fetch the fully expanded, flattened comment sequence for one thread.
pub fn fetch_comments(
    session: &Session,
    opts: &PulseOptions,
    thread_id: &str,
) -> Result<Vec<Comment>> {
    let url = format!("{}/comments/{}", opts.api_base, thread_id);
    let body = session.get_json(&url, &[])?;

    // Two-part response: thread metadata listing, then the comment tree.
    let parts: Vec<Listing> =
        serde_json::from_value(body).context("malformed comments response")?;
    let comment_listing = parts
        .into_iter()
        .nth(1)
        .ok_or_else(|| anyhow!("comments response missing the comment listing"))?;

    let (mut comments, pending) = partition_children(comment_listing.data.children)?;
    resolve_more(session, opts, thread_id, pending, &mut comments)?;
    tracing::debug!("thread {thread_id}: {} comments after expansion", comments.len());
    Ok(comments)
}

fn resolve_more(
    session: &Session,
    opts: &PulseOptions,
    thread_id: &str,
    pending: Vec<String>,
    out: &mut Vec<Comment>,
) -> Result<()> {
    let mut worklist: VecDeque<Vec<String>> = chunk_ids(&pending, opts.more_chunk).into();
    let url = format!("{}/api/morechildren", opts.api_base);
    let link_id = format!("{LINK_PREFIX}{thread_id}");

    let mut requests = 0usize;
    while let Some(chunk) = worklist.pop_front() {
        requests += 1;
        if requests > opts.max_more_requests {
            bail!(
                "more-comments resolution for thread {thread_id} exceeded {} requests; \
                 aborting in case the API returned a self-referential placeholder chain",
                opts.max_more_requests
            );
        }

        let csv = chunk.join(",");
        let body = session.get_json(
            &url,
            &[
                ("link_id", link_id.as_str()),
                ("api_type", "json"),
                ("children", csv.as_str()),
            ],
        )?;
        let resolved: MoreChildrenResponse =
            serde_json::from_value(body).context("malformed morechildren response")?;
        let things = resolved.json.data.map(|d| d.things).unwrap_or_default();
        ingest_resolved(things, out, &mut worklist, opts.more_chunk)?;
    }
    Ok(())
}

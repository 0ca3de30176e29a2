//! Thread fetcher: walks the community's newest-first listing and keeps
//! every thread created "today" in local time.

use crate::auth::Session;
use crate::config::PulseOptions;
use crate::date::{local_date_from_epoch, today_local};
use crate::models::{Listing, Thing, Thread};
use crate::progress::make_spinner;
use anyhow::{anyhow, Context, Result};
use time::{Date, UtcOffset};

/// Date-gate one listing batch (feed order preserved).
/// Returns the kept threads and whether paging should stop: the feed is
/// newest-first, so the first non-today thread ends the walk. Sticky posts
/// can break that ordering and cause an undercount; kept as-is, see the
/// note on [`fetch_today_threads`].
pub fn split_today(
    batch: Vec<Thing>,
    today: Date,
    offset: UtcOffset,
) -> Result<(Vec<Thread>, bool)> {
    let mut kept = Vec::new();
    for thing in batch {
        let thread = Thread::from_data(thing.data)?;
        if local_date_from_epoch(thread.created_utc, offset) == today {
            kept.push(thread);
        } else {
            return Ok((kept, true));
        }
    }
    Ok((kept, false))
}

/// Fetch all of today's threads for the configured community, in feed order.
///
/// Pages `/r/{community}/new` with the opaque `after` cursor and stops on the
/// first thread whose local creation date is not today, on an empty page, or
/// when the cursor runs out. Assumes the feed is reverse-chronological;
/// pinned threads sorted out of order would end the walk early.
pub fn fetch_today_threads(session: &Session, opts: &PulseOptions) -> Result<Vec<Thread>> {
    let community = opts
        .community
        .as_deref()
        .ok_or_else(|| anyhow!("community is required"))?;
    let url = format!("{}/r/{}/new", opts.api_base, community);
    let today = today_local(opts.local_offset);

    tracing::info!("fetching all of today's threads for r/{community}");
    let pb = opts.progress.then(|| make_spinner("Fetching threads"));

    let mut all = Vec::new();
    let mut after = String::new();
    loop {
        let page = session.get_json(&url, &[("after", after.as_str())])?;
        let listing: Listing =
            serde_json::from_value(page).context("malformed listing response")?;

        if listing.data.children.is_empty() {
            break;
        }
        let (kept, stop) = split_today(listing.data.children, today, opts.local_offset)?;
        if let Some(pb) = &pb {
            pb.inc(kept.len() as u64);
        }
        all.extend(kept);
        if stop {
            break;
        }
        match listing.data.after {
            Some(cursor) if !cursor.is_empty() => after = cursor,
            _ => break,
        }
    }

    if let Some(pb) = &pb {
        pb.finish_with_message(format!("{} threads from today", all.len()));
    }
    tracing::info!("kept {} threads created on {today}", all.len());
    Ok(all)
}

//! Top-level pipeline: fluent builder over [`PulseOptions`] plus the two
//! entry operations, `collect()` (scrape) and `run()` (scrape + analyze).

use crate::auth::Session;
use crate::comments::fetch_comments;
use crate::config::PulseOptions;
use crate::date::today_local;
use crate::export::write_snapshot;
use crate::fetch::fetch_today_threads;
use crate::filters::filter_threads;
use crate::freq::{frequencies, FreqReport};
use crate::models::Thread;
use crate::progress::make_count_progress;
use crate::sentiment::{Sentiment, SentimentEngine};
use crate::text::{words_for, Stopwords};
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use time::UtcOffset;

#[derive(Clone)]
pub struct RedditPulse {
    pub(crate) opts: PulseOptions,
}

/// Everything one run produces: the expanded threads, both frequency
/// distributions, the aggregate sentiment, and the snapshot path if one
/// was written.
pub struct PulseReport {
    pub threads: Vec<Thread>,
    pub freq: FreqReport,
    pub sentiment: Sentiment,
    pub snapshot: Option<PathBuf>,
}

impl Default for RedditPulse {
    fn default() -> Self {
        Self::new()
    }
}

impl RedditPulse {
    pub fn new() -> Self {
        Self { opts: PulseOptions::default() }
    }

    // -------- Builder methods --------
    pub fn credentials(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self { self.opts = self.opts.with_credentials(id, secret); self }
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self { self.opts = self.opts.with_user_agent(ua); self }
    pub fn subreddit(mut self, name: impl AsRef<str>) -> Self { self.opts = self.opts.with_community(name); self }
    pub fn keywords<I, S>(mut self, kws: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> { self.opts = self.opts.with_keywords(kws); self }
    pub fn top_n(mut self, n: usize) -> Self { self.opts = self.opts.with_top_n(n); self }
    pub fn more_chunk(mut self, n: usize) -> Self { self.opts = self.opts.with_more_chunk(n); self }
    pub fn max_more_requests(mut self, n: usize) -> Self { self.opts = self.opts.with_max_more_requests(n); self }
    pub fn retry(mut self, attempts: usize, delay_ms: u64) -> Self { self.opts = self.opts.with_retry(attempts, delay_ms); self }
    pub fn request_pause(mut self, ms: u64) -> Self { self.opts = self.opts.with_request_pause(ms); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn snapshot_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_snapshot_dir(dir); self }
    pub fn local_offset(mut self, offset: UtcOffset) -> Self { self.opts = self.opts.with_local_offset(offset); self }

    // -------- Operations --------

    /// Scrape: fetch today's threads, apply the keyword filter, then expand
    /// every surviving thread's comment tree.
    pub fn collect(&self) -> Result<Vec<Thread>> {
        init_tracing_once();

        let session = Session::connect(&self.opts).context("authenticating")?;
        let threads = fetch_today_threads(&session, &self.opts)?;
        let mut threads = filter_threads(threads, self.opts.keywords.as_deref());

        let pb = self
            .opts
            .progress
            .then(|| make_count_progress(threads.len() as u64, "Expanding comments"));
        for thread in &mut threads {
            thread.comments = fetch_comments(&session, &self.opts, &thread.id)
                .with_context(|| format!("expanding comments of thread {}", thread.id))?;
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
        if let Some(pb) = &pb {
            pb.finish_with_message("comments expanded");
        }

        tracing::info!("done fetching threads");
        Ok(threads)
    }

    /// Scrape, optionally write the snapshot file, then run both analysis
    /// branches over the same thread set.
    pub fn run(&self) -> Result<PulseReport> {
        let threads = self.collect()?;

        let snapshot = match (&self.opts.snapshot_dir, &self.opts.community) {
            (Some(dir), Some(community)) => Some(write_snapshot(
                &threads,
                dir,
                community,
                today_local(self.opts.local_offset),
            )?),
            _ => None,
        };

        tracing::info!("analyzing frequency distribution");
        let stopwords = Stopwords::english();
        let tokens = words_for(&threads, &stopwords);
        let freq = frequencies(&tokens);

        let engine = SentimentEngine::new();
        let sentiment = engine.classify_threads(&threads)?;

        Ok(PulseReport { threads, freq, sentiment, snapshot })
    }
}

mod auth;
mod comments;
mod config;
mod date;
mod export;
mod fetch;
mod filters;
mod freq;
mod models;
mod pipeline;
mod progress;
mod sentiment;
mod text;
mod util;

pub use crate::config::PulseOptions;
pub use crate::models::{Comment, Listing, Thing, Thread};
pub use crate::pipeline::{PulseReport, RedditPulse};

// Scraper building blocks, exposed for direct use and for the test suite.
pub use crate::auth::Session;
pub use crate::comments::{chunk_ids, fetch_comments, ingest_resolved, partition_children};
pub use crate::fetch::{fetch_today_threads, split_today};
pub use crate::filters::{filter_threads, matches_keywords};

// Analysis building blocks.
pub use crate::freq::{frequencies, top_table, FreqReport};
pub use crate::sentiment::{label_for, Sentiment, SentimentEngine, SentimentLabel};
pub use crate::text::{thread_texts, tokenize, words_for, Stopwords};

// Calendar and snapshot helpers.
pub use crate::date::{detect_local_offset, iso_day, local_date_from_epoch, today_local};
pub use crate::export::{snapshot_value, write_snapshot};

// Expose tracing init so binaries can opt in before building a pipeline.
pub use crate::util::init_tracing_once;

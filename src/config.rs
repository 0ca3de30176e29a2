use std::path::{Path, PathBuf};
use time::UtcOffset;

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct PulseOptions {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,

    pub token_url: String,             // client-credentials token endpoint
    pub api_base: String,              // authenticated API host

    pub community: Option<String>,     // normalized, no "r/" prefix
    pub keywords: Option<Vec<String>>, // literal substrings; None/empty = no filtering
    pub top_n: usize,                  // rows per frequency table

    pub more_chunk: usize,             // IDs per morechildren request (API caps at 100)
    pub max_more_requests: usize,      // worklist safety cap per thread

    pub retry_attempts: usize,         // HTTP attempts per request (1 = no retry)
    pub retry_delay_ms: u64,           // base backoff, scaled linearly per attempt
    pub request_pause_ms: u64,         // fixed pause before each API call (0 = off)

    pub progress: bool,                // show progress bars
    pub snapshot_dir: Option<PathBuf>, // if set, write {date}_{community}.json here

    pub local_offset: UtcOffset,       // offset used to derive "today" from created_utc
}

impl Default for PulseOptions {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            user_agent: "rust:redpulse:0.1.0".to_string(),

            token_url: "https://www.reddit.com/api/v1/access_token".to_string(),
            api_base: "https://oauth.reddit.com".to_string(),

            community: None,
            keywords: None,
            top_n: 10,

            more_chunk: 100,
            max_more_requests: 1000,

            retry_attempts: 3,
            retry_delay_ms: 500,
            request_pause_ms: 0,

            progress: true,
            snapshot_dir: None,

            local_offset: crate::date::detect_local_offset(),
        }
    }
}

impl PulseOptions {
    pub fn with_credentials(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.client_id = id.into();
        self.client_secret = secret.into();
        self
    }
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
    pub fn with_community(mut self, name: impl AsRef<str>) -> Self {
        let mut s = name.as_ref().trim().to_string();
        if let Some(rest) = s.strip_prefix("r/") {
            s = rest.to_string();
        }
        self.community = Some(s);
        self
    }
    pub fn with_keywords<I, S>(mut self, kws: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let v: Vec<String> = kws.into_iter().map(Into::into).collect();
        self.keywords = if v.is_empty() { None } else { Some(v) };
        self
    }
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n.max(1);
        self
    }
    pub fn with_more_chunk(mut self, n: usize) -> Self {
        // The upstream endpoint rejects batches over 100 IDs.
        self.more_chunk = n.clamp(1, 100);
        self
    }
    pub fn with_max_more_requests(mut self, n: usize) -> Self {
        self.max_more_requests = n.max(1);
        self
    }
    pub fn with_retry(mut self, attempts: usize, delay_ms: u64) -> Self {
        self.retry_attempts = attempts.max(1);
        self.retry_delay_ms = delay_ms;
        self
    }
    pub fn with_request_pause(mut self, ms: u64) -> Self {
        self.request_pause_ms = ms;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_snapshot_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.snapshot_dir = Some(dir.as_ref().to_path_buf());
        self
    }
    pub fn with_local_offset(mut self, offset: UtcOffset) -> Self {
        self.local_offset = offset;
        self
    }
}

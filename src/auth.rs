//! Authenticated session: OAuth2 client-credentials token acquisition and
//! blocking GETs with the fixed identifying headers. Requests retry with a
//! linearly scaled backoff on transient failures; auth and other client
//! errors abort the run.

use crate::config::PulseOptions;
use anyhow::{anyhow, bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::thread::sleep;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Read-only after construction; cheap to pass by reference everywhere.
pub struct Session {
    client: Client,
    token: String,
    attempts: usize,
    delay_ms: u64,
    pause_ms: u64,
}

/// Worth retrying: rate limiting and server-side failures.
fn is_retriable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Worth retrying: connection-level hiccups, not protocol errors.
fn is_retriable_transport(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect()
}

impl Session {
    /// Obtain a bearer token via the client-credentials grant and build the
    /// session all later requests go through.
    pub fn connect(opts: &PulseOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(opts.user_agent.clone())
            .default_headers(headers)
            .build()
            .context("building HTTP client")?;

        let resp = client
            .post(&opts.token_url)
            .basic_auth(&opts.client_id, Some(&opts.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .with_context(|| format!("POST {}", opts.token_url))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("token request failed with status {status}");
        }
        let token: TokenResponse = resp.json().context("malformed token response")?;
        if let Some(secs) = token.expires_in {
            tracing::debug!("access token valid for {secs}s");
        }

        Ok(Self {
            client,
            token: token.access_token,
            attempts: opts.retry_attempts,
            delay_ms: opts.retry_delay_ms,
            pause_ms: opts.request_pause_ms,
        })
    }

    /// GET `url` with the bearer token and parse the body as JSON.
    /// Retries transient failures up to the configured attempt count.
    pub fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        if self.pause_ms > 0 {
            sleep(Duration::from_millis(self.pause_ms));
        }

        let mut last_err: Option<anyhow::Error> = None;
        for i in 0..self.attempts.max(1) {
            if i > 0 {
                sleep(Duration::from_millis(self.delay_ms.saturating_mul(i as u64)));
            }
            let resp = self
                .client
                .get(url)
                .query(query)
                .bearer_auth(&self.token)
                .send();
            match resp {
                Ok(r) => {
                    let status = r.status();
                    if status.is_success() {
                        return r.json::<Value>().with_context(|| format!("decoding GET {url}"));
                    }
                    if is_retriable_status(status) {
                        tracing::warn!("GET {url} returned {status}, retrying");
                        last_err = Some(anyhow!("GET {url} failed with status {status}"));
                        continue;
                    }
                    bail!("GET {url} failed with status {status}");
                }
                Err(e) if is_retriable_transport(&e) => {
                    tracing::warn!("GET {url} transport error ({e}), retrying");
                    last_err = Some(anyhow::Error::new(e));
                    continue;
                }
                Err(e) => return Err(e).with_context(|| format!("GET {url}")),
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow!("GET {url} failed")))
    }
}

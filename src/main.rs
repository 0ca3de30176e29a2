use anyhow::{Context, Result};
use redpulse::{top_table, RedditPulse};

const SUBREDDIT: &str = "CryptoCurrency";
const KEYWORDS: &[&str] = &["BTC", "ETH", "TRX"];
const MOST_FREQ_COUNT: usize = 10;

fn main() -> Result<()> {
    redpulse::init_tracing_once();

    let client_id =
        std::env::var("REDPULSE_CLIENT_ID").context("REDPULSE_CLIENT_ID is not set")?;
    let client_secret =
        std::env::var("REDPULSE_CLIENT_SECRET").context("REDPULSE_CLIENT_SECRET is not set")?;

    let mut pulse = RedditPulse::new()
        .credentials(client_id, client_secret)
        .subreddit(SUBREDDIT)
        .keywords(KEYWORDS.iter().copied())
        .top_n(MOST_FREQ_COUNT);

    // Optional snapshot of everything scraped, as {date}_{subreddit}.json.
    if let Ok(dir) = std::env::var("REDPULSE_SNAPSHOT_DIR") {
        if !dir.trim().is_empty() {
            pulse = pulse.snapshot_dir(dir);
        }
    }

    let report = pulse.run()?;

    println!("{MOST_FREQ_COUNT} most frequent terms:");
    print!("{}", top_table(&report.freq.top_unigrams(MOST_FREQ_COUNT)));
    println!("{MOST_FREQ_COUNT} most frequent bigrams:");
    print!("{}", top_table(&report.freq.top_bigrams(MOST_FREQ_COUNT)));
    println!("{MOST_FREQ_COUNT} most frequent trigrams:");
    print!("{}", top_table(&report.freq.top_trigrams(MOST_FREQ_COUNT)));

    println!(
        "Sentiment from all comments for today: {} (score: {})",
        report.sentiment.label, report.sentiment.compound
    );
    Ok(())
}

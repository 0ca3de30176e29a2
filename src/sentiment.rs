//! Aggregate sentiment classification: VADER compound score per text,
//! arithmetic mean over every text, then the standard VADER thresholds.

use crate::models::Thread;
use crate::text::thread_texts;
use anyhow::{bail, Result};
use std::fmt;
use vader_sentiment::SentimentIntensityAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// Mean compound score and its bucketed label.
#[derive(Debug, Clone, Copy)]
pub struct Sentiment {
    pub compound: f64,
    pub label: SentimentLabel,
}

/// Bucket a compound score with the standard VADER cutoffs:
/// `>= 0.05` positive, strictly between `-0.05` and `0.05` neutral,
/// `<= -0.05` negative. The boundary semantics are load-bearing.
pub fn label_for(compound: f64) -> SentimentLabel {
    if compound >= 0.05 {
        SentimentLabel::Positive
    } else if compound > -0.05 {
        SentimentLabel::Neutral
    } else {
        SentimentLabel::Negative
    }
}

/// Lexicon scorer, built once per run and read-only afterwards.
pub struct SentimentEngine {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentEngine {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Compound polarity of one text in `[-1, 1]`.
    pub fn compound(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }

    /// Average the given per-text compound scores and bucket the mean.
    /// Empty input is an error: the mean would be undefined.
    pub fn aggregate(&self, scores: &[f64]) -> Result<Sentiment> {
        if scores.is_empty() {
            bail!("cannot classify sentiment of zero texts");
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Ok(Sentiment {
            compound: mean,
            label: label_for(mean),
        })
    }

    /// Predominant sentiment across all threads: every post body and every
    /// comment body scored individually (no deduplication), then averaged.
    pub fn classify_threads(&self, threads: &[Thread]) -> Result<Sentiment> {
        tracing::info!("analyzing threads sentiment");
        let scores: Vec<f64> = threads
            .iter()
            .flat_map(thread_texts)
            .map(|t| self.compound(t))
            .collect();
        self.aggregate(&scores)
    }
}

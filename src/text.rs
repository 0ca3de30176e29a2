//! Text preprocessing: thread flattening, word tokenization, stopword and
//! punctuation filtering. Tokens are case-folded here, once, so every later
//! stage sees a normalized stream.

use crate::models::Thread;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Fixed English stopword list, built once per run.
pub struct Stopwords {
    set: HashSet<String>,
}

impl Stopwords {
    pub fn english() -> Self {
        let set = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { set }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(&word.to_lowercase())
    }
}

/// Flatten one thread into its raw texts: the original post body first,
/// then every comment body in sequence order.
pub fn thread_texts(thread: &Thread) -> Vec<&str> {
    let mut texts = Vec::with_capacity(1 + thread.comments.len());
    texts.push(thread.selftext.as_str());
    texts.extend(thread.comments.iter().map(|c| c.body.as_str()));
    texts
}

/// Tokenize one text into lowercased word tokens.
///
/// Words come from UAX-29 segmentation; only fully alphanumeric tokens
/// survive (no punctuation-only or mixed tokens), and stopwords are dropped
/// case-insensitively. No language detection: non-English text goes through
/// the same rules.
pub fn tokenize(text: &str, stopwords: &Stopwords) -> Vec<String> {
    text.unicode_words()
        .filter(|w| w.chars().all(char::is_alphanumeric))
        .filter(|w| !stopwords.contains(w))
        .map(str::to_lowercase)
        .collect()
}

/// Flat token stream across all threads' texts, in thread/comment order.
pub fn words_for(threads: &[Thread], stopwords: &Stopwords) -> Vec<String> {
    threads
        .iter()
        .flat_map(thread_texts)
        .flat_map(|t| tokenize(t, stopwords))
        .collect()
}

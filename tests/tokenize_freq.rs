#[path = "common/mod.rs"]
mod common;

use common::*;
use redpulse::{frequencies, thread_texts, tokenize, top_table, words_for, Stopwords};

fn toks(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

/// Stopwords go regardless of case, punctuation-only tokens go, survivors
/// come out lowercased.
#[test]
fn tokenize_filters_stopwords_and_punctuation() {
    let sw = Stopwords::english();
    let words = tokenize("The market, it seems, LOVES volatility !!!", &sw);
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"it".to_string()));
    assert!(words.contains(&"market".to_string()));
    assert!(words.contains(&"loves".to_string()));
    assert!(words.contains(&"volatility".to_string()));
    assert!(words.iter().all(|w| w.chars().all(char::is_alphanumeric)));
    assert!(words.iter().all(|w| *w == w.to_lowercase()));
}

/// Re-tokenizing the filtered output changes nothing: no stopwords or
/// punctuation remain to remove.
#[test]
fn tokenize_is_idempotent() {
    let sw = Stopwords::english();
    let once = tokenize("Buy the rumor; sell the news. Prices don't lie!", &sw);
    let again = tokenize(&once.join(" "), &sw);
    assert_eq!(once, again);
}

/// Token stream covers the post body and every comment body, in order.
#[test]
fn words_for_flattens_posts_and_comments() {
    let sw = Stopwords::english();
    let mut thread = make_thread("a", "ignored title", "bitcoin rally", 0);
    thread.comments = vec![
        make_comment("c1", "massive rally"),
        make_comment("c2", "rally fading"),
    ];

    assert_eq!(
        thread_texts(&thread),
        ["bitcoin rally", "massive rally", "rally fading"]
    );
    let words = words_for(&[thread], &sw);
    assert_eq!(
        words,
        toks(&["bitcoin", "rally", "massive", "rally", "rally", "fading"])
    );
}

/// Count totals: unigrams sum to the stream length, bigrams to len-1,
/// trigrams to len-2.
#[test]
fn frequency_totals_match_stream_length() {
    let stream = toks(&["a", "b", "a", "c", "b", "a"]);
    let report = frequencies(&stream);

    assert_eq!(report.unigrams.values().sum::<u64>(), 6);
    assert_eq!(report.bigrams.values().sum::<u64>(), 5);
    assert_eq!(report.trigrams.values().sum::<u64>(), 4);
    assert_eq!(report.unigrams["a"], 3);
}

#[test]
fn frequency_of_tiny_streams_has_no_ngrams() {
    let report = frequencies(&toks(&["solo"]));
    assert_eq!(report.unigrams.values().sum::<u64>(), 1);
    assert!(report.bigrams.is_empty());
    assert!(report.trigrams.is_empty());

    let empty = frequencies(&[]);
    assert!(empty.unigrams.is_empty());
}

/// Counting folds case: `BTC` and `btc` are one term.
#[test]
fn counting_case_folds_tokens() {
    let report = frequencies(&toks(&["BTC", "btc", "ETH"]));
    assert_eq!(report.unigrams["btc"], 2);
    assert_eq!(report.unigrams["eth"], 1);
    assert_eq!(report.unigrams.len(), 2);
}

/// Equal counts tie-break lexicographically, so top-N output is stable
/// across runs.
#[test]
fn top_n_breaks_ties_deterministically() {
    let report = frequencies(&toks(&["delta", "alpha", "charlie", "bravo"]));
    let top = report.top_unigrams(3);
    let names: Vec<&str> = top.iter().map(|(g, _)| g.as_str()).collect();
    assert_eq!(names, ["alpha", "bravo", "charlie"]);
    assert!(top.iter().all(|(_, n)| *n == 1));
}

#[test]
fn top_bigrams_render_as_space_joined_pairs() {
    let report = frequencies(&toks(&["to", "the", "moon", "to", "the"]));
    let top = report.top_bigrams(2);
    assert_eq!(top[0], ("to the".to_string(), 2));

    // "moon to" (7 chars) sets the column width
    let table = top_table(&top);
    let mut lines = table.lines();
    assert_eq!(lines.next().unwrap(), "to the   2");
    assert_eq!(lines.next().unwrap(), "moon to  1");
}

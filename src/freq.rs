//! N-gram frequency distributions over the token stream, with deterministic
//! top-N selection and an aligned table rendering for console output.

use ahash::AHashMap;

/// Unigram, bigram and trigram counts for one token stream.
///
/// Tokens are case-folded on entry (idempotent for an already-folded
/// stream). The n-gram windows slide over the whole stream with no text
/// boundaries, so a bigram can span two unrelated comments; acceptable for
/// bag-of-words reporting.
#[derive(Debug, Default)]
pub struct FreqReport {
    pub unigrams: AHashMap<String, u64>,
    pub bigrams: AHashMap<(String, String), u64>,
    pub trigrams: AHashMap<(String, String, String), u64>,
}

/// Count n-grams over `tokens`.
///
/// Invariants: unigram counts sum to the stream length; bigram counts sum
/// to `len - 1` and trigram counts to `len - 2` (0 for shorter streams).
pub fn frequencies(tokens: &[String]) -> FreqReport {
    let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let mut report = FreqReport::default();
    for w in &lower {
        *report.unigrams.entry(w.clone()).or_insert(0) += 1;
    }
    for pair in lower.windows(2) {
        *report
            .bigrams
            .entry((pair[0].clone(), pair[1].clone()))
            .or_insert(0) += 1;
    }
    for triple in lower.windows(3) {
        *report
            .trigrams
            .entry((triple[0].clone(), triple[1].clone(), triple[2].clone()))
            .or_insert(0) += 1;
    }
    report
}

/// Sort count-desc, then lexicographically on the rendered n-gram, so ties
/// come out in a stable documented order; then keep the first `n`.
fn top_n_of(mut entries: Vec<(String, u64)>, n: usize) -> Vec<(String, u64)> {
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(n);
    entries
}

impl FreqReport {
    pub fn top_unigrams(&self, n: usize) -> Vec<(String, u64)> {
        top_n_of(
            self.unigrams.iter().map(|(k, v)| (k.clone(), *v)).collect(),
            n,
        )
    }

    pub fn top_bigrams(&self, n: usize) -> Vec<(String, u64)> {
        top_n_of(
            self.bigrams
                .iter()
                .map(|((a, b), v)| (format!("{a} {b}"), *v))
                .collect(),
            n,
        )
    }

    pub fn top_trigrams(&self, n: usize) -> Vec<(String, u64)> {
        top_n_of(
            self.trigrams
                .iter()
                .map(|((a, b, c), v)| (format!("{a} {b} {c}"), *v))
                .collect(),
            n,
        )
    }
}

/// Render top-N entries as two aligned columns for console output.
pub fn top_table(entries: &[(String, u64)]) -> String {
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (gram, count) in entries {
        out.push_str(&format!("{gram:<width$}  {count}\n"));
    }
    out
}

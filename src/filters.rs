//! Keyword filtering over fetched threads.

use crate::models::Thread;

/// True iff any keyword occurs verbatim in the title or the post body.
/// Matching is case-sensitive by contract; an empty keyword list matches
/// nothing here (the caller treats it as "no filtering").
pub fn matches_keywords(thread: &Thread, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|kw| thread.title.contains(kw.as_str()) || thread.selftext.contains(kw.as_str()))
}

/// Keep the threads that match at least one keyword, preserving order.
/// `None` or an empty list passes every thread through unchanged.
pub fn filter_threads(threads: Vec<Thread>, keywords: Option<&[String]>) -> Vec<Thread> {
    match keywords {
        Some(kws) if !kws.is_empty() => {
            let before = threads.len();
            let kept: Vec<Thread> = threads
                .into_iter()
                .filter(|t| matches_keywords(t, kws))
                .collect();
            tracing::info!("keyword filter kept {}/{} threads", kept.len(), before);
            kept
        }
        _ => threads,
    }
}

//! Progress reporting utilities: count bars and spinners over `indicatif`.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Count-style progress bar (items processed out of total), with a label.
pub fn make_count_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
         it/s: {per_sec}  elapsed: {elapsed_precise}  eta: {eta_precise}",
    )
    .unwrap()
    .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);
    if !label.is_empty() {
        pb.set_message(label.to_string());
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Open-ended spinner for work with no known total (e.g. cursor paging).
pub fn make_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}  elapsed: {elapsed_precise}",
    )
    .unwrap();
    pb.set_style(style);
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

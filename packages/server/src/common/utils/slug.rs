/// Pure utility functions for building post slugs
///
/// `slugify` is deterministic and has no side effects. `generate_slug` adds a
/// time-based suffix read from a process-wide clock that never repeats.
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::atomic::{AtomicI64, Ordering};

lazy_static! {
    static ref NON_ALPHANUMERIC_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Last suffix handed out, so two slugs built in the same millisecond differ.
static LAST_SUFFIX: AtomicI64 = AtomicI64::new(0);

/// Normalize a title into the base part of a slug.
///
/// Lower-cases the title, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen and trims hyphens from both ends. The
/// result is empty when the title has no ASCII alphanumerics.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Build a unique slug for a new post: `<slugify(title)>-<millis>`.
///
/// When the title normalizes to nothing, the suffix alone is the slug.
pub fn generate_slug(title: &str) -> String {
    let base = slugify(title);
    let suffix = next_suffix();
    if base.is_empty() {
        suffix.to_string()
    } else {
        format!("{}-{}", base, suffix)
    }
}

fn next_suffix() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_SUFFIX.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_SUFFIX.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(current) => last = current,
        }
    }
}

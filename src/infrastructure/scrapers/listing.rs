use crate::domain::Candidate;
use once_cell::sync::Lazy;
use regex::Regex;

static GAME_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<a class="link svelte-1tn6kqn"[^>]*href="([^"]+)"[^>]*>(.*?)</a>"#).unwrap()
});

/// Finds every game-entry anchor in the listing snapshot, in document
/// order. Malformed markup yields fewer candidates, never an error.
pub fn scan_candidates(html: &str) -> Vec<Candidate> {
    GAME_ANCHOR
        .captures_iter(html)
        .map(|caps| Candidate {
            href: caps[1].to_string(),
            fragment: caps[2].to_string(),
        })
        .collect()
}

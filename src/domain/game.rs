use serde::{Deserialize, Serialize};

/// Placeholder written to the ledger when an entry has no stored image.
pub const NO_IMAGE: &str = "No_Image";

const LISTING_ORIGIN: &str = "https://stake.us";

/// One extracted game, keyed by its absolute URL. Rows are immutable
/// once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Provider")]
    pub provider: String,
    #[serde(rename = "Image_Path")]
    pub image_path: String,
}

/// A game anchor found in the source document: its hyperlink reference
/// plus the anchor's inner markup. Never persisted.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub href: String,
    pub fragment: String,
}

/// Resolves a listing href against the site origin. Already-absolute
/// hrefs pass through untouched.
pub fn absolute_url(href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", LISTING_ORIGIN, href)
    } else {
        href.to_string()
    }
}

/// Last path segment of a game URL, used as dedup-friendly short name
/// and image filename stem.
pub fn slug_of(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Builds a display title from a URL slug: separators become spaces,
/// each word is capitalized.
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_href_becomes_absolute() {
        assert_eq!(
            absolute_url("/casino/games/lucky-clover"),
            "https://stake.us/casino/games/lucky-clover"
        );
    }

    #[test]
    fn absolute_href_is_untouched() {
        assert_eq!(
            absolute_url("https://stake.us/casino/games/x"),
            "https://stake.us/casino/games/x"
        );
    }

    #[test]
    fn slug_is_last_path_segment() {
        assert_eq!(slug_of("/casino/slots/lucky-clover"), "lucky-clover");
        assert_eq!(slug_of("plain"), "plain");
    }

    #[test]
    fn title_from_slug_capitalizes_words() {
        assert_eq!(title_from_slug("lucky-clover"), "Lucky Clover");
        assert_eq!(title_from_slug("BIG_BASS_bonanza"), "Big Bass Bonanza");
        assert_eq!(title_from_slug("solo"), "Solo");
    }
}

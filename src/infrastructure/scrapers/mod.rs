use crate::config::Strategy;
use crate::domain::Candidate;
use crate::error::{Result, ScrapeError};
use scraper::{Html, Selector};

pub(crate) mod listing;
pub(crate) mod markup;
pub(crate) mod slug;

/// Provider label recorded when the entry markup names none.
pub const DEFAULT_PROVIDER: &str = "Unknown";

/// Best-effort field extraction for one game entry. Missing fields
/// degrade to fallback values, never to an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub provider: String,
    pub image_url: Option<String>,
}

pub trait FieldExtractor: Send + Sync {
    fn extract(&self, candidate: &Candidate) -> ExtractedFields;
}

pub fn get_extractor(strategy: Strategy) -> Result<Box<dyn FieldExtractor>> {
    match strategy {
        Strategy::Markup => Ok(Box::new(markup::MarkupExtractor::new()?)),
        Strategy::Slug => Ok(Box::new(slug::SlugExtractor::new()?)),
    }
}

pub struct Selectors {
    pub title: Selector,
    pub provider: Selector,
    pub image: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: parse_selector("strong.gameName")?,
            provider: parse_selector("div.game-info-wrap.game-group strong")?,
            image: parse_selector("img[src][alt]")?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector(e.to_string()))
}

/// Image source scoped to the extracted title: only an `img` whose
/// `alt` equals the title counts as this entry's artwork.
pub(crate) fn image_for_title(
    fragment: &Html,
    selector: &Selector,
    title: &str,
) -> Option<String> {
    fragment
        .select(selector)
        .find(|el| el.value().attr("alt") == Some(title))
        .and_then(|el| el.value().attr("src"))
        .map(str::to_string)
}

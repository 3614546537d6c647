use super::{image_for_title, ExtractedFields, FieldExtractor, Selectors, DEFAULT_PROVIDER};
use crate::domain::{slug_of, title_from_slug, Candidate};
use crate::error::Result;
use scraper::Html;

/// Reads title and provider from the entry markup, falling back to
/// slug-derived values where the markup has none.
pub struct MarkupExtractor {
    selectors: Selectors,
}

impl MarkupExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: Selectors::new()?,
        })
    }
}

impl FieldExtractor for MarkupExtractor {
    fn extract(&self, candidate: &Candidate) -> ExtractedFields {
        let fragment = Html::parse_fragment(&candidate.fragment);

        let title = fragment
            .select(&self.selectors.title)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| title_from_slug(slug_of(&candidate.href)));

        let provider = fragment
            .select(&self.selectors.provider)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|provider| !provider.is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

        let image_url = image_for_title(&fragment, &self.selectors.image, &title);

        ExtractedFields {
            title,
            provider,
            image_url,
        }
    }
}

use super::{image_for_title, ExtractedFields, FieldExtractor, Selectors, DEFAULT_PROVIDER};
use crate::domain::{slug_of, title_from_slug, Candidate};
use crate::error::Result;
use scraper::Html;

/// Derives title and provider purely from the URL slug, ignoring the
/// entry markup. Image lookup still runs, scoped to the derived title.
pub struct SlugExtractor {
    selectors: Selectors,
}

impl SlugExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: Selectors::new()?,
        })
    }
}

impl FieldExtractor for SlugExtractor {
    fn extract(&self, candidate: &Candidate) -> ExtractedFields {
        let title = title_from_slug(slug_of(&candidate.href));

        let fragment = Html::parse_fragment(&candidate.fragment);
        let image_url = image_for_title(&fragment, &self.selectors.image, &title);

        ExtractedFields {
            title,
            provider: DEFAULT_PROVIDER.to_string(),
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_fields_from_slug_only() {
        let fields = SlugExtractor::new().unwrap().extract(&Candidate {
            href: "/casino/games/big-bass-bonanza".to_string(),
            fragment: r#"<strong class="gameName svelte-1gmhd6w">Some Other Name</strong>
                         <div class="game-info-wrap game-group"><strong>Pragmatic</strong></div>"#
                .to_string(),
        });
        assert_eq!(fields.title, "Big Bass Bonanza");
        assert_eq!(fields.provider, DEFAULT_PROVIDER);
        assert_eq!(fields.image_url, None);
    }

    #[test]
    fn picks_up_image_when_alt_matches_derived_title() {
        let fields = SlugExtractor::new().unwrap().extract(&Candidate {
            href: "/casino/games/dice".to_string(),
            fragment: r#"<img src="https://cdn.example/dice.avif" alt="Dice">"#.to_string(),
        });
        assert_eq!(
            fields.image_url.as_deref(),
            Some("https://cdn.example/dice.avif")
        );
    }
}

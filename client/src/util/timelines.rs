//! Built-in animation records, compiled into the bundle.
//!
//! Each page section names the record it plays; `AnimatedSection` parses it
//! on mount and samples it with `motion::timeline`.

#[cfg(test)]
#[path = "timelines_test.rs"]
mod timelines_test;

use motion::timeline::{Timeline, TimelineError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimelineId {
    /// Rooman hero entrance on page load.
    HeroLoad,
    /// Rooman hero exit while pinned.
    HeroScroll,
    /// Pinned feature sections (Integrate, Empower).
    FeatureScroll,
    HeadingScrub,
    CardsScrub,
    ContactScroll,
    /// About section: image, text and stats.
    AboutScroll,
    /// Heading plus a grid of tiles (industries, careers).
    TilesScrub,
    PageHero,
    ValueCards,
    SectionReveal,
    ListingHeader,
    ListingFeatured,
    ListingGrid,
    /// Certification cards, revealed in a staggered wave.
    CertGrid,
}

impl TimelineId {
    pub const ALL: [Self; 15] = [
        Self::HeroLoad,
        Self::HeroScroll,
        Self::FeatureScroll,
        Self::HeadingScrub,
        Self::CardsScrub,
        Self::ContactScroll,
        Self::AboutScroll,
        Self::TilesScrub,
        Self::PageHero,
        Self::ValueCards,
        Self::SectionReveal,
        Self::ListingHeader,
        Self::ListingFeatured,
        Self::ListingGrid,
        Self::CertGrid,
    ];

    #[must_use]
    pub fn json(self) -> &'static str {
        match self {
            Self::HeroLoad => include_str!("../../timelines/hero_load.json"),
            Self::HeroScroll => include_str!("../../timelines/hero_scroll.json"),
            Self::FeatureScroll => include_str!("../../timelines/feature_scroll.json"),
            Self::HeadingScrub => include_str!("../../timelines/heading_scrub.json"),
            Self::CardsScrub => include_str!("../../timelines/cards_scrub.json"),
            Self::ContactScroll => include_str!("../../timelines/contact_scroll.json"),
            Self::AboutScroll => include_str!("../../timelines/about_scroll.json"),
            Self::TilesScrub => include_str!("../../timelines/tiles_scrub.json"),
            Self::PageHero => include_str!("../../timelines/page_hero.json"),
            Self::ValueCards => include_str!("../../timelines/value_cards.json"),
            Self::SectionReveal => include_str!("../../timelines/section_reveal.json"),
            Self::ListingHeader => include_str!("../../timelines/listing_header.json"),
            Self::ListingFeatured => include_str!("../../timelines/listing_featured.json"),
            Self::ListingGrid => include_str!("../../timelines/listing_grid.json"),
            Self::CertGrid => include_str!("../../timelines/cert_grid.json"),
        }
    }

    /// # Errors
    ///
    /// Returns [`TimelineError`] if the bundled record is malformed.
    pub fn load(self) -> Result<Timeline, TimelineError> {
        Timeline::from_json(self.json())
    }
}

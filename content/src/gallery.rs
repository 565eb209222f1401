use std::{collections::BTreeMap, fmt};

use tracing::{Level, debug, instrument, warn};

// structs and types

pub type PhotoId = u32;

// the closed set of gallery categories
//
// labels are what the filter bar and the lightbox badge show
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    ArtAndCraft,
    Sports,
    Learning,
    Events,
    Nature,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ArtAndCraft,
        Category::Sports,
        Category::Learning,
        Category::Events,
        Category::Nature,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::ArtAndCraft => "Art & Craft",
            Category::Sports => "Sports",
            Category::Learning => "Learning",
            Category::Events => "Events",
            Category::Nature => "Nature",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// grid placement hint, purely cosmetic
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Span {
    #[default]
    Single,
    Wide,
    Tall,
    Large,
}

// the core photo record
//
// src is relative to the configured gallery asset base (see config.rs)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub src: &'static str,
    pub category: Category,
    pub label: &'static str,
    pub span: Span,
}

const fn photo(
    id: PhotoId,
    src: &'static str,
    category: Category,
    label: &'static str,
    span: Span,
) -> Photo {
    Photo {
        id,
        src,
        category,
        label,
        span,
    }
}

// the shipped catalog
//
// order matters: it is both the grid order and the lightbox navigation order
pub const PHOTOS: &[Photo] = &[
    photo(1, "gallery-paint.webp", Category::ArtAndCraft, "Finger Painting Day", Span::Large),
    photo(2, "gallery-sports.jpg", Category::Sports, "Sports Morning", Span::Single),
    photo(3, "gallery-learn1.jpg", Category::Learning, "Story Time", Span::Single),
    photo(5, "gallery-garden.jpeg", Category::Nature, "Garden Explorers", Span::Single),
    photo(6, "gallery-clay.webp", Category::ArtAndCraft, "Clay Modelling", Span::Single),
    photo(7, "gallery-yoga.jpg", Category::Sports, "Yoga & Movement", Span::Wide),
    photo(8, "learn2.jpg", Category::Learning, "Montessori Materials", Span::Single),
    photo(9, "gallery-diwali.jpeg", Category::Events, "Diwali Celebrations", Span::Single),
    photo(12, "learn3.jpg", Category::Learning, "Science Discovery", Span::Wide),
    photo(4, "event1.jpg", Category::Events, "Annual Day 2024", Span::Tall),
    photo(13, "learn3.jpg", Category::Learning, "Science Discovery", Span::Wide),
];

// how Catalog::load reacts to authoring mistakes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationPolicy {
    // refuse to build the catalog
    Strict,
    // log every problem and keep going
    Lenient,
}

impl ValidationPolicy {
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        }
    }
}

// validated, immutable photo catalog
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    photos: Vec<Photo>,
}

impl Catalog {
    #[instrument(level = Level::DEBUG, skip(photos))]
    pub fn load(photos: &[Photo], policy: ValidationPolicy) -> anyhow::Result<Self> {
        let duplicates = duplicate_ids(photos);

        if !duplicates.is_empty() {
            match policy {
                ValidationPolicy::Strict => {
                    return Err(anyhow::Error::msg(format!(
                        "photo catalog has duplicate ids: {duplicates:?}"
                    )));
                }
                ValidationPolicy::Lenient => {
                    for id in duplicates.iter() {
                        warn!(photo_id = *id, "duplicate photo id in catalog");
                    }
                }
            }
        }

        debug!(photos = photos.len(), "loaded photo catalog");
        Ok(Catalog {
            photos: photos.to_vec(),
        })
    }

    pub fn shipped(policy: ValidationPolicy) -> anyhow::Result<Self> {
        Catalog::load(PHOTOS, policy)
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.photos.iter().filter(|p| p.category == category).count()
    }

    // categories that actually occur, in the fixed category order
    pub fn categories_present(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.count_in(*c) > 0)
            .collect()
    }
}

// every id that occurs more than once, ascending
pub fn duplicate_ids(photos: &[Photo]) -> Vec<PhotoId> {
    let mut counts: BTreeMap<PhotoId, usize> = BTreeMap::new();

    for p in photos.iter() {
        *counts.entry(p.id).or_default() += 1;
    }

    counts
        .into_iter()
        .filter_map(|(id, n)| if n > 1 { Some(id) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_has_unique_ids() {
        assert!(duplicate_ids(PHOTOS).is_empty());
        assert!(Catalog::shipped(ValidationPolicy::Strict).is_ok());
    }

    #[test]
    fn shipped_catalog_category_counts() {
        let catalog = Catalog::shipped(ValidationPolicy::Strict).unwrap();

        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.count_in(Category::ArtAndCraft), 2);
        assert_eq!(catalog.count_in(Category::Sports), 2);
        assert_eq!(catalog.count_in(Category::Learning), 4);
        assert_eq!(catalog.count_in(Category::Events), 2);
        assert_eq!(catalog.count_in(Category::Nature), 1);
        assert_eq!(catalog.categories_present(), Category::ALL.to_vec());
    }

    #[test]
    fn strict_policy_rejects_duplicates() {
        let photos = [
            photo(1, "a.jpg", Category::Sports, "A", Span::Single),
            photo(2, "b.jpg", Category::Nature, "B", Span::Single),
            photo(1, "c.jpg", Category::Events, "C", Span::Single),
        ];

        let err = Catalog::load(&photos, ValidationPolicy::Strict).unwrap_err();
        assert!(err.to_string().contains("[1]"));
    }

    #[test]
    fn lenient_policy_keeps_everything() {
        let photos = [
            photo(7, "a.jpg", Category::Sports, "A", Span::Single),
            photo(7, "b.jpg", Category::Sports, "B", Span::Single),
        ];

        let catalog = Catalog::load(&photos, ValidationPolicy::Lenient).unwrap();
        let labels: Vec<_> = catalog.photos().iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn duplicate_ids_reported_once_each() {
        let photos = [
            photo(3, "a.jpg", Category::Sports, "A", Span::Single),
            photo(3, "b.jpg", Category::Sports, "B", Span::Single),
            photo(3, "c.jpg", Category::Sports, "C", Span::Single),
            photo(1, "d.jpg", Category::Sports, "D", Span::Single),
            photo(1, "e.jpg", Category::Sports, "E", Span::Single),
        ];

        assert_eq!(duplicate_ids(&photos), vec![1, 3]);
    }

    #[test]
    fn labels_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_label(c.label()), Some(c));
        }
        assert_eq!(Category::from_label("art & craft"), None);
        assert_eq!(Category::ArtAndCraft.to_string(), "Art & Craft");
    }

    #[test]
    fn categories_present_skips_empty_ones() {
        let photos = [
            photo(1, "a.jpg", Category::Nature, "A", Span::Single),
            photo(2, "b.jpg", Category::Sports, "B", Span::Single),
        ];
        let catalog = Catalog::load(&photos, ValidationPolicy::Strict).unwrap();

        assert_eq!(
            catalog.categories_present(),
            vec![Category::Sports, Category::Nature]
        );
    }
}

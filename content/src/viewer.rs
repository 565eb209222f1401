use std::fmt;

use tracing::debug;

use crate::gallery::{Catalog, Category, Photo};

// the active gallery filter
//
// labels outside the closed category set are kept verbatim so the filter bar
// can still show them, but they match nothing
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unknown(String),
}

pub const ALL_LABEL: &str = "All";

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(c) => c.label(),
            CategoryFilter::Unknown(s) => s.as_str(),
        }
    }

    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => photo.category == *c,
            CategoryFilter::Unknown(_) => false,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> CategoryFilter {
        if label == ALL_LABEL {
            return CategoryFilter::All;
        }

        match Category::from_label(label) {
            Some(c) => CategoryFilter::Only(c),
            None => CategoryFilter::Unknown(label.to_owned()),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> CategoryFilter {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// lightbox state
//
// the index always points into the *filtered* list, never the catalog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

impl Lightbox {
    pub fn index(self) -> Option<usize> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open(i) => Some(i),
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}

// GalleryViewer
//
// owns the catalog, the active filter and the lightbox.  the filtered list is
// never stored: every accessor recomputes it from (catalog, filter), so there is
// exactly one source of truth.
//
// when the filter changes while the lightbox is open, the open photo is looked
// up again by its catalog position in the new list.  if it is still there the
// lightbox follows it to its new position, otherwise the lightbox closes.
// positions are unique even when a lenient catalog carries duplicate ids.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryViewer {
    catalog: Catalog,
    filter: CategoryFilter,
    lightbox: Lightbox,
}

impl GalleryViewer {
    pub fn new(catalog: Catalog) -> Self {
        GalleryViewer {
            catalog,
            filter: CategoryFilter::All,
            lightbox: Lightbox::Closed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    pub fn is_active(&self, filter: &CategoryFilter) -> bool {
        self.filter == *filter
    }

    // the filter buttons: "All" then every category that has photos
    pub fn filter_options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                self.catalog
                    .categories_present()
                    .into_iter()
                    .map(CategoryFilter::Only),
            )
            .collect()
    }

    pub fn filtered(&self) -> Vec<&Photo> {
        self.catalog
            .photos()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.catalog
            .photos()
            .iter()
            .filter(|p| self.filter.matches(p))
            .count()
    }

    // (shown, total)
    pub fn summary(&self) -> (usize, usize) {
        (self.filtered_len(), self.catalog.len())
    }

    pub fn summary_text(&self) -> String {
        let (shown, total) = self.summary();
        format!("Showing {shown} of {total} memories")
    }

    pub fn current_photo(&self) -> Option<&Photo> {
        let i = self.lightbox.index()?;
        self.filtered().get(i).copied()
    }

    pub fn select_category(&mut self, label: &str) {
        self.set_filter(CategoryFilter::from(label));
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        let shown = self
            .lightbox
            .index()
            .and_then(|i| self.positions().get(i).copied());

        debug!(from = %self.filter, to = %filter, "gallery filter changed");
        self.filter = filter;

        let lightbox = match shown {
            Some(at) => match self.positions().iter().position(|p| *p == at) {
                Some(i) => Lightbox::Open(i),
                None => Lightbox::Closed,
            },
            None => Lightbox::Closed,
        };

        if lightbox != self.lightbox {
            debug!(from = ?self.lightbox, to = ?lightbox, "lightbox re-resolved after filter change");
        }
        self.lightbox = lightbox;
    }

    pub fn open_lightbox(&mut self, index: usize) -> anyhow::Result<()> {
        let len = self.filtered_len();

        if index >= len {
            return Err(anyhow::Error::msg(format!(
                "lightbox index {index} out of range for {len} photos in {}",
                self.filter
            )));
        }

        debug!(index, "lightbox opened");
        self.lightbox = Lightbox::Open(index);
        Ok(())
    }

    pub fn close_lightbox(&mut self) {
        if self.lightbox.is_open() {
            debug!("lightbox closed");
        }
        self.lightbox = Lightbox::Closed;
    }

    pub fn show_previous(&mut self) {
        self.step(|i, n| (i + n - 1) % n);
    }

    pub fn show_next(&mut self) {
        self.step(|i, n| (i + 1) % n);
    }

    // catalog positions of the filtered photos, in display order
    fn positions(&self) -> Vec<usize> {
        self.catalog
            .photos()
            .iter()
            .enumerate()
            .filter(|(_, p)| self.filter.matches(p))
            .map(|(at, _)| at)
            .collect()
    }

    fn step(&mut self, next: impl Fn(usize, usize) -> usize) {
        let n = self.filtered_len();

        if let Lightbox::Open(i) = self.lightbox {
            if n == 0 {
                return;
            }

            let to = next(i % n, n);
            debug!(from = i, to, "lightbox moved");
            self.lightbox = Lightbox::Open(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Span, ValidationPolicy};

    fn viewer() -> GalleryViewer {
        GalleryViewer::new(Catalog::shipped(ValidationPolicy::Strict).unwrap())
    }

    #[test]
    fn starts_closed_on_all() {
        let v = viewer();

        assert_eq!(v.lightbox(), Lightbox::Closed);
        assert_eq!(*v.filter(), CategoryFilter::All);
        assert_eq!(v.filtered_len(), v.catalog().len());
        assert!(v.current_photo().is_none());
    }

    #[test]
    fn filter_parsing() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("Art & Craft"),
            CategoryFilter::Only(Category::ArtAndCraft)
        );
        assert_eq!(
            CategoryFilter::from("Music"),
            CategoryFilter::Unknown(String::from("Music"))
        );
        assert_eq!(CategoryFilter::from("Music").label(), "Music");
    }

    #[test]
    fn unknown_category_yields_empty_list() {
        let mut v = viewer();
        v.select_category("Music");

        assert!(v.filtered().is_empty());
        assert_eq!(v.summary(), (0, 11));
        assert!(v.open_lightbox(0).is_err());
    }

    #[test]
    fn filtered_list_keeps_catalog_order() {
        let mut v = viewer();
        v.select_category("Events");

        let ids: Vec<_> = v.filtered().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn out_of_range_open_leaves_state() {
        let mut v = viewer();
        v.open_lightbox(1).unwrap();
        v.select_category("Nature");

        // photo 2 is not in Nature, so the lightbox closed
        assert_eq!(v.lightbox(), Lightbox::Closed);

        let err = v.open_lightbox(1).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert_eq!(v.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn navigation_is_noop_when_closed() {
        let mut v = viewer();
        v.show_next();
        v.show_previous();

        assert_eq!(v.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn single_photo_wraps_onto_itself() {
        let mut v = viewer();
        v.select_category("Nature");
        v.open_lightbox(0).unwrap();

        v.show_next();
        assert_eq!(v.lightbox(), Lightbox::Open(0));
        v.show_previous();
        assert_eq!(v.lightbox(), Lightbox::Open(0));
    }

    #[test]
    fn filter_change_follows_open_photo() {
        let mut v = viewer();

        // index 8 under All is photo 12, third Learning photo
        v.open_lightbox(8).unwrap();
        assert_eq!(v.current_photo().map(|p| p.id), Some(12));

        v.select_category("Learning");
        assert_eq!(v.lightbox(), Lightbox::Open(2));
        assert_eq!(v.current_photo().map(|p| p.id), Some(12));

        v.select_category("All");
        assert_eq!(v.lightbox(), Lightbox::Open(8));
    }

    #[test]
    fn filter_change_closes_when_photo_leaves() {
        let mut v = viewer();
        v.select_category("Sports");
        v.open_lightbox(1).unwrap();

        v.select_category("Events");
        assert_eq!(v.lightbox(), Lightbox::Closed);
    }

    fn duplicated_viewer() -> GalleryViewer {
        let photos = [
            Photo {
                id: 1,
                src: "a.jpg",
                category: Category::Sports,
                label: "A",
                span: Span::Single,
            },
            Photo {
                id: 2,
                src: "x.jpg",
                category: Category::Nature,
                label: "X",
                span: Span::Single,
            },
            Photo {
                id: 1,
                src: "b.jpg",
                category: Category::Sports,
                label: "B",
                span: Span::Single,
            },
        ];
        GalleryViewer::new(Catalog::load(&photos, ValidationPolicy::Lenient).unwrap())
    }

    #[test]
    fn reselecting_filter_keeps_duplicate_id_photo() {
        let mut v = duplicated_viewer();
        v.open_lightbox(2).unwrap();
        assert_eq!(v.current_photo().map(|p| p.label), Some("B"));

        v.select_category("All");
        assert_eq!(v.lightbox(), Lightbox::Open(2));
        assert_eq!(v.current_photo().map(|p| p.label), Some("B"));
    }

    #[test]
    fn filter_change_keeps_duplicate_id_photo() {
        let mut v = duplicated_viewer();
        v.open_lightbox(2).unwrap();

        v.select_category("Sports");
        assert_eq!(v.lightbox(), Lightbox::Open(1));
        assert_eq!(v.current_photo().map(|p| p.label), Some("B"));

        v.select_category("All");
        assert_eq!(v.current_photo().map(|p| p.label), Some("B"));
    }

    #[test]
    fn filter_options_follow_catalog() {
        let v = viewer();
        let labels: Vec<_> = v
            .filter_options()
            .iter()
            .map(|f| f.label().to_owned())
            .collect();

        assert_eq!(
            labels,
            vec!["All", "Art & Craft", "Sports", "Learning", "Events", "Nature"]
        );
    }
}

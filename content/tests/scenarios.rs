use content::{
    Catalog, Category, CategoryFilter, GalleryViewer, Lightbox, PHOTOS, ValidationPolicy,
};

fn viewer() -> GalleryViewer {
    GalleryViewer::new(Catalog::shipped(ValidationPolicy::Strict).unwrap())
}

fn all_filters() -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect()
}

#[test]
fn filter_completeness() {
    let mut v = viewer();

    for category in Category::ALL {
        v.set_filter(CategoryFilter::Only(category));

        let expected: Vec<_> = PHOTOS.iter().filter(|p| p.category == category).collect();
        assert_eq!(v.filtered(), expected, "filter {category}");
    }

    v.select_category("All");
    let everything: Vec<_> = PHOTOS.iter().collect();
    assert_eq!(v.filtered(), everything);
}

#[test]
fn count_invariant() {
    let mut v = viewer();

    for filter in all_filters() {
        v.set_filter(filter.clone());

        let (shown, total) = v.summary();
        assert!(shown <= total);
        assert_eq!(shown, v.filtered().len());
        assert_eq!(total, PHOTOS.len());
        assert_eq!(v.summary_text(), format!("Showing {shown} of {total} memories"));
    }
}

#[test]
fn full_cycle_returns_home() {
    let mut v = viewer();

    for filter in all_filters() {
        v.set_filter(filter);
        let n = v.filtered_len();

        for start in 0..n {
            v.open_lightbox(start).unwrap();
            for _ in 0..n {
                v.show_next();
            }
            assert_eq!(v.lightbox(), Lightbox::Open(start));

            for _ in 0..n {
                v.show_previous();
            }
            assert_eq!(v.lightbox(), Lightbox::Open(start));
        }
        v.close_lightbox();
    }
}

#[test]
fn single_steps_wrap_at_the_ends() {
    let mut v = viewer();

    for filter in all_filters() {
        v.set_filter(filter);
        let n = v.filtered_len();

        v.open_lightbox(0).unwrap();
        v.show_previous();
        assert_eq!(v.lightbox(), Lightbox::Open(n - 1));

        v.show_next();
        assert_eq!(v.lightbox(), Lightbox::Open(0));
        v.close_lightbox();
    }
}

#[test]
fn close_is_idempotent() {
    let mut v = viewer();

    v.close_lightbox();
    assert_eq!(v.lightbox(), Lightbox::Closed);
    v.close_lightbox();
    assert_eq!(v.lightbox(), Lightbox::Closed);

    v.open_lightbox(3).unwrap();
    v.close_lightbox();
    v.close_lightbox();
    assert_eq!(v.lightbox(), Lightbox::Closed);
}

// every card the grid can render opens a valid index, and nothing past it does
#[test]
fn rendered_indices_are_openable() {
    let mut v = viewer();

    for filter in all_filters() {
        v.set_filter(filter);
        let cards = v.filtered().len();

        for i in 0..cards {
            assert!(v.open_lightbox(i).is_ok());
            assert!(v.current_photo().is_some());
        }
        assert!(v.open_lightbox(cards).is_err());
        v.close_lightbox();
    }
}

#[test]
fn learning_walkthrough() {
    let mut v = viewer();
    v.select_category("Learning");
    assert_eq!(v.filtered_len(), 4);

    v.open_lightbox(0).unwrap();
    assert_eq!(v.lightbox(), Lightbox::Open(0));

    for _ in 0..3 {
        v.show_next();
    }
    assert_eq!(v.lightbox(), Lightbox::Open(3));

    v.show_next();
    assert_eq!(v.lightbox(), Lightbox::Open(0));
}

#[test]
fn all_shows_everything() {
    let v = viewer();

    assert_eq!(*v.filter(), CategoryFilter::All);
    assert_eq!(v.filtered_len(), 11);
    assert_eq!(v.catalog().len(), 11);
    assert_eq!(v.summary_text(), "Showing 11 of 11 memories");
}

#[test]
fn out_of_range_open_is_rejected() {
    let mut v = viewer();
    v.select_category("Events");
    assert_eq!(v.filtered_len(), 2);

    assert!(v.open_lightbox(2).is_err());
    assert_eq!(v.lightbox(), Lightbox::Closed);
}

#[test]
fn double_close_stays_closed() {
    let mut v = viewer();

    v.close_lightbox();
    v.close_lightbox();
    assert_eq!(v.lightbox(), Lightbox::Closed);
}

#[test]
fn lightbox_shows_category_and_caption() {
    let mut v = viewer();
    v.select_category("Events");
    v.open_lightbox(1).unwrap();

    let photo = v.current_photo().unwrap();
    assert_eq!(photo.category.label(), "Events");
    assert_eq!(photo.label, "Annual Day 2024");
}

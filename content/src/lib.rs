// content
//
// everything the website shows that is not markup: the gallery catalog and its
// viewer state, the school copy, and the site configuration.  this crate has no
// ui dependencies so the gallery logic can be tested natively.
pub mod config;
pub mod gallery;
pub mod school;
pub mod viewer;

pub use config::SiteConfig;
pub use gallery::{Catalog, Category, PHOTOS, Photo, PhotoId, Span, ValidationPolicy};
pub use viewer::{CategoryFilter, GalleryViewer, Lightbox};

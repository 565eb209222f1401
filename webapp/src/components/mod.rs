pub mod cards;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod section_label;
pub mod timeline;

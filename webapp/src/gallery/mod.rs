use dioxus::prelude::*;

use content::{CategoryFilter, GalleryViewer};

use crate::{
    common::colors::Accent, components::section_label::SectionLabel, site::Site,
};

pub mod grid;
use grid::PhotoGrid;

pub mod lightbox;
use lightbox::LightboxOverlay;

#[derive(Clone, PartialEq, Props)]
struct FilterButtonProps {
    viewer_signal: Signal<GalleryViewer>,
    filter: CategoryFilter,
}

#[component]
fn FilterButton(props: FilterButtonProps) -> Element {
    let mut viewer_signal = props.viewer_signal;
    let filter = props.filter;

    let active = viewer_signal.read().is_active(&filter);
    let accent = Accent::for_filter(&filter);
    let label = filter.label().to_owned();

    rsx! {
        button {
            class: if active { "filter-button active" } else { "filter-button" },
            style: accent.to_css_vars(),
            aria_pressed: "{active}",
            onclick: move |_| viewer_signal.write().set_filter(filter.clone()),
            "{label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FilterBarProps {
    viewer_signal: Signal<GalleryViewer>,
}

#[component]
fn FilterBar(props: FilterBarProps) -> Element {
    let viewer_signal = props.viewer_signal;
    let options = viewer_signal.read().filter_options();

    rsx! {
        div { class: "filter-bar", role: "toolbar", aria_label: "Filter photos by category",
            for filter in options {
                FilterButton { key: "{filter}", viewer_signal, filter: filter.clone() }
            }
        }
    }
}

#[component]
fn GalleryHeader() -> Element {
    let site = use_context::<Site>();
    let school_name = site.config.school.name.clone();

    rsx! {
        div { class: "section-header",
            SectionLabel { text: "Life at {school_name}", accent: Accent::Purple }
            h2 { id: "gallery-heading", class: "section-heading",
                "Every Day is a "
                span {
                    class: "gradient-text",
                    style: "--accent-gradient: linear-gradient(135deg, #FF6B6B 0%, #F59E0B 50%, #A855F7 100%);",
                    "New Adventure"
                }
            }
            p { class: "section-intro",
                "Peek inside our classrooms, playgrounds and celebrations: moments that show why children love coming to school every morning."
            }
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    let site = use_context::<Site>();
    let viewer_signal = use_signal(|| GalleryViewer::new(site.catalog.clone()));

    let summary = viewer_signal.read().summary_text();

    rsx! {
        section { class: "gallery-page", aria_labelledby: "gallery-heading",
            div { class: "container",
                GalleryHeader {}
                FilterBar { viewer_signal }
                PhotoGrid { viewer_signal }
                p { class: "gallery-summary", "{summary}" }
            }
            LightboxOverlay { viewer_signal }
        }
    }
}

use dioxus::prelude::*;

use content::{GalleryViewer, Photo, Span};
use tracing::error;

use crate::{common::colors::Accent, site::Site};

fn span_class(span: Span) -> &'static str {
    match span {
        Span::Single => "span-single",
        Span::Wide => "span-wide",
        Span::Tall => "span-tall",
        Span::Large => "span-large",
    }
}

// cards are role=button, so they answer to the same keys a button does
fn activates_card(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[derive(Clone, PartialEq, Props)]
struct PhotoCardProps {
    viewer_signal: Signal<GalleryViewer>,
    photo: Photo,
    // position in the filtered list, which is what the lightbox indexes
    index: usize,
}

#[component]
fn PhotoCard(props: PhotoCardProps) -> Element {
    let site = use_context::<Site>();
    let mut viewer_signal = props.viewer_signal;
    let photo = props.photo;
    let index = props.index;

    let src = site.asset_url(photo.src);
    let span = span_class(photo.span);
    let style = format!(
        "{} --delay: {}ms;",
        Accent::for_category(photo.category).to_css_vars(),
        (index % 6) * 70
    );

    rsx! {
        div {
            class: "photo-card {span}",
            style: "{style}",
            role: "button",
            tabindex: "0",
            aria_label: "View {photo.label}",
            onclick: move |_| {
                if let Err(err) = viewer_signal.write().open_lightbox(index) {
                    error!("failed to open lightbox: {err}");
                }
            },
            onkeydown: move |event| {
                if activates_card(&event.key()) {
                    // space would otherwise scroll the page
                    event.prevent_default();
                    if let Err(err) = viewer_signal.write().open_lightbox(index) {
                        error!("failed to open lightbox: {err}");
                    }
                }
            },
            div { class: "card-accent" }
            img { src: "{src}", alt: "{photo.label}", loading: "lazy" }
            div { class: "photo-shade" }
            div { class: "photo-caption",
                span { class: "photo-badge", "{photo.category}" }
                p { class: "photo-label", "{photo.label}" }
            }
            div { class: "photo-zoom", "🔍" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PhotoGridProps {
    viewer_signal: Signal<GalleryViewer>,
}

#[component]
pub fn PhotoGrid(props: PhotoGridProps) -> Element {
    let viewer_signal = props.viewer_signal;

    let photos: Vec<Photo> = viewer_signal.read().filtered().into_iter().copied().collect();
    let filter = viewer_signal.read().filter().to_string();

    if photos.is_empty() {
        return rsx! {
            p { class: "gallery-empty", "No photos in {filter} yet." }
        };
    }

    rsx! {
        div { class: "photo-grid",
            for (index, photo) in photos.into_iter().enumerate() {
                PhotoCard { key: "{photo.id}-{index}", viewer_signal, photo, index }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_open_a_card() {
        assert!(activates_card(&Key::Enter));
        assert!(activates_card(&Key::Character(String::from(" "))));
    }

    #[test]
    fn other_keys_do_not() {
        assert!(!activates_card(&Key::Escape));
        assert!(!activates_card(&Key::Tab));
        assert!(!activates_card(&Key::Character(String::from("a"))));
    }
}

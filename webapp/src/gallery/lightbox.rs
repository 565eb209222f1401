use dioxus::prelude::*;

use content::GalleryViewer;
use tracing::debug;

use crate::{common::colors::Accent, site::Site};

#[derive(Clone, PartialEq, Props)]
pub struct LightboxOverlayProps {
    viewer_signal: Signal<GalleryViewer>,
}

// LightboxOverlay
//
// renders nothing while the viewer is closed.  clicks on the dimmed backdrop
// close it; clicks inside the panel are stopped before they reach the backdrop.
// the backdrop takes focus when it mounts so the arrow keys and escape work
// without the user clicking first.
#[component]
pub fn LightboxOverlay(props: LightboxOverlayProps) -> Element {
    let site = use_context::<Site>();
    let mut viewer_signal = props.viewer_signal;

    let (photo, position, total) = {
        let viewer = viewer_signal.read();
        (
            viewer.current_photo().copied(),
            viewer.lightbox().index().unwrap_or(0) + 1,
            viewer.filtered_len(),
        )
    };

    let Some(photo) = photo else {
        return rsx! {};
    };

    let src = site.asset_url(photo.src);
    let accent = Accent::for_category(photo.category).to_css_vars();

    rsx! {
        div {
            class: "lightbox-backdrop",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{photo.label}",
            tabindex: "0",
            onmounted: move |event| async move {
                if event.set_focus(true).await.is_err() {
                    debug!("lightbox could not take focus");
                }
            },
            onclick: move |_| viewer_signal.write().close_lightbox(),
            onkeydown: move |event| match event.key() {
                Key::Escape => viewer_signal.write().close_lightbox(),
                Key::ArrowLeft => viewer_signal.write().show_previous(),
                Key::ArrowRight => viewer_signal.write().show_next(),
                _ => {}
            },

            div {
                class: "lightbox-panel",
                style: "{accent}",
                onclick: move |event| event.stop_propagation(),
                div { class: "card-accent" }
                div { class: "lightbox-image",
                    img { src: "{src}", alt: "{photo.label}" }
                    div { class: "photo-shade" }
                    div { class: "lightbox-caption",
                        div {
                            span { class: "lightbox-badge", "{photo.category}" }
                            p { class: "lightbox-label", "{photo.label}" }
                        }
                        span { class: "lightbox-counter", "{position} / {total}" }
                    }
                }
            }

            button {
                class: "lightbox-control close",
                aria_label: "Close",
                onclick: move |event| {
                    event.stop_propagation();
                    viewer_signal.write().close_lightbox();
                },
                "✕"
            }
            button {
                class: "lightbox-control prev",
                aria_label: "Previous",
                onclick: move |event| {
                    event.stop_propagation();
                    viewer_signal.write().show_previous();
                },
                "←"
            }
            button {
                class: "lightbox-control next",
                aria_label: "Next",
                onclick: move |event| {
                    event.stop_propagation();
                    viewer_signal.write().show_next();
                },
                "→"
            }
        }
    }
}

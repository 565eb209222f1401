use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::debug;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    debug!(path = %path, "no route");

    rsx! {
        section { class: "not-found",
            h1 { class: "section-heading", "Page not found" }
            p { class: "section-intro", "We couldn't find /{path}. It may have moved." }
            div { class: "hero-actions",
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to Home" }
            }
        }
    }
}

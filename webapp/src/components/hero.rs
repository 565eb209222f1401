use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::school::{HERO_STATS, HERO_SUBTITLE, TRUST_PILLS, fill};

use crate::{Route, components::cards::StatStrip, site::Site};

#[component]
pub fn Hero() -> Element {
    let site = use_context::<Site>();
    let subtitle = fill(HERO_SUBTITLE, &site.config.school);
    let enrol_link = site.config.enrol_link();

    rsx! {
        section { class: "hero", aria_labelledby: "hero-heading",
            div { class: "hero-blob one" }
            div { class: "hero-blob two" }
            div { class: "hero-content",
                h1 { id: "hero-heading", class: "hero-title",
                    "Every "
                    span { class: "gradient-text word-1", "Story" }
                    " "
                    span { class: "gradient-text word-2", "Begins" }
                    br {}
                    "With "
                    span { class: "gradient-text word-3", "Wonder" }
                    " & "
                    span { class: "gradient-text word-4", "Purpose" }
                }
                p { class: "hero-subtitle", "{subtitle}" }
                div { class: "pill-row hero-pills",
                    for pill in TRUST_PILLS.iter() {
                        span { class: "pill", "✦ {pill}" }
                    }
                }
                div { class: "hero-actions",
                    a { class: "btn btn-primary", href: "{enrol_link}",
                        "✦ Schedule a Private Tour ✦"
                    }
                    Link { class: "btn btn-ghost", to: Route::About {}, "Discover Our Story →" }
                }
                StatStrip { stats: HERO_STATS.to_vec() }
            }
        }
    }
}

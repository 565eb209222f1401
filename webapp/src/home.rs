use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::school::CORE_VALUES;

use crate::{
    Route,
    common::colors::Accent,
    components::{cards::ValueCard, hero::Hero, section_label::SectionLabel},
};

#[component]
pub fn CoreValues() -> Element {
    rsx! {
        section { class: "section values-section", aria_labelledby: "values-heading",
            div { class: "container",
                div { class: "section-header",
                    SectionLabel { text: "What We Stand For", accent: Accent::Purple }
                    h2 { id: "values-heading", class: "section-heading",
                        "Our "
                        span { class: "gradient-text", "Core Values" }
                    }
                    p { class: "section-intro",
                        "Every decision, from curriculum design to classroom colours, flows from six guiding principles."
                    }
                }
                div { class: "value-grid",
                    for (index, value) in CORE_VALUES.iter().enumerate() {
                        ValueCard { key: "{value.title}", value: *value, index }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            Hero {}
            CoreValues {}

            section { class: "teaser",
                h2 { "Peek inside our classrooms" }
                p { "Painting days, sports mornings, festivals and garden adventures." }
                Link { to: Route::Gallery {}, class: "btn btn-coral", "Open the Gallery" }
            }
        }
    }
}

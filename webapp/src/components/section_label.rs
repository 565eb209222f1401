use dioxus::prelude::*;

use crate::common::colors::Accent;

#[derive(Clone, PartialEq, Props)]
pub struct SectionLabelProps {
    text: String,
    #[props(default = Accent::Teal)]
    accent: Accent,
}

// small caps eyebrow above a section heading, with a rule on each side
#[component]
pub fn SectionLabel(props: SectionLabelProps) -> Element {
    rsx! {
        div { class: "section-label", style: props.accent.to_css_vars(),
            div { class: "rule" }
            span { "{props.text}" }
            div { class: "rule" }
        }
    }
}

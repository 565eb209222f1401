use dioxus::prelude::*;

use content::school::{Milestone, Side, fill};

use crate::{common::colors::Accent, site::Site};

#[derive(Clone, PartialEq, Props)]
pub struct TimelineItemProps {
    milestone: Milestone,
    side: Side,
    index: usize,
}

#[component]
pub fn TimelineItem(props: TimelineItemProps) -> Element {
    let site = use_context::<Site>();
    let school = &site.config.school;

    let milestone = props.milestone;
    let side = match props.side {
        Side::Left => "left",
        Side::Right => "right",
    };
    let title = fill(milestone.title, school);
    let description = fill(milestone.description, school);

    rsx! {
        div {
            class: "timeline-item {side}",
            style: Accent::cycle(props.index).to_css_vars(),
            div { class: "timeline-dot" }
            div { class: "timeline-year", "{milestone.year}" }
            div { class: "timeline-card",
                h3 { "{title}" }
                p { "{description}" }
            }
        }
    }
}

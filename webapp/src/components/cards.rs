use dioxus::prelude::*;

use content::school::{CoreValue, Stat, TeamMember, fill};

use crate::{common::colors::Accent, site::Site};

// cards in a grid fade in one after another
fn stagger(index: usize, step_ms: usize) -> String {
    format!("--delay: {}ms;", index * step_ms)
}

#[derive(Clone, PartialEq, Props)]
pub struct ValueCardProps {
    value: CoreValue,
    index: usize,
}

#[component]
pub fn ValueCard(props: ValueCardProps) -> Element {
    let value = props.value;
    let accent = Accent::cycle(props.index);
    let style = format!("{}{}", accent.to_css_vars(), stagger(props.index, 80));

    rsx! {
        div { class: "value-card", style: "{style}",
            div { class: "card-accent" }
            div { class: "value-icon", "{value.icon}" }
            h3 { "{value.title}" }
            p { "{value.description}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TeamCardProps {
    member: TeamMember,
    index: usize,
}

#[component]
pub fn TeamCard(props: TeamCardProps) -> Element {
    let member = props.member;
    let accent = Accent::cycle(props.index + 2);
    let style = format!("{}{}", accent.to_css_vars(), stagger(props.index, 100));

    rsx! {
        div { class: "team-card", style: "{style}",
            div { class: "team-avatar", "{member.emoji}" }
            h3 { "{member.name}" }
            div { class: "team-role", "{member.role}" }
            p { "{member.qualification}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StatStripProps {
    stats: Vec<Stat>,
}

#[component]
pub fn StatStrip(props: StatStripProps) -> Element {
    let site = use_context::<Site>();

    rsx! {
        div { class: "stat-strip",
            for (i, stat) in props.stats.iter().enumerate() {
                div { class: "stat", style: Accent::cycle(i).to_css_vars(),
                    if let Some(icon) = stat.icon {
                        div { "{icon}" }
                    }
                    div { class: "stat-value gradient-text", "{stat.value}" }
                    div { class: "stat-label", {fill(stat.label, &site.config.school)} }
                }
            }
        }
    }
}

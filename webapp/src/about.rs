use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::school::{
    FOUNDER_CREDENTIALS, FOUNDER_QUOTE, FOUNDER_STORY, MILESTONES, MISSION, PHILOSOPHY_PILLS,
    TEAM, TEAM_STATS, VISION, fill, timeline_side,
};

use crate::{
    Route,
    common::{colors::Accent, years_since},
    components::{
        cards::{StatStrip, TeamCard},
        section_label::SectionLabel,
        timeline::TimelineItem,
    },
    home::CoreValues,
    site::Site,
};

#[component]
fn StoryHeader() -> Element {
    let site = use_context::<Site>();
    let school = &site.config.school;
    let since = years_since(school.established);

    rsx! {
        section { class: "section about-hero", aria_labelledby: "about-hero-heading",
            div { class: "container",
                SectionLabel { text: "Our Story · {since}" }
                h1 { id: "about-hero-heading", class: "section-heading",
                    "A Second Home for "
                    span { class: "gradient-text", "Little Learners" }
                }
                p { class: "section-intro", "{school.tagline}" }
            }
        }
    }
}

#[component]
fn MissionVision() -> Element {
    let site = use_context::<Site>();
    let mission = fill(MISSION, &site.config.school);
    let vision = fill(VISION, &site.config.school);

    rsx! {
        section { class: "section", aria_labelledby: "mission-heading",
            div { class: "container mission-grid",
                div {
                    SectionLabel { text: "Our Mission", accent: Accent::Coral }
                    h2 { id: "mission-heading", "Why we exist" }
                    p { "{mission}" }
                }
                div {
                    SectionLabel { text: "Our Vision", accent: Accent::Sky }
                    h3 { "Where we are headed" }
                    p { "{vision}" }
                    div { class: "pill-row",
                        for (i, pill) in PHILOSOPHY_PILLS.iter().enumerate() {
                            span {
                                class: "pill solid",
                                style: Accent::cycle(i + 2).to_css_vars(),
                                "{pill}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Founder() -> Element {
    let site = use_context::<Site>();
    let paragraphs: Vec<String> = FOUNDER_STORY
        .iter()
        .map(|p| fill(p, &site.config.school))
        .collect();

    rsx! {
        section { class: "section", aria_labelledby: "founder-heading",
            div { class: "container",
                SectionLabel { text: "Our Founder" }
                div { class: "founder-grid",
                    div { class: "founder-portrait", "👩‍🏫" }
                    div { class: "founder-text",
                        h2 { id: "founder-heading", class: "founder-quote", "“{FOUNDER_QUOTE}”" }
                        for paragraph in paragraphs {
                            p { "{paragraph}" }
                        }
                        div { class: "pill-row",
                            for credential in FOUNDER_CREDENTIALS.iter() {
                                span { class: "pill", "✦ {credential}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Journey() -> Element {
    rsx! {
        section { class: "section", aria_labelledby: "timeline-heading",
            div { class: "container",
                div { class: "section-header",
                    SectionLabel { text: "Our Journey", accent: Accent::Amber }
                    h2 { id: "timeline-heading", class: "section-heading",
                        "Fifteen Years of "
                        span { class: "gradient-text", "Little Steps" }
                    }
                }
                div { class: "timeline",
                    for (index, milestone) in MILESTONES.iter().enumerate() {
                        TimelineItem {
                            key: "{milestone.year}",
                            milestone: *milestone,
                            side: timeline_side(index),
                            index,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Team() -> Element {
    rsx! {
        section { class: "section", aria_labelledby: "team-heading",
            div { class: "container",
                div { class: "section-header",
                    SectionLabel { text: "The Educators", accent: Accent::Pink }
                    h2 { id: "team-heading", class: "section-heading",
                        "Meet the "
                        span { class: "gradient-text", "Team" }
                    }
                }
                div { class: "team-grid",
                    for (index, member) in TEAM.iter().enumerate() {
                        TeamCard { key: "{member.name}", member: *member, index }
                    }
                }
                StatStrip { stats: TEAM_STATS.to_vec() }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let site = use_context::<Site>();
    let enrol_link = site.config.enrol_link();
    let school_name = site.config.school.name.clone();

    rsx! {
        StoryHeader {}
        MissionVision {}
        Founder {}
        CoreValues {}
        Journey {}
        Team {}

        section { class: "teaser", aria_labelledby: "cta-heading",
            h2 { id: "cta-heading", "Come and see {school_name} for yourself" }
            p { "Limited seats available for the coming academic year." }
            div { class: "hero-actions",
                a { class: "btn btn-coral", href: "{enrol_link}", "✨ Book a Visit" }
                Link { to: Route::Gallery {}, class: "btn btn-ghost", "Browse the Gallery" }
            }
        }
    }
}

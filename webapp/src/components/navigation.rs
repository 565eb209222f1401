use dioxus::prelude::*;
use dioxus_router::prelude::*;

use content::school::MENU_TAGS;

use crate::{
    Route,
    common::{
        colors::Accent,
        scroll::{HeaderScroll, lock_body_scroll, scroll_to_top, unwatch_scroll, watch_scroll},
    },
    components::footer::Footer,
    site::Site,
};

fn nav_links() -> Vec<(&'static str, Route, Accent)> {
    vec![
        ("Home", Route::Home {}, Accent::Coral),
        ("About Us", Route::About {}, Accent::Teal),
        ("Gallery", Route::Gallery {}, Accent::Purple),
    ]
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
    accent: Accent,
    menu_open_signal: Signal<bool>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;
    let mut menu_open_signal = props.menu_open_signal;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            style: props.accent.to_css_vars(),
            to: target,
            onclick: move |_| {
                menu_open_signal.set(false);
                scroll_to_top();
            },
            "{name}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MobileMenuProps {
    menu_open_signal: Signal<bool>,
    enrol_link: String,
}

#[component]
fn MobileMenu(props: MobileMenuProps) -> Element {
    let mut menu_open_signal = props.menu_open_signal;

    if !menu_open_signal() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "menu-scrim",
            aria_hidden: "true",
            onclick: move |_| menu_open_signal.set(false),
        }
        nav { class: "mobile-menu", aria_label: "Mobile navigation",
            div { class: "rainbow-rule" }
            for (name, target, accent) in nav_links() {
                NavBarButton {
                    name: name.to_owned(),
                    target,
                    accent,
                    menu_open_signal,
                }
            }
            div { class: "pill-row",
                for (i, tag) in MENU_TAGS.iter().enumerate() {
                    span {
                        class: "pill solid",
                        style: Accent::cycle(i + 2).to_css_vars(),
                        "{tag}"
                    }
                }
            }
            a { class: "btn btn-coral", href: "{props.enrol_link}", "✨ Enrol Now" }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let site = use_context::<Site>();
    let mut menu_open_signal = use_signal(|| false);
    let scroll_signal = use_signal(HeaderScroll::default);

    let listener = use_hook(|| watch_scroll(scroll_signal));
    use_effect(move || lock_body_scroll(menu_open_signal()));
    use_drop(move || {
        if let Some(listener) = listener.as_ref() {
            unwatch_scroll(listener);
        }
        lock_body_scroll(false);
    });

    let school = site.config.school.clone();
    let enrol_link = site.config.enrol_link();
    let header_class = scroll_signal().header_class(menu_open_signal());

    rsx! {
        header { class: "{header_class}",
            div { class: "rainbow-rule" }
            div { class: "nav-container",
                Link {
                    class: "logo",
                    to: Route::Home {},
                    onclick: move |_| scroll_to_top(),
                    div { class: "logo-mark", "🌟" }
                    div {
                        span { class: "logo-name", "{school.name}" }
                        span { class: "logo-location", "{school.location}" }
                    }
                }

                nav { class: "nav-links", aria_label: "Main navigation",
                    for (name, target, accent) in nav_links() {
                        NavBarButton {
                            name: name.to_owned(),
                            target,
                            accent,
                            menu_open_signal,
                        }
                    }
                }

                div { class: "nav-actions",
                    a { class: "btn btn-coral", href: "{enrol_link}", "Enrol Now ✨" }
                    button {
                        class: "menu-toggle",
                        aria_label: if menu_open_signal() { "Close menu" } else { "Open menu" },
                        aria_expanded: "{menu_open_signal()}",
                        onclick: move |_| menu_open_signal.set(!menu_open_signal()),
                        if menu_open_signal() {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }
        }
        MobileMenu { menu_open_signal, enrol_link: enrol_link.clone() }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { Outlet::<Route> {} }
        Footer {}
    }
}

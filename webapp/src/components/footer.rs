use dioxus::prelude::*;

use crate::{
    common::{current_year, years_since},
    site::Site,
};

#[component]
pub fn Footer() -> Element {
    let site = use_context::<Site>();
    let school = &site.config.school;
    let contact = &site.config.contact;

    let phone_link = site.config.phone_link();
    let since = years_since(school.established);
    let year = current_year();

    rsx! {
        footer { class: "app-footer",
            strong { "{school.name}" }
            p { "{school.location} · {since}" }
            p {
                a { href: "mailto:{contact.email}", "{contact.email}" }
                " · "
                a { href: "{phone_link}", "{contact.phone}" }
            }
            p { "© {year} {school.name}" }
        }
    }
}

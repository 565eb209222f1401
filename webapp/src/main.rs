#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, info};

mod common;

mod components;
use components::navigation::NavBar;

mod site;
use site::Site;

mod home;
use home::Home;

mod about;
use about::About;

mod gallery;
use gallery::Gallery;

mod not_found;
use not_found::NotFound;

use content::{
    Catalog, ValidationPolicy,
    school::{KEYWORDS, fill},
};

fn main() {
    // the logger is configured from the site config, so config problems can
    // only go to the raw console
    let config = site::read_config();

    let level = config.logging.level().unwrap_or(Level::DEBUG);
    dioxus_logger::init(level).expect("failed to init logger");

    // strict in debug builds, so a bad catalog never makes it past `dx serve`
    let catalog =
        Catalog::shipped(ValidationPolicy::for_build()).expect("failed to load photo catalog");

    info!(school = %config.school.name, photos = catalog.len(), "starting site");

    dioxus::LaunchBuilder::web()
        .with_context(Site { config, catalog })
        .launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/gallery")]
        Gallery {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let site = use_context::<Site>();

    let title = site.config.page_title();
    let description = site.config.page_description();
    let keywords = KEYWORDS
        .iter()
        .map(|k| fill(k, &site.config.school))
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        document::Meta { name: "keywords", content: "{keywords}" }
        style { "{common::style::SITE_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        style { "{common::style::GALLERY_STYLES}" }
        Router::<Route> {}
    }
}

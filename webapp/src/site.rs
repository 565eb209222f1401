use gloo_console::error as console_error;

use content::{Catalog, SiteConfig};

const SITE_TOML: &str = include_str!("../../Site.toml");

// everything a page needs that is fixed for the life of the app
//
// built once in main() and handed to the component tree as context
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
}

impl Site {
    pub fn asset_url(&self, src: &str) -> String {
        self.config.gallery.asset_url(src)
    }
}

// runs before the logger exists, so failures go straight to the console
pub fn read_config() -> SiteConfig {
    match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            console_error!(format!(
                "failed to parse site config, using defaults: {err}"
            ));
            SiteConfig::default()
        }
    }
}

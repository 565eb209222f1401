use serde::Deserialize;
use tracing::{Level, debug, instrument};

// site configuration
//
// the webapp embeds Site.toml at build time and parses it on startup.  nothing
// here is secret, but we still keep the parse errors terse since they end up in
// the browser console.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub school: SchoolConfig,
    pub contact: ContactConfig,
    pub gallery: GalleryConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SchoolConfig {
    pub name: String,
    pub location: String,
    pub established: u16,
    pub tagline: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GalleryConfig {
    pub asset_base: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

// the config lives under [site] so that Site.toml can grow other tables later
#[derive(Debug, Deserialize)]
struct TomlSiteFile {
    site: SiteConfig,
}

impl SiteConfig {
    #[instrument(level = Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let data: TomlSiteFile = toml::from_str(doc)?;

        // reject a bad level here rather than when the logger starts
        data.site.logging.level()?;

        debug!("successfully parsed site config");
        Ok(data.site)
    }

    pub fn enrol_link(&self) -> String {
        format!("mailto:{}?subject=Admissions", self.contact.email)
    }

    pub fn page_title(&self) -> String {
        format!(
            "Best Preschool in Mumbai | {}, {}",
            self.school.name, self.school.location
        )
    }

    pub fn page_description(&self) -> String {
        format!(
            "Discover our philosophy, core values, and nurturing approach at {} in {}.",
            self.school.name, self.school.location
        )
    }

    pub fn phone_link(&self) -> String {
        let digits: String = self
            .contact
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            school: SchoolConfig {
                name: String::from("My Little Steps Preschool"),
                location: String::from("Ambarnath"),
                established: 2010,
                tagline: String::from("Every Story Begins With Wonder & Purpose"),
            },
            contact: ContactConfig {
                email: String::from("admissions@mylittlesteps.in"),
                phone: String::from("+91 98200 00000"),
            },
            gallery: GalleryConfig {
                asset_base: String::from("/images/gallery"),
            },
            logging: LoggingConfig {
                level: String::from("debug"),
            },
        }
    }
}

impl GalleryConfig {
    pub fn asset_url(&self, src: &str) -> String {
        let base = self.asset_base.trim_end_matches('/');

        if base.is_empty() {
            return src.to_owned();
        }

        format!("{base}/{}", src.trim_start_matches('/'))
    }
}

impl LoggingConfig {
    pub fn level(&self) -> anyhow::Result<Level> {
        self.level
            .parse::<Level>()
            .map_err(|err| anyhow::Error::msg(format!("bad log level {}: {err}", self.level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../../Site.toml");

    #[test]
    fn shipped_file_matches_default() {
        let config = SiteConfig::from_toml(SHIPPED).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn level_parsing() {
        let mut config = SiteConfig::default();
        assert_eq!(config.logging.level().unwrap(), Level::DEBUG);

        config.logging.level = String::from("WARN");
        assert_eq!(config.logging.level().unwrap(), Level::WARN);

        config.logging.level = String::from("loud");
        assert!(config.logging.level().is_err());
    }

    #[test]
    fn bad_level_rejected_at_parse() {
        let doc = SHIPPED.replace("level = \"debug\"", "level = \"chatty\"");
        assert!(SiteConfig::from_toml(&doc).is_err());
    }

    #[test]
    fn missing_table_rejected() {
        let doc = "[site.school]\nname = \"x\"\n";
        assert!(SiteConfig::from_toml(doc).is_err());
    }

    #[test]
    fn asset_urls() {
        let mut gallery = GalleryConfig {
            asset_base: String::from("/images/gallery/"),
        };
        assert_eq!(gallery.asset_url("a.jpg"), "/images/gallery/a.jpg");
        assert_eq!(gallery.asset_url("/a.jpg"), "/images/gallery/a.jpg");

        gallery.asset_base = String::new();
        assert_eq!(gallery.asset_url("a.jpg"), "a.jpg");
    }

    #[test]
    fn page_metadata_names_the_school() {
        let config = SiteConfig::default();
        assert_eq!(
            config.page_title(),
            "Best Preschool in Mumbai | My Little Steps Preschool, Ambarnath"
        );
        assert!(
            config
                .page_description()
                .ends_with("at My Little Steps Preschool in Ambarnath.")
        );
    }

    #[test]
    fn contact_links() {
        let config = SiteConfig::default();
        assert_eq!(config.phone_link(), "tel:+919820000000");
        assert_eq!(
            config.enrol_link(),
            "mailto:admissions@mylittlesteps.in?subject=Admissions"
        );
    }
}

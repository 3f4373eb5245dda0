use std::path::Path;

use anyhow::Result;
use scraper::Selector;
use serde::{Deserialize, Deserializer};

static DEFAULT_CONFIG_FILE: &str = "hanser_fetch";
static ENV_PREFIX: &str = "HANSER_FETCH";

pub static DEFAULT_ORIGIN: &str = "https://www.hanser-elibrary.com";

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Defaults, then the TOML file, then `HANSER_FETCH__*` environment variables.
    ///
    /// Without an explicit path a missing `hanser_fetch.toml` is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE)
                .format(config::FileFormat::Toml)
                .required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize configuration: {}", e))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize configuration: {}", e))
    }
}

/// Where chapters live on the publisher's site and how to find them.
#[derive(Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(
        default = "default_chapter_name",
        deserialize_with = "deserialize_selector"
    )]
    pub chapter_name: Selector,
    #[serde(
        default = "default_chapter_link",
        deserialize_with = "deserialize_selector"
    )]
    pub chapter_link: Selector,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            chapter_name: default_chapter_name(),
            chapter_link: default_chapter_link(),
        }
    }
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_owned()
}

fn default_chapter_name() -> Selector {
    Selector::parse("h5").expect("invalid chapter name selector")
}

fn default_chapter_link() -> Selector {
    Selector::parse(r#"a[title="PDF"]"#).expect("invalid chapter link selector")
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// A browser-like agent is generated when unset.
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    100
}

fn deserialize_selector<'de, D>(deserializer: D) -> Result<Selector, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    Selector::parse(&s)
        .map_err(|e| serde::de::Error::custom(format!("Invalid selector '{}': {}", s, e)))
}

use config::{Config, ConfigError, Environment, Map};
use resolve_path::PathResolveExt;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_TARGET_URL: &str = "https://comic.sumikko.info/date-item/";
pub const DEFAULT_FAVORITE_TITLES: [&str; 2] = ["ウォーズ", "スーパー"];
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// What to do when a listing item lacks the markup a title is read from.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MalformedItemPolicy {
    /// Log the item and keep going with the rest of the page.
    #[default]
    Skip,
    /// Abort extraction on the first malformed item.
    FailFast,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub target_url: Url,
    pub favorite_titles: Vec<String>,
    pub timeout_secs: u64,
    pub log_fetch_failures: bool,
    pub malformed_items: MalformedItemPolicy,
}

impl Settings {
    /// Builds settings from the compiled-in defaults, then an optional config file,
    /// then `TODAY_COMICS_*` environment variables.
    pub fn new(config_file: Option<&str>) -> Result<Self, ConfigError> {
        Self::with_env(config_file, None)
    }

    /// Like [`Settings::new`], but reads overrides from `env` instead of the process
    /// environment when it is given.
    pub fn with_env(
        config_file: Option<&str>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let favorites: Vec<String> = DEFAULT_FAVORITE_TITLES.map(String::from).to_vec();
        let mut builder = Config::builder()
            .set_default("target_url", DEFAULT_TARGET_URL)?
            .set_default("favorite_titles", favorites)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("log_fetch_failures", true)?
            .set_default("malformed_items", "skip")?;

        if let Some(path) = config_file {
            let path = path.resolve();
            builder = builder.add_source(config::File::from(&*path));
        }

        builder
            .add_source(
                Environment::with_prefix("TODAY_COMICS")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("favorite_titles")
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

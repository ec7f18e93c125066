use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const HOME_URL: &str = "https://www.dataroma.com/m/home.php";
pub const SITE_ORIGIN: &str = "https://www.dataroma.com";

pub const DIRECTORY_CONTAINER: &str = "#port_body";
pub const DIRECTORY_SELECTOR: &str = "#port_body li";
pub const HOLDINGS_TABLE: &str = "#grid";
pub const HOLDINGS_SELECTOR: &str = "#grid tr";

pub const UPDATED_LABEL: &str = "Updated";
pub const SYMBOL_DELIMITER: char = '-';
pub const MIN_HOLDING_CELLS: usize = 5;

const DEFAULT_USER_AGENT: &str = concat!("dataroma_scraper/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime knobs. Selectors and labels above are fixed to the site's markup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub home_url: String,
    pub site_origin: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            home_url: HOME_URL.to_string(),
            site_origin: SITE_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Defaults, then `dataroma.toml` if present, then `DATAROMA_*` env vars.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("home_url", HOME_URL)?
            .set_default("site_origin", SITE_ORIGIN)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(File::with_name("dataroma").required(false))
            .add_source(Environment::with_prefix("DATAROMA").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

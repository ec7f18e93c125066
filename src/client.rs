use tracing::{info, warn};

use crate::error::Result;
use crate::fetch::{Fetch, HttpFetcher};
use crate::models::{Holding, Investor};
use crate::parser::{directory, portfolio, Parsed};
use crate::resolver;
use crate::settings::Settings;

/// The two dataroma queries over an injected fetcher. Nothing is cached:
/// every call fetches what it needs.
pub struct Dataroma<F = HttpFetcher> {
    fetcher: F,
    home_url: String,
    site_origin: String,
}

impl Dataroma<HttpFetcher> {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(settings)?, settings))
    }
}

impl<F: Fetch> Dataroma<F> {
    pub fn new(fetcher: F, settings: &Settings) -> Self {
        Dataroma {
            fetcher,
            home_url: settings.home_url.clone(),
            site_origin: settings.site_origin.clone(),
        }
    }

    /// Every investor on the homepage directory.
    pub fn list_investors(&self) -> Result<Parsed<Investor>> {
        let html = self.fetcher.fetch(&self.home_url)?;
        let parsed = directory::parse_investors(&html, &self.site_origin)?;
        log_counts("investors", &parsed);
        Ok(parsed)
    }

    /// Re-fetches the directory and resolves `name_fragment` against it.
    pub fn find_investor(&self, name_fragment: &str) -> Result<Investor> {
        let investors = self.list_investors()?.into_records();
        let investor = resolver::resolve(name_fragment, &investors)?;
        info!("Resolved {:?} to {} ({})", name_fragment, investor.name, investor.profile_url);
        Ok(investor.clone())
    }

    /// Holdings of the first investor whose name contains `name_fragment`.
    pub fn get_portfolio(&self, name_fragment: &str) -> Result<Parsed<Holding>> {
        let investor = self.find_investor(name_fragment)?;
        self.holdings_at(&investor.profile_url)
    }

    /// Holdings table at an already-known detail page URL.
    pub fn holdings_at(&self, profile_url: &str) -> Result<Parsed<Holding>> {
        let html = self.fetcher.fetch(profile_url)?;
        let parsed = portfolio::parse_holdings(&html)?;
        log_counts("holdings", &parsed);
        Ok(parsed)
    }
}

fn log_counts<T>(what: &str, parsed: &Parsed<T>) {
    if parsed.skipped.is_empty() {
        info!("Parsed {} {}", parsed.records.len(), what);
    } else {
        warn!(
            "Parsed {} {} ({} skipped)",
            parsed.records.len(),
            what,
            parsed.skipped.len()
        );
    }
}

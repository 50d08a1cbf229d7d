use std::env;

use job_scraper::headhunter::{HeadHunter, HeadHunterConfig};
use job_scraper::superjob::{SuperJob, SuperJobConfig};
use job_scraper::{Site, VacancySource};

use crate::types::{Error, Result};

pub const SUPERJOB_API_KEY: &str = "SUPERJOB_API_KEY";
/// Older name of the SuperJob key, still honoured in `.env` files
const SUPERJOB_API_KEY_LEGACY: &str = "X-API-APP-ID";

/// Settings of every supported site, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub headhunter: HeadHunterConfig,
    /// template for the SuperJob search, the api key is empty when none was configured
    pub superjob: SuperJobConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let superjob_api_key = lookup(SUPERJOB_API_KEY)
            .or_else(|| lookup(SUPERJOB_API_KEY_LEGACY))
            .map(|key| key.trim().to_owned())
            .unwrap_or_default();
        Self {
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::new(superjob_api_key),
        }
    }

    pub fn superjob(&self) -> Result<SuperJobConfig> {
        if self.superjob.api_key.is_empty() {
            return Err(Error::MissingApiKey(SUPERJOB_API_KEY));
        }
        Ok(self.superjob.clone())
    }

    pub fn source(&self, site: Site) -> Result<Box<dyn VacancySource>> {
        let source: Box<dyn VacancySource> = match site {
            Site::HeadHunter => Box::new(HeadHunter::new(self.headhunter.clone())?),
            Site::SuperJob => Box::new(SuperJob::new(self.superjob()?)?),
        };
        Ok(source)
    }
}

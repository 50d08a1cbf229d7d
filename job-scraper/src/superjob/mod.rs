//! Vacancy search on SuperJob (api.superjob.ru)

pub(crate) mod scraper;
pub(crate) mod types;

use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::api::{LanguageVacancies, VacancySource};
use crate::salary::{predict_local_salary, Estimate, SkipReason};
use crate::types::{Error, Result};
use crate::Site;
use types::Payment;

const API_KEY_HEADER: &str = "x-api-app-id";

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    /// secret key of the registered SuperJob application
    pub api_key: String,
    pub catalogue: u32,
    pub town: String,
    pub max_pages: u32,
    pub per_page: u32,
    pub currency: String,
    /// report title, names the town searched
    pub title: String,
}

impl SuperJobConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0".to_owned(),
            api_key,
            catalogue: 48,
            town: "Москва".to_owned(),
            max_pages: 5,
            per_page: 100,
            currency: "rub".to_owned(),
            title: "SuperJob Moscow".to_owned(),
        }
    }
}

pub struct SuperJob {
    client: Client,
    config: SuperJobConfig,
}

impl SuperJob {
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| Error::InvalidHeader(API_KEY_HEADER))?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .default_headers(headers)
            .build()?;
        Ok(Self { client, config })
    }
}

/// Estimate the salary of a SuperJob vacancy, only payments in `currency` count
pub fn predict_rub_salary(vacancy: &Value, currency: &str) -> Estimate {
    match Payment::deserialize(vacancy) {
        Ok(payment) => predict_local_salary(
            payment.currency.as_deref(),
            currency,
            payment.payment_from,
            payment.payment_to,
        ),
        Err(e) => Estimate::Skipped(SkipReason::Malformed(e.to_string())),
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn site(&self) -> Site {
        Site::SuperJob
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    async fn scrape_language(&self, language: &str) -> Result<LanguageVacancies> {
        let pages = scraper::scrape_pages(&self.client, &self.config, language);
        tokio::pin!(pages);
        let mut found = None;
        let mut vacancies = Vec::new();
        while let Some(page) = pages.try_next().await? {
            found.get_or_insert(page.total);
            vacancies.extend(page.objects);
        }
        let found = found.unwrap_or_default();
        log::info!(
            "superjob: retrieved {} of {} vacancies for {}",
            vacancies.len(),
            found,
            language
        );
        Ok(LanguageVacancies { found, vacancies })
    }

    fn estimate(&self, vacancy: &Value) -> Estimate {
        predict_rub_salary(vacancy, &self.config.currency)
    }
}

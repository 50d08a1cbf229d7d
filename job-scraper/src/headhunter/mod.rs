//! Vacancy search on HeadHunter (api.hh.ru)

pub(crate) mod scraper;
pub(crate) mod types;

use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::api::{LanguageVacancies, VacancySource};
use crate::salary::{predict_local_salary, Estimate, SkipReason};
use crate::types::Result;
use crate::Site;
use types::Salary;

/// Query parameters of a HeadHunter vacancy search
#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    /// prepended to the language name to form the search text
    pub search_prefix: String,
    pub area: u32,
    pub period_days: u32,
    pub max_pages: u32,
    pub per_page: u32,
    /// only salaries in this currency are estimated
    pub currency: String,
    /// report title, names the area searched
    pub title: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru".to_owned(),
            search_prefix: "Программист".to_owned(),
            area: 113,
            period_days: 30,
            max_pages: 20,
            per_page: 100,
            currency: "RUR".to_owned(),
            title: "HeadHunter Moscow".to_owned(),
        }
    }
}

pub struct HeadHunter {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = Client::builder().user_agent(crate::USER_AGENT).build()?;
        Ok(Self { client, config })
    }
}

/// Estimate the salary of a HeadHunter vacancy, only salaries in `currency` count
pub fn predict_rub_salary(vacancy: &Value, currency: &str) -> Estimate {
    let salary = match vacancy.get("salary") {
        None | Some(Value::Null) => return Estimate::Skipped(SkipReason::NoSalary),
        Some(salary) => salary,
    };
    match Salary::deserialize(salary) {
        Ok(salary) => {
            predict_local_salary(salary.currency.as_deref(), currency, salary.from, salary.to)
        }
        Err(e) => Estimate::Skipped(SkipReason::Malformed(e.to_string())),
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn site(&self) -> Site {
        Site::HeadHunter
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
            found.get_or_insert(page.found);
            vacancies.extend(page.items);
        }
        let found = found.unwrap_or_default();
        log::info!(
            "hh: retrieved {} of {} vacancies for {}",
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

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::Error;

    fn config(server: &MockServer) -> HeadHunterConfig {
        HeadHunterConfig {
            base_url: server.base_url(),
            ..Default::default()
        }
    }

    fn vacancy(currency: &str, from: Option<u64>, to: Option<u64>) -> Value {
        json!({
            "id": "1",
            "name": "Programmer",
            "salary": { "currency": currency, "from": from, "to": to, "gross": false },
        })
    }

    #[test]
    fn test_predict_rub_salary() {
        assert_eq!(
            predict_rub_salary(&vacancy("RUR", Some(90_000), Some(110_000)), "RUR"),
            Estimate::Salary(100_000)
        );
        assert_eq!(
            predict_rub_salary(&vacancy("RUR", None, Some(100_000)), "RUR"),
            Estimate::Salary(80_000)
        );
        assert_eq!(
            predict_rub_salary(&vacancy("EUR", Some(1_000), None), "RUR"),
            Estimate::Skipped(SkipReason::ForeignCurrency("EUR".to_owned()))
        );
    }

    #[test]
    fn test_predict_rub_salary_without_salary() {
        let no_salary = json!({ "id": "2", "salary": null });
        assert_eq!(
            predict_rub_salary(&no_salary, "RUR"),
            Estimate::Skipped(SkipReason::NoSalary)
        );
        assert_eq!(
            predict_rub_salary(&json!({ "id": "3" }), "RUR"),
            Estimate::Skipped(SkipReason::NoSalary)
        );
    }

    #[test]
    fn test_predict_rub_salary_malformed() {
        let malformed = json!({ "salary": { "currency": "RUR", "from": "a lot", "to": null } });
        assert!(matches!(
            predict_rub_salary(&malformed, "RUR"),
            Estimate::Skipped(SkipReason::Malformed(_))
        ));
    }

    #[test]
    fn test_title_comes_from_config() {
        let source = HeadHunter::new(HeadHunterConfig {
            area: 1,
            title: "HeadHunter Moscow city".to_owned(),
            ..Default::default()
        })
        .expect("client should build");
        assert_eq!(source.title(), "HeadHunter Moscow city");
        assert_eq!(
            HeadHunter::new(HeadHunterConfig::default()).unwrap().title(),
            "HeadHunter Moscow"
        );
    }

    #[tokio::test]
    async fn test_scrape_language_follows_pages() {
        let server = MockServer::start_async().await;
        let first = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/vacancies")
                    .query_param_exists("text")
                    .query_param("area", "113")
                    .query_param("period", "30")
                    .query_param("per_page", "100")
                    .query_param("page", "0");
                then.status(200).json_body(json!({
                    "items": [vacancy("RUR", Some(100_000), None), vacancy("RUR", None, None)],
                    "found": 3,
                    "pages": 2,
                    "page": 0,
                    "per_page": 100,
                }));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method(GET).path("/vacancies").query_param("page", "1");
                then.status(200).json_body(json!({
                    "items": [vacancy("USD", Some(2_000), None)],
                    "found": 4,
                    "pages": 2,
                    "page": 1,
                    "per_page": 100,
                }));
            })
            .await;

        let source = HeadHunter::new(config(&server)).expect("client should build");
        let result = source
            .scrape_language("Go")
            .await
            .expect("scrape should succeed");

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(result.found, 3, "found is taken from the first page");
        assert_eq!(result.vacancies.len(), 3);
    }

    #[tokio::test]
    async fn test_scrape_language_respects_page_cap() {
        let server = MockServer::start_async().await;
        let pages = server
            .mock_async(|when, then| {
                when.method(GET).path("/vacancies");
                then.status(200).json_body(json!({
                    "items": [vacancy("RUR", Some(1), Some(3))],
                    "found": 100_000,
                    "pages": 1_000,
                }));
            })
            .await;

        let source = HeadHunter::new(HeadHunterConfig {
            max_pages: 3,
            ..config(&server)
        })
        .expect("client should build");
        let result = source.scrape_language("Java").await.expect("scrape should succeed");

        pages.assert_hits_async(3).await;
        assert_eq!(result.vacancies.len(), 3);
        assert_eq!(result.found, 100_000);
    }

    #[tokio::test]
    async fn test_scrape_language_fails_on_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/vacancies");
                then.status(403).body("forbidden");
            })
            .await;

        let source = HeadHunter::new(config(&server)).expect("client should build");
        let result = source.scrape_language("Ruby").await;
        assert!(matches!(
            result,
            Err(Error::RequestNotOk(_, status)) if status.as_u16() == 403
        ));
    }
}

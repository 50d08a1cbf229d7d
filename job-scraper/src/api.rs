use async_trait::async_trait;
use serde_json::Value;

use crate::salary::Estimate;
use crate::types::Result;
use crate::Site;

/// All vacancies retrieved for one language query
#[derive(Debug, Default)]
pub struct LanguageVacancies {
    /// total number of matches as reported by the source
    pub found: u64,
    pub vacancies: Vec<Value>,
}

/// A job board that can be searched for vacancies per programming language
#[async_trait]
pub trait VacancySource: Send + Sync {
    fn site(&self) -> Site;

    /// Title of the report for this source, naming the area it searches
    fn title(&self) -> &str;

    /// Fetch every page of vacancies for `language`, up to the source's page cap.
    async fn scrape_language(&self, language: &str) -> Result<LanguageVacancies>;

    /// Estimate the salary of a single raw vacancy record.
    /// Never fails, a record that can't be estimated is reported as skipped.
    fn estimate(&self, vacancy: &Value) -> Estimate;
}

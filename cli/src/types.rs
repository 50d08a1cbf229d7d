use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Scrape error: {0}")]
    Scrape(#[from] job_scraper::Error),
    #[error("Environment variable '{0}' not set")]
    MissingApiKey(&'static str),
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

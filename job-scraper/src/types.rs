use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to scrape data from: '{0}', status: {1}")]
    RequestNotOk(String, reqwest::StatusCode),
    #[error("Invalid header value for '{0}'")]
    InvalidHeader(&'static str),
    #[error("Unknown site: '{0}'")]
    UnknownSite(String),
}

pub type Result<T> = std::result::Result<T, Error>;

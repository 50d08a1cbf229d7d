use async_stream::try_stream;
use futures::Stream;
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::headhunter::types::ApiResponse;
use crate::headhunter::HeadHunterConfig;
use crate::types::{Error, Result};

fn search_params(config: &HeadHunterConfig, language: &str, page: u32) -> [(&'static str, String); 5] {
    [
        ("text", format!("{} {}", config.search_prefix, language)),
        ("area", config.area.to_string()),
        ("period", config.period_days.to_string()),
        ("page", page.to_string()),
        ("per_page", config.per_page.to_string()),
    ]
}

async fn scrape_search_page(
    client: &Client,
    config: &HeadHunterConfig,
    language: &str,
    page: u32,
) -> Result<ApiResponse> {
    let url = format!("{}/vacancies", config.base_url);
    log::debug!(
        "requesting vacancies from hh, page: {}, language: {}",
        page,
        language
    );
    let resp = client
        .get(&url)
        .header(ACCEPT, "application/json")
        .query(&search_params(config, language, page))
        .send()
        .await?;
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "failed to retrieve vacancies for page: {}, language: {}, error resp body: {:?}",
            page,
            language,
            error_body,
        );
        return Err(Error::RequestNotOk(url, status));
    }

    let search: ApiResponse = resp.json().await?;
    log::debug!(
        "retrieved {} vacancies for page: {}, language: {}",
        search.items.len(),
        page,
        language
    );
    Ok(search)
}

/// Sequentially request result pages until the page cap is reached
/// or the service reports no further pages
pub(crate) fn scrape_pages<'a>(
    client: &'a Client,
    config: &'a HeadHunterConfig,
    language: &'a str,
) -> impl Stream<Item = Result<ApiResponse>> + Send + 'a {
    try_stream! {
        for page in 0..config.max_pages {
            let response = scrape_search_page(client, config, language, page).await?;
            let last_page = response.pages.map_or(false, |pages| page + 1 >= pages);
            yield response;
            if last_page {
                break;
            }
        }
    }
}

use async_stream::try_stream;
use futures::Stream;
use reqwest::Client;

use crate::superjob::types::ApiResponse;
use crate::superjob::SuperJobConfig;
use crate::types::{Error, Result};

fn search_params(config: &SuperJobConfig, language: &str, page: u32) -> [(&'static str, String); 5] {
    [
        ("catalogues", config.catalogue.to_string()),
        ("town", config.town.clone()),
        ("page", page.to_string()),
        ("count", config.per_page.to_string()),
        ("keyword", language.to_owned()),
    ]
}

async fn scrape_search_page(
    client: &Client,
    config: &SuperJobConfig,
    language: &str,
    page: u32,
) -> Result<ApiResponse> {
    let url = format!("{}/vacancies/", config.base_url);
    log::debug!(
        "requesting vacancies from superjob, page: {}, keyword: {}",
        page,
        language
    );
    let resp = client
        .get(&url)
        .query(&search_params(config, language, page))
        .send()
        .await?;
    let status = resp.status();
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "failed to retrieve vacancies for page: {}, keyword: {}, error resp body: {:?}",
            page,
            language,
            error_body,
        );
        return Err(Error::RequestNotOk(url, status));
    }

    let search: ApiResponse = resp.json().await?;
    log::debug!(
        "retrieved {} vacancies for page: {}, keyword: {}",
        search.objects.len(),
        page,
        language
    );
    Ok(search)
}

pub(crate) fn scrape_pages<'a>(
    client: &'a Client,
    config: &'a SuperJobConfig,
    language: &'a str,
) -> impl Stream<Item = Result<ApiResponse>> + Send + 'a {
    try_stream! {
        for page in 0..config.max_pages {
            let response = scrape_search_page(client, config, language, page).await?;
            let more = response.more;
            yield response;
            if !more {
                break;
            }
        }
    }
}

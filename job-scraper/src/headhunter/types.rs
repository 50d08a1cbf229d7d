use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) items: Vec<Value>,
    pub(crate) found: u64,
    /// number of result pages for the query, when reported
    pub(crate) pages: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct Salary {
    pub(crate) from: Option<u64>,
    pub(crate) to: Option<u64>,
    pub(crate) currency: Option<String>,
}

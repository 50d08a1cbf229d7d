use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub(crate) objects: Vec<Value>,
    pub(crate) total: u64,
    /// whether further pages exist for the query
    #[serde(default = "more_default")]
    pub(crate) more: bool,
}

fn more_default() -> bool {
    true
}

#[derive(Deserialize, Debug)]
pub(crate) struct Payment {
    pub(crate) currency: Option<String>,
    pub(crate) payment_from: Option<u64>,
    pub(crate) payment_to: Option<u64>,
}

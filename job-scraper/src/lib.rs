pub mod api;
pub mod headhunter;
pub mod salary;
pub mod superjob;
pub(crate) mod types;

use std::fmt::Display;
use std::str::FromStr;

pub use api::{LanguageVacancies, VacancySource};
pub use salary::{predict_salary, Estimate, SkipReason};
pub use types::{Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    HeadHunter,
    SuperJob,
}

impl Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Site::HeadHunter => write!(f, "hh"),
            Site::SuperJob => write!(f, "sj"),
        }
    }
}

impl FromStr for Site {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hh" | "headhunter" => Ok(Site::HeadHunter),
            "sj" | "superjob" => Ok(Site::SuperJob),
            _ => Err(Error::UnknownSite(s.to_owned())),
        }
    }
}

//! Turning a salary range into a single representative figure.

use std::fmt::Display;

/// Outcome of estimating the salary of a single vacancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Estimate {
    Salary(u64),
    Skipped(SkipReason),
}

/// Why a vacancy did not contribute to the average.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No salary given, or both bounds empty
    NoSalary,
    /// Salary is stated in a currency other than the local one
    ForeignCurrency(String),
    /// Salary fields could not be decoded
    Malformed(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoSalary => write!(f, "no salary"),
            SkipReason::ForeignCurrency(currency) => write!(f, "foreign currency '{}'", currency),
            SkipReason::Malformed(reason) => write!(f, "malformed salary: {}", reason),
        }
    }
}

impl From<Option<u64>> for Estimate {
    fn from(salary: Option<u64>) -> Self {
        match salary {
            Some(salary) => Estimate::Salary(salary),
            None => Estimate::Skipped(SkipReason::NoSalary),
        }
    }
}

/// Estimate a salary from an optional lower and upper bound.
///
/// A zero bound counts as absent. With only an upper bound the estimate is
/// 80% of it, with only a lower bound 120% of it, otherwise the midpoint.
/// Results are truncated.
pub fn predict_salary(from: Option<u64>, to: Option<u64>) -> Option<u64> {
    let from = from.filter(|&amount| amount != 0);
    let to = to.filter(|&amount| amount != 0);
    match (from, to) {
        (None, None) => None,
        (None, Some(to)) => Some((to as f64 * 0.8) as u64),
        (Some(from), None) => Some((from as f64 * 1.2) as u64),
        (Some(from), Some(to)) => Some(((from as u128 + to as u128) / 2) as u64),
    }
}

/// Shared extraction rule of both sources: only salaries in `local_currency`
/// are estimated.
pub(crate) fn predict_local_salary(
    currency: Option<&str>,
    local_currency: &str,
    from: Option<u64>,
    to: Option<u64>,
) -> Estimate {
    match currency {
        Some(currency) if currency == local_currency => predict_salary(from, to).into(),
        Some(currency) => Estimate::Skipped(SkipReason::ForeignCurrency(currency.to_owned())),
        None => Estimate::Skipped(SkipReason::NoSalary),
    }
}

use job_scraper::{Estimate, LanguageVacancies, VacancySource};

/// Salary statistics of one language on one site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    /// vacancies that yielded a salary estimate
    pub vacancies_processed: u64,
    /// `None` when no vacancy could be estimated
    pub average_salary: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalaryAverage {
    pub processed: u64,
    pub average: Option<u64>,
}

/// Average all estimated salaries, skipped estimates are ignored entirely.
pub fn average_salary<I>(estimates: I) -> SalaryAverage
where
    I: IntoIterator<Item = Estimate>,
{
    let mut total: u64 = 0;
    let mut processed: u64 = 0;
    for estimate in estimates {
        match estimate {
            Estimate::Salary(salary) => {
                total = total.saturating_add(salary);
                processed += 1;
            }
            Estimate::Skipped(reason) => log::trace!("skipping vacancy: {}", reason),
        }
    }
    let average = total.checked_div(processed);
    SalaryAverage { processed, average }
}

pub fn analyze(source: &dyn VacancySource, language: &LanguageVacancies) -> LanguageStats {
    let SalaryAverage { processed, average } = average_salary(
        language
            .vacancies
            .iter()
            .map(|vacancy| source.estimate(vacancy)),
    );
    if processed == 0 {
        log::warn!(
            "{}: none of {} vacancies had an estimable salary",
            source.site(),
            language.vacancies.len()
        );
    }
    LanguageStats {
        vacancies_found: language.found,
        vacancies_processed: processed,
        average_salary: average,
    }
}

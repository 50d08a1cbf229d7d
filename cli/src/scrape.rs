use futures::{stream, StreamExt, TryStreamExt};
use job_analyzer::{analyze, table_data, AsciiTable, LanguageStats};
use job_scraper::VacancySource;

pub const DEFAULT_LANGUAGES: [&str; 14] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
    "Shell",
    "Objective-C",
    "Scala",
    "Swift",
    "TypeScript",
];

/// Scrape and analyze every language on one site.
/// At most `workers` languages are in flight at once, results keep the order of `languages`.
pub async fn collect_stats(
    source: &dyn VacancySource,
    languages: &[String],
    workers: usize,
) -> job_scraper::Result<Vec<(String, LanguageStats)>> {
    stream::iter(languages)
        .map(move |language| async move {
            let vacancies = source.scrape_language(language).await?;
            let stats = analyze(source, &vacancies);
            log::info!(
                "{}: {} found, {} processed, average salary: {:?}, language: {}",
                source.site(),
                stats.vacancies_found,
                stats.vacancies_processed,
                stats.average_salary,
                language
            );
            Ok::<_, job_scraper::Error>((language.to_owned(), stats))
        })
        .buffered(workers.max(1))
        .try_collect()
        .await
}

pub async fn site_table(
    source: &dyn VacancySource,
    languages: &[String],
    workers: usize,
) -> job_scraper::Result<AsciiTable> {
    let stats = collect_stats(source, languages, workers).await?;
    Ok(AsciiTable::new(table_data(&stats), source.title()))
}

mod config;
mod scrape;
mod types;

use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;
use job_scraper::Site;

use crate::config::Config;
use crate::types::Result;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job sites to query, in order: hh (HeadHunter), sj (SuperJob). Defaults to both
    #[clap(long)]
    site: Vec<Site>,

    /// Programming languages to report on. Defaults to a list of 14 popular ones
    #[clap(long = "language")]
    languages: Vec<String>,

    /// Number of languages fetched concurrently per site
    #[clap(long, default_value_t = 1)]
    workers: usize,
}

/// Build one table per site and write them to `out`, nothing is written
/// unless every site succeeded
async fn run_with(config: &Config, args: Cli, out: &mut impl Write) -> Result<()> {
    let sites = if args.site.is_empty() {
        vec![Site::HeadHunter, Site::SuperJob]
    } else {
        args.site
    };
    let languages = if args.languages.is_empty() {
        scrape::DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
    } else {
        args.languages
    };
    let sources = sites
        .into_iter()
        .map(|site| config.source(site))
        .collect::<Result<Vec<_>>>()?;

    let mut tables = Vec::with_capacity(sources.len());
    for source in sources {
        log::info!("scraping {} languages from {}", languages.len(), source.site());
        tables.push(scrape::site_table(source.as_ref(), &languages, args.workers).await?);
    }
    for table in tables {
        writeln!(out, "{}", table)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let config = Config::from_env();
    if let Err(e) = run_with(&config, args, &mut io::stdout().lock()).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

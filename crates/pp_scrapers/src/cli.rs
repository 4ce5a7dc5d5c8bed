use clap::{Args, Subcommand};
use pp_core::{ExportOptions, PageFetcher, RecencyWindow, ReleaseExporter, Result};
use pp_export::{create_exporter, ExportFormat, MemoryExporter, DEFAULT_OUTPUT};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::fetch::browser::DEFAULT_WEBDRIVER_URL;
use crate::fetch::{BrowserFetcher, HttpFetcher};
use crate::manager::{aggregate, RunConfig, ScraperManager};
use pp_core::recency::DEFAULT_WINDOW_DAYS;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// A duration such as `15s`, `2m`, `1m30s`; a bare number is seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut seen_number = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
                seen_number = true;
            } else if c.is_whitespace() {
                continue;
            } else {
                let num: u64 = current_number
                    .parse()
                    .map_err(|_| format!("Missing number before '{}'", c))?;
                let unit = match c {
                    's' => 1,
                    'm' => 60,
                    'h' => 3600,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = num
                    .checked_mul(unit)
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(|| format!("Duration too large: {}", s))?;
                current_number.clear();
            }
        }

        if !current_number.is_empty() {
            let num = current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            total_seconds = total_seconds
                .checked_add(num)
                .ok_or_else(|| format!("Duration too large: {}", s))?;
        }

        if !seen_number {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// Sources to scrape (pfizer, merck, lilly). All sources when omitted.
    pub sources: Vec<String>,

    /// Spreadsheet to write; an existing file is overwritten
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format; inferred from the output extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Leave the Tags column out of the output
    #[arg(long)]
    pub no_tags: bool,

    /// Keep releases dated within this many days of today
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS, conflicts_with = "calendar_years")]
    pub recency_days: u32,

    /// Use a calendar-correct window of this many years instead of raw days
    #[arg(long)]
    pub calendar_years: Option<u32>,

    /// chromedriver endpoint used for client-side rendered sources
    #[arg(long, default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// How long to wait for a rendered page's results to appear (e.g. 15s)
    #[arg(long, default_value = "15s")]
    pub ready_timeout: HumanDuration,

    /// Pause between listing pages of the same source, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Scrape and report counts without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl ScrapeArgs {
    pub fn window(&self) -> RecencyWindow {
        match self.calendar_years {
            Some(years) => RecencyWindow::CalendarYears(years),
            None => RecencyWindow::Days(self.recency_days),
        }
    }

    pub fn export_format(&self) -> ExportFormat {
        self.format.unwrap_or_else(|| ExportFormat::from_path(&self.output))
    }

    pub fn exporter(&self) -> Box<dyn ReleaseExporter> {
        if self.dry_run {
            return Box::new(MemoryExporter::new());
        }
        let options = ExportOptions {
            include_tags: !self.no_tags,
        };
        create_exporter(self.export_format(), &self.output, options)
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            window: self.window(),
            page_delay: Duration::from_millis(self.delay_ms),
            ..RunConfig::default()
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ScraperCommands {
    /// Scrape press releases and write them to a spreadsheet
    Scrape(ScrapeArgs),
    /// List available sources
    List,
}

pub async fn handle_command(command: ScraperCommands) -> Result<()> {
    match command {
        ScraperCommands::Scrape(args) => scrape(args).await,
        ScraperCommands::List => list(),
    }
}

async fn scrape(args: ScrapeArgs) -> Result<()> {
    let http: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new(HTTP_TIMEOUT)?);
    let rendered: Arc<dyn PageFetcher> = Arc::new(BrowserFetcher::new(
        args.webdriver_url.clone(),
        args.ready_timeout.0,
    ));
    let manager = ScraperManager::new(http, rendered, args.run_config());

    let runs = manager.scrape(&args.sources).await?;
    let counts: Vec<_> = runs
        .iter()
        .map(|run| (run.source.name, run.releases.len()))
        .collect();
    let releases = aggregate(runs);

    let exporter = args.exporter();
    exporter.export(&releases).await?;

    for (name, count) in counts {
        println!("Scraped {} {} press releases.", count, name);
    }
    if args.dry_run {
        println!("Dry run, {} releases not saved", releases.len());
    } else {
        println!("Saved {}", exporter.destination());
    }
    info!(total = releases.len(), "✅ Done");
    Ok(())
}

fn list() -> Result<()> {
    println!("Available sources:");
    for factory in crate::scrapers::get_scraper_factories() {
        let scraper = factory()?;
        let metadata = scraper.source_metadata();
        let config = &scraper.source().config;
        println!(
            "  {:<8} {} (up to {} pages)",
            metadata.cli_name, metadata, config.pagination.max_pages
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: ScraperCommands,
    }

    fn parse(args: &[&str]) -> std::result::Result<ScraperCommands, clap::Error> {
        let mut argv = vec!["pp"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).map(|cli| cli.command)
    }

    #[test]
    fn test_human_duration() {
        assert_eq!("15s".parse::<HumanDuration>().unwrap().0, Duration::from_secs(15));
        assert_eq!("1m30s".parse::<HumanDuration>().unwrap().0, Duration::from_secs(90));
        assert_eq!("20".parse::<HumanDuration>().unwrap().0, Duration::from_secs(20));
        assert!("".parse::<HumanDuration>().is_err());
        assert!("5x".parse::<HumanDuration>().is_err());
        assert!("s".parse::<HumanDuration>().is_err());
    }

    #[test]
    fn test_huge_duration_is_an_error() {
        assert!("99999999999999999h".parse::<HumanDuration>().is_err());
        assert!("18446744073709551615s1s".parse::<HumanDuration>().is_err());
        assert!("99999999999999999999".parse::<HumanDuration>().is_err());
        assert!(parse(&["scrape", "--ready-timeout", "99999999999999999h"]).is_err());
    }

    #[test]
    fn test_scrape_defaults() {
        let ScraperCommands::Scrape(args) = parse(&["scrape"]).unwrap() else {
            panic!("expected scrape");
        };
        assert!(args.sources.is_empty());
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.export_format(), ExportFormat::Xlsx);
        assert_eq!(args.window(), RecencyWindow::Days(1825));
        assert_eq!(args.ready_timeout.0, Duration::from_secs(15));
        assert!(!args.no_tags);
        assert!(!args.dry_run);
        assert_eq!(args.exporter().destination(), DEFAULT_OUTPUT);
    }

    #[test]
    fn test_dry_run_keeps_results_in_memory() {
        let ScraperCommands::Scrape(args) = parse(&["scrape", "--dry-run", "-o", "x.csv"]).unwrap() else {
            panic!("expected scrape");
        };
        assert_eq!(args.exporter().destination(), "memory://");
    }

    #[test]
    fn test_scrape_options() {
        let ScraperCommands::Scrape(args) = parse(&[
            "scrape", "pfizer", "merck", "-o", "out.csv", "--calendar-years", "5", "--no-tags",
        ])
        .unwrap() else {
            panic!("expected scrape");
        };
        assert_eq!(args.sources, vec!["pfizer", "merck"]);
        assert_eq!(args.export_format(), ExportFormat::Csv);
        assert_eq!(args.window(), RecencyWindow::CalendarYears(5));
        assert!(args.no_tags);
    }

    #[test]
    fn test_window_flags_conflict() {
        assert!(parse(&["scrape", "--recency-days", "30", "--calendar-years", "1"]).is_err());
    }

    #[test]
    fn test_list_runs() {
        assert!(matches!(parse(&["list"]).unwrap(), ScraperCommands::List));
        assert!(list().is_ok());
    }
}

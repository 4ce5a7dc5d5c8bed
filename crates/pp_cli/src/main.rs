use clap::Parser;
use pp_core::Result;
use pp_scrapers::logging::init_logging;
use pp_scrapers::{handle_command, ScraperCommands};
use tracing::debug;

/// Collects recent pharmaceutical press releases into one spreadsheet.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: ScraperCommands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(command = ?cli.command, "Parsed command line");

    handle_command(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["pp", "scrape", "pfizer", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, ScraperCommands::Scrape(ref args) if args.sources == ["pfizer"]));
    }
}

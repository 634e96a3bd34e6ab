//! Course Catalog CLI
//!
//! Loads the whole catalog from the configured store, then lists, searches
//! or browses it interactively.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use course_catalog::{
    app::{BROWSE_HELP, BrowseCommand, Catalog},
    error::{AppError, Result},
    models::{Config, FilterQuery},
    pipeline,
    render::{render_choices, render_detail, render_groups, render_summary},
    services::PostgrestSource,
};

/// Course Catalog - browse a hosted course-section catalog
#[derive(Parser, Debug)]
#[command(name = "catalog", version, about = "Browse a hosted course catalog")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "catalog.toml")]
    config: PathBuf,

    /// Store base URL (overrides config file and CATALOG_STORE_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Public API key (overrides config file and CATALOG_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the store is reachable and show the row count
    Ping,

    /// List courses matching the given filters
    List {
        /// Free-text search (title, subject, number, instructor, CRN)
        #[arg(short, long)]
        search: Option<String>,

        /// Exact term description, e.g. "Spring 2026"
        #[arg(short, long)]
        term: Option<String>,

        /// Exact subject code
        #[arg(long)]
        subject: Option<String>,

        /// Highlight a section and show its details
        #[arg(long, conflicts_with = "json")]
        select: Option<String>,

        /// Print the grouped result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for one section
    Show {
        /// Course reference number
        crn: String,
    },

    /// List available terms and subjects
    Filters,

    /// Browse interactively
    Browse,

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print the result count, the course list, and the selected section.
fn print_view(catalog: &Catalog) {
    println!("{}", render_summary(&catalog.summary()));
    print!("{}", render_groups(&catalog.groups(), catalog.selected_crn()));
    if let Some(section) = catalog.selected() {
        println!();
        print!("{}", render_detail(section));
    }
}

/// Read commands from stdin until `:quit` or end of input.
fn browse(catalog: &mut Catalog) -> Result<()> {
    println!("{BROWSE_HELP}");
    println!();
    print_view(catalog);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("catalog> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = BrowseCommand::parse(&line);
        match &command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => println!("{BROWSE_HELP}"),
            BrowseCommand::Filters => print!("{}", render_choices(catalog.choices())),
            BrowseCommand::Unknown(input) => {
                println!("Unknown command: {input} (type :help)");
            }
            BrowseCommand::Select(crn) => {
                if command.apply(catalog) {
                    print_view(catalog);
                } else {
                    println!("CRN {crn} is not in the current results");
                }
            }
            _ => {
                command.apply(catalog);
                print_view(catalog);
            }
        }
    }

    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env();
    config.apply_overrides(cli.url.clone(), cli.api_key.clone());
    log::debug!("Loaded configuration from {}", cli.config.display());

    if let Command::Validate = cli.command {
        log::info!("Validating configuration...");
        if let Err(e) = config.validate() {
            log::error!("Config validation failed: {}", e);
            return Err(e);
        }
        log::info!("✓ Store: {} (table {})", config.store.url, config.store.table);
        log::info!("✓ Page size: {}", config.store.page_size);
        log::info!("✓ Timeout: {}s", config.http.timeout_secs);
        log::info!("All validations passed!");
        return Ok(());
    }

    config.validate().inspect_err(|e| log::error!("{e}"))?;
    let source = PostgrestSource::from_config(&config)?;
    let page_size = config.store.page_size;

    match cli.command {
        Command::Ping => {
            pipeline::run_probe(&source).await?;
        }

        Command::List {
            search,
            term,
            subject,
            select,
            json,
        } => {
            let mut catalog = pipeline::run_load(&source, page_size).await?;
            catalog.set_query(FilterQuery {
                text: search,
                term_desc: term,
                subject,
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&catalog.groups())?);
                return Ok(());
            }

            if let Some(crn) = select {
                if catalog.select(&crn).is_none() {
                    log::warn!("CRN {crn} is not in the current results");
                }
            }
            print_view(&catalog);
        }

        Command::Show { crn } => {
            let catalog = pipeline::run_load(&source, page_size).await?;
            let section = catalog
                .find(&crn)
                .ok_or_else(|| AppError::validation(format!("No section with CRN {crn}")))?;
            print!("{}", render_detail(section));
        }

        Command::Filters => {
            let catalog = pipeline::run_load(&source, page_size).await?;
            print!("{}", render_choices(catalog.choices()));
        }

        Command::Browse => {
            let mut catalog = pipeline::run_load(&source, page_size).await?;
            browse(&mut catalog)?;
        }

        Command::Validate => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_flag_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["catalog", "list", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Command::List { .. }));
    }

    #[test]
    fn select_conflicts_with_json() {
        let err = Cli::try_parse_from(["catalog", "list", "--json", "--select", "40123"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}

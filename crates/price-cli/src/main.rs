//! Price Machine CLI
//!
//! Command-line tool for searching and exporting aggregated product price lists.

use clap::{Args, Parser, Subcommand};
use price_core::{find_price_files, render_hits, run_session, PriceConfig, PriceList, SearchResult};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "price-machine")]
#[command(about = "Product price list aggregator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that loads price files
#[derive(Args)]
struct LoadArgs {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root directory to scan (overrides the config file)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// File name mask, e.g. "price*.csv" (overrides the config file)
    #[arg(short, long)]
    mask: Option<String>,
}

impl LoadArgs {
    fn resolve(&self) -> price_core::Result<PriceConfig> {
        let mut config = match &self.config {
            Some(path) => PriceConfig::load(path)?,
            None => PriceConfig::default(),
        };
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(mask) = &self.mask {
            config.file_mask = mask.clone();
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load price files, search interactively, then export to HTML
    Run {
        #[command(flatten)]
        load: LoadArgs,

        /// HTML output path (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a single search and print the matches
    Search {
        #[command(flatten)]
        load: LoadArgs,

        /// Text to look for in product names
        #[arg(short, long)]
        query: String,
    },

    /// Load price files and export them to HTML
    Export {
        #[command(flatten)]
        load: LoadArgs,

        /// HTML output path (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the files that match the mask
    Scan {
        #[command(flatten)]
        load: LoadArgs,
    },

    /// Write a configuration file with the default settings
    InitConfig {
        /// Output path for the configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> price_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { load, output } => cmd_run(&load, output),
        Commands::Search { load, query } => cmd_search(&load, &query),
        Commands::Export { load, output } => cmd_export(&load, output),
        Commands::Scan { load } => cmd_scan(&load),
        Commands::InitConfig { output } => cmd_init_config(&output),
    }
}

fn cmd_run(load: &LoadArgs, output: Option<PathBuf>) -> price_core::Result<()> {
    let config = load.resolve()?;
    let list = PriceList::load(&config)?;

    let stdin = io::stdin();
    let session = run_session(&list, stdin.lock(), io::stdout());
    match &session {
        Ok(summary) => log::debug!("session finished after {} search(es)", summary.searches),
        Err(e) => log::error!("ERROR IoError: session ended early: {}", e),
    }

    // Export runs once the loop is over, however it ended
    let output = output.unwrap_or(config.output);
    let written = list.export_html(&output)?;
    println!("Exported to file: {}", written.display());
    println!("Done.");

    session.map(|_| ()).map_err(Into::into)
}

fn cmd_search(load: &LoadArgs, query: &str) -> price_core::Result<()> {
    let config = load.resolve()?;
    let list = PriceList::load(&config)?;

    match list.find_text(query) {
        SearchResult::NoResults => println!("No results found."),
        SearchResult::Found(hits) => print!("{}", render_hits(&hits)),
    }

    Ok(())
}

fn cmd_export(load: &LoadArgs, output: Option<PathBuf>) -> price_core::Result<()> {
    let config = load.resolve()?;
    let list = PriceList::load(&config)?;

    let output = output.unwrap_or(config.output);
    let written = list.export_html(&output)?;
    println!("Exported {} rows to {}", list.len(), written.display());

    let report = list.report();
    if !report.issues.is_empty() {
        println!("\nSkipped or incomplete files ({}):", report.issues.len());
        for issue in &report.issues {
            println!("  [{}] {}: {}", issue.category, issue.path.display(), issue.message);
        }
    }

    Ok(())
}

fn cmd_scan(load: &LoadArgs) -> price_core::Result<()> {
    let config = load.resolve()?;
    let result = find_price_files(&config.root, &config.file_mask)?;

    println!("Scanned {}:", result.root.display());
    for path in &result.files {
        println!("  {}", path.display());
    }
    println!();
    println!("Found {} files", result.total_files);

    Ok(())
}

fn cmd_init_config(output: &Path) -> price_core::Result<()> {
    let config = PriceConfig::default();
    config.save(output)?;

    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the file to adjust the root, mask and column names, then run:");
    println!("  price-machine run --config {}", output.display());

    Ok(())
}

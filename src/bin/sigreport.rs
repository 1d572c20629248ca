// src/bin/sigreport.rs
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use sigreport_core::ingest;
use sigreport_core::report::{self, Tally};
use sigreport_core::source::{DataSource, FileSource, NetworkSource, DEFAULT_PETITION_ID};

#[derive(Parser)]
#[command(name = "sigreport", version, about = "Petition signature CSV reports")]
struct Cli {
    /// Read the petition document from a local JSON file instead of the
    /// petitions site
    file: Option<PathBuf>,
    /// Petition id to download
    #[arg(long, default_value_t = DEFAULT_PETITION_ID)]
    petition: u64,
    /// Directory the three CSV reports are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Request timeout for the download, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    /// Print per-bucket signature counts
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let doc = match &cli.file {
        Some(path) => FileSource::new(path.clone()).fetch()?,
        None => {
            let source = NetworkSource::new(cli.petition, Duration::from_secs(cli.timeout_secs));
            if cli.verbose {
                println!("downloading {}", source.url());
            }
            source.fetch()?
        }
    };

    let (countries, constituencies) = ingest::collections(&doc)?;
    let tally = Tally::compute(&countries, &constituencies);

    if cli.verbose {
        println!(
            "{} countries, {} constituencies ingested",
            countries.len(),
            constituencies.len()
        );
        println!("Scottish constituencies: {}", tally.scottish_constituencies);
        println!("rUK constituencies:      {}", tally.ruk_constituencies);
        println!("Rest of world:           {}", tally.rest_of_world);
    }

    let written = report::write_all(&cli.out_dir, &tally, &countries, &constituencies)?;
    for path in written {
        println!("{} {}", "wrote".green().bold(), path.display());
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use jobcount_rs::{Client, Config, DEFAULT_COUNTRIES, OutputPaths, report};

/// Count "Innovation Manager" job postings per country via the LinkedIn job search API.
///
/// Reads the bearer token from LINKEDIN_ACCESS_TOKEN and writes results.csv and
/// results.png to the current directory, replacing earlier runs.
#[derive(Parser, Debug)]
#[command(name = "jobcount", version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let client = Client::new(&config)?;
    let paths = OutputPaths::default();

    let table = jobcount_rs::run(&DEFAULT_COUNTRIES, &client, &paths)?;

    println!(
        "\nResults saved to {} and {}",
        paths.csv.display(),
        paths.chart.display()
    );
    println!("\nSummary of findings:");
    print!("{}", report::render_table(&table));
    Ok(())
}

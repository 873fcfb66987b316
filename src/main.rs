use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use staffvisor::{Config, scenario};

#[derive(Parser, Debug)]
#[command(name = "staffvisor", version, about = "Runs the year-end lay-off scenario")]
struct Cli {
    /// Evaluation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let cfg = Config { as_of: cli.as_of };
    let report = scenario::run(&cfg);

    tracing::info!(
        department = ?report.department,
        club = ?report.club,
        "scenario finished"
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

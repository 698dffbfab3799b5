use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use growthanalyzer::{AnalysisPipeline, Config};

#[derive(Parser, Debug)]
#[command(name = "growthanalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Rank learners by self-assessed skill growth")]
struct Args {
    /// Directory of ability self-assessment reports
    #[arg(long)]
    ability_dir: Option<PathBuf>,

    /// Directory of process narrative reports
    #[arg(long)]
    process_dir: Option<PathBuf>,

    /// Output file for the ranked selection
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of learners to select
    #[arg(long)]
    top: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("growthanalyzer=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration; CLI flags override the environment
    let mut config = Config::from_env()?;
    if let Some(dir) = args.ability_dir {
        config.ability_dir = dir;
    }
    if let Some(dir) = args.process_dir {
        config.process_dir = dir;
    }
    if let Some(path) = args.output {
        config.output_file = path;
    }
    if let Some(count) = args.top {
        config.top_count = count;
    }

    let output_file = config.output_file.clone();

    // Run analysis
    let pipeline = AnalysisPipeline::new(config);
    let report = pipeline.run()?;

    tracing::info!(
        "Found {} learners. Selected top {}.",
        report.total_qualifying,
        report.selected.len()
    );

    report.write_json(&output_file)?;
    tracing::info!("Saved to {}", output_file.display());

    Ok(())
}

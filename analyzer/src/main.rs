use anyhow::Context;
use clap::Parser;
use generator::profile::build_sample_block_from_config;
use statcore::block::SampleBlock;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use workflow::config::AnalysisConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the block-statistics core")]
struct Args {
    /// Load an analysis config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Load a sample block from YAML instead of generating one
    #[arg(long)]
    block: Option<PathBuf>,
    #[arg(long, default_value_t = 1024)]
    block_size: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Append a JSON summary line to the report log
    #[arg(long, default_value_t = false)]
    report: bool,
}

fn load_sample_block(path: &Path) -> anyhow::Result<SampleBlock> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading sample block {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing sample block {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        AnalysisConfig::load(path)?
    } else {
        AnalysisConfig::from_args(args.block_size, args.seed)
    };

    let runner = Runner::new(config.clone());
    let block = if let Some(path) = args.block.as_deref() {
        load_sample_block(path)?
    } else {
        build_sample_block_from_config(&config.to_generator_config())?
    };

    let result = runner.execute(&block)?;

    println!(
        "Block run -> variance {:.6}, block size {}, degenerate {}",
        result.variance, result.block_size, result.degenerate
    );

    if args.report {
        let line = serde_json::to_string(&result).context("serializing run summary")?;
        let report_path = PathBuf::from("tools/data/variance_report.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
    }

    let (processed, degenerate, rejected) = runner.counters();
    log::info!(
        "block counters: processed {} degenerate {} rejected {}",
        processed,
        degenerate,
        rejected
    );

    Ok(())
}

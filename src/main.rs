use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use marketminer::{
    apriori,
    loader::{load_transactions, InputFormat},
    output::{save_output, OutputFormat},
    MinerConfig, Pruning,
};

#[derive(Debug, Parser)]
#[command(
    name = "marketminer",
    about = "Association rule mining with the Apriori algorithm",
    after_help = "Examples:\n  marketminer --file-path baskets.csv --min-support 2 --min-confidence 0.6 --output-format json"
)]
struct Cli {
    #[arg(long, alias = "file_path", help = "Path to the file containing transactions")]
    file_path: PathBuf,
    #[arg(long, alias = "min_support", help = "Minimum support count")]
    min_support: u32,
    #[arg(long, alias = "min_confidence", help = "Minimum confidence")]
    min_confidence: f64,
    #[arg(long, alias = "output_format", value_enum, help = "Output format")]
    output_format: OutputFormat,
    #[arg(
        long,
        alias = "output_dir",
        default_value = "output",
        help = "Directory the output file is written to"
    )]
    output_dir: PathBuf,
    #[arg(
        long,
        alias = "input_format",
        value_enum,
        help = "Input format, guessed from the file extension if omitted"
    )]
    input_format: Option<InputFormat>,
    #[arg(
        long,
        value_enum,
        default_value = "weak",
        help = "Candidate pruning; `full` also drops candidates with an infrequent subset"
    )]
    pruning: Pruning,
    #[arg(long, alias = "max_len", help = "Largest itemset size to mine")]
    max_len: Option<usize>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = MinerConfig::new(cli.min_support, cli.min_confidence)
        .with_pruning(cli.pruning)
        .with_max_len(cli.max_len);
    config.validate()?;

    let input_format = cli
        .input_format
        .unwrap_or_else(|| InputFormat::from_path(&cli.file_path));
    let transactions = load_transactions(&cli.file_path, input_format)
        .with_context(|| format!("failed to load {}", cli.file_path.display()))?;

    let mined = apriori(transactions, &config)?;
    info!(
        frequent_itemsets = mined.frequent_itemsets.len(),
        rules = mined.rule_set.rules.len(),
        missing_antecedents = mined.rule_set.missing_antecedents,
        "mining finished"
    );

    save_output(&mined.report(), &cli.output_dir, cli.output_format)
        .with_context(|| format!("failed to write to {}", cli.output_dir.display()))?;

    Ok(())
}


fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

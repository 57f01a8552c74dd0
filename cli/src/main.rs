pub mod commands;

use std::process::ExitCode;

use clap::Parser;
use commands::Commands;
use log::{debug, error, info, warn};
use shared::{config::Config, dtos::report::Report, env, logger};

/// 🧮 Complex numbers on the command line
///
/// Arithmetic, branch-aware logarithms and powers, curve lengths and
/// rational function simplification.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 🧾 Print every evaluation as a JSON report
    #[arg(long, global = true)]
    json: bool,

    /// 🔍 Decimal places shown for complex results, defaults to
    /// COMPLEX_DISPLAY_DECIMALS
    #[arg(short, long, global = true)]
    decimals: Option<usize>,

    #[clap(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    env::init();
    let config = Config::from_env();
    logger::init(config.log_level);
    for rejected in &config.rejected {
        warn!("Ignoring malformed setting {}", rejected);
    }

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    let decimals = cli.decimals.unwrap_or(config.display_decimals);
    let evaluations = cli.command.run(&config);
    info!("{} evaluation(s) computed", evaluations.len());

    let mut failed = false;
    for evaluation in &evaluations {
        if evaluation.is_failure() {
            error!("{} failed", evaluation.operation);
            failed = true;
        }

        if !cli.json {
            println!("{}", evaluation.render(decimals));
            continue;
        }
        match evaluation.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize the evaluation: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

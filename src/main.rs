use std::process;

use clap::Parser;

use leibniz_pi::{Estimate, EstimatorConfig, PiEstimator};
use leibniz_pi::{DEFAULT_TOTAL_TERMS, DEFAULT_WORKER_COUNT};

#[derive(Parser)]
#[command(name = "leibniz-pi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate pi from the Leibniz series on parallel worker threads", long_about = None)]
struct Cli {
    /// Number of series terms to split across the workers
    #[arg(long, default_value_t = DEFAULT_TOTAL_TERMS)]
    terms: u64,

    /// Number of worker threads
    #[arg(long, default_value_t = DEFAULT_WORKER_COUNT)]
    workers: usize,
}

fn main() {
    env_logger::init();
    let cli: Cli = Cli::parse();

    let config: EstimatorConfig = EstimatorConfig::new(cli.terms, cli.workers);
    let estimator: PiEstimator = PiEstimator::new(config);

    match estimator.estimate() {
        Ok(Estimate { value, .. }) => println!("{:.6}", value),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

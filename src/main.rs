use airnet_scenegen::{driver, logger};
use clap::Parser;
use std::path::PathBuf;

/// Generates labeled surveillance-network scenarios for the downstream
/// graph-learning pipeline.
#[derive(Parser, Debug)]
#[command(name = "airnet_scenegen")]
struct Args {
    /// Number of scenarios to generate.
    #[arg(long, default_value_t = 1000)]
    num_scenarios: u32,

    /// Directory the scenario files are written to (created if absent).
    #[arg(long, default_value = "final_scenarios_core")]
    output_dir: PathBuf,

    /// Base seed; scenario i is generated from seed base_seed + i.
    #[arg(long, default_value_t = 42)]
    base_seed: u64,
}

fn main() {
    logger::init();

    let args = Args::parse();
    log::info!("Generating {} scenarios into '{}' (base seed {}).", args.num_scenarios, args.output_dir.display(), args.base_seed);

    if let Err(e) = driver::generate_dataset(args.num_scenarios, &args.output_dir, args.base_seed) {
        log::error!("Dataset generation failed: {}", e);
        std::process::exit(1);
    }
}

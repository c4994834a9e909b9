//! RV32I pipeline simulator CLI.
//!
//! This binary runs a hex memory image to completion. It performs:
//! 1. **Input:** Reads the image from a file, or from stdin when the path is absent or `-`.
//! 2. **Configuration:** Starts from defaults, then applies a JSON config file and flag overrides.
//! 3. **Output:** Prints the low byte of `a0` to stdout; logs and statistics go to stderr.

use std::io::Read;
use std::path::PathBuf;
use std::{fs, io, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32pipe_core::common::SimError;
use rv32pipe_core::{SimConfig, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rv32pipe",
    author,
    version,
    about = "Cycle-accurate 5-stage pipelined RV32I simulator",
    long_about = "Run a hex memory image until it stores to the exit port, then print the low byte of a0.\n\nExamples:\n  rv32pipe program.data\n  rv32pipe --stats < program.data\n  RUST_LOG=debug rv32pipe program.data"
)]
struct Cli {
    /// Hex memory image (reads stdin when absent or `-`).
    image: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Trace every stage of every cycle to stderr.
    #[arg(long)]
    trace: bool,

    /// Print simulation statistics to stderr after the run.
    #[arg(long)]
    stats: bool,

    /// Give up after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Builds the configuration, runs the image, and returns the result byte.
fn run(cli: &Cli) -> Result<u8, SimError> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_json(&fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };
    if cli.trace {
        config.general.trace = true;
    }
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }

    init_logging(config.general.trace);

    let image = read_image(cli.image.as_ref())?;
    let mut sim = Simulator::from_image(config, &image)?;
    let outcome = sim.run();

    if cli.stats {
        sim.stats().print();
    }
    if outcome.is_err() && sim.config().general.trace {
        sim.cpu.dump_state();
    }
    outcome
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` selects the filter (default `warn`); tracing forces `trace`.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

/// Reads the image text from `path`, or from stdin for `None` and `-`.
fn read_image(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            let _ = io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

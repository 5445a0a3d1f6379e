//! Random-sheet sweep CLI.
//!
//! Evaluates the recommender over random sheets and outputs one JSONL record
//! per sheet and shooting side.
//!
//! Usage:
//!   cargo run --release --bin sweep -- [OPTIONS]
//!
//! Options:
//!   --sheets N      Number of sheets to evaluate (default: 1000)
//!   --max-stones N  Maximum stones per sheet (default: 16)
//!   --threads N     Number of parallel threads (default: 4)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use hammer::sweep::{self, SweepConfig};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = SweepConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sheets" => {
                i += 1;
                config.num_sheets = flag_value(&args, i, "--sheets");
            }
            "--max-stones" => {
                i += 1;
                config.max_stones = flag_value(&args, i, "--max-stones");
            }
            "--threads" => {
                i += 1;
                config.threads = flag_value(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = flag_value(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                output_path = Some(flag_value(&args, i, "--output"));
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !quiet {
        eprintln!(
            "Sweep: {} sheets, up to {} stones, {} threads",
            config.num_sheets, config.max_stones, config.threads
        );
    }

    let start = Instant::now();
    let records = match sweep::run_sweep(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("failed to start worker pool: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if !quiet {
        let summary = sweep::summarize(&records);
        eprintln!(
            "Evaluated {} shots in {:.2}s",
            records.len(),
            elapsed.as_secs_f64()
        );
        eprintln!(
            "  draw {}  takeout {}  guard {}  (search fallbacks: {})",
            summary.draws, summary.takeouts, summary.guards, summary.fallbacks
        );
    }

    match output_path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            sweep::write_jsonl(&records, &mut writer)?;
            if !quiet {
                eprintln!("Wrote {} records to {}", records.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            sweep::write_jsonl(&records, &mut writer)?;
        }
    }

    Ok(())
}

/// Parses the value following a flag, exiting with usage on failure.
fn flag_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("invalid {} value", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: sweep [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --sheets N       Number of sheets to evaluate (default: 1000)");
    eprintln!("  --max-stones N   Maximum stones per sheet (default: 16)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}

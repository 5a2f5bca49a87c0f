//! XML Balancer CLI
//!
//! Command-line interface for moving game XML record data to and from a CSV
//! file.
//!
//! # Usage
//!
//! ```bash
//! balancer r outfits.csv   # read dat/outfits/**/*.xml into outfits.csv
//! balancer w outfits.csv   # write outfits.csv back into the XML files
//! ```
//!
//! Run from the game data root so the record pattern resolves. Set `RUST_LOG`
//! (for example `RUST_LOG=debug`) for per-file logging.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed XML or CSV, write failure, etc.)

use std::process;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use xml_balancer::cli::{self, Mode};
use xml_balancer::{create_conversion, BalancerConfig};

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    match args.mode {
        Mode::Read => info!("Reading from XML files to {}!", args.filename.display()),
        Mode::Write => info!("Writing to XML files from {}!", args.filename.display()),
    }

    let conversion = create_conversion(args.mode, BalancerConfig::default());
    let report = match conversion.run(&args.filename) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if args.mode == Mode::Write {
        info!(
            "{} file(s) written, {} without a matching row",
            report.files_written, report.files_skipped
        );
    }
}

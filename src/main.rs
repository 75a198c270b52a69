//! snapguard entrypoint.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use snapguard::config::Config;
use snapguard::report::{check_names, render, write_report};
use snapguard::Platform;

/// CLI arguments for the snapshot name guard.
#[derive(Parser, Debug)]
#[command(
    name = "snapguard",
    version,
    about = "Check snapshot names before they become storage paths"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

/// Exit status when at least one name is rejected.
const EXIT_REJECTED: u8 = 1;
/// Exit status for configuration and I/O failures.
const EXIT_ERROR: u8 = 2;

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate one or more snapshot names
    ///
    /// Exits 0 when every name is accepted, 1 when any is rejected, 2 on errors.
    Check {
        /// Snapshot names to validate
        #[arg(required = true)]
        names: Vec<String>,

        /// Snapshot directory to resolve accepted names against (UTF-8 only)
        #[arg(long, value_name = "DIR")]
        base: Option<PathBuf>,

        /// Separator conventions to apply (defaults to $SNAPGUARD_PLATFORM, then host)
        #[arg(long, value_name = "PLATFORM")]
        platform: Option<Platform>,

        /// Write the JSON report here instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Check {
            names,
            base,
            platform,
            out,
        } => {
            let config = Config::resolve(platform)?;
            if let Some(base) = &base {
                if base.to_str().is_none() {
                    return Err(anyhow!("--base must be valid UTF-8: {}", base.display()));
                }
            }
            tracing::debug!(
                platform = %config.platform,
                count = names.len(),
                "checking snapshot names"
            );

            let report = check_names(&config, &names, base.as_deref());
            for check in report.rejected() {
                if let Some(message) = &check.message {
                    eprintln!("rejected: {message}");
                }
            }

            match out {
                Some(path) => {
                    write_report(&path, &report)?;
                    tracing::info!(path = %path.display(), "wrote check report");
                }
                None => println!("{}", render(&report)?),
            }

            if report.all_accepted() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_REJECTED))
            }
        }
    }
}

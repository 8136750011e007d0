// Declare modules
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod formatter;
pub mod models;
pub mod probe;

use anyhow::Result;
use clap::Parser;

use self::cli::{Cli, Command};
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::{ProbeOutcome, ProbeReport};

/// Parses arguments, runs the selected subcommand and prints its JSON.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    let output = match args.command {
        Command::Descriptor { pretty } => {
            // 2. Sanity-check the hand-maintained values (debug builds only, never fatal)
            let descriptor = &descriptor::WINDOWS_MESA;
            if cfg!(debug_assertions) {
                if let Err(err) = descriptor.validate() {
                    log::warn!("Static descriptor looks wrong: {:#}", err);
                }
            }

            // 3. Render
            log::debug!("Emitting static descriptor for {}", descriptor::WINDOWS_MESA_NAME);
            OutputGenerator::render(descriptor, pretty)?
        }
        Command::Check(check_args) => {
            // 2. Resolve Configuration
            let config = resolve_config(&check_args)?;

            // 3. Query the toolchain; a missing program is a hard error
            let outcome = probe::query(&config.program, &config.library)?;

            if let ProbeOutcome::Unavailable { status, stderr } = &outcome {
                log::info!(
                    "{} reported {} as unavailable ({}): {}",
                    config.program,
                    config.library,
                    status,
                    stderr.trim()
                );
            }

            // 4. Render
            let report = ProbeReport::from_outcome(outcome, config.emit_flags);
            OutputGenerator::render(&report, config.pretty)?
        }
    };

    // 5. Print to Stdout, only once rendering succeeded
    println!("{}", output);

    Ok(())
}

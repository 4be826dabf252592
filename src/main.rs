//! orgcheck CLI - organization hierarchy validator and analyzer
//!
//! Usage: orgcheck <COMMAND>
//!
//! Commands:
//!   analyze   Validate the hierarchy and report salary and reporting-line issues
//!   validate  Check that the file describes a single well-formed hierarchy

mod commands;

use std::process::ExitCode;

use clap::Parser;

use orgcheck::presentation::cli::{Cli, Commands};
use orgcheck::presentation::PolicyOverrides;

use commands::GlobalArgs;

fn main() -> ExitCode {
    let cli = Cli::parse();
    orgcheck::logging::init_logging(cli.verbose);

    let global = GlobalArgs {
        json: cli.json,
        color: cli.color,
        config: cli.config.as_deref(),
    };

    let outcome = match &cli.command {
        Commands::Analyze {
            file,
            min_ratio,
            max_ratio,
            max_levels,
            fail_on_issues,
        } => {
            let overrides = PolicyOverrides {
                min_ratio: *min_ratio,
                max_ratio: *max_ratio,
                max_levels: *max_levels,
            };
            commands::analyze::cmd_analyze(file, overrides, *fail_on_issues, global)
        }
        Commands::Validate { file } => commands::validate::cmd_validate(file, global),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            commands::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

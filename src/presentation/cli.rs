//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Policy flags on `analyze` override env and config file values

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::policies::AnalysisPolicy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// orgcheck - validate an organization chart and flag salary and reporting-line issues
#[derive(Parser, Debug)]
#[command(name = "orgcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./orgcheck.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the hierarchy and report salary and reporting-line issues
    Analyze {
        /// Employee CSV file (id,firstName,lastName,salary,managerId)
        file: PathBuf,

        /// Minimum manager salary as a multiple of the subordinates' average
        #[arg(long, value_name = "RATIO")]
        min_ratio: Option<f64>,

        /// Maximum manager salary as a multiple of the subordinates' average
        #[arg(long, value_name = "RATIO")]
        max_ratio: Option<f64>,

        /// Maximum manager hops between an employee and the root
        #[arg(long, value_name = "N")]
        max_levels: Option<usize>,

        /// Exit with status 2 when any issue is found (CI mode)
        #[arg(long)]
        fail_on_issues: bool,
    },

    /// Check that the file describes a single well-formed hierarchy
    Validate {
        /// Employee CSV file (id,firstName,lastName,salary,managerId)
        file: PathBuf,
    },
}

/// Policy values given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolicyOverrides {
    pub min_ratio: Option<f64>,
    pub max_ratio: Option<f64>,
    pub max_levels: Option<usize>,
}

impl PolicyOverrides {
    /// Apply flags on top of a policy resolved from env and config
    pub fn apply(&self, policy: AnalysisPolicy) -> AnalysisPolicy {
        let min = self.min_ratio.unwrap_or(policy.min_salary_ratio);
        let max = self.max_ratio.unwrap_or(policy.max_salary_ratio);
        let levels = self.max_levels.unwrap_or(policy.max_reporting_levels);
        policy
            .with_salary_ratios(min, max)
            .with_max_reporting_levels(levels)
    }
}

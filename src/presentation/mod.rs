//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON) and terminal detection
//!
//! ## Structure
//!
//! - `cli` - Command-line interface definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//! - `terminal` - Color/unicode resolution for the current terminal
//!
//! ## Usage
//!
//! ```ignore
//! use orgcheck::presentation::factory;
//!
//! // Create analyze use case with the CSV repository wired up
//! let use_case = factory::create_analyze_use_case();
//! let result = use_case.execute(&options);
//! ```

pub mod cli;
pub mod factory;
pub mod output;
pub mod terminal;

pub use cli::{Cli, ColorWhen, Commands, PolicyOverrides};
pub use factory::{create_analyze_use_case, create_analyze_use_case_for};
pub use output::{create_renderer, OutputFormat, ResultRenderer};
pub use terminal::OutputContext;

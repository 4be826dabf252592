//! Command handlers for the `orgcheck` binary

pub mod analyze;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use orgcheck::config::{self, Config};
use orgcheck::presentation::cli::ColorWhen;
use orgcheck::presentation::output::{create_renderer, write_error_event, OutputFormat, ResultRenderer};
use orgcheck::presentation::OutputContext;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs<'a> {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub config: Option<&'a Path>,
}

impl GlobalArgs<'_> {
    /// Resolve config (explicit, project, user, defaults) plus env overrides
    pub fn load_config(&self) -> Result<Config> {
        let working_dir = std::env::current_dir().context("cannot determine working directory")?;
        let loaded = config::load_or_default(self.config, &working_dir)?;

        let label = loaded
            .source
            .path()
            .unwrap_or_else(|| Path::new("environment"));
        loaded.config.validate(label)?;

        Ok(loaded.config)
    }

    pub fn renderer(&self, config: &Config) -> Box<dyn ResultRenderer> {
        let ctx = OutputContext::new(self.json, self.color, config);
        let format = if ctx.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        create_renderer(format, ctx.color, ctx.unicode)
    }
}

/// Report a failed command: stderr for humans, an error event on stdout for JSON
pub fn print_error(err: &anyhow::Error, json: bool) {
    let message = format!("{:#}", err);
    if json {
        let mut out = std::io::stdout().lock();
        let _ = write_error_event(&mut out, &message);
        return;
    }
    eprintln!("Error: {}", message);
}

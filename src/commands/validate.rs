use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use orgcheck::presentation::create_analyze_use_case_for;

use super::GlobalArgs;

pub fn cmd_validate(file: &Path, global: GlobalArgs<'_>) -> Result<ExitCode> {
    let config = global.load_config()?;

    let result = create_analyze_use_case_for(&config.input).validate(file)?;

    let mut out = std::io::stdout().lock();
    global
        .renderer(&config)
        .render_validation(&result, file, &mut out)?;
    Ok(ExitCode::SUCCESS)
}

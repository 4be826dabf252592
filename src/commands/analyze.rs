use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use orgcheck::application::AnalyzeOptions;
use orgcheck::presentation::{create_analyze_use_case_for, PolicyOverrides};

use super::GlobalArgs;

/// Exit status when `--fail-on-issues` is set and the report is not clean
const ISSUES_FOUND: u8 = 2;

pub fn cmd_analyze(
    file: &Path,
    overrides: PolicyOverrides,
    fail_on_issues: bool,
    global: GlobalArgs<'_>,
) -> Result<ExitCode> {
    let config = global.load_config()?;
    let policy = overrides.apply(config.policy);

    let use_case = create_analyze_use_case_for(&config.input);
    let result = use_case.execute(&AnalyzeOptions::new(file).with_policy(policy))?;

    let mut out = std::io::stdout().lock();
    global.renderer(&config).render_analysis(&result, &mut out)?;

    if fail_on_issues && result.has_issues() {
        return Ok(ExitCode::from(ISSUES_FOUND));
    }
    Ok(ExitCode::SUCCESS)
}

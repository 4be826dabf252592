//! Output Rendering
//!
//! Provides a unified interface for rendering results to different formats.
//! Renderers write to any `io::Write` so callers (and tests) choose the sink.

use std::io::{self, Write};
use std::path::Path;

use crossterm::style::{Color, Stylize};

use crate::application::{AnalyzeResult, ValidateResult};
use crate::domain::entities::{ReportingLineIssue, SalaryIssue};

const RULE_WIDTH: usize = 80;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    warning: &'static str,
    bullet: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            warning: "⚠",
            bullet: "•",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            warning: "[WARN]",
            bullet: "*",
        }
    }
}

/// Trait for rendering command results
pub trait ResultRenderer {
    /// Render the analysis report
    fn render_analysis(&self, result: &AnalyzeResult, out: &mut dyn Write) -> io::Result<()>;

    /// Render the outcome of a validate-only run
    fn render_validation(
        &self,
        result: &ValidateResult,
        source: &Path,
        out: &mut dyn Write,
    ) -> io::Result<()>;
}

/// Text renderer
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    fn write_salary_section(
        &self,
        out: &mut dyn Write,
        title: &str,
        caption: &str,
        label: &str,
        issues: &[SalaryIssue],
    ) -> io::Result<()> {
        let icons = self.icons();
        let lower = title.to_lowercase();

        if issues.is_empty() {
            writeln!(
                out,
                "{} No {} found.",
                self.paint(icons.check, Color::Green),
                lower
            )?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(
            out,
            "{}",
            self.paint(&format!("{} {}", icons.warning, title.to_uppercase()), Color::Yellow)
        )?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(out, "{}", caption)?;
        writeln!(out)?;

        for issue in issues {
            let manager = &issue.manager;
            writeln!(
                out,
                "  {} {} (ID: {})",
                icons.bullet,
                manager.full_name(),
                manager.id()
            )?;
            writeln!(out, "    Current salary: {}", format_currency(manager.salary()))?;
            writeln!(
                out,
                "    Subordinates' average: {}",
                format_currency(issue.average_subordinate_salary)
            )?;
            writeln!(out, "    {} by: {}", label, format_currency(issue.difference))?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_reporting_section(
        &self,
        out: &mut dyn Write,
        max_levels: usize,
        issues: &[ReportingLineIssue],
    ) -> io::Result<()> {
        let icons = self.icons();

        if issues.is_empty() {
            writeln!(
                out,
                "{} No excessively long reporting lines found.",
                self.paint(icons.check, Color::Green)
            )?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(
            out,
            "{}",
            self.paint(&format!("{} LONG REPORTING LINES", icons.warning), Color::Yellow)
        )?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(
            out,
            "These employees have more than {} managers between them and the CEO:",
            max_levels
        )?;
        writeln!(out)?;

        for issue in issues {
            let employee = &issue.employee;
            writeln!(
                out,
                "  {} {} (ID: {})",
                icons.bullet,
                employee.full_name(),
                employee.id()
            )?;
            writeln!(out, "    Reporting levels: {}", issue.reporting_levels)?;
            writeln!(out, "    Excess levels: {}", issue.excess_levels)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

impl ResultRenderer for TextRenderer {
    fn render_analysis(&self, result: &AnalyzeResult, out: &mut dyn Write) -> io::Result<()> {
        let icons = self.icons();
        let report = &result.report;
        let policy = &result.policy;

        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(out, "{}", self.paint("ORGANIZATIONAL ANALYSIS REPORT", Color::Cyan))?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(out)?;
        writeln!(out, "Employees analyzed: {}", result.employee_count)?;
        writeln!(out)?;

        if !report.has_issues() {
            writeln!(
                out,
                "{} No issues found. Organization structure is healthy!",
                self.paint(icons.check, Color::Green)
            )?;
            writeln!(out)?;
            return Ok(());
        }

        self.write_salary_section(
            out,
            "Underpaid managers",
            &format!(
                "These managers earn less than {} more than their subordinates' average:",
                policy.min_premium_percent()
            ),
            "Underpaid",
            report.underpaid_managers(),
        )?;
        self.write_salary_section(
            out,
            "Overpaid managers",
            &format!(
                "These managers earn more than {} more than their subordinates' average:",
                policy.max_premium_percent()
            ),
            "Overpaid",
            report.overpaid_managers(),
        )?;
        self.write_reporting_section(
            out,
            policy.max_reporting_levels,
            report.long_reporting_lines(),
        )?;

        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            out,
            "END OF REPORT ({} {})",
            report.issue_count(),
            if report.issue_count() == 1 { "issue" } else { "issues" }
        )?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn render_validation(
        &self,
        result: &ValidateResult,
        source: &Path,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let icons = self.icons();

        writeln!(
            out,
            "{} Hierarchy is valid",
            self.paint(icons.check, Color::Green)
        )?;
        writeln!(out)?;
        writeln!(out, "  Source: {}", source.display())?;
        writeln!(out, "  Employees: {}", result.employee_count)?;
        writeln!(
            out,
            "  Root: {} (ID: {})",
            result.root.full_name(),
            result.root.id()
        )?;
        writeln!(out, "  Managers: {}", result.manager_count)?;
        writeln!(out, "  Deepest reporting line: {} levels", result.max_depth)?;
        Ok(())
    }
}

/// JSON renderer
pub struct JsonRenderer;

impl ResultRenderer for JsonRenderer {
    fn render_analysis(&self, result: &AnalyzeResult, out: &mut dyn Write) -> io::Result<()> {
        let report = &result.report;
        let json = serde_json::json!({
            "event": "analysis",
            "has_issues": report.has_issues(),
            "employee_count": result.employee_count,
            "policy": result.policy,
            "underpaid_managers": report.underpaid_managers(),
            "overpaid_managers": report.overpaid_managers(),
            "long_reporting_lines": report.long_reporting_lines(),
        });
        write_event(out, &json)
    }

    fn render_validation(
        &self,
        result: &ValidateResult,
        source: &Path,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let json = serde_json::json!({
            "event": "validation",
            "valid": true,
            "source": source.display().to_string(),
            "employee_count": result.employee_count,
            "root": result.root,
            "manager_count": result.manager_count,
            "max_depth": result.max_depth,
        });
        write_event(out, &json)
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut dyn Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write an error event in JSON mode
pub fn write_error_event(out: &mut dyn Write, message: &str) -> io::Result<()> {
    write_event(
        out,
        &serde_json::json!({
            "event": "error",
            "message": message,
        }),
    )
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, color: bool, unicode: bool) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { color, unicode }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// US-style currency: `$12,345.00`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

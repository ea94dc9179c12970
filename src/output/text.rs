use std::fmt::Write;
use std::path::Path;

use crate::analyzer::{FileAnalysis, Finding};
use crate::config::Severity;
use crate::error::Result;
use crate::report::{AnalysisResult, Breakdown, QualityGate};

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    show_suggestions: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            show_suggestions: false,
        }
    }

    /// Print each finding's remediation hint under it.
    #[must_use]
    pub const fn with_suggestions(mut self, show: bool) -> Self {
        self.show_suggestions = show;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Blocker | Severity::Critical => ansi::RED,
            Severity::Major => ansi::YELLOW,
            Severity::Minor | Severity::Info => ansi::CYAN,
        }
    }

    const fn gate_color(gate: QualityGate) -> &'static str {
        match gate {
            QualityGate::Passed => ansi::GREEN,
            QualityGate::Failed => ansi::RED,
        }
    }

    fn write_summary(&self, result: &AnalysisResult, out: &mut String) {
        let heading = format!(
            "Analysis of {} ({} mode)",
            result.root.display(),
            result.mode
        );
        let _ = writeln!(out, "{}\n", self.paint(&heading, ansi::BOLD));
        let _ = writeln!(out, "Files analyzed:    {}", result.total_files);
        let _ = writeln!(out, "Files with issues: {}", result.files_with_errors);
        let _ = writeln!(out, "Total issues:      {}", result.total_issues);

        let approximate = if result.breakdown == Breakdown::Approximate {
            " (approximate)"
        } else {
            ""
        };

        let _ = writeln!(out, "\nBy severity{approximate}:");
        for (severity, count) in &result.issues_by_severity {
            let label = self.paint(
                &format!("{:<10}", severity.as_str()),
                Self::severity_color(*severity),
            );
            let _ = writeln!(out, "  {label} {count}");
        }

        let _ = writeln!(out, "\nBy category{approximate}:");
        for (category, count) in &result.issues_by_category {
            let _ = writeln!(out, "  {:<22} {count}", category.display_name());
        }

        let gate = result.summary.quality_gate;
        let _ = writeln!(out, "\nTechnical debt: {}", result.summary.technical_debt);
        let _ = writeln!(
            out,
            "Quality gate:   {}",
            self.paint(gate.as_str(), Self::gate_color(gate))
        );
    }

    fn write_file(&self, root: &Path, file: &FileAnalysis, out: &mut String) {
        let shown = file.path.strip_prefix(root).unwrap_or(&file.path);
        let _ = writeln!(out, "\n{}", self.paint(&shown.display().to_string(), ansi::BOLD));

        let mut findings: Vec<&Finding> = file.findings.iter().collect();
        findings.sort_by(|a, b| b.severity.cmp(&a.severity));

        for finding in findings {
            let severity = self.paint(
                &format!("{:<8}", finding.severity.as_str()),
                Self::severity_color(finding.severity),
            );
            let _ = writeln!(
                out,
                "  {:>5}  {severity} {}/{}: {}",
                finding.line, finding.category, finding.kind, finding.message
            );
            if self.show_suggestions {
                let _ = writeln!(out, "         -> {}", finding.suggestion);
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        let mut out = String::new();
        self.write_summary(result, &mut out);

        for file in result.files.iter().filter(|f| f.has_findings()) {
            self.write_file(&result.root, file, &mut out);
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

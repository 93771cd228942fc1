//! Visual theme and styling.

use console::Style;

use super::icons::StatusKind;

/// Width of the `=` rules that frame the report.
pub const RULE_WIDTH: usize = 60;

/// The report's visual theme.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for the `=` rules (dim).
    pub border: Style,
    /// Style for remediation hints (magenta dim).
    pub hint: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Success.icon(), msg);
        self.success.apply_to(line).to_string()
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Warning.icon(), msg);
        self.warning.apply_to(line).to_string()
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Failed.icon(), msg);
        self.error.apply_to(line).to_string()
    }

    /// Format a header banner framed by rules.
    pub fn format_header(&self, title: &str) -> String {
        let rule = self.format_rule();
        format!("{}\n{}\n{}", rule, self.header.apply_to(title), rule)
    }

    /// Format a full-width `=` rule.
    pub fn format_rule(&self) -> String {
        self.border.apply_to("=".repeat(RULE_WIDTH)).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

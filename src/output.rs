//! # Progress Output
//!
//! User-facing progress lines printed while a run proceeds: one line per
//! scanned header, the sorted file list and a completion line. These go to
//! stdout and are separate from `log` diagnostics, which go to stderr.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//! - `--quiet` - Suppresses progress lines entirely

use std::env;
use std::path::Path;

use console::style;

use crate::phases::EmissionOrder;

/// Prints progress lines for a run
#[derive(Debug, Clone)]
pub struct Reporter {
    use_color: bool,
    quiet: bool,
}

impl Reporter {
    /// Create a reporter from the `--color` flag value and `--quiet`.
    pub fn new(color_flag: &str, quiet: bool) -> Self {
        Self {
            use_color: use_color(color_flag),
            quiet,
        }
    }

    /// A reporter that prints nothing.
    pub fn silent() -> Self {
        Self {
            use_color: false,
            quiet: true,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn uses_color(&self) -> bool {
        self.use_color
    }

    /// `Processing: <path>`
    pub fn processing(&self, path: &Path) {
        self.print(&self.processing_line(path));
    }

    /// The sorted file list, one tab-indented name per line.
    pub fn sorted(&self, order: &EmissionOrder) {
        self.print(&self.sorted_lines(order));
    }

    /// `Joined file written to <path>`
    pub fn written(&self, path: &Path) {
        let line = format!("Joined file written to {}", path.display());
        self.print(&style(line).green().force_styling(self.use_color).to_string());
    }

    /// `emoji` when colors are enabled, `plain` otherwise.
    pub fn emoji<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// A plain line, subject to `--quiet`.
    pub fn line(&self, text: &str) {
        self.print(text);
    }

    fn processing_line(&self, path: &Path) -> String {
        format!(
            "{} {}",
            style("Processing:").cyan().force_styling(self.use_color),
            path.display()
        )
    }

    fn sorted_lines(&self, order: &EmissionOrder) -> String {
        let mut text = style("Sorted files:")
            .bold()
            .force_styling(self.use_color)
            .to_string();
        for name in order.iter() {
            text.push_str("\n\t");
            text.push_str(name);
        }
        text
    }

    fn print(&self, text: &str) {
        if !self.quiet {
            println!("{}", text);
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new("auto", false)
    }
}

fn use_color(color_flag: &str) -> bool {
    match color_flag.to_lowercase().as_str() {
        "always" => true,
        "never" => false,
        _ => detect_color_support(),
    }
}

fn detect_color_support() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

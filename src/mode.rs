use serde::Deserialize;

use crate::render::Style;

/// Mode holds all reformatting configuration for mdsqlfmt.
#[derive(Debug, Clone, Deserialize)]
pub struct Mode {
    /// Target maximum line length for a reformatted statement.
    #[serde(default = "default_line_length")]
    pub line_length: usize,

    /// Indent with tabs instead of spaces.
    #[serde(default)]
    pub use_tabs: bool,

    /// Columns per indentation level.
    #[serde(default = "default_indent_width")]
    pub indent_width: u8,

    /// Report files that would change without writing them.
    #[serde(default)]
    pub check: bool,

    /// Print a diff for each file that would change.
    #[serde(default)]
    pub diff: bool,

    /// Glob patterns pruned during the directory walk.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Extra base names to ignore, on top of the built-in set.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Extra denylist substrings, on top of the built-in set.
    #[serde(default)]
    pub skip: Vec<String>,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub quiet: bool,

    #[serde(default)]
    pub no_progressbar: bool,
}

fn default_line_length() -> usize {
    80
}
fn default_indent_width() -> u8 {
    2
}

impl Mode {
    /// Rendering style passed to the statement renderer.
    pub fn style(&self) -> Style {
        Style {
            line_width: self.line_length,
            use_tabs: self.use_tabs,
            indent_width: self.indent_width,
        }
    }

    /// Whether the progress bar should be shown for `total` files.
    pub fn progress(&self, total: usize) -> bool {
        !self.quiet && !self.no_progressbar && total > 1
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self {
            line_length: 80,
            use_tabs: false,
            indent_width: 2,
            check: false,
            diff: false,
            exclude: Vec::new(),
            ignore: Vec::new(),
            skip: Vec::new(),
            verbose: false,
            quiet: false,
            no_progressbar: false,
        }
    }
}

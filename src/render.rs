//! Boundary to the external SQL grammar and pretty-printer.
//!
//! Parsing is delegated to `sqlparser` (PostgreSQL dialect) and
//! re-flowing of wide statements to `sqlformat`. Both are pure: the same
//! (statement, style) pair always renders the same text, which is what
//! makes whole-document reformatting idempotent.

use sqlformat::{FormatOptions, Indent, QueryParams};
use sqlparser::ast::Statement;
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::{Parser, ParserError};

/// Rendering style for a pretty-printed statement.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Target maximum line length.
    pub line_width: usize,
    /// Indent with tabs instead of spaces.
    pub use_tabs: bool,
    /// Columns per indentation level.
    pub indent_width: u8,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_width: 80,
            use_tabs: false,
            indent_width: 2,
        }
    }
}

impl Style {
    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            indent: if self.use_tabs {
                Indent::Tabs
            } else {
                Indent::Spaces(self.indent_width)
            },
            uppercase: true,
            ..FormatOptions::default()
        }
    }
}

/// Parse `sql` as exactly one statement.
///
/// `sqlparser` accepts any number of `;`-separated statements, so the
/// one-statement contract is enforced here: zero or several is an error,
/// and the caller passes the fragment through.
pub fn parse_one(sql: &str) -> Result<Statement, ParserError> {
    let mut statements = Parser::parse_sql(&PostgreSqlDialect {}, sql)?;
    match statements.len() {
        1 => Ok(statements.remove(0)),
        n => Err(ParserError::ParserError(format!(
            "expected exactly one statement, found {n}"
        ))),
    }
}

/// Pretty-print a parsed statement, without a trailing terminator.
///
/// The canonical single-line rendering is used whenever it fits the
/// target width; wider statements are re-flowed under the configured
/// indentation with uppercase keywords.
pub fn render(statement: &Statement, style: &Style) -> String {
    let flat = statement.to_string();
    if flat.len() <= style.line_width {
        return flat;
    }
    sqlformat::format(&flat, &QueryParams::None, style.format_options())
}

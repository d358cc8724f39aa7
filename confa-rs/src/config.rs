//! Line processor for confa source text.
//!
//! Each physical line is trimmed, loses one optional trailing `;`, and is
//! then classified:
//!
//! | Line | Action |
//! |------|--------|
//! | blank | ignored |
//! | `(comment …` | comment, see [`CommentMode`] |
//! | `NAME := value` | bind a constant |
//! | `key = value` | add an output entry |
//! | anything else | syntax error |
//!
//! Only the first `:=` or `=` splits a line. The first error aborts the run.

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::script::structure::eval_value;
use crate::var::{OutputScope, SymbolTable};

const COMMENT_OPEN: &str = "(comment";
const COMMENT_CLOSE: &str = ")";

// ── Public API ────────────────────────────────────────────────────────────────

/// How far a `(comment` marker reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentMode {
    /// Skip from the `(comment` line through the next line that is just `)`.
    /// An opener that already ends with `)` closes on the same line.
    #[default]
    Block,
    /// Skip only the `(comment` line itself.
    Line,
}

/// Options for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub comment_mode: CommentMode,
}

/// The result of processing one source text: its constants and its output.
#[derive(Debug, Default)]
pub struct Config {
    pub constants: SymbolTable,
    pub output: OutputScope,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process confa source with default options.
    pub fn load_str(s: &str) -> Result<Self> {
        Self::load_str_with(s, &Options::default())
    }

    /// Process confa source.
    ///
    /// Syntax errors carry the number of the offending line, counting only
    /// lines that are neither blank nor comments.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = ?opts.comment_mode))]
    pub fn load_str_with(s: &str, opts: &Options) -> Result<Self> {
        let mut config = Config::new();
        let mut lineno = 0;
        let mut in_comment = false;

        for raw in s.lines() {
            let line = clean_line(raw);

            if in_comment {
                if line == COMMENT_CLOSE {
                    in_comment = false;
                }
                continue;
            }

            if line.is_empty() {
                continue;
            }

            if line.starts_with(COMMENT_OPEN) {
                in_comment = opts.comment_mode == CommentMode::Block
                    && !line.ends_with(COMMENT_CLOSE);
                trace!(block = in_comment, "comment");
                continue;
            }

            lineno += 1;
            config.process_line(line, lineno)?;
        }

        debug!(
            constants = config.constants.len(),
            entries = config.output.len(),
            "source processed"
        );
        Ok(config)
    }

    /// Read and process a confa file.
    pub fn load_file(path: &Path, opts: &Options) -> Result<Self> {
        let s = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::load_str_with(&s, opts)
    }

    /// Render the output scope as TOML.
    pub fn to_toml(&self) -> String {
        crate::serialize::to_toml(&self.output)
    }

    fn process_line(&mut self, line: &str, lineno: usize) -> Result<()> {
        let syntax_error = || Error::Syntax {
            line: lineno,
            text: line.to_owned(),
        };

        if let Some((name, value)) = line.split_once(":=") {
            let name = name.trim();
            if name.is_empty() {
                return Err(syntax_error());
            }
            let value = eval_value(value.trim(), &self.constants)?;
            trace!(lineno, name, %value, "constant");
            self.constants.insert_or_replace(name, value);
        } else if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                return Err(syntax_error());
            }
            let value = eval_value(value.trim(), &self.constants)?;
            trace!(lineno, key, %value, "assignment");
            self.output.insert_or_replace(key, value);
        } else {
            return Err(syntax_error());
        }
        Ok(())
    }
}

/// Trim a line and drop one trailing `;`.
fn clean_line(raw: &str) -> &str {
    let line = raw.trim();
    line.strip_suffix(';').map(str::trim).unwrap_or(line)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::value::Value;

    fn load(s: &str) -> Config {
        Config::load_str(s).expect("load failed")
    }

    fn load_lines(s: &str) -> Result<Config> {
        Config::load_str_with(
            s,
            &Options {
                comment_mode: CommentMode::Line,
            },
        )
    }

    #[test]
    fn clean_line_strips_one_semicolon() {
        assert_eq!(clean_line("  a = 1;  "), "a = 1");
        assert_eq!(clean_line("a = 1;;"), "a = 1;");
        assert_eq!(clean_line(";"), "");
    }

    #[test]
    fn constant_declaration() {
        let c = load("CONST := 42");
        assert_eq!(c.constants.get("CONST"), Some(&Value::Int(42)));
        assert!(c.output.is_empty());
    }

    #[test]
    fn assignment() {
        let c = load("CONST := 42\nvalue = CONST");
        assert_eq!(c.output.get("value"), Some(&Value::Int(42)));
    }

    #[test]
    fn constant_may_hold_composites() {
        let c = load("LIST := [1; 2]\nTBL := { a = 1 }");
        assert!(matches!(c.constants.get("LIST"), Some(Value::Array(_))));
        assert!(matches!(c.constants.get("TBL"), Some(Value::Dict(_))));
    }

    #[test]
    fn namespaces_are_separate() {
        let c = load("x := 1\nx = 2");
        assert_eq!(c.constants.get("x"), Some(&Value::Int(1)));
        assert_eq!(c.output.get("x"), Some(&Value::Int(2)));
    }

    #[test]
    fn redeclaration_affects_later_lines_only() {
        let c = load("A := 1\nfirst = A\nA := 2\nsecond = A");
        assert_eq!(c.output.get("first"), Some(&Value::Int(1)));
        assert_eq!(c.output.get("second"), Some(&Value::Int(2)));
    }

    #[test]
    fn trailing_semicolon_ignored() {
        let c = load("value = 5;");
        assert_eq!(c.output.get("value"), Some(&Value::Int(5)));
    }

    #[test]
    fn split_on_first_operator_only() {
        let c = load("s := 'a=b'\nt = 'x = y'");
        assert_eq!(c.constants.get("s"), Some(&Value::Str("a=b".into())));
        assert_eq!(c.output.get("t"), Some(&Value::Str("x = y".into())));
    }

    #[test]
    fn syntax_error_reports_line() {
        let err = Config::load_str("CONST := 42\ninvalid line").unwrap_err();
        assert!(
            matches!(err, Error::Syntax { line: 2, ref text } if text == "invalid line"),
            "{err}"
        );
    }

    #[test]
    fn line_counter_skips_blank_and_comment_lines() {
        let err = Config::load_str("\n\n(comment x)\na = 1\n\nbroken").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }), "{err}");
    }

    #[test]
    fn empty_name_is_syntax_error() {
        assert!(matches!(
            Config::load_str("= 1").unwrap_err(),
            Error::Syntax { line: 1, .. }
        ));
        assert!(matches!(
            Config::load_str(":= 1").unwrap_err(),
            Error::Syntax { line: 1, .. }
        ));
    }

    #[test]
    fn value_errors_propagate() {
        assert!(matches!(
            Config::load_str("a = nope").unwrap_err(),
            Error::UnknownToken { .. }
        ));
        assert!(matches!(
            Config::load_str("a = |1 +|").unwrap_err(),
            Error::InvalidExpression { .. }
        ));
    }

    #[test]
    fn stops_at_first_error() {
        let err = Config::load_str("a = 1\nbad\nalso bad").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 2, .. }));
    }

    // ── Comments ──────────────────────────────────────────────────────────────

    const BLOCK: &str = "(comment\nThis is a comment.\nIt spans lines.\n)\nCONST := 42\nvalue = CONST";

    #[test]
    fn block_comment_skips_through_closer() {
        let c = load(BLOCK);
        assert_eq!(c.output.get("value"), Some(&Value::Int(42)));
    }

    #[test]
    fn line_mode_skips_only_opener() {
        let err = load_lines(BLOCK).unwrap_err();
        assert!(
            matches!(err, Error::Syntax { line: 1, ref text } if text == "This is a comment."),
            "{err}"
        );
    }

    #[test]
    fn single_line_comment_in_both_modes() {
        let src = "(comment short one)\nvalue = 1";
        assert_eq!(load(src).output.get("value"), Some(&Value::Int(1)));
        assert_eq!(
            load_lines(src).unwrap().output.get("value"),
            Some(&Value::Int(1))
        );
    }

    #[test]
    fn comment_body_may_contain_assignments() {
        let c = load("(comment\nhidden = 1\n)\nshown = 2");
        assert!(c.output.get("hidden").is_none());
        assert_eq!(c.output.get("shown"), Some(&Value::Int(2)));
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let c = load("a = 1\n(comment\nb = 2");
        assert_eq!(c.output.len(), 1);
    }

    #[test]
    fn indented_closer() {
        let c = load("(comment\n  text\n    )  \nvalue = 3");
        assert_eq!(c.output.get("value"), Some(&Value::Int(3)));
    }

    #[test]
    fn load_file_missing() {
        let err = Config::load_file(Path::new("/definitely/not/here.conf"), &Options::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}

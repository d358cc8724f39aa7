//! Command-line argument parsing.
//!
//! Usage:
//!   confa [-dl] [-o<file>] [<input>]
//!   confa [-dl] [-o<file>] -c<source>

use std::path::PathBuf;

use crate::config::{CommentMode, Options};

pub const USAGE: &str = "Usage: confa [-dl] [-o<file>] [<input>]\n       confa [-dl] [-o<file>] -c<source>";

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Where the confa source comes from.
    pub input: Input,
    /// Output file (`-o<file>`); stdout when absent.
    pub output: Option<PathBuf>,
    /// `(comment` handling (`-l` selects single-line comments).
    pub comment_mode: CommentMode,
    /// Debug logging to stderr (`-d`).
    pub debug: bool,
}

impl CliArgs {
    pub fn options(&self) -> Options {
        Options {
            comment_mode: self.comment_mode,
        }
    }
}

/// Source of the text to convert.
#[derive(Debug, Default, PartialEq)]
pub enum Input {
    /// Read standard input (no positional argument, or `-`).
    #[default]
    Stdin,
    /// Read this file.
    File(PathBuf),
    /// `-c<source>`: convert the argument itself.
    Source(String),
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` and return [`CliArgs`] or an error message.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    parse_argv(&raw)
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut args = CliArgs::default();
    let mut positional: Vec<String> = Vec::new();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();

        // `--` ends flag processing.
        if arg == "--" {
            i += 1;
            positional.extend(argv[i..].iter().cloned());
            break;
        }

        // Non-flag argument.
        if !arg.starts_with('-') || arg == "-" {
            positional.push(arg.to_owned());
            i += 1;
            continue;
        }

        // Flag argument: iterate over characters after the leading `-`.
        let chars: Vec<char> = arg[1..].chars().collect();
        let mut j = 0;
        while j < chars.len() {
            match chars[j] {
                'd' => args.debug = true,
                'l' => args.comment_mode = CommentMode::Line,

                // -o<file> / -c<source>
                c @ ('o' | 'c') => {
                    let value = if j + 1 < chars.len() {
                        let s: String = chars[j + 1..].iter().collect();
                        j = chars.len(); // consumed rest of this arg
                        s
                    } else if i + 1 < argv.len() {
                        i += 1;
                        argv[i].clone()
                    } else if c == 'o' {
                        return Err("-o requires a file argument".to_owned());
                    } else {
                        return Err("-c requires a source argument".to_owned());
                    };
                    if c == 'o' {
                        args.output = Some(PathBuf::from(value));
                    } else {
                        args.input = Input::Source(value);
                    }
                }

                c => return Err(format!("unknown option: -{c}")),
            }
            j += 1;
        }
        i += 1;
    }

    // Positional argument → input file.
    if !positional.is_empty() {
        if matches!(args.input, Input::Source(_)) {
            return Err("-c cannot be combined with an input file".to_owned());
        }
        if positional.len() > 1 {
            return Err(format!("too many arguments ({})", positional.len()));
        }
        let path = positional.remove(0);
        if path != "-" {
            args.input = Input::File(PathBuf::from(path));
        }
    }

    Ok(args)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

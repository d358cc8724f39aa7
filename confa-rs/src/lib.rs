//! confa: a small configuration language that compiles to TOML.
//!
//! ```rust
//! let toml = confa::convert("CONST := 10\nnumbers = [1; 2; CONST]").unwrap();
//! assert_eq!(toml, "numbers = [1, 2, 10]");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod script;
pub mod serialize;
pub mod var;

pub use config::{CommentMode, Config, Options};
pub use error::{Error, Result};

/// Convert confa source to TOML text with default options.
pub fn convert(src: &str) -> Result<String> {
    convert_with(src, &Options::default())
}

/// Convert confa source to TOML text.
pub fn convert_with(src: &str, opts: &Options) -> Result<String> {
    Ok(Config::load_str_with(src, opts)?.to_toml())
}

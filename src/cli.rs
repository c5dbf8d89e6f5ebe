//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - The positional ROOT is optional and defaults to the current working
//!   directory; the default is resolved here so the core always receives a
//!   concrete root path.
//! - --depth is typed as usize, so negative values are rejected by clap at
//!   parse time, before any traversal runs.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// CLI wrapper for the dir_flatten library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Collapse single-file wrapper directories into their parent"
)]
pub struct Args {
    /// Root directory to tidy. Defaults to the current working directory.
    #[arg(value_name = "ROOT", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Limit how many levels of subdirectory below the root are descended
    /// into (0 = inspect only the root's direct children). Unlimited when
    /// omitted.
    #[arg(long, value_name = "LEVELS")]
    pub depth: Option<usize>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,
}

impl Args {
    /// Effective root: the positional ROOT if provided, else the current
    /// working directory. Resolution lives here so the core's contract
    /// always gets a concrete, required path.
    pub fn resolved_root(&self) -> std::io::Result<PathBuf> {
        match &self.root {
            Some(p) => Ok(p.clone()),
            None => std::env::current_dir(),
        }
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

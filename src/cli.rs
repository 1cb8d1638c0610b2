use std::path::PathBuf;

use clap::Parser;
use tailwatch::LineBudget;

/// tailwatch - follow the end of a file in a full-screen view
#[derive(Parser, Debug)]
#[command(name = "tailwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to follow
    #[arg(value_name = "FILE_PATH")]
    pub path: PathBuf,

    /// Lines to show; -1 fits the terminal height
    #[arg(value_name = "NUMBER", allow_negative_numbers = true, value_parser = parse_line_count)]
    pub lines: Option<LineBudget>,

    /// Settings file (default: ~/.config/tailwatch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_line_count(raw: &str) -> Result<LineBudget, String> {
    raw.trim()
        .parse::<i64>()
        .map(LineBudget::from_count)
        .map_err(|_| format!("'{}' is not a line count", raw))
}

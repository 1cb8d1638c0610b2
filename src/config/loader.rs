//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TailwatchError, TailwatchResult};

use super::types::Settings;

/// Non-fatal configuration warning (unknown keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load settings from `path` and collect warnings for unknown keys.
pub fn load(path: &Path) -> TailwatchResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| TailwatchError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> TailwatchResult<(Settings, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TailwatchError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            line: find_line_number(content, &key),
            suggestion: suggest_key(&key),
            file: path.to_path_buf(),
            key,
        })
        .collect();

    Ok((settings, warnings))
}

/// Load from an explicit file, the user config, or defaults; then apply
/// environment overrides.
///
/// An explicit file must exist. The default location is optional.
pub fn load_or_default(explicit: Option<&Path>) -> TailwatchResult<(Settings, Vec<ConfigWarning>)> {
    let (settings, warnings) = match explicit {
        Some(path) => load(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => load(&path)?,
            _ => (Settings::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(settings), warnings))
}

/// `~/.config/tailwatch/config.toml` (platform equivalent elsewhere)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tailwatch").join("config.toml"))
}

/// Apply environment variable overrides (TAILWATCH_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    with_env_overrides_from(settings, |key| std::env::var(key).ok())
}

pub fn with_env_overrides_from(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    // TAILWATCH_LINES
    if let Some(lines) = parse_env(&get_env, "TAILWATCH_LINES") {
        settings.lines = lines;
    }

    // TAILWATCH_RETRY_MS
    if let Some(ms) = parse_env(&get_env, "TAILWATCH_RETRY_MS") {
        settings.retry_interval_ms = ms;
    }

    // TAILWATCH_POLL_MS
    if let Some(ms) = parse_env(&get_env, "TAILWATCH_POLL_MS") {
        settings.poll_interval_ms = ms;
    }

    settings
}

fn parse_env<T: std::str::FromStr>(get_env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = get_env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring invalid environment override");
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.trim_start().starts_with(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["lines", "retry_interval_ms", "poll_interval_ms"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, edit_distance(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 3)
        .map(|(candidate, _)| candidate.to_string())
}

/// Edit distance over chars, keeping a single row of the DP table.
fn edit_distance(from: &str, to: &str) -> usize {
    let target: Vec<char> = to.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, c) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, t) in target.iter().enumerate() {
            let above = row[j + 1];
            let substitute = diagonal + usize::from(c != *t);
            row[j + 1] = substitute.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[target.len()]
}

#[cfg(test)]
pub(super) fn parse_str(content: &str) -> TailwatchResult<(Settings, Vec<ConfigWarning>)> {
    parse(content, Path::new("config.toml"))
}

//! Application configuration loading for CLI defaults.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// TOML-backed file configuration for summarizer defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Chat model used for both passes.
    pub model: Option<String>,
    /// API root of the chat-completions backend.
    pub api_base_url: Option<String>,
    /// Document fetch connect timeout in seconds.
    pub fetch_connect_timeout_secs: Option<u64>,
    /// Document fetch per-read timeout in seconds.
    pub fetch_read_timeout_secs: Option<u64>,
    /// Generation backend whole-request timeout in seconds.
    pub generation_timeout_secs: Option<u64>,
    /// Default verbosity mode.
    pub verbosity: Option<VerbositySetting>,
}

impl FileConfig {
    /// Validates config values against runtime constraints.
    pub fn validate(&self) -> Result<()> {
        validate_timeout_secs("fetch_connect_timeout_secs", self.fetch_connect_timeout_secs)?;
        validate_timeout_secs("fetch_read_timeout_secs", self.fetch_read_timeout_secs)?;
        validate_timeout_secs("generation_timeout_secs", self.generation_timeout_secs)?;
        if let Some(model) = &self.model
            && model.trim().is_empty()
        {
            bail!("Invalid config value for `model`: must not be empty");
        }
        if let Some(base_url) = &self.api_base_url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            bail!("Invalid config value for `api_base_url`: {base_url}. Expected an http(s) URL");
        }
        Ok(())
    }
}

fn validate_timeout_secs(field: &str, value: Option<u64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(1..=3600).contains(&value) {
        bail!("Invalid config value for `{field}`: {value}. Expected range: 1..=3600");
    }
    Ok(())
}

/// Supported config verbosity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbositySetting {
    Default,
    Verbose,
    Quiet,
    Debug,
}

impl VerbositySetting {
    /// Tracing filter directive for this verbosity.
    #[must_use]
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Default => "info",
            Self::Verbose => "debug",
            Self::Quiet => "error",
            Self::Debug => "trace",
        }
    }
}

/// Resolves default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/paper-summarizer/config.toml`
/// 2. `$HOME/.config/paper-summarizer/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    resolve_config_path_from(env_var_non_empty_os("XDG_CONFIG_HOME"), env_var_non_empty_os("HOME"))
}

fn resolve_config_path_from(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(xdg_config_home) = xdg_config_home {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("paper-summarizer")
                .join("config.toml"),
        );
    }

    Some(
        PathBuf::from(home?)
            .join(".config")
            .join("paper-summarizer")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from the default path; a missing file yields defaults.
pub fn load_default_file_config() -> Result<FileConfig> {
    match resolve_default_config_path() {
        Some(path) if path.exists() => load_file_config(&path),
        _ => Ok(FileConfig::default()),
    }
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_number = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_number}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();
        let invalid = || format!("Invalid `{key}` value on line {line_number}");

        match key {
            "model" => cfg.model = Some(parse_string_literal(value).with_context(invalid)?),
            "api_base_url" => {
                cfg.api_base_url = Some(parse_string_literal(value).with_context(invalid)?);
            }
            "fetch_connect_timeout_secs" => {
                cfg.fetch_connect_timeout_secs = Some(parse_integer_u64(value).with_context(invalid)?);
            }
            "fetch_read_timeout_secs" => {
                cfg.fetch_read_timeout_secs = Some(parse_integer_u64(value).with_context(invalid)?);
            }
            "generation_timeout_secs" => {
                cfg.generation_timeout_secs = Some(parse_integer_u64(value).with_context(invalid)?);
            }
            "verbosity" => {
                let parsed = parse_string_literal(value).with_context(invalid)?;
                cfg.verbosity = Some(parse_verbosity(&parsed).with_context(|| {
                    format!("Invalid `verbosity` value '{parsed}' on line {line_number}")
                })?);
            }
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_number}");
            }
        }
    }
    cfg.validate()?;
    Ok(cfg)
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

fn parse_integer_u64(raw_value: &str) -> Result<u64> {
    let token = raw_value.trim();
    if token.is_empty() {
        bail!("Expected integer value");
    }
    let value = token.parse::<i128>()?;
    if value < 0 {
        bail!("Expected non-negative integer");
    }
    u64::try_from(value).map_err(|_| anyhow::anyhow!("Integer value out of range for u64"))
}

fn parse_verbosity(value: &str) -> Result<VerbositySetting> {
    match value {
        "default" => Ok(VerbositySetting::Default),
        "verbose" => Ok(VerbositySetting::Verbose),
        "quiet" => Ok(VerbositySetting::Quiet),
        "debug" => Ok(VerbositySetting::Debug),
        other => bail!("Unknown verbosity '{other}'. Expected one of: default, verbose, quiet, debug"),
    }
}

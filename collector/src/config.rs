use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::region::DEFAULT_REGION_TOKENS;

pub const DEFAULT_OUTPUT_FILE: &str = "real_jobs.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Run configuration, read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_file: PathBuf,
    pub fetch_timeout: Duration,
    pub region_tokens: Vec<String>,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fetch_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            region_tokens: DEFAULT_REGION_TOKENS.iter().map(|t| t.to_string()).collect(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // a missing .env is fine

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output_file = lookup("JOBS_OUTPUT_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_file);

        let fetch_timeout = match lookup("JOBS_FETCH_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => defaults.fetch_timeout,
        };

        let region_tokens = match lookup("JOBS_REGION_TOKENS") {
            Some(raw) => parse_region_tokens(&raw)?,
            None => defaults.region_tokens,
        };

        let rust_log = lookup("RUST_LOG").unwrap_or(defaults.rust_log);

        Ok(Self {
            output_file,
            fetch_timeout,
            region_tokens,
            rust_log,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("JOBS_FETCH_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"))?;
    if secs == 0 {
        bail!("JOBS_FETCH_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}

fn parse_region_tokens(raw: &str) -> Result<Vec<String>> {
    let tokens: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        bail!("JOBS_REGION_TOKENS must name at least one token");
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_file, PathBuf::from("real_jobs.json"));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.region_tokens, vec!["India", "Remote"]);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("JOBS_OUTPUT_FILE", "public/jobs.json"),
            ("JOBS_FETCH_TIMEOUT_SECS", "3"),
            ("JOBS_REGION_TOKENS", "India, Remote ,Singapore,"),
        ])
        .unwrap();
        assert_eq!(config.output_file, PathBuf::from("public/jobs.json"));
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
        assert_eq!(config.region_tokens, vec!["India", "Remote", "Singapore"]);
    }

    #[test]
    fn test_rejects_bad_timeout() {
        assert!(config_from(&[("JOBS_FETCH_TIMEOUT_SECS", "ten")]).is_err());
        assert!(config_from(&[("JOBS_FETCH_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn test_rejects_empty_region_tokens() {
        assert!(config_from(&[("JOBS_REGION_TOKENS", " , ,")]).is_err());
    }

    #[test]
    fn test_blank_output_file_uses_default() {
        let config = config_from(&[("JOBS_OUTPUT_FILE", "  ")]).unwrap();
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
    }
}

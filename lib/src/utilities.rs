use std::str::FromStr;
use std::time::Duration;
use anyhow::{Context, Result};

use crate::env_keys::CLASSIFIER_TIMEOUT_SECS;

const DEFAULT_TIMEOUT_SECS: u64 = 30;


// unset and empty both fall back to the default
pub fn env_or_default(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_owned(),
    }
}

pub fn parse_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for {}: {}", key, value)),
        _ => Ok(default),
    }
}

pub fn classifier_timeout() -> Result<Duration> {
    let seconds = parse_env_or_default(CLASSIFIER_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;
    Ok(Duration::from_secs(seconds))
}

// Service configuration read from the environment.
//
// Every variable is optional; unset variables fall back to the defaults below.
// Parsing goes through a lookup function so tests never touch the process environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::shared::auth::basic_auth::Accounts;

pub const ADDR_VAR: &str = "WEB_TOUR_ADDR";
pub const SHUTDOWN_TIMEOUT_VAR: &str = "WEB_TOUR_SHUTDOWN_TIMEOUT_SECS";
pub const TEMPLATES_DIR_VAR: &str = "WEB_TOUR_TEMPLATES_DIR";
pub const UPLOAD_DIR_VAR: &str = "WEB_TOUR_UPLOAD_DIR";
pub const UPLOAD_LIMIT_VAR: &str = "WEB_TOUR_UPLOAD_LIMIT_BYTES";
pub const UPSTREAM_URL_VAR: &str = "WEB_TOUR_UPSTREAM_URL";
pub const REDIRECT_URL_VAR: &str = "WEB_TOUR_REDIRECT_URL";
pub const LONG_TASK_VAR: &str = "WEB_TOUR_LONG_TASK_SECS";
pub const ADMIN_ACCOUNTS_VAR: &str = "WEB_TOUR_ADMIN_ACCOUNTS";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_URL: &str = "https://github.com/gongluck/gindemo";
const DEFAULT_REDIRECT_URL: &str = "http://www.google.com/";
const DEFAULT_ADMIN_ACCOUNTS: &str = "test1:test11,test2:test22";
const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 8 << 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub shutdown_timeout: Duration,
    pub templates_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub upload_limit_bytes: usize,
    pub upstream_url: String,
    pub redirect_url: String,
    pub long_task_delay: Duration,
    pub admin_accounts: Accounts,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            addr: parse(ADDR_VAR, var(ADDR_VAR).as_deref().unwrap_or(DEFAULT_ADDR))?,
            shutdown_timeout: seconds(SHUTDOWN_TIMEOUT_VAR, var(SHUTDOWN_TIMEOUT_VAR), 5)?,
            templates_dir: var(TEMPLATES_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("templates")),
            upload_dir: var(UPLOAD_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            upload_limit_bytes: match var(UPLOAD_LIMIT_VAR) {
                Some(raw) => parse(UPLOAD_LIMIT_VAR, &raw)?,
                None => DEFAULT_UPLOAD_LIMIT_BYTES,
            },
            upstream_url: var(UPSTREAM_URL_VAR).unwrap_or_else(|| DEFAULT_UPSTREAM_URL.into()),
            redirect_url: var(REDIRECT_URL_VAR).unwrap_or_else(|| DEFAULT_REDIRECT_URL.into()),
            long_task_delay: seconds(LONG_TASK_VAR, var(LONG_TASK_VAR), 5)?,
            admin_accounts: parse(
                ADMIN_ACCOUNTS_VAR,
                var(ADMIN_ACCOUNTS_VAR)
                    .as_deref()
                    .unwrap_or(DEFAULT_ADMIN_ACCOUNTS),
            )?,
        })
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn seconds(key: &'static str, raw: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    match raw {
        Some(raw) => parse(key, &raw).map(Duration::from_secs),
        None => Ok(Duration::from_secs(default)),
    }
}

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::search::recommend::{DEFAULT_BEST_DEAL_MAX_PRICE, DEFAULT_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Mock,
    Http { base_url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_source: DataSource,
    pub latency: Duration,
    pub unlock_store: PathBuf,
    pub unlock_fee: u64,
    pub best_deal_max_price: u64,
    pub recommendation_limit: usize,
    pub featured_area: String,
    pub output: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DataSource::Mock,
            latency: Duration::from_millis(300),
            unlock_store: PathBuf::from("unlock_state.json"),
            unlock_fee: 99,
            best_deal_max_price: DEFAULT_BEST_DEAL_MAX_PRICE,
            recommendation_limit: DEFAULT_LIMIT,
            featured_area: "Whitefield".to_string(),
            output: PathBuf::from("scouted_properties.json"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_source = match lookup("SCOUT_DATA_SOURCE").as_deref() {
            None | Some("mock") => DataSource::Mock,
            Some("http") => DataSource::Http {
                base_url: lookup("SCOUT_API_URL")
                    .context("SCOUT_API_URL must be set when SCOUT_DATA_SOURCE=http")?,
            },
            Some(other) => bail!("unknown SCOUT_DATA_SOURCE {:?}, expected mock or http", other),
        };

        Ok(Self {
            data_source,
            latency: Duration::from_millis(parse_or(
                &lookup,
                "SCOUT_LATENCY_MS",
                defaults.latency.as_millis() as u64,
            )?),
            unlock_store: lookup("SCOUT_UNLOCK_STORE")
                .map(PathBuf::from)
                .unwrap_or(defaults.unlock_store),
            unlock_fee: parse_or(&lookup, "SCOUT_UNLOCK_FEE", defaults.unlock_fee)?,
            best_deal_max_price: parse_or(
                &lookup,
                "SCOUT_BEST_DEAL_MAX_PRICE",
                defaults.best_deal_max_price,
            )?,
            recommendation_limit: parse_or(
                &lookup,
                "SCOUT_RECOMMENDATION_LIMIT",
                defaults.recommendation_limit,
            )?,
            featured_area: lookup("SCOUT_FEATURED_AREA").unwrap_or(defaults.featured_area),
            output: lookup("SCOUT_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
            log_level: lookup("SCOUT_LOG").unwrap_or(defaults.log_level),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has invalid value {:?}", key, raw)),
        None => Ok(default),
    }
}

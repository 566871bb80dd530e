use dotenv::dotenv;
use statradar_core::ChartConfig;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_DATA_PATH: &str = "./data/pokemon.json";
const DEFAULT_LOG_PATH: &str = "statradar.log";
/// Most grid rings a chart draws.
const MAX_LEVELS: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be at most {max}, got {value}")]
    TooLarge {
        var: &'static str,
        value: String,
        max: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub log_path: PathBuf,
    pub chart: ChartConfig,
    pub debug: bool,
}

/// Reads `.env` and the environment; CLI flags have already been folded in.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();

    let data_path =
        env::var("STATRADAR_DATA").map_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);
    let log_path =
        env::var("STATRADAR_LOG").map_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH), PathBuf::from);

    let mut chart = ChartConfig::default();
    if let Some(max_value) = positive_var::<f64>("STATRADAR_MAX_STAT")? {
        chart.max_value = max_value;
    }
    if let Some(levels) = bounded_var("STATRADAR_LEVELS", MAX_LEVELS)? {
        chart.levels = levels;
    }

    let debug = env::var("DEBUG").is_ok_and(|value| value != "0" && !value.is_empty());

    Ok(AppConfig {
        data_path,
        log_path,
        chart,
        debug,
    })
}

fn positive_var<T>(var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Ok(raw) = env::var(var) else {
        return Ok(None);
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(Some(value)),
        _ => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}

fn bounded_var<T>(var: &'static str, max: T) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default + std::fmt::Display,
{
    match positive_var::<T>(var)? {
        Some(value) if value > max => Err(ConfigError::TooLarge {
            var,
            value: value.to_string(),
            max: max.to_string(),
        }),
        value => Ok(value),
    }
}

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub currency: String,
    pub report: Option<String>,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "$".into(),
            report: None,
            json: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    let mut cfg = Config::default();
    if let Ok(path) = std::env::var("TALLY_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.currency {
            cfg.currency = v;
        }
        if let Some(v) = f.report {
            cfg.report = Some(v);
        }
        if let Some(v) = f.json {
            cfg.json = v;
        }
    }

    if let Ok(currency) = std::env::var("TALLY_CURRENCY") {
        if !currency.is_empty() {
            cfg.currency = currency;
        }
    }
    if let Ok(report) = std::env::var("TALLY_REPORT") {
        if !report.is_empty() {
            cfg.report = Some(report);
        }
    }
    if let Ok(json) = std::env::var("TALLY_JSON") {
        if !json.is_empty() {
            cfg.json =
                parse_bool(&json).ok_or_else(|| ConfigError::Invalid("Invalid json flag".into()))?;
        }
    }

    validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    report: Option<String>,
    #[serde(default)]
    json: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.currency.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: currency must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

use std::env;

use chrono::Duration;
use derive_more::Display;

use db::models::DEFAULT_RECENT_WINDOW_HOURS;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Ten years. Larger windows make no practical difference and risk overflowing
/// date arithmetic.
const MAX_RECENT_WINDOW_HOURS: i64 = 24 * 366 * 10;

#[derive(Debug, Display, PartialEq)]
pub enum SettingsError {
    #[display(fmt = "{} must be set", _0)]
    Missing(&'static str),
    #[display(fmt = "{} has an invalid value {:?}", name, value)]
    Invalid { name: &'static str, value: String },
}

impl std::error::Error for SettingsError {}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_address: String,
    pub template_dir: String,
    /// How far back a question still counts as recently published.
    pub recent_window: Duration,
    /// Cap on the index page; every published question is listed when unset.
    pub index_limit: Option<i64>,
}

impl Settings {
    pub fn from_env() -> Result<Settings, SettingsError> {
        Settings::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Result<Settings, SettingsError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL").ok_or(SettingsError::Missing("DATABASE_URL"))?;
        let recent_window_hours =
            parse_positive(&var, "POLLS_RECENT_WINDOW_HOURS", MAX_RECENT_WINDOW_HOURS)?
                .unwrap_or(DEFAULT_RECENT_WINDOW_HOURS);
        let index_limit = parse_positive(&var, "POLLS_INDEX_LIMIT", i64::MAX)?;

        Ok(Settings {
            database_url,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            template_dir: var("TEMPLATE_DIR").unwrap_or_else(default_template_dir),
            recent_window: Duration::hours(recent_window_hours),
            index_limit,
        })
    }
}

pub fn default_template_dir() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/templates").to_string()
}

/// `None` when the variable is unset, otherwise a value in `1..=max`.
fn parse_positive<F>(var: &F, name: &'static str, max: i64) -> Result<Option<i64>, SettingsError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match var(name) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<i64>() {
            Ok(parsed) if parsed > 0 && parsed <= max => Ok(Some(parsed)),
            _ => Err(SettingsError::Invalid { name, value }),
        },
    }
}

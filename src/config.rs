//! Server configuration parsed from environment variables.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::grid::builder::TextOrder;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 200;
pub const DEFAULT_VIEW_IDLE_TIMEOUT_SECS: u64 = 1800;
pub const DEFAULT_VIEW_SWEEP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_NOTIFICATION_QUEUE_CAPACITY: usize = 64;
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown GRID_VARIANT: {0} (expected 'primary' or 'alternate')")]
    UnknownVariant(String),
    #[error("GRID_COMBO_ITEMS must name at least one item")]
    EmptyComboItems,
}

/// Which flavor of the demo grid to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `Text-{row}-{column}`, four combo-box items.
    Primary,
    /// `Text-{column}-{row}`, five combo-box items.
    Alternate,
}

impl Variant {
    #[must_use]
    pub fn text_order(self) -> TextOrder {
        match self {
            Self::Primary => TextOrder::RowFirst,
            Self::Alternate => TextOrder::ColumnFirst,
        }
    }

    #[must_use]
    pub fn default_combo_items(self) -> &'static [&'static str] {
        match self {
            Self::Primary => &["One", "Two", "Three", "Four"],
            Self::Alternate => &["One", "Two", "Three", "Four", "Five"],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub variant: Variant,
    pub combo_items: Arc<[String]>,
    pub max_page_size: u32,
    pub view_idle_timeout: Duration,
    pub view_sweep_interval: Duration,
    pub notification_queue_capacity: usize,
    pub notification_duration_ms: u64,
    pub assets_dir: PathBuf,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GRID_VARIANT`: `primary` (default) or `alternate`
    /// - `GRID_COMBO_ITEMS`: comma-separated option list, variant default when absent
    /// - `GRID_MAX_PAGE_SIZE`: default 200
    /// - `VIEW_IDLE_TIMEOUT_SECS`: default 1800
    /// - `VIEW_SWEEP_INTERVAL_SECS`: default 60
    /// - `NOTIFICATION_QUEUE_CAPACITY`: default 64
    /// - `NOTIFICATION_DURATION_MS`: default 5000
    /// - `ASSETS_DIR`: default `<crate>/assets`
    pub fn from_env() -> Result<Self, ConfigError> {
        let variant = parse_variant(env_var("GRID_VARIANT").as_deref())?;
        let combo_items = parse_combo_items(env_var("GRID_COMBO_ITEMS").as_deref(), variant)?;
        let assets_dir = env_var("ASSETS_DIR")
            .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"), PathBuf::from);

        Ok(Self {
            port: env_parse("PORT", DEFAULT_PORT),
            variant,
            combo_items,
            max_page_size: env_parse("GRID_MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE).max(1),
            view_idle_timeout: Duration::from_secs(env_parse(
                "VIEW_IDLE_TIMEOUT_SECS",
                DEFAULT_VIEW_IDLE_TIMEOUT_SECS,
            )),
            view_sweep_interval: Duration::from_secs(
                env_parse("VIEW_SWEEP_INTERVAL_SECS", DEFAULT_VIEW_SWEEP_INTERVAL_SECS).max(1),
            ),
            notification_queue_capacity: env_parse(
                "NOTIFICATION_QUEUE_CAPACITY",
                DEFAULT_NOTIFICATION_QUEUE_CAPACITY,
            ),
            notification_duration_ms: env_parse("NOTIFICATION_DURATION_MS", DEFAULT_NOTIFICATION_DURATION_MS),
            assets_dir,
        })
    }

    /// Defaults for a variant, ignoring the environment.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            port: DEFAULT_PORT,
            variant,
            combo_items: variant.default_combo_items().iter().map(|s| (*s).to_owned()).collect(),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            view_idle_timeout: Duration::from_secs(DEFAULT_VIEW_IDLE_TIMEOUT_SECS),
            view_sweep_interval: Duration::from_secs(DEFAULT_VIEW_SWEEP_INTERVAL_SECS),
            notification_queue_capacity: DEFAULT_NOTIFICATION_QUEUE_CAPACITY,
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_variant(Variant::Primary)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).map_or(None, |v| if v.trim().is_empty() { None } else { Some(v) })
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match env_var(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or(default),
        None => default,
    }
}

fn parse_variant(raw: Option<&str>) -> Result<Variant, ConfigError> {
    match raw.map(str::trim).unwrap_or("primary") {
        "primary" => Ok(Variant::Primary),
        "alternate" => Ok(Variant::Alternate),
        other => Err(ConfigError::UnknownVariant(other.to_owned())),
    }
}

fn parse_combo_items(raw: Option<&str>, variant: Variant) -> Result<Arc<[String]>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(variant.default_combo_items().iter().map(|s| (*s).to_owned()).collect());
    };
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect();
    if items.is_empty() {
        return Err(ConfigError::EmptyComboItems);
    }
    Ok(items.into())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

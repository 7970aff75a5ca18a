use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "slipway.toml",
    "config/slipway.toml",
    "crates/config/slipway.toml",
    "../slipway.toml",
    "../config/slipway.toml",
    "../crates/config/slipway.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub notifications: NotificationConfig,
}

/// Application-level settings.
///
/// `url` is the externally visible base URL of the deployment and is the
/// prefix for every generated link, including user avatar URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Slipway".to_string(),
            url: "http://localhost:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://slipway.db".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub from_address: String,
    #[serde(default = "NotificationConfig::default_enabled")]
    pub enabled: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            from_address: "slipway@localhost".to_string(),
            enabled: Self::default_enabled(),
        }
    }
}

impl NotificationConfig {
    const fn default_enabled() -> bool {
        true
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use slipway_config::load;
///
/// std::env::remove_var("SLIPWAY_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.app.url.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("app.name", defaults.app.name.clone())
        .unwrap()
        .set_default("app.url", defaults.app.url.clone())
        .unwrap()
        .set_default("database.url", defaults.database.url.clone())
        .unwrap()
        .set_default(
            "database.max_connections",
            i64::from(defaults.database.max_connections),
        )
        .unwrap()
        .set_default(
            "notifications.from_address",
            defaults.notifications.from_address.clone(),
        )
        .unwrap()
        .set_default("notifications.enabled", defaults.notifications.enabled)
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("SLIPWAY").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("SLIPWAY_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via SLIPWAY_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    if config.app.url.trim().is_empty() {
        anyhow::bail!("app.url must not be empty");
    }

    debug!(?config, "loaded slipway configuration");
    Ok(config)
}

static CURRENT: OnceCell<AppConfig> = OnceCell::new();

/// Install a configuration as the process-wide current one.
///
/// Returns false if a configuration was already installed; the first install
/// wins for the lifetime of the process.
pub fn install(config: AppConfig) -> bool {
    CURRENT.set(config).is_ok()
}

/// The process-wide configuration.
///
/// Falls back to [`load`] on first access if nothing was installed, and to
/// defaults if loading fails.
pub fn current() -> &'static AppConfig {
    CURRENT.get_or_init(|| load().unwrap_or_default())
}

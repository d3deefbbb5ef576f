use crate::events::AppEvent;
use crate::sys::actions::ShellCommand;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use telepad::units::{DEFAULT_CENTER_MARGIN, DEFAULT_CENTER_RADIUS, DEFAULT_MENU_ANGLE, DEFAULT_MENU_WIDTH};
use telepad::{Density, Dp, GeometryConfig, GeometryError, Zone};
use thiserror::Error;

/// Pad sizes in dp, as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeometrySettings {
    pub center_radius: Dp,
    pub center_margin: Dp,
    pub menu_width: Dp,
    pub menu_angle: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            center_radius: DEFAULT_CENTER_RADIUS,
            center_margin: DEFAULT_CENTER_MARGIN,
            menu_width: DEFAULT_MENU_WIDTH,
            menu_angle: DEFAULT_MENU_ANGLE,
        }
    }
}

impl GeometrySettings {
    pub fn resolve(&self, density: Density) -> Result<GeometryConfig, GeometryError> {
        GeometryConfig::new(
            self.center_radius.to_px(density),
            self.center_margin.to_px(density),
            self.menu_width.to_px(density),
            self.menu_angle,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionConfig {
    pub zone: Zone,
    pub exec: ShellCommand,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub geometry: GeometrySettings,
    #[serde(default)]
    pub density: Density,
    #[serde(default)]
    pub actions: Vec<ActionConfig>,
}

impl Config {
    pub fn geometry_config(&self) -> Result<GeometryConfig, ConfigError> {
        Ok(self.geometry.resolve(self.density)?)
    }

    /// The command bound to a zone. Later entries override earlier ones.
    pub fn action_for(&self, zone: Zone) -> Option<&ShellCommand> {
        self.actions
            .iter()
            .rev()
            .find(|a| a.zone == zone)
            .map(|a| &a.exec)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid pad geometry: {0}")]
    Geometry(#[from] GeometryError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "kidng", "telepad").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder()
}

fn with_environment(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    let s = builder
        .add_source(
            config::Environment::with_prefix("TELEPAD")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Reads the file at `path` (a missing file means defaults), layered under
/// `TELEPAD_*` environment variables.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    with_environment(builder().add_source(config::File::from(path.to_path_buf()).required(false)))
}

/// Same as [`load_config`] for an in-memory TOML document.
pub fn load_config_str(toml: &str) -> Result<Config, ConfigError> {
    with_environment(
        builder().add_source(config::File::from_str(toml, config::FileFormat::Toml)),
    )
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

fn touches(event: &Event, path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == path)
}

/// Watches the config file's directory and asks for a reload whenever the
/// file itself changes. Returns when the receiving side goes away.
pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    if let Err(e) = watch(&config_path, &tx).await {
        log::error!("Config watcher stopped: {}", e);
    }
}

async fn watch(config_path: &Path, tx: &Sender<AppEvent>) -> Result<(), ConfigError> {
    let Some(config_dir) = config_path.parent() else {
        return Ok(());
    };
    if let Err(e) = fs_err::create_dir_all(config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return Ok(());
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(config_dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if touches(&event, config_path) => {
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
    Ok(())
}

pub mod keybindings;
pub mod styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::domain::Role;
use crate::utils;

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Tuning for the demo collaborators: how long the simulated oracle takes
/// before it deposits its canned result.
#[derive(Clone, Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,
    #[serde(default = "default_generate_delay_ms")]
    pub generate_delay_ms: u64,
}

fn default_search_delay_ms() -> u64 {
    1500
}

fn default_generate_delay_ms() -> u64 {
    3000
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: default_search_delay_ms(),
            generate_delay_ms: default_generate_delay_ms(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub default_role: Role,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Load the embedded defaults, then user configuration files from the
    /// config directory on top. Missing user files are fine; the embedded
    /// defaults alone are a complete configuration.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded_defaults()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (mode, default_bindings) in default_config.keybindings.iter() {
            let user_bindings = cfg.keybindings.entry(*mode).or_default();
            for (key, cmd) in default_bindings.iter() {
                user_bindings.entry(key.clone()).or_insert(*cmd);
            }
        }
        for (mode, default_styles) in default_config.styles.iter() {
            let user_styles = cfg.styles.entry(*mode).or_default();
            for (style_key, style) in default_styles.iter() {
                user_styles.entry(style_key.clone()).or_insert(*style);
            }
        }
        if cfg.demo.search_delay_ms == 0 {
            cfg.demo.search_delay_ms = default_config.demo.search_delay_ms;
        }
        if cfg.demo.generate_delay_ms == 0 {
            cfg.demo.generate_delay_ms = default_config.demo.generate_delay_ms;
        }

        Ok(cfg)
    }

    /// The defaults compiled into the binary, without touching the
    /// filesystem. Tests run against exactly this configuration.
    pub fn embedded_defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG).map_err(|e| ConfigError::Message(e.to_string()))
    }
}

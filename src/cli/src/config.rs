use std::{
    fs, io,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{WrapErr, bail};
use cube_core::ColorScheme;
use log::info;
use serde::{Deserialize, Serialize};

/// Settings read from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where named saves are kept. Relative paths are resolved against the
    /// directory holding the config file.
    pub saves: PathBuf,
    pub scramble_length: usize,
    pub scheme: ColorScheme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            saves: PathBuf::from("saves.toml"),
            scramble_length: 25,
            scheme: ColorScheme::default(),
        }
    }
}

/// `<config_dir>/cube/config.toml`, or `config.toml` in the working
/// directory when the platform has no config directory.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("cube"))
        .unwrap_or_default()
        .join("config.toml")
}

impl Config {
    /// Read the config at `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> color_eyre::Result<Config> {
        let mut config = match fs::read_to_string(path) {
            Ok(text) => Config::parse(&text)
                .wrap_err_with(|| format!("Failed to parse the config file {}", path.display()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No config at {}, using defaults", path.display());
                Config::default()
            }
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("Failed to read the config file {}", path.display()));
            }
        };

        if config.saves.is_relative()
            && let Some(parent) = path.parent()
        {
            config.saves = parent.join(&config.saves);
        }

        Ok(config)
    }

    pub fn parse(text: &str) -> color_eyre::Result<Config> {
        let config = toml::from_str::<Config>(text)?;
        if !config.scheme.is_distinct() {
            bail!("The color scheme must give every face a different color");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{Color, Face};

    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn full_config() {
        let config = Config::parse(
            r#"
            saves = "/tmp/cube-saves.toml"
            scramble_length = 40

            [scheme]
            U = "yellow"
            R = "blue"
            F = "red"
            D = "white"
            L = "green"
            B = "orange"
            "#,
        )
        .unwrap();
        assert_eq!(config.saves, PathBuf::from("/tmp/cube-saves.toml"));
        assert_eq!(config.scramble_length, 40);
        assert_eq!(config.scheme.center(Face::U), Color::Yellow);
        assert_eq!(config.scheme.center(Face::L), Color::Green);
    }

    #[test]
    fn rejects_bad_configs() {
        assert!(Config::parse("scramble_length = \"long\"").is_err());
        assert!(Config::parse("colour = 3").is_err());
        assert!(
            Config::parse(
                r#"
                [scheme]
                U = "white"
                R = "white"
                F = "red"
                D = "yellow"
                L = "blue"
                B = "orange"
                "#
            )
            .is_err()
        );
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = std::env::temp_dir().join(format!("cube-config-{}", fastrand::u64(..)));
        let config = Config::load(&dir.join("config.toml")).unwrap();
        assert_eq!(config.scramble_length, 25);
        assert_eq!(config.saves, dir.join("saves.toml"));
    }
}

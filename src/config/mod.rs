use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::export::{Format, MAX_PRECISION};
use crate::preset::{PresetError, ScalePreset};
use crate::scale::{RatioSetting, TypographicScale};

const APP_DIR: &str = "typescale";
const APP_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read config: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {path}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid preset in config")]
    Preset(#[from] PresetError),
    #[error("precision {precision} in {path} exceeds the maximum of {max}", max = MAX_PRECISION)]
    Precision { path: PathBuf, precision: u32 },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// User defaults from `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScaleConfig {
    #[serde(default)]
    pub base: Option<f64>,
    #[serde(default)]
    pub ratio: Option<RatioSetting>,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub format: Option<Format>,
    #[serde(default)]
    pub precision: Option<u32>,
}

/// Explicit choices that take priority over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScaleOverrides {
    pub base: Option<f64>,
    pub ratio: Option<RatioSetting>,
    pub preset: Option<ScalePreset>,
}

impl ScaleConfig {
    fn preset(&self) -> ConfigResult<Option<ScalePreset>> {
        self.preset
            .as_deref()
            .map(ScalePreset::parse)
            .transpose()
            .map_err(ConfigError::from)
    }

    /// Resolves the effective `(base, ratio)`.
    ///
    /// A preset supplies both halves; an explicit base or ratio, from the
    /// overrides first and then from this config, replaces its half.
    pub fn resolve(&self, overrides: &ScaleOverrides) -> ConfigResult<(f64, f64)> {
        let preset = match overrides.preset {
            Some(preset) => preset,
            None => self.preset()?.unwrap_or_default(),
        };

        let base = overrides.base.or(self.base).unwrap_or(preset.base);
        let ratio = overrides
            .ratio
            .or(self.ratio)
            .map_or(preset.ratio.value(), RatioSetting::value);

        tracing::debug!(base, ratio, %preset, "resolved scale inputs");
        Ok((base, ratio))
    }

    pub fn scale(&self, overrides: &ScaleOverrides) -> ConfigResult<TypographicScale> {
        let (base, ratio) = self.resolve(overrides)?;
        Ok(TypographicScale::new(base, ratio))
    }
}

pub fn load_config() -> ConfigResult<ScaleConfig> {
    let (xdg_config_home, home) = config_env_dirs();
    load_config_with(xdg_config_home.as_deref(), home.as_deref())
}

pub fn load_config_from(path: &Path) -> ConfigResult<ScaleConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ScaleConfig =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some(precision) = config.precision.filter(|p| *p > MAX_PRECISION) {
        return Err(ConfigError::Precision {
            path: path.to_path_buf(),
            precision,
        });
    }
    Ok(config)
}

fn load_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ConfigResult<ScaleConfig> {
    let path = app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home)?;
    if !path.exists() {
        tracing::debug!(?path, "no config file; using defaults");
        return Ok(ScaleConfig::default());
    }
    load_config_from(&path)
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<PathBuf> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ConfigResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleRatio;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("typescale-config-{pid}-{nanos}"));
        path
    }

    fn with_config<F: FnOnce(&Path)>(contents: Option<&str>, f: F) {
        let root = fixture_root();
        let path = app_config_path(APP_DIR, APP_CONFIG_FILE, Some(&root), None).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "typescale",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/typescale/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path(
            "typescale",
            "config.json",
            Some(Path::new("")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/typescale/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("typescale", "config.json", None, None).unwrap_err();
        assert!(matches!(error, ConfigError::MissingHomeDirectory));
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        with_config(None, |root| {
            let config = load_config_with(Some(root), None).unwrap();
            assert_eq!(config, ScaleConfig::default());
            let scale = config.scale(&ScaleOverrides::default()).unwrap();
            assert_eq!(scale, TypographicScale::default());
        });
    }

    #[test]
    fn config_parses_named_and_numeric_ratios() {
        with_config(
            Some(r#"{ "base": 16, "ratio": "extraLarge", "format": "css", "precision": 2 }"#),
            |root| {
                let config = load_config_with(Some(root), None).unwrap();
                assert_eq!(config.base, Some(16.0));
                assert_eq!(config.ratio, Some(RatioSetting::Named(ScaleRatio::ExtraLarge)));
                assert_eq!(config.format, Some(Format::Css));
                assert_eq!(config.precision, Some(2));
            },
        );

        with_config(Some(r#"{ "ratio": 1.25 }"#), |root| {
            let config = load_config_with(Some(root), None).unwrap();
            assert_eq!(config.ratio, Some(RatioSetting::Value(1.25)));
            let (base, ratio) = config.resolve(&ScaleOverrides::default()).unwrap();
            assert_eq!(base, 14.0);
            assert_eq!(ratio, 1.25);
        });
    }

    #[test]
    fn config_rejects_invalid_payload() {
        with_config(Some("{ invalid "), |root| {
            let err = load_config_with(Some(root), None).unwrap_err();
            assert!(matches!(err, ConfigError::Parse { .. }));
        });
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        with_config(Some(r#"{ "preset": "normal-16" }"#), |root| {
            let path = root.join(APP_DIR).join(APP_CONFIG_FILE);
            let config = load_config_from(&path).unwrap();
            assert_eq!(config.preset.as_deref(), Some("normal-16"));
            let scale = config.scale(&ScaleOverrides::default()).unwrap();
            assert_eq!(scale, TypographicScale::from_ratio(16.0, ScaleRatio::Normal));
        });
    }

    #[test]
    fn unreadable_config_path_is_reported() {
        with_config(None, |root| {
            let missing = root.join("absent.json");
            let err = load_config_from(&missing).unwrap_err();
            assert!(matches!(err, ConfigError::Read { ref path, .. } if *path == missing));

            let err = load_config_from(root).unwrap_err();
            assert!(matches!(err, ConfigError::Read { .. }));
        });
    }

    #[test]
    fn config_precision_above_the_cap_is_rejected() {
        with_config(Some(r#"{ "precision": 400 }"#), |root| {
            let err = load_config_with(Some(root), None).unwrap_err();
            assert!(matches!(err, ConfigError::Precision { precision: 400, .. }));
        });

        with_config(Some(r#"{ "precision": 15 }"#), |root| {
            let config = load_config_with(Some(root), None).unwrap();
            assert_eq!(config.precision, Some(MAX_PRECISION));
        });
    }

    #[test]
    fn preset_supplies_defaults_that_explicit_values_replace() {
        let config = ScaleConfig {
            preset: Some("small-12".to_string()),
            ratio: Some(RatioSetting::Named(ScaleRatio::Normal)),
            ..ScaleConfig::default()
        };

        let (base, ratio) = config.resolve(&ScaleOverrides::default()).unwrap();
        assert_eq!(base, 12.0);
        assert_eq!(ratio, ScaleRatio::Normal.value());

        let overrides = ScaleOverrides {
            base: Some(18.0),
            ..ScaleOverrides::default()
        };
        let (base, ratio) = config.resolve(&overrides).unwrap();
        assert_eq!(base, 18.0);
        assert_eq!(ratio, ScaleRatio::Normal.value());
    }

    #[test]
    fn override_preset_replaces_config_preset() {
        let config = ScaleConfig {
            preset: Some("small-12".to_string()),
            ..ScaleConfig::default()
        };
        let overrides = ScaleOverrides {
            preset: Some(ScalePreset::new(ScaleRatio::ExtraLarge, 10.0)),
            ..ScaleOverrides::default()
        };
        let (base, ratio) = config.resolve(&overrides).unwrap();
        assert_eq!(base, 10.0);
        assert_eq!(ratio, ScaleRatio::ExtraLarge.value());
    }

    #[test]
    fn invalid_config_preset_is_reported() {
        let config = ScaleConfig {
            preset: Some("giant-14".to_string()),
            ..ScaleConfig::default()
        };
        let err = config.resolve(&ScaleOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Preset(PresetError::UnknownRatio { .. })));
    }
}

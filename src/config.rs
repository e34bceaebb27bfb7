// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `GRAPH_VISUAL_*` environment variables. Nothing is ever written back.

use crate::palette::{palette, ColorScheme, THRESHOLDS};
use crate::scale::{VisualRange, NODE_SIZE};
use crate::types::{GraphType, Theme};
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "GRAPH_VISUAL";

/// Errors raised while loading or reading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized
    #[error("failed to load settings")]
    Load(#[from] config::ConfigError),
    /// Settings could not be encoded as TOML
    #[error("failed to encode settings")]
    Encode(#[from] toml::ser::Error),
    /// No such setting
    #[error("unknown setting `{0}` (expected theme, graph_type, locale, log_level, node_size or scheme)")]
    UnknownKey(String),
}

/// Custom thresholds and palettes
///
/// An empty palette falls back to the built-in one for that theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeOverride {
    /// Ascending breakpoints
    pub thresholds: Vec<f64>,
    /// Light palette, one more entry than thresholds
    #[serde(default)]
    pub light: Vec<String>,
    /// Dark palette, one more entry than thresholds
    #[serde(default)]
    pub dark: Vec<String>,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Active theme
    pub theme: Theme,
    /// Backend selector
    pub graph_type: GraphType,
    /// UI locale for captions
    pub locale: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Node size range
    pub node_size: VisualRange,
    /// Custom color scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<SchemeOverride>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            graph_type: GraphType::Force,
            locale: "en".to_string(),
            log_level: "info".to_string(),
            node_size: NODE_SIZE,
            scheme: None,
        }
    }
}

impl Settings {
    /// Custom scheme for `theme`, if one is configured
    #[must_use]
    pub fn scheme_override(&self, theme: Theme) -> Option<ColorScheme> {
        let custom = self.scheme.as_ref()?;
        let colors = match theme {
            Theme::Light => &custom.light,
            Theme::Dark => &custom.dark,
        };
        let colors = if colors.is_empty() {
            palette(theme).iter().map(|c| (*c).to_string()).collect()
        } else {
            colors.clone()
        };
        Some(ColorScheme::new(custom.thresholds.clone(), colors))
    }

    /// Scheme in effect for `theme`
    #[must_use]
    pub fn scheme(&self, theme: Theme) -> ColorScheme {
        self.scheme_override(theme)
            .unwrap_or_else(|| ColorScheme::for_theme(theme))
    }

    /// Render one setting as text
    pub fn get(&self, key: &str) -> Result<String, SettingsError> {
        let value = match key {
            "theme" => self.theme.to_string(),
            "graph_type" | "graph-type" => self.graph_type.to_string(),
            "locale" => self.locale.clone(),
            "log_level" | "log-level" => self.log_level.clone(),
            "node_size" | "node-size" => format!("{} {}", self.node_size.lo, self.node_size.hi),
            "scheme" => {
                let thresholds = self
                    .scheme
                    .as_ref()
                    .map_or_else(|| THRESHOLDS.to_vec(), |s| s.thresholds.clone());
                thresholds
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            }
            other => return Err(SettingsError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    /// Encode as TOML
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Default settings file location
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "graph-visual")
        .map(|d| d.config_dir().join("settings.toml"))
}

/// Load settings
///
/// An explicit `path` must exist; the default location is optional.
pub fn load(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut builder = config::Config::builder().add_source(config::Config::try_from(&Settings::default())?);

    match path {
        Some(path) => {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        None => {
            if let Some(path) = default_path() {
                builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false));
            }
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    tracing::debug!(
        "Loaded settings: theme={}, graph_type={}",
        settings.theme,
        settings.graph_type
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.graph_type, GraphType::Force);
        assert_eq!(settings.node_size, NODE_SIZE);
        assert_eq!(settings.scheme(Theme::Dark), ColorScheme::for_theme(Theme::Dark));
    }

    #[test]
    fn test_load_file() {
        let file = settings_file(
            r##"
theme = "dark"
graph_type = "antv"
locale = "zh_CN"
node_size = [4.0, 40.0]

[scheme]
thresholds = [1.0, 2.0]
dark = ["#000001", "#000002", "#000003"]
"##,
        );

        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.graph_type, GraphType::NodeLink);
        assert_eq!(settings.locale, "zh_CN");
        assert_eq!(settings.node_size, VisualRange { lo: 4.0, hi: 40.0 });

        let scheme = settings.scheme(Theme::Dark);
        assert!(scheme.is_valid());
        assert_eq!(scheme.color_for(1.5), "#000002");
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = settings_file("theme = \"dark\"\n");
        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.locale, "en");
        assert_eq!(settings.node_size, NODE_SIZE);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        assert!(load(Some(Path::new("/nonexistent/settings.toml"))).is_err());
    }

    #[test]
    fn test_unknown_graph_type_is_unsupported() {
        let file = settings_file("graph_type = \"sankey\"\n");
        let settings = load(Some(file.path())).unwrap();
        assert_eq!(settings.graph_type, GraphType::Unsupported);
    }

    #[test]
    fn test_override_without_palette_uses_builtin() {
        let settings = Settings {
            scheme: Some(SchemeOverride {
                thresholds: vec![1.0, 2.0],
                light: vec![],
                dark: vec![],
            }),
            ..Settings::default()
        };
        let scheme = settings.scheme(Theme::Light);
        assert!(!scheme.is_valid());
        assert_eq!(scheme.color_for(0.0), "#216E39");
    }

    #[test]
    fn test_get() {
        let settings = Settings::default();
        assert_eq!(settings.get("theme").unwrap(), "light");
        assert_eq!(settings.get("graph-type").unwrap(), "force");
        assert_eq!(settings.get("node_size").unwrap(), "10 30");
        assert_eq!(settings.get("scheme").unwrap(), "10 100 1000");
        assert!(matches!(settings.get("nope"), Err(SettingsError::UnknownKey(_))));
    }

    #[test]
    fn test_to_toml() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("theme = \"light\""));
        assert!(toml.contains("graph_type = \"force\""));
        assert!(!toml.contains("scheme"));
    }
}

//! Configuration for the export surface
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (graphvis.toml)
//! - Environment variables (GRAPHQL_VIS_*)
//!
//! ## Example config file (graphvis.toml):
//! ```toml
//! [build]
//! show_fields = true
//! show_interfaces = false
//!
//! [export]
//! format = "json"
//! pretty = true
//!
//! [[groups]]
//! group = "Type"
//! icon = ""
//! color = "#88aaff"
//! ```
//!
//! The library API takes [`BuildOptions`] and [`GroupTable`] explicitly;
//! this layer only feeds the CLI.

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::graph::BuildOptions;
use crate::groups::{GroupStyle, GroupTable, VisualGroup};

/// Main configuration for the graph exporter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisConfig {
    /// Expansion policy
    #[serde(default)]
    pub build: BuildConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Group style overrides, applied over the default palette
    #[serde(default)]
    pub groups: Vec<GroupOverride>,
}

/// Expansion policy knobs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Materialize field nodes
    #[serde(default)]
    pub show_fields: bool,

    /// Materialize interface nodes
    #[serde(default)]
    pub show_interfaces: bool,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output format
    #[serde(default)]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

/// Output format for the exported graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Node/edge JSON for the rendering collaborator
    #[default]
    Json,
    /// GraphViz DOT
    Dot,
}

/// One group style override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupOverride {
    pub group: VisualGroup,
    pub icon: String,
    pub color: String,
}

fn default_true() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            pretty: true,
        }
    }
}

impl VisConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["graphvis.toml", ".graphvis.toml", "config/graphvis.toml"];
        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "graphql-vis") {
            let xdg_config = config_dir.config_dir().join("graphvis.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("GRAPHQL_VIS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// The expansion policy this config describes.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            show_fields: self.build.show_fields,
            show_interfaces: self.build.show_interfaces,
        }
    }

    /// The default palette with this config's overrides applied.
    pub fn group_table(&self) -> GroupTable {
        let mut table = GroupTable::default();
        for entry in &self.groups {
            table.set(entry.group, GroupStyle::new(&entry.icon, &entry.color));
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VisConfig::default();
        assert!(!config.build.show_fields);
        assert!(!config.build.show_interfaces);
        assert_eq!(config.export.format, ExportFormat::Json);
    }

    #[test]
    fn test_serialize_config() {
        let config = VisConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[build]"));
        assert!(toml_str.contains("[export]"));
    }

    #[test]
    fn test_group_overrides() {
        let mut config = VisConfig::default();
        config.groups.push(GroupOverride {
            group: VisualGroup::Type,
            icon: "\u{f069}".to_string(),
            color: "#123456".to_string(),
        });
        let table = config.group_table();
        assert_eq!(table.get(VisualGroup::Type).unwrap().color, "#123456");
        // Untouched groups keep the default palette.
        assert_eq!(table.get(VisualGroup::Query).unwrap().color, "#47d36f");
    }
}

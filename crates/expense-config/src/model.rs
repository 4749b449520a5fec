use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable preferences for the tracker shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Display label prefixed to every formatted amount. Not a conversion currency.
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_export_file_name")]
    pub export_file_name: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional directory for CSV exports. Defaults to the documents or home directory.
    pub default_export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            export_file_name: Self::default_export_file_name(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_export_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_export_file_name() -> String {
        "expenses.csv".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_export_dir(&self) -> PathBuf {
        if let Some(path) = &self.default_export_dir {
            return path.clone();
        }

        dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Full path used by `export` when no explicit destination is given.
    pub fn resolve_export_path(&self) -> PathBuf {
        self.resolve_export_dir().join(&self.export_file_name)
    }
}

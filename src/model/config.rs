use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// How list rows are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStyle {
    #[default]
    Table,
    Compact,
}

impl RowStyle {
    pub fn toggled(self) -> Self {
        match self {
            RowStyle::Table => RowStyle::Compact,
            RowStyle::Compact => RowStyle::Table,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RowStyle::Table => "table",
            RowStyle::Compact => "list",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Row style the list starts in
    #[serde(default)]
    pub row_style: RowStyle,
    /// Theme slot overrides as "#RRGGBB"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Central configuration for the dashboard render pass.
///
/// Every field has a default matching the stock report, so an empty JSON
/// object (or no config file at all) yields the standard dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Employee CSV consumed by the render pass.
    pub input_path: PathBuf,
    pub report_title: String,
    pub font_family: String,
    pub base_font_size: usize,
    pub heatmap_height: usize,
    pub boxplot_height: usize,
    pub bar_height: usize,
    /// Merge distance above which dendrogram links use the neutral color.
    pub dendrogram_color_threshold: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("work.csv"),
            report_title: "Employee Insights Dashboard".to_string(),
            font_family: "Georgia".to_string(),
            base_font_size: 12,
            heatmap_height: 500,
            boxplot_height: 500,
            bar_height: 400,
            dendrogram_color_threshold: 100.0,
        }
    }
}

/// Load a dashboard configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DashboardConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DashboardConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

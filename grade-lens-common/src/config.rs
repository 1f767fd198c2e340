use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_max_rows")]
    pub max_rows_preview: usize,
}

fn default_max_rows() -> usize {
    20
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows_preview: default_max_rows(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_kind")]
    pub default_kind: String,
    #[serde(default = "default_label_order")]
    pub label_order: String, // "lexical" | "numeric"
    #[serde(default = "default_value_axis_name")]
    pub value_axis_name: String,
}

fn default_kind() -> String {
    "bar".into()
}
fn default_label_order() -> String {
    "lexical".into()
}
fn default_value_axis_name() -> String {
    "Count".into()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_kind: default_kind(),
            label_order: default_label_order(),
            value_axis_name: default_value_axis_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_format() -> String {
    "json".into()
}
fn default_output_dir() -> String {
    ".".into()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("grade-lens")
            .join("config.toml")
    }

    /// Loads from `$GRADE_LENS_CONFIG` or the default path; a missing file yields defaults.
    pub fn load() -> crate::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("GRADE_LENS_CONFIG") {
            PathBuf::from(env_path)
        } else {
            Self::config_path()
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::GradeLensError::Other(e.to_string()))
    }

    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::GradeLensError::Other(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.chart.default_kind, "bar");
        assert_eq!(cfg.chart.label_order, "lexical");
        assert_eq!(cfg.display.max_rows_preview, 20);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chart]\nlabel_order = \"numeric\"\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.chart.label_order, "numeric");
        assert_eq!(cfg.chart.value_axis_name, "Count");
        assert_eq!(cfg.export.output_dir, ".");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.display.max_rows_preview = 5;
        cfg.save_to(&path).unwrap();
        let back = Config::load_from(&path).unwrap();
        assert_eq!(back.display.max_rows_preview, 5);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chart\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}

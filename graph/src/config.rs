use crate::error::{GraphError, Result};
use crate::render::{DEFAULT_BUFFER, DEFAULT_CACHE_CAPACITY, DEFAULT_ZOOM_THRESHOLD};
use crate::render::{EdgeRouter, GraphCache};
use crate::layout::GraphBuilder;
use crate::ui::InteractionController;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Tunable constants for layout, routing and interaction
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Height of one commit row in pixels
    pub row_height: f64,
    /// Width of one lane in pixels
    pub lane_width: f64,
    /// Delay before a hover tooltip appears
    pub hover_delay_ms: u64,
    /// Extra rows laid out above and below the viewport
    pub visible_buffer: usize,
    /// Zoom level above which every node is drawn
    pub zoom_threshold: f64,
    /// Number of layouts kept by [`GraphCache`]
    pub cache_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            row_height: 50.0,
            lane_width: 30.0,
            hover_delay_ms: 300,
            visible_buffer: DEFAULT_BUFFER,
            zoom_threshold: DEFAULT_ZOOM_THRESHOLD,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl GraphConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded graph config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(GraphError::Config(format!(
                "row_height must be a positive number, got {}",
                self.row_height
            )));
        }
        if !(self.lane_width.is_finite() && self.lane_width > 0.0) {
            return Err(GraphError::Config(format!(
                "lane_width must be a positive number, got {}",
                self.lane_width
            )));
        }
        if self.zoom_threshold.is_nan() {
            return Err(GraphError::Config("zoom_threshold must be a number".to_string()));
        }
        Ok(())
    }

    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }

    pub fn builder(&self) -> GraphBuilder {
        GraphBuilder::new(self.lane_width)
    }

    pub fn router(&self) -> EdgeRouter {
        EdgeRouter::new(self.row_height, self.lane_width)
    }

    pub fn cache(&self) -> GraphCache {
        GraphCache::new(self.cache_capacity)
    }

    pub fn interactions(&self) -> InteractionController {
        InteractionController::new(self.hover_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.hover_delay(), Duration::from_millis(300));
        assert_eq!(config.visible_buffer, 10);
        assert_eq!(config.zoom_threshold, 0.8);
        assert_eq!(config.cache_capacity, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = GraphConfig::from_toml_str("row_height = 24.0\nlane_width = 12.5\n").unwrap();
        assert_eq!(config.row_height, 24.0);
        assert_eq!(config.lane_width, 12.5);
        assert_eq!(config.hover_delay_ms, 300);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let err = GraphConfig::from_toml_str("lane_width = 0.0").unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));

        let err = GraphConfig::from_toml_str("row_height = \"tall\"").unwrap_err();
        assert!(matches!(err, GraphError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cache_capacity = 3").unwrap();
        writeln!(file, "hover_delay_ms = 150").unwrap();

        let config = GraphConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.cache().capacity(), 3);
        assert_eq!(config.hover_delay(), Duration::from_millis(150));
    }

    #[test]
    fn test_missing_file() {
        let err = GraphConfig::load_from_file(Path::new("/nonexistent/graph.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}

//! Engine configuration.

use tile_core::{Density, LayoutError};

use crate::engine::LayoutEngine;

/// Unvalidated engine settings.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Pixel size of one grid unit
    pub item_size: u32,
    /// Rows per block in horizontal orientation
    pub row_count: u32,
    /// Columns per block in vertical orientation
    pub column_count: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            item_size: Density::default().item_size(),
            row_count: 1,
            column_count: 1,
        }
    }
}

impl EngineConfig {
    pub fn new(item_size: u32) -> Self {
        Self {
            item_size,
            ..Default::default()
        }
    }

    /// Set the item size.
    pub fn with_item_size(mut self, item_size: u32) -> Self {
        self.item_size = item_size;
        self
    }

    /// Set the item size from a density preset.
    pub fn with_density(mut self, density: Density) -> Self {
        self.item_size = density.item_size();
        self
    }

    /// Set rows per horizontal block.
    pub fn with_rows(mut self, row_count: u32) -> Self {
        self.row_count = row_count;
        self
    }

    /// Set columns per vertical block.
    pub fn with_columns(mut self, column_count: u32) -> Self {
        self.column_count = column_count;
        self
    }

    /// Validate and build an engine.
    pub fn build(&self) -> Result<LayoutEngine, LayoutError> {
        LayoutEngine::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let engine = EngineConfig::default().build().unwrap();
        assert_eq!(engine.item_size(), 150);
        assert_eq!(engine.row_count(), 1);
        assert_eq!(engine.column_count(), 1);
    }

    #[test]
    fn test_builder() {
        let engine = EngineConfig::new(64)
            .with_rows(3)
            .with_columns(4)
            .build()
            .unwrap();
        assert_eq!((engine.item_size(), engine.row_count(), engine.column_count()), (64, 3, 4));

        let compact = EngineConfig::default().with_density(Density::Compact);
        assert_eq!(compact.item_size, 120);
        assert_eq!(compact.with_item_size(90).item_size, 90);
    }

    #[test]
    fn test_build_validates() {
        let err = EngineConfig::default().with_rows(0).build().unwrap_err();
        assert_eq!(err, LayoutError::InvalidConfiguration { field: "row_count", value: 0 });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig = serde_json::from_str(r#"{"row_count": 4}"#).unwrap();
        assert_eq!(config, EngineConfig::default().with_rows(4));
    }
}

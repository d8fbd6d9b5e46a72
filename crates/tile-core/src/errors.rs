//! Error types for the tile layout engine.

use thiserror::Error;

/// Top-level error type for the tile layout engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Tile(#[from] TileError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building tiles or resolving presets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TileError {
    #[error("Tile dimensions must be positive integers, got {width_units}x{height_units}")]
    InvalidDimensions { width_units: u32, height_units: u32 },

    #[error("Unknown tile size preset: {name}")]
    UnknownTileSize { name: String },

    #[error("Unknown density preset: {name}")]
    UnknownDensity { name: String },
}

/// Errors raised by the layout engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid configuration: {field} must be positive, got {value}")]
    InvalidConfiguration { field: &'static str, value: u32 },

    #[error("Invalid configuration: {field} must be at most {max}, got {value}")]
    ConfigurationOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("Orientation must be 'horizontal' or 'vertical', got {value:?}")]
    InvalidOrientation { value: String },

    #[error(
        "Tile {id:?} ({width_units}x{height_units}) exceeds the block size of {max_width}x{max_height}"
    )]
    TileTooLarge {
        id: String,
        width_units: u32,
        height_units: u32,
        max_width: u32,
        max_height: u32,
    },

    #[error("Pixel position of tile {id:?} does not fit in 64 bits")]
    CoordinateOverflow { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TileError::InvalidDimensions {
            width_units: 0,
            height_units: 2,
        };
        assert_eq!(
            err.to_string(),
            "Tile dimensions must be positive integers, got 0x2"
        );

        let err = LayoutError::InvalidOrientation {
            value: "diagonal".into(),
        };
        assert_eq!(
            err.to_string(),
            "Orientation must be 'horizontal' or 'vertical', got \"diagonal\""
        );
    }

    #[test]
    fn test_top_level_conversion() {
        let err: Error = LayoutError::InvalidConfiguration {
            field: "item_size",
            value: 0,
        }
        .into();
        assert!(matches!(
            err,
            Error::Layout(LayoutError::InvalidConfiguration { field: "item_size", .. })
        ));
        // Transparent: the wrapper adds nothing to the message.
        assert_eq!(
            err.to_string(),
            "Invalid configuration: item_size must be positive, got 0"
        );
    }
}

//! Orientation and the block geometry it implies.

use std::fmt;
use std::str::FromStr;

use glam::{U64Vec2, UVec2};
use tile_core::{LayoutError, Tile};

/// Fixed extent of a block along its growth axis, in grid units.
const BLOCK_DEPTH: u32 = 2;

/// Direction in which tile groups grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Blocks are two units wide and `row_count` tall, laid out left to right.
    #[default]
    Horizontal,
    /// Blocks are `column_count` wide and two units tall, stacked top to bottom.
    Vertical,
}

/// Order in which candidate cells are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    /// Rows outer, columns inner.
    RowMajor,
    /// Columns outer, rows inner.
    ColumnMajor,
}

impl Orientation {
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Block geometry for this orientation.
    pub fn block_shape(self, row_count: u32, column_count: u32) -> BlockShape {
        match self {
            Orientation::Horizontal => BlockShape {
                width: BLOCK_DEPTH,
                height: row_count,
                scan: ScanOrder::RowMajor,
                axis: UVec2::X,
            },
            Orientation::Vertical => BlockShape {
                width: column_count,
                height: BLOCK_DEPTH,
                scan: ScanOrder::ColumnMajor,
                axis: UVec2::Y,
            },
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else {
            Err(LayoutError::InvalidOrientation { value: s.to_string() })
        }
    }
}

/// Geometry of one logical block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockShape {
    /// Width in grid units.
    pub width: u32,
    /// Height in grid units.
    pub height: u32,
    /// Candidate cell visiting order.
    pub scan: ScanOrder,
    /// Unit vector of the growth axis.
    axis: UVec2,
}

impl BlockShape {
    /// Pixel offset between the origins of consecutive blocks.
    pub fn advance(&self, item_size: u32) -> U64Vec2 {
        self.axis.as_u64vec2() * (u64::from(BLOCK_DEPTH) * u64::from(item_size))
    }

    /// Whether a tile can fit an empty block of this shape.
    pub fn accepts(&self, tile: &Tile) -> bool {
        tile.width_units() <= self.width && tile.height_units() <= self.height
    }

    /// Build the error for a tile this shape can never hold.
    pub(crate) fn too_large(&self, tile: &Tile) -> LayoutError {
        LayoutError::TileTooLarge {
            id: tile.id().to_string(),
            width_units: tile.width_units(),
            height_units: tile.height_units(),
            max_width: self.width,
            max_height: self.height,
        }
    }
}

//! The layout engine: block-by-block first-fit placement.

use glam::U64Vec2;
use tracing::{debug, trace};

use tile_core::{LayoutError, PixelRect, PositionedTile, Tile};

use crate::config::EngineConfig;
use crate::grid::OccupancyGrid;
use crate::orientation::Orientation;

/// Computes pixel positions for tiles.
///
/// Configuration is fixed at construction. `layout` keeps all working
/// state local to the call, so one engine may be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    item_size: u32,
    row_count: u32,
    column_count: u32,
}

/// Detailed result of a layout run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    tiles: Vec<PositionedTile>,
    block_count: usize,
    extent: Option<PixelRect>,
}

impl Layout {
    /// Positioned tiles, in input order.
    pub fn tiles(&self) -> &[PositionedTile] {
        &self.tiles
    }

    /// Number of blocks opened. Zero when there were no tiles.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Union of every tile's pixel rectangle.
    pub fn extent(&self) -> Option<PixelRect> {
        self.extent
    }

    pub fn into_tiles(self) -> Vec<PositionedTile> {
        self.tiles
    }
}

impl LayoutEngine {
    /// Largest accepted `row_count` and `column_count`.
    ///
    /// Bounds the occupancy grid of one block to `2 * MAX_BLOCK_SPAN` cells.
    pub const MAX_BLOCK_SPAN: u32 = 1 << 16;

    /// Create an engine, rejecting zero dimensions and block spans above
    /// [`MAX_BLOCK_SPAN`](Self::MAX_BLOCK_SPAN).
    pub fn new(item_size: u32, row_count: u32, column_count: u32) -> Result<Self, LayoutError> {
        for (field, value) in [
            ("item_size", item_size),
            ("row_count", row_count),
            ("column_count", column_count),
        ] {
            if value == 0 {
                return Err(LayoutError::InvalidConfiguration { field, value });
            }
        }

        for (field, value) in [("row_count", row_count), ("column_count", column_count)] {
            if value > Self::MAX_BLOCK_SPAN {
                return Err(LayoutError::ConfigurationOutOfRange {
                    field,
                    value,
                    max: Self::MAX_BLOCK_SPAN,
                });
            }
        }

        Ok(Self {
            item_size,
            row_count,
            column_count,
        })
    }

    /// Create an engine with a single row and column.
    pub fn with_item_size(item_size: u32) -> Result<Self, LayoutError> {
        Self::new(item_size, 1, 1)
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, LayoutError> {
        Self::new(config.item_size, config.row_count, config.column_count)
    }

    pub fn item_size(&self) -> u32 {
        self.item_size
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    /// Lay out tiles for an orientation given by name (case-insensitive).
    pub fn layout(
        &self,
        tiles: &[Tile],
        orientation: &str,
    ) -> Result<Vec<PositionedTile>, LayoutError> {
        let orientation: Orientation = orientation.parse()?;
        self.layout_with(tiles, orientation)
    }

    /// Lay out tiles for a typed orientation.
    pub fn layout_with(
        &self,
        tiles: &[Tile],
        orientation: Orientation,
    ) -> Result<Vec<PositionedTile>, LayoutError> {
        self.arrange(tiles, orientation).map(Layout::into_tiles)
    }

    /// Lay out tiles and report block usage and overall extent.
    ///
    /// Fails without placing anything if any tile is larger than a block.
    pub fn arrange(
        &self,
        tiles: &[Tile],
        orientation: Orientation,
    ) -> Result<Layout, LayoutError> {
        let shape = orientation.block_shape(self.row_count, self.column_count);

        if let Some(tile) = tiles.iter().find(|tile| !shape.accepts(tile)) {
            return Err(shape.too_large(tile));
        }

        if tiles.is_empty() {
            return Ok(Layout::default());
        }

        let mut grid = OccupancyGrid::new(shape.width, shape.height).ok_or_else(|| {
            let (field, value) = match orientation {
                Orientation::Horizontal => ("row_count", self.row_count),
                Orientation::Vertical => ("column_count", self.column_count),
            };
            LayoutError::ConfigurationOutOfRange {
                field,
                value,
                max: Self::MAX_BLOCK_SPAN,
            }
        })?;

        let item_size = u64::from(self.item_size);
        let advance = shape.advance(self.item_size);
        let mut origin = U64Vec2::ZERO;
        let mut block_count = 1;
        let mut extent: Option<PixelRect> = None;
        let mut placed = Vec::with_capacity(tiles.len());

        for tile in tiles {
            let (width, height) = (tile.width_units(), tile.height_units());
            let overflow = || LayoutError::CoordinateOverflow {
                id: tile.id().to_string(),
            };

            let cell = loop {
                if let Some(cell) = grid.find_space(width, height, shape.scan) {
                    break cell;
                }
                // Any accepted tile fits an empty block, so this runs at most once per tile.
                origin = checked_offset(origin, advance).ok_or_else(overflow)?;
                grid.clear();
                block_count += 1;
                trace!(
                    block = block_count,
                    x = origin.x,
                    y = origin.y,
                    tile = tile.id(),
                    "opened block"
                );
            };

            grid.occupy(cell, width, height);

            let position =
                checked_offset(origin, cell.as_u64vec2() * item_size).ok_or_else(overflow)?;
            let size = U64Vec2::new(u64::from(width), u64::from(height)) * item_size;
            checked_offset(position, size).ok_or_else(overflow)?;

            let positioned = PositionedTile::new(tile.clone(), position.x, position.y);
            let bounds = positioned.bounds(self.item_size);
            extent = Some(extent.map_or(bounds, |e| e.union(&bounds)));
            placed.push(positioned);
        }

        debug!(
            orientation = %orientation,
            tiles = placed.len(),
            blocks = block_count,
            "tile layout complete"
        );

        Ok(Layout {
            tiles: placed,
            block_count,
            extent,
        })
    }
}

/// Component-wise `base + offset`, or `None` if either axis leaves `u64`.
fn checked_offset(base: U64Vec2, offset: U64Vec2) -> Option<U64Vec2> {
    Some(U64Vec2::new(
        base.x.checked_add(offset.x)?,
        base.y.checked_add(offset.y)?,
    ))
}

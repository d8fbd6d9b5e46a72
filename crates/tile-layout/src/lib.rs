//! Tile placement for grouped dashboards.
//!
//! Tiles are packed into fixed-size logical blocks. Each block is filled
//! first-fit along an orientation-dependent scan order; when the next tile
//! no longer fits, the block is abandoned and a fresh one opens further
//! along the growth axis.
//!
//! # Example
//!
//! ```
//! use tile_layout::{LayoutEngine, Tile};
//!
//! let engine = LayoutEngine::new(100, 2, 3)?;
//! let tiles: Vec<Tile> = (1..=5).map(|i| Tile::unit(i.to_string())).collect();
//! let placed = engine.layout(&tiles, "horizontal")?;
//!
//! assert_eq!(placed[2].position(), (0, 100));
//! assert_eq!(placed[4].x(), 200);
//! # Ok::<(), tile_layout::Error>(())
//! ```

mod config;
mod engine;
mod grid;
mod orientation;

pub use config::EngineConfig;
pub use engine::{Layout, LayoutEngine};
pub use orientation::{BlockShape, Orientation, ScanOrder};

pub use tile_core::{
    Density, Error, LayoutError, PixelRect, PositionedTile, Result, Tile, TileError, TileSize,
};

//! Tile value types.

use crate::errors::TileError;
use crate::presets::TileSize;

/// A tile with its size expressed in grid units.
///
/// Dimensions are validated on construction, so every `Tile` in existence
/// is at least one unit wide and one unit tall.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTile"))]
pub struct Tile {
    id: String,
    width_units: u32,
    height_units: u32,
}

impl Tile {
    /// Create a tile, rejecting zero dimensions.
    pub fn new(
        id: impl Into<String>,
        width_units: u32,
        height_units: u32,
    ) -> Result<Self, TileError> {
        if width_units == 0 || height_units == 0 {
            return Err(TileError::InvalidDimensions {
                width_units,
                height_units,
            });
        }
        Ok(Self {
            id: id.into(),
            width_units,
            height_units,
        })
    }

    /// Create a 1x1 tile.
    pub fn unit(id: impl Into<String>) -> Self {
        Self::sized(id, TileSize::Small)
    }

    /// Create a tile from a named size preset.
    pub fn sized(id: impl Into<String>, size: TileSize) -> Self {
        let (width_units, height_units) = size.units();
        Self {
            id: id.into(),
            width_units,
            height_units,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width_units(&self) -> u32 {
        self.width_units
    }

    pub fn height_units(&self) -> u32 {
        self.height_units
    }
}

/// Unvalidated tile shape accepted by deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTile {
    id: String,
    #[serde(default = "one")]
    width_units: u32,
    #[serde(default = "one")]
    height_units: u32,
}

#[cfg(feature = "serde")]
fn one() -> u32 {
    1
}

#[cfg(feature = "serde")]
impl TryFrom<RawTile> for Tile {
    type Error = TileError;

    fn try_from(raw: RawTile) -> Result<Self, Self::Error> {
        Tile::new(raw.id, raw.width_units, raw.height_units)
    }
}

/// A tile with an assigned top-left pixel position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionedTile {
    #[cfg_attr(feature = "serde", serde(flatten))]
    tile: Tile,
    x: u64,
    y: u64,
}

impl PositionedTile {
    pub fn new(tile: Tile, x: u64, y: u64) -> Self {
        Self { tile, x, y }
    }

    /// The tile this position was computed for.
    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    pub fn id(&self) -> &str {
        self.tile.id()
    }

    pub fn width_units(&self) -> u32 {
        self.tile.width_units()
    }

    pub fn height_units(&self) -> u32 {
        self.tile.height_units()
    }

    /// Left edge in pixels.
    pub fn x(&self) -> u64 {
        self.x
    }

    /// Top edge in pixels.
    pub fn y(&self) -> u64 {
        self.y
    }

    /// Top-left corner as `(x, y)`.
    pub fn position(&self) -> (u64, u64) {
        (self.x, self.y)
    }

    /// Pixel rectangle covered by this tile at the given item size.
    pub fn bounds(&self, item_size: u32) -> PixelRect {
        let item_size = u64::from(item_size);
        PixelRect::new(
            self.x,
            self.y,
            u64::from(self.tile.width_units()) * item_size,
            u64::from(self.tile.height_units()) * item_size,
        )
    }

    /// Drop the position, returning the original tile.
    pub fn into_tile(self) -> Tile {
        self.tile
    }
}

/// Axis-aligned rectangle in integer pixels.
///
/// Edges saturate at `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
}

impl PixelRect {
    pub fn new(x: u64, y: u64, width: u64, height: u64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> u64 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> u64 {
        self.y.saturating_add(self.height)
    }

    /// Whether the two rectangles share interior area. Touching edges do not count.
    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &PixelRect) -> PixelRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        PixelRect::new(x, y, right - x, bottom - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_rejects_zero_width() {
        let err = Tile::new("a", 0, 1).unwrap_err();
        assert_eq!(
            err,
            TileError::InvalidDimensions {
                width_units: 0,
                height_units: 1
            }
        );
    }

    #[test]
    fn test_tile_rejects_zero_height() {
        assert!(Tile::new("a", 1, 0).is_err());
    }

    #[test]
    fn test_tile_accessors() {
        let tile = Tile::new("chart", 2, 1).unwrap();
        assert_eq!(tile.id(), "chart");
        assert_eq!(tile.width_units(), 2);
        assert_eq!(tile.height_units(), 1);
        assert_eq!(Tile::unit("x"), Tile::new("x", 1, 1).unwrap());
    }

    #[test]
    fn test_positioned_bounds() {
        let placed = PositionedTile::new(Tile::new("t", 2, 1).unwrap(), 100, 50);
        assert_eq!(placed.position(), (100, 50));
        assert_eq!(placed.bounds(50), PixelRect::new(100, 50, 100, 50));
        assert_eq!(placed.into_tile().id(), "t");
    }

    #[test]
    fn test_rect_intersects() {
        let a = PixelRect::new(0, 0, 100, 100);
        let b = PixelRect::new(50, 50, 100, 100);
        let touching = PixelRect::new(100, 0, 100, 100);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn test_rect_union_and_contains() {
        let a = PixelRect::new(0, 0, 100, 100);
        let b = PixelRect::new(200, 50, 100, 100);
        let u = a.union(&b);
        assert_eq!(u, PixelRect::new(0, 0, 300, 150));
        assert!(u.contains_rect(&a));
        assert!(u.contains_rect(&b));
        assert!(!a.contains_rect(&b));
    }

    #[test]
    fn test_bounds_at_large_item_size() {
        let placed = PositionedTile::new(Tile::new("t", 2, 3).unwrap(), 1 << 40, 0);
        let bounds = placed.bounds(u32::MAX);
        assert_eq!(bounds.width, 2 * u64::from(u32::MAX));
        assert_eq!(bounds.height, 3 * u64::from(u32::MAX));
        assert_eq!(bounds.right(), (1 << 40) + 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_rect_edges_saturate() {
        let rect = PixelRect::new(u64::MAX - 1, 0, 10, 10);
        assert_eq!(rect.right(), u64::MAX);
        let other = PixelRect::new(0, 0, 10, 10);
        assert_eq!(rect.union(&other), PixelRect::new(0, 0, u64::MAX, 10));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_tile_deserialize_validates() {
        let tile: Tile = serde_json::from_str(r#"{"id":"a","width_units":2}"#).unwrap();
        assert_eq!((tile.width_units(), tile.height_units()), (2, 1));

        let err = serde_json::from_str::<Tile>(r#"{"id":"a","width_units":0,"height_units":1}"#);
        assert!(err.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_positioned_tile_serializes_flat() {
        let placed = PositionedTile::new(Tile::unit("a"), 0, 100);
        let json = serde_json::to_value(&placed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "a", "width_units": 1, "height_units": 1, "x": 0, "y": 100})
        );
    }
}

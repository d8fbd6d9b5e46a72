//! Named tile sizes and densities used by dashboard models.

use std::fmt;
use std::str::FromStr;

use crate::errors::TileError;

/// Named tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TileSize {
    /// 1x1
    #[default]
    Small,
    /// 2x2
    Medium,
    /// 2x1
    Wide,
    /// 1x2
    Tall,
    /// 2x4
    Large,
}

impl TileSize {
    pub const ALL: [TileSize; 5] = [
        TileSize::Small,
        TileSize::Medium,
        TileSize::Wide,
        TileSize::Tall,
        TileSize::Large,
    ];

    /// Size in grid units as `(width_units, height_units)`.
    pub fn units(self) -> (u32, u32) {
        match self {
            TileSize::Small => (1, 1),
            TileSize::Medium => (2, 2),
            TileSize::Wide => (2, 1),
            TileSize::Tall => (1, 2),
            TileSize::Large => (2, 4),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TileSize::Small => "small",
            TileSize::Medium => "medium",
            TileSize::Wide => "wide",
            TileSize::Tall => "tall",
            TileSize::Large => "large",
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileSize {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileSize::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TileError::UnknownTileSize { name: s.to_string() })
    }
}

/// Named base item size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Roomy,
}

impl Density {
    pub const ALL: [Density; 3] = [Density::Compact, Density::Standard, Density::Roomy];

    /// Pixel size of one grid unit.
    pub fn item_size(self) -> u32 {
        match self {
            Density::Compact => 120,
            Density::Standard => 150,
            Density::Roomy => 180,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Density::Compact => "compact",
            Density::Standard => "standard",
            Density::Roomy => "roomy",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Density {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Density::ALL
            .into_iter()
            .find(|density| density.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TileError::UnknownDensity { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    #[test]
    fn test_tile_size_parse_case_insensitive() {
        assert_eq!("wide".parse::<TileSize>().unwrap(), TileSize::Wide);
        assert_eq!("TALL".parse::<TileSize>().unwrap(), TileSize::Tall);
        assert_eq!(
            "huge".parse::<TileSize>().unwrap_err(),
            TileError::UnknownTileSize { name: "huge".into() }
        );
    }

    #[test]
    fn test_tile_size_units() {
        let tile = Tile::sized("kpi", TileSize::Medium);
        assert_eq!((tile.width_units(), tile.height_units()), (2, 2));
        for size in TileSize::ALL {
            assert_eq!(size.to_string().parse::<TileSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_density() {
        assert_eq!(Density::default().item_size(), 150);
        assert_eq!("Roomy".parse::<Density>().unwrap().item_size(), 180);
        assert!("dense".parse::<Density>().is_err());
    }
}

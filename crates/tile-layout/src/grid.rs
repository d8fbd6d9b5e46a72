//! Occupancy grid for a single block.

use glam::UVec2;

use crate::orientation::ScanOrder;

/// Cell occupancy for the block currently being filled.
///
/// Cells are stored row-major in a flat vector, indexed `row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an empty grid, or `None` if the cell count does not fit in memory indexing.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?;
        Some(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Free every cell, turning this into the grid of a fresh block.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn is_occupied(&self, col: u32, row: u32) -> bool {
        self.cells[self.index(col, row)]
    }

    /// Find the first free `width` x `height` region in scan order.
    ///
    /// Returns the top-left cell as `(col, row)`.
    pub fn find_space(&self, width: u32, height: u32, scan: ScanOrder) -> Option<UVec2> {
        if width == 0 || height == 0 || width > self.width || height > self.height {
            return None;
        }

        let cols = 0..=self.width - width;
        let rows = 0..=self.height - height;

        match scan {
            ScanOrder::RowMajor => rows
                .flat_map(|row| cols.clone().map(move |col| UVec2::new(col, row)))
                .find(|cell| self.fits(cell.x, cell.y, width, height)),
            ScanOrder::ColumnMajor => cols
                .flat_map(|col| rows.clone().map(move |row| UVec2::new(col, row)))
                .find(|cell| self.fits(cell.x, cell.y, width, height)),
        }
    }

    fn fits(&self, col: u32, row: u32, width: u32, height: u32) -> bool {
        (row..row + height).all(|r| (col..col + width).all(|c| !self.is_occupied(c, r)))
    }

    /// Mark a region as occupied.
    pub fn occupy(&mut self, cell: UVec2, width: u32, height: u32) {
        for row in cell.y..cell.y + height {
            for col in cell.x..cell.x + width {
                let index = self.index(col, row);
                self.cells[index] = true;
            }
        }
    }
}

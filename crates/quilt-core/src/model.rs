use serde::{Deserialize, Serialize};

use crate::error::{QuiltError, Result};

/// One grid cell: integer `(col, row)` coordinate pair.
///
/// `col` lies in `[0, columns)`; `row` is unbounded (the grid grows downward
/// as needed). Value equality and hashing make it usable as an occupancy key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

impl GridCell {
    pub fn new(col: u32, row: u32) -> Self {
        Self { row, col }
    }
}

/// Patch footprint in grid blocks: positive width and height, default 1x1.
///
/// Zero spans are rejected at construction, so a `BlockSpan` always covers at
/// least one cell. Fields stay private to keep that invariant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BlockSpan {
    width: u32,
    height: u32,
}

impl BlockSpan {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(QuiltError::InvalidSpan { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells the footprint covers.
    pub fn cells(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl Default for BlockSpan {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

/// One item to pack: a span plus a user key (opaque payload).
///
/// Input order is packing order; the packer never reorders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchInput<K = String> {
    pub key: K,
    pub span: BlockSpan,
}

impl<K> PatchInput<K> {
    pub fn new(key: K, span: BlockSpan) -> Self {
        Self { key, span }
    }

    /// A 1x1 patch.
    pub fn unit(key: K) -> Self {
        Self {
            key,
            span: BlockSpan::default(),
        }
    }
}

/// A packed patch: its input key and span plus the assigned origin cell
/// (top-left of the footprint). Created once by the packer, then immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedPatch<K = String> {
    pub key: K,
    pub span: BlockSpan,
    pub origin: GridCell,
}

impl<K> PlacedPatch<K> {
    /// Cells covered by this patch, row-major from the origin.
    pub fn footprint(&self) -> impl Iterator<Item = GridCell> + '_ {
        let origin = self.origin;
        let span = self.span;
        (origin.row..origin.row + span.height())
            .flat_map(move |row| (origin.col..origin.col + span.width()).map(move |col| GridCell { row, col }))
    }

    /// Exclusive right edge column (`origin.col + width`).
    pub fn right(&self) -> u32 {
        self.origin.col + self.span.width()
    }

    /// Exclusive bottom edge row (`origin.row + height`).
    pub fn bottom(&self) -> u32 {
        self.origin.row + self.span.height()
    }
}

/// Result of one packing pass: placements index-aligned with the inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuiltLayout<K = String> {
    pub columns: u32,
    pub patches: Vec<PlacedPatch<K>>,
}

/// Statistics about layout packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of patches placed.
    pub num_patches: usize,
    /// Rows touched by at least one footprint cell.
    pub rows_used: u32,
    /// Grid cells available in the used rows (rows_used * columns).
    pub total_cells: u64,
    /// Cells actually covered by footprints.
    pub occupied_cells: u64,
    /// occupied_cells / total_cells (0.0 to 1.0). Higher means fewer gaps.
    pub occupancy: f64,
}

impl<K> QuiltLayout<K> {
    /// Number of rows the layout spans (max exclusive bottom edge).
    pub fn rows_used(&self) -> u32 {
        self.patches.iter().map(|p| p.bottom()).max().unwrap_or(0)
    }

    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> LayoutStats {
        let rows_used = self.rows_used();
        let total_cells = rows_used as u64 * self.columns as u64;
        let occupied_cells: u64 = self.patches.iter().map(|p| p.span.cells()).sum();
        let occupancy = if total_cells > 0 {
            occupied_cells as f64 / total_cells as f64
        } else {
            0.0
        };
        LayoutStats {
            num_patches: self.patches.len(),
            rows_used,
            total_cells,
            occupied_cells,
            occupancy,
        }
    }
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Patches: {}, Rows: {}, Occupancy: {:.2}%, Cells: {} used / {} available",
            self.num_patches,
            self.rows_used,
            self.occupancy * 100.0,
            self.occupied_cells,
            self.total_cells,
        )
    }

    /// Vacant cells in the used rows.
    pub fn vacant_cells(&self) -> u64 {
        self.total_cells.saturating_sub(self.occupied_cells)
    }
}

use std::collections::HashMap;

use tracing::warn;

use crate::model::GridCell;

/// Sparse record of which grid cells are claimed, and by which patch index.
///
/// Cells stay claimed for the lifetime of the pass; there is no eviction. The
/// map is rebuilt fresh on every layout pass.
#[derive(Debug, Default, Clone)]
pub struct OccupancyMap {
    cells: HashMap<GridCell, usize>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no patch index is recorded for `cell`.
    pub fn is_free(&self, cell: GridCell) -> bool {
        !self.cells.contains_key(&cell)
    }

    /// Records that `cell` is occupied by `patch_index`.
    ///
    /// Idempotent for the same index. A correct packer never claims a cell
    /// twice with different indices; if that happens the later claim wins.
    pub fn claim(&mut self, cell: GridCell, patch_index: usize) {
        let prev = self.cells.insert(cell, patch_index);
        if let Some(prev) = prev {
            if prev != patch_index {
                warn!(
                    col = cell.col,
                    row = cell.row,
                    prev, patch_index, "cell claimed twice with different indices"
                );
            }
        }
    }

    /// Patch index that claimed `cell`, if any.
    pub fn owner(&self, cell: GridCell) -> Option<usize> {
        self.cells.get(&cell).copied()
    }

    /// Number of claimed cells.
    pub fn claimed_cells(&self) -> usize {
        self.cells.len()
    }
}

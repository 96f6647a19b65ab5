use tracing::trace;

use super::Packer;
use super::occupancy::OccupancyMap;
use crate::model::{BlockSpan, GridCell, PlacedPatch};

/// Row-major first-fit packer over a fixed-column, unbounded-row grid.
///
/// Candidate origins are scanned in reading order (row 0 first, columns left
/// to right within a row) and the first origin whose full footprint lies on
/// free cells wins. Rows grow downward without limit, so any span no wider
/// than the grid is always placed eventually.
pub struct FirstFitPacker {
    columns: u32,
    occupied: OccupancyMap,
    placed_count: usize,
}

impl FirstFitPacker {
    pub fn new(columns: u32) -> Self {
        Self {
            columns,
            occupied: OccupancyMap::new(),
            placed_count: 0,
        }
    }

    /// Lazy, unbounded row-major stream of open cells.
    ///
    /// Claimed cells are skipped outright; they are never retested as
    /// origins. Restarts from (0, 0) for every patch.
    fn open_cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let columns = self.columns;
        (0u32..)
            .flat_map(move |row| (0..columns).map(move |col| GridCell { row, col }))
            .filter(|&cell| self.occupied.is_free(cell))
    }

    /// True iff the whole footprint anchored at `origin` fits on free cells
    /// without crossing the right edge of the grid.
    fn fits(&self, origin: GridCell, span: &BlockSpan) -> bool {
        if origin.col + span.width() > self.columns {
            return false;
        }
        footprint(origin, span).all(|cell| self.occupied.is_free(cell))
    }

    fn claim_footprint(&mut self, origin: GridCell, span: &BlockSpan, index: usize) {
        for cell in footprint(origin, span) {
            self.occupied.claim(cell, index);
        }
    }

    /// Cells claimed so far in this pass.
    pub fn claimed_cells(&self) -> usize {
        self.occupied.claimed_cells()
    }
}

/// Cells covered by a span anchored at `origin`, row-major.
fn footprint(origin: GridCell, span: &BlockSpan) -> impl Iterator<Item = GridCell> {
    let span = *span;
    (origin.row..origin.row + span.height())
        .flat_map(move |row| (origin.col..origin.col + span.width()).map(move |col| GridCell { row, col }))
}

impl<K> Packer<K> for FirstFitPacker {
    fn can_place(&self, span: &BlockSpan) -> bool {
        span.width() <= self.columns
    }

    fn place(&mut self, key: K, span: BlockSpan) -> Option<PlacedPatch<K>> {
        // Guard before scanning: a span wider than the grid would never
        // satisfy the fit check and the row scan has no lower bound.
        if !<Self as Packer<K>>::can_place(self, &span) {
            return None;
        }

        // The scan terminates: some fully free row range always exists below
        // the deepest claimed row.
        let origin = self.open_cells().find(|&cell| self.fits(cell, &span))?;

        let index = self.placed_count;
        // Claim eagerly so later patches in the same pass see these cells.
        self.claim_footprint(origin, &span, index);
        self.placed_count += 1;
        trace!(
            index,
            col = origin.col,
            row = origin.row,
            w = span.width(),
            h = span.height(),
            "placed patch"
        );

        Some(PlacedPatch { key, span, origin })
    }
}

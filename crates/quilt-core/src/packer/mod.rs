use crate::model::{BlockSpan, PlacedPatch};

pub mod first_fit;
pub mod occupancy;

/// A packer assigns origin cells to patch spans on the grid.
///
/// Implementations must ensure no two footprints overlap and must respect the
/// fixed column count as a hard horizontal bound. `place` returns `None` only
/// when the span can never fit (wider than the grid).
pub trait Packer<K> {
    fn can_place(&self, span: &BlockSpan) -> bool;
    fn place(&mut self, key: K, span: BlockSpan) -> Option<PlacedPatch<K>>;
}

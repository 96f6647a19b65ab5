//! Core library for grid-packing patch layouts.
//!
//! - Algorithm: deterministic row-major first-fit over a fixed-column,
//!   unbounded-row grid (no backtracking, no reflow, no reordering)
//! - Pipeline: `pack_patches` takes ordered patch inputs and returns an
//!   index-aligned layout of origin assignments
//! - Geometry adapter maps placements to pixel rectangles for a rendering
//!   host; the data model is serde-serializable and a JSON export is provided.
//!
//! Quick example:
//! ```
//! use quilt_core::{BlockSpan, PatchInput, QuiltConfig, pack_patches};
//! # fn main() -> quilt_core::Result<()> {
//! let inputs = vec![
//!     PatchInput::new("hero", BlockSpan::new(2, 1)?),
//!     PatchInput::unit("a"),
//!     PatchInput::unit("b"),
//! ];
//! let cfg = QuiltConfig::default(); // 3 columns
//! let layout = pack_patches(inputs, &cfg)?;
//! assert_eq!(layout.patches[1].origin.col, 2);
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `quilt_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{BlockSize, LayoutDirection, QuiltConfig, QuiltConfigBuilder};
    pub use crate::geometry::{PixelPoint, PixelRect, PixelSize};
    pub use crate::model::{
        BlockSpan, GridCell, LayoutStats, PatchInput, PlacedPatch, QuiltLayout,
    };
    pub use crate::packer::{Packer, first_fit::FirstFitPacker, occupancy::OccupancyMap};
    pub use crate::pipeline::pack_patches;
}

//! Grid-to-pixel conversion adapter.
//!
//! The core packer works purely in block coordinates; this module maps placed
//! patches to pixel rectangles for a rendering host. With `BlockSize::Auto`
//! the block size is derived from the container independently per axis
//! (`container / columns`), so blocks are only square when the container is.
//! Toolkits that position views by center can use [`patch_center_point`].

use serde::{Deserialize, Serialize};

use crate::config::{BlockSize, QuiltConfig};
use crate::model::{BlockSpan, PlacedPatch};

/// Pixel extent (width, height).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PixelSize {
    pub w: f32,
    pub h: f32,
}

impl PixelSize {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// Pixel coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Pixel size of one block given the configured sizing mode and container.
pub fn block_pixel_size(cfg: &QuiltConfig, container: PixelSize) -> PixelSize {
    match cfg.block_size {
        BlockSize::Auto => PixelSize {
            w: container.w / cfg.columns as f32,
            h: container.h / cfg.columns as f32,
        },
        BlockSize::Fixed(px) => PixelSize { w: px, h: px },
    }
}

/// Pixel span of a patch: block span scaled by the block size, per axis.
pub fn patch_pixel_size(span: &BlockSpan, block: PixelSize) -> PixelSize {
    PixelSize {
        w: span.width() as f32 * block.w,
        h: span.height() as f32 * block.h,
    }
}

/// Top-left pixel corner of a placed patch.
pub fn patch_origin_point<K>(patch: &PlacedPatch<K>, block: PixelSize) -> PixelPoint {
    PixelPoint {
        x: patch.origin.col as f32 * block.w,
        y: patch.origin.row as f32 * block.h,
    }
}

/// Center pixel point of a placed patch: the top-left corner offset by half
/// the patch's own pixel span.
pub fn patch_center_point<K>(patch: &PlacedPatch<K>, block: PixelSize) -> PixelPoint {
    let origin = patch_origin_point(patch, block);
    let size = patch_pixel_size(&patch.span, block);
    PixelPoint {
        x: origin.x + size.w / 2.0,
        y: origin.y + size.h / 2.0,
    }
}

/// Full pixel rectangle (top-left anchored) of a placed patch within the
/// given container.
pub fn patch_pixel_rect<K>(
    patch: &PlacedPatch<K>,
    cfg: &QuiltConfig,
    container: PixelSize,
) -> PixelRect {
    let block = block_pixel_size(cfg, container);
    let origin = patch_origin_point(patch, block);
    let size = patch_pixel_size(&patch.span, block);
    PixelRect {
        x: origin.x,
        y: origin.y,
        w: size.w,
        h: size.h,
    }
}

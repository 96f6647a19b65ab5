use tracing::{debug, instrument};

use crate::config::QuiltConfig;
use crate::error::{QuiltError, Result};
use crate::model::{PatchInput, QuiltLayout};
use crate::packer::{Packer, first_fit::FirstFitPacker};

#[instrument(skip_all, fields(patches = inputs.len(), columns = cfg.columns))]
/// Packs `inputs` onto the grid described by `cfg` and returns the layout.
///
/// One deterministic pass: patches are placed strictly in input order, each at
/// the row-major-earliest origin whose footprint is free, and the result is
/// index-aligned with the inputs. A fresh occupancy state is built per call;
/// nothing persists between passes.
///
/// Fails fast with `PatchTooWide` before any placement if some span is wider
/// than the grid. An empty input sequence is valid and yields an empty layout.
pub fn pack_patches<K>(inputs: Vec<PatchInput<K>>, cfg: &QuiltConfig) -> Result<QuiltLayout<K>> {
    cfg.validate()?;

    // Reject impossible widths up front; otherwise the unbounded row scan
    // for that patch would never find an origin.
    for (index, input) in inputs.iter().enumerate() {
        if input.span.width() > cfg.columns {
            return Err(QuiltError::PatchTooWide {
                index,
                width: input.span.width(),
                columns: cfg.columns,
            });
        }
    }

    let mut packer = FirstFitPacker::new(cfg.columns);
    let mut patches = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.into_iter().enumerate() {
        let span = input.span;
        let placed = packer
            .place(input.key, span)
            .ok_or(QuiltError::PatchTooWide {
                index,
                width: span.width(),
                columns: cfg.columns,
            })?;
        patches.push(placed);
    }

    let layout = QuiltLayout {
        columns: cfg.columns,
        patches,
    };
    debug!(
        placed = layout.patches.len(),
        rows = layout.rows_used(),
        cells = packer.claimed_cells(),
        "packing pass complete"
    );
    Ok(layout)
}

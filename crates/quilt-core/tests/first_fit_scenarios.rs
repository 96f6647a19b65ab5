use quilt_core::config::QuiltConfig;
use quilt_core::error::QuiltError;
use quilt_core::model::{BlockSpan, PatchInput};
use quilt_core::pipeline::pack_patches;

fn inputs(spans: &[(u32, u32)]) -> Vec<PatchInput<String>> {
    spans
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| PatchInput::new(format!("p{}", i), BlockSpan::new(w, h).unwrap()))
        .collect()
}

fn cfg(columns: u32) -> QuiltConfig {
    QuiltConfig::builder().columns(columns).build()
}

fn origins(layout: &quilt_core::model::QuiltLayout<String>) -> Vec<(u32, u32)> {
    layout
        .patches
        .iter()
        .map(|p| (p.origin.col, p.origin.row))
        .collect()
}

#[test]
fn unit_patches_fill_rows_in_reading_order() {
    let layout = pack_patches(inputs(&[(1, 1), (1, 1), (1, 1), (1, 1)]), &cfg(3)).unwrap();
    assert_eq!(origins(&layout), vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
}

#[test]
fn wide_patch_shifts_followers_right_then_down() {
    let layout = pack_patches(inputs(&[(2, 1), (1, 1), (1, 1)]), &cfg(3)).unwrap();
    assert_eq!(origins(&layout), vec![(0, 0), (2, 0), (0, 1)]);
    // The wide patch covers both of its cells.
    let covered: Vec<_> = layout.patches[0].footprint().collect();
    assert_eq!(
        covered,
        vec![
            quilt_core::model::GridCell::new(0, 0),
            quilt_core::model::GridCell::new(1, 0)
        ]
    );
}

#[test]
fn tall_patch_packs_beside_not_below() {
    let layout = pack_patches(inputs(&[(1, 2), (1, 1)]), &cfg(2)).unwrap();
    assert_eq!(origins(&layout), vec![(0, 0), (1, 0)]);
}

#[test]
fn later_units_backfill_the_gap_beside_a_tall_patch() {
    // 2x2 blocks columns 0..2 of rows 0..2; units fill the right edge first,
    // then continue on the first fully open row.
    let layout = pack_patches(inputs(&[(2, 2), (1, 1), (1, 1), (1, 1)]), &cfg(3)).unwrap();
    assert_eq!(origins(&layout), vec![(0, 0), (2, 0), (2, 1), (0, 2)]);
}

#[test]
fn width_exceeding_columns_fails_before_any_placement() {
    let err = pack_patches(inputs(&[(1, 1), (4, 1)]), &cfg(3)).unwrap_err();
    assert_eq!(
        err,
        QuiltError::PatchTooWide {
            index: 1,
            width: 4,
            columns: 3
        }
    );
}

#[test]
fn width_equal_to_columns_fills_the_full_row() {
    let layout = pack_patches(inputs(&[(3, 1), (1, 1)]), &cfg(3)).unwrap();
    assert_eq!(origins(&layout), vec![(0, 0), (0, 1)]);
}

#[test]
fn empty_input_yields_empty_layout() {
    let layout = pack_patches(Vec::<PatchInput<String>>::new(), &cfg(3)).unwrap();
    assert!(layout.patches.is_empty());
    assert_eq!(layout.rows_used(), 0);
    let stats = layout.stats();
    assert_eq!(stats.num_patches, 0);
    assert_eq!(stats.occupancy, 0.0);
}

#[test]
fn stats_report_vacancy_of_used_rows() {
    // 2x1 + 1x1 fill row 0 exactly; a following 2x1 leaves one vacant cell in row 1.
    let layout = pack_patches(inputs(&[(2, 1), (1, 1), (2, 1)]), &cfg(3)).unwrap();
    let stats = layout.stats();
    assert_eq!(stats.rows_used, 2);
    assert_eq!(stats.total_cells, 6);
    assert_eq!(stats.occupied_cells, 5);
    assert_eq!(stats.vacant_cells(), 1);
    assert!((stats.occupancy - 5.0 / 6.0).abs() < 1e-9);
}

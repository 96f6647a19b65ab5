use quilt_core::config::{BlockSize, LayoutDirection, QuiltConfig};
use quilt_core::error::QuiltError;
use quilt_core::model::{BlockSpan, PatchInput};
use quilt_core::pipeline::pack_patches;

#[test]
fn zero_columns_is_invalid() {
    let cfg = QuiltConfig {
        columns: 0,
        ..Default::default()
    };
    match cfg.validate() {
        Err(QuiltError::InvalidConfig(msg)) => assert!(msg.contains("columns")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn fixed_block_size_must_be_positive_and_finite() {
    for px in [0.0f32, -4.0, f32::NAN, f32::INFINITY] {
        let cfg = QuiltConfig {
            block_size: BlockSize::Fixed(px),
            ..Default::default()
        };
        assert!(cfg.validate().is_err(), "accepted block size {px}");
    }
    let cfg = QuiltConfig {
        block_size: BlockSize::Fixed(24.0),
        ..Default::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_spans_are_rejected_at_construction() {
    match BlockSpan::new(0, 1) {
        Err(QuiltError::InvalidSpan { width, height }) => {
            assert_eq!(width, 0);
            assert_eq!(height, 1);
        }
        other => panic!("expected InvalidSpan, got {:?}", other),
    }
    assert!(BlockSpan::new(1, 0).is_err());
    assert!(BlockSpan::new(0, 0).is_err());
}

#[test]
fn default_span_is_one_by_one() {
    let span = BlockSpan::default();
    assert_eq!(span.width(), 1);
    assert_eq!(span.height(), 1);
    assert_eq!(span.cells(), 1);
}

#[test]
fn default_config_is_three_columns_auto_vertical() {
    let cfg = QuiltConfig::default();
    assert_eq!(cfg.columns, 3);
    assert_eq!(cfg.block_size, BlockSize::Auto);
    assert_eq!(cfg.direction, LayoutDirection::Vertical);
    assert!(cfg.validate().is_ok());
}

#[test]
fn direction_is_parsed_and_carried() {
    let dir: LayoutDirection = "horizontal".parse().unwrap();
    let cfg = QuiltConfig::builder().direction(dir).build();
    assert!(cfg.validate().is_ok());
    // Horizontal is reserved; packing still succeeds with the vertical scan.
    let layout = pack_patches(vec![PatchInput::unit("a")], &cfg).unwrap();
    assert_eq!(layout.patches[0].origin, quilt_core::model::GridCell::new(0, 0));
}

#[test]
fn block_size_parses_auto_and_numbers() {
    assert_eq!("auto".parse::<BlockSize>().unwrap(), BlockSize::Auto);
    assert_eq!("32.5".parse::<BlockSize>().unwrap(), BlockSize::Fixed(32.5));
    assert!("huge".parse::<BlockSize>().is_err());
}

#[test]
fn invalid_config_is_reported_before_placements() {
    let cfg = QuiltConfig {
        columns: 0,
        ..Default::default()
    };
    let result = pack_patches(vec![PatchInput::unit("a")], &cfg);
    assert!(matches!(result, Err(QuiltError::InvalidConfig(_))));
}

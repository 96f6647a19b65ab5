use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Packing axis.
///
/// Only the vertical scan (row-major over a fixed column count, rows
/// unbounded) is implemented; `Horizontal` is accepted and carried in the
/// config as the reserved axis-swap variant but currently packs identically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    Vertical,
    Horizontal,
}

impl FromStr for LayoutDirection {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(Self::Vertical),
            "horizontal" | "h" => Ok(Self::Horizontal),
            _ => Err(()),
        }
    }
}

/// Pixel size of one grid block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BlockSize {
    /// Derived from the container at render time: `container / columns`,
    /// independently per axis.
    Auto,
    /// Fixed square block edge in pixels, regardless of container size.
    Fixed(f32),
}

impl FromStr for BlockSize {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            other => other.parse::<f32>().map(Self::Fixed).map_err(|_| ()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuiltConfig {
    /// Fixed grid width in blocks.
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Pixel size of one block (auto or fixed).
    #[serde(default = "default_block_size")]
    pub block_size: BlockSize,
    /// Packing axis (horizontal reserved).
    #[serde(default = "default_direction")]
    pub direction: LayoutDirection,
}

impl Default for QuiltConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            block_size: default_block_size(),
            direction: default_direction(),
        }
    }
}

impl QuiltConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if the column count is zero or a fixed block size is
    /// not a positive finite number.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::QuiltError;

        if self.columns == 0 {
            return Err(QuiltError::InvalidConfig(
                "columns must be a positive integer".into(),
            ));
        }

        if let BlockSize::Fixed(px) = self.block_size {
            if !px.is_finite() || px <= 0.0 {
                return Err(QuiltError::InvalidConfig(format!(
                    "fixed block size must be a positive finite number of pixels, got {px}"
                )));
            }
        }

        Ok(())
    }

    /// Create a fluent builder for `QuiltConfig`.
    pub fn builder() -> QuiltConfigBuilder {
        QuiltConfigBuilder::new()
    }
}

fn default_columns() -> u32 {
    3
}
fn default_block_size() -> BlockSize {
    BlockSize::Auto
}
fn default_direction() -> LayoutDirection {
    LayoutDirection::Vertical
}

/// Builder for `QuiltConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct QuiltConfigBuilder {
    cfg: QuiltConfig,
}

impl QuiltConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: QuiltConfig::default(),
        }
    }
    pub fn columns(mut self, v: u32) -> Self {
        self.cfg.columns = v;
        self
    }
    pub fn block_size(mut self, v: BlockSize) -> Self {
        self.cfg.block_size = v;
        self
    }
    pub fn direction(mut self, v: LayoutDirection) -> Self {
        self.cfg.direction = v;
        self
    }
    pub fn build(self) -> QuiltConfig {
        self.cfg
    }
}

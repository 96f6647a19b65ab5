use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QuiltError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid span {width}x{height}: a patch must occupy at least one block in each axis")]
    InvalidSpan { width: u32, height: u32 },
    #[error("Patch {index} is {width} blocks wide but the grid has only {columns} columns")]
    PatchTooWide {
        index: usize,
        width: u32,
        columns: u32,
    },
}

pub type Result<T> = std::result::Result<T, QuiltError>;

use thiserror::Error;

use crate::Pos;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Cell {pos:?} is outside of the {width}x{height} grid")]
    OutOfBounds {
        pos: Pos,
        width: usize,
        height: usize,
    },

    #[error("No rules have been set on the grid")]
    RulesNotSet,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rules format error: {0}")]
    RulesFormat(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Broad class of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input to a constructor or bounded draw. Nothing was mutated.
    InvalidArgument,
    /// A coordinate outside the addressed field. Callers should check `in_bounds` first.
    IndexFault,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid generator width {0}: expected 32 or 64")]
    InvalidWidth(u32),

    #[error("invalid seed {seed} for a {bits}-bit generator")]
    InvalidSeed { bits: u32, seed: i128 },

    #[error("range bound must be at least 1, got {0}")]
    InvalidBound(u64),

    #[error("invalid letter bound {0:?}: expected A-Z")]
    InvalidLetter(char),

    #[error("invalid column {0:?}: expected a single letter A-Z")]
    InvalidColumn(char),

    #[error("invalid row {0}: expected 1-99")]
    InvalidRow(u32),

    #[error("invalid coordinate {0:?}: expected a letter and two digits, e.g. A07")]
    InvalidCoordinateText(String),

    #[error("invalid action {0:?}: expected L, M or debug")]
    InvalidAction(String),

    #[error("a game needs at least one mine")]
    NoMines,

    #[error("cannot place {requested} mines: only {available} cells lie outside the safe zone")]
    InvalidMineCount { requested: usize, available: usize },

    #[error("coordinate {coord} is not part of the field ending at {last_column}{last_row:02}")]
    NotInField { coord: Coordinate, last_column: char, last_row: u8 },

    #[error("coordinate {coord} lies outside the field ending at {last_column}{last_row:02}")]
    OutOfBounds { coord: Coordinate, last_column: char, last_row: u8 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfBounds { .. } => ErrorKind::IndexFault,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

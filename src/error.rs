use std::collections::TryReserveError;

use thiserror::Error;

use crate::graph::VertexDescriptor;

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidInput,
    AllocationFailure,
}

#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("vertex content must not be empty")]
    EmptyContent,

    #[error("vertex already exists: {0}")]
    DuplicateVertex(String),

    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    #[error("vertex {0:?} does not belong to this graph")]
    UnknownVertex(VertexDescriptor),

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("grid row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid grid symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },

    #[error("point ({x}, {y}) lies outside a {rows}x{cols} grid")]
    PointOutOfBounds {
        x: i32,
        y: i32,
        rows: usize,
        cols: usize,
    },

    #[error("allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::AllocationFailure(_) => ErrorKind::AllocationFailure,
            _ => ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors raised while building a problem from text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("unknown tile {tile:?} at line {line}, column {column}")]
    UnknownTile {
        tile: char,
        line: usize,
        column: usize,
    },
    #[error("no {0:?} tile found")]
    MissingMarker(char),
    #[error("tile {0:?} appears more than once")]
    DuplicateMarker(char),
    #[error("labels must be contiguous from {first:?}, {missing:?} is missing")]
    NonContiguousLabels { first: char, missing: char },
    #[error("malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("missing {0:?} line")]
    MissingDirective(&'static str),
    #[error("unknown node {0:?}")]
    UnknownNode(String),
    #[error("negative cost {cost} on edge {from} -> {to}")]
    NegativeCost { from: String, to: String, cost: f64 },
    #[error("edge {from} -> {to} is defined more than once")]
    DuplicateEdge { from: String, to: String },
    #[error("{0:?} is a reserved keyword and cannot name a node")]
    ReservedName(String),
}

//! Our application errors.

use std::io;
use thiserror::Error;

/// General error type.
#[derive(Error, Debug)]
pub enum RazercapError {
    #[error("{0}")]
    Record(#[from] ParseRecordError),
    #[error("{0}")]
    Decode(#[from] DecodeFrameError),
    #[error("{0}")]
    IO(#[from] io::Error),
    #[error("{0}")]
    Generic(#[from] anyhow::Error),
}

/// Errors that can happen while parsing a line of one of the input tables.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseRecordError {
    #[error("Line {line}: missing column {column}")]
    MissingColumn { line: usize, column: usize },
    #[error("Line {line}: cannot parse timestamp '{value}'")]
    InvalidTimestamp { line: usize, value: String },
}

/// Errors that can happen during decoding of a frame payload.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeFrameError {
    #[error("Payload of {actual} hex digits is too short, frame needs {expected}")]
    PayloadTooShort { expected: usize, actual: usize },
    #[error("Cannot parse hex field '{0}'")]
    InvalidHex(String),
}

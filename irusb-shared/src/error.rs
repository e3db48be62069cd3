//! Error types for signal validation, file handling and the transceiver

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A hex token that could not be turned into a code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Token is not exactly four characters long
    #[error("must be 4 hex digits long, got {len}")]
    Length { len: usize },

    /// Token contains a character that is not a hex digit
    #[error("non-hex char {ch:?} at position {pos}")]
    Charset { ch: char, pos: usize },

    /// The numeric scan stopped before the end of the token
    #[error("invalid hex format in {token:?}")]
    Format { token: String },

    /// Value does not fit in 16 bits
    #[error("value 0x{value:X} exceeds 16 bits")]
    Range { value: u32 },
}

/// Raw signal file errors
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures reported by the transceiver
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("unable to open the device")]
    Open,

    #[error("device is not open")]
    NotOpen,

    #[error("unable to send IR: {0}")]
    Send(String),

    #[error("unable to receive IR: {0}")]
    Receive(String),
}

/// Errors that abort a script run
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("reading script: {0}")]
    Io(#[from] io::Error),

    /// An invalid line stops the whole run
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

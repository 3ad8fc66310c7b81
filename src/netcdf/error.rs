//! Errors raised while reading or writing netCDF headers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetcdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a netCDF file (bad magic number)")]
    BadMagic,

    #[error("unsupported netCDF classic version byte {0}")]
    UnsupportedVersion(u8),

    #[error("unsupported format: {0}")]
    Unsupported(String),

    #[error("header is truncated")]
    Truncated,

    #[error("expected {expected} tag, found {found:#x}")]
    UnexpectedTag { expected: &'static str, found: u32 },

    #[error("unknown nc_type {0}")]
    UnknownType(u32),

    #[error("variable '{variable}' refers to dimension id {id}, but only {count} dimensions exist")]
    InvalidDimensionId {
        variable: String,
        id: u64,
        count: usize,
    },

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("value out of range for {format}: {what}")]
    OutOfRange {
        format: &'static str,
        what: String,
    },

    #[error("invalid JSON dataset description: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetcdfError {
    /// Map an unexpected EOF from the underlying reader to [`NetcdfError::Truncated`].
    pub(crate) fn from_read(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            NetcdfError::Truncated
        } else {
            NetcdfError::Io(err)
        }
    }
}

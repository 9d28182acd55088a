use std::path::PathBuf;

use thiserror::Error;

use crate::snapshot::{PlayerId, StarId};

/// Convenient result alias for the Triton library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a star identifier is not present in the snapshot.
    #[error("star {id} not found in snapshot")]
    StarNotFound { id: StarId },

    /// Raised when a player identifier (usually the viewer) is not present in the snapshot.
    #[error("player {id} not found in snapshot")]
    PlayerNotFound { id: PlayerId },

    /// Raised when a coordinate string does not parse to a finite number.
    #[error("star {star} has malformed {axis} coordinate {value:?}")]
    InvalidCoordinate {
        star: StarId,
        axis: char,
        value: String,
    },

    /// Raised when the foreign-star cost multiplier is negative or not finite.
    #[error("foreign star weight must be a finite, non-negative number (got {value})")]
    InvalidForeignWeight { value: f64 },

    /// Raised when a fleet order carries an action code outside 0..=7.
    #[error("invalid fleet action code {code}; expected 0..=7")]
    InvalidActionCode { code: u64 },

    /// Raised when an action name does not match any known fleet action.
    #[error("unknown fleet action: {name}")]
    UnknownAction { name: String },

    /// Raised when an encoded order string cannot be decoded.
    #[error("malformed fleet orders: {message}")]
    MalformedOrders { message: String },

    /// Raised when no snapshot path was given and none is configured.
    #[error("no galaxy snapshot configured; pass --snapshot or set {}", crate::loader::SNAPSHOT_ENV)]
    SnapshotNotFound,

    /// Raised when a snapshot map key disagrees with the id stored in its entry.
    #[error("{kind} keyed as {key} carries id {id}")]
    SnapshotMismatch {
        kind: &'static str,
        key: u64,
        id: u64,
    },

    /// Raised when reading a snapshot file fails.
    #[error("failed to read snapshot from {path}: {source}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

//! Error types for player configuration and templating.

use thiserror::Error;

use crate::config::MAX_PLAYER_ID_LEN;

/// Result type for player operations.
pub type PlayerResult<T> = Result<T, PlayerError>;

/// Errors that can occur configuring or templating an embedded player.
///
/// Inbound protocol failures are never errors: malformed messages from the
/// embedded content are expected and dropped at the bridge.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Player identifier exceeds the maximum length.
    #[error("player_id too long (max {MAX_PLAYER_ID_LEN} chars)")]
    PlayerIdTooLong,

    /// Player identifier is empty or contains invalid characters.
    #[error("player_id contains invalid characters")]
    PlayerIdInvalidChars,

    /// Initial height must be a positive, finite number.
    #[error("invalid initial height: {0}")]
    InvalidInitialHeight(f32),
}

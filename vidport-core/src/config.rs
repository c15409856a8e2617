//! Player configuration supplied once at mount.
//!
//! The player identifier is untrusted caller input that ends up
//! interpolated into the embed page, so it is validated here with the same
//! charset rules applied to every identifier crossing a trust boundary.

use crate::error::{PlayerError, PlayerResult};

/// Maximum length for player content identifiers.
pub const MAX_PLAYER_ID_LEN: usize = 64;

/// Initial height in CSS pixels used until the first dimension report.
pub const DEFAULT_INITIAL_HEIGHT: f32 = 200.0;

/// Check if a character is valid for player IDs (alphanumeric, hyphen, or underscore).
fn is_valid_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Validate a player content identifier.
///
/// Valid identifiers:
/// - 1-64 characters
/// - Alphanumeric, hyphen, underscore only
///
/// # Errors
///
/// Returns [`PlayerError::PlayerIdTooLong`] if the ID exceeds 64 characters.
/// Returns [`PlayerError::PlayerIdInvalidChars`] if the ID is empty or
/// contains invalid characters.
pub fn validate_player_id(id: &str) -> PlayerResult<()> {
    if id.len() > MAX_PLAYER_ID_LEN {
        return Err(PlayerError::PlayerIdTooLong);
    }
    if id.is_empty() || !id.chars().all(is_valid_id_char) {
        return Err(PlayerError::PlayerIdInvalidChars);
    }
    Ok(())
}

/// Immutable configuration for one embedded player.
///
/// Supplied once at mount; not reconfigurable afterward. A held config
/// always carries a validated identifier and a usable initial height.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Opaque content identifier understood by the vendor player.
    player_id: String,
    /// Height in CSS pixels reserved before the first `loaded` report.
    initial_height: f32,
}

impl PlayerConfig {
    /// Create a configuration for the given player.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier fails validation or the initial
    /// height is not a positive, finite number.
    pub fn new(player_id: impl Into<String>, initial_height: f32) -> PlayerResult<Self> {
        let player_id = player_id.into();
        validate_player_id(&player_id)?;
        if !initial_height.is_finite() || initial_height <= 0.0 {
            return Err(PlayerError::InvalidInitialHeight(initial_height));
        }
        Ok(Self {
            player_id,
            initial_height,
        })
    }

    /// Create a configuration with the default initial height.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier fails validation.
    pub fn with_default_height(player_id: impl Into<String>) -> PlayerResult<Self> {
        Self::new(player_id, DEFAULT_INITIAL_HEIGHT)
    }

    /// The content identifier.
    #[must_use]
    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    /// The initial height in CSS pixels.
    #[must_use]
    pub fn initial_height(&self) -> f32 {
        self.initial_height
    }
}

//! Embed page template for the third-party player.
//!
//! The host mounts the player by loading a fixed HTML page into the
//! embedding primitive. The page bootstraps the vendor player script,
//! forwards its `loaded` and `ended` events through the message channel
//! as JSON strings, and is parameterized by the validated player
//! identifier and a single mount dimension. Rendering is a pure function;
//! there is no ambient template state.
//!
//! The page expects the embedding primitive to expose a
//! `window.vidportHost.postMessage` handle; when absent, event reporting
//! degrades to a no-op inside the page.

use crate::config::validate_player_id;
use crate::error::PlayerResult;

/// DOM id of the element the vendor player mounts into.
///
/// Shared with the outbound command scripts, which target the same
/// container.
pub const PLAYER_CONTAINER_ID: &str = "vidport-player";

/// The single dimension the embed page is parameterized by.
///
/// A normal mount pins the player width to the host viewport; a
/// fullscreen-first mount pins the height instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmbedDimension {
    /// Pin the player width in CSS pixels.
    Width(f32),
    /// Pin the player height in CSS pixels.
    Height(f32),
}

impl EmbedDimension {
    /// Render as a vendor player constructor option.
    fn as_player_option(self) -> String {
        match self {
            Self::Width(width) => format!("width: {width}"),
            Self::Height(height) => format!("height: {height}"),
        }
    }
}

/// Render the embed page for a player.
///
/// # Errors
///
/// Returns an error if the player identifier fails validation;
/// identifiers are never interpolated unvalidated.
pub fn render_embed_page(player_id: &str, dimension: EmbedDimension) -> PlayerResult<String> {
    validate_player_id(player_id)?;
    let dimension = dimension.as_player_option();

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>vidport</title>
  <style>
    * {{
      margin: 0;
      padding: 0;
    }}
  </style>
</head>
<body>
  <div id="{PLAYER_CONTAINER_ID}"></div>
  <script src="https://player.vimeo.com/api/player.js"></script>
  <script>
    const sendToHost = message =>
      window.vidportHost &&
      window.vidportHost.postMessage &&
      window.vidportHost.postMessage(JSON.stringify(message));

    const playerContainer = () => document.getElementById('{PLAYER_CONTAINER_ID}');

    const playerElement = () => playerContainer().firstChild;

    const player = new Vimeo.Player('{PLAYER_CONTAINER_ID}', {{
      id: '{player_id}',
      {dimension},
    }});

    player.on('ended', () => sendToHost({{videoEvent: 'ended'}}));

    player.on('loaded', () =>
      sendToHost({{
        height: playerElement().offsetHeight,
        videoEvent: 'loaded',
        width: playerElement().offsetWidth,
      }}),
    );
  </script>
</body>
</html>
"#
    ))
}

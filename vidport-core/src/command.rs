//! Outbound commands from the host to its collaborators.
//!
//! The host manipulates the embedded content through a small closed set of
//! parameterized script templates rather than free-form string
//! construction, keeping the command/data boundary explicit. Orientation
//! locks go to the device collaborator, one request per presentation-mode
//! transition.

use serde::{Deserialize, Serialize};

use crate::geometry::FullscreenTransform;
use crate::template::PLAYER_CONTAINER_ID;

/// Physical device orientations the host can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Landscape lock, requested on entering fullscreen.
    Landscape,
    /// Portrait lock, requested on returning to normal presentation.
    Portrait,
}

/// Script commands injected into the embedded content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ContentCommand {
    /// Apply a transform to the player container.
    ApplyTransform {
        /// The transform to apply.
        transform: FullscreenTransform,
    },
    /// Reset any applied transform on the player container.
    ClearTransform,
}

impl ContentCommand {
    /// Render the script fragment implementing this command.
    ///
    /// Both templates guard on the container's existence so injection into
    /// a page that has not finished loading is a no-op.
    #[must_use]
    pub fn to_script(&self) -> String {
        match self {
            Self::ApplyTransform { transform } => format!(
                "(() => {{\n  \
                   const container = document.getElementById('{PLAYER_CONTAINER_ID}');\n  \
                   if (container) {{\n    \
                     container.style.transform = '{}';\n  \
                   }}\n  \
                   return true;\n\
                 }})();",
                transform.to_css()
            ),
            Self::ClearTransform => format!(
                "(() => {{\n  \
                   const container = document.getElementById('{PLAYER_CONTAINER_ID}');\n  \
                   if (container) {{\n    \
                     container.style.transform = '';\n  \
                   }}\n  \
                   return true;\n\
                 }})();"
            ),
        }
    }
}

/// A single instruction the host must carry out after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostDirective {
    /// Inject a script command into the embedded content.
    Content(ContentCommand),
    /// Request a device orientation lock.
    LockOrientation(Orientation),
}

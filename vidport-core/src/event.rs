//! Inbound event protocol from the embedded player.
//!
//! The content-to-host channel is the sole trust boundary in the system:
//! payloads arrive as raw strings from a third-party script environment
//! and must be treated as untrusted input. The bridge decodes a closed set
//! of tagged variants and silently drops everything else; no decode
//! failure ever propagates to the host.

use serde::Deserialize;

/// A validated event reported by the embedded player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Playback reached the end of the video.
    Ended,
    /// The player reported its rendered size. At least one dimension is
    /// present, and every present dimension is finite and positive.
    Loaded {
        /// Reported height in CSS pixels, if usable.
        height: Option<f32>,
        /// Reported width in CSS pixels, if usable.
        width: Option<f32>,
    },
}

/// Wire shape of an inbound message, before dimension qualification.
#[derive(Debug, Deserialize)]
#[serde(tag = "videoEvent", rename_all = "lowercase")]
enum WireEvent {
    Ended,
    Loaded {
        #[serde(default)]
        height: Option<f32>,
        #[serde(default)]
        width: Option<f32>,
    },
}

/// Keep a reported dimension only if it can drive layout math.
fn qualify(dimension: Option<f32>) -> Option<f32> {
    dimension.filter(|value| value.is_finite() && *value > 0.0)
}

impl PlayerEvent {
    /// Decode a raw message from the content channel.
    ///
    /// Returns `None` for anything other than a recognized event: parse
    /// failures, unknown or missing discriminants, and `loaded` reports
    /// with no usable dimension. Malformed payloads from the embedded
    /// environment are expected and non-fatal.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        let wire = match serde_json::from_str::<WireEvent>(raw) {
            Ok(wire) => wire,
            Err(err) => {
                tracing::debug!("ignoring malformed player message: {err}");
                return None;
            }
        };

        match wire {
            WireEvent::Ended => Some(Self::Ended),
            WireEvent::Loaded { height, width } => {
                let height = qualify(height);
                let width = qualify(width);
                if height.is_none() && width.is_none() {
                    tracing::debug!("ignoring loaded report with no usable dimension");
                    return None;
                }
                Some(Self::Loaded { height, width })
            }
        }
    }
}

//! Collaborator traits at the embedding boundary.
//!
//! The view-embedding primitive and the device orientation lock are
//! external to this system; the session depends only on the narrow
//! surface below. Delivery is fire-and-forget: the embedded content's
//! health is outside the host's authority, and a failed or dropped
//! command leaves the host in whatever geometry was last valid.

use vidport_core::Orientation;

/// One-way command channel into the embedded content.
pub trait ContentChannel: Send {
    /// Inject a script fragment into the embedded content.
    fn inject_script(&self, script: &str);
}

/// Device orientation lock.
pub trait OrientationGate: Send {
    /// Request an orientation lock.
    fn request(&self, orientation: Orientation);
}

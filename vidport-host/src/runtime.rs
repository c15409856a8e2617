//! Serialized event runtime for a player session.
//!
//! Inbound content messages, user toggles, and window notifications
//! originate in execution contexts that are asynchronous relative to each
//! other. The host funnels all three into one queue drained by a single
//! task, so no two handlers ever run concurrently and the session needs
//! no locking. Nothing blocks; there is no cancellation or timeout
//! concept.

use tokio::sync::mpsc;

use vidport_core::{Insets, WindowSize};

use crate::session::PlayerSession;

/// An event arriving at the host from any of its three sources.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Raw string delivered on the embedded content's message channel.
    Message(String),
    /// The user pressed the fullscreen toggle.
    ToggleFullscreen,
    /// The device window or its safe-area insets changed.
    WindowChanged {
        /// New window size.
        window: WindowSize,
        /// New safe-area insets.
        insets: Insets,
    },
}

/// Drive a session from an event queue until every sender is dropped.
///
/// Events are processed strictly in arrival order. The session is
/// returned when the queue closes so callers can inspect its final state.
pub async fn run(
    mut session: PlayerSession,
    mut events: mpsc::UnboundedReceiver<HostEvent>,
) -> PlayerSession {
    tracing::debug!(session = %session.id(), "event runtime started");

    while let Some(event) = events.recv().await {
        match event {
            HostEvent::Message(raw) => session.handle_message(&raw),
            HostEvent::ToggleFullscreen => session.toggle_fullscreen(),
            HostEvent::WindowChanged { window, insets } => {
                session.window_changed(window, insets);
            }
        }
    }

    tracing::debug!(session = %session.id(), "event queue closed; runtime stopping");
    session
}

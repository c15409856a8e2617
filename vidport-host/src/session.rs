//! Player session: glue between the validated protocol and the
//! collaborators.
//!
//! A session owns one [`PlayerState`] and routes every state change's
//! directives to the content channel and orientation gate. Collaborators
//! are optional; dispatch to an absent collaborator is a logged no-op,
//! never an error.

use uuid::Uuid;

use vidport_core::{
    render_embed_page, EmbedDimension, HostDirective, Insets, PlayerConfig, PlayerEvent,
    PlayerResult, PlayerState, PresentationMode, RenderedGeometry, Viewport, WindowSize,
};

use crate::embed::{ContentChannel, OrientationGate};

/// A mounted player and its collaborators.
pub struct PlayerSession {
    /// Session identifier for log correlation.
    id: Uuid,
    /// Mount-time configuration.
    config: PlayerConfig,
    /// Synchronized player state.
    state: PlayerState,
    /// Command channel into the embedded content, if available.
    content: Option<Box<dyn ContentChannel>>,
    /// Device orientation lock, if available.
    orientation: Option<Box<dyn OrientationGate>>,
}

impl std::fmt::Debug for PlayerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerSession")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("content", &self.content.is_some())
            .field("orientation", &self.orientation.is_some())
            .finish()
    }
}

impl PlayerSession {
    /// Create a session for a freshly mounted player with no collaborators
    /// attached yet.
    #[must_use]
    pub fn new(config: PlayerConfig, viewport: Viewport) -> Self {
        let state = PlayerState::new(&config, viewport);
        let id = Uuid::new_v4();
        tracing::info!(session = %id, player = config.player_id(), "player session created");

        Self {
            id,
            config,
            state,
            content: None,
            orientation: None,
        }
    }

    /// Attach the command channel into the embedded content.
    #[must_use]
    pub fn with_content_channel(mut self, channel: Box<dyn ContentChannel>) -> Self {
        self.content = Some(channel);
        self
    }

    /// Attach the device orientation lock.
    #[must_use]
    pub fn with_orientation_gate(mut self, gate: Box<dyn OrientationGate>) -> Self {
        self.orientation = Some(gate);
        self
    }

    /// Session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Handle a raw message from the content channel.
    ///
    /// Unrecognized or malformed payloads are dropped by the bridge;
    /// nothing here can fail.
    pub fn handle_message(&mut self, raw: &str) {
        let Some(event) = PlayerEvent::decode(raw) else {
            return;
        };
        tracing::debug!(session = %self.id, ?event, "player event received");
        let directives = self.state.apply_event(event);
        self.dispatch(&directives);
    }

    /// Handle the user's fullscreen toggle.
    pub fn toggle_fullscreen(&mut self) {
        let directives = self.state.toggle_fullscreen();
        self.dispatch(&directives);
    }

    /// Handle a device window or safe-area inset change.
    pub fn window_changed(&mut self, window: WindowSize, insets: Insets) {
        let viewport = Viewport::from_window(window, insets);
        tracing::debug!(
            session = %self.id,
            height = viewport.height,
            width = viewport.width,
            "viewport changed"
        );
        let directives = self.state.set_viewport(viewport);
        self.dispatch(&directives);
    }

    /// The box the host view must reserve for the player right now.
    #[must_use]
    pub fn geometry(&self) -> RenderedGeometry {
        self.state.geometry()
    }

    /// Current presentation mode.
    #[must_use]
    pub fn mode(&self) -> PresentationMode {
        self.state.mode()
    }

    /// Whether playback has reached its terminal event.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.state.has_ended()
    }

    /// Render the embed page for mounting this session's player, pinned
    /// to the current viewport width.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured player identifier fails
    /// validation.
    pub fn embed_page(&self) -> PlayerResult<String> {
        render_embed_page(
            self.config.player_id(),
            EmbedDimension::Width(self.state.viewport().width),
        )
    }

    /// Carry out directives produced by a state change.
    fn dispatch(&self, directives: &[HostDirective]) {
        for directive in directives {
            match directive {
                HostDirective::Content(command) => match &self.content {
                    Some(channel) => channel.inject_script(&command.to_script()),
                    None => {
                        tracing::debug!(session = %self.id, "content channel absent; dropping command");
                    }
                },
                HostDirective::LockOrientation(orientation) => match &self.orientation {
                    Some(gate) => gate.request(*orientation),
                    None => {
                        tracing::debug!(session = %self.id, "orientation gate absent; dropping lock request");
                    }
                },
            }
        }
    }
}

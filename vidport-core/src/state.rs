//! Player state and the fullscreen controller.
//!
//! All mutation funnels through [`PlayerState`]: validated inbound events
//! merge into the dimension store, user toggles flip the presentation
//! mode, and window notifications refresh the viewport. Every entry point
//! returns the [`HostDirective`]s the host must carry out, so the
//! injected transform tracks live inputs for as long as fullscreen is
//! active.

use serde::{Deserialize, Serialize};

use crate::command::{ContentCommand, HostDirective, Orientation};
use crate::config::PlayerConfig;
use crate::event::PlayerEvent;
use crate::geometry::{
    fullscreen_transform, rendered_geometry, IntrinsicSize, PresentationMode, RenderedGeometry,
    Viewport,
};

/// Complete host-side state for one embedded player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Last known intrinsic size of the embedded content.
    intrinsic: IntrinsicSize,
    /// Current host-allocated drawing region.
    viewport: Viewport,
    /// Current presentation mode.
    mode: PresentationMode,
    /// Whether playback has reached its terminal event. Set once, never
    /// reset within a session.
    ended: bool,
}

impl PlayerState {
    /// Create state for a freshly mounted player.
    ///
    /// The intrinsic size starts at the configured initial height with
    /// the viewport width as a placeholder until the first `loaded`
    /// report arrives. A report that never arrives leaves the placeholder
    /// in effect indefinitely; normal-mode layout still renders.
    #[must_use]
    pub fn new(config: &PlayerConfig, viewport: Viewport) -> Self {
        Self {
            intrinsic: IntrinsicSize::new(config.initial_height(), viewport.width),
            viewport,
            mode: PresentationMode::Normal,
            ended: false,
        }
    }

    /// Apply a validated inbound event.
    pub fn apply_event(&mut self, event: PlayerEvent) -> Vec<HostDirective> {
        match event {
            PlayerEvent::Ended => {
                if !self.ended {
                    tracing::info!("playback ended");
                }
                self.ended = true;
                Vec::new()
            }
            PlayerEvent::Loaded { height, width } => {
                self.intrinsic.merge(height, width);
                tracing::debug!(
                    height = self.intrinsic.height,
                    width = self.intrinsic.width,
                    "player dimensions updated"
                );
                self.refresh_transform()
            }
        }
    }

    /// Flip the presentation mode and produce the transition directives.
    ///
    /// The toggle always succeeds. Entering fullscreen locks landscape
    /// and applies the computed transform; returning to normal locks
    /// portrait and clears it. The transform is omitted (deferred) while
    /// the intrinsic dimensions cannot support it.
    pub fn toggle_fullscreen(&mut self) -> Vec<HostDirective> {
        self.mode = self.mode.toggled();
        tracing::info!(mode = ?self.mode, "presentation mode toggled");

        match self.mode {
            PresentationMode::Fullscreen => {
                let mut directives = vec![HostDirective::LockOrientation(Orientation::Landscape)];
                directives.extend(self.apply_transform_directive());
                directives
            }
            PresentationMode::Normal => vec![
                HostDirective::LockOrientation(Orientation::Portrait),
                HostDirective::Content(ContentCommand::ClearTransform),
            ],
        }
    }

    /// Install a new viewport after a window or inset change.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Vec<HostDirective> {
        self.viewport = viewport;
        self.refresh_transform()
    }

    /// Directives needed to keep a live fullscreen transform current.
    ///
    /// Only the content transform tracks live inputs; orientation locks
    /// are issued once per mode transition.
    fn refresh_transform(&self) -> Vec<HostDirective> {
        match self.mode {
            PresentationMode::Fullscreen => self.apply_transform_directive().into_iter().collect(),
            PresentationMode::Normal => Vec::new(),
        }
    }

    fn apply_transform_directive(&self) -> Option<HostDirective> {
        let target = self.geometry();
        match fullscreen_transform(self.intrinsic, target) {
            Some(transform) => Some(HostDirective::Content(ContentCommand::ApplyTransform {
                transform,
            })),
            None => {
                tracing::debug!("deferring transform until a usable dimension report arrives");
                None
            }
        }
    }

    /// The box the host view must reserve for the player right now.
    #[must_use]
    pub fn geometry(&self) -> RenderedGeometry {
        rendered_geometry(self.intrinsic, self.viewport, self.mode)
    }

    /// Last known intrinsic size.
    #[must_use]
    pub fn intrinsic(&self) -> IntrinsicSize {
        self.intrinsic
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current presentation mode.
    #[must_use]
    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    /// Whether playback has reached its terminal event.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.ended
    }
}

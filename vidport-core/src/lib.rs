//! # Vidport Core
//!
//! Host/embedded-content synchronization for a third-party web video
//! player: the inbound event protocol, dimension reconciliation, the
//! fullscreen state machine, and the geometry engine that re-maps the
//! player's natural size onto the host viewport.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                vidport-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Message bridge  │  Geometry engine         │
//! │  - tagged decode │  - rendered box          │
//! │  - dimension     │  - fullscreen transform  │
//! │    qualification │  - viewport derivation   │
//! ├─────────────────────────────────────────────┤
//! │  Player state    │  Outbound commands       │
//! │  - size store    │  - apply/clear transform │
//! │  - mode machine  │  - orientation lock      │
//! │  - terminal flag │  - embed template        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The content-to-host channel carries untrusted JSON strings; everything
//! that is not a recognized, well-formed event is dropped at the bridge.
//! State mutation funnels through [`PlayerState`], whose entry points
//! return the [`HostDirective`]s the host must carry out, so the rendered
//! geometry and the injected transform always track live inputs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod state;
pub mod template;

pub use command::{ContentCommand, HostDirective, Orientation};
pub use config::{PlayerConfig, DEFAULT_INITIAL_HEIGHT, MAX_PLAYER_ID_LEN};
pub use error::{PlayerError, PlayerResult};
pub use event::PlayerEvent;
pub use geometry::{
    fullscreen_transform, rendered_geometry, FullscreenTransform, Insets, IntrinsicSize,
    PresentationMode, RenderedGeometry, Viewport, WindowSize,
};
pub use state::PlayerState;
pub use template::{render_embed_page, EmbedDimension, PLAYER_CONTAINER_ID};

/// Vidport core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

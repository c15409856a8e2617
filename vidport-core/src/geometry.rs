//! Geometry engine for the embedded player.
//!
//! Pure functions mapping the player's self-reported size and the
//! host-allocated viewport onto the box the host view must reserve, plus
//! the transform that re-maps the content onto that box in fullscreen
//! mode. No state lives here; callers recompute from current inputs on
//! every relevant change.

use serde::{Deserialize, Serialize};

/// Presentation mode for the embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Inline presentation at the player's reported height.
    Normal,
    /// In-place fullscreen: content scaled to fill the viewport.
    Fullscreen,
}

impl PresentationMode {
    /// The mode a user toggle transitions into.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Fullscreen,
            Self::Fullscreen => Self::Normal,
        }
    }
}

/// The embedded content's self-reported natural rendered size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicSize {
    /// Height in CSS pixels.
    pub height: f32,
    /// Width in CSS pixels.
    pub width: f32,
}

impl IntrinsicSize {
    /// Create a new intrinsic size.
    #[must_use]
    pub const fn new(height: f32, width: f32) -> Self {
        Self { height, width }
    }

    /// Merge a partial dimension report, leaving absent fields unchanged.
    pub fn merge(&mut self, height: Option<f32>, width: Option<f32>) {
        if let Some(height) = height {
            self.height = height;
        }
        if let Some(width) = width {
            self.width = width;
        }
    }

    /// Whether both dimensions can drive aspect and scale math.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.height.is_finite() && self.height > 0.0 && self.width.is_finite() && self.width > 0.0
    }
}

/// Safe-area insets around the host window, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Top inset.
    pub top: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Left inset.
    pub left: f32,
    /// Right inset.
    pub right: f32,
}

/// Host window dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window height.
    pub height: f32,
    /// Window width.
    pub width: f32,
}

impl WindowSize {
    /// Create a new window size.
    #[must_use]
    pub const fn new(height: f32, width: f32) -> Self {
        Self { height, width }
    }
}

/// The drawing region allocated to the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport height.
    pub height: f32,
    /// Viewport width.
    pub width: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[must_use]
    pub const fn new(height: f32, width: f32) -> Self {
        Self { height, width }
    }

    /// Derive the viewport from the window size and safe-area insets.
    ///
    /// Height excludes the top/bottom insets, width the left/right insets;
    /// both clamp at zero when the insets exceed the window.
    #[must_use]
    pub fn from_window(window: WindowSize, insets: Insets) -> Self {
        Self {
            height: (window.height - insets.top - insets.bottom).max(0.0),
            width: (window.width - insets.left - insets.right).max(0.0),
        }
    }
}

/// The box the host view reserves for the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderedGeometry {
    /// Rendered height in CSS pixels.
    pub height: f32,
    /// Rendered width in CSS pixels.
    pub width: f32,
}

/// Transform that re-maps content at its intrinsic size onto a target box.
///
/// Components are rendered in fixed order: `scaleX`, `scaleY`,
/// `translateX`, `translateY`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FullscreenTransform {
    /// Horizontal scale factor.
    pub scale_x: f32,
    /// Vertical scale factor.
    pub scale_y: f32,
    /// Horizontal offset in CSS pixels.
    pub translate_x: f32,
    /// Vertical offset in CSS pixels.
    pub translate_y: f32,
}

impl FullscreenTransform {
    /// Render as a CSS transform value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "scaleX({}) scaleY({}) translateX({}px) translateY({}px)",
            self.scale_x, self.scale_y, self.translate_x, self.translate_y
        )
    }
}

/// Compute the rendered box for the current inputs.
///
/// Normal mode renders at the reported intrinsic height and the full
/// viewport width. Fullscreen fills the viewport height and derives the
/// width from the content's aspect ratio; an unusable intrinsic height
/// falls back to the viewport width so the layout stays defined before
/// the first dimension report.
#[must_use]
pub fn rendered_geometry(
    intrinsic: IntrinsicSize,
    viewport: Viewport,
    mode: PresentationMode,
) -> RenderedGeometry {
    match mode {
        PresentationMode::Normal => RenderedGeometry {
            height: intrinsic.height,
            width: viewport.width,
        },
        PresentationMode::Fullscreen => {
            let height = viewport.height;
            let width = if intrinsic.height.is_finite() && intrinsic.height > 0.0 {
                height * intrinsic.width / intrinsic.height
            } else {
                viewport.width
            };
            RenderedGeometry { height, width }
        }
    }
}

/// Compute the transform mapping content at `intrinsic` size onto `target`.
///
/// Horizontal centering is symmetric; the vertical offset intentionally
/// divides by three, placing the content in the upper portion of the
/// frame.
///
/// Returns `None` while either intrinsic dimension is unusable; callers
/// re-attempt after the next dimension report rather than injecting a
/// degenerate transform.
#[must_use]
pub fn fullscreen_transform(
    intrinsic: IntrinsicSize,
    target: RenderedGeometry,
) -> Option<FullscreenTransform> {
    if !intrinsic.is_usable() {
        return None;
    }

    Some(FullscreenTransform {
        scale_x: target.width / intrinsic.width,
        scale_y: target.height / intrinsic.height,
        translate_x: (target.width - intrinsic.width) / 2.0,
        translate_y: (target.height - intrinsic.height) / 3.0,
    })
}

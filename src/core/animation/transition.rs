//=========================================================================
// Transition
//=========================================================================
//
// One in-flight open or close animation, advanced by unscaled frame time.
//
// Frame lifecycle:
//   Transition::open()/close() → advance(dt) ... → TransitionStep::Finished
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::EaseType;

//=== Constants ===========================================================

/// Scale a panel starts from when it opens.
pub const OPEN_START_SCALE: f32 = 0.8;

//=== VisualFrame =========================================================

/// Opacity and scale of a panel at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualFrame {
    pub alpha: f32,
    pub scale: f32,
}

impl VisualFrame {
    /// Fully transparent at rest scale. The closed baseline.
    pub const HIDDEN: Self = Self { alpha: 0.0, scale: 1.0 };

    /// Fully opaque at rest scale.
    pub const SHOWN: Self = Self { alpha: 1.0, scale: 1.0 };

    /// Linear interpolation between two frames.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            alpha: a.alpha + (b.alpha - a.alpha) * t,
            scale: a.scale + (b.scale - a.scale) * t,
        }
    }
}

//=== TransitionKind ======================================================

/// Direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Open,
    Close,
}

//=== TransitionStep ======================================================

/// Result of advancing a transition by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// Still animating; the frame to display now.
    Running(VisualFrame),

    /// Reached the end; the exact target frame.
    Finished(VisualFrame),
}

//=== Transition ==========================================================

/// Interpolates a [`VisualFrame`] over `[0, duration]` seconds.
#[derive(Debug, Clone)]
pub struct Transition {
    kind: TransitionKind,
    elapsed: f32,
    duration: f32,
    easing: EaseType,
    from: VisualFrame,
    to: VisualFrame,
}

impl Transition {
    /// Open animation: alpha 0 → 1, scale 0.8 → 1.0.
    pub fn open(duration: f32, easing: EaseType) -> Self {
        Self {
            kind: TransitionKind::Open,
            elapsed: 0.0,
            duration,
            easing,
            from: VisualFrame { alpha: 0.0, scale: OPEN_START_SCALE },
            to: VisualFrame::SHOWN,
        }
    }

    /// Close animation: alpha 1 → 0 at rest scale.
    pub fn close(duration: f32, easing: EaseType) -> Self {
        Self {
            kind: TransitionKind::Close,
            elapsed: 0.0,
            duration,
            easing,
            from: VisualFrame::SHOWN,
            to: VisualFrame::HIDDEN,
        }
    }

    /// Advances by `dt` seconds of unscaled time.
    ///
    /// Once elapsed reaches the duration the target frame is returned
    /// verbatim, never an interpolated approximation of it.
    pub fn advance(&mut self, dt: f32) -> TransitionStep {
        self.elapsed += dt.max(0.0);

        if self.duration <= 0.0 || self.elapsed >= self.duration {
            self.elapsed = self.duration.max(0.0);
            return TransitionStep::Finished(self.to);
        }

        let eased = self.easing.apply(self.elapsed / self.duration);
        TransitionStep::Running(VisualFrame::lerp(self.from, self.to, eased))
    }

    /// Frame shown before the first `advance`.
    pub fn start_frame(&self) -> VisualFrame {
        self.from
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

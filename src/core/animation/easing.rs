//=========================================================================
// Easing Curves
//=========================================================================
//
// Curves a transition's linear progress before the alpha/scale lerp.
// The curve math is `keyframe`'s.
//
//=========================================================================

//=== External Dependencies ===============================================

use keyframe::{functions, EasingFunction};
use serde::{Deserialize, Serialize};

//=== EaseType ============================================================

/// Shape of a panel transition over its duration.
///
/// Chosen per panel and per direction in `PanelConfig`
/// (`open_easing = "CubicOut"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EaseType {
    Linear,
    EaseIn,
    EaseOut,
    /// Panel fades and grows symmetrically.
    #[default]
    EaseInOut,
    QuadOut,
    /// Snappy open that settles gently.
    CubicOut,
}

impl EaseType {
    /// Eased progress for linear `progress` in `[0, 1]`.
    ///
    /// Out-of-range input is clamped, so 0 → 0 and 1 → 1 on every curve.
    pub fn apply(self, progress: f32) -> f32 {
        let x = f64::from(progress.clamp(0.0, 1.0));
        let y = match self {
            Self::Linear => functions::Linear.y(x),
            Self::EaseIn => functions::EaseIn.y(x),
            Self::EaseOut => functions::EaseOut.y(x),
            Self::EaseInOut => functions::EaseInOut.y(x),
            Self::QuadOut => functions::EaseOutQuad.y(x),
            Self::CubicOut => functions::EaseOutCubic.y(x),
        };
        y as f32
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Pause Controller
//=========================================================================
//
// Game time-scale with reference-counted pause requests.
//
// Each system that wants the game paused holds a request under its own
// `PauseSource`. The effective time-scale is 0 while any request is held
// and the base scale otherwise. Changes to the base while paused are
// kept, so releasing a pause never clobbers gameplay's own setting.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::debug;

//=== PauseSource =========================================================

/// Who is asking for the pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseSource {
    /// The panel coordinator (UI active).
    Ui,

    /// Any other system (cutscenes, debug tools...).
    Custom(u32),
}

impl PauseSource {
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

//=== PauseController =====================================================

#[derive(Debug)]
pub struct PauseController {
    base_scale: f32,
    requests: HashSet<PauseSource>,
}

impl PauseController {
    /// Negative (or NaN) base scales are clamped to 0.
    pub fn new(base_scale: f32) -> Self {
        Self {
            base_scale: base_scale.max(0.0),
            requests: HashSet::new(),
        }
    }

    /// Holds a pause for `source`. Returns `false` if it already held one.
    pub fn request(&mut self, source: PauseSource) -> bool {
        let added = self.requests.insert(source);
        if added {
            debug!("Pause requested by {:?}", source);
        }
        added
    }

    /// Drops `source`'s pause. Returns `false` if it held none.
    pub fn release(&mut self, source: PauseSource) -> bool {
        let removed = self.requests.remove(&source);
        if removed {
            debug!("Pause released by {:?}", source);
        }
        removed
    }

    pub fn is_paused(&self) -> bool {
        !self.requests.is_empty()
    }

    pub fn is_held_by(&self, source: PauseSource) -> bool {
        self.requests.contains(&source)
    }

    /// Effective game time-scale.
    pub fn time_scale(&self) -> f32 {
        if self.is_paused() {
            0.0
        } else {
            self.base_scale
        }
    }

    /// Scale restored once every pause is released.
    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }

    /// Sets the base scale. While paused this takes effect on release.
    pub fn set_base_scale(&mut self, scale: f32) {
        self.base_scale = scale.max(0.0);
    }
}

impl Default for PauseController {
    fn default() -> Self {
        Self::new(1.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaused_reports_base_scale() {
        let pause = PauseController::new(0.75);
        assert!(!pause.is_paused());
        assert_eq!(pause.time_scale(), 0.75);
    }

    #[test]
    fn request_and_release_restore_base() {
        let mut pause = PauseController::default();

        assert!(pause.request(PauseSource::Ui));
        assert_eq!(pause.time_scale(), 0.0);

        assert!(pause.release(PauseSource::Ui));
        assert_eq!(pause.time_scale(), 1.0);
    }

    #[test]
    fn pause_holds_until_every_source_releases() {
        let mut pause = PauseController::default();
        let cutscene = PauseSource::custom(7);

        pause.request(PauseSource::Ui);
        pause.request(cutscene);

        pause.release(PauseSource::Ui);
        assert_eq!(pause.time_scale(), 0.0);
        assert!(pause.is_held_by(cutscene));

        pause.release(cutscene);
        assert_eq!(pause.time_scale(), 1.0);
    }

    #[test]
    fn duplicate_request_and_spurious_release() {
        let mut pause = PauseController::default();
        assert!(pause.request(PauseSource::Ui));
        assert!(!pause.request(PauseSource::Ui));
        assert!(pause.release(PauseSource::Ui));
        assert!(!pause.release(PauseSource::Ui));
        assert!(!pause.is_paused());
    }

    #[test]
    fn base_change_while_paused_survives_release() {
        let mut pause = PauseController::default();
        pause.request(PauseSource::Ui);

        pause.set_base_scale(0.5);
        assert_eq!(pause.time_scale(), 0.0);

        pause.release(PauseSource::Ui);
        assert_eq!(pause.time_scale(), 0.5);
    }

    #[test]
    fn negative_initial_base_clamped() {
        let pause = PauseController::new(-1.0);
        assert_eq!(pause.time_scale(), 0.0);
        assert!(!pause.is_paused());
    }

    #[test]
    fn negative_base_clamped() {
        let mut pause = PauseController::default();
        pause.set_base_scale(-2.0);
        assert_eq!(pause.base_scale(), 0.0);
    }
}

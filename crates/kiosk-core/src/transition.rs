//! View-mode transition and idle-float interpolation for the orbital module
//!
//! Each rendered frame the controller derives a target transform from the
//! active view mode, then moves the live transform a fraction of the
//! remaining distance toward it. The fraction is an exponential-decay factor
//! parametrized by elapsed real time, so the approach speed is the same at
//! any frame rate.

use bevy_math::Vec3;

use crate::session::ViewMode;

/// Per-frame approach fraction at the reference frame rate
pub const LERP_RATE: f32 = 0.08;
/// Frame rate at which [`LERP_RATE`] applies once per frame
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Idle float ("bob") frequency in radians per second
pub const FLOAT_FREQUENCY: f32 = 0.3;
/// Idle float amplitude in scene units
pub const FLOAT_AMPLITUDE: f32 = 0.05;

/// Vertical shift applied when framing one half of the module
pub const FOCUS_OFFSET: f32 = 1.5;
/// Zoom applied when framing one half of the module
pub const FOCUS_SCALE: f32 = 1.8;
/// Base scale while visitors can orbit the model
pub const BASE_SCALE_INTERACTIVE: f32 = 1.0;
/// Base scale for the attract (auto-rotating) display
pub const BASE_SCALE_ATTRACT: f32 = 1.2;

/// Attract-mode spin in radians per second (0.005 rad per reference frame)
pub const ATTRACT_SPIN_RATE: f32 = 0.005 * REFERENCE_FRAME_RATE;

/// Target transform derived fresh every frame; never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTarget {
    pub translation: Vec3,
    pub scale: f32,
}

impl TransitionTarget {
    /// Compute the target for the current mode and elapsed session time.
    ///
    /// The bob is superimposed in every mode. The Crew/Service focus offsets
    /// and zoom only apply while interactive; the attract display always
    /// frames the full module at its larger base scale.
    pub fn for_mode(mode: ViewMode, interactive: bool, elapsed: f32) -> Self {
        let bob = (elapsed * FLOAT_FREQUENCY).sin() * FLOAT_AMPLITUDE;
        let mut translation = Vec3::new(0.0, bob, 0.0);
        let mut scale = if interactive {
            BASE_SCALE_INTERACTIVE
        } else {
            BASE_SCALE_ATTRACT
        };

        if interactive {
            match mode {
                // Framing the top half: move the model down, zoom in
                ViewMode::Crew => {
                    translation.y = -FOCUS_OFFSET + bob;
                    scale = FOCUS_SCALE;
                }
                // Framing the bottom half: move the model up, zoom in
                ViewMode::Service => {
                    translation.y = FOCUS_OFFSET + bob;
                    scale = FOCUS_SCALE;
                }
                _ => {}
            }
        }

        Self { translation, scale }
    }
}

/// Live transform of the orbital-module root, stepped once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransition {
    pub translation: Vec3,
    /// Uniform scale
    pub scale: f32,
    /// Accumulated attract-mode spin
    pub yaw: f32,
}

impl Default for ViewTransition {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            scale: 1.0,
            yaw: 0.0,
        }
    }
}

impl ViewTransition {
    /// Approach fraction for a frame of `dt` seconds.
    ///
    /// Chosen so that one reference frame gives exactly [`LERP_RATE`] and any
    /// subdivision of an interval composes to the same total approach.
    pub fn alpha(dt: f32) -> f32 {
        1.0 - (1.0 - LERP_RATE).powf(dt * REFERENCE_FRAME_RATE)
    }

    /// Move toward `target` for a frame of `dt` seconds; in attract mode the
    /// monotonic spin advances independently of the interpolation.
    pub fn step(&mut self, target: TransitionTarget, dt: f32, interactive: bool) {
        let alpha = Self::alpha(dt);
        self.translation = self.translation.lerp(target.translation, alpha);
        self.scale += (target.scale - self.scale) * alpha;
        if !interactive {
            self.yaw += ATTRACT_SPIN_RATE * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_alpha_matches_reference_rate() {
        assert!((ViewTransition::alpha(DT) - LERP_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_alpha_is_time_step_independent() {
        // Two half frames compose to the same approach as one full frame
        let one = ViewTransition::alpha(DT);
        let half = ViewTransition::alpha(DT / 2.0);
        let composed = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((one - composed).abs() < 1e-6);
    }

    #[test]
    fn test_distance_decreases_monotonically_without_overshoot() {
        let mut transition = ViewTransition::default();
        let target = TransitionTarget {
            translation: Vec3::new(0.0, -1.5, 0.0),
            scale: 1.8,
        };
        let mut last_distance = f32::MAX;
        for _ in 0..600 {
            transition.step(target, DT, true);
            let distance = transition.translation.distance(target.translation);
            assert!(distance <= last_distance, "distance must not increase");
            // No overshoot: the y component stays on the start side of the target
            assert!(transition.translation.y >= target.translation.y);
            assert!(transition.scale <= target.scale);
            last_distance = distance;
        }
        // Converged after ten seconds
        assert!(last_distance < 1e-3);
        assert!((transition.scale - target.scale).abs() < 1e-3);
    }

    #[test]
    fn test_targets_per_mode() {
        let crew = TransitionTarget::for_mode(ViewMode::Crew, true, 0.0);
        assert!((crew.translation.y - -FOCUS_OFFSET).abs() < 1e-6);
        assert_eq!(crew.scale, FOCUS_SCALE);

        let service = TransitionTarget::for_mode(ViewMode::Service, true, 0.0);
        assert!((service.translation.y - FOCUS_OFFSET).abs() < 1e-6);
        assert_eq!(service.scale, FOCUS_SCALE);

        let full = TransitionTarget::for_mode(ViewMode::Full, true, 0.0);
        assert_eq!(full.translation.y, 0.0);
        assert_eq!(full.scale, BASE_SCALE_INTERACTIVE);
    }

    #[test]
    fn test_attract_display_ignores_focus_modes() {
        let target = TransitionTarget::for_mode(ViewMode::Crew, false, 0.0);
        assert_eq!(target.translation.y, 0.0);
        assert_eq!(target.scale, BASE_SCALE_ATTRACT);
    }

    #[test]
    fn test_bob_is_superimposed() {
        // A quarter period into the float cycle the offset is at its peak
        let quarter = std::f32::consts::FRAC_PI_2 / FLOAT_FREQUENCY;
        let target = TransitionTarget::for_mode(ViewMode::Full, true, quarter);
        assert!((target.translation.y - FLOAT_AMPLITUDE).abs() < 1e-5);

        let crew = TransitionTarget::for_mode(ViewMode::Crew, true, quarter);
        assert!((crew.translation.y - (-FOCUS_OFFSET + FLOAT_AMPLITUDE)).abs() < 1e-5);
    }

    #[test]
    fn test_attract_spin_accumulates_only_when_not_interactive() {
        let target = TransitionTarget::for_mode(ViewMode::Full, true, 0.0);

        let mut interactive = ViewTransition::default();
        interactive.step(target, DT, true);
        assert_eq!(interactive.yaw, 0.0);

        let mut attract = ViewTransition::default();
        for _ in 0..60 {
            attract.step(target, DT, false);
        }
        assert!((attract.yaw - ATTRACT_SPIN_RATE).abs() < 1e-4);
    }
}

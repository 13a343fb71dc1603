//! Scene-mounting rules and per-scene orbit-control bounds

use bevy_math::Vec3;

use crate::session::ViewMode;

/// The renderable subtree that owns one 3D asset.
///
/// Exactly one of these is mounted at a time; the mapping from view mode is
/// total, so switching views can never leave the scene empty or doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Orbital module model (Full, Crew and Service views)
    OrbitalModule,
    /// HLVM3 launch vehicle model
    LaunchVehicle,
    /// Crew module cross-section model
    CrossSection,
    /// Panoramic crew-module interior
    Interior,
}

impl SceneKind {
    /// Which subtree a view mode mounts.
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Full | ViewMode::Crew | ViewMode::Service => SceneKind::OrbitalModule,
            ViewMode::Lvm3 => SceneKind::LaunchVehicle,
            ViewMode::CrossSection => SceneKind::CrossSection,
            ViewMode::Interior => SceneKind::Interior,
        }
    }

    /// The space background is mounted alongside every exterior scene but
    /// not inside the crew module.
    pub fn wants_background(self) -> bool {
        self != SceneKind::Interior
    }

    /// Orbit-camera limits for this scene.
    pub fn orbit_bounds(self) -> OrbitBounds {
        match self {
            SceneKind::OrbitalModule => OrbitBounds {
                min_distance: 3.0,
                max_distance: 12.0,
                target: Vec3::new(0.0, 0.5, 0.0),
                azimuth_limit: None,
                rotate_speed: 1.0,
            },
            SceneKind::LaunchVehicle => OrbitBounds {
                min_distance: 5.0,
                max_distance: 25.0,
                target: Vec3::ZERO,
                azimuth_limit: None,
                rotate_speed: 1.0,
            },
            SceneKind::CrossSection => OrbitBounds {
                min_distance: 4.0,
                max_distance: 10.0,
                target: Vec3::ZERO,
                azimuth_limit: None,
                rotate_speed: 1.0,
            },
            // Inside the module: constrained to a half circle, inverted drag
            // for a "looking around" feel.
            SceneKind::Interior => OrbitBounds {
                min_distance: 0.1,
                max_distance: 10.0,
                target: Vec3::ZERO,
                azimuth_limit: Some(std::f32::consts::FRAC_PI_2),
                rotate_speed: -0.5,
            },
        }
    }
}

/// Limits for the orbit camera while a given scene is mounted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitBounds {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fixed look-at point
    pub target: Vec3,
    /// Horizontal arc limit: azimuth is clamped to ±limit when set
    pub azimuth_limit: Option<f32>,
    /// Drag-to-rotation multiplier; negative inverts the direction
    pub rotate_speed: f32,
}

impl OrbitBounds {
    /// Clamp a requested camera distance into this scene's range.
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }

    /// Clamp a requested azimuth into this scene's arc, if constrained.
    pub fn clamp_azimuth(&self, azimuth: f32) -> f32 {
        match self.azimuth_limit {
            Some(limit) => azimuth.clamp(-limit, limit),
            None => azimuth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_mounts_exactly_one_scene() {
        assert_eq!(SceneKind::for_mode(ViewMode::Full), SceneKind::OrbitalModule);
        assert_eq!(SceneKind::for_mode(ViewMode::Crew), SceneKind::OrbitalModule);
        assert_eq!(SceneKind::for_mode(ViewMode::Service), SceneKind::OrbitalModule);
        assert_eq!(SceneKind::for_mode(ViewMode::Lvm3), SceneKind::LaunchVehicle);
        assert_eq!(
            SceneKind::for_mode(ViewMode::CrossSection),
            SceneKind::CrossSection
        );
        assert_eq!(SceneKind::for_mode(ViewMode::Interior), SceneKind::Interior);
    }

    #[test]
    fn test_background_hidden_only_inside() {
        assert!(SceneKind::OrbitalModule.wants_background());
        assert!(SceneKind::LaunchVehicle.wants_background());
        assert!(SceneKind::CrossSection.wants_background());
        assert!(!SceneKind::Interior.wants_background());
    }

    #[test]
    fn test_interior_orbit_is_constrained_and_inverted() {
        let bounds = SceneKind::Interior.orbit_bounds();
        assert!(bounds.rotate_speed < 0.0);
        let limit = bounds.azimuth_limit.expect("interior arc is limited");
        assert_eq!(bounds.clamp_azimuth(3.0), limit);
        assert_eq!(bounds.clamp_azimuth(-3.0), -limit);
        assert_eq!(bounds.clamp_azimuth(0.5), 0.5);
    }

    #[test]
    fn test_distance_clamping() {
        let bounds = SceneKind::OrbitalModule.orbit_bounds();
        assert_eq!(bounds.clamp_distance(0.5), 3.0);
        assert_eq!(bounds.clamp_distance(50.0), 12.0);
        assert_eq!(bounds.clamp_distance(7.0), 7.0);
        // Exterior scenes allow the full circle
        assert_eq!(bounds.clamp_azimuth(9.0), 9.0);
    }
}

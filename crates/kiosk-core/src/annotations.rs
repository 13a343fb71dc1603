//! Static annotation tables for each scene
//!
//! Annotations are anchored in model-local space and projected onto the 2D
//! overlay by the viewer. Positions are tuned to the shipped GLB models.

use bevy_math::Vec3;

use crate::scene::SceneKind;
use crate::session::ViewMode;

/// Which side of the anchor the label extends toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

/// Visibility group for mode-dependent labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelGroup {
    /// Always visible while the scene is interactive
    Always,
    /// Crew-module labels: visible in Full and Crew views
    CrewModule,
    /// Service-module labels: visible in Full and Service views
    ServiceModule,
}

impl LabelGroup {
    /// Whether labels in this group are shown for the active view mode.
    pub fn visible_in(self, mode: ViewMode) -> bool {
        match self {
            LabelGroup::Always => true,
            LabelGroup::CrewModule => matches!(mode, ViewMode::Full | ViewMode::Crew),
            LabelGroup::ServiceModule => matches!(mode, ViewMode::Full | ViewMode::Service),
        }
    }
}

/// A label anchored to a point in model-local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    pub anchor: Vec3,
    pub label: &'static str,
    pub detail: Option<&'static str>,
    pub side: LabelSide,
    pub group: LabelGroup,
}

impl Annotation {
    const fn new(x: f32, y: f32, z: f32, label: &'static str, side: LabelSide) -> Self {
        Self {
            anchor: Vec3::new(x, y, z),
            label,
            detail: None,
            side,
            group: LabelGroup::Always,
        }
    }

    const fn grouped(self, group: LabelGroup) -> Self {
        Self { group, ..self }
    }

    const fn detailed(self, detail: &'static str) -> Self {
        Self {
            detail: Some(detail),
            ..self
        }
    }
}

/// Orbital-module labels, split into crew (top) and service (bottom) groups
pub const ORBITAL_MODULE: &[Annotation] = &[
    Annotation::new(0.0, 2.2, 0.0, "Apex Cover", LabelSide::Left).grouped(LabelGroup::CrewModule),
    Annotation::new(-0.8, 1.5, 0.0, "Crew Module Hull", LabelSide::Left)
        .grouped(LabelGroup::CrewModule),
    Annotation::new(0.6, 1.2, 0.4, "View Port", LabelSide::Right).grouped(LabelGroup::CrewModule),
    Annotation::new(1.2, -0.5, 0.0, "Solar Arrays", LabelSide::Right)
        .grouped(LabelGroup::ServiceModule),
    Annotation::new(0.8, -1.5, 0.0, "Propulsion System", LabelSide::Right)
        .grouped(LabelGroup::ServiceModule),
    Annotation::new(-0.8, -1.0, 0.0, "Service Module Body", LabelSide::Left)
        .grouped(LabelGroup::ServiceModule),
];

/// Launch-vehicle stage labels, top to bottom
pub const LAUNCH_VEHICLE: &[Annotation] = &[
    Annotation::new(0.0, 8.5, 0.0, "Crew Escape System (CES)", LabelSide::Right),
    Annotation::new(0.5, 5.5, 0.0, "Orbital Module Fairing", LabelSide::Right),
    Annotation::new(0.8, 1.5, 0.0, "Cryogenic Stage (C25)", LabelSide::Right),
    Annotation::new(1.2, -3.5, 0.0, "Solid Boosters (S200)", LabelSide::Right),
    Annotation::new(0.0, -4.5, 0.0, "Core Liquid Stage (L110)", LabelSide::Left),
];

/// Cross-section labels for the life-support subsystems
pub const CROSS_SECTION: &[Annotation] = &[
    Annotation::new(1.2, 1.2, 0.0, "Air Revitalization", LabelSide::Right)
        .detailed("CO2 and Odor Removal"),
    Annotation::new(1.4, 0.4, 0.0, "Pressure Control", LabelSide::Right)
        .detailed("Oxygen Regulation System"),
    Annotation::new(1.3, -0.6, 0.0, "Thermal Control", LabelSide::Right)
        .detailed("Heat & Humidity Management"),
    Annotation::new(0.0, -1.4, 0.5, "ECLSS Controller", LabelSide::Left)
        .detailed("Environmental Systems Logic"),
];

/// The annotation table for a scene. The interior has no anchored labels.
pub fn for_scene(kind: SceneKind) -> &'static [Annotation] {
    match kind {
        SceneKind::OrbitalModule => ORBITAL_MODULE,
        SceneKind::LaunchVehicle => LAUNCH_VEHICLE,
        SceneKind::CrossSection => CROSS_SECTION,
        SceneKind::Interior => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbital_visible(mode: ViewMode) -> (usize, usize) {
        let crew = ORBITAL_MODULE
            .iter()
            .filter(|a| a.group == LabelGroup::CrewModule && a.group.visible_in(mode))
            .count();
        let service = ORBITAL_MODULE
            .iter()
            .filter(|a| a.group == LabelGroup::ServiceModule && a.group.visible_in(mode))
            .count();
        (crew, service)
    }

    #[test]
    fn test_full_view_shows_both_groups() {
        assert_eq!(orbital_visible(ViewMode::Full), (3, 3));
    }

    #[test]
    fn test_crew_view_hides_service_labels() {
        assert_eq!(orbital_visible(ViewMode::Crew), (3, 0));
    }

    #[test]
    fn test_service_view_hides_crew_labels() {
        assert_eq!(orbital_visible(ViewMode::Service), (0, 3));
    }

    #[test]
    fn test_scene_tables() {
        assert_eq!(for_scene(SceneKind::OrbitalModule).len(), 6);
        assert_eq!(for_scene(SceneKind::LaunchVehicle).len(), 5);
        assert_eq!(for_scene(SceneKind::CrossSection).len(), 4);
        assert!(for_scene(SceneKind::Interior).is_empty());
    }

    #[test]
    fn test_cross_section_labels_carry_details() {
        assert!(CROSS_SECTION.iter().all(|a| a.detail.is_some()));
    }
}

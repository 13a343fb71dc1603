//! Catalog of the named 3D assets the kiosk mounts

use crate::scene::SceneKind;

/// A named asset slot. Each scene owns exactly one; absence of the file
/// surfaces as a contained per-scene failure, never a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelSlot {
    OrbitalModule,
    Lvm3Rocket,
    CrossSection,
    InteriorPanorama,
}

impl ModelSlot {
    /// The asset that a scene subtree mounts.
    pub fn for_scene(kind: SceneKind) -> Self {
        match kind {
            SceneKind::OrbitalModule => ModelSlot::OrbitalModule,
            SceneKind::LaunchVehicle => ModelSlot::Lvm3Rocket,
            SceneKind::CrossSection => ModelSlot::CrossSection,
            SceneKind::Interior => ModelSlot::InteriorPanorama,
        }
    }

    /// Path relative to the configured asset directory.
    pub fn path(self) -> &'static str {
        match self {
            ModelSlot::OrbitalModule => "models/orbital_module.glb",
            ModelSlot::Lvm3Rocket => "models/lvm3_rocket.glb",
            ModelSlot::CrossSection => "models/cross_section.glb",
            ModelSlot::InteriorPanorama => "environments/interior_panorama.hdr",
        }
    }

    /// File name shown in diagnostic fallbacks.
    pub fn file_name(self) -> &'static str {
        self.path()
            .rsplit_once('/')
            .map(|(_, file)| file)
            .unwrap_or(self.path())
    }

    /// Remediation hint rendered with the diagnostic placeholder.
    pub fn remediation(self) -> String {
        let dir = self
            .path()
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .unwrap_or("");
        format!(
            "1. Create folder: assets/{dir}\n2. Upload file: {}",
            self.file_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_scene_has_one_slot() {
        assert_eq!(
            ModelSlot::for_scene(SceneKind::OrbitalModule),
            ModelSlot::OrbitalModule
        );
        assert_eq!(
            ModelSlot::for_scene(SceneKind::LaunchVehicle),
            ModelSlot::Lvm3Rocket
        );
        assert_eq!(
            ModelSlot::for_scene(SceneKind::CrossSection),
            ModelSlot::CrossSection
        );
        assert_eq!(
            ModelSlot::for_scene(SceneKind::Interior),
            ModelSlot::InteriorPanorama
        );
    }

    #[test]
    fn test_file_name_and_remediation() {
        assert_eq!(ModelSlot::Lvm3Rocket.file_name(), "lvm3_rocket.glb");
        let hint = ModelSlot::OrbitalModule.remediation();
        assert!(hint.contains("assets/models"));
        assert!(hint.contains("orbital_module.glb"));
    }
}

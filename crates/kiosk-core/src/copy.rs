//! Display copy for the overlay UI
//!
//! All strings the overlay derives from the active view mode live here so
//! the UI systems stay free of business logic.

use crate::session::ViewMode;

pub const CENTER_NAME: &str = "Regional Science Center, Bhopal";
pub const CENTER_SUBTITLE: &str =
    "(National Council of Science Museums, Ministry of Culture, Govt. of India)";
pub const MISSION_TITLE: &str = "GAGAN YAAN EXPLORATION";
pub const MISSION_TAGLINE: &str =
    "EXPLORE THE GAGAN YAAN ORBITAL MODULE IN 3D AND EXPERIENCE MISSION";
pub const TAP_TO_START: &str = "TAP ANYWHERE TO START";
pub const VERSION_LABEL: &str = "VERSION 1.0";
pub const ATTRIBUTION: &str = "The visuals are presented by Regional Science Centre Bhopal \
based on the researches and available online/offline materials.";

pub const MENU_HEADING: &str = "COMPONENTS QUICK EXPLORE MENU";
pub const BACK_TO_HOME: &str = "BACK TO HOME";
pub const BACK_TO_EXTERIOR: &str = "BACK TO EXTERIOR";

pub const INTERIOR_LOADING_HEADING: &str = "ACCESSING SYSTEM";
pub const INTERIOR_LOADING_BODY: &str = "ENTERING GAGANYAAN CREW MODULE";
pub const INTERIOR_LOADING_HINT: &str = "PLEASE WAIT FOR ACCESS...";

const INFO_ORBITAL: &str = "Orbital Module (OM) that will be Orbiting Earth comprises of \
Crew Module (CM) and Service Module (SM).\n\nOM is equipped with state-of-the-art avionics \
systems with adequate redundancy considering human safety.";

const INFO_LVM3: &str = "LVM3 rocket - The well proven and reliable heavy lift launcher of \
ISRO, is identified as the launch vehicle for Gaganyaan mission. It consists of solid stage, \
liquid stage and cryogenic stage. All systems in LVM3 launch vehicle are re-configured to \
meet human rating requirements and christened Human Rated LVM3. HLVM3 will be capable of \
launching the Orbital Module to an intended Low Earth Orbit of 400 km.";

/// Centered contextual title for the active view.
pub fn mode_title(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Lvm3 => "HUMAN RATED LVM3 LAUNCH VEHICLE",
        ViewMode::CrossSection => "CREW MODULE CROSS SECTION VIEW",
        _ => "GAGANYAAN ORBITAL MODULE",
    }
}

/// Descriptive copy for the left info panel. The launch-vehicle text is also
/// shown on the cross-section screen, matching the reference display.
pub fn info_text(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Lvm3 | ViewMode::CrossSection => INFO_LVM3,
        _ => INFO_ORBITAL,
    }
}

/// Label for the launch-vehicle/orbital-module flip button.
pub fn vehicle_toggle_label(mode: ViewMode) -> &'static str {
    if mode == ViewMode::Lvm3 {
        "GAGANYAAN ORBITAL MODULE"
    } else {
        "HUMAN RATED LVM3 LAUNCH VEHICLE"
    }
}

/// The mode the launch-vehicle flip button requests.
pub fn vehicle_toggle_target(mode: ViewMode) -> ViewMode {
    if mode == ViewMode::Lvm3 {
        ViewMode::Full
    } else {
        ViewMode::Lvm3
    }
}

/// Menu button captions paired with the mode they request.
pub const MENU_BUTTONS: &[(&str, ViewMode)] = &[
    ("CREW MODULE", ViewMode::Crew),
    ("SERVICE MODULE", ViewMode::Service),
    ("CROSS-SECTION ORBITAL MODULE VIEW", ViewMode::CrossSection),
    ("INTERIOR VIEW OF CREW MODULE", ViewMode::Interior),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_per_mode() {
        assert_eq!(mode_title(ViewMode::Full), "GAGANYAAN ORBITAL MODULE");
        assert_eq!(mode_title(ViewMode::Crew), "GAGANYAAN ORBITAL MODULE");
        assert_eq!(mode_title(ViewMode::Lvm3), "HUMAN RATED LVM3 LAUNCH VEHICLE");
        assert_eq!(
            mode_title(ViewMode::CrossSection),
            "CREW MODULE CROSS SECTION VIEW"
        );
    }

    #[test]
    fn test_vehicle_toggle_flips_both_ways() {
        assert_eq!(vehicle_toggle_target(ViewMode::Full), ViewMode::Lvm3);
        assert_eq!(vehicle_toggle_target(ViewMode::Crew), ViewMode::Lvm3);
        assert_eq!(vehicle_toggle_target(ViewMode::Lvm3), ViewMode::Full);
    }

    #[test]
    fn test_info_text_follows_reference_display() {
        assert_eq!(info_text(ViewMode::CrossSection), info_text(ViewMode::Lvm3));
        assert_ne!(info_text(ViewMode::Full), info_text(ViewMode::Lvm3));
    }
}

//! Session state machine: which overlay is up and which view is active

use serde::{Deserialize, Serialize};

/// Top-level screen of the kiosk session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppScreen {
    /// Attract/start overlay, waiting for a visitor
    #[default]
    StartScreen,
    /// Interactive exploration of the spacecraft
    Exploration,
}

/// Active view of the exploration scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Complete orbital module, centered
    #[default]
    Full,
    /// Zoomed onto the crew module (top half)
    Crew,
    /// Zoomed onto the service module (bottom half)
    Service,
    /// HLVM3 launch vehicle
    Lvm3,
    /// Crew module cross section
    CrossSection,
    /// Panoramic crew module interior
    Interior,
}

impl ViewMode {
    /// Modes that frame the orbital module itself
    pub fn is_orbital(self) -> bool {
        matches!(self, ViewMode::Full | ViewMode::Crew | ViewMode::Service)
    }

    /// Whether re-selecting this mode reverts the view to [`ViewMode::Full`].
    ///
    /// Only the orbital-module family toggles off; Lvm3, CrossSection and
    /// Interior are selected by explicit buttons and stay put on repeat.
    pub fn auto_reverts(self) -> bool {
        self.is_orbital()
    }
}

/// The two pieces of top-level kiosk state and their transitions.
///
/// All operations are total; there is no invalid transition to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub screen: AppScreen,
    pub view: ViewMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave the start screen and begin exploring.
    pub fn start(&mut self) {
        self.screen = AppScreen::Exploration;
        tracing::info!("session started");
    }

    /// Return to the start screen. The view resets to Full unconditionally
    /// so the next visitor begins from the default framing.
    pub fn go_back(&mut self) {
        self.screen = AppScreen::StartScreen;
        self.view = ViewMode::Full;
        tracing::info!("session returned to start screen");
    }

    /// Select a view, with the auto-revert rule for the orbital family:
    /// re-selecting the active Crew/Service/Full mode switches back to Full,
    /// while Lvm3/CrossSection/Interior stay selected on repeat.
    pub fn toggle_view(&mut self, mode: ViewMode) {
        if self.view == mode && mode.auto_reverts() {
            self.view = ViewMode::Full;
        } else {
            self.view = mode;
        }
        tracing::debug!(?mode, now = ?self.view, "view toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.screen, AppScreen::StartScreen);
        assert_eq!(session.view, ViewMode::Full);
    }

    #[test]
    fn test_start_enters_exploration() {
        let mut session = Session::new();
        session.start();
        assert_eq!(session.screen, AppScreen::Exploration);
        assert_eq!(session.view, ViewMode::Full);
    }

    #[test]
    fn test_go_back_resets_view_from_any_mode() {
        for mode in [
            ViewMode::Full,
            ViewMode::Crew,
            ViewMode::Service,
            ViewMode::Lvm3,
            ViewMode::CrossSection,
            ViewMode::Interior,
        ] {
            let mut session = Session::new();
            session.start();
            session.toggle_view(mode);
            session.go_back();
            assert_eq!(session.screen, AppScreen::StartScreen);
            assert_eq!(session.view, ViewMode::Full);
        }
    }

    #[test]
    fn test_double_toggle_reverts_orbital_family() {
        for mode in [ViewMode::Crew, ViewMode::Service] {
            let mut session = Session::new();
            session.start();
            session.toggle_view(mode);
            assert_eq!(session.view, mode);
            session.toggle_view(mode);
            assert_eq!(session.view, ViewMode::Full, "{mode:?} should revert");
        }
    }

    #[test]
    fn test_double_toggle_keeps_explicit_modes() {
        for mode in [ViewMode::Lvm3, ViewMode::CrossSection, ViewMode::Interior] {
            let mut session = Session::new();
            session.start();
            session.toggle_view(mode);
            session.toggle_view(mode);
            assert_eq!(session.view, mode, "{mode:?} should stay selected");
        }
    }

    #[test]
    fn test_toggle_full_while_full_stays_full() {
        let mut session = Session::new();
        session.start();
        session.toggle_view(ViewMode::Full);
        assert_eq!(session.view, ViewMode::Full);
    }

    #[test]
    fn test_switching_between_modes() {
        let mut session = Session::new();
        session.start();
        session.toggle_view(ViewMode::Crew);
        session.toggle_view(ViewMode::Service);
        assert_eq!(session.view, ViewMode::Service);
        session.toggle_view(ViewMode::Lvm3);
        assert_eq!(session.view, ViewMode::Lvm3);
        // The LVM3 toggle button flips back to Full explicitly
        session.toggle_view(ViewMode::Full);
        assert_eq!(session.view, ViewMode::Full);
    }
}

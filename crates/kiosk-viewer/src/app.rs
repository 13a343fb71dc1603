//! Bevy application setup and top-level session resources

use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowMode};
use bevy_egui::EguiPlugin;

use kiosk_core::{AppScreen, KioskConfig, Language, Session, ViewMode};

/// Shared session state: which overlay is up and which view is active
#[derive(Debug, Clone, Resource, Default)]
pub struct ViewState {
    pub session: Session,
}

/// Display settings loaded at startup; immutable for the session
#[derive(Debug, Clone, Resource)]
pub struct KioskSettings {
    pub config: KioskConfig,
}

/// Active overlay language (placeholder toggle; copy ships in English)
#[derive(Debug, Clone, Resource)]
pub struct ActiveLanguage(pub Language);

/// State-transition requests dispatched by the overlay UI
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Leave the start screen
    Start,
    /// Return to the start screen, resetting the view
    GoBack,
    /// Select a view, with the auto-revert rule for the orbital family
    Toggle(ViewMode),
}

/// Whether visitors can orbit the camera and use the focus views.
/// The attract display keeps auto-rotating regardless of screen.
pub fn is_interactive(state: &ViewState, settings: &KioskSettings) -> bool {
    !settings.config.attract_mode && state.session.screen == AppScreen::Exploration
}

/// Run the Bevy application
pub fn run(config: KioskConfig) {
    let mode = if config.fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.02)))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.title.clone(),
                        mode,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: config.asset_dir.clone(),
                    // No .meta files ship with the kiosk assets
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .insert_resource(ActiveLanguage(config.language))
        .insert_resource(KioskSettings { config })
        .init_resource::<ViewState>()
        .add_message::<ViewCommand>()
        .add_plugins(crate::scene::ScenePlugin)
        .add_plugins(crate::background::BackgroundPlugin)
        .add_plugins(crate::models::ModelsPlugin)
        .add_plugins(crate::annotations::AnnotationsPlugin)
        .add_plugins(crate::ui::UiPlugin)
        .add_systems(Update, apply_view_commands)
        .run();
}

/// Apply UI transition requests to the session
fn apply_view_commands(
    mut commands: MessageReader<ViewCommand>,
    mut state: ResMut<ViewState>,
) {
    for command in commands.read() {
        match command {
            ViewCommand::Start => state.session.start(),
            ViewCommand::GoBack => state.session.go_back(),
            ViewCommand::Toggle(mode) => state.session.toggle_view(*mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_requires_exploration() {
        let settings = KioskSettings {
            config: KioskConfig::default(),
        };
        let mut state = ViewState::default();
        assert!(!is_interactive(&state, &settings));
        state.session.start();
        assert!(is_interactive(&state, &settings));
    }

    #[test]
    fn test_attract_mode_is_never_interactive() {
        let settings = KioskSettings {
            config: KioskConfig {
                attract_mode: true,
                ..KioskConfig::default()
            },
        };
        let mut state = ViewState::default();
        state.session.start();
        assert!(!is_interactive(&state, &settings));
    }
}

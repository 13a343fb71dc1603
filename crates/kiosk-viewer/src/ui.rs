//! Overlay UI: start screen, exploration chrome and loading indicators

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use kiosk_core::{copy, AppScreen, Language, ViewMode};

use crate::app::{is_interactive, ActiveLanguage, KioskSettings, ViewCommand, ViewState};
use crate::models::{ModelStatus, MountedModel};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(90, 160, 255);
const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(235, 240, 250);
const TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(160, 175, 200);
// Premultiplied equivalent of unmultiplied (8, 14, 28, 200); the
// unmultiplied constructor is not const.
const PANEL_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(6, 11, 22, 200);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, draw_overlay);
    }
}

fn draw_overlay(
    mut contexts: EguiContexts,
    state: Res<ViewState>,
    settings: Res<KioskSettings>,
    mut language: ResMut<ActiveLanguage>,
    mut commands: MessageWriter<ViewCommand>,
    mounts: Query<&MountedModel>,
    time: Res<Time>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    match state.session.screen {
        AppScreen::StartScreen => {
            draw_start_screen(ctx, &mut language, &mut commands, time.elapsed_secs());
        }
        AppScreen::Exploration => {
            draw_exploration(ctx, &state, &settings, &mut language, &mut commands, &mounts);
        }
    }
}

/// Branding header shown on every screen
fn branding_header(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("branding-header"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(copy::CENTER_NAME)
                        .color(TEXT_PRIMARY)
                        .size(26.0),
                );
                ui.label(
                    egui::RichText::new(copy::CENTER_SUBTITLE)
                        .color(TEXT_DIM)
                        .size(13.0),
                );
            });
        });
}

/// Corner language toggle; flips the resource, copy ships in English
fn language_toggle(ctx: &egui::Context, language: &mut ActiveLanguage) {
    egui::Area::new(egui::Id::new("language-toggle"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-24.0, 24.0))
        .show(ctx, |ui| {
            let caption = match language.0 {
                Language::English => "EN",
                Language::Hindi => "HI",
            };
            if ui.button(egui::RichText::new(caption).color(ACCENT)).clicked() {
                language.0 = match language.0 {
                    Language::English => Language::Hindi,
                    Language::Hindi => Language::English,
                };
            }
        });
}

fn version_footer(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("version-footer"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -16.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(copy::VERSION_LABEL)
                    .color(TEXT_DIM)
                    .size(11.0),
            );
        });
}

fn draw_start_screen(
    ctx: &egui::Context,
    language: &mut ActiveLanguage,
    commands: &mut MessageWriter<ViewCommand>,
    elapsed: f32,
) {
    branding_header(ctx);
    language_toggle(ctx, language);
    version_footer(ctx);

    // Mission title and pulsing start prompt
    egui::Area::new(egui::Id::new("start-title"))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(copy::MISSION_TITLE)
                        .color(TEXT_PRIMARY)
                        .strong()
                        .size(54.0),
                );
                ui.label(
                    egui::RichText::new(copy::MISSION_TAGLINE)
                        .color(TEXT_DIM)
                        .size(16.0),
                );
                ui.add_space(48.0);
                let pulse = 0.6 + 0.4 * (elapsed * 2.0).sin();
                ui.label(
                    egui::RichText::new(copy::TAP_TO_START)
                        .color(ACCENT.gamma_multiply(pulse))
                        .size(22.0),
                );
            });
        });

    // Attribution footer
    egui::Area::new(egui::Id::new("start-footer"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(copy::ATTRIBUTION)
                    .color(TEXT_DIM)
                    .size(11.0),
            );
        });

    // A press anywhere leaves the start screen, unless a widget took it
    let pressed = ctx.input(|i| i.pointer.any_pressed());
    if pressed && !ctx.wants_pointer_input() {
        commands.write(ViewCommand::Start);
    }
}

fn draw_exploration(
    ctx: &egui::Context,
    state: &ViewState,
    settings: &KioskSettings,
    language: &mut ActiveLanguage,
    commands: &mut MessageWriter<ViewCommand>,
    mounts: &Query<&MountedModel>,
) {
    let mode = state.session.view;
    let interactive = is_interactive(state, settings);

    // Contextual title, below the branding header
    egui::Area::new(egui::Id::new("mode-title"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 76.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(copy::mode_title(mode))
                    .color(TEXT_PRIMARY)
                    .strong()
                    .size(30.0),
            );
        });

    if !interactive {
        // Attract display: title only, no controls
        return;
    }

    if mode == ViewMode::Interior {
        draw_interior(ctx, commands, mounts);
        return;
    }

    branding_header(ctx);
    language_toggle(ctx, language);
    version_footer(ctx);

    // Home button
    egui::Area::new(egui::Id::new("back-home"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(24.0, 24.0))
        .show(ctx, |ui| {
            if overlay_button(ui, copy::BACK_TO_HOME, false) {
                commands.write(ViewCommand::GoBack);
            }
        });

    // Info panel
    egui::Area::new(egui::Id::new("info-panel"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(24.0, -24.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(PANEL_FILL)
                .corner_radius(6)
                .inner_margin(14)
                .show(ui, |ui| {
                    ui.set_max_width(360.0);
                    ui.label(
                        egui::RichText::new(copy::info_text(mode))
                            .color(TEXT_DIM)
                            .size(13.0),
                    );
                });
        });

    // Quick-explore menu
    egui::Area::new(egui::Id::new("explore-menu"))
        .anchor(egui::Align2::RIGHT_CENTER, egui::vec2(-24.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(PANEL_FILL)
                .corner_radius(6)
                .inner_margin(14)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(copy::MENU_HEADING)
                            .color(ACCENT)
                            .size(13.0),
                    );
                    ui.add_space(8.0);
                    for (caption, target) in copy::MENU_BUTTONS {
                        if overlay_button(ui, caption, mode == *target) {
                            commands.write(ViewCommand::Toggle(*target));
                        }
                    }
                });
        });

    // Vehicle flip
    egui::Area::new(egui::Id::new("vehicle-toggle"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(ctx, |ui| {
            if overlay_button(ui, copy::vehicle_toggle_label(mode), false) {
                commands.write(ViewCommand::Toggle(copy::vehicle_toggle_target(mode)));
            }
        });
}

/// Inside the crew module the chrome drops to a single exit control, plus
/// the access indicator while the panorama streams in.
fn draw_interior(
    ctx: &egui::Context,
    commands: &mut MessageWriter<ViewCommand>,
    mounts: &Query<&MountedModel>,
) {
    egui::Area::new(egui::Id::new("back-exterior"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(24.0, 24.0))
        .show(ctx, |ui| {
            if overlay_button(ui, copy::BACK_TO_EXTERIOR, false) {
                commands.write(ViewCommand::Toggle(ViewMode::Full));
            }
        });

    let loading = mounts
        .iter()
        .any(|mount| mount.status == ModelStatus::Loading);
    if loading {
        egui::Window::new("interior-loading")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(PANEL_FILL)
                    .stroke(egui::Stroke::new(1.0, ACCENT)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(copy::INTERIOR_LOADING_HEADING)
                            .color(ACCENT)
                            .strong()
                            .size(18.0),
                    );
                    ui.label(
                        egui::RichText::new(copy::INTERIOR_LOADING_BODY)
                            .color(TEXT_PRIMARY)
                            .size(14.0),
                    );
                    ui.add_space(8.0);
                    ui.spinner();
                    ui.label(
                        egui::RichText::new(copy::INTERIOR_LOADING_HINT)
                            .color(TEXT_DIM)
                            .size(12.0),
                    );
                });
            });
    }
}

/// Shared button styling; the active menu entry is drawn filled
fn overlay_button(ui: &mut egui::Ui, caption: &str, active: bool) -> bool {
    let text = egui::RichText::new(caption)
        .size(14.0)
        .color(if active { egui::Color32::BLACK } else { TEXT_PRIMARY });
    let button = if active {
        egui::Button::new(text).fill(ACCENT)
    } else {
        egui::Button::new(text)
            .fill(PANEL_FILL)
            .stroke(egui::Stroke::new(1.0, ACCENT))
    };
    ui.add_sized([260.0, 34.0], button).clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_text(shape: &egui::Shape, out: &mut String) {
        match shape {
            egui::Shape::Text(text) => {
                out.push_str(text.galley.text());
                out.push('\n');
            }
            egui::Shape::Vec(children) => {
                for child in children {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }

    fn painted_text(mut f: impl FnMut(&egui::Context)) -> String {
        let ctx = egui::Context::default();
        // Areas are invisible during their first-frame sizing pass, so prime
        // the context with one frame and inspect the second frame's output.
        let _ = ctx.run(egui::RawInput::default(), &mut f);
        let output = ctx.run(egui::RawInput::default(), f);
        let mut text = String::new();
        for clipped in &output.shapes {
            collect_text(&clipped.shape, &mut text);
        }
        text
    }

    #[test]
    fn test_shared_chrome_paints_branding_language_and_version() {
        let mut language = ActiveLanguage(Language::English);
        let text = painted_text(|ctx| {
            branding_header(ctx);
            language_toggle(ctx, &mut language);
            version_footer(ctx);
        });
        assert!(text.contains(copy::CENTER_NAME));
        assert!(text.contains(copy::CENTER_SUBTITLE));
        assert!(text.contains(copy::VERSION_LABEL));
        assert!(text.contains("EN"));
    }

    #[test]
    fn test_language_toggle_shows_active_language() {
        let mut language = ActiveLanguage(Language::Hindi);
        let text = painted_text(|ctx| language_toggle(ctx, &mut language));
        assert!(text.contains("HI"));
    }
}

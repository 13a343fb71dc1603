//! Projection of 3D-anchored labels onto the 2D overlay
//!
//! Anchors are children of the scene rig, so their world positions already
//! include the idle float and any focus offset. Each frame they are pushed
//! through the camera and drawn as a dot, a leader line and a caption.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use kiosk_core::{Annotation, LabelSide, ModelSlot};

use crate::app::{is_interactive, KioskSettings, ViewState};
use crate::models::MountedModel;
use crate::scene::MainCamera;

/// A label anchor riding on the scene rig
#[derive(Component)]
pub struct AnnotationAnchor {
    pub annotation: Annotation,
}

/// Marks a scene whose model failed to load; drives the diagnostic panel
#[derive(Component)]
pub struct FallbackDiagnostic {
    pub slot: ModelSlot,
}

/// Horizontal reach of a label's leader line in overlay points
const LEADER_LENGTH: f32 = 70.0;

const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 235, 255);
const LEADER_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 170, 230);
const DETAIL_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 170, 200);
const ALERT_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 70, 70);

pub struct AnnotationsPlugin;

impl Plugin for AnnotationsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            (draw_annotations, draw_fallback_diagnostics),
        );
    }
}

fn draw_annotations(
    mut contexts: EguiContexts,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    anchors: Query<(&GlobalTransform, &AnnotationAnchor)>,
    state: Res<ViewState>,
    settings: Res<KioskSettings>,
) {
    if !is_interactive(&state, &settings) {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("annotation-overlay"),
    ));
    let mode = state.session.view;

    for (transform, anchor) in &anchors {
        let annotation = &anchor.annotation;
        if !annotation.group.visible_in(mode) {
            continue;
        }
        let Ok(viewport) = camera.world_to_viewport(camera_transform, transform.translation())
        else {
            // Behind the camera
            continue;
        };
        let dot = egui::pos2(viewport.x, viewport.y);

        let (end, align) = match annotation.side {
            LabelSide::Left => (
                dot - egui::vec2(LEADER_LENGTH, 0.0),
                egui::Align2::RIGHT_CENTER,
            ),
            LabelSide::Right => (
                dot + egui::vec2(LEADER_LENGTH, 0.0),
                egui::Align2::LEFT_CENTER,
            ),
        };

        painter.circle_filled(dot, 3.0, LEADER_COLOR);
        painter.line_segment([dot, end], egui::Stroke::new(1.0, LEADER_COLOR));
        let text_pos = match annotation.side {
            LabelSide::Left => end - egui::vec2(4.0, 0.0),
            LabelSide::Right => end + egui::vec2(4.0, 0.0),
        };
        painter.text(
            text_pos,
            align,
            annotation.label,
            egui::FontId::proportional(15.0),
            LABEL_COLOR,
        );
        if let Some(detail) = annotation.detail {
            painter.text(
                text_pos + egui::vec2(0.0, 14.0),
                align,
                detail,
                egui::FontId::proportional(11.0),
                DETAIL_COLOR,
            );
        }
    }
}

/// Centered red panel naming the missing asset and how to restore it
fn draw_fallback_diagnostics(
    mut contexts: EguiContexts,
    diagnostics: Query<&FallbackDiagnostic, With<MountedModel>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    for diagnostic in &diagnostics {
        let slot = diagnostic.slot;
        egui::Window::new("model-diagnostic")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 120.0))
            .frame(
                egui::Frame::window(&ctx.style())
                    .stroke(egui::Stroke::new(2.0, ALERT_COLOR))
                    .fill(egui::Color32::from_rgba_unmultiplied(20, 0, 0, 220)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("MODEL NOT FOUND")
                            .color(ALERT_COLOR)
                            .strong()
                            .size(18.0),
                    );
                    ui.label(
                        egui::RichText::new(slot.file_name())
                            .color(LABEL_COLOR)
                            .monospace(),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(slot.remediation())
                            .color(DETAIL_COLOR)
                            .size(12.0),
                    );
                });
            });
    }
}

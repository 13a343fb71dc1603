//! Camera setup and orbit navigation

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use kiosk_core::{OrbitBounds, SceneKind};

use crate::app::{is_interactive, KioskSettings, ViewState};

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Orbit limits of the currently mounted scene
#[derive(Debug, Clone, Resource)]
pub struct ActiveOrbit(pub OrbitBounds);

impl Default for ActiveOrbit {
    fn default() -> Self {
        Self(SceneKind::OrbitalModule.orbit_bounds())
    }
}

/// Orbit-camera state, smoothed toward its targets each frame
#[derive(Debug, Clone, Resource)]
pub struct CameraSettings {
    pub distance: f32,
    pub target_distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub smooth_factor: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: 7.0,
            target_distance: 7.0,
            azimuth: 0.0,
            elevation: 0.0,
            sensitivity: 0.005,
            zoom_speed: 0.1,
            smooth_factor: 0.15,
        }
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .init_resource::<ActiveOrbit>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (reset_on_orbit_change, update_camera).chain());
    }
}

fn setup_camera(mut commands: Commands) {
    // Matches the reference framing: 7 units back, 40 degree vertical FOV
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 40.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, 7.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Soft global fill so models are never fully black before their scene
    // lights mount
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
        ..default()
    });
}

/// Snap the camera into the limits of a newly mounted scene
fn reset_on_orbit_change(orbit: Res<ActiveOrbit>, mut settings: ResMut<CameraSettings>) {
    if !orbit.is_changed() {
        return;
    }
    settings.target_distance = orbit.0.clamp_distance(settings.target_distance);
    settings.distance = orbit.0.clamp_distance(settings.distance);
    settings.azimuth = orbit.0.clamp_azimuth(settings.azimuth);
}

fn update_camera(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut settings: ResMut<CameraSettings>,
    orbit: Res<ActiveOrbit>,
    state: Res<ViewState>,
    kiosk: Res<KioskSettings>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    time: Res<Time>,
    mut contexts: bevy_egui::EguiContexts,
) {
    let bounds = orbit.0;
    let interactive = is_interactive(&state, &kiosk);

    // When egui wants the pointer, drain the input without moving the camera
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    if interactive && !egui_wants_pointer {
        // Orbit with left mouse drag; rotate_speed < 0 inverts the drag for
        // the interior look-around
        if mouse_button.pressed(MouseButton::Left) {
            let step = settings.sensitivity * bounds.rotate_speed;
            settings.azimuth = bounds.clamp_azimuth(settings.azimuth - total_motion.x * step);
            settings.elevation = (settings.elevation - total_motion.y * step).clamp(-1.5, 1.5);
        }

        // Single-finger orbit for the touch display
        if touch_input.iter().count() == 1 {
            for touch in touch_input.iter() {
                let delta = touch.delta();
                if delta != Vec2::ZERO {
                    let step = settings.sensitivity * bounds.rotate_speed;
                    settings.azimuth = bounds.clamp_azimuth(settings.azimuth - delta.x * step);
                    settings.elevation = (settings.elevation - delta.y * step).clamp(-1.5, 1.5);
                }
            }
        }

        // Zoom with scroll, within the scene's distance range
        for scroll in mouse_wheel.read() {
            let zoom_factor = 1.0 - scroll.y * settings.zoom_speed * 0.3;
            settings.target_distance =
                bounds.clamp_distance(settings.target_distance * zoom_factor);
        }

        // Pinch to zoom
        if touch_input.iter().count() == 2 {
            let touches: Vec<_> = touch_input.iter().collect();
            if let (Some(t1), Some(t2)) = (touches.first(), touches.get(1)) {
                let curr_dist = t1.position().distance(t2.position());
                let prev_dist =
                    (t1.position() - t1.delta()).distance(t2.position() - t2.delta());
                let zoom_factor = prev_dist / curr_dist.max(1.0);
                settings.target_distance =
                    bounds.clamp_distance(settings.target_distance * zoom_factor);
            }
        }
    } else {
        for _ in mouse_wheel.read() {}
    }

    // Smooth zoom toward the target distance
    let dt = time.delta_secs();
    let lerp_factor = 1.0 - (-settings.smooth_factor * 60.0 * dt).exp();
    settings.distance += (settings.target_distance - settings.distance) * lerp_factor;

    // Spherical placement around the scene's look-at point, Y up
    if let Ok(mut transform) = camera_query.single_mut() {
        let x = settings.distance * settings.elevation.cos() * settings.azimuth.sin();
        let y = settings.distance * settings.elevation.sin();
        let z = settings.distance * settings.elevation.cos() * settings.azimuth.cos();

        transform.translation = bounds.target + Vec3::new(x, y, z);
        transform.look_at(bounds.target, Vec3::Y);
    }
}

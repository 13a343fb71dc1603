//! Orbital space backdrop: starfield, Earth globe and sun lighting
//!
//! Mounted behind every exterior scene and despawned while the visitor is
//! inside the crew module.

use bevy::prelude::*;
use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use rand::{Rng, SeedableRng};

use kiosk_core::SceneKind;

use crate::app::ViewState;

const STAR_COUNT: usize = 2000;
const STAR_SHELL_MIN: f32 = 40.0;
const STAR_SHELL_MAX: f32 = 90.0;

/// Earth sits below and behind the spacecraft so it fills the lower frame
const EARTH_CENTER: Vec3 = Vec3::new(0.0, -14.0, -8.0);
const EARTH_RADIUS: f32 = 10.0;
const CLOUD_RADIUS: f32 = 10.05;
const ATMOSPHERE_RADIUS: f32 = 10.2;

/// Slow parallax drift of the star shell, radians per second
const STAR_DRIFT_Y: f32 = 0.02;
const STAR_DRIFT_X: f32 = 0.01;
const EARTH_SPIN: f32 = 0.05;
const CLOUD_SPIN: f32 = 0.07;

#[derive(Component)]
struct BackgroundRoot;

#[derive(Component)]
struct Starfield;

#[derive(Component)]
struct EarthGlobe;

#[derive(Component)]
struct CloudLayer;

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_background)
            .add_systems(Update, (sync_background, drift_background));
    }
}

fn spawn_background(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let root = commands
        .spawn((
            BackgroundRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    // Star shell as a point cloud
    let star_mesh = meshes.add(starfield_mesh(7_u64));
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });
    let stars = commands
        .spawn((
            Starfield,
            Mesh3d(star_mesh),
            MeshMaterial3d(star_material),
            Transform::default(),
        ))
        .id();

    // Earth group, tilted so the terminator crosses the frame
    let earth_group = commands
        .spawn((
            Transform::from_translation(EARTH_CENTER)
                .with_rotation(Quat::from_euler(EulerRot::XYZ, 0.4, 0.0, 0.2)),
            Visibility::default(),
        ))
        .id();

    let earth = commands
        .spawn((
            EarthGlobe,
            Mesh3d(meshes.add(Sphere::new(EARTH_RADIUS).mesh().uv(48, 32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.18, 0.42, 0.75),
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::default(),
        ))
        .id();

    let clouds = commands
        .spawn((
            CloudLayer,
            Mesh3d(meshes.add(Sphere::new(CLOUD_RADIUS).mesh().uv(48, 32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 1.0, 1.0, 0.25),
                alpha_mode: AlphaMode::Blend,
                perceptual_roughness: 1.0,
                ..default()
            })),
            Transform::default(),
        ))
        .id();

    // Thin atmosphere shell, rendered from its far side only so the rim
    // glows around the limb
    let atmosphere = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(ATMOSPHERE_RADIUS).mesh().uv(48, 32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(0.35, 0.6, 1.0, 0.15),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                cull_mode: Some(bevy::render::render_resource::Face::Front),
                ..default()
            })),
            Transform::default(),
        ))
        .id();

    // Sun key light plus a dim fill from the opposite side
    let sun = commands
        .spawn((
            DirectionalLight {
                illuminance: 12_000.0,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_xyz(10.0, 12.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();
    let fill = commands
        .spawn((
            DirectionalLight {
                illuminance: 1_500.0,
                color: Color::srgb(0.6, 0.7, 1.0),
                shadows_enabled: false,
                ..default()
            },
            Transform::from_xyz(-8.0, -4.0, -6.0).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();

    commands
        .entity(earth_group)
        .add_children(&[earth, clouds, atmosphere]);
    commands
        .entity(root)
        .add_children(&[stars, earth_group, sun, fill]);
}

/// Random points on a spherical shell around the origin
fn starfield_mesh(seed: u64) -> Mesh {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(STAR_COUNT);
    for _ in 0..STAR_COUNT {
        // Uniform direction via rejection sampling
        let dir = loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.length_squared() > 1e-4 && v.length_squared() <= 1.0 {
                break v.normalize();
            }
        };
        let radius = rng.gen_range(STAR_SHELL_MIN..STAR_SHELL_MAX);
        let p = dir * radius;
        positions.push([p.x, p.y, p.z]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

/// Show the backdrop only for exterior scenes
fn sync_background(
    state: Res<ViewState>,
    mut query: Query<&mut Visibility, With<BackgroundRoot>>,
) {
    if !state.is_changed() {
        return;
    }
    let wanted = SceneKind::for_mode(state.session.view).wants_background();
    for mut visibility in &mut query {
        *visibility = if wanted {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

fn drift_background(
    time: Res<Time>,
    mut stars: Query<&mut Transform, (With<Starfield>, Without<EarthGlobe>, Without<CloudLayer>)>,
    mut earth: Query<&mut Transform, (With<EarthGlobe>, Without<CloudLayer>)>,
    mut clouds: Query<&mut Transform, With<CloudLayer>>,
) {
    let dt = time.delta_secs();
    for mut transform in &mut stars {
        transform.rotate_y(STAR_DRIFT_Y * dt);
        transform.rotate_x(STAR_DRIFT_X * dt);
    }
    for mut transform in &mut earth {
        transform.rotate_y(EARTH_SPIN * dt);
    }
    for mut transform in &mut clouds {
        transform.rotate_y(CLOUD_SPIN * dt);
    }
}

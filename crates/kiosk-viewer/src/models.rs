//! Scene subtree mounting, model loading and idle animation
//!
//! Exactly one scene subtree is mounted at a time. Each subtree owns one
//! asset slot; a missing or corrupt file collapses to a red diagnostic
//! placeholder for that scene only, while every other view keeps working.

use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use kiosk_core::{
    annotations, ModelSlot, SceneKind, TransitionTarget, ViewTransition,
};

use crate::annotations::{AnnotationAnchor, FallbackDiagnostic};
use crate::app::{is_interactive, KioskSettings, ViewState};
use crate::scene::ActiveOrbit;

/// Root entity of the mounted scene; animated in place each frame
#[derive(Component)]
pub struct SceneSubtree {
    pub kind: SceneKind,
}

/// Orbital-module transition state, stepped every frame
#[derive(Component, Default)]
pub struct OrbitalModuleRig {
    pub transition: ViewTransition,
}

#[derive(Component)]
pub struct LaunchVehicleRig;

#[derive(Component)]
pub struct CrossSectionRig;

#[derive(Component)]
pub struct InteriorDome;

/// Loading lifecycle of a mounted asset. `Failed` is terminal until the
/// scene is remounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Loading,
    Ready,
    Failed,
}

pub enum ModelHandle {
    Gltf(Handle<Gltf>),
    Panorama(Handle<Image>),
}

/// The asset a scene subtree is waiting on
#[derive(Component)]
pub struct MountedModel {
    pub slot: ModelSlot,
    pub handle: ModelHandle,
    pub status: ModelStatus,
}

const LVM3_MODEL_SCALE: f32 = 0.8;
const LVM3_BOB_FREQUENCY: f32 = 0.2;
const LVM3_BOB_AMPLITUDE: f32 = 0.1;
const LVM3_BASE_HEIGHT: f32 = -2.0;
const LVM3_YAW_RATE: f32 = 0.1;

const CROSS_SECTION_BOB_FREQUENCY: f32 = 0.3;
const CROSS_SECTION_BOB_AMPLITUDE: f32 = 0.05;
const CROSS_SECTION_SWAY_FREQUENCY: f32 = 0.2;
const CROSS_SECTION_SWAY_AMPLITUDE: f32 = 0.05;

/// Radius of the sphere the interior panorama is projected onto
const INTERIOR_DOME_RADIUS: f32 = 30.0;

pub struct ModelsPlugin;

impl Plugin for ModelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync_scene_subtrees,
                watch_model_loads,
                animate_orbital_module,
                animate_launch_vehicle,
                animate_cross_section,
            ),
        );
    }
}

/// Mount the subtree the active view wants, unmounting any other.
///
/// Remounting also resets the asset lifecycle, so a failed model gets a
/// fresh load attempt the next time its scene comes up.
fn sync_scene_subtrees(
    mut commands: Commands,
    state: Res<ViewState>,
    asset_server: Res<AssetServer>,
    mut orbit: ResMut<ActiveOrbit>,
    subtrees: Query<(Entity, &SceneSubtree)>,
) {
    let wanted = SceneKind::for_mode(state.session.view);
    if !state.is_changed() && !subtrees.is_empty() {
        return;
    }
    if subtrees.iter().any(|(_, s)| s.kind == wanted) {
        return;
    }

    for (entity, subtree) in &subtrees {
        tracing::debug!(kind = ?subtree.kind, "unmounting scene");
        commands.entity(entity).despawn();
    }

    let slot = ModelSlot::for_scene(wanted);
    tracing::info!(?wanted, path = slot.path(), "mounting scene");
    let handle = match slot {
        ModelSlot::InteriorPanorama => ModelHandle::Panorama(asset_server.load(slot.path())),
        _ => ModelHandle::Gltf(asset_server.load(slot.path())),
    };

    let mut root = commands.spawn((
        SceneSubtree { kind: wanted },
        MountedModel {
            slot,
            handle,
            status: ModelStatus::Loading,
        },
        Transform::default(),
        Visibility::default(),
    ));
    match wanted {
        SceneKind::OrbitalModule => {
            root.insert(OrbitalModuleRig::default());
        }
        SceneKind::LaunchVehicle => {
            root.insert(LaunchVehicleRig);
        }
        SceneKind::CrossSection => {
            root.insert(CrossSectionRig);
        }
        SceneKind::Interior => {
            root.insert(InteriorDome);
        }
    }

    orbit.0 = wanted.orbit_bounds();
}

/// Asset-server state collapsed to what the mount lifecycle cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadOutcome {
    Pending,
    Loaded,
    Failed,
}

/// Next status for a loading mount, or `None` to keep waiting.
///
/// A glTF that loaded but carries no scenes is as unusable as a missing
/// file, so it fails the same way.
fn resolve_load(outcome: LoadOutcome, has_content: bool) -> Option<ModelStatus> {
    match outcome {
        LoadOutcome::Pending => None,
        LoadOutcome::Failed => Some(ModelStatus::Failed),
        LoadOutcome::Loaded if has_content => Some(ModelStatus::Ready),
        LoadOutcome::Loaded => Some(ModelStatus::Failed),
    }
}

/// Resolve pending loads: attach the scene content on success, or the red
/// diagnostic placeholder on failure.
fn watch_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltf_assets: Res<Assets<Gltf>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut mounts: Query<(Entity, &SceneSubtree, &mut MountedModel)>,
) {
    for (entity, subtree, mut mount) in &mut mounts {
        if mount.status != ModelStatus::Loading {
            continue;
        }
        let load_state = match &mount.handle {
            ModelHandle::Gltf(handle) => asset_server.get_load_state(handle.id()),
            ModelHandle::Panorama(handle) => asset_server.get_load_state(handle.id()),
        };
        let outcome = match load_state {
            Some(LoadState::Loaded) => LoadOutcome::Loaded,
            Some(LoadState::Failed(err)) => {
                tracing::error!(path = mount.slot.path(), error = %err, "failed to load model");
                LoadOutcome::Failed
            }
            _ => LoadOutcome::Pending,
        };

        // The renderable content behind a loaded handle: the glTF's default
        // (else first) scene, or the panorama image itself
        let scene_handle = match (&mount.handle, outcome) {
            (ModelHandle::Gltf(handle), LoadOutcome::Loaded) => {
                let Some(gltf) = gltf_assets.get(handle) else {
                    continue;
                };
                gltf.default_scene
                    .clone()
                    .or_else(|| gltf.scenes.first().cloned())
            }
            _ => None,
        };
        let has_content =
            matches!(&mount.handle, ModelHandle::Panorama(_)) || scene_handle.is_some();

        let Some(status) = resolve_load(outcome, has_content) else {
            continue;
        };
        match status {
            ModelStatus::Ready => match &mount.handle {
                ModelHandle::Gltf(_) => {
                    if let Some(scene) = scene_handle {
                        tracing::info!(path = mount.slot.path(), "model loaded");
                        let content = commands
                            .spawn((SceneRoot(scene), Transform::default()))
                            .id();
                        commands.entity(entity).add_child(content);
                        attach_annotations(&mut commands, entity, subtree.kind);
                    }
                }
                ModelHandle::Panorama(handle) => {
                    tracing::info!(path = mount.slot.path(), "panorama loaded");
                    let dome = commands
                        .spawn((
                            Mesh3d(
                                meshes.add(Sphere::new(INTERIOR_DOME_RADIUS).mesh().uv(64, 32)),
                            ),
                            // Viewed from inside, so only the far faces render
                            MeshMaterial3d(materials.add(StandardMaterial {
                                base_color_texture: Some(handle.clone()),
                                unlit: true,
                                cull_mode: Some(
                                    bevy::render::render_resource::Face::Front,
                                ),
                                ..default()
                            })),
                            Transform::default(),
                        ))
                        .id();
                    commands.entity(entity).add_child(dome);
                }
            },
            ModelStatus::Failed => {
                if outcome == LoadOutcome::Loaded {
                    tracing::error!(path = mount.slot.path(), "glTF has no scenes");
                }
                attach_fallback(&mut commands, entity, mount.slot, &mut meshes, &mut materials);
            }
            // resolve_load never yields Loading
            ModelStatus::Loading => {}
        }
        mount.status = status;
    }
}

/// Spawn the fixed label anchors for a scene as children of its rig, so
/// they follow the idle animation.
fn attach_annotations(commands: &mut Commands, root: Entity, kind: SceneKind) {
    for annotation in annotations::for_scene(kind) {
        let anchor = commands
            .spawn((
                AnnotationAnchor {
                    annotation: *annotation,
                },
                Transform::from_translation(annotation.anchor),
                Visibility::default(),
            ))
            .id();
        commands.entity(root).add_child(anchor);
    }
}

/// Red wireframe stand-in for a model that failed to load, sized roughly
/// like the asset it replaces
fn attach_fallback(
    commands: &mut Commands,
    root: Entity,
    slot: ModelSlot,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.2, 0.2),
        unlit: true,
        ..default()
    });
    let half = fallback_half_extents(slot);
    for (offset, size) in edge_cuboids(half) {
        let edge = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(offset),
            ))
            .id();
        commands.entity(root).add_child(edge);
    }
    commands.entity(root).insert(FallbackDiagnostic { slot });
}

fn fallback_half_extents(slot: ModelSlot) -> Vec3 {
    match slot {
        ModelSlot::OrbitalModule => Vec3::new(1.2, 1.8, 1.2),
        ModelSlot::Lvm3Rocket => Vec3::new(1.0, 4.0, 1.0),
        ModelSlot::CrossSection => Vec3::new(1.5, 1.5, 1.5),
        ModelSlot::InteriorPanorama => Vec3::new(2.0, 2.0, 2.0),
    }
}

/// The 12 edges of an axis-aligned box as thin cuboids
fn edge_cuboids(half: Vec3) -> [(Vec3, Vec3); 12] {
    let t = 0.03;
    let x = Vec3::new(half.x * 2.0, t, t);
    let y = Vec3::new(t, half.y * 2.0, t);
    let z = Vec3::new(t, t, half.z * 2.0);
    [
        // Bottom face
        (Vec3::new(0.0, -half.y, -half.z), x),
        (Vec3::new(0.0, -half.y, half.z), x),
        (Vec3::new(-half.x, -half.y, 0.0), z),
        (Vec3::new(half.x, -half.y, 0.0), z),
        // Top face
        (Vec3::new(0.0, half.y, -half.z), x),
        (Vec3::new(0.0, half.y, half.z), x),
        (Vec3::new(-half.x, half.y, 0.0), z),
        (Vec3::new(half.x, half.y, 0.0), z),
        // Vertical edges
        (Vec3::new(-half.x, 0.0, -half.z), y),
        (Vec3::new(half.x, 0.0, -half.z), y),
        (Vec3::new(-half.x, 0.0, half.z), y),
        (Vec3::new(half.x, 0.0, half.z), y),
    ]
}

/// Per-frame transition step for the orbital module
fn animate_orbital_module(
    time: Res<Time>,
    state: Res<ViewState>,
    settings: Res<KioskSettings>,
    mut rigs: Query<(&mut Transform, &mut OrbitalModuleRig)>,
) {
    let interactive = is_interactive(&state, &settings);
    let elapsed = time.elapsed_secs();
    for (mut transform, mut rig) in &mut rigs {
        let target = TransitionTarget::for_mode(state.session.view, interactive, elapsed);
        rig.transition.step(target, time.delta_secs(), interactive);
        transform.translation = rig.transition.translation;
        transform.scale = Vec3::splat(rig.transition.scale);
        transform.rotation = Quat::from_rotation_y(rig.transition.yaw);
    }
}

fn animate_launch_vehicle(
    time: Res<Time>,
    mut rigs: Query<&mut Transform, With<LaunchVehicleRig>>,
) {
    let t = time.elapsed_secs();
    for mut transform in &mut rigs {
        let bob = (t * LVM3_BOB_FREQUENCY).sin() * LVM3_BOB_AMPLITUDE;
        transform.translation = Vec3::new(0.0, LVM3_BASE_HEIGHT + bob, 0.0);
        transform.rotation = Quat::from_rotation_y(t * LVM3_YAW_RATE);
        transform.scale = Vec3::splat(LVM3_MODEL_SCALE);
    }
}

fn animate_cross_section(
    time: Res<Time>,
    mut rigs: Query<&mut Transform, With<CrossSectionRig>>,
) {
    let t = time.elapsed_secs();
    for mut transform in &mut rigs {
        let bob = (t * CROSS_SECTION_BOB_FREQUENCY).sin() * CROSS_SECTION_BOB_AMPLITUDE;
        let sway = (t * CROSS_SECTION_SWAY_FREQUENCY).sin() * CROSS_SECTION_SWAY_AMPLITUDE;
        transform.translation = Vec3::new(0.0, bob, 0.0);
        transform.rotation = Quat::from_rotation_z(sway);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_has_twelve_edges_at_the_extents() {
        let half = Vec3::new(1.0, 2.0, 3.0);
        let edges = edge_cuboids(half);
        assert_eq!(edges.len(), 12);
        for (offset, _) in edges {
            // Every edge midpoint lies on the box surface
            assert!(
                offset.x.abs() == half.x
                    || offset.y.abs() == half.y
                    || offset.z.abs() == half.z
            );
        }
    }

    #[test]
    fn test_load_failure_flips_status_to_failed() {
        assert_eq!(
            resolve_load(LoadOutcome::Failed, false),
            Some(ModelStatus::Failed)
        );
        // Content found earlier does not rescue a failed load
        assert_eq!(
            resolve_load(LoadOutcome::Failed, true),
            Some(ModelStatus::Failed)
        );
    }

    #[test]
    fn test_gltf_without_scenes_fails() {
        assert_eq!(
            resolve_load(LoadOutcome::Loaded, false),
            Some(ModelStatus::Failed)
        );
    }

    #[test]
    fn test_loaded_content_becomes_ready() {
        assert_eq!(
            resolve_load(LoadOutcome::Loaded, true),
            Some(ModelStatus::Ready)
        );
    }

    #[test]
    fn test_pending_load_keeps_waiting() {
        assert_eq!(resolve_load(LoadOutcome::Pending, false), None);
        assert_eq!(resolve_load(LoadOutcome::Pending, true), None);
    }

    #[test]
    fn test_fallback_sizes_cover_every_slot() {
        for slot in [
            ModelSlot::OrbitalModule,
            ModelSlot::Lvm3Rocket,
            ModelSlot::CrossSection,
            ModelSlot::InteriorPanorama,
        ] {
            let half = fallback_half_extents(slot);
            assert!(half.min_element() > 0.0);
        }
    }
}

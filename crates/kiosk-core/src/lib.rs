//! Kiosk Core - Session state, transitions and content for the Gaganyaan kiosk
//!
//! This crate provides the engine-free logic of the exploration kiosk:
//! - Session state machine (start screen vs exploration, active view mode)
//! - View-transition interpolation for the orbital module
//! - Scene-mounting rules and per-scene orbit-control bounds
//! - Static annotation tables and overlay copy
//! - Asset catalog and display configuration

pub mod annotations;
pub mod assets;
pub mod config;
pub mod copy;
pub mod scene;
pub mod session;
pub mod transition;

pub use annotations::{Annotation, LabelGroup, LabelSide};
pub use assets::ModelSlot;
pub use config::{ConfigError, KioskConfig, Language};
pub use scene::{OrbitBounds, SceneKind};
pub use session::{AppScreen, Session, ViewMode};
pub use transition::{TransitionTarget, ViewTransition};

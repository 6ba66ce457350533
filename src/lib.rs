//! camrig turns a handful of shot parameters into fully specified camera motion, lighting and
//! render settings for a 3-D host.
//!
//! Two kinds of shot are supported:
//!
//! - **Image roll**: a still image stands upright at the origin and the camera scrolls from its
//!   top edge to its bottom edge with an eased move.
//! - **Turntable**: an imported model is normalized to the origin and either the camera orbits it
//!   or the model spins in front of a fixed camera.
//!
//! # Pipeline overview
//!
//! 1. **Fit**: `SubjectProbe -> SubjectExtent` (normalize size and centre)
//! 2. **Plan**: `SubjectExtent -> CameraPlan` (keyframes or a subject yaw schedule)
//! 3. **Focus**: attach depth-of-field data to every camera keyframe
//! 4. **Light** and **Render**: pick a lighting rig and build the render profile
//!
//! [`compose`] runs all of it and returns a [`ShotManifest`]; a host adapter walks the manifest
//! through [`SceneVisitor`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure planning**: every stage is a deterministic function of its inputs with no global
//!   state; only the JSON helpers touch IO.
//! - **All-or-nothing**: each stage returns a complete value or a typed [`CamrigError`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod camera;
mod compose;
mod config;
mod foundation;
mod lighting;
mod render;
mod subject;

pub use animation::ease::Ease;
pub use animation::keyframes::{Keyframe, Keyframes, Lerp};
pub use camera::dof::{DEFAULT_F_STOP, DofSettings, FocusMode, resolve, resolve_motion};
pub use camera::path::{
    CameraKeyframe, CameraPath, CameraPose, Interpolation, ShotMotion, SpinKey, SubjectSpin,
};
pub use camera::planner::{
    CameraPlan, Framing, MotionMode, PlanParams, PlanWarning, TurntableRotation, plan,
};
pub use compose::manifest::{ShotManifest, compose};
pub use compose::visitor::{SceneVisitor, SummaryVisitor};
pub use config::shot::ShotConfig;
pub use foundation::core::{DVec3, Fps, FrameIndex, Resolution, Size};
pub use foundation::error::{CamrigError, CamrigResult};
pub use foundation::math::EXTENT_EPSILON;
pub use lighting::rig::{
    LightDescriptor, LightKind, LightingRig, LightingStyle, PlacedLight, select,
};
pub use render::profile::{
    RenderEngine, RenderProfile, RenderSettings, ResolutionPreset, build as build_render_profile,
};
pub use subject::fit::{Placement, SubjectExtent, fit};
pub use subject::probe::{BoundingBox, SubjectKind, SubjectProbe};

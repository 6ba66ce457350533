//! End-to-end shot composition.
//!
//! `probe + config -> fit -> plan -> depth of field`, with the lighting rig and render
//! profile built alongside. The result is plain data for a host adapter to realize.

use std::io::Write;

use crate::{
    camera::dof::resolve_motion,
    camera::path::ShotMotion,
    camera::planner::{Framing, PlanWarning, plan},
    compose::visitor::SceneVisitor,
    config::shot::ShotConfig,
    foundation::error::{CamrigError, CamrigResult},
    lighting::rig::{LightingStyle, PlacedLight, select},
    render::profile::{RenderProfile, RenderSettings, build},
    subject::fit::{SubjectExtent, fit},
    subject::probe::SubjectProbe,
};

/// Everything a host needs to set up and animate one shot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShotManifest {
    /// Fitted subject and the transform that places it.
    pub subject: SubjectExtent,
    /// Camera path or subject spin, with focus data resolved.
    pub motion: ShotMotion,
    /// Framing report at frame 1.
    pub framing: Framing,
    /// Lighting style.
    pub lighting: LightingStyle,
    /// Lights in world space.
    pub lights: Vec<PlacedLight>,
    /// Output resolution, timing and engine settings.
    pub render: RenderProfile,
    /// Non-fatal planning issues.
    pub warnings: Vec<PlanWarning>,
}

impl ShotManifest {
    /// Walk the manifest in host setup order.
    pub fn accept<V: SceneVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_subject(&self.subject);
        match &self.motion {
            ShotMotion::CameraPath(path) => visitor.visit_camera_path(path),
            ShotMotion::SubjectSpin(spin) => visitor.visit_subject_spin(spin),
        }
        visitor.visit_lighting(self.lighting, &self.lights);
        visitor.visit_render_profile(&self.render);
        for w in &self.warnings {
            visitor.visit_warning(w);
        }
    }

    /// Write the manifest as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, w: W) -> CamrigResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| CamrigError::serde(format!("write shot manifest JSON: {e}")))
    }

    /// Parse a manifest previously written with [`ShotManifest::write_json`].
    pub fn from_reader<R: std::io::Read>(r: R) -> CamrigResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CamrigError::serde(format!("parse shot manifest JSON: {e}")))
    }
}

/// Compose a complete shot for `probe` under `config`.
///
/// Fails without producing anything if any stage fails.
#[tracing::instrument(skip(probe, config), fields(kind = ?probe.kind()))]
pub fn compose(probe: &SubjectProbe, config: &ShotConfig) -> CamrigResult<ShotManifest> {
    config.validate()?;

    let subject = fit(probe, config.reference_size)?;
    let kind = subject.kind();

    let render = build(config.frame_count, config.fps, config.resolution)?.with_settings(
        RenderSettings {
            resolution_percentage: config.resolution_percentage,
            ..RenderSettings::for_subject(kind)
        },
    )?;

    let planned = plan(
        &subject,
        config.motion_mode(kind),
        &config.plan_params(render.resolution.aspect()),
    )?;
    let motion = resolve_motion(planned.motion, &config.dof())?;

    let rig = select(&config.lighting_style)?;
    let lights = rig.place(&subject);

    tracing::debug!(
        frames = motion.frame_count(),
        keyframes = motion.camera_keyframes().len(),
        lights = lights.len(),
        "composed shot"
    );

    Ok(ShotManifest {
        subject,
        motion,
        framing: planned.framing,
        lighting: rig.style(),
        lights,
        render,
        warnings: planned.warnings,
    })
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    camera::dof::{DEFAULT_F_STOP, DofSettings, FocusMode},
    camera::planner::{MotionMode, PlanParams, TurntableRotation},
    foundation::error::{CamrigError, CamrigResult},
    render::profile::ResolutionPreset,
    subject::probe::SubjectKind,
};

/// User-tunable options for one shot.
///
/// Every field has a default, so `{}` is a valid JSON configuration. Defaults are applied
/// here at the boundary; the planning functions receive explicit values only.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShotConfig {
    /// Size the subject's governing axis is scaled to.
    pub reference_size: f64,
    /// Camera distance from the subject.
    pub distance: f64,
    /// Field of view in degrees.
    pub fov_degrees: f64,
    /// Animation length in frames.
    pub frame_count: u64,
    /// Frames per second.
    pub fps: u32,
    /// Render with depth of field.
    pub enable_dof: bool,
    /// Aperture f-number.
    pub f_stop: f64,
    /// How focus distance is measured.
    pub focus_mode: FocusMode,
    /// Lighting style name (`studio`, `outdoor`, `dramatic`).
    pub lighting_style: String,
    /// Spin the subject instead of orbiting the camera (turntables only).
    pub rotate_model: bool,
    /// Turntable camera height above the subject centre.
    pub camera_height: f64,
    /// Keep turntable cameras at least `largest_extent * frame_margin` away.
    pub frame_margin: Option<f64>,
    /// Output resolution.
    pub resolution: ResolutionPreset,
    /// Host resolution percentage.
    pub resolution_percentage: u8,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            reference_size: 10.0,
            distance: 10.0,
            fov_degrees: 50.0,
            frame_count: 250,
            fps: 30,
            enable_dof: true,
            f_stop: DEFAULT_F_STOP,
            focus_mode: FocusMode::default(),
            lighting_style: "studio".to_string(),
            rotate_model: false,
            camera_height: 5.0,
            frame_margin: None,
            resolution: ResolutionPreset::default(),
            resolution_percentage: 100,
        }
    }
}

impl ShotConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CamrigResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CamrigError::serde(format!("parse shot config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CamrigResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CamrigError::invalid_configuration(format!(
                "open shot config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every numeric range up front.
    ///
    /// The components re-check what they consume; this gives one early, complete answer for
    /// a config file.
    pub fn validate(&self) -> CamrigResult<()> {
        if !self.reference_size.is_finite() || self.reference_size <= 0.0 {
            return Err(CamrigError::invalid_configuration(
                "reference_size must be > 0",
            ));
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(CamrigError::invalid_configuration("distance must be > 0"));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(CamrigError::invalid_configuration(
                "fov_degrees must be within (0, 180)",
            ));
        }
        if self.frame_count < 2 {
            return Err(CamrigError::invalid_configuration(
                "frame_count must be >= 2",
            ));
        }
        if self.fps == 0 {
            return Err(CamrigError::invalid_configuration("fps must be > 0"));
        }
        if self.enable_dof && (!self.f_stop.is_finite() || self.f_stop <= 0.0) {
            return Err(CamrigError::invalid_configuration("f_stop must be > 0"));
        }
        if !self.camera_height.is_finite() {
            return Err(CamrigError::invalid_configuration(
                "camera_height must be finite",
            ));
        }
        if let Some(m) = self.frame_margin
            && (!m.is_finite() || m <= 0.0)
        {
            return Err(CamrigError::invalid_configuration(
                "frame_margin must be > 0",
            ));
        }
        if !(1..=100).contains(&self.resolution_percentage) {
            return Err(CamrigError::invalid_configuration(
                "resolution_percentage must be within 1..=100",
            ));
        }
        self.resolution.resolution()?;
        Ok(())
    }

    /// Motion for a subject kind: images scroll, meshes get a turntable.
    pub fn motion_mode(&self, kind: SubjectKind) -> MotionMode {
        match kind {
            SubjectKind::Image => MotionMode::Scroll,
            SubjectKind::Mesh if self.rotate_model => {
                MotionMode::Turntable(TurntableRotation::SubjectSpin)
            }
            SubjectKind::Mesh => MotionMode::Turntable(TurntableRotation::CameraOrbit),
        }
    }

    /// Planner inputs; `render_aspect` comes from the chosen resolution.
    pub fn plan_params(&self, render_aspect: f64) -> PlanParams {
        PlanParams {
            distance: self.distance,
            fov_degrees: self.fov_degrees,
            frame_count: self.frame_count,
            camera_height: self.camera_height,
            frame_margin: self.frame_margin,
            render_aspect,
        }
    }

    /// Depth-of-field inputs.
    pub fn dof(&self) -> DofSettings {
        DofSettings {
            enabled: self.enable_dof,
            f_stop: self.f_stop,
            focus_mode: self.focus_mode,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/shot.rs"]
mod tests;

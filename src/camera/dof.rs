use crate::{
    camera::path::{CameraKeyframe, CameraPath, ShotMotion},
    foundation::error::{CamrigError, CamrigResult},
};

/// Default aperture f-number.
pub const DEFAULT_F_STOP: f64 = 2.8;

/// How the focus distance is measured from each keyframe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    /// True Euclidean distance from the camera to the subject centre.
    #[default]
    SubjectCenter,
    /// Distance in the horizontal (XY) plane only, ignoring the camera's vertical offset.
    ///
    /// Keeps focus fixed at the nominal camera distance for scrolls and orbits.
    Horizontal,
}

/// Depth-of-field inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DofSettings {
    /// Whether the host should render with depth of field.
    pub enabled: bool,
    /// Aperture f-number, must be > 0 when enabled.
    pub f_stop: f64,
    /// Focus distance measurement.
    pub focus_mode: FocusMode,
}

impl Default for DofSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            f_stop: DEFAULT_F_STOP,
            focus_mode: FocusMode::SubjectCenter,
        }
    }
}

impl DofSettings {
    fn validate(&self) -> CamrigResult<()> {
        if self.enabled && (!self.f_stop.is_finite() || self.f_stop <= 0.0) {
            return Err(CamrigError::invalid_configuration(format!(
                "aperture f-stop must be > 0, got {}",
                self.f_stop
            )));
        }
        Ok(())
    }

    fn apply(&self, mut k: CameraKeyframe) -> CameraKeyframe {
        if !self.enabled {
            k.focus_distance = None;
            k.aperture = None;
            return k;
        }
        let offset = k.look_at - k.position;
        let distance = match self.focus_mode {
            FocusMode::SubjectCenter => offset.length(),
            FocusMode::Horizontal => offset.truncate().length(),
        };
        k.focus_distance = Some(distance);
        k.aperture = Some(self.f_stop);
        k
    }
}

/// Attach focus distance and aperture to every keyframe of `path`.
///
/// Disabled settings clear both fields so the host renders everything in focus.
pub fn resolve(path: CameraPath, settings: &DofSettings) -> CamrigResult<CameraPath> {
    settings.validate()?;
    Ok(path.map_keyframes(|k| settings.apply(k)))
}

/// [`resolve`] for either kind of motion; a subject spin has its single camera key resolved.
pub fn resolve_motion(motion: ShotMotion, settings: &DofSettings) -> CamrigResult<ShotMotion> {
    settings.validate()?;
    Ok(match motion {
        ShotMotion::CameraPath(path) => {
            ShotMotion::CameraPath(path.map_keyframes(|k| settings.apply(k)))
        }
        ShotMotion::SubjectSpin(spin) => {
            ShotMotion::SubjectSpin(spin.map_camera(|k| settings.apply(k)))
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/camera/dof.rs"]
mod tests;

use serde::Deserialize;

use crate::{
    animation::ease::Ease,
    animation::keyframes::{Keyframe, Keyframes},
    foundation::core::{DVec3, FrameIndex},
    foundation::error::{CamrigError, CamrigResult},
    foundation::math::track_to_euler,
};

/// How the host interpolates between consecutive camera keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Ease-in, near-linear middle, ease-out.
    Eased,
    /// Constant velocity.
    Linear,
}

impl Interpolation {
    /// Easing curve used when sampling between two keys.
    pub fn ease(self) -> Ease {
        match self {
            Self::Eased => Ease::SmoothStep,
            Self::Linear => Ease::Linear,
        }
    }
}

/// A camera pose bound to a frame, with optional lens focus data.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraKeyframe {
    /// Frame index (1-based).
    pub frame: FrameIndex,
    /// Camera position in world space.
    pub position: DVec3,
    /// Point the camera looks at (the subject centre).
    pub look_at: DVec3,
    /// Focus distance in world units; `None` renders everything in focus.
    pub focus_distance: Option<f64>,
    /// Aperture f-number; `None` when depth of field is off.
    pub aperture: Option<f64>,
}

impl CameraKeyframe {
    /// Keyframe without focus data.
    pub fn new(frame: FrameIndex, position: DVec3, look_at: DVec3) -> Self {
        Self {
            frame,
            position,
            look_at,
            focus_distance: None,
            aperture: None,
        }
    }

    /// Straight-line distance from the camera to its look-at target.
    pub fn distance_to_target(&self) -> f64 {
        self.position.distance(self.look_at)
    }

    /// Euler XYZ rotation (radians) aiming the camera's -Z axis at `look_at`, world +Z up.
    pub fn rotation_euler(&self) -> DVec3 {
        track_to_euler(self.look_at - self.position)
    }
}

/// Camera position and target evaluated at an arbitrary frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CameraPose {
    /// Evaluated camera position.
    pub position: DVec3,
    /// Evaluated look-at target.
    pub look_at: DVec3,
}

/// Ordered camera keyframes plus the interpolation policy between them.
///
/// Deserializing re-runs the checks of [`CameraPath::new`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CameraPath {
    keyframes: Vec<CameraKeyframe>,
    interpolation: Interpolation,
    frame_count: u64,
    fov_degrees: f64,
}

impl CameraPath {
    /// Build a path, checking that it starts at frame 1, has at least two keys and that frames
    /// strictly increase. The total frame count is the last key's frame.
    pub fn new(
        keyframes: Vec<CameraKeyframe>,
        interpolation: Interpolation,
        fov_degrees: f64,
    ) -> CamrigResult<Self> {
        if keyframes.len() < 2 {
            return Err(CamrigError::invalid_configuration(
                "camera path needs at least two keyframes",
            ));
        }
        if keyframes[0].frame != FrameIndex::FIRST {
            return Err(CamrigError::invalid_configuration(
                "camera path must start at frame 1",
            ));
        }
        if !keyframes.windows(2).all(|w| w[0].frame < w[1].frame) {
            return Err(CamrigError::invalid_configuration(
                "camera keyframe frames must be strictly increasing",
            ));
        }
        check_fov(fov_degrees)?;
        let frame_count = keyframes[keyframes.len() - 1].frame.0;
        Ok(Self {
            keyframes,
            interpolation,
            frame_count,
            fov_degrees,
        })
    }

    /// Keyframes in frame order.
    pub fn keyframes(&self) -> &[CameraKeyframe] {
        &self.keyframes
    }

    /// Interpolation policy between keys.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Total frame count (equals the last keyframe's frame).
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Constant field of view in degrees.
    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    /// Return the path with each keyframe replaced by `f(keyframe)`.
    ///
    /// Frames are not allowed to change.
    pub(crate) fn map_keyframes(mut self, f: impl Fn(CameraKeyframe) -> CameraKeyframe) -> Self {
        for k in &mut self.keyframes {
            let frame = k.frame;
            *k = f(*k);
            k.frame = frame;
        }
        self
    }

    /// Evaluate the camera pose at `frame` the way the host would interpolate it.
    pub fn sample(&self, frame: FrameIndex) -> CamrigResult<CameraPose> {
        let ease = self.interpolation.ease();
        let channel = |pick: fn(&CameraKeyframe) -> DVec3| Keyframes {
            keys: self
                .keyframes
                .iter()
                .map(|k| Keyframe {
                    frame: k.frame,
                    value: pick(k),
                    ease,
                })
                .collect(),
        };
        Ok(CameraPose {
            position: channel(|k| k.position).sample(frame)?,
            look_at: channel(|k| k.look_at).sample(frame)?,
        })
    }
}

impl<'de> Deserialize<'de> for CameraPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            keyframes: Vec<CameraKeyframe>,
            interpolation: Interpolation,
            frame_count: u64,
            fov_degrees: f64,
        }

        let r = Repr::deserialize(deserializer)?;
        let path = Self::new(r.keyframes, r.interpolation, r.fov_degrees)
            .map_err(serde::de::Error::custom)?;
        if path.frame_count != r.frame_count {
            return Err(serde::de::Error::custom(format!(
                "camera path frame_count {} does not match its last keyframe {}",
                r.frame_count, path.frame_count
            )));
        }
        Ok(path)
    }
}

fn check_fov(fov_degrees: f64) -> CamrigResult<()> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(CamrigError::invalid_configuration(format!(
            "field of view must be within (0, 180) degrees, got {fov_degrees}"
        )));
    }
    Ok(())
}

/// Subject yaw at one frame of a subject-spin turntable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpinKey {
    /// Frame index (1-based).
    pub frame: FrameIndex,
    /// Accumulated yaw around world Z in degrees (reaches 360 on the last frame).
    pub yaw_degrees: f64,
}

impl SpinKey {
    /// Yaw wrapped into `[0, 360)`.
    pub fn orientation_degrees(&self) -> f64 {
        wrap_degrees(self.yaw_degrees)
    }
}

pub(crate) fn wrap_degrees(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

/// Turntable where the camera stays put and the subject rotates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SubjectSpin {
    camera: CameraKeyframe,
    fov_degrees: f64,
    schedule: Vec<SpinKey>,
    frame_count: u64,
}

impl SubjectSpin {
    pub(crate) fn new(camera: CameraKeyframe, fov_degrees: f64, frame_count: u64) -> Self {
        let schedule = (1..=frame_count)
            .map(|f| SpinKey {
                frame: FrameIndex(f),
                yaw_degrees: spin_yaw(f, frame_count),
            })
            .collect();
        Self {
            camera,
            fov_degrees,
            schedule,
            frame_count,
        }
    }

    /// The single fixed camera keyframe (frame 1).
    pub fn camera(&self) -> &CameraKeyframe {
        &self.camera
    }

    /// Constant field of view in degrees.
    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    /// Per-frame subject yaw, frames `1..=frame_count`.
    pub fn schedule(&self) -> &[SpinKey] {
        &self.schedule
    }

    /// Total frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Accumulated yaw at any frame: `360 * frame / frame_count`.
    pub fn yaw_at(&self, frame: FrameIndex) -> f64 {
        spin_yaw(frame.0, self.frame_count)
    }

    pub(crate) fn map_camera(mut self, f: impl Fn(CameraKeyframe) -> CameraKeyframe) -> Self {
        let frame = self.camera.frame;
        self.camera = f(self.camera);
        self.camera.frame = frame;
        self
    }
}

impl<'de> Deserialize<'de> for SubjectSpin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            camera: CameraKeyframe,
            fov_degrees: f64,
            schedule: Vec<SpinKey>,
            frame_count: u64,
        }

        let r = Repr::deserialize(deserializer)?;
        if r.frame_count < 2 {
            return Err(serde::de::Error::custom(format!(
                "subject spin needs at least two frames, got {}",
                r.frame_count
            )));
        }
        if r.camera.frame != FrameIndex::FIRST {
            return Err(serde::de::Error::custom(
                "subject spin camera must sit at frame 1",
            ));
        }
        check_fov(r.fov_degrees).map_err(serde::de::Error::custom)?;
        let frames_match = r.schedule.len() as u64 == r.frame_count
            && r
                .schedule
                .iter()
                .zip(1..)
                .all(|(k, f)| k.frame == FrameIndex(f) && k.yaw_degrees.is_finite());
        if !frames_match {
            return Err(serde::de::Error::custom(
                "subject spin schedule must cover frames 1..=frame_count with finite yaw",
            ));
        }
        Ok(Self {
            camera: r.camera,
            fov_degrees: r.fov_degrees,
            schedule: r.schedule,
            frame_count: r.frame_count,
        })
    }
}

pub(crate) fn spin_yaw(frame: u64, frame_count: u64) -> f64 {
    360.0 * (frame as f64) / (frame_count.max(1) as f64)
}

/// What moves during the shot.
///
/// Exactly one of {camera path, subject-rotation schedule} is ever populated.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShotMotion {
    /// The camera moves along a keyframed path (image scroll or camera orbit).
    CameraPath(CameraPath),
    /// The camera is fixed and the subject spins.
    SubjectSpin(SubjectSpin),
}

impl ShotMotion {
    /// Total animation length in frames.
    pub fn frame_count(&self) -> u64 {
        match self {
            Self::CameraPath(p) => p.frame_count(),
            Self::SubjectSpin(s) => s.frame_count(),
        }
    }

    /// Constant field of view in degrees.
    pub fn fov_degrees(&self) -> f64 {
        match self {
            Self::CameraPath(p) => p.fov_degrees(),
            Self::SubjectSpin(s) => s.fov_degrees(),
        }
    }

    /// All camera keyframes (one for a subject spin).
    pub fn camera_keyframes(&self) -> &[CameraKeyframe] {
        match self {
            Self::CameraPath(p) => p.keyframes(),
            Self::SubjectSpin(s) => std::slice::from_ref(&s.camera),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/path.rs"]
mod tests;

//! Camera path planning for image scrolls and turntables.

use crate::{
    camera::path::{CameraKeyframe, CameraPath, Interpolation, ShotMotion, SubjectSpin, spin_yaw},
    foundation::core::{DVec3, FrameIndex},
    foundation::error::{CamrigError, CamrigResult},
    foundation::math::{TOLERANCE, approx_eq, clamp_extent},
    subject::fit::SubjectExtent,
};

/// Which side of a turntable rotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurntableRotation {
    /// The camera circles a static subject.
    CameraOrbit,
    /// The camera is fixed and the subject spins in place.
    SubjectSpin,
}

/// Camera motion to plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Top-to-bottom pan across a flat subject.
    Scroll,
    /// Full 360 degree turn around a 3-D subject.
    Turntable(TurntableRotation),
}

/// Inputs to [`plan`] besides the subject.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanParams {
    /// Camera distance from the subject (along -Y for scrolls, orbit radius for turntables).
    pub distance: f64,
    /// Field of view in degrees across the larger render dimension.
    pub fov_degrees: f64,
    /// Animation length in frames.
    pub frame_count: u64,
    /// Turntable camera height above the subject centre.
    pub camera_height: f64,
    /// When set, turntables keep at least `largest_extent * margin` distance.
    pub frame_margin: Option<f64>,
    /// Render width / height, used for the framing report.
    pub render_aspect: f64,
}

impl Default for PlanParams {
    fn default() -> Self {
        Self {
            distance: 10.0,
            fov_degrees: 50.0,
            frame_count: 250,
            camera_height: 5.0,
            frame_margin: None,
            render_aspect: 16.0 / 9.0,
        }
    }
}

impl PlanParams {
    fn validate(&self) -> CamrigResult<()> {
        if self.frame_count < 2 {
            return Err(CamrigError::invalid_configuration(format!(
                "frame count must be >= 2, got {}",
                self.frame_count
            )));
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(CamrigError::invalid_configuration(format!(
                "camera distance must be > 0, got {}",
                self.distance
            )));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(CamrigError::invalid_configuration(format!(
                "field of view must be within (0, 180) degrees, got {}",
                self.fov_degrees
            )));
        }
        if !self.camera_height.is_finite() {
            return Err(CamrigError::invalid_configuration(
                "camera height must be finite",
            ));
        }
        if let Some(m) = self.frame_margin
            && (!m.is_finite() || m <= 0.0)
        {
            return Err(CamrigError::invalid_configuration(format!(
                "frame margin must be > 0, got {m}"
            )));
        }
        if !self.render_aspect.is_finite() || self.render_aspect <= 0.0 {
            return Err(CamrigError::invalid_configuration(
                "render aspect must be > 0",
            ));
        }
        Ok(())
    }
}

/// Non-fatal condition found while planning.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// The governing subject extent was near zero and got clamped.
    DegenerateSubject {
        /// Extent before clamping.
        extent: f64,
    },
    /// The frame margin pushed the camera further out than requested.
    DistanceWidened {
        /// Requested distance.
        requested: f64,
        /// Distance actually used.
        effective: f64,
    },
}

impl std::fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateSubject { extent } => {
                write!(f, "subject extent {extent} is near zero; clamped for planning")
            }
            Self::DistanceWidened {
                requested,
                effective,
            } => write!(
                f,
                "camera distance widened from {requested} to {effective} to fit the subject"
            ),
        }
    }
}

/// How much of the scene the camera sees at its planned distance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Framing {
    /// Camera-to-subject-centre distance at frame 1.
    pub distance: f64,
    /// Visible width at that distance.
    pub visible_width: f64,
    /// Visible height at that distance.
    pub visible_height: f64,
    /// `visible_height / subject height`; above 1 the whole subject height is in view.
    pub height_coverage: f64,
}

/// Planner output: the motion plus its framing and any warnings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPlan {
    /// What moves during the shot.
    pub motion: ShotMotion,
    /// Framing report at frame 1.
    pub framing: Framing,
    /// Non-fatal issues, also emitted as `tracing` warnings.
    pub warnings: Vec<PlanWarning>,
}

/// Plan the camera motion for `subject`.
///
/// - [`MotionMode::Scroll`]: two eased keyframes from `z = +height/2` (frame 1) down to
///   `z = -height/2` (last frame), at `y = -distance`, looking at the subject centre.
/// - [`MotionMode::Turntable`] with [`TurntableRotation::CameraOrbit`]: one linear keyframe
///   per frame on a circle of radius `distance` at `camera_height`, yaw `360 * f / n`.
/// - [`MotionMode::Turntable`] with [`TurntableRotation::SubjectSpin`]: one fixed camera
///   keyframe plus a per-frame subject yaw schedule.
#[tracing::instrument(skip(subject, params))]
pub fn plan(
    subject: &SubjectExtent,
    mode: MotionMode,
    params: &PlanParams,
) -> CamrigResult<CameraPlan> {
    params.validate()?;

    let mut warnings = Vec::new();
    let center = subject.center();
    let n = params.frame_count;

    let governing = match mode {
        MotionMode::Scroll => subject.height(),
        MotionMode::Turntable(_) => subject.largest(),
    };
    let (_, degenerate) = clamp_extent(governing);
    if degenerate {
        warnings.push(PlanWarning::DegenerateSubject { extent: governing });
    }

    let motion = match mode {
        MotionMode::Scroll => {
            let half = subject.height() / 2.0;
            let start = center + DVec3::new(0.0, -params.distance, half);
            let end = center + DVec3::new(0.0, -params.distance, -half);
            ShotMotion::CameraPath(CameraPath::new(
                vec![
                    CameraKeyframe::new(FrameIndex::FIRST, start, center),
                    CameraKeyframe::new(FrameIndex(n), end, center),
                ],
                Interpolation::Eased,
                params.fov_degrees,
            )?)
        }
        MotionMode::Turntable(rotation) => {
            let radius = match params.frame_margin {
                Some(margin) => {
                    let needed = subject.largest() * margin;
                    if needed > params.distance
                        && !approx_eq(needed, params.distance, TOLERANCE)
                    {
                        warnings.push(PlanWarning::DistanceWidened {
                            requested: params.distance,
                            effective: needed,
                        });
                        needed
                    } else {
                        params.distance
                    }
                }
                None => params.distance,
            };
            tracing::debug!(radius, height = params.camera_height, "turntable radius");

            let orbit = |frame: u64| {
                let theta = spin_yaw(frame, n).to_radians();
                center
                    + DVec3::new(
                        radius * theta.cos(),
                        radius * theta.sin(),
                        params.camera_height,
                    )
            };

            match rotation {
                TurntableRotation::CameraOrbit => {
                    let keys = (1..=n)
                        .map(|f| CameraKeyframe::new(FrameIndex(f), orbit(f), center))
                        .collect();
                    ShotMotion::CameraPath(CameraPath::new(
                        keys,
                        Interpolation::Linear,
                        params.fov_degrees,
                    )?)
                }
                TurntableRotation::SubjectSpin => {
                    let camera = CameraKeyframe::new(FrameIndex::FIRST, orbit(0), center);
                    ShotMotion::SubjectSpin(SubjectSpin::new(camera, params.fov_degrees, n))
                }
            }
        }
    };

    let framing = framing_for(&motion, subject, params);

    for w in &warnings {
        tracing::warn!("{w}");
    }

    Ok(CameraPlan {
        motion,
        framing,
        warnings,
    })
}

fn framing_for(motion: &ShotMotion, subject: &SubjectExtent, params: &PlanParams) -> Framing {
    let distance = motion
        .camera_keyframes()
        .first()
        .map(|k| k.distance_to_target())
        .unwrap_or(params.distance);
    let span = 2.0 * distance * (params.fov_degrees.to_radians() / 2.0).tan();
    let (visible_width, visible_height) = if params.render_aspect >= 1.0 {
        (span, span / params.render_aspect)
    } else {
        (span * params.render_aspect, span)
    };
    let (height, _) = clamp_extent(subject.height());
    Framing {
        distance,
        visible_width,
        visible_height,
        height_coverage: visible_height / height,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/planner.rs"]
mod tests;

use crate::{
    camera::path::{CameraPath, Interpolation, SubjectSpin},
    camera::planner::PlanWarning,
    lighting::rig::{LightingStyle, PlacedLight},
    render::profile::{RenderEngine, RenderProfile},
    subject::fit::SubjectExtent,
    subject::probe::SubjectKind,
};

/// Host adapter seam over a [`crate::ShotManifest`].
///
/// A per-host adapter (scene-graph calls, keyframe insertion, light creation) implements
/// the callbacks it needs; the rest default to no-ops.
pub trait SceneVisitor {
    /// The fitted subject, before any camera data.
    fn visit_subject(&mut self, _subject: &SubjectExtent) {}
    /// The camera path, when the camera moves.
    fn visit_camera_path(&mut self, _path: &CameraPath) {}
    /// The fixed camera plus subject yaw schedule, when the subject spins.
    fn visit_subject_spin(&mut self, _spin: &SubjectSpin) {}
    /// The lighting rig, already placed around the subject.
    fn visit_lighting(&mut self, _style: LightingStyle, _lights: &[PlacedLight]) {}
    /// Output settings.
    fn visit_render_profile(&mut self, _profile: &RenderProfile) {}
    /// A non-fatal planning issue.
    fn visit_warning(&mut self, _warning: &PlanWarning) {}
}

/// Human-readable setup report.
#[derive(Debug, Default)]
pub struct SummaryVisitor {
    lines: Vec<String>,
}

impl SummaryVisitor {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report lines in visit order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Report as one newline-terminated string.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn dof_line(&mut self, focus: Option<f64>, aperture: Option<f64>) {
        let line = match (focus, aperture) {
            (Some(d), Some(f)) => format!("Depth of field: enabled (focus {d:.2}, f/{f})"),
            _ => "Depth of field: disabled".to_string(),
        };
        self.lines.push(line);
    }
}

impl SceneVisitor for SummaryVisitor {
    fn visit_subject(&mut self, subject: &SubjectExtent) {
        let line = match subject.kind() {
            SubjectKind::Image => format!(
                "Subject: image plane {:.2} x {:.2}",
                subject.width(),
                subject.height()
            ),
            SubjectKind::Mesh => format!(
                "Subject: model {:.2} x {:.2} x {:.2} (scale {:.4})",
                subject.width(),
                subject.depth(),
                subject.height(),
                subject.placement().scale
            ),
        };
        self.lines.push(line);
    }

    fn visit_camera_path(&mut self, path: &CameraPath) {
        let motion = match path.interpolation() {
            Interpolation::Eased => "camera rolls top to bottom",
            Interpolation::Linear => "camera orbits the model",
        };
        self.lines.push(format!(
            "Animation: frames 1-{}, {motion} ({} keyframes, fov {}°)",
            path.frame_count(),
            path.keyframes().len(),
            path.fov_degrees()
        ));
        let first = path.keyframes().first();
        self.dof_line(
            first.and_then(|k| k.focus_distance),
            first.and_then(|k| k.aperture),
        );
    }

    fn visit_subject_spin(&mut self, spin: &SubjectSpin) {
        self.lines.push(format!(
            "Animation: frames 1-{}, model rotates 360° (fixed camera, fov {}°)",
            spin.frame_count(),
            spin.fov_degrees()
        ));
        let cam = spin.camera();
        self.dof_line(cam.focus_distance, cam.aperture);
    }

    fn visit_lighting(&mut self, style: LightingStyle, lights: &[PlacedLight]) {
        let names: Vec<&str> = lights.iter().map(|l| l.name.as_str()).collect();
        self.lines.push(format!(
            "Lighting: {} ({})",
            style.as_str(),
            names.join(", ")
        ));
    }

    fn visit_render_profile(&mut self, profile: &RenderProfile) {
        let engine = match profile.settings.engine {
            RenderEngine::Eevee => "eevee",
            RenderEngine::EeveeNext => "eevee_next",
        };
        let out = profile.output_resolution();
        self.lines.push(format!(
            "Render: {}x{} @ {} fps, {} frames ({:.2} s), {engine}",
            out.width,
            out.height,
            profile.fps.as_f64(),
            profile.frame_count,
            profile.duration_secs
        ));
    }

    fn visit_warning(&mut self, warning: &PlanWarning) {
        self.lines.push(format!("Warning: {warning}"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/visitor.rs"]
mod tests;

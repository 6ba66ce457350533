use super::*;
use crate::{ShotConfig, SubjectProbe, compose, foundation::core::DVec3};

#[test]
fn image_summary_reads_like_setup_report() {
    let manifest = compose(&SubjectProbe::image(1000.0, 2000.0), &ShotConfig::default()).unwrap();
    let mut v = SummaryVisitor::new();
    manifest.accept(&mut v);
    let lines = v.lines();
    assert_eq!(lines[0], "Subject: image plane 5.00 x 10.00");
    assert!(lines[1].starts_with("Animation: frames 1-250, camera rolls top to bottom"));
    assert!(lines[2].starts_with("Depth of field: enabled"));
    assert_eq!(lines[3], "Lighting: studio (KeyLight, FillLight, RimLight)");
    assert_eq!(
        lines[4],
        "Render: 1920x1080 @ 30 fps, 250 frames (8.33 s), eevee"
    );
    assert_eq!(lines.len(), 5);
}

#[test]
fn spin_summary_mentions_fixed_camera_and_disabled_dof() {
    let cfg = ShotConfig {
        rotate_model: true,
        enable_dof: false,
        lighting_style: "outdoor".to_string(),
        ..ShotConfig::default()
    };
    let probe = SubjectProbe::mesh(DVec3::splat(-1.0), DVec3::splat(1.0));
    let manifest = compose(&probe, &cfg).unwrap();
    let summary = {
        let mut v = SummaryVisitor::new();
        manifest.accept(&mut v);
        v.finish()
    };
    assert!(summary.contains("model rotates 360°"));
    assert!(summary.contains("Depth of field: disabled"));
    assert!(summary.contains("Lighting: outdoor (SunLight, SkyLight)"));
    assert!(summary.contains("eevee_next"));
    assert!(summary.ends_with('\n'));
}

#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
}

impl SceneVisitor for Recorder {
    fn visit_subject(&mut self, _: &SubjectExtent) {
        self.calls.push("subject");
    }
    fn visit_camera_path(&mut self, _: &CameraPath) {
        self.calls.push("path");
    }
    fn visit_lighting(&mut self, _: LightingStyle, _: &[PlacedLight]) {
        self.calls.push("lighting");
    }
    fn visit_render_profile(&mut self, _: &RenderProfile) {
        self.calls.push("render");
    }
    fn visit_warning(&mut self, _: &PlanWarning) {
        self.calls.push("warning");
    }
}

#[test]
fn accept_visits_in_host_setup_order() {
    let cfg = ShotConfig {
        distance: 1.0,
        frame_margin: Some(1.5),
        ..ShotConfig::default()
    };
    let probe = SubjectProbe::mesh(DVec3::ZERO, DVec3::ONE);
    let manifest = compose(&probe, &cfg).unwrap();
    let mut r = Recorder::default();
    manifest.accept(&mut r);
    assert_eq!(r.calls, vec!["subject", "path", "lighting", "render", "warning"]);
}

#[test]
fn summary_handles_very_wide_custom_resolution() {
    let cfg = ShotConfig {
        resolution: crate::ResolutionPreset::Custom {
            width: 50_000_000,
            height: 1080,
        },
        ..ShotConfig::default()
    };
    let manifest = compose(&SubjectProbe::image(1000.0, 2000.0), &cfg).unwrap();
    let mut v = SummaryVisitor::new();
    manifest.accept(&mut v);
    assert!(v.lines()[4].starts_with("Render: 50000000x1080 @ 30 fps"));
}

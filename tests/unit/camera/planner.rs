use super::*;
use crate::subject::fit::fit;
use crate::subject::probe::{SubjectKind, SubjectProbe};

fn portrait() -> SubjectExtent {
    fit(&SubjectProbe::image(1000.0, 2000.0), 10.0).unwrap()
}

fn cube() -> SubjectExtent {
    fit(&SubjectProbe::mesh(DVec3::splat(-1.0), DVec3::splat(1.0)), 10.0).unwrap()
}

fn params(frame_count: u64) -> PlanParams {
    PlanParams {
        frame_count,
        ..PlanParams::default()
    }
}

fn path_of(plan: &CameraPlan) -> &CameraPath {
    match &plan.motion {
        ShotMotion::CameraPath(p) => p,
        ShotMotion::SubjectSpin(_) => panic!("expected a camera path"),
    }
}

#[test]
fn scroll_emits_two_eased_keys_top_to_bottom() {
    let plan = plan(&portrait(), MotionMode::Scroll, &params(250)).unwrap();
    let path = path_of(&plan);
    assert_eq!(path.interpolation(), Interpolation::Eased);
    let keys = path.keyframes();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].frame, FrameIndex(1));
    assert_eq!(keys[1].frame, FrameIndex(250));
    assert_eq!(keys[0].position, DVec3::new(0.0, -10.0, 5.0));
    assert_eq!(keys[1].position, DVec3::new(0.0, -10.0, -5.0));
    assert!(keys.iter().all(|k| k.look_at == DVec3::ZERO));
    assert_eq!(path.frame_count(), 250);
    assert_eq!(path.fov_degrees(), 50.0);
    assert!(plan.warnings.is_empty());
}

#[test]
fn scroll_z_never_increases_when_sampled() {
    for n in [2u64, 3, 17, 250] {
        let plan = plan(&portrait(), MotionMode::Scroll, &params(n)).unwrap();
        let path = path_of(&plan);
        assert_eq!(path.keyframes()[0].frame, FrameIndex(1));
        assert_eq!(path.keyframes().last().unwrap().frame, FrameIndex(n));
        let mut prev = f64::INFINITY;
        for f in 1..=n {
            let z = path.sample(FrameIndex(f)).unwrap().position.z;
            assert!(z <= prev, "z increased at frame {f} of {n}");
            prev = z;
        }
    }
}

#[test]
fn orbit_keeps_radius_and_height() {
    let plan = plan(
        &cube(),
        MotionMode::Turntable(TurntableRotation::CameraOrbit),
        &params(120),
    )
    .unwrap();
    let path = path_of(&plan);
    assert_eq!(path.interpolation(), Interpolation::Linear);
    assert_eq!(path.keyframes().len(), 120);
    for k in path.keyframes() {
        let horizontal = (k.position.x.powi(2) + k.position.y.powi(2)).sqrt();
        assert!((horizontal - 10.0).abs() < 1e-9);
        assert_eq!(k.position.z, 5.0);
        assert_eq!(k.look_at, DVec3::ZERO);
    }
}

#[test]
fn orbit_full_turn_returns_to_start_angle() {
    let plan = plan(
        &cube(),
        MotionMode::Turntable(TurntableRotation::CameraOrbit),
        &params(360),
    )
    .unwrap();
    let keys = path_of(&plan).keyframes();
    let start = DVec3::new(10.0, 0.0, 5.0);
    assert!(keys[359].position.distance(start) < 1e-9);
    // One degree per frame.
    let a0 = keys[0].position.y.atan2(keys[0].position.x).to_degrees();
    let a1 = keys[1].position.y.atan2(keys[1].position.x).to_degrees();
    assert!((a0 - 1.0).abs() < 1e-9);
    assert!((a1 - a0 - 1.0).abs() < 1e-9);
}

#[test]
fn subject_spin_fixes_camera_and_schedules_yaw() {
    let plan = plan(
        &cube(),
        MotionMode::Turntable(TurntableRotation::SubjectSpin),
        &params(360),
    )
    .unwrap();
    let ShotMotion::SubjectSpin(spin) = &plan.motion else {
        panic!("expected subject spin");
    };
    assert_eq!(spin.camera().frame, FrameIndex(1));
    assert_eq!(spin.camera().position, DVec3::new(10.0, 0.0, 5.0));
    assert_eq!(spin.schedule().len(), 360);
    for w in spin.schedule().windows(2) {
        assert!((w[1].yaw_degrees - w[0].yaw_degrees - 1.0).abs() < 1e-9);
    }
    let last = spin.schedule().last().unwrap();
    assert_eq!(last.frame, FrameIndex(360));
    assert!(last.orientation_degrees().abs() < 1e-9);
    assert_eq!(spin.yaw_at(FrameIndex(0)), 0.0);
}

#[test]
fn frame_margin_widens_small_distances() {
    let p = PlanParams {
        distance: 5.0,
        frame_margin: Some(1.5),
        ..PlanParams::default()
    };
    let plan = plan(
        &cube(),
        MotionMode::Turntable(TurntableRotation::SubjectSpin),
        &p,
    )
    .unwrap();
    assert_eq!(
        plan.warnings,
        vec![PlanWarning::DistanceWidened {
            requested: 5.0,
            effective: 15.0
        }]
    );
    assert_eq!(
        plan.motion.camera_keyframes()[0].position,
        DVec3::new(15.0, 0.0, 5.0)
    );
}

#[test]
fn rejects_out_of_range_parameters() {
    let subject = portrait();
    let bad = [
        PlanParams {
            distance: 0.0,
            ..PlanParams::default()
        },
        params(1),
        params(0),
        PlanParams {
            fov_degrees: 0.0,
            ..PlanParams::default()
        },
        PlanParams {
            fov_degrees: 180.0,
            ..PlanParams::default()
        },
        PlanParams {
            frame_margin: Some(-1.0),
            ..PlanParams::default()
        },
    ];
    for p in bad {
        assert!(matches!(
            plan(&subject, MotionMode::Scroll, &p),
            Err(CamrigError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn degenerate_subject_warns_but_plans() {
    let sliver = SubjectExtent::new(SubjectKind::Image, 4.0, 0.0, 0.0, DVec3::ZERO).unwrap();
    let plan = plan(&sliver, MotionMode::Scroll, &params(10)).unwrap();
    assert_eq!(
        plan.warnings,
        vec![PlanWarning::DegenerateSubject { extent: 0.0 }]
    );
    assert!(plan.framing.height_coverage.is_finite());
    assert_eq!(plan.motion.frame_count(), 10);
}

#[test]
fn framing_uses_fov_across_long_side() {
    let plan = plan(&portrait(), MotionMode::Scroll, &params(250)).unwrap();
    let f = plan.framing;
    let d = (100.0f64 + 25.0).sqrt();
    assert!((f.distance - d).abs() < 1e-12);
    let span = 2.0 * d * 25.0f64.to_radians().tan();
    assert!((f.visible_width - span).abs() < 1e-9);
    assert!((f.visible_height - span * 9.0 / 16.0).abs() < 1e-9);
    assert!((f.height_coverage - f.visible_height / 10.0).abs() < 1e-12);
}

use super::*;

#[test]
fn default_profile_is_1080p30() {
    let p = build(250, 30, ResolutionPreset::default()).unwrap();
    assert_eq!(p.resolution, Resolution::new(1920, 1080).unwrap());
    assert_eq!(p.fps.as_f64(), 30.0);
    assert_eq!(p.frame_count, 250);
    assert!((p.duration_secs - 250.0 / 30.0).abs() < 1e-12);
    assert!((p.duration_secs - 8.33).abs() < 0.01);
}

#[test]
fn presets_map_to_dimensions() {
    let dims = |preset: ResolutionPreset| {
        let r = preset.resolution().unwrap();
        (r.width, r.height)
    };
    assert_eq!(dims(ResolutionPreset::Hd720), (1280, 720));
    assert_eq!(dims(ResolutionPreset::Uhd4k), (3840, 2160));
    assert_eq!(dims(ResolutionPreset::Square1080), (1080, 1080));
    assert_eq!(
        dims(ResolutionPreset::Custom {
            width: 800,
            height: 600
        }),
        (800, 600)
    );
}

#[test]
fn rejects_zero_fps_frames_and_resolution() {
    for result in [
        build(250, 0, ResolutionPreset::Hd1080),
        build(0, 30, ResolutionPreset::Hd1080),
        build(
            250,
            30,
            ResolutionPreset::Custom {
                width: 0,
                height: 10,
            },
        ),
    ] {
        assert!(matches!(result, Err(CamrigError::InvalidConfiguration(_))));
    }
}

#[test]
fn settings_follow_subject_kind() {
    let image = RenderSettings::for_subject(SubjectKind::Image);
    assert_eq!(image.engine, RenderEngine::Eevee);
    assert!(image.motion_blur);
    let mesh = RenderSettings::for_subject(SubjectKind::Mesh);
    assert_eq!(mesh.engine, RenderEngine::EeveeNext);
    assert!(mesh.ambient_occlusion && mesh.bloom);
    assert_eq!(mesh.world_color, Some([0.05, 0.05, 0.05]));
}

#[test]
fn percentage_scales_output_and_is_validated() {
    let p = build(10, 24, ResolutionPreset::Hd1080).unwrap();
    let half = p
        .with_settings(RenderSettings {
            resolution_percentage: 50,
            ..RenderSettings::turntable()
        })
        .unwrap();
    assert_eq!(half.output_resolution(), Resolution::new(960, 540).unwrap());
    let zero = RenderSettings {
        resolution_percentage: 0,
        ..RenderSettings::turntable()
    };
    assert!(p.with_settings(zero).is_err());
}

#[test]
fn preset_json_shape() {
    let v: ResolutionPreset = serde_json::from_str("\"uhd4k\"").unwrap();
    assert_eq!(v, ResolutionPreset::Uhd4k);
    let c: ResolutionPreset =
        serde_json::from_str(r#"{"custom":{"width":640,"height":480}}"#).unwrap();
    assert_eq!(
        c,
        ResolutionPreset::Custom {
            width: 640,
            height: 480
        }
    );
}

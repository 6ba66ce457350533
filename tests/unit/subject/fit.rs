use super::*;
use crate::foundation::math::approx_eq;

#[test]
fn landscape_image_scales_height_to_reference() {
    let e = fit(&SubjectProbe::image(1920.0, 1080.0), 10.0).unwrap();
    assert_eq!(e.kind(), SubjectKind::Image);
    assert_eq!(e.height(), 10.0);
    assert!(approx_eq(e.width(), 10.0 * 1920.0 / 1080.0, 1e-12));
    assert!(approx_eq(e.width(), 17.78, 0.01));
    assert_eq!(e.depth(), 0.0);
    assert_eq!(e.center(), DVec3::ZERO);
}

#[test]
fn portrait_image_keeps_aspect() {
    let e = fit(&SubjectProbe::image(1000.0, 2000.0), 10.0).unwrap();
    assert_eq!(e.height(), 10.0);
    assert_eq!(e.width(), 5.0);
    assert_eq!(e.aspect_ratio(), 0.5);
    assert_eq!(e.placement().scale, 10.0 / 2000.0);
}

#[test]
fn mesh_largest_axis_becomes_reference_and_recenters() {
    let probe = SubjectProbe::mesh(DVec3::new(1.0, 2.0, 3.0), DVec3::new(3.0, 6.0, 4.0));
    let e = fit(&probe, 10.0).unwrap();
    // Y is the largest axis (4 units) -> scale 2.5.
    assert_eq!(e.placement().scale, 2.5);
    assert_eq!(e.depth(), 10.0);
    assert_eq!(e.width(), 5.0);
    assert_eq!(e.height(), 2.5);
    assert_eq!(e.largest(), 10.0);
    assert_eq!(e.center(), DVec3::ZERO);
    // Raw midpoint (2, 4, 3.5) maps to the origin.
    let mid = DVec3::new(2.0, 4.0, 3.5);
    let p = e.placement();
    assert_eq!(mid * p.scale + p.translation, DVec3::ZERO);
}

#[test]
fn flat_mesh_is_accepted() {
    let probe = SubjectProbe::mesh(DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 0.0));
    let e = fit(&probe, 10.0).unwrap();
    assert_eq!(e.height(), 0.0);
    assert_eq!(e.width(), 10.0);
}

#[test]
fn rejects_degenerate_geometry() {
    for probe in [
        SubjectProbe::image(0.0, 1080.0),
        SubjectProbe::image(1920.0, -1.0),
        SubjectProbe::image(f64::NAN, 10.0),
        SubjectProbe::mesh(DVec3::ONE, DVec3::ONE),
        SubjectProbe::mesh(DVec3::ONE, DVec3::ZERO),
    ] {
        assert!(matches!(
            fit(&probe, 10.0),
            Err(CamrigError::InvalidGeometry(_))
        ));
    }
}

#[test]
fn rejects_non_positive_reference_size() {
    assert!(matches!(
        fit(&SubjectProbe::image(10.0, 10.0), 0.0),
        Err(CamrigError::InvalidConfiguration(_))
    ));
}

#[test]
fn direct_extent_validates_dimensions() {
    assert!(SubjectExtent::new(SubjectKind::Image, 1.0, 1.0, 0.0, DVec3::ZERO).is_ok());
    assert!(SubjectExtent::new(SubjectKind::Mesh, -1.0, 1.0, 1.0, DVec3::ZERO).is_err());
    assert!(SubjectExtent::new(SubjectKind::Mesh, 0.0, 0.0, 0.0, DVec3::ZERO).is_err());
}

#[test]
fn deserialized_extent_is_revalidated() {
    let e = fit(&SubjectProbe::mesh(DVec3::ZERO, DVec3::new(2.0, 1.0, 4.0)), 10.0).unwrap();
    let good = serde_json::to_value(e).unwrap();
    let back: SubjectExtent = serde_json::from_value(good.clone()).unwrap();
    assert_eq!(back.placement(), e.placement());
    assert!(approx_eq(back.aspect_ratio(), e.aspect_ratio(), 1e-12));

    let mut collapsed = good.clone();
    for axis in ["width", "height", "depth"] {
        collapsed[axis] = serde_json::json!(0.0);
    }
    assert!(serde_json::from_value::<SubjectExtent>(collapsed).is_err());

    let mut unscaled = good;
    unscaled["placement"]["scale"] = serde_json::json!(0.0);
    assert!(serde_json::from_value::<SubjectExtent>(unscaled).is_err());
}

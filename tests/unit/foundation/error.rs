use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CamrigError::invalid_geometry("x")
            .to_string()
            .contains("invalid geometry:")
    );
    assert!(
        CamrigError::invalid_configuration("x")
            .to_string()
            .contains("invalid configuration:")
    );
    assert!(
        CamrigError::unknown_lighting_style("neon")
            .to_string()
            .contains("unknown lighting style: 'neon'")
    );
    assert!(
        CamrigError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CamrigError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

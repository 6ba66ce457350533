use super::*;

#[test]
fn ease_endpoints_are_fixed() {
    for ease in [Ease::Linear, Ease::SmoothStep] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(2.0), 1.0);
    }
}

#[test]
fn smoothstep_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = Ease::SmoothStep.apply(f64::from(i) / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn ease_serializes_snake_case() {
    let s = serde_json::to_string(&Ease::SmoothStep).unwrap();
    assert_eq!(s, "\"smooth_step\"");
}

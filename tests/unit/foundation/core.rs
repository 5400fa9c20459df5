use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted() {
    let err = FrameRange::new(FrameIndex(5), FrameIndex(2)).unwrap_err();
    assert!(matches!(err, ReelError::Timeline(_)));
    assert!(err.to_string().starts_with("timeline error:"));
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_accepts_integer_and_rational_json() {
    let fps: Fps = serde_json::from_str("30").unwrap();
    assert_eq!(fps, Fps { num: 30, den: 1 });

    let fps: Fps = serde_json::from_str(r#"{"num": 30000, "den": 1001}"#).unwrap();
    assert_eq!(fps.den, 1001);
    assert!((fps.as_f64() - 29.97).abs() < 0.01);
}

#[test]
fn fps_serializes_integer_rates_as_integers() {
    let fps = Fps::new(25, 1).unwrap();
    assert_eq!(serde_json::to_value(fps).unwrap(), serde_json::json!(25));

    let fps = Fps::new(30000, 1001).unwrap();
    assert_eq!(
        serde_json::to_value(fps).unwrap(),
        serde_json::json!({"num": 30000, "den": 1001})
    );
}

#[test]
fn frames_to_secs_uses_rate() {
    let fps = Fps::new(30, 1).unwrap();
    assert!((fps.frames_to_secs(90) - 3.0).abs() < 1e-9);
}

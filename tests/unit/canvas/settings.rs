use super::*;

#[test]
fn defaults_match_an_unscaled_auto_sizing_canvas() {
    let s = CanvasSettings::default();
    assert_eq!(s.scale, 1);
    assert_eq!(s.max_size, IntSize::ZERO);
    assert_eq!(s.size_mode, SizeMode::GrowAndShrink);
    assert!(s.auto_size);
    assert!(s.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let s = CanvasSettings::from_json(r#"{"scale": 3, "size_mode": "grow_only"}"#).unwrap();
    assert_eq!(
        s,
        CanvasSettings::default()
            .with_scale(3)
            .with_size_mode(SizeMode::GrowOnly)
    );
}

#[test]
fn json_rejects_zero_scale_and_unknown_fields() {
    let err = CanvasSettings::from_json(r#"{"scale": 0}"#).unwrap_err();
    assert!(err.to_string().contains("validation error:"));

    let err = CanvasSettings::from_json(r#"{"zoom": 2}"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn negative_cap_is_invalid() {
    let s = CanvasSettings::default().with_max_size(IntSize::new(-1, 4));
    assert!(s.validate().is_err());
}

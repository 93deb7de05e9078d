use super::*;

#[test]
fn rect_edges_and_emptiness() {
    let r = IntRect::new(2, 3, 4, 5);
    assert_eq!(r.right(), 6);
    assert_eq!(r.bottom(), 8);
    assert_eq!(r.origin(), IntPoint::new(2, 3));
    assert_eq!(r.size(), IntSize::new(4, 5));
    assert!(!r.is_empty());

    assert!(IntRect::new(0, 0, 0, 5).is_empty());
    assert!(IntRect::new(0, 0, 5, -1).is_empty());
    assert!(IntSize::new(3, 0).is_empty());
}

#[test]
fn contains_rect_treats_empty_as_contained() {
    let outer = IntRect::new(0, 0, 10, 10);
    assert!(outer.contains_rect(IntRect::new(2, 2, 8, 8)));
    assert!(!outer.contains_rect(IntRect::new(2, 2, 9, 8)));
    assert!(outer.contains_rect(IntRect::new(50, 50, 0, 0)));
}

#[test]
fn size_scaled_is_component_wise() {
    assert_eq!(IntSize::new(3, 7).scaled(4), IntSize::new(12, 28));
    assert_eq!(IntSize::new(i32::MAX, 1).scaled(2).width, i32::MAX);
}

#[test]
fn kurbo_rect_expands_outward() {
    let r = IntRect::from_kurbo_expand(kurbo::Rect::new(1.2, 2.8, 5.1, 6.0));
    assert_eq!(r, IntRect::new(1, 2, 5, 4));

    let flipped = IntRect::from_kurbo_expand(kurbo::Rect::new(4.0, 4.0, 0.5, 1.0));
    assert_eq!(flipped, IntRect::new(0, 1, 4, 3));
}

#[test]
fn to_kurbo_uses_exclusive_edges() {
    let k = IntRect::new(-2, 3, 4, 5).to_kurbo();
    assert_eq!(k, kurbo::Rect::new(-2.0, 3.0, 2.0, 8.0));
}

#[test]
fn geometry_types_serialize_as_plain_fields() {
    let json = serde_json::to_string(&IntRect::new(1, 2, 3, 4)).unwrap();
    assert_eq!(json, r#"{"x":1,"y":2,"width":3,"height":4}"#);
    let p: IntPoint = serde_json::from_str(r#"{"x":-4,"y":9}"#).unwrap();
    assert_eq!(p, IntPoint::new(-4, 9));
}

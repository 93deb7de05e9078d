use super::*;
use crate::foundation::core::IntPoint;
use crate::test_support::{TestImage, img};

fn layer_at(x: i32) -> Layer<TestImage> {
    Layer::new(img(1, 1), IntPoint::new(x, 0))
}

fn xs(stack: &LayerStack<TestImage>) -> Vec<i32> {
    stack.iter().map(|(_, l)| l.location().x).collect()
}

#[test]
fn push_preserves_insertion_order() {
    let mut stack = LayerStack::default();
    let a = stack.push(layer_at(0));
    let b = stack.push(layer_at(1));
    let c = stack.push(layer_at(2));
    assert_eq!(stack.ids(), &[a, b, c]);
    assert_eq!(stack.id_at(1), Some(b));
    assert_eq!(xs(&stack), vec![0, 1, 2]);
}

#[test]
fn remove_keeps_relative_order_and_invalidates_handle() {
    let mut stack = LayerStack::default();
    let a = stack.push(layer_at(0));
    let b = stack.push(layer_at(1));
    let c = stack.push(layer_at(2));

    assert!(stack.remove(b).is_some());
    assert_eq!(stack.ids(), &[a, c]);
    assert!(stack.get(b).is_none());
    assert!(stack.remove(b).is_none());
    assert_eq!(stack.len(), 2);
}

#[test]
fn reused_slot_does_not_alias_stale_handle() {
    let mut stack = LayerStack::default();
    let a = stack.push(layer_at(0));
    stack.remove(a);
    let d = stack.push(layer_at(9));

    assert_eq!(d.index(), a.index());
    assert_ne!(d.generation(), a.generation());
    assert!(stack.get(a).is_none());
    assert_eq!(stack.get(d).map(|l| l.location().x), Some(9));
    // The recycled layer goes on top, not back into the old position.
    let e = stack.push(layer_at(3));
    assert_eq!(stack.ids(), &[d, e]);
}

#[test]
fn get_mut_respects_generation() {
    let mut stack = LayerStack::default();
    let a = stack.push(layer_at(0));
    assert!(stack.get_mut(a).is_some());
    stack.remove(a);
    assert!(stack.get_mut(a).is_none());
    assert!(stack.get_mut(LayerId::new(42, 0)).is_none());
}

use super::*;
use crate::foundation::core::IntPoint;
use crate::test_support::{TestImage, img, mix64};

fn oracle(stack: &LayerStack<TestImage>, axis: Axis) -> i32 {
    stack
        .iter()
        .filter(|(_, l)| l.is_shown())
        .map(|(_, l)| l.extent(axis))
        .fold(0, i32::max)
}

fn push(
    tracker: &mut LeaderTracker,
    stack: &mut LayerStack<TestImage>,
    layer: Layer<TestImage>,
) -> LayerId {
    let id = stack.push(layer);
    tracker.layer_added(id, stack);
    id
}

fn mutate(
    tracker: &mut LeaderTracker,
    stack: &mut LayerStack<TestImage>,
    id: LayerId,
    f: impl FnOnce(&mut Layer<TestImage>),
) {
    let pending = tracker.layer_will_change(id, stack.get(id).unwrap());
    f(stack.get_mut(id).unwrap());
    tracker.layer_changed(id, pending, stack);
}

#[test]
fn added_layers_grow_leaders_incrementally() {
    let mut t = LeaderTracker::default();
    let mut s = LayerStack::default();
    let a = push(&mut t, &mut s, Layer::new(img(4, 4), IntPoint::ZERO));
    assert_eq!(t.leader(Axis::Width), Some(a));
    let b = push(&mut t, &mut s, Layer::new(img(4, 2), IntPoint::new(2, 0)));
    assert_eq!(t.leader(Axis::Width), Some(b));
    assert_eq!(t.leader(Axis::Height), Some(a));
    assert_eq!(t.extent(Axis::Width, &s), 6);
    assert_eq!(t.extent(Axis::Height, &s), 4);
}

#[test]
fn hidden_and_empty_layers_never_lead() {
    let mut t = LeaderTracker::default();
    let mut s = LayerStack::default();
    push(&mut t, &mut s, Layer::new(img(9, 9), IntPoint::ZERO).with_visible(false));
    push(&mut t, &mut s, Layer::new(None, IntPoint::new(50, 50)));
    assert_eq!(t.leader(Axis::Width), None);
    assert_eq!(t.extent(Axis::Width, &s), 0);
}

#[test]
fn ties_keep_the_lowest_stack_position_on_rescan() {
    let mut t = LeaderTracker::default();
    let mut s = LayerStack::default();
    let a = push(&mut t, &mut s, Layer::new(img(5, 5), IntPoint::ZERO));
    let b = push(&mut t, &mut s, Layer::new(img(5, 5), IntPoint::ZERO));
    assert_eq!(t.leader(Axis::Width), Some(a));

    t.rescan(&s);
    assert_eq!(t.leader(Axis::Width), Some(a));

    s.remove(a);
    t.layer_removed(a, &s);
    assert_eq!(t.leader(Axis::Width), Some(b));
}

#[test]
fn later_equal_layer_does_not_steal_leadership() {
    let mut t = LeaderTracker::default();
    let mut s = LayerStack::default();
    let a = push(&mut t, &mut s, Layer::new(img(3, 3), IntPoint::new(1, 1)));
    push(&mut t, &mut s, Layer::new(img(4, 4), IntPoint::ZERO));
    assert_eq!(t.leader(Axis::Width), Some(a));
}

#[test]
fn hiding_the_leader_rescans() {
    let mut t = LeaderTracker::default();
    let mut s = LayerStack::default();
    let a = push(&mut t, &mut s, Layer::new(img(3, 3), IntPoint::ZERO));
    let b = push(&mut t, &mut s, Layer::new(img(8, 8), IntPoint::ZERO));
    assert_eq!(t.leader(Axis::Width), Some(b));

    mutate(&mut t, &mut s, b, |l| {
        l.set_visible(false);
    });
    assert_eq!(t.leader(Axis::Width), Some(a));
    assert_eq!(t.extent(Axis::Width, &s), 3);

    mutate(&mut t, &mut s, b, |l| {
        l.set_visible(true);
    });
    assert_eq!(t.leader(Axis::Width), Some(b));
}

#[test]
fn shrinking_the_leader_hands_over_leadership() {
    let mut t = LeaderTracker::default();
    let mut s = LayerStack::default();
    let a = push(&mut t, &mut s, Layer::new(img(5, 5), IntPoint::ZERO));
    let b = push(&mut t, &mut s, Layer::new(img(5, 5), IntPoint::new(3, 3)));
    assert_eq!(t.leader(Axis::Width), Some(b));

    mutate(&mut t, &mut s, b, |l| {
        l.set_location(IntPoint::new(-4, 3));
    });
    assert_eq!(t.leader(Axis::Width), Some(a));
    assert_eq!(t.leader(Axis::Height), Some(b));
    assert_eq!(t.extent(Axis::Height, &s), 8);
}

#[test]
fn removing_a_non_leader_keeps_leader() {
    let mut t = LeaderTracker::default();
    let mut s = LayerStack::default();
    let a = push(&mut t, &mut s, Layer::new(img(2, 2), IntPoint::ZERO));
    let b = push(&mut t, &mut s, Layer::new(img(7, 7), IntPoint::ZERO));
    s.remove(a);
    t.layer_removed(a, &s);
    assert_eq!(t.leader(Axis::Width), Some(b));
}

#[test]
fn stale_leader_handle_reads_zero() {
    let mut t = LeaderTracker::default();
    let mut s = LayerStack::default();
    let a = push(&mut t, &mut s, Layer::new(img(2, 2), IntPoint::ZERO));
    s.remove(a);
    // Not told about the removal (as while the canvas size is locked).
    assert_eq!(t.leader(Axis::Width), Some(a));
    assert_eq!(t.extent(Axis::Width, &s), 0);
}

#[test]
fn random_operation_stream_matches_full_rescan_oracle() {
    let mut t = LeaderTracker::default();
    let mut s: LayerStack<TestImage> = LayerStack::default();
    let mut live: Vec<LayerId> = Vec::new();
    let mut state = 0x5EED_u64;

    for step in 0..2_000 {
        state = mix64(state);
        let pick = |n: usize| (state >> 16) as usize % n.max(1);
        let small = |shift: u32| ((state >> shift) % 13) as i32 - 4;

        match state % 6 {
            0 | 1 => {
                let image = if (state >> 40) % 5 == 0 {
                    None
                } else {
                    img(((state >> 8) % 7) as u32, ((state >> 12) % 7) as u32)
                };
                let layer = Layer::new(image, IntPoint::new(small(20), small(28)))
                    .with_visible((state >> 36) % 4 != 0);
                live.push(push(&mut t, &mut s, layer));
            }
            2 if !live.is_empty() => {
                let id = live.remove(pick(live.len()));
                s.remove(id);
                t.layer_removed(id, &s);
            }
            3 if !live.is_empty() => {
                let id = live[pick(live.len())];
                let visible = (state >> 44) % 2 == 0;
                mutate(&mut t, &mut s, id, |l| {
                    l.set_visible(visible);
                });
            }
            4 if !live.is_empty() => {
                let id = live[pick(live.len())];
                let at = IntPoint::new(small(20), small(28));
                mutate(&mut t, &mut s, id, |l| {
                    l.set_location(at);
                });
            }
            5 if !live.is_empty() => {
                let id = live[pick(live.len())];
                let image = img(((state >> 8) % 9) as u32, ((state >> 12) % 9) as u32);
                mutate(&mut t, &mut s, id, |l| {
                    l.replace_image(image);
                });
            }
            _ => {}
        }

        for axis in Axis::BOTH {
            assert_eq!(
                t.extent(axis, &s),
                oracle(&s, axis),
                "step {step} axis {axis:?}"
            );
        }
    }
}

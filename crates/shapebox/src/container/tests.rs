use super::*;
use crate::cfg::SUM_EPS;
use crate::shapes::{Circle, Rectangle, Square, Triangle};
use proptest::prelude::*;
use std::f64::consts::PI;

fn circle(r: f64) -> Box<dyn Shape> {
    Box::new(Circle::new(r).unwrap())
}
fn rect(w: f64, h: f64) -> Box<dyn Shape> {
    Box::new(Rectangle::new(w, h).unwrap())
}
fn square(s: f64) -> Box<dyn Shape> {
    Box::new(Square::new(s).unwrap())
}

/// (kind, area) fingerprint; every test shape has a distinct area.
fn fingerprint(b: &ShapeBox) -> Vec<(ShapeKind, f64)> {
    b.iter().map(|s| (s.kind(), s.area())).collect()
}

#[test]
fn concrete_scenario() {
    let mut b = ShapeBox::new(3);
    b.add(circle(2.0)).unwrap();
    b.add(rect(2.0, 3.0)).unwrap();
    b.add(circle(1.0)).unwrap();
    let expected = PI * 4.0 + 6.0 + PI;
    assert!((b.sum_area() - expected).abs() < SUM_EPS);
    assert!((b.sum_area() - 21.70).abs() < 0.01);

    assert_eq!(b.remove_all_of_kind(ShapeKind::Circle), Ok(2));
    assert_eq!(b.len(), 1);
    assert_eq!(b.get(0).unwrap().kind(), ShapeKind::Rectangle);
    assert_eq!(
        b.remove_all_of_kind(ShapeKind::Circle),
        Err(BoxError::NoneFound {
            kind: ShapeKind::Circle
        })
    );
    assert_eq!(b.len(), 1);
}

#[test]
fn add_respects_capacity() {
    let mut b = ShapeBox::new(2);
    b.add(square(1.0)).unwrap();
    b.add(square(2.0)).unwrap();
    assert!(b.is_full());
    assert_eq!(
        b.add(square(3.0)),
        Err(BoxError::CapacityExceeded { capacity: 2 })
    );
    assert_eq!(b.len(), 2);
    assert_eq!(b.capacity(), 2);
}

#[test]
fn zero_capacity_box_rejects_everything() {
    let mut b = ShapeBox::new(0);
    assert!(b.is_empty());
    assert!(b.is_full());
    assert!(matches!(
        b.add(circle(1.0)),
        Err(BoxError::CapacityExceeded { capacity: 0 })
    ));
    assert_eq!(b.sum_area(), 0.0);
    assert_eq!(b.sum_perimeter(), 0.0);
}

#[test]
fn index_errors_on_unallocated_slots() {
    let mut b = ShapeBox::new(4);
    b.add(circle(1.0)).unwrap();
    let oob = BoxError::IndexOutOfRange { index: 1, len: 1 };
    assert_eq!(b.get(1).unwrap_err(), oob);
    assert_eq!(b.extract(1).unwrap_err(), oob);
    assert_eq!(b.replace(1, square(1.0)).unwrap_err(), oob);
    assert_eq!(b.len(), 1);
    assert_eq!(b.get(0).unwrap().kind(), ShapeKind::Circle);
}

#[test]
fn get_does_not_remove() {
    let mut b = ShapeBox::new(2);
    b.add(rect(1.0, 2.0)).unwrap();
    let first = b.get(0).unwrap().area();
    let again = b.get(0).unwrap().area();
    assert_eq!(first, again);
    assert_eq!(b.len(), 1);
}

#[test]
fn extract_compacts() {
    let mut b = ShapeBox::new(4);
    b.add(square(1.0)).unwrap();
    b.add(circle(1.0)).unwrap();
    b.add(square(2.0)).unwrap();
    b.add(square(3.0)).unwrap();
    let out = b.extract(1).unwrap();
    assert_eq!(out.kind(), ShapeKind::Circle);
    assert_eq!(b.len(), 3);
    let areas: Vec<f64> = b.iter().map(|s| s.area()).collect();
    assert_eq!(areas, vec![1.0, 4.0, 9.0]);
    // freed slot can be reused
    b.add(circle(2.0)).unwrap();
    assert!(b.is_full());
}

#[test]
fn replace_swaps_in_place() {
    let mut b = ShapeBox::new(3);
    b.add(square(1.0)).unwrap();
    b.add(square(2.0)).unwrap();
    let old = b.replace(0, Box::new(Triangle::new(2.0).unwrap())).unwrap();
    assert_eq!(old.kind(), ShapeKind::Square);
    assert_eq!(old.area(), 1.0);
    assert_eq!(b.len(), 2);
    assert_eq!(b.get(0).unwrap().kind(), ShapeKind::Triangle);
    assert_eq!(b.get(1).unwrap().area(), 4.0);
}

#[test]
fn removal_keeps_survivor_order() {
    let mut b = ShapeBox::new(6);
    b.add(circle(1.0)).unwrap();
    b.add(square(1.0)).unwrap();
    b.add(circle(2.0)).unwrap();
    b.add(rect(2.0, 3.0)).unwrap();
    b.add(square(3.0)).unwrap();
    assert_eq!(b.remove_all_circles(), Ok(2));
    assert_eq!(
        fingerprint(&b),
        vec![
            (ShapeKind::Square, 1.0),
            (ShapeKind::Rectangle, 6.0),
            (ShapeKind::Square, 9.0)
        ]
    );
    assert_eq!(b.count_of_kind(ShapeKind::Circle), 0);
}

#[test]
fn none_found_leaves_box_unchanged() {
    let mut b = ShapeBox::new(2);
    b.add(square(1.0)).unwrap();
    let before = fingerprint(&b);
    assert!(matches!(
        b.remove_all_of_kind(ShapeKind::Polygon),
        Err(BoxError::NoneFound { .. })
    ));
    assert_eq!(fingerprint(&b), before);
}

#[test]
fn empty_slot_is_distinct_from_out_of_range() {
    let mut b = ShapeBox::new(3);
    b.add(circle(1.0)).unwrap();
    // No public path stores a hole; seed one directly.
    b.slots.push(None);
    b.add(square(2.0)).unwrap();

    let empty = BoxError::SlotEmpty { index: 1 };
    assert_eq!(b.get(1).unwrap_err(), empty);
    assert_eq!(b.extract(1).unwrap_err(), empty);
    assert_eq!(b.replace(1, square(5.0)).unwrap_err(), empty);
    assert_eq!(b.len(), 3);
    assert!(b.slots[1].is_none());
    // Failed extract/replace on the hole left the neighbours in place.
    assert_eq!(b.get(0).unwrap().kind(), ShapeKind::Circle);
    assert_eq!(b.get(2).unwrap().area(), 4.0);
    assert_eq!(
        b.get(3).unwrap_err(),
        BoxError::IndexOutOfRange { index: 3, len: 3 }
    );

    // Aggregates skip the hole.
    assert!((b.sum_area() - (PI + 4.0)).abs() < SUM_EPS);
    assert_eq!(b.iter().count(), 2);
    // Filtered removal keeps holes in place.
    assert_eq!(b.remove_all_circles(), Ok(1));
    assert_eq!(b.len(), 2);
    assert_eq!(b.get(0).unwrap_err(), BoxError::SlotEmpty { index: 0 });
}

#[test]
fn errors_display() {
    let e = BoxError::IndexOutOfRange { index: 5, len: 2 };
    assert_eq!(e.to_string(), "index 5 out of range for box of length 2");
    let e = BoxError::NoneFound {
        kind: ShapeKind::Circle,
    };
    assert_eq!(e.to_string(), "box contains no circle shapes");
}

// Property tests over random op sequences.

#[derive(Clone, Debug)]
enum Op {
    Add(ShapeKind, f64),
    Extract(usize),
    Replace(usize, f64),
    RemoveKind(ShapeKind),
}

fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(vec![
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
    ])
}

fn make(kind: ShapeKind, size: f64) -> Box<dyn Shape> {
    match kind {
        ShapeKind::Circle => circle(size),
        ShapeKind::Rectangle => rect(size, size + 1.0),
        ShapeKind::Square => square(size),
        _ => Box::new(Triangle::new(size).unwrap()),
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (kind_strategy(), 0.0..10.0f64).prop_map(|(k, s)| Op::Add(k, s)),
        (0usize..8).prop_map(Op::Extract),
        (0usize..8, 0.0..10.0f64).prop_map(|(i, s)| Op::Replace(i, s)),
        kind_strategy().prop_map(Op::RemoveKind),
    ]
}

proptest! {
    #[test]
    fn ops_match_vec_model(cap in 0usize..6, ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut b = ShapeBox::new(cap);
        // model: (kind, area, perimeter)
        let mut model: Vec<(ShapeKind, f64, f64)> = Vec::new();
        for op in ops {
            match op {
                Op::Add(k, s) => {
                    let shape = make(k, s);
                    let entry = (shape.kind(), shape.area(), shape.perimeter());
                    let res = b.add(shape);
                    if model.len() >= cap {
                        prop_assert_eq!(res, Err(BoxError::CapacityExceeded { capacity: cap }));
                    } else {
                        prop_assert!(res.is_ok());
                        model.push(entry);
                    }
                }
                Op::Extract(i) => match b.extract(i) {
                    Ok(s) => {
                        prop_assert!(i < model.len());
                        let m = model.remove(i);
                        prop_assert_eq!((s.kind(), s.area()), (m.0, m.1));
                    }
                    Err(e) => {
                        prop_assert!(i >= model.len());
                        let len = model.len();
                        prop_assert_eq!(e, BoxError::IndexOutOfRange { index: i, len });
                    }
                },
                Op::Replace(i, s) => {
                    let shape = square(s);
                    let entry = (shape.kind(), shape.area(), shape.perimeter());
                    match b.replace(i, shape) {
                        Ok(old) => {
                            prop_assert!(i < model.len());
                            let m = std::mem::replace(&mut model[i], entry);
                            prop_assert_eq!((old.kind(), old.area()), (m.0, m.1));
                            prop_assert_eq!(b.get(i).unwrap().area(), entry.1);
                        }
                        Err(e) => {
                            prop_assert!(i >= model.len());
                            let len = model.len();
                            prop_assert_eq!(e, BoxError::IndexOutOfRange { index: i, len });
                        }
                    }
                }
                Op::RemoveKind(k) => {
                    let n = model.iter().filter(|m| m.0 == k).count();
                    let res = b.remove_all_of_kind(k);
                    if n == 0 {
                        prop_assert_eq!(res, Err(BoxError::NoneFound { kind: k }));
                    } else {
                        prop_assert_eq!(res, Ok(n));
                        model.retain(|m| m.0 != k);
                    }
                    prop_assert_eq!(b.count_of_kind(k), 0);
                }
            }
            prop_assert!(b.len() <= cap);
            prop_assert_eq!(b.len(), model.len());
            let got: Vec<(ShapeKind, f64)> = fingerprint(&b);
            let want: Vec<(ShapeKind, f64)> = model.iter().map(|m| (m.0, m.1)).collect();
            prop_assert_eq!(got, want);
            let area: f64 = model.iter().map(|m| m.1).sum();
            let perim: f64 = model.iter().map(|m| m.2).sum();
            prop_assert!((b.sum_area() - area).abs() < SUM_EPS);
            prop_assert!((b.sum_perimeter() - perim).abs() < SUM_EPS);
        }
    }
}

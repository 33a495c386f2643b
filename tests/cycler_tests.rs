//! Cycler removal tests.
//!
//! Removing a seat must never lose track of whose turn it is: removing
//! anyone else leaves the current item alone, and removing the current
//! item lands on whoever `advance` would have reached.

use maumau::core::{Cycler, Direction};

fn ring(len: u8, current: u8, direction: Direction) -> Cycler<u8> {
    let mut cycler = Cycler::new((0..len).collect());
    assert!(cycler.set_current(&current));
    if direction == Direction::Backward {
        cycler.reverse();
    }
    cycler
}

#[test]
fn test_remove_next_forward() {
    let mut cycler = ring(4, 1, Direction::Forward);
    assert_eq!(cycler.remove(&2), Some(2));

    assert_eq!(cycler.current(), Some(&1));
    assert_eq!(cycler.peek_next(), Some(&3));
}

#[test]
fn test_remove_previous_forward() {
    let mut cycler = ring(4, 1, Direction::Forward);
    assert_eq!(cycler.remove(&0), Some(0));

    assert_eq!(cycler.current(), Some(&1));
    assert_eq!(cycler.peek_previous(), Some(&3));
}

#[test]
fn test_remove_current_forward() {
    let mut cycler = ring(4, 1, Direction::Forward);
    cycler.remove(&1);

    assert_eq!(cycler.current(), Some(&2));
}

#[test]
fn test_remove_next_backward() {
    let mut cycler = ring(4, 1, Direction::Backward);
    assert_eq!(cycler.remove(&0), Some(0));

    assert_eq!(cycler.current(), Some(&1));
    assert_eq!(cycler.peek_next(), Some(&3));
}

#[test]
fn test_remove_previous_backward() {
    let mut cycler = ring(4, 1, Direction::Backward);
    assert_eq!(cycler.remove(&2), Some(2));

    assert_eq!(cycler.current(), Some(&1));
    assert_eq!(cycler.peek_previous(), Some(&3));
}

#[test]
fn test_remove_current_backward() {
    let mut cycler = ring(4, 1, Direction::Backward);
    cycler.remove(&1);

    assert_eq!(cycler.current(), Some(&0));
}

#[test]
fn test_remove_current_wraps() {
    let mut forward = ring(4, 3, Direction::Forward);
    forward.remove(&3);
    assert_eq!(forward.current(), Some(&0));

    let mut backward = ring(4, 0, Direction::Backward);
    backward.remove(&0);
    assert_eq!(backward.current(), Some(&3));
}

#[test]
fn test_remove_absent_is_noop() {
    let mut cycler = ring(3, 2, Direction::Backward);
    let before = cycler.clone();

    assert_eq!(cycler.remove(&9), None);
    assert_eq!(cycler, before);
}

#[test]
fn test_remove_until_empty() {
    let mut cycler = ring(2, 1, Direction::Forward);
    cycler.remove(&1);
    assert_eq!(cycler.current(), Some(&0));

    cycler.remove(&0);
    assert!(cycler.is_empty());
    assert_eq!(cycler.current(), None);
    assert_eq!(cycler.advance(), None);
}

/// Every ring size, cursor position, direction and removed item.
#[test]
fn test_removal_matrix() {
    for len in 2..=6u8 {
        for current in 0..len {
            for direction in [Direction::Forward, Direction::Backward] {
                for removed in 0..len {
                    let mut cycler = ring(len, current, direction);
                    let expected = if removed == current {
                        *cycler.peek_next().unwrap()
                    } else {
                        current
                    };
                    let cycles = cycler.cycles();

                    assert_eq!(cycler.remove(&removed), Some(removed));

                    let context = format!("len {len}, current {current}, {direction:?}, removed {removed}");
                    assert_eq!(cycler.current(), Some(&expected), "{context}");
                    assert_eq!(cycler.len(), usize::from(len) - 1, "{context}");
                    assert_eq!(cycler.direction(), direction, "{context}");
                    assert_eq!(cycler.cycles(), cycles, "{context}");
                    assert!(!cycler.contains(&removed), "{context}");
                }
            }
        }
    }
}

#[test]
fn test_order_after_removal() {
    let mut cycler = ring(5, 2, Direction::Backward);
    cycler.remove(&1);

    let order: Vec<u8> = cycler.full_order_from_current().copied().collect();
    assert_eq!(order, vec![2, 0, 4, 3]);

    // Restartable: a clone of the iterator replays from the start.
    let iter = cycler.full_order_from_current();
    assert_eq!(iter.clone().count(), 4);
    assert_eq!(iter.len(), 4);
}

#[test]
fn test_round_counts_advances() {
    let mut cycler = ring(3, 0, Direction::Forward);
    assert_eq!(cycler.round(), 1);

    for _ in 0..3 {
        cycler.advance();
    }
    assert_eq!(cycler.round(), 2);

    cycler.retreat();
    cycler.set_current(&2);
    assert_eq!(cycler.cycles(), 4);
    assert_eq!(cycler.round(), 2);
}

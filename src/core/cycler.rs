//! Bidirectional turn-order ring.
//!
//! A `Cycler` holds items in a fixed ring, a cursor on the current item and
//! a traversal direction. `peek_*` never moves the cursor; `advance` and
//! `retreat` do, and each counts as one cycle toward the round number.
//!
//! ## Removal
//!
//! Removing an item keeps the cursor on the same logical item:
//!
//! - an item stored before the cursor: the cursor index shifts down by one
//! - an item stored after the cursor: nothing changes
//! - the current item: the cursor lands on the item one step ahead in the
//!   current direction
//!
//! ```
//! use maumau::core::Cycler;
//!
//! let mut order = Cycler::new(vec!['a', 'b', 'c', 'd']);
//! order.advance();
//! assert_eq!(order.current(), Some(&'b'));
//!
//! order.reverse();
//! order.remove(&'b');
//! assert_eq!(order.current(), Some(&'a'));
//!
//! let rendered: String = order.full_order_from_current().collect();
//! assert_eq!(rendered, "adc");
//! ```

use serde::{Deserialize, Serialize};

/// Traversal direction of a [`Cycler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing storage index.
    #[default]
    Forward,
    /// Decreasing storage index.
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Ring buffer over turn order with a reversible direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycler<T> {
    items: Vec<T>,
    index: usize,
    direction: Direction,
    cycles: u64,
}

impl<T> Cycler<T> {
    /// Create a cycler positioned on the first item, moving forward.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            index: 0,
            direction: Direction::Forward,
            cycles: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cursor moves so far. Never decreases.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Round number, starting at 1: `cycles / len + 1`.
    #[must_use]
    pub fn round(&self) -> u64 {
        match self.items.len() {
            0 => 1,
            len => self.cycles / len as u64 + 1,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// The item `advance` would move to.
    #[must_use]
    pub fn peek_next(&self) -> Option<&T> {
        self.items.get(self.step(self.index, self.direction)?)
    }

    /// The item `retreat` would move to.
    #[must_use]
    pub fn peek_previous(&self) -> Option<&T> {
        self.items.get(self.step(self.index, self.direction.reversed())?)
    }

    /// Move one step in the current direction.
    pub fn advance(&mut self) -> Option<&T> {
        self.index = self.step(self.index, self.direction)?;
        self.cycles += 1;
        self.current()
    }

    /// Move one step against the current direction.
    pub fn retreat(&mut self) -> Option<&T> {
        self.index = self.step(self.index, self.direction.reversed())?;
        self.cycles += 1;
        self.current()
    }

    /// Flip the traversal direction. The cursor stays put.
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Items in storage order, ignoring cursor and direction.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Every item once, starting at the current one, in traversal order.
    ///
    /// The iterator is `Clone`; cloning it restarts from the same point.
    #[must_use]
    pub fn full_order_from_current(&self) -> Order<'_, T> {
        Order {
            cycler: self,
            position: self.index,
            remaining: self.items.len(),
        }
    }

    fn step(&self, from: usize, direction: Direction) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        Some(match direction {
            Direction::Forward => (from + 1) % len,
            Direction::Backward => (from + len - 1) % len,
        })
    }
}

impl<T: PartialEq> Cycler<T> {
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// The item one step after `item` in the current direction.
    #[must_use]
    pub fn peek_after(&self, item: &T) -> Option<&T> {
        let position = self.position(item)?;
        self.items.get(self.step(position, self.direction)?)
    }

    /// Move the cursor onto `item`. Returns false if it is not present.
    ///
    /// Jumping does not count as a cycle.
    pub fn set_current(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(position) => {
                self.index = position;
                true
            }
            None => false,
        }
    }

    /// Remove `item`, keeping the cursor on the same logical item.
    ///
    /// Returns `None` (and changes nothing) if the item is absent.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let position = self.position(item)?;
        let removed = self.items.remove(position);

        if self.items.is_empty() {
            self.index = 0;
        } else if position < self.index {
            self.index -= 1;
        } else if position == self.index {
            self.index = match self.direction {
                // The follower slid into the vacated slot.
                Direction::Forward if position >= self.items.len() => 0,
                Direction::Forward => position,
                Direction::Backward if position == 0 => self.items.len() - 1,
                Direction::Backward => position - 1,
            };
        }

        Some(removed)
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }
}

/// Finite iterator over a [`Cycler`] from its current item.
#[derive(Clone, Debug)]
pub struct Order<'a, T> {
    cycler: &'a Cycler<T>,
    position: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Order<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.cycler.items.get(self.position)?;
        self.remaining -= 1;
        if let Some(next) = self.cycler.step(self.position, self.cycler.direction) {
            self.position = next;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Order<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cycler() {
        let order = Cycler::new(vec![1, 2, 3]);

        assert_eq!(order.current(), Some(&1));
        assert_eq!(order.direction(), Direction::Forward);
        assert_eq!(order.cycles(), 0);
        assert_eq!(order.round(), 1);
    }

    #[test]
    fn test_peek_does_not_move() {
        let order = Cycler::new(vec![1, 2, 3]);

        assert_eq!(order.peek_next(), Some(&2));
        assert_eq!(order.peek_previous(), Some(&3));
        assert_eq!(order.current(), Some(&1));
        assert_eq!(order.cycles(), 0);
    }

    #[test]
    fn test_advance_wraps_and_counts() {
        let mut order = Cycler::new(vec![1, 2, 3]);

        assert_eq!(order.advance(), Some(&2));
        assert_eq!(order.advance(), Some(&3));
        assert_eq!(order.advance(), Some(&1));
        assert_eq!(order.cycles(), 3);
        assert_eq!(order.round(), 2);
    }

    #[test]
    fn test_retreat_counts_too() {
        let mut order = Cycler::new(vec![1, 2, 3]);

        assert_eq!(order.retreat(), Some(&3));
        assert_eq!(order.cycles(), 1);
    }

    #[test]
    fn test_reverse_swaps_next_and_previous() {
        let mut order = Cycler::new(vec![1, 2, 3]);
        order.reverse();

        assert_eq!(order.direction(), Direction::Backward);
        assert_eq!(order.peek_next(), Some(&3));
        assert_eq!(order.peek_previous(), Some(&2));
        assert_eq!(order.advance(), Some(&3));
    }

    #[test]
    fn test_set_current() {
        let mut order = Cycler::new(vec![1, 2, 3]);

        assert!(order.set_current(&3));
        assert_eq!(order.current(), Some(&3));
        assert!(!order.set_current(&9));
        assert_eq!(order.current(), Some(&3));
        assert_eq!(order.cycles(), 0);
    }

    #[test]
    fn test_peek_after() {
        let mut order = Cycler::new(vec![1, 2, 3]);

        assert_eq!(order.peek_after(&3), Some(&1));
        order.reverse();
        assert_eq!(order.peek_after(&3), Some(&2));
        assert_eq!(order.peek_after(&7), None);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut order = Cycler::new(vec![1, 2, 3]);
        order.advance();

        assert_eq!(order.remove(&9), None);
        assert_eq!(order.len(), 3);
        assert_eq!(order.current(), Some(&2));
    }

    #[test]
    fn test_remove_last_item() {
        let mut order = Cycler::new(vec![1]);

        assert_eq!(order.remove(&1), Some(1));
        assert!(order.is_empty());
        assert_eq!(order.current(), None);
        assert_eq!(order.peek_next(), None);
        assert_eq!(order.advance(), None);
        assert_eq!(order.full_order_from_current().count(), 0);
    }

    #[test]
    fn test_full_order_is_restartable() {
        let mut order = Cycler::new(vec![1, 2, 3, 4]);
        order.advance();
        order.advance();

        let iter = order.full_order_from_current();
        assert_eq!(iter.len(), 4);
        let first: Vec<_> = iter.clone().copied().collect();
        let second: Vec<_> = iter.copied().collect();

        assert_eq!(first, vec![3, 4, 1, 2]);
        assert_eq!(first, second);

        order.reverse();
        let backwards: Vec<_> = order.full_order_from_current().copied().collect();
        assert_eq!(backwards, vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_serialization() {
        let mut order = Cycler::new(vec![10, 20, 30]);
        order.advance();
        order.reverse();

        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Cycler<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}

//! Insertion-ordered entity storage.

use std::ops::{Bound, RangeBounds};

use crate::chip::Chip;
use crate::error::{CasinoError, CasinoResult, EntityKind};

/// An insertion-ordered sequence of one entity kind.
///
/// Positions are zero-based. The casino engine translates its 1-based
/// external positions before calling in here.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    kind: EntityKind,
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Create an empty collection holding entities of `kind`.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Append an item at the end.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the item at `position`, shifting later items down.
    pub fn remove_at(&mut self, position: usize) -> CasinoResult<T> {
        if self.items.is_empty() {
            return Err(CasinoError::EmptyCollection(self.kind));
        }
        if position >= self.items.len() {
            return Err(CasinoError::PositionOutOfRange {
                kind: self.kind,
                position,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(position))
    }

    /// Get an item by position. Negative positions count from the end.
    pub fn get(&self, position: isize) -> Option<&T> {
        self.resolve(position).and_then(|i| self.items.get(i))
    }

    pub(crate) fn at(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.items.get_mut(position)
    }

    /// An ordered sub-sequence, or `None` if the range is out of bounds.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Option<&[T]> {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        self.items.get(bounds)
    }

    /// Iterate over all items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Position of the first item matching `pred`.
    pub fn position<P: FnMut(&T) -> bool>(&self, pred: P) -> Option<usize> {
        self.items.iter().position(pred)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the collection holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Which entity kind this collection holds.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    fn resolve(&self, position: isize) -> Option<usize> {
        if position >= 0 {
            Some(position.unsigned_abs())
        } else {
            self.items.len().checked_sub(position.unsigned_abs())
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The casino's chips, seeded with the standard set and kept in ascending
/// value order after every insertion.
#[derive(Debug, Clone)]
pub struct ChipCollection {
    inner: Collection<Chip>,
}

impl ChipCollection {
    /// A collection holding the five standard chips.
    pub fn new() -> Self {
        let mut inner = Collection::new(EntityKind::Chip);
        for chip in Chip::standard_set() {
            inner.add(chip);
        }
        Self { inner }
    }

    /// Insert a chip, then restore ascending value order (stable).
    pub fn add(&mut self, chip: Chip) {
        self.inner.add(chip);
        self.inner.items.sort_by_key(|c| c.value);
    }

    /// Remove and return the chip at `position`. Order is not re-checked.
    pub fn remove_at(&mut self, position: usize) -> CasinoResult<Chip> {
        self.inner.remove_at(position)
    }

    /// Get a chip by position. Negative positions count from the end.
    pub fn get(&self, position: isize) -> Option<&Chip> {
        self.inner.get(position)
    }

    /// An ordered sub-sequence, or `None` if the range is out of bounds.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Option<&[Chip]> {
        self.inner.slice(range)
    }

    /// Iterate in ascending value order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chip> {
        self.inner.iter()
    }

    /// Position of the first chip matching `pred`.
    pub fn position<P: FnMut(&Chip) -> bool>(&self, pred: P) -> Option<usize> {
        self.inner.position(pred)
    }

    /// Number of chips.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when every chip has been removed.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for ChipCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ChipCollection {
    type Item = &'a Chip;
    type IntoIter = std::slice::Iter<'a, Chip>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    fn three_players() -> Collection<Player> {
        let mut players = Collection::new(EntityKind::Player);
        players.add(Player::new("Alice", 10));
        players.add(Player::new("Bob", 20));
        players.add(Player::new("Carol", 30));
        players
    }

    #[test]
    fn add_and_count() {
        let players = three_players();
        assert_eq!(players.len(), 3);
        assert!(!players.is_empty());
    }

    #[test]
    fn remove_at_shifts_later_items() {
        let mut players = three_players();
        let removed = players.remove_at(0).unwrap();
        assert_eq!(removed.name, "Alice");
        assert_eq!(players.len(), 2);
        assert_eq!(players.get(0).unwrap().name, "Bob");
        assert_eq!(players.get(1).unwrap().name, "Carol");
    }

    #[test]
    fn remove_from_empty_fails() {
        let mut players: Collection<Player> = Collection::new(EntityKind::Player);
        assert_eq!(
            players.remove_at(0),
            Err(CasinoError::EmptyCollection(EntityKind::Player))
        );
    }

    #[test]
    fn remove_past_end_fails() {
        let mut players = three_players();
        assert!(matches!(
            players.remove_at(3),
            Err(CasinoError::PositionOutOfRange { position: 3, len: 3, .. })
        ));
        assert_eq!(players.len(), 3);
    }

    #[test]
    fn negative_positions_count_from_end() {
        let players = three_players();
        assert_eq!(players.get(-1).unwrap().name, "Carol");
        assert_eq!(players.get(-3).unwrap().name, "Alice");
        assert!(players.get(-4).is_none());
        assert!(players.get(3).is_none());
    }

    #[test]
    fn slices() {
        let players = three_players();
        let names: Vec<_> = players
            .slice(1..)
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Bob", "Carol"]);
        assert_eq!(players.slice(..2).unwrap().len(), 2);
        assert!(players.slice(2..5).is_none());
    }

    #[test]
    fn iteration_is_restartable() {
        let players = three_players();
        let first: Vec<_> = players.iter().map(|p| p.balance).collect();
        let second: Vec<_> = (&players).into_iter().map(|p| p.balance).collect();
        assert_eq!(first, vec![10, 20, 30]);
        assert_eq!(first, second);
    }

    #[test]
    fn chip_collection_seeds_standard_set() {
        let chips = ChipCollection::new();
        let colours: Vec<_> = chips.iter().map(|c| c.colour.as_str()).collect();
        assert_eq!(colours, ["white", "green", "blue", "red", "black"]);
    }

    #[test]
    fn chip_collection_keeps_value_order() {
        let mut chips = ChipCollection::new();
        chips.add(Chip::new("purple", 20));
        chips.add(Chip::new("gold", 100));
        chips.add(Chip::new("pink", 2));
        let values: Vec<_> = chips.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![1, 2, 5, 10, 20, 25, 50, 100]);
        assert_eq!(chips.get(-1).unwrap().colour, "gold");
    }
}

//! Key-based lookup structures kept in step with the collections.
//!
//! Player and goose indices map a name to the entity's position in its
//! collection; every lookup takes that collection to resolve the entity.
//! The chip index maps colour to denomination on its own.

use std::collections::HashMap;

use crate::chip::{Chip, STANDARD_CHIPS};
use crate::collection::Collection;
use crate::error::{CasinoError, CasinoResult, EntityKind};
use crate::goose::{Goose, GooseRole};
use crate::player::Player;

/// Name -> collection position, shared by the player and goose indices.
#[derive(Debug, Clone, Default)]
struct Slots {
    by_name: HashMap<String, usize>,
}

impl Slots {
    fn get(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    fn insert(&mut self, name: &str, position: usize) {
        self.by_name.insert(name.to_string(), position);
    }

    fn remove(&mut self, name: &str) -> Option<usize> {
        self.by_name.remove(name)
    }

    /// Close the gap left by removing the item at `removed`.
    fn shift_after(&mut self, removed: usize) {
        for position in self.by_name.values_mut() {
            if *position > removed {
                *position -= 1;
            }
        }
    }

    fn len(&self) -> usize {
        self.by_name.len()
    }
}

/// Unique player names.
#[derive(Debug, Clone, Default)]
pub struct PlayerIndex {
    slots: Slots,
}

impl PlayerIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `player` as living at `position`. Fails on a duplicate name.
    pub fn add(&mut self, player: &Player, position: usize) -> CasinoResult<()> {
        if self.slots.get(&player.name).is_some() {
            return Err(CasinoError::duplicate(EntityKind::Player, &player.name));
        }
        self.slots.insert(&player.name, position);
        Ok(())
    }

    /// Forget `player`, returning the position it occupied.
    pub fn remove(&mut self, player: &Player) -> CasinoResult<usize> {
        let position = self
            .slots
            .remove(&player.name)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Player, &player.name))?;
        self.slots.shift_after(position);
        Ok(position)
    }

    /// Collection position of the named player.
    pub fn position(&self, name: &str) -> CasinoResult<usize> {
        self.slots
            .get(name)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Player, name))
    }

    /// True when a player with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.get(name).is_some()
    }

    /// Resolve the named player in `players`.
    pub fn find<'a>(&self, name: &str, players: &'a Collection<Player>) -> CasinoResult<&'a Player> {
        let position = self.position(name)?;
        players
            .at(position)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Player, name))
    }

    /// Balance of the named player.
    pub fn find_balance(&self, name: &str, players: &Collection<Player>) -> CasinoResult<i64> {
        self.find(name, players).map(|p| p.balance)
    }

    /// Number of registered players.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no players are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unique goose names, partitioned by role.
///
/// Names are unique across both partitions and every lookup checks both,
/// so callers never need to know a goose's role to find it.
#[derive(Debug, Clone, Default)]
pub struct GooseIndex {
    aggressive: Slots,
    vocal: Slots,
}

impl GooseIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    fn partition_mut(&mut self, role: GooseRole) -> &mut Slots {
        match role {
            GooseRole::Aggressive => &mut self.aggressive,
            GooseRole::Vocal => &mut self.vocal,
        }
    }

    fn lookup(&self, name: &str) -> Option<(GooseRole, usize)> {
        self.aggressive
            .get(name)
            .map(|p| (GooseRole::Aggressive, p))
            .or_else(|| self.vocal.get(name).map(|p| (GooseRole::Vocal, p)))
    }

    /// Register `goose` as living at `position`. Fails if the name is taken
    /// in either partition.
    pub fn add(&mut self, goose: &Goose, position: usize) -> CasinoResult<()> {
        if self.contains(&goose.name) {
            return Err(CasinoError::duplicate(EntityKind::Goose, &goose.name));
        }
        self.partition_mut(goose.role).insert(&goose.name, position);
        Ok(())
    }

    /// Forget `goose`, returning the position it occupied.
    pub fn remove(&mut self, goose: &Goose) -> CasinoResult<usize> {
        let (role, _) = self
            .lookup(&goose.name)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Goose, &goose.name))?;
        let position = self
            .partition_mut(role)
            .remove(&goose.name)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Goose, &goose.name))?;
        self.aggressive.shift_after(position);
        self.vocal.shift_after(position);
        Ok(position)
    }

    /// Collection position of the named goose.
    pub fn position(&self, name: &str) -> CasinoResult<usize> {
        self.lookup(name)
            .map(|(_, p)| p)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Goose, name))
    }

    /// Role of the named goose.
    pub fn role(&self, name: &str) -> CasinoResult<GooseRole> {
        self.lookup(name)
            .map(|(role, _)| role)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Goose, name))
    }

    /// True when a goose with this name is registered in either partition.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Resolve the named goose in `geese`.
    pub fn find<'a>(&self, name: &str, geese: &'a Collection<Goose>) -> CasinoResult<&'a Goose> {
        let position = self.position(name)?;
        geese
            .at(position)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Goose, name))
    }

    /// Balance of the named goose.
    pub fn find_balance(&self, name: &str, geese: &Collection<Goose>) -> CasinoResult<i64> {
        self.find(name, geese).map(|g| g.balance)
    }

    /// Honk volume of the named goose.
    pub fn find_honk_volume(&self, name: &str, geese: &Collection<Goose>) -> CasinoResult<i64> {
        self.find(name, geese).map(|g| g.honk_volume)
    }

    /// Number of registered geese with the given role.
    pub fn count(&self, role: GooseRole) -> usize {
        match role {
            GooseRole::Aggressive => self.aggressive.len(),
            GooseRole::Vocal => self.vocal.len(),
        }
    }

    /// Number of registered geese.
    pub fn len(&self) -> usize {
        self.aggressive.len() + self.vocal.len()
    }

    /// True when no geese are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Chip colour -> denomination. Both colours and values are unique.
#[derive(Debug, Clone)]
pub struct ChipIndex {
    values: HashMap<String, i64>,
}

impl ChipIndex {
    /// An index holding the five standard chips.
    pub fn new() -> Self {
        let values = STANDARD_CHIPS
            .iter()
            .map(|(colour, value)| ((*colour).to_string(), *value))
            .collect();
        Self { values }
    }

    /// Register a chip. Fails if its colour or its value is already used.
    pub fn add(&mut self, chip: &Chip) -> CasinoResult<()> {
        if self.values.contains_key(&chip.colour) {
            return Err(CasinoError::duplicate(EntityKind::Chip, &chip.colour));
        }
        if self.values.values().any(|v| *v == chip.value) {
            return Err(CasinoError::duplicate(
                EntityKind::Chip,
                format!("value {}", chip.value),
            ));
        }
        self.values.insert(chip.colour.clone(), chip.value);
        Ok(())
    }

    /// Forget a chip by colour.
    pub fn remove(&mut self, chip: &Chip) -> CasinoResult<i64> {
        self.values
            .remove(&chip.colour)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Chip, &chip.colour))
    }

    /// Denomination of the chip with this colour.
    pub fn find_value(&self, colour: &str) -> CasinoResult<i64> {
        self.values
            .get(colour)
            .copied()
            .ok_or_else(|| CasinoError::not_found(EntityKind::Chip, colour))
    }

    /// True when a chip of this colour is registered.
    pub fn contains(&self, colour: &str) -> bool {
        self.values.contains_key(colour)
    }

    /// Number of registered chips.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no chips are registered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for ChipIndex {
    fn default() -> Self {
        Self::new()
    }
}

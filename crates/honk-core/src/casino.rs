use std::ops::RangeBounds;

use tracing::debug;

use crate::chip::Chip;
use crate::collection::{ChipCollection, Collection};
use crate::error::{CasinoError, CasinoResult, EntityKind};
use crate::goose::{Goose, GooseRole};
use crate::index::{ChipIndex, GooseIndex, PlayerIndex};
use crate::player::Player;

/// The casino engine. Owns every player, goose, and chip.
///
/// Each entity kind lives in an ordered collection with a parallel index
/// keyed by name (or chip colour). The engine is the only thing that
/// mutates either, and keeps them in one-to-one correspondence.
#[derive(Debug, Clone)]
pub struct Casino {
    players: Collection<Player>,
    geese: Collection<Goose>,
    chips: ChipCollection,

    // Indexes
    player_index: PlayerIndex,
    goose_index: GooseIndex,
    chip_index: ChipIndex,
}

impl Casino {
    /// An empty casino with the standard chip set.
    pub fn new() -> Self {
        Self {
            players: Collection::new(EntityKind::Player),
            geese: Collection::new(EntityKind::Goose),
            chips: ChipCollection::new(),
            player_index: PlayerIndex::new(),
            goose_index: GooseIndex::new(),
            chip_index: ChipIndex::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Add a player. On a duplicate name nothing is stored.
    pub fn add_player(&mut self, player: Player) -> CasinoResult<()> {
        self.player_index.add(&player, self.players.len())?;
        debug!(player = %player.name, balance = player.balance, "player added");
        self.players.add(player);
        Ok(())
    }

    /// Add a goose. On a duplicate name nothing is stored.
    pub fn add_goose(&mut self, goose: Goose) -> CasinoResult<()> {
        self.goose_index.add(&goose, self.geese.len())?;
        debug!(goose = %goose.name, role = %goose.role, volume = goose.honk_volume, "goose added");
        self.geese.add(goose);
        Ok(())
    }

    /// Add a chip. On a duplicate colour or value nothing is stored.
    pub fn add_chip(&mut self, chip: Chip) -> CasinoResult<()> {
        self.chip_index.add(&chip)?;
        debug!(colour = %chip.colour, value = chip.value, "chip added");
        self.chips.add(chip);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Removal (1-based positions)
    // -----------------------------------------------------------------------

    /// Remove the player at a 1-based position.
    pub fn remove_player(&mut self, position: usize) -> CasinoResult<Player> {
        let at = zero_based(EntityKind::Player, position, self.players.len())?;
        let player = self.players.remove_at(at)?;
        self.player_index.remove(&player)?;
        debug!(player = %player.name, position, "player removed");
        Ok(player)
    }

    /// Remove the goose at a 1-based position.
    pub fn remove_goose(&mut self, position: usize) -> CasinoResult<Goose> {
        let at = zero_based(EntityKind::Goose, position, self.geese.len())?;
        let goose = self.geese.remove_at(at)?;
        self.goose_index.remove(&goose)?;
        debug!(goose = %goose.name, position, "goose removed");
        Ok(goose)
    }

    /// Remove the chip at a 1-based position (chips are ordered by value).
    pub fn remove_chip(&mut self, position: usize) -> CasinoResult<Chip> {
        let at = zero_based(EntityKind::Chip, position, self.chips.len())?;
        let chip = self.chips.remove_at(at)?;
        self.chip_index.remove(&chip)?;
        debug!(colour = %chip.colour, position, "chip removed");
        Ok(chip)
    }

    /// Remove a player by name.
    pub fn remove_player_named(&mut self, name: &str) -> CasinoResult<Player> {
        let at = self.player_index.position(name)?;
        self.remove_player(at + 1)
    }

    /// Swap `old_name` out for `new`.
    ///
    /// The new goose may reuse the old one's name. If its name collides
    /// with any other goose, nothing changes. Returns the removed goose.
    pub fn replace_goose(&mut self, old_name: &str, new: Goose) -> CasinoResult<Goose> {
        let at = self.goose_index.position(old_name)?;
        if new.name != old_name && self.goose_index.contains(&new.name) {
            return Err(CasinoError::DuplicateKey {
                kind: EntityKind::Goose,
                key: new.name,
            });
        }
        let old = self.geese.remove_at(at)?;
        self.goose_index.remove(&old)?;
        debug!(old = %old.name, new = %new.name, "goose replaced");
        self.add_goose(new)?;
        Ok(old)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Find a player by name.
    pub fn find_player(&self, name: &str) -> CasinoResult<&Player> {
        self.player_index.find(name, &self.players)
    }

    /// Balance of the named player.
    pub fn find_player_balance(&self, name: &str) -> CasinoResult<i64> {
        self.player_index.find_balance(name, &self.players)
    }

    /// Find a goose by name, whatever its role.
    pub fn find_goose(&self, name: &str) -> CasinoResult<&Goose> {
        self.goose_index.find(name, &self.geese)
    }

    /// Balance (stolen earnings) of the named goose.
    pub fn find_goose_balance(&self, name: &str) -> CasinoResult<i64> {
        self.goose_index.find_balance(name, &self.geese)
    }

    /// Honk volume of the named goose.
    pub fn find_goose_honk_volume(&self, name: &str) -> CasinoResult<i64> {
        self.goose_index.find_honk_volume(name, &self.geese)
    }

    /// Role of the named goose.
    pub fn find_goose_role(&self, name: &str) -> CasinoResult<GooseRole> {
        self.goose_index.role(name)
    }

    /// Denomination of the chip with this colour.
    pub fn find_chip_value(&self, colour: &str) -> CasinoResult<i64> {
        self.chip_index.find_value(colour)
    }

    // -----------------------------------------------------------------------
    // Iteration and positional reads
    // -----------------------------------------------------------------------

    /// Players in insertion order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Geese in insertion order.
    pub fn geese(&self) -> impl Iterator<Item = &Goose> {
        self.geese.iter()
    }

    /// Geese of one role, in insertion order.
    pub fn geese_with_role(&self, role: GooseRole) -> impl Iterator<Item = &Goose> {
        self.geese.iter().filter(move |g| g.role == role)
    }

    /// Chips in ascending value order.
    pub fn chips(&self) -> impl Iterator<Item = &Chip> {
        self.chips.iter()
    }

    /// Player at a 0-based position; negative positions count from the end.
    pub fn player_at(&self, position: isize) -> Option<&Player> {
        self.players.get(position)
    }

    /// Goose at a 0-based position; negative positions count from the end.
    pub fn goose_at(&self, position: isize) -> Option<&Goose> {
        self.geese.get(position)
    }

    /// Chip at a 0-based position; negative positions count from the end.
    pub fn chip_at(&self, position: isize) -> Option<&Chip> {
        self.chips.get(position)
    }

    /// A 0-based range of players.
    pub fn player_slice<R: RangeBounds<usize>>(&self, range: R) -> Option<&[Player]> {
        self.players.slice(range)
    }

    /// A 0-based range of geese.
    pub fn goose_slice<R: RangeBounds<usize>>(&self, range: R) -> Option<&[Goose]> {
        self.geese.slice(range)
    }

    /// A 0-based range of chips.
    pub fn chip_slice<R: RangeBounds<usize>>(&self, range: R) -> Option<&[Chip]> {
        self.chips.slice(range)
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of geese.
    pub fn goose_count(&self) -> usize {
        self.geese.len()
    }

    /// Number of chips in play.
    pub fn chip_count(&self) -> usize {
        self.chips.len()
    }

    // -----------------------------------------------------------------------
    // Internal mutation
    // -----------------------------------------------------------------------

    pub(crate) fn player_mut(&mut self, name: &str) -> CasinoResult<&mut Player> {
        let at = self.player_index.position(name)?;
        self.players
            .get_mut(at)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Player, name))
    }

    pub(crate) fn goose_mut(&mut self, name: &str) -> CasinoResult<&mut Goose> {
        let at = self.goose_index.position(name)?;
        self.geese
            .get_mut(at)
            .ok_or_else(|| CasinoError::not_found(EntityKind::Goose, name))
    }

    pub(crate) fn chip_collection(&self) -> &ChipCollection {
        &self.chips
    }
}

impl Default for Casino {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate an external 1-based position.
fn zero_based(kind: EntityKind, position: usize, len: usize) -> CasinoResult<usize> {
    if len == 0 {
        return Err(CasinoError::EmptyCollection(kind));
    }
    if position == 0 || position > len {
        return Err(CasinoError::PositionOutOfRange {
            kind,
            position,
            len,
        });
    }
    Ok(position - 1)
}

//! The stochastic actions: chip theft, scare-honks, and roulette.
//!
//! Goose actions move money from a player to a goose and never create or
//! destroy it. Player balances are not floored at zero here; bankruptcy is
//! the driving loop's concern.

use tracing::{debug, info, warn};

use crate::casino::Casino;
use crate::chip::Chip;
use crate::error::{CasinoError, CasinoResult, EntityKind};
use crate::goose::GooseRole;
use crate::random::RandomSource;
use crate::roulette::{MAX_POCKET, MIN_POCKET, Spin, Wager};

impl Casino {
    /// A war goose tries to steal from a player.
    ///
    /// On success a chip is drawn uniformly from the whole chip set and its
    /// value moves from the player to the goose. The magnitude rolled by
    /// the goose only decides success.
    pub fn steal<R: RandomSource + ?Sized>(
        &mut self,
        goose_name: &str,
        player_name: &str,
        rng: &mut R,
    ) -> CasinoResult<Chip> {
        let goose = self.find_goose(goose_name)?;
        self.find_player(player_name)?;
        let magnitude = goose.attempt_theft(rng)?;
        if magnitude == 0 {
            debug!(goose = goose_name, player = player_name, "theft failed");
            return Err(CasinoError::ActionFailed(format!(
                "{goose_name} lost its balance and could not steal a chip"
            )));
        }

        let chips = self.chip_collection();
        if chips.is_empty() {
            return Err(CasinoError::EmptyCollection(EntityKind::Chip));
        }
        let last = i64::try_from(chips.len() - 1).unwrap_or(i64::MAX);
        let drawn = rng.roll(0, last);
        let chip = usize::try_from(drawn)
            .ok()
            .and_then(|i| chips.iter().nth(i))
            .cloned()
            .ok_or(CasinoError::PositionOutOfRange {
                kind: EntityKind::Chip,
                position: usize::try_from(drawn).unwrap_or(0),
                len: chips.len(),
            })?;

        self.transfer(player_name, goose_name, chip.value)?;
        info!(
            goose = goose_name,
            player = player_name,
            chip = %chip.colour,
            amount = chip.value,
            "chip stolen"
        );
        Ok(chip)
    }

    /// A honk goose tries to scare a player out of its honk volume.
    ///
    /// Returns the amount taken.
    pub fn honk<R: RandomSource + ?Sized>(
        &mut self,
        goose_name: &str,
        player_name: &str,
        rng: &mut R,
    ) -> CasinoResult<i64> {
        let goose = self.find_goose(goose_name)?;
        self.find_player(player_name)?;
        if goose.attempt_honk(rng)? == 0 {
            debug!(goose = goose_name, player = player_name, "honk failed");
            return Err(CasinoError::ActionFailed(format!(
                "{goose_name} lost its balance and honked the wrong way"
            )));
        }

        let amount = goose.honk_volume;
        self.transfer(player_name, goose_name, amount)?;
        info!(goose = goose_name, player = player_name, amount, "player scared");
        Ok(amount)
    }

    /// Dispatch on the goose's role: war geese steal, honk geese scare.
    ///
    /// Returns the amount taken from the player.
    pub fn goose_action<R: RandomSource + ?Sized>(
        &mut self,
        goose_name: &str,
        player_name: &str,
        rng: &mut R,
    ) -> CasinoResult<i64> {
        match self.find_goose_role(goose_name)? {
            GooseRole::Aggressive => self.steal(goose_name, player_name, rng).map(|c| c.value),
            GooseRole::Vocal => self.honk(goose_name, player_name, rng),
        }
    }

    /// Place a roulette bet.
    ///
    /// The stake is taken before the wager is checked, so an invalid wager
    /// still costs the stake. A straight number credits 35x the stake on a
    /// hit; any outside call credits 2x the stake on an odd pocket. A win
    /// whose payout would overflow the balance is rejected with
    /// [`CasinoError::BalanceOverflow`] and leaves the balance untouched.
    pub fn place_bet<R: RandomSource + ?Sized>(
        &mut self,
        player_name: &str,
        stake: i64,
        wager: impl Into<Wager>,
        rng: &mut R,
    ) -> CasinoResult<Spin> {
        let wager = wager.into();
        let player = self.player_mut(player_name)?;
        if stake < 0 {
            return Err(CasinoError::InvalidStake(stake));
        }
        if stake > player.balance {
            return Err(CasinoError::InsufficientBalance {
                stake,
                balance: player.balance,
            });
        }
        // 0 <= stake <= balance, so this cannot underflow
        let after_stake = player.balance - stake;

        let bet = match wager.resolve() {
            Ok(bet) => bet,
            Err(e) => {
                player.balance = after_stake;
                warn!(player = player_name, stake, %wager, "stake forfeited on invalid wager");
                return Err(e);
            }
        };

        let pocket = rng.roll(MIN_POCKET, MAX_POCKET);
        let won = bet.wins(pocket);
        let overflow = || CasinoError::BalanceOverflow {
            name: player_name.to_string(),
        };
        let payout = if won {
            stake.checked_mul(bet.payout_multiplier()).ok_or_else(overflow)?
        } else {
            0
        };
        player.balance = after_stake.checked_add(payout).ok_or_else(overflow)?;
        info!(
            player = player_name,
            stake,
            %wager,
            pocket,
            won,
            balance = player.balance,
            "roulette spin"
        );
        Ok(Spin {
            pocket,
            won,
            payout,
        })
    }

    /// Move `amount` from a player to a goose. Both new balances are checked
    /// before either is written.
    fn transfer(&mut self, player_name: &str, goose_name: &str, amount: i64) -> CasinoResult<()> {
        let player_after = self
            .find_player_balance(player_name)?
            .checked_sub(amount)
            .ok_or_else(|| CasinoError::BalanceOverflow {
                name: player_name.to_string(),
            })?;
        let goose_after = self
            .find_goose_balance(goose_name)?
            .checked_add(amount)
            .ok_or_else(|| CasinoError::BalanceOverflow {
                name: goose_name.to_string(),
            })?;
        self.player_mut(player_name)?.balance = player_after;
        self.goose_mut(goose_name)?.balance = goose_after;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goose::Goose;
    use crate::player::Player;
    use crate::random::ScriptedRolls;

    fn casino() -> Casino {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Alice", 1000)).unwrap();
        casino.add_goose(Goose::war("Gus", 50)).unwrap();
        casino.add_goose(Goose::honk("Loud", 8)).unwrap();
        casino
    }

    #[test]
    fn steal_red_chip() {
        let mut casino = casino();
        // success roll, discarded magnitude, chip index 3 = red
        let mut rolls = ScriptedRolls::new([1, 64, 3]);
        let chip = casino.steal("Gus", "Alice", &mut rolls).unwrap();
        assert_eq!(chip, Chip::new("red", 25));
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 975);
        assert_eq!(casino.find_goose_balance("Gus").unwrap(), 25);
    }

    #[test]
    fn failed_steal_changes_nothing() {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Alice", 1000)).unwrap();
        casino.add_goose(Goose::war("Meek", 0)).unwrap();
        let mut rolls = ScriptedRolls::new([30]);
        let err = casino.steal("Meek", "Alice", &mut rolls).unwrap_err();
        assert!(matches!(err, CasinoError::ActionFailed(_)));
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1000);
        assert_eq!(casino.find_goose_balance("Meek").unwrap(), 0);
    }

    #[test]
    fn steal_can_push_balance_negative() {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Broke", 10)).unwrap();
        casino.add_goose(Goose::war("Gus", 50)).unwrap();
        let mut rolls = ScriptedRolls::new([1, 1, 4]);
        casino.steal("Gus", "Broke", &mut rolls).unwrap();
        assert_eq!(casino.find_player_balance("Broke").unwrap(), -40);
    }

    #[test]
    fn steal_requires_war_goose() {
        let mut casino = casino();
        let err = casino
            .steal("Loud", "Alice", &mut ScriptedRolls::default())
            .unwrap_err();
        assert!(matches!(err, CasinoError::WrongActor { .. }));
    }

    #[test]
    fn steal_unknown_actors() {
        let mut casino = casino();
        let mut rolls = ScriptedRolls::default();
        assert!(matches!(
            casino.steal("Nobody", "Alice", &mut rolls),
            Err(CasinoError::KeyNotFound { kind: EntityKind::Goose, .. })
        ));
        assert!(matches!(
            casino.steal("Gus", "Nobody", &mut rolls),
            Err(CasinoError::KeyNotFound { kind: EntityKind::Player, .. })
        ));
    }

    #[test]
    fn steal_with_no_chips_left() {
        let mut casino = casino();
        for _ in 0..5 {
            casino.remove_chip(1).unwrap();
        }
        let err = casino
            .steal("Gus", "Alice", &mut ScriptedRolls::new([1, 1]))
            .unwrap_err();
        assert_eq!(err, CasinoError::EmptyCollection(EntityKind::Chip));
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1000);
    }

    #[test]
    fn honk_takes_volume() {
        let mut casino = casino();
        let amount = casino
            .honk("Loud", "Alice", &mut ScriptedRolls::new([90]))
            .unwrap();
        assert_eq!(amount, 8);
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 992);
        assert_eq!(casino.find_goose_balance("Loud").unwrap(), 8);
    }

    #[test]
    fn failed_honk_changes_nothing() {
        let mut casino = casino();
        let err = casino
            .honk("Loud", "Alice", &mut ScriptedRolls::new([20]))
            .unwrap_err();
        assert!(matches!(err, CasinoError::ActionFailed(_)));
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1000);
        assert_eq!(casino.find_goose_balance("Loud").unwrap(), 0);
    }

    #[test]
    fn honk_requires_honk_goose() {
        let mut casino = casino();
        assert!(matches!(
            casino.honk("Gus", "Alice", &mut ScriptedRolls::default()),
            Err(CasinoError::WrongActor { expected: GooseRole::Vocal, .. })
        ));
    }

    #[test]
    fn goose_action_dispatches_on_role() {
        let mut casino = casino();
        let taken = casino
            .goose_action("Gus", "Alice", &mut ScriptedRolls::new([1, 5, 0]))
            .unwrap();
        assert_eq!(taken, 1);
        let taken = casino
            .goose_action("Loud", "Alice", &mut ScriptedRolls::new([50]))
            .unwrap();
        assert_eq!(taken, 8);
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 991);
    }

    #[test]
    fn straight_hit_pays_35x() {
        let mut casino = casino();
        let spin = casino
            .place_bet("Alice", 100, 7_i64, &mut ScriptedRolls::new([7]))
            .unwrap();
        assert!(spin.won);
        assert_eq!(spin.payout, 3500);
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 4400);
    }

    #[test]
    fn straight_miss_loses_stake() {
        let mut casino = casino();
        let spin = casino
            .place_bet("Alice", 100, 7_i64, &mut ScriptedRolls::new([8]))
            .unwrap();
        assert!(!spin.won);
        assert_eq!(spin.pocket, 8);
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 900);
    }

    #[test]
    fn out_of_range_number_forfeits_stake() {
        let mut casino = casino();
        let err = casino
            .place_bet("Alice", 100, 50_i64, &mut ScriptedRolls::default())
            .unwrap_err();
        assert!(matches!(err, CasinoError::InvalidWager(_)));
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 900);
    }

    #[test]
    fn unknown_token_forfeits_stake() {
        let mut casino = casino();
        let err = casino
            .place_bet("Alice", 40, "dozen", &mut ScriptedRolls::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "make a valid bet");
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 960);
    }

    #[test]
    fn outside_bets_win_on_odd_pockets() {
        let mut casino = casino();
        let spin = casino
            .place_bet("Alice", 100, "black", &mut ScriptedRolls::new([3]))
            .unwrap();
        assert!(spin.won);
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1100);

        let spin = casino
            .place_bet("Alice", 100, "even", &mut ScriptedRolls::new([4]))
            .unwrap();
        assert!(!spin.won);
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1000);
    }

    #[test]
    fn stake_above_balance_rejected_without_deduction() {
        let mut casino = casino();
        let err = casino
            .place_bet("Alice", 1001, 7_i64, &mut ScriptedRolls::default())
            .unwrap_err();
        assert_eq!(
            err,
            CasinoError::InsufficientBalance {
                stake: 1001,
                balance: 1000
            }
        );
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1000);
    }

    #[test]
    fn whole_balance_may_be_staked() {
        let mut casino = casino();
        casino
            .place_bet("Alice", 1000, 0_i64, &mut ScriptedRolls::new([1]))
            .unwrap();
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 0);
    }

    #[test]
    fn negative_stake_rejected() {
        let mut casino = casino();
        assert_eq!(
            casino.place_bet("Alice", -5, 7_i64, &mut ScriptedRolls::default()),
            Err(CasinoError::InvalidStake(-5))
        );
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1000);
    }

    #[test]
    fn zero_stake_spins_for_nothing() {
        let mut casino = casino();
        let spin = casino
            .place_bet("Alice", 0, 7_i64, &mut ScriptedRolls::new([7]))
            .unwrap();
        assert!(spin.won);
        assert_eq!(spin.payout, 0);
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1000);
    }

    #[test]
    fn whole_balance_on_outside_bet() {
        let mut casino = casino();
        let spin = casino
            .place_bet("Alice", 1000, "odd", &mut ScriptedRolls::new([9]))
            .unwrap();
        assert!(spin.won);
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 2000);

        casino
            .place_bet("Alice", 2000, "red", &mut ScriptedRolls::new([0]))
            .unwrap();
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 0);
    }

    #[test]
    fn huge_straight_payout_overflows_without_change() {
        let mut casino = Casino::new();
        let rich = i64::MAX / 10;
        casino.add_player(Player::new("Rich", rich)).unwrap();
        let err = casino
            .place_bet("Rich", rich, 7_i64, &mut ScriptedRolls::new([7]))
            .unwrap_err();
        assert_eq!(err, CasinoError::BalanceOverflow { name: "Rich".into() });
        assert_eq!(casino.find_player_balance("Rich").unwrap(), rich);
    }

    #[test]
    fn huge_stake_that_loses_is_fine() {
        let mut casino = Casino::new();
        let rich = i64::MAX / 10;
        casino.add_player(Player::new("Rich", rich)).unwrap();
        let spin = casino
            .place_bet("Rich", rich, 7_i64, &mut ScriptedRolls::new([8]))
            .unwrap();
        assert!(!spin.won);
        assert_eq!(casino.find_player_balance("Rich").unwrap(), 0);
    }

    #[test]
    fn outside_payout_at_max_balance() {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Max", i64::MAX)).unwrap();
        let err = casino
            .place_bet("Max", i64::MAX, "odd", &mut ScriptedRolls::new([1]))
            .unwrap_err();
        assert!(matches!(err, CasinoError::BalanceOverflow { .. }));
        assert_eq!(casino.find_player_balance("Max").unwrap(), i64::MAX);
    }

    #[test]
    fn steal_from_deep_debt_overflows_without_change() {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Debtor", i64::MIN + 10)).unwrap();
        casino.add_goose(Goose::war("Gus", 50)).unwrap();
        // success, magnitude, chip index 4 = black (50)
        let err = casino
            .steal("Gus", "Debtor", &mut ScriptedRolls::new([1, 1, 4]))
            .unwrap_err();
        assert_eq!(err, CasinoError::BalanceOverflow { name: "Debtor".into() });
        assert_eq!(casino.find_player_balance("Debtor").unwrap(), i64::MIN + 10);
        assert_eq!(casino.find_goose_balance("Gus").unwrap(), 0);
    }

    #[test]
    fn honk_into_full_goose_overflows_without_change() {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Alice", 1000)).unwrap();
        let mut goose = Goose::honk("Loud", 8);
        goose.balance = i64::MAX - 3;
        casino.add_goose(goose).unwrap();
        let err = casino
            .honk("Loud", "Alice", &mut ScriptedRolls::new([99]))
            .unwrap_err();
        assert_eq!(err, CasinoError::BalanceOverflow { name: "Loud".into() });
        assert_eq!(casino.find_player_balance("Alice").unwrap(), 1000);
        assert_eq!(casino.find_goose_balance("Loud").unwrap(), i64::MAX - 3);
    }
}

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use honk_core::roulette::{MAX_POCKET, MIN_POCKET};
use honk_core::{Casino, GooseRole, OutsideBet, RandomSource, Wager};

use crate::config::SimConfig;
use crate::event::{Action, EventLog, SimEvent, SimEventKind};
use crate::roster::random_goose;

/// Lowest number used when naming a replacement goose.
const REPLACEMENT_NAME_MIN: i64 = 100;
/// Highest number used when naming a replacement goose.
const REPLACEMENT_NAME_MAX: i64 = 10_000;

/// How a game ended, if it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Play continues.
    Undecided,
    /// Every player went bankrupt.
    GeeseWin,
    /// A player reached the victory threshold.
    PlayerWin {
        /// The winner.
        name: String,
        /// Their balance at the end of the deciding round.
        balance: i64,
    },
}

impl Verdict {
    /// True once the game is over.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Undecided)
    }
}

/// The round driver.
///
/// Owns the casino, one seeded RNG for every random decision, and the
/// event log. Each round draws one action, performs it, then removes
/// bankrupt players and checks for a winner.
pub struct Simulation {
    casino: Casino,
    config: SimConfig,
    rng: StdRng,
    events: EventLog,
    round: u64,
    verdict: Verdict,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("round", &self.round)
            .field("players", &self.casino.player_count())
            .field("geese", &self.casino.goose_count())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Create a new simulation over a seated casino.
    pub fn new(casino: Casino, config: SimConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let events = EventLog::new(config.max_events);
        Self {
            casino,
            config,
            rng,
            events,
            round: 0,
            verdict: Verdict::Undecided,
        }
    }

    /// Play one round. Does nothing once a verdict has been reached.
    pub fn step(&mut self) -> Verdict {
        if self.verdict.is_decided() {
            return self.verdict.clone();
        }
        if self.casino.player_count() == 0 {
            return self.settle();
        }

        self.round += 1;
        let action = Action::ALL[pick(&mut self.rng, Action::ALL.len()).unwrap_or(0)];
        debug!(round = self.round, %action, "round started");
        self.play(action);
        self.settle()
    }

    /// Play rounds until a verdict or the round limit.
    pub fn run(&mut self) -> Verdict {
        while self.round < self.config.max_rounds {
            let verdict = self.step();
            if verdict.is_decided() {
                return verdict;
            }
        }
        self.verdict.clone()
    }

    /// Perform one action with randomly chosen actors, recording its outcome.
    pub fn play(&mut self, action: Action) {
        let (kind, description) = match action {
            Action::WarGooseAttack => self.goose_attack(GooseRole::Aggressive),
            Action::HonkGooseScare => self.goose_attack(GooseRole::Vocal),
            Action::ReplaceGoose => self.replace_goose(),
            Action::PlayerBet => self.player_bet(),
        };
        self.emit(kind, description);
    }

    /// Remove bankrupt players, then check whether the game is over.
    pub fn settle(&mut self) -> Verdict {
        let bankrupt: Vec<(String, i64)> = self
            .casino
            .players()
            .filter(|p| p.is_bankrupt())
            .map(|p| (p.name.clone(), p.balance))
            .collect();
        for (name, balance) in bankrupt {
            if self.casino.remove_player_named(&name).is_ok() {
                info!(player = %name, balance, "player bankrupt");
                self.emit(
                    SimEventKind::Bankrupt {
                        player: name.clone(),
                        balance,
                    },
                    format!("{name} went bankrupt at {balance}"),
                );
            }
        }

        let threshold = self.config.victory_threshold;
        let winner = self
            .casino
            .players()
            .find(|p| p.balance >= threshold)
            .map(|p| (p.name.clone(), p.balance));

        if self.casino.player_count() == 0 {
            self.verdict = Verdict::GeeseWin;
            self.emit(SimEventKind::GeeseWon, "the geese won: every player is bankrupt");
        } else if let Some((name, balance)) = winner {
            self.verdict = Verdict::PlayerWin {
                name: name.clone(),
                balance,
            };
            self.emit(
                SimEventKind::PlayerWon {
                    player: name.clone(),
                    balance,
                },
                format!("{name} won with a balance of {balance}"),
            );
        }

        if self.verdict.is_decided() {
            info!(round = self.round, verdict = ?self.verdict, "game over");
        }
        self.verdict.clone()
    }

    fn goose_attack(&mut self, role: GooseRole) -> (SimEventKind, String) {
        let action = match role {
            GooseRole::Aggressive => Action::WarGooseAttack,
            GooseRole::Vocal => Action::HonkGooseScare,
        };
        let geese: Vec<String> = self
            .casino
            .geese_with_role(role)
            .map(|g| g.name.clone())
            .collect();
        let Some(goose) = self.choose(&geese) else {
            return (SimEventKind::NoActor { action }, format!("no {role} available"));
        };
        let players = self.player_names();
        let Some(player) = self.choose(&players) else {
            return (SimEventKind::NoActor { action }, "no players to target".into());
        };

        match role {
            GooseRole::Aggressive => match self.casino.steal(&goose, &player, &mut self.rng) {
                Ok(chip) => {
                    let description =
                        format!("{goose} stole a {} chip worth {} from {player}", chip.colour, chip.value);
                    (
                        SimEventKind::ChipStolen {
                            goose,
                            player,
                            chip: chip.colour,
                            amount: chip.value,
                        },
                        description,
                    )
                }
                Err(e) => failed(action, e.to_string()),
            },
            GooseRole::Vocal => match self.casino.honk(&goose, &player, &mut self.rng) {
                Ok(amount) => {
                    let description = format!("{goose} scared {player} out of {amount}");
                    (
                        SimEventKind::PlayerScared {
                            goose,
                            player,
                            amount,
                        },
                        description,
                    )
                }
                Err(e) => failed(action, e.to_string()),
            },
        }
    }

    fn replace_goose(&mut self) -> (SimEventKind, String) {
        let action = Action::ReplaceGoose;
        let geese: Vec<String> = self.casino.geese().map(|g| g.name.clone()).collect();
        let Some(old) = self.choose(&geese) else {
            return (SimEventKind::NoActor { action }, "no geese to replace".into());
        };
        let number = self.rng.roll(REPLACEMENT_NAME_MIN, REPLACEMENT_NAME_MAX);
        let new = random_goose(format!("Goose{number}"), &mut self.rng);
        let new_name = new.name.clone();
        let new_role = new.role;

        match self.casino.replace_goose(&old, new) {
            Ok(_) => {
                let description = format!("{old} was replaced by {new_role} {new_name}");
                (SimEventKind::GooseReplaced { old, new: new_name }, description)
            }
            Err(e) => failed(action, e.to_string()),
        }
    }

    fn player_bet(&mut self) -> (SimEventKind, String) {
        let action = Action::PlayerBet;
        let players = self.player_names();
        let Some(player) = self.choose(&players) else {
            return (SimEventKind::NoActor { action }, "no players to bet".into());
        };
        let balance = self.casino.find_player_balance(&player).unwrap_or(0);
        let stake = self.rng.roll(1, balance.max(1));
        let wager = if self.rng.roll(0, 1) == 0 {
            Wager::Straight(self.rng.roll(MIN_POCKET, MAX_POCKET))
        } else {
            let call = OutsideBet::ALL[pick(&mut self.rng, OutsideBet::ALL.len()).unwrap_or(0)];
            Wager::Outside(call.to_string())
        };
        let wager_label = wager.to_string();

        match self.casino.place_bet(&player, stake, wager, &mut self.rng) {
            Ok(spin) => {
                let outcome = if spin.won { "won" } else { "lost" };
                let description = format!(
                    "{player} bet {stake} on {wager_label}, ball landed on {}: {outcome}",
                    spin.pocket
                );
                (
                    SimEventKind::BetPlaced {
                        player,
                        stake,
                        wager: wager_label,
                        pocket: spin.pocket,
                        won: spin.won,
                    },
                    description,
                )
            }
            Err(e) => failed(action, e.to_string()),
        }
    }

    fn emit(&mut self, kind: SimEventKind, description: impl Into<String>) {
        self.events.push(SimEvent::new(self.round, kind, description));
    }

    fn player_names(&self) -> Vec<String> {
        self.casino.players().map(|p| p.name.clone()).collect()
    }

    fn choose(&mut self, names: &[String]) -> Option<String> {
        pick(&mut self.rng, names.len()).and_then(|i| names.get(i).cloned())
    }

    /// The casino being played.
    pub fn casino(&self) -> &Casino {
        &self.casino
    }

    /// Mutable access to the casino, for seating players mid-game.
    pub fn casino_mut(&mut self) -> &mut Casino {
        &mut self.casino
    }

    /// The run configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Everything recorded so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Rounds played.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// The current verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Extract the casino, consuming the simulation.
    pub fn into_casino(self) -> Casino {
        self.casino
    }
}

/// Uniform index into a sequence of `len` items.
fn pick<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    let last = i64::try_from(len.checked_sub(1)?).ok()?;
    usize::try_from(rng.roll(0, last)).ok()
}

fn failed(action: Action, reason: String) -> (SimEventKind, String) {
    let description = format!("{action} failed: {reason}");
    (SimEventKind::ActionFailed { action, reason }, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use honk_core::{Goose, Player};

    fn casino() -> Casino {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Alice", 100)).unwrap();
        casino.add_player(Player::new("Bob", 60)).unwrap();
        casino.add_goose(Goose::war("Gus", 5)).unwrap();
        casino.add_goose(Goose::honk("Loud", 8)).unwrap();
        casino
    }

    fn descriptions(sim: &Simulation) -> Vec<String> {
        sim.events()
            .events()
            .iter()
            .map(|e| e.description.clone())
            .collect()
    }

    #[test]
    fn every_round_records_an_event() {
        let mut sim = Simulation::new(casino(), SimConfig::default());
        sim.step();
        assert_eq!(sim.round(), 1);
        assert!(!sim.events().events_in_round(1).is_empty());
    }

    #[test]
    fn deterministic_rng() {
        let run = |seed| {
            let mut sim = Simulation::new(casino(), SimConfig::default().with_seed(seed));
            let verdict = sim.run();
            (descriptions(&sim), verdict, sim.round())
        };
        assert_eq!(run(123), run(123));
    }

    #[test]
    fn no_players_means_geese_win() {
        let mut casino = Casino::new();
        casino.add_goose(Goose::war("Gus", 5)).unwrap();
        let mut sim = Simulation::new(casino, SimConfig::default());
        assert_eq!(sim.step(), Verdict::GeeseWin);
        assert_eq!(sim.round(), 0);
    }

    #[test]
    fn settle_removes_bankrupt_players() {
        let mut casino = casino();
        casino.add_player(Player::new("Broke", 0)).unwrap();
        casino.add_player(Player::new("Debt", -12)).unwrap();
        let mut sim = Simulation::new(casino, SimConfig::default());

        assert_eq!(sim.settle(), Verdict::Undecided);
        assert_eq!(sim.casino().player_count(), 2);
        assert!(sim.casino().find_player("Broke").is_err());
        let bankrupt = sim.events().events_for("Debt");
        assert_eq!(bankrupt.len(), 1);
        assert_eq!(
            bankrupt[0].kind,
            SimEventKind::Bankrupt {
                player: "Debt".into(),
                balance: -12
            }
        );
    }

    #[test]
    fn settle_geese_win_when_all_bankrupt() {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Broke", 0)).unwrap();
        let mut sim = Simulation::new(casino, SimConfig::default());
        assert_eq!(sim.settle(), Verdict::GeeseWin);
        assert!(sim.verdict().is_decided());
        // Further rounds are not played
        assert_eq!(sim.step(), Verdict::GeeseWin);
        assert_eq!(sim.round(), 0);
    }

    #[test]
    fn settle_player_reaches_threshold() {
        let mut sim = Simulation::new(casino(), SimConfig::default().with_victory_threshold(100));
        assert_eq!(
            sim.settle(),
            Verdict::PlayerWin {
                name: "Alice".into(),
                balance: 100
            }
        );
    }

    #[test]
    fn zero_rounds_is_undecided() {
        let mut sim = Simulation::new(casino(), SimConfig::default().with_max_rounds(0));
        assert_eq!(sim.run(), Verdict::Undecided);
        assert!(sim.events().is_empty());
    }

    #[test]
    fn run_respects_round_limit() {
        let mut sim = Simulation::new(casino(), SimConfig::default().with_max_rounds(5));
        let verdict = sim.run();
        assert!(sim.round() <= 5);
        if !verdict.is_decided() {
            assert_eq!(sim.round(), 5);
        }
    }

    #[test]
    fn attack_without_war_geese_is_skipped() {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Alice", 100)).unwrap();
        casino.add_goose(Goose::honk("Loud", 8)).unwrap();
        let mut sim = Simulation::new(casino, SimConfig::default());
        sim.play(Action::WarGooseAttack);
        assert_eq!(
            sim.events().events()[0].kind,
            SimEventKind::NoActor {
                action: Action::WarGooseAttack
            }
        );
        assert_eq!(sim.casino().find_player_balance("Alice").unwrap(), 100);
    }

    #[test]
    fn replacement_keeps_goose_count() {
        let mut casino = Casino::new();
        casino.add_player(Player::new("Alice", 100)).unwrap();
        casino.add_goose(Goose::war("Gus", 5)).unwrap();
        let mut sim = Simulation::new(casino, SimConfig::default());
        sim.play(Action::ReplaceGoose);

        assert_eq!(sim.casino().goose_count(), 1);
        let goose = sim.casino().goose_at(0).unwrap();
        assert!(goose.name.starts_with("Goose"));
        assert!(matches!(
            sim.events().events()[0].kind,
            SimEventKind::GooseReplaced { ref old, .. } if old == "Gus"
        ));
    }

    #[test]
    fn generated_bets_are_always_accepted() {
        let mut sim = Simulation::new(casino(), SimConfig::default().with_seed(9));
        for _ in 0..20 {
            sim.play(Action::PlayerBet);
            if sim.settle().is_decided() {
                break;
            }
        }
        for event in sim.events().events() {
            assert!(
                !matches!(event.kind, SimEventKind::ActionFailed { .. }),
                "{}",
                event.description
            );
        }
    }

    #[test]
    fn goose_actions_conserve_money() {
        let mut sim = Simulation::new(casino(), SimConfig::default().with_seed(77));
        for _ in 0..30 {
            sim.play(Action::WarGooseAttack);
            sim.play(Action::HonkGooseScare);
        }
        let players: i64 = sim.casino().players().map(|p| p.balance).sum();
        let geese: i64 = sim.casino().geese().map(|g| g.balance).sum();
        assert_eq!(players + geese, 160);
    }
}

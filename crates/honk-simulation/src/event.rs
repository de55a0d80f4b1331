use std::fmt;

/// One of the four things that can happen in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// A random war goose tries to steal from a random player.
    WarGooseAttack,
    /// A random honk goose tries to scare a random player.
    HonkGooseScare,
    /// A random goose is swapped for a freshly generated one.
    ReplaceGoose,
    /// A random player places a random roulette bet.
    PlayerBet,
}

impl Action {
    /// All actions, in the order they are numbered when drawn.
    pub const ALL: [Action; 4] = [
        Action::WarGooseAttack,
        Action::HonkGooseScare,
        Action::ReplaceGoose,
        Action::PlayerBet,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WarGooseAttack => write!(f, "war goose attack"),
            Self::HonkGooseScare => write!(f, "honk goose scare"),
            Self::ReplaceGoose => write!(f, "goose replacement"),
            Self::PlayerBet => write!(f, "player bet"),
        }
    }
}

/// What kind of simulation event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEventKind {
    // Actions
    /// A war goose took a chip's value from a player.
    ChipStolen {
        /// The thief.
        goose: String,
        /// The victim.
        player: String,
        /// Colour of the chip drawn.
        chip: String,
        /// Value moved.
        amount: i64,
    },
    /// A honk goose scared money out of a player.
    PlayerScared {
        /// The goose that honked.
        goose: String,
        /// The victim.
        player: String,
        /// Value moved.
        amount: i64,
    },
    /// A goose was swapped out.
    GooseReplaced {
        /// Name of the removed goose.
        old: String,
        /// Name of the new goose.
        new: String,
    },
    /// A roulette spin resolved.
    BetPlaced {
        /// The bettor.
        player: String,
        /// Amount staked.
        stake: i64,
        /// What was bet on.
        wager: String,
        /// Where the ball landed.
        pocket: i64,
        /// Whether the bet won.
        won: bool,
    },
    /// The chosen action was rejected by the casino.
    ActionFailed {
        /// The action attempted.
        action: Action,
        /// The casino's reason.
        reason: String,
    },
    /// Nobody was available to perform the chosen action.
    NoActor {
        /// The action that was skipped.
        action: Action,
    },

    // Outcomes
    /// A player's balance dropped to zero or below and they left.
    Bankrupt {
        /// The departing player.
        player: String,
        /// Balance at departure.
        balance: i64,
    },
    /// A player reached the victory threshold.
    PlayerWon {
        /// The winner.
        player: String,
        /// Winning balance.
        balance: i64,
    },
    /// Every player went bankrupt.
    GeeseWon,
}

impl SimEventKind {
    /// Check whether a named player or goose is involved in this event.
    pub fn involves(&self, name: &str) -> bool {
        match self {
            Self::ChipStolen { goose, player, .. } | Self::PlayerScared { goose, player, .. } => {
                goose == name || player == name
            }
            Self::GooseReplaced { old, new } => old == name || new == name,
            Self::BetPlaced { player, .. }
            | Self::Bankrupt { player, .. }
            | Self::PlayerWon { player, .. } => player == name,
            Self::ActionFailed { .. } | Self::NoActor { .. } | Self::GeeseWon => false,
        }
    }
}

/// A record of something that happened during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    /// The round in which this event occurred.
    pub round: u64,
    /// The specific kind of event that occurred.
    pub kind: SimEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl SimEvent {
    /// Create a new simulation event with the given round, kind, and description.
    pub fn new(round: u64, kind: SimEventKind, description: impl Into<String>) -> Self {
        Self {
            round,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a simulation run.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Return all events that occurred in the given round.
    pub fn events_in_round(&self, round: u64) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.round == round).collect()
    }

    /// Return all events involving the named player or goose.
    pub fn events_for(&self, name: &str) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| e.kind.involves(name)).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

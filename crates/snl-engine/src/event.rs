//! Game events and the event log.
//!
//! Every observable rules outcome is recorded as a [`GameEvent`] with a
//! human-readable description, which doubles as the message line a
//! renderer shows next to the board.

use std::time::Duration;

use serde::Serialize;
use snl_board::Cell;

use crate::dice::DiceRoll;
use crate::player::Player;

/// What kind of game event occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEventKind {
    // Entry
    /// A pawn entered the board on the entry cell.
    Entered {
        /// The player whose pawn entered.
        player: Player,
    },
    /// An entry roll failed; the roll is wasted and the turn passes.
    EntryRollFailed {
        /// The player who rolled.
        player: Player,
        /// The wasted roll.
        roll: DiceRoll,
    },

    // Movement
    /// The roll would overshoot the final cell; the pawn stays put.
    Overshot {
        /// The player who rolled.
        player: Player,
        /// The cell the pawn stays on.
        from: Cell,
        /// The roll that overshot.
        roll: DiceRoll,
    },
    /// The pawn moved to a plain cell.
    Moved {
        /// The player who moved.
        player: Player,
        /// The cell the pawn landed on.
        to: Cell,
    },

    // Transits
    /// The pawn landed on a snake head and will slide down.
    SnakeBitten {
        /// The player who landed.
        player: Player,
        /// The snake's head (landing) cell.
        head: Cell,
        /// The snake's tail, where the pawn will end up.
        tail: Cell,
    },
    /// The pawn landed on a ladder bottom and will climb up.
    LadderClimbed {
        /// The player who landed.
        player: Player,
        /// The ladder's bottom (landing) cell.
        bottom: Cell,
        /// The ladder's top, where the pawn will end up.
        top: Cell,
    },

    // Turn flow
    /// A six keeps the turn: the same player rolls again.
    BonusRoll {
        /// The player who keeps the turn.
        player: Player,
    },
    /// The player reached the final cell and won.
    Won {
        /// The winner.
        player: Player,
    },
}

impl GameEventKind {
    /// The player this event belongs to.
    pub fn player(&self) -> Player {
        match self {
            Self::Entered { player }
            | Self::EntryRollFailed { player, .. }
            | Self::Overshot { player, .. }
            | Self::Moved { player, .. }
            | Self::SnakeBitten { player, .. }
            | Self::LadderClimbed { player, .. }
            | Self::BonusRoll { player }
            | Self::Won { player } => *player,
        }
    }

    /// The standard message line for this event.
    pub fn describe(&self) -> String {
        match self {
            Self::Entered { player } => {
                format!("{player} rolled a 1 and enters the board on cell 1!")
            }
            Self::EntryRollFailed { player, roll } => format!(
                "{player} needs a 1 to enter but rolled {}. Try again next turn.",
                roll.value()
            ),
            Self::Overshot { player, from, roll } => format!(
                "Exact roll needed to reach cell 100! {player} rolled {} and stays on {from}.",
                roll.value()
            ),
            Self::Moved { player, to } => format!("{player} moved to cell {to}."),
            Self::SnakeBitten { player, head, tail } => {
                format!("Oh no! A snake on {head} sends {player} down to {tail}!")
            }
            Self::LadderClimbed { player, bottom, top } => {
                format!("A ladder on {bottom} takes {player} up to {top}!")
            }
            Self::BonusRoll { player } => format!("{player} rolled a 6 and rolls again!"),
            Self::Won { player } => format!("{player} reached cell 100 and wins!"),
        }
    }
}

/// A record of something that happened during a game.
#[derive(Debug, Clone, Serialize)]
pub struct GameEvent {
    /// Engine clock reading when the event was recorded.
    pub at: Duration,
    /// The specific kind of event.
    pub kind: GameEventKind,
    /// A human-readable description, suitable as a message line.
    pub description: String,
}

impl GameEvent {
    /// Create a new event with the given clock reading, kind, and description.
    pub fn new(at: Duration, kind: GameEventKind, description: impl Into<String>) -> Self {
        Self {
            at,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events over a game.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
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
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Return the most recent event, if any.
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Return all events belonging to the given player.
    pub fn events_for_player(&self, player: Player) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.player() == player)
            .collect()
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

//! The game state machine: rolls, moves, transits, turns, and the win.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use snl_board::{Board, Cell, ENTRY_CELL, FINAL_CELL, Transit};

use crate::config::GameConfig;
use crate::dice::{Dice, DiceRoll};
use crate::error::{GameError, GameResult};
use crate::event::{EventLog, GameEvent, GameEventKind};
use crate::player::{Player, PlayerState};
use crate::snapshot::Snapshot;

/// The engine's re-entrancy phase. Rolling is legal only from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the active player to roll.
    Idle,
    /// A roll was made; its resolution fires after the roll delay.
    Rolling,
    /// A transit was landed on; the slide fires after the slide delay.
    Sliding,
    /// The game has been won; only `reset` is accepted.
    Finished,
}

/// A scheduled mutation with a deadline on the engine clock.
#[derive(Debug, Clone, Copy)]
enum PendingStep {
    /// Resolve a roll made by `roll_dice`.
    Resolve { roll: DiceRoll, at: Duration },
    /// Apply a transit slide for the player who landed on it.
    Slide {
        player: Player,
        transit: Transit,
        at: Duration,
    },
}

impl PendingStep {
    fn due_at(self) -> Duration {
        match self {
            Self::Resolve { at, .. } | Self::Slide { at, .. } => at,
        }
    }
}

/// What a resolved roll did, returned by [`GameEngine::resolve_turn`].
#[derive(Debug, Clone)]
pub struct TurnResult {
    /// The player whose roll was resolved.
    pub player: Player,
    /// The resolved roll.
    pub roll: DiceRoll,
    /// Events recorded by this resolution, in order.
    pub events: Vec<GameEvent>,
    /// Whether the player keeps the turn for a bonus roll.
    pub extra_turn: bool,
}

/// The snakes-and-ladders rules engine.
///
/// Owns every piece of game state: pawn positions, the active player, the
/// dice roller, the pacing clock, the pending scheduled step, and the
/// event log. Collaborators hold `&mut` to one engine value; there are no
/// globals.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    config: GameConfig,
    dice: Dice,
    players: [PlayerState; 2],
    active: Player,
    winner: Option<Player>,
    pending: Option<PendingStep>,
    elapsed: Duration,
    events: EventLog,
}

impl GameEngine {
    /// Create an engine for the given board and configuration. Player one
    /// starts; both pawns begin off the board.
    pub fn new(board: Board, config: GameConfig) -> Self {
        let dice = Dice::new(config.seed);
        let events = EventLog::new(config.max_events);
        Self {
            board,
            config,
            dice,
            players: [PlayerState::default(); 2],
            active: Player::One,
            winner: None,
            pending: None,
            elapsed: Duration::ZERO,
            events,
        }
    }

    /// Roll the dice for the active player.
    ///
    /// The rolled value is returned immediately for display; the move
    /// itself resolves once the roll delay elapses (see
    /// [`Self::advance`]). Rejected while a roll or slide is pending and
    /// after the game has ended.
    pub fn roll_dice(&mut self) -> GameResult<DiceRoll> {
        self.ensure_idle()?;
        let roll = self.dice.roll();
        self.pending = Some(PendingStep::Resolve {
            roll,
            at: self.elapsed + self.config.roll_delay,
        });
        Ok(roll)
    }

    /// Resolve a turn with an explicit die value, bypassing the roller
    /// and the roll delay.
    ///
    /// This is the synchronous path: scripted games and tests feed exact
    /// values here. [`Self::roll_dice`] funnels into the same resolution
    /// when its delay fires.
    pub fn resolve_turn(&mut self, value: u8) -> GameResult<TurnResult> {
        let roll = DiceRoll::new(value)?;
        self.ensure_idle()?;
        Ok(self.apply_roll(roll))
    }

    /// Advance the pacing clock by `dt`, firing any scheduled step whose
    /// deadline is reached.
    ///
    /// A renderer calls this once per frame. The clock jumps to each
    /// deadline as it fires, so a slide scheduled by a resolution inside
    /// the window still lands a full slide delay after that resolution.
    pub fn advance(&mut self, dt: Duration) {
        let target = self.elapsed + dt;
        while let Some(step) = self.pending {
            if step.due_at() > target {
                break;
            }
            self.elapsed = step.due_at();
            self.pending = None;
            self.fire(step);
        }
        self.elapsed = target;
    }

    /// Reset to the start of a new game: pawns off the board, player one
    /// active, no winner, empty log, clock at zero. Cancels any pending
    /// scheduled step, so no stale slide can land after the reset.
    pub fn reset(&mut self) {
        self.players = [PlayerState::default(); 2];
        self.active = Player::One;
        self.winner = None;
        self.pending = None;
        self.elapsed = Duration::ZERO;
        self.events.clear();
    }

    /// The current engine phase.
    pub fn phase(&self) -> TurnPhase {
        if self.winner.is_some() {
            return TurnPhase::Finished;
        }
        match self.pending {
            None => TurnPhase::Idle,
            Some(PendingStep::Resolve { .. }) => TurnPhase::Rolling,
            Some(PendingStep::Slide { .. }) => TurnPhase::Sliding,
        }
    }

    /// Whose turn it is.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// The winner, once the game has ended.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The given player's pawn state.
    pub fn player(&self, player: Player) -> PlayerState {
        self.players[player.index()]
    }

    /// The cell the given player occupies (0 = off the board).
    pub fn position(&self, player: Player) -> Cell {
        self.players[player.index()].position
    }

    /// Whether the given player's entry roll has succeeded.
    pub fn has_entered(&self, player: Player) -> bool {
        self.players[player.index()].entered
    }

    /// The transit whose slide is currently pending, if any.
    pub fn pending_transit(&self) -> Option<Transit> {
        match self.pending {
            Some(PendingStep::Slide { transit, .. }) => Some(transit),
            _ => None,
        }
    }

    /// The event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The board in play.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Total time the pacing clock has advanced.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Point-in-time view for a renderer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_one: self.players[0],
            player_two: self.players[1],
            active_player: self.active,
            last_message: self.events.last().map(|e| e.description.clone()),
            winner: self.winner,
            phase: self.phase(),
        }
    }

    /// Reject operations in a terminal state or while a step is pending.
    fn ensure_idle(&self) -> GameResult<()> {
        if let Some(winner) = self.winner {
            return Err(GameError::GameFinished(winner));
        }
        if self.pending.is_some() {
            return Err(GameError::RollInProgress);
        }
        Ok(())
    }

    /// Execute a scheduled step once its deadline is reached.
    fn fire(&mut self, step: PendingStep) {
        match step {
            PendingStep::Resolve { roll, .. } => {
                self.apply_roll(roll);
            }
            PendingStep::Slide { player, transit, .. } => {
                self.players[player.index()].position = transit.destination();
                if transit.destination() == FINAL_CELL {
                    self.winner = Some(player);
                    self.record(GameEventKind::Won { player });
                }
            }
        }
    }

    /// Apply a resolved roll to the active player, per the movement rules.
    fn apply_roll(&mut self, roll: DiceRoll) -> TurnResult {
        let player = self.active;
        let idx = player.index();
        let mut events = Vec::new();

        // Entry rule: an exact 1 puts the pawn on the entry cell. A failed
        // entry roll always passes the turn, sixes included.
        if !self.players[idx].entered {
            if roll.value() == 1 {
                self.players[idx].entered = true;
                self.players[idx].position = ENTRY_CELL;
                events.push(self.record(GameEventKind::Entered { player }));
            } else {
                events.push(self.record(GameEventKind::EntryRollFailed { player, roll }));
            }
            self.active = player.other();
            return TurnResult {
                player,
                roll,
                events,
                extra_turn: false,
            };
        }

        let from = self.players[idx].position;
        let target = from + roll.value();

        // An exact roll is needed to finish.
        if target > FINAL_CELL {
            events.push(self.record(GameEventKind::Overshot { player, from, roll }));
            let extra_turn = self.keep_or_pass(roll, player, &mut events);
            return TurnResult {
                player,
                roll,
                events,
                extra_turn,
            };
        }

        self.players[idx].position = target;

        if target == FINAL_CELL {
            self.winner = Some(player);
            events.push(self.record(GameEventKind::Won { player }));
            // The turn freezes on the winner: no bonus roll, no pass.
            return TurnResult {
                player,
                roll,
                events,
                extra_turn: false,
            };
        }

        if let Some(transit) = self.board.transit(target) {
            let kind = match transit {
                Transit::Snake { head, tail } => GameEventKind::SnakeBitten {
                    player,
                    head,
                    tail,
                },
                Transit::Ladder { bottom, top } => GameEventKind::LadderClimbed {
                    player,
                    bottom,
                    top,
                },
            };
            events.push(self.record(kind));
            self.pending = Some(PendingStep::Slide {
                player,
                transit,
                at: self.elapsed + self.config.slide_delay,
            });
        } else {
            events.push(self.record(GameEventKind::Moved { player, to: target }));
        }

        let extra_turn = self.keep_or_pass(roll, player, &mut events);
        TurnResult {
            player,
            roll,
            events,
            extra_turn,
        }
    }

    /// Bonus-roll rule: a six keeps the turn, anything else passes it.
    fn keep_or_pass(
        &mut self,
        roll: DiceRoll,
        player: Player,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if roll.is_six() {
            events.push(self.record(GameEventKind::BonusRoll { player }));
            true
        } else {
            self.active = player.other();
            false
        }
    }

    /// Record an event: stamp it with the clock, describe it, log it.
    fn record(&mut self, kind: GameEventKind) -> GameEvent {
        let event = GameEvent::new(self.elapsed, kind, kind.describe());
        self.events.push(event.clone());
        event
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Board::standard(), GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn immediate_engine() -> GameEngine {
        GameEngine::new(Board::standard(), GameConfig::default().immediate())
    }

    fn place(engine: &mut GameEngine, player: Player, cell: Cell) {
        engine.players[player.index()] = PlayerState {
            position: cell,
            entered: true,
        };
    }

    fn enter_both(engine: &mut GameEngine) {
        engine.resolve_turn(1).unwrap();
        engine.resolve_turn(1).unwrap();
    }

    #[test]
    fn new_engine_start_state() {
        let engine = GameEngine::default();
        assert_eq!(engine.position(Player::One), 0);
        assert_eq!(engine.position(Player::Two), 0);
        assert!(!engine.player(Player::One).entered);
        assert!(!engine.player(Player::Two).entered);
        assert_eq!(engine.active_player(), Player::One);
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.phase(), TurnPhase::Idle);
        assert!(engine.events().is_empty());
        assert_eq!(engine.elapsed(), Duration::ZERO);
    }

    #[test]
    fn entry_requires_an_exact_one() {
        let mut engine = GameEngine::default();
        let result = engine.resolve_turn(3).unwrap();
        assert_eq!(engine.position(Player::One), 0);
        assert!(!engine.has_entered(Player::One));
        assert_eq!(engine.active_player(), Player::Two);
        assert!(!result.extra_turn);
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::EntryRollFailed { player: Player::One, .. }
        ));
    }

    #[test]
    fn failed_entry_on_six_still_passes_turn() {
        // A six off the board is a wasted entry roll, not a bonus roll.
        let mut engine = GameEngine::default();
        let result = engine.resolve_turn(6).unwrap();
        assert!(!result.extra_turn);
        assert_eq!(engine.active_player(), Player::Two);
        assert!(!engine.has_entered(Player::One));
    }

    #[test]
    fn entry_places_pawn_on_cell_one() {
        let mut engine = GameEngine::default();
        let result = engine.resolve_turn(1).unwrap();
        assert_eq!(engine.position(Player::One), 1);
        assert!(engine.has_entered(Player::One));
        assert_eq!(engine.active_player(), Player::Two);
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::Entered { player: Player::One }
        ));
    }

    #[test]
    fn plain_move_passes_turn() {
        let mut engine = immediate_engine();
        enter_both(&mut engine);
        let result = engine.resolve_turn(2).unwrap();
        assert_eq!(engine.position(Player::One), 3);
        assert_eq!(engine.active_player(), Player::Two);
        assert!(!result.extra_turn);
        assert_eq!(result.events.len(), 1);
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::Moved { player: Player::One, to: 3 }
        ));
    }

    #[test]
    fn six_keeps_the_turn() {
        let mut engine = immediate_engine();
        enter_both(&mut engine);
        engine.resolve_turn(1).unwrap(); // One to 2
        engine.resolve_turn(1).unwrap(); // Two to 2
        let result = engine.resolve_turn(6).unwrap(); // One to 8, plain
        assert_eq!(engine.position(Player::One), 8);
        assert_eq!(engine.active_player(), Player::One);
        assert!(result.extra_turn);
        assert_eq!(result.events.len(), 2);
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::Moved { player: Player::One, to: 8 }
        ));
        assert!(matches!(
            result.events[1].kind,
            GameEventKind::BonusRoll { player: Player::One }
        ));
    }

    #[test]
    fn ladder_slide_applies_after_delay() {
        let mut engine = GameEngine::default();
        enter_both(&mut engine);
        let result = engine.resolve_turn(6).unwrap(); // 1 + 6 = 7, ladder to 30
        assert_eq!(result.events.len(), 2);
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::LadderClimbed { bottom: 7, top: 30, .. }
        ));
        assert!(matches!(
            result.events[1].kind,
            GameEventKind::BonusRoll { player: Player::One }
        ));
        assert!(result.extra_turn);

        // Until the slide fires the pawn shows on the landing cell
        assert_eq!(engine.position(Player::One), 7);
        assert_eq!(engine.phase(), TurnPhase::Sliding);
        assert!(matches!(
            engine.pending_transit(),
            Some(Transit::Ladder { bottom: 7, top: 30 })
        ));

        engine.advance(Duration::from_millis(499));
        assert_eq!(engine.position(Player::One), 7);

        engine.advance(Duration::from_millis(1));
        assert_eq!(engine.position(Player::One), 30);
        assert_eq!(engine.phase(), TurnPhase::Idle);
        // The six kept the turn through the slide
        assert_eq!(engine.active_player(), Player::One);
    }

    #[test]
    fn snake_slide_applies_after_delay() {
        let mut engine = GameEngine::default();
        place(&mut engine, Player::One, 22);
        let result = engine.resolve_turn(3).unwrap(); // 22 + 3 = 25, snake to 3
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::SnakeBitten { head: 25, tail: 3, .. }
        ));
        assert_eq!(engine.position(Player::One), 25);
        assert_eq!(engine.phase(), TurnPhase::Sliding);
        // The turn already passed at resolution
        assert_eq!(engine.active_player(), Player::Two);

        engine.advance(Duration::from_millis(500));
        assert_eq!(engine.position(Player::One), 3);
        assert_eq!(engine.phase(), TurnPhase::Idle);
    }

    #[test]
    fn roll_guard_covers_the_slide_window() {
        let mut engine = GameEngine::default();
        place(&mut engine, Player::One, 22);
        engine.resolve_turn(3).unwrap();
        assert_eq!(engine.phase(), TurnPhase::Sliding);
        assert!(matches!(engine.roll_dice(), Err(GameError::RollInProgress)));
        assert!(matches!(
            engine.resolve_turn(2),
            Err(GameError::RollInProgress)
        ));
        // The rejected calls changed nothing
        assert_eq!(engine.position(Player::One), 25);
        assert_eq!(engine.phase(), TurnPhase::Sliding);
    }

    #[test]
    fn overshoot_stays_put_and_passes_turn() {
        let mut engine = immediate_engine();
        place(&mut engine, Player::One, 97);
        let result = engine.resolve_turn(5).unwrap();
        assert_eq!(engine.position(Player::One), 97);
        assert_eq!(engine.active_player(), Player::Two);
        assert!(!result.extra_turn);
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::Overshot { from: 97, .. }
        ));
    }

    #[test]
    fn overshoot_on_six_keeps_turn() {
        let mut engine = immediate_engine();
        place(&mut engine, Player::One, 95);
        let result = engine.resolve_turn(6).unwrap();
        assert_eq!(engine.position(Player::One), 95);
        assert_eq!(engine.active_player(), Player::One);
        assert!(result.extra_turn);
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::Overshot { .. }
        ));
        assert!(matches!(
            result.events[1].kind,
            GameEventKind::BonusRoll { .. }
        ));
    }

    #[test]
    fn exact_landing_on_final_cell_wins() {
        let mut engine = immediate_engine();
        place(&mut engine, Player::One, 96);
        let result = engine.resolve_turn(4).unwrap();
        assert_eq!(engine.position(Player::One), 100);
        assert_eq!(engine.winner(), Some(Player::One));
        assert_eq!(engine.phase(), TurnPhase::Finished);
        assert!(!result.extra_turn);
        assert!(matches!(
            result.events.last().unwrap().kind,
            GameEventKind::Won { player: Player::One }
        ));

        // Terminal state rejects everything but reset
        assert!(matches!(
            engine.roll_dice(),
            Err(GameError::GameFinished(Player::One))
        ));
        assert!(matches!(
            engine.resolve_turn(2),
            Err(GameError::GameFinished(Player::One))
        ));

        engine.reset();
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.phase(), TurnPhase::Idle);
        assert_eq!(engine.position(Player::One), 0);
    }

    #[test]
    fn winning_six_grants_no_bonus_roll() {
        let mut engine = immediate_engine();
        place(&mut engine, Player::One, 94);
        let result = engine.resolve_turn(6).unwrap();
        assert_eq!(engine.winner(), Some(Player::One));
        assert!(!result.extra_turn);
        // The turn freezes on the winner
        assert_eq!(engine.active_player(), Player::One);
        assert_eq!(result.events.len(), 1);
        assert!(matches!(
            result.events[0].kind,
            GameEventKind::Won { player: Player::One }
        ));
    }

    #[test]
    fn ladder_to_final_cell_wins_after_slide() {
        let board = Board::new([], [(95, 100)]).unwrap();
        let mut engine = GameEngine::new(board, GameConfig::default());
        place(&mut engine, Player::One, 90);
        engine.resolve_turn(5).unwrap();
        // Not a winner until the slide applies
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.phase(), TurnPhase::Sliding);
        assert_eq!(engine.active_player(), Player::Two);

        engine.advance(Duration::from_millis(500));
        assert_eq!(engine.position(Player::One), 100);
        assert_eq!(engine.winner(), Some(Player::One));
        assert_eq!(engine.phase(), TurnPhase::Finished);
    }

    #[test]
    fn roll_dice_schedules_resolution() {
        let mut engine = GameEngine::default();
        let roll = engine.roll_dice().unwrap();
        assert!((1..=6).contains(&roll.value()));
        assert_eq!(engine.phase(), TurnPhase::Rolling);
        assert!(engine.events().is_empty());
        assert!(matches!(engine.roll_dice(), Err(GameError::RollInProgress)));
        assert!(matches!(
            engine.resolve_turn(3),
            Err(GameError::RollInProgress)
        ));

        engine.advance(Duration::from_millis(499));
        assert_eq!(engine.phase(), TurnPhase::Rolling);
        assert!(engine.events().is_empty());

        engine.advance(Duration::from_millis(1));
        // Pre-entry resolution always passes the turn
        assert_eq!(engine.active_player(), Player::Two);
        assert_eq!(engine.phase(), TurnPhase::Idle);
        assert_eq!(engine.events().len(), 1);
    }

    #[test]
    fn steps_fire_at_their_deadlines_inside_a_large_advance() {
        let board = Board::new([], [(95, 100)]).unwrap();
        let mut engine = GameEngine::new(board, GameConfig::default());
        place(&mut engine, Player::One, 90);
        engine.resolve_turn(5).unwrap();

        engine.advance(Duration::from_secs(10));
        assert_eq!(engine.elapsed(), Duration::from_secs(10));
        // The slide fired at its 500ms deadline, not at the end of the window
        let won = engine.events().last().unwrap();
        assert!(matches!(won.kind, GameEventKind::Won { .. }));
        assert_eq!(won.at, Duration::from_millis(500));
    }

    #[test]
    fn reset_restores_start_state() {
        let mut engine = immediate_engine();
        engine.resolve_turn(1).unwrap();
        engine.resolve_turn(3).unwrap();
        engine.resolve_turn(2).unwrap();
        engine.advance(Duration::from_secs(1));

        engine.reset();
        assert_eq!(engine.snapshot(), GameEngine::default().snapshot());
        assert!(engine.events().is_empty());
        assert_eq!(engine.elapsed(), Duration::ZERO);
    }

    #[test]
    fn reset_cancels_pending_slide() {
        let mut engine = GameEngine::default();
        place(&mut engine, Player::One, 22);
        engine.resolve_turn(3).unwrap(); // snake at 25 scheduled
        engine.reset();

        // The cancelled slide must not land on the fresh game
        engine.advance(Duration::from_secs(10));
        assert_eq!(engine.position(Player::One), 0);
        assert_eq!(engine.phase(), TurnPhase::Idle);
        assert!(engine.events().is_empty());
    }

    #[test]
    fn rejected_operations_leave_state_unchanged() {
        let mut engine = GameEngine::default();
        let before = engine.snapshot();
        assert!(engine.resolve_turn(0).is_err());
        assert!(engine.resolve_turn(9).is_err());
        assert_eq!(engine.snapshot(), before);

        engine.roll_dice().unwrap();
        let before = engine.snapshot();
        assert!(engine.roll_dice().is_err());
        assert!(engine.resolve_turn(4).is_err());
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn invalid_dice_value_reported_first() {
        let mut engine = immediate_engine();
        place(&mut engine, Player::One, 96);
        engine.resolve_turn(4).unwrap();
        // Out-of-range values are a contract violation even after the win
        assert!(matches!(
            engine.resolve_turn(7),
            Err(GameError::InvalidDiceValue(7))
        ));
    }

    #[test]
    fn max_events_bounds_the_log() {
        let config = GameConfig::default().immediate().with_max_events(3);
        let mut engine = GameEngine::new(Board::standard(), config);
        for _ in 0..10 {
            engine.resolve_turn(2).unwrap(); // wasted entry rolls
        }
        assert_eq!(engine.events().len(), 3);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut engine = GameEngine::default();
        engine.resolve_turn(1).unwrap();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.player_one.position, 1);
        assert!(snapshot.player_one.entered);
        assert_eq!(snapshot.player_two.position, 0);
        assert_eq!(snapshot.active_player, Player::Two);
        assert!(snapshot.last_message.unwrap().contains("enters the board"));
        assert_eq!(snapshot.winner, None);
        assert_eq!(snapshot.phase, TurnPhase::Idle);
    }

    #[test]
    fn every_snake_delivers_to_its_tail() {
        for (head, tail) in Board::standard().snakes() {
            let mut engine = immediate_engine();
            place(&mut engine, Player::One, head - 1);
            engine.resolve_turn(1).unwrap();
            assert_eq!(engine.position(Player::One), head);
            engine.advance(Duration::ZERO);
            assert_eq!(engine.position(Player::One), tail);
        }
    }

    #[test]
    fn every_ladder_delivers_to_its_top() {
        for (bottom, top) in Board::standard().ladders() {
            let mut engine = immediate_engine();
            place(&mut engine, Player::One, bottom - 1);
            engine.resolve_turn(1).unwrap();
            engine.advance(Duration::ZERO);
            assert_eq!(engine.position(Player::One), top);
        }
    }

    #[test]
    fn same_seed_same_transcript() {
        let play = |seed: u64| {
            let config = GameConfig::default().with_seed(seed).immediate();
            let mut engine = GameEngine::new(Board::standard(), config);
            for _ in 0..10_000 {
                if engine.winner().is_some() {
                    break;
                }
                engine.roll_dice().unwrap();
                engine.advance(Duration::ZERO);
            }
            let transcript: Vec<String> = engine
                .events()
                .events()
                .iter()
                .map(|e| e.description.clone())
                .collect();
            (transcript, engine.winner())
        };

        let (transcript_a, winner_a) = play(7);
        let (transcript_b, winner_b) = play(7);
        assert_eq!(transcript_a, transcript_b);
        assert_eq!(winner_a, winner_b);
        assert!(winner_a.is_some());
    }

    proptest! {
        #[test]
        fn entry_rolls_other_than_one_never_enter(value in 2u8..=6) {
            let mut engine = GameEngine::default();
            let result = engine.resolve_turn(value).unwrap();
            prop_assert!(!result.extra_turn);
            prop_assert_eq!(engine.position(Player::One), 0);
            prop_assert!(!engine.player(Player::One).entered);
            prop_assert_eq!(engine.active_player(), Player::Two);
        }

        #[test]
        fn overshoot_never_moves_the_pawn(from in 95u8..=99, value in 1u8..=6) {
            prop_assume!(from + value > 100);
            let mut engine = immediate_engine();
            place(&mut engine, Player::One, from);
            let result = engine.resolve_turn(value).unwrap();
            prop_assert_eq!(engine.position(Player::One), from);
            prop_assert_eq!(result.extra_turn, value == 6);
            let expected = if value == 6 { Player::One } else { Player::Two };
            prop_assert_eq!(engine.active_player(), expected);
        }

        #[test]
        fn six_inside_the_board_keeps_the_turn(from in 1u8..=93) {
            let mut engine = immediate_engine();
            place(&mut engine, Player::One, from);
            let result = engine.resolve_turn(6).unwrap();
            prop_assert!(result.extra_turn);
            prop_assert_eq!(engine.active_player(), Player::One);
        }
    }
}

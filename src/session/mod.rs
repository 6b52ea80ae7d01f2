//! Command and query surface for a presentation layer.
//!
//! A `Session` owns the live game and everything around it that is not a
//! rule: seeding, the scripted opponent's policy, its delayed moves, and
//! notification pacing.
//!
//! ## Driving a session
//!
//! ```
//! use std::time::Duration;
//! use go_fish::core::{Seat, TableConfig};
//! use go_fish::session::Session;
//!
//! let mut session = Session::new(TableConfig::default().with_seed(7));
//!
//! // The human asks for a rank they hold.
//! let rank = session.state().hand(Seat::Player).cards()[0].rank;
//! session.submit_player_request(rank).unwrap();
//!
//! // The consumer's clock drives scripted moves and notification rotation.
//! session.tick(Duration::from_secs(1));
//! let view = session.view();
//! assert_eq!(view.deck_count + view.player_hand.len() + view.opponent_hand.len()
//!     + 4 * (view.player_books.len() + view.opponent_books.len()), 52);
//! ```
//!
//! Everything is single-threaded: commands and ticks are applied one at a
//! time, so no locking is involved.

mod scheduler;
mod view;

pub use scheduler::{Generation, ScheduledMove, Scheduler};
pub use view::TableView;

use std::time::Duration;

use crate::cards::Rank;
use crate::core::{GameRng, GameState, RequestError, Seat, TableConfig};
use crate::notify::Notification;
use crate::policy::{self, GreedyPolicy, OpponentPolicy};
use crate::rules::{self, RequestOutcome};

/// One table: a human against the scripted opponent, game after game.
pub struct Session {
    config: TableConfig,
    /// Root stream; each game gets its own fork.
    rng: GameRng,
    game_rng: GameRng,
    policy: Box<dyn OpponentPolicy>,
    state: GameState,
    generation: Generation,
    scheduler: Scheduler,
    /// A scripted move is owed to this generation; its due time is set by
    /// the next tick.
    unarmed: Option<Generation>,
    now: Duration,
}

impl Session {
    /// Open a table with the greedy opponent and deal the first game.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Self::with_policy(config, Box::new(GreedyPolicy))
    }

    /// Open a table with a custom opponent policy.
    #[must_use]
    pub fn with_policy(config: TableConfig, policy: Box<dyn OpponentPolicy>) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut game_rng = rng.fork();
        let state = rules::start_game(&mut game_rng);
        log::info!("session opened with seed {}", rng.seed());

        Self {
            config,
            rng,
            game_rng,
            policy,
            state,
            generation: 0,
            scheduler: Scheduler::new(),
            unarmed: None,
            now: Duration::ZERO,
        }
    }

    // === Commands ===

    /// Throw away the current game and deal a new one.
    ///
    /// Any scripted move still pending belongs to the old generation and
    /// will be dropped when it fires.
    pub fn start_new_game(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.game_rng = self.rng.fork();
        self.state = rules::start_game(&mut self.game_rng);
        log::info!("game {} dealt", self.generation);
    }

    /// The human asks the opponent for `rank`.
    ///
    /// Asking for a rank not held queues a rejection notification and
    /// changes nothing else. When the turn ends up with the opponent, its
    /// move is due `opponent_delay` after the next tick.
    pub fn submit_player_request(&mut self, rank: Rank) -> Result<RequestOutcome, RequestError> {
        let outcome = rules::resolve_request(&mut self.state, Seat::Player, rank)?;
        self.after_request();
        Ok(outcome)
    }

    /// Advance the session clock to `now`.
    ///
    /// Sets the due time of a scripted move owed since the last tick, fires
    /// every scripted move that has come due, then rotates the active
    /// notification. Returns the notification to display. Time never moves
    /// backwards: an earlier `now` is treated as the last one seen.
    pub fn tick(&mut self, now: Duration) -> Option<&Notification> {
        self.now = self.now.max(now);

        self.arm_pending_move();
        while let Some(scheduled) = self.scheduler.pop_due(self.now) {
            self.run_scheduled_move(scheduled);
            self.arm_pending_move();
        }

        self.state.notifications.advance(self.now, self.config.message_duration)
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> TableView {
        TableView::from_state(&self.state, self.is_opponent_thinking())
    }

    #[must_use]
    pub fn active_notification(&self) -> Option<&Notification> {
        self.state.notifications().active()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Last time seen by [`Session::tick`].
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Whether a scripted move for the live game is waiting.
    #[must_use]
    pub fn is_opponent_thinking(&self) -> bool {
        self.unarmed == Some(self.generation) || self.scheduler.is_pending_for(self.generation)
    }

    /// Scripted moves of any generation, stale ones included.
    #[must_use]
    pub fn pending_moves(&self) -> usize {
        self.scheduler.len() + usize::from(self.unarmed.is_some())
    }

    // === Internals ===

    fn after_request(&mut self) {
        debug_assert_eq!(self.state.verify(), Ok(()));

        if self.state.turn_owner() == Some(Seat::Opponent) && !self.is_opponent_thinking() {
            self.unarmed = Some(self.generation);
        }
    }

    /// Give an owed scripted move its due time, relative to the current tick.
    fn arm_pending_move(&mut self) {
        let Some(generation) = self.unarmed.take() else {
            return;
        };
        if generation != self.generation {
            log::debug!("dropping unarmed scripted move from game {}", generation);
            return;
        }

        let due = self.now + self.config.opponent_delay;
        self.scheduler.schedule(generation, due);
        log::debug!("scripted move for game {} due at {:?}", generation, due);
    }

    /// Body of the delayed scripted move.
    ///
    /// Checks its generation token against the live game before doing
    /// anything.
    fn run_scheduled_move(&mut self, scheduled: ScheduledMove) -> Option<RequestOutcome> {
        if scheduled.generation != self.generation {
            log::debug!(
                "dropping stale scripted move from game {} (live game is {})",
                scheduled.generation,
                self.generation
            );
            return None;
        }
        if self.state.turn_owner() != Some(Seat::Opponent) {
            return None;
        }

        let hand = self.state.hand(Seat::Opponent);
        let rank = self
            .policy
            .choose_rank(hand, &mut self.game_rng)
            .filter(|&rank| hand.has_rank(rank))
            .or_else(|| policy::choose_rank(hand, &mut self.game_rng))?;

        match rules::resolve_request(&mut self.state, Seat::Opponent, rank) {
            Ok(outcome) => {
                self.after_request();
                Some(outcome)
            }
            Err(err) => {
                log::warn!("scripted move rejected: {}", err);
                None
            }
        }
    }
}

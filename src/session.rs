//! A game paired with its best-score record.
//!
//! The runner drives the game only through [`Session`], so every way a game
//! can end (lock failure, restart, quit) merges its score into the best.

use crate::core::{BestScore, BestScoreStore, GameSnapshot, GameState};
use crate::types::GameAction;

pub struct Session<S> {
    game: GameState,
    best: BestScore<S>,
}

impl<S: BestScoreStore> Session<S> {
    pub fn new(game: GameState, best: BestScore<S>) -> Self {
        Self { game, best }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn best(&self) -> &BestScore<S> {
        &self.best
    }

    pub fn start(&mut self) -> bool {
        self.game.start()
    }

    /// Apply an action, reporting the score of any game it ends.
    pub fn apply(&mut self, action: GameAction) -> bool {
        // A game that already ended was reported when it ended.
        if action == GameAction::Restart && self.game.started() && !self.game.game_over() {
            self.best.report(self.game.score());
        }
        let was_over = self.game.game_over();
        let changed = self.game.apply_action(action);
        self.report_if_ended(was_over);
        changed
    }

    pub fn tick(&mut self) -> bool {
        let was_over = self.game.game_over();
        let changed = self.game.tick();
        self.report_if_ended(was_over);
        changed
    }

    /// Report the current score before the session is dropped.
    pub fn quit(&mut self) {
        self.best.report(self.game.score());
    }

    /// Snapshot the game with `best` covering the score in progress.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        out.best = self.best.best().max(out.score);
    }

    fn report_if_ended(&mut self, was_over: bool) {
        if !was_over && self.game.game_over() {
            self.best.report(self.game.score());
        }
    }
}

//! Scoring module - line-clear points and best-score tracking
//!
//! Each cleared row is worth exactly one point, regardless of how many rows a
//! single lock clears. There are no drop bonuses, combos or level multipliers.
//!
//! The best score lives outside the game: [`BestScore`] reads it once from a
//! [`BestScoreStore`] and writes back `max(best, score)` whenever it is asked to
//! report. The store decides how (or whether) the value is persisted.

/// Points awarded for clearing `lines` rows at once.
pub fn calculate_score(lines: usize) -> u32 {
    lines as u32
}

/// Persistence collaborator for the best score.
///
/// `get` returns `None` when nothing is stored or the stored value cannot be
/// read; callers treat that as a best of 0. `set` must not fail loudly: a store
/// that cannot write reports the problem itself and carries on.
pub trait BestScoreStore {
    fn get(&self) -> Option<u32>;
    fn set(&mut self, best: u32);
}

/// In-memory store (no persistence across runs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryBestScore {
    value: Option<u32>,
}

impl MemoryBestScore {
    pub fn new(value: Option<u32>) -> Self {
        Self { value }
    }
}

impl BestScoreStore for MemoryBestScore {
    fn get(&self) -> Option<u32> {
        self.value
    }

    fn set(&mut self, best: u32) {
        self.value = Some(best);
    }
}

/// Best score seeded from a store, merged with finished or ongoing scores.
///
/// # Example
///
/// ```
/// use blockfall_core::{BestScore, MemoryBestScore};
///
/// let mut best = BestScore::load(MemoryBestScore::new(Some(12)));
/// assert_eq!(best.best(), 12);
/// assert_eq!(best.report(7), 12);
/// assert_eq!(best.report(30), 30);
/// ```
#[derive(Debug, Clone)]
pub struct BestScore<S> {
    store: S,
    best: u32,
}

impl<S: BestScoreStore> BestScore<S> {
    /// Read the stored best once. A missing value counts as 0.
    pub fn load(store: S) -> Self {
        let best = store.get().unwrap_or(0);
        Self { store, best }
    }

    /// Best score known so far (not including scores never reported).
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Merge `score` into the best, write it to the store, and return it.
    pub fn report(&mut self, score: u32) -> u32 {
        self.best = self.best.max(score);
        self.store.set(self.best);
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

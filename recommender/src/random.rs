use std::collections::VecDeque;

/// Source of the draws the recommender makes.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct FastRandSource {
    rng: fastrand::Rng,
}

impl FastRandSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastRandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.f64()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.usize(..len)
    }
}

/// Replays fixed draws, for pinning branch and pick decisions.
///
/// Once a queue runs dry it yields `0.0` / index `0`. Picks larger than the
/// requested range wrap around.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    rolls: VecDeque<f64>,
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(
        rolls: impl IntoIterator<Item = f64>,
        picks: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            picks: picks.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(0.0)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

//! Seeded randomness for tie-breaking.
//!
//! The engines only draw when several choices score the same, so a
//! fixed seed makes every decision reproducible. Agents sharing a seed
//! can still get independent draws through [`GameRng::stream`].
//!
//! ```
//! use rust_search::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! let tied = [3, 7, 9];
//! assert_eq!(rng.choose(&tied), again.choose(&tied));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 generator remembering its seed and stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    stream: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_stream(seed, 0)
    }

    fn with_stream(seed: u64, stream: u64) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(seed);
        inner.set_stream(stream);
        Self { inner, seed, stream }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Same seed, separate stream. Stream 0 is the one `new` uses.
    #[must_use]
    pub fn stream(&self, stream: u64) -> Self {
        Self::with_stream(self.seed, stream)
    }

    /// Uniform draw from `0..bound`, or `None` when `bound` is 0.
    pub fn below(&mut self, bound: usize) -> Option<usize> {
        (bound > 0).then(|| self.inner.gen_range(0..bound))
    }

    /// Uniform pick from `candidates`, or `None` when it is empty.
    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        self.below(candidates.len()).map(|i| &candidates[i])
    }

    /// Position in the sequence, for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            stream: self.stream,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::with_stream(state.seed, state.stream);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Serializable [`GameRng`] position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub stream: u64,
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng, n: usize) -> Vec<usize> {
        (0..n).filter_map(|_| rng.below(1000)).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        assert_eq!(draws(&mut a, 50), draws(&mut b, 50));
    }

    #[test]
    fn test_seeds_differ() {
        assert_ne!(draws(&mut GameRng::new(1), 10), draws(&mut GameRng::new(2), 10));
    }

    #[test]
    fn test_streams_differ() {
        let base = GameRng::new(42);
        let mut zero = base.stream(0);
        let mut one = base.stream(1);

        assert_eq!(one.seed(), 42);
        assert_eq!(draws(&mut zero, 10), draws(&mut GameRng::new(42), 10));
        assert_ne!(draws(&mut base.stream(0), 10), draws(&mut one, 10));
    }

    #[test]
    fn test_empty_candidates() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.below(0), None);
        assert!(rng.choose::<u8>(&[]).is_none());
    }

    #[test]
    fn test_choose_reaches_every_candidate() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            if let Some(&i) = rng.choose(&[0usize, 1, 2]) {
                seen[i] = true;
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_restore_resumes_sequence() {
        let mut rng = GameRng::new(9).stream(4);
        draws(&mut rng, 37);

        let saved = rng.state();
        let expected = draws(&mut rng, 10);
        let mut restored = GameRng::from_state(&saved);

        assert_eq!(draws(&mut restored, 10), expected);
    }

    #[test]
    fn test_state_json() {
        let state = GameRngState {
            seed: 42,
            stream: 2,
            word_pos: 12345,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), state);
    }
}

//! # Random Sources
//!
//! Generation is generic over [`rand::Rng`]. Production code runs on a seeded
//! or entropy-seeded [`StdRng`] from [`seeded_rng`] / [`entropy_rng`]; tests can
//! script exact outcomes with [`SequenceRandom`].

use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};

/// Creates a generator with a fixed seed for reproducible generation.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from system entropy.
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Scripted random source that replays a fixed list of fractions in `[0, 1)`,
/// cycling back to the start when exhausted.
///
/// Each fraction becomes one raw word scaled to the full integer range, so
/// `rand`'s range sampling maps `f` to `low + floor(f * n)` for a range of `n`
/// values. A fraction of `0.0` always selects the lowest option; a fraction
/// sitting close to the top of its bucket can be rejected by the unbiased
/// sampler, in which case the next value is drawn.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use snakeword::SequenceRandom;
///
/// let mut rng = SequenceRandom::new(vec![0.0, 0.5]);
/// assert_eq!(rng.gen_range(0..4), 0);
/// assert_eq!(rng.gen_range(0..4), 2);
/// assert_eq!(rng.gen_range(0..4), 0);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Creates a source replaying `values`. Values are clamped into `[0, 1)`.
    /// An empty list behaves like a source that always returns `0.0`.
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Creates a source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_fraction(&mut self) -> f64 {
        let value = match self.values.len() {
            0 => 0.0,
            len => self.values[self.cursor % len],
        };
        self.cursor += 1;
        value
    }
}

impl RngCore for SequenceRandom {
    fn next_u32(&mut self) -> u32 {
        (self.next_fraction() * 4_294_967_296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (self.next_fraction() * 18_446_744_073_709_551_616.0) as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

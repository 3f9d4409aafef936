use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Seeded stream of shuffled permutations of `0..size`.
///
/// One buffer is shuffled in place per step, so consecutive permutations
/// build on each other and only `size` integers are ever held. The same
/// `(size, count, seed)` always produces the same stream.
pub struct Permutations {
    rng: StdRng,
    data: Vec<i32>,
    remaining: usize,
}

impl Permutations {
    pub fn new(size: usize, count: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            data: (0..size as i32).collect(),
            remaining: count,
        }
    }

    /// Shuffle and lend the next permutation.
    pub fn next_permutation(&mut self) -> Option<&[i32]> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.data.shuffle(&mut self.rng);
        Some(&self.data)
    }
}

use std::path::PathBuf;

use top_two::Strategy;

/// Every run parameter of the harness. Nothing is read from globals.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input sizes for the comparison benches.
    pub sizes: Vec<usize>,
    /// Shuffled permutations timed per size.
    pub permutations: usize,
    pub seed: u64,
    pub out_dir: PathBuf,
    /// Input size of each strategy in the per-permutation timing bench.
    pub timing_sizes: Vec<(Strategy, usize)>,
    /// Worker threads for parallel strategies; 0 lets rayon decide.
    pub threads: usize,
    /// `sort` is skipped above this size.
    pub sort_limit: usize,
    /// `nth_element` is skipped above this size.
    pub nth_element_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: vec![
                10, 100, 1_000, 3_162, 10_000, 31_623, 100_000, 177_828, 316_228, 562_341,
                1_000_000,
            ],
            permutations: 1_000,
            seed: 19937,
            out_dir: PathBuf::from("results"),
            timing_sizes: vec![
                (Strategy::Sort, 100_000),
                (Strategy::NthElement, 1_000_000),
                (Strategy::MaxElement, 10_000_000),
                (Strategy::MaxElementSwap, 10_000_000),
                (Strategy::Accumulate, 10_000_000),
                (Strategy::TransformReduce, 10_000_000),
            ],
            threads: 0,
            sort_limit: 500_000,
            nth_element_limit: 5_000_000,
        }
    }
}

impl Config {
    /// Whether a superlinear strategy is left out at this size.
    pub fn skips(&self, strategy: Strategy, size: usize) -> bool {
        match strategy {
            Strategy::Sort => size > self.sort_limit,
            Strategy::NthElement => size > self.nth_element_limit,
            _ => false,
        }
    }
}

use std::fmt;

/// The two largest values seen in a sequence or sub-range.
///
/// `i32::MIN` in either field stands for "nothing contributed yet", so
/// [`Summary::IDENTITY`] is the neutral element of every fold over summaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Summary {
    pub largest: i32,
    pub second_largest: i32,
}

impl Summary {
    pub const IDENTITY: Summary = Summary {
        largest: i32::MIN,
        second_largest: i32::MIN,
    };

    pub const fn new(largest: i32, second_largest: i32) -> Self {
        Self {
            largest,
            second_largest,
        }
    }

    /// Whether `second_largest <= largest` holds.
    pub const fn is_ordered(&self) -> bool {
        self.second_largest <= self.largest
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "largest: {}, second largest: {}",
            self.largest, self.second_largest
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Sort,
    NthElement,
    MaxElement,
    MaxElementSwap,
    Accumulate,
    Reduce,
    TransformReduce,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Sort,
        Strategy::NthElement,
        Strategy::MaxElement,
        Strategy::MaxElementSwap,
        Strategy::Accumulate,
        Strategy::Reduce,
        Strategy::TransformReduce,
    ];

    /// Column name used in CSV headers and console output.
    pub const fn name(&self) -> &'static str {
        match self {
            Strategy::Sort => "sort",
            Strategy::NthElement => "nth_element",
            Strategy::MaxElement => "max_element",
            Strategy::MaxElementSwap => "max_element_swap",
            Strategy::Accumulate => "accumulate",
            Strategy::Reduce => "reduce",
            Strategy::TransformReduce => "transform_reduce",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Sequential,
    Parallel,
}

const SEQUENTIAL_STRATEGIES: [Strategy; 6] = [
    Strategy::Sort,
    Strategy::NthElement,
    Strategy::MaxElement,
    Strategy::MaxElementSwap,
    Strategy::Accumulate,
    Strategy::TransformReduce,
];

const PARALLEL_STRATEGIES: [Strategy; 6] = [
    Strategy::Sort,
    Strategy::NthElement,
    Strategy::MaxElement,
    Strategy::MaxElementSwap,
    Strategy::Reduce,
    Strategy::TransformReduce,
];

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Sequential, Mode::Parallel];

    /// Strategies available in this mode, in CSV column order.
    pub const fn strategies(&self) -> &'static [Strategy] {
        match self {
            Mode::Sequential => &SEQUENTIAL_STRATEGIES,
            Mode::Parallel => &PARALLEL_STRATEGIES,
        }
    }

    pub fn supports(&self, strategy: Strategy) -> bool {
        self.strategies().contains(&strategy)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Mode::Sequential => "sequential",
            Mode::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

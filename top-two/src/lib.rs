pub use top_two_types::{Mode, Strategy, Summary};

pub mod cases;
pub mod parallel;
pub mod reduce;
pub mod sequential;
mod validation;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("need at least 2 values, got {len}")]
    InvalidArgument { len: usize },
    #[error("{strategy} is not available in {mode} mode")]
    Unsupported { strategy: Strategy, mode: Mode },
}

/// Signature shared by every strategy entry point.
pub type StrategyFn = fn(&[i32]) -> Result<Summary, Error>;

/// Look up the entry point of `strategy` in `mode`.
pub fn resolve(mode: Mode, strategy: Strategy) -> Result<StrategyFn, Error> {
    let f: StrategyFn = match (mode, strategy) {
        (Mode::Sequential, Strategy::Sort) => sequential::sort,
        (Mode::Sequential, Strategy::NthElement) => sequential::nth_element,
        (Mode::Sequential, Strategy::MaxElement) => sequential::max_element,
        (Mode::Sequential, Strategy::MaxElementSwap) => sequential::max_element_swap,
        (Mode::Sequential, Strategy::Accumulate) => sequential::accumulate,
        (Mode::Sequential, Strategy::TransformReduce) => sequential::transform_reduce,
        (Mode::Parallel, Strategy::Sort) => parallel::sort,
        (Mode::Parallel, Strategy::NthElement) => parallel::nth_element,
        (Mode::Parallel, Strategy::MaxElement) => parallel::max_element,
        (Mode::Parallel, Strategy::MaxElementSwap) => parallel::max_element_swap,
        (Mode::Parallel, Strategy::Reduce) => parallel::reduce,
        (Mode::Parallel, Strategy::TransformReduce) => parallel::transform_reduce,
        (Mode::Sequential, Strategy::Reduce) | (Mode::Parallel, Strategy::Accumulate) => {
            return Err(Error::Unsupported { strategy, mode })
        }
    };
    Ok(f)
}

/// Compute the two largest values of `values` with the given strategy.
pub fn compute(mode: Mode, strategy: Strategy, values: &[i32]) -> Result<Summary, Error> {
    let f = resolve(mode, strategy)?;
    debug!(%mode, %strategy, len = values.len(), "compute");
    f(values)
}

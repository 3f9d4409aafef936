//! Single-threaded strategies. Each one validates its input, works on its
//! own copy when it needs to reorder, and returns a fresh [`Summary`].

use top_two_types::Summary;

use crate::reduce::{combine, insert, lift};
use crate::validation::{first_max_index, validate};
use crate::Error;

/// Full sort of a copy, then read the last two.
pub fn sort(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    let mut vec = values.to_vec();
    vec.sort_unstable();
    let n = vec.len();
    Ok(Summary::new(vec[n - 1], vec[n - 2]))
}

/// Partial selection of a copy so that index 1 holds the second largest and
/// index 0 the largest.
pub fn nth_element(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    let mut vec = values.to_vec();
    Ok(select_top_two(&mut vec))
}

/// Scan for the maximum, remove it from a copy, scan again.
pub fn max_element(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    let mut vec = values.to_vec();
    let idx = first_max_index(&vec)?;
    let largest = vec.remove(idx);
    let second_largest = max_of(&vec)?;
    Ok(Summary::new(largest, second_largest))
}

/// Scan for the maximum, swap it to the end of a copy, scan the prefix.
pub fn max_element_swap(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    let mut vec = values.to_vec();
    let idx = first_max_index(&vec)?;
    let last = vec.len() - 1;
    vec.swap(idx, last);
    let second_largest = max_of(&vec[..last])?;
    Ok(Summary::new(vec[last], second_largest))
}

/// Single pass with a running summary.
pub fn accumulate(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    Ok(values.iter().fold(Summary::IDENTITY, |acc, &v| insert(acc, v)))
}

/// Lift every element to a summary and fold with the associative combine.
pub fn transform_reduce(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    Ok(values
        .iter()
        .map(|&v| lift(v))
        .fold(Summary::IDENTITY, combine))
}

/// Reorders `vec` so that `vec[0] >= vec[1] >= vec[2..]` and returns the
/// first two. `vec` must hold at least two values.
pub(crate) fn select_top_two(vec: &mut [i32]) -> Summary {
    vec.select_nth_unstable_by(1, |a, b| b.cmp(a));
    Summary::new(vec[0], vec[1])
}

fn max_of(values: &[i32]) -> Result<i32, Error> {
    values
        .iter()
        .copied()
        .max()
        .ok_or(Error::InvalidArgument { len: values.len() })
}

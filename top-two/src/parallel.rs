//! Data-parallel strategies on rayon.
//!
//! These run on whichever pool is current: the global pool, or the pool the
//! caller entered with [`rayon::ThreadPool::install`]. The merge order of
//! partial results is up to rayon; `reduce` and `transform_reduce` are
//! order-independent because `combine` is associative and commutative.

use rayon::prelude::*;
use top_two_types::Summary;

use crate::reduce::{absorb, combine, lift, pair};
use crate::sequential::select_top_two;
use crate::validation::validate;
use crate::Error;

/// Chunks smaller than this are not worth a task of their own.
const MIN_CHUNK_LEN: usize = 4096;

pub fn sort(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    let mut vec = values.to_vec();
    vec.par_sort_unstable();
    let n = vec.len();
    Ok(Summary::new(vec[n - 1], vec[n - 2]))
}

/// Top-2 selection inside each chunk of a copy in parallel, then a final
/// selection over the per-chunk candidates.
pub fn nth_element(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    let mut vec = values.to_vec();
    let chunk_len = chunk_len(vec.len());

    let mut candidates: Vec<i32> = vec
        .par_chunks_mut(chunk_len)
        .flat_map_iter(|chunk| {
            if chunk.len() >= 2 {
                select_top_two(chunk);
            }
            chunk[..chunk.len().min(2)].to_vec()
        })
        .collect();

    Ok(select_top_two(&mut candidates))
}

pub fn max_element(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    let mut vec = values.to_vec();
    let idx = par_first_max_index(&vec)?;
    let largest = vec.remove(idx);
    let second_largest = par_max(&vec)?;
    Ok(Summary::new(largest, second_largest))
}

pub fn max_element_swap(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    let mut vec = values.to_vec();
    let idx = par_first_max_index(&vec)?;
    let last = vec.len() - 1;
    vec.swap(idx, last);
    let second_largest = par_max(&vec[..last])?;
    Ok(Summary::new(vec[last], second_largest))
}

/// Tree reduction seeded from raw elements: each two-element chunk becomes a
/// [`pair`], a trailing single element is absorbed, and partial summaries
/// are merged with [`combine`].
pub fn reduce(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    Ok(values
        .par_chunks(2)
        .fold(
            || Summary::IDENTITY,
            |acc, chunk| match *chunk {
                [a, b] => combine(acc, pair(a, b)),
                [a] => absorb(acc, a),
                _ => acc,
            },
        )
        .reduce(|| Summary::IDENTITY, combine))
}

pub fn transform_reduce(values: &[i32]) -> Result<Summary, Error> {
    validate(values)?;
    Ok(values
        .par_iter()
        .map(|&v| lift(v))
        .reduce(|| Summary::IDENTITY, combine))
}

fn chunk_len(len: usize) -> usize {
    len.div_ceil(rayon::current_num_threads()).max(MIN_CHUNK_LEN)
}

fn par_first_max_index(values: &[i32]) -> Result<usize, Error> {
    values
        .par_iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
        .map(|(i, _)| i)
        .ok_or(Error::InvalidArgument { len: values.len() })
}

fn par_max(values: &[i32]) -> Result<i32, Error> {
    values
        .par_iter()
        .copied()
        .max()
        .ok_or(Error::InvalidArgument { len: values.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::ThreadPoolBuilder;

    #[test]
    fn test_nth_element_across_chunks() {
        // Large enough to split, with both top values in the same chunk
        let mut values: Vec<i32> = (0..50_000).collect();
        values.swap(49_999, 10);
        values.swap(49_998, 11);
        let pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();
        let result = pool.install(|| nth_element(&values)).unwrap();
        assert_eq!(result, Summary::new(49_999, 49_998));
    }

    #[test]
    fn test_nth_element_single_element_tail_chunk() {
        let mut values: Vec<i32> = vec![0; MIN_CHUNK_LEN + 1];
        values[MIN_CHUNK_LEN] = 3;
        values[0] = 2;
        // 4 threads gives one full chunk and a one-element tail
        let pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();
        let result = pool.install(|| nth_element(&values)).unwrap();
        assert_eq!(result, Summary::new(3, 2));
    }

    #[test]
    fn test_reduce_odd_length() {
        assert_eq!(reduce(&[1, 7, 3]).unwrap(), Summary::new(7, 3));
        assert_eq!(reduce(&[1, 3, 7]).unwrap(), Summary::new(7, 3));
        assert_eq!(reduce(&[7, 7, 3]).unwrap(), Summary::new(7, 7));
    }

    #[test]
    fn test_max_element_duplicate_maximum() {
        let mut values: Vec<i32> = (0..20_000).collect();
        values[5] = 19_999;
        let result = max_element(&values).unwrap();
        assert_eq!(result, Summary::new(19_999, 19_999));
        let result = max_element_swap(&values).unwrap();
        assert_eq!(result, Summary::new(19_999, 19_999));
    }
}

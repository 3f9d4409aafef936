//! The summary algebra shared by every fold-based strategy.
//!
//! `combine` is associative and commutative over ordered summaries and has
//! [`Summary::IDENTITY`] as its identity, so a reduction may group and order
//! partial results however it likes. The remaining operations are
//! shortcuts for combining with a lifted element.

use top_two_types::Summary;

/// Degenerate summary of a single element.
#[inline]
pub const fn lift(value: i32) -> Summary {
    Summary::new(value, i32::MIN)
}

/// Summary of exactly two elements.
#[inline]
pub fn pair(a: i32, b: i32) -> Summary {
    Summary::new(a.max(b), a.min(b))
}

/// Merge two partial summaries.
#[inline]
pub fn combine(lhs: Summary, rhs: Summary) -> Summary {
    if lhs.second_largest >= rhs.largest {
        lhs
    } else if rhs.second_largest >= lhs.largest {
        rhs
    } else {
        pair(lhs.largest, rhs.largest)
    }
}

/// Streaming step used by the single-pass fold. Ties leave the summary
/// untouched.
#[inline]
pub fn insert(summary: Summary, value: i32) -> Summary {
    if value > summary.largest {
        Summary::new(value, summary.largest)
    } else if value > summary.second_largest {
        Summary::new(summary.largest, value)
    } else {
        summary
    }
}

/// Element-absorbing step of the tree reduction, equal to
/// `combine(summary, lift(value))`.
///
/// A value equal to `largest` is shifted in directly without looking at
/// `second_largest`; the result is the same as [`insert`].
#[inline]
pub fn absorb(summary: Summary, value: i32) -> Summary {
    if value >= summary.largest {
        Summary::new(value, summary.largest)
    } else if value > summary.second_largest {
        Summary::new(summary.largest, value)
    } else {
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Ordered summary of a concrete pair of values.
    fn summary() -> impl Strategy<Value = Summary> {
        (any::<i32>(), any::<i32>()).prop_map(|(a, b)| pair(a, b))
    }

    /// Values from a narrow range so ties are common.
    fn narrow_summary() -> impl Strategy<Value = Summary> {
        (-3i32..3, -3i32..3).prop_map(|(a, b)| pair(a, b))
    }

    /// All summaries over a small alphabet, including the sentinel and lifts.
    fn small_summaries() -> Vec<Summary> {
        let alphabet = [i32::MIN, -1, 0, 1, 2];
        let mut out = Vec::new();
        for &a in &alphabet {
            for &b in &alphabet {
                if b <= a {
                    out.push(Summary::new(a, b));
                }
            }
        }
        out
    }

    #[test]
    fn test_lift() {
        assert_eq!(lift(7), Summary::new(7, i32::MIN));
        assert_eq!(lift(i32::MIN), Summary::IDENTITY);
    }

    #[test]
    fn test_pair_orders_values() {
        assert_eq!(pair(1, 2), Summary::new(2, 1));
        assert_eq!(pair(2, 1), Summary::new(2, 1));
        assert_eq!(pair(5, 5), Summary::new(5, 5));
    }

    #[test]
    fn test_combine_cases() {
        // rhs contributes nothing
        assert_eq!(
            combine(Summary::new(9, 8), Summary::new(7, 1)),
            Summary::new(9, 8)
        );
        // lhs contributes nothing
        assert_eq!(
            combine(Summary::new(3, 2), Summary::new(9, 4)),
            Summary::new(9, 4)
        );
        // one value from each side
        assert_eq!(
            combine(Summary::new(9, 1), Summary::new(8, 2)),
            Summary::new(9, 8)
        );
        // equal tops
        assert_eq!(
            combine(Summary::new(5, 1), Summary::new(5, 2)),
            Summary::new(5, 5)
        );
    }

    #[test]
    fn test_identity_exhaustive() {
        for s in small_summaries() {
            assert_eq!(combine(s, Summary::IDENTITY), s);
            assert_eq!(combine(Summary::IDENTITY, s), s);
        }
    }

    #[test]
    fn test_associative_commutative_exhaustive() {
        let all = small_summaries();
        for &a in &all {
            for &b in &all {
                assert_eq!(combine(a, b), combine(b, a), "{a:?} {b:?}");
                for &c in &all {
                    assert_eq!(
                        combine(combine(a, b), c),
                        combine(a, combine(b, c)),
                        "{a:?} {b:?} {c:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_insert_matches_absorb_exhaustive() {
        for s in small_summaries() {
            for v in [i32::MIN, -1, 0, 1, 2] {
                assert_eq!(insert(s, v), absorb(s, v), "{s:?} {v}");
                assert_eq!(absorb(s, v), combine(s, lift(v)), "{s:?} {v}");
            }
        }
    }

    #[test]
    fn test_tie_patterns_all_permutations() {
        // every ordering of [x, x, y] for y below, equal to and above x
        for y in [0, 1, 2] {
            let x = 1;
            let orders = [[x, x, y], [x, y, x], [y, x, x]];
            let expected = if y > x {
                Summary::new(y, x)
            } else {
                Summary::new(x, x)
            };
            for order in orders {
                let strict = order.iter().fold(Summary::IDENTITY, |s, &v| insert(s, v));
                let loose = order.iter().fold(Summary::IDENTITY, |s, &v| absorb(s, v));
                let lifted = order
                    .iter()
                    .fold(Summary::IDENTITY, |s, &v| combine(s, lift(v)));
                assert_eq!(strict, expected, "{order:?}");
                assert_eq!(loose, expected, "{order:?}");
                assert_eq!(lifted, expected, "{order:?}");
            }
        }
    }

    proptest! {
        #[test]
        fn combine_is_commutative(a in summary(), b in summary()) {
            prop_assert_eq!(combine(a, b), combine(b, a));
        }

        #[test]
        fn combine_is_associative(a in summary(), b in summary(), c in summary()) {
            prop_assert_eq!(combine(combine(a, b), c), combine(a, combine(b, c)));
        }

        #[test]
        fn combine_is_associative_with_ties(
            a in narrow_summary(),
            b in narrow_summary(),
            c in narrow_summary(),
        ) {
            prop_assert_eq!(combine(combine(a, b), c), combine(a, combine(b, c)));
            prop_assert_eq!(combine(a, b), combine(b, a));
        }

        #[test]
        fn combine_keeps_order(a in summary(), b in summary()) {
            prop_assert!(combine(a, b).is_ordered());
        }

        #[test]
        fn absorb_is_combine_with_lift(s in summary(), v in any::<i32>()) {
            prop_assert_eq!(absorb(s, v), combine(s, lift(v)));
            prop_assert_eq!(insert(s, v), absorb(s, v));
        }
    }
}

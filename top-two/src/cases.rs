//! Literal inputs with hand-computed answers, shared by the `check` binary
//! and the tests.

use top_two_types::Summary;

pub struct Case {
    pub name: &'static str,
    pub values: &'static [i32],
    pub expected: Summary,
}

pub const CASES: [Case; 6] = [
    Case {
        name: "trivial",
        values: &[0, 1, 2, 3, 4],
        expected: Summary::new(4, 3),
    },
    Case {
        name: "trivial_inverted",
        values: &[4, 3, 2, 1, 0],
        expected: Summary::new(4, 3),
    },
    Case {
        name: "random_odd",
        values: &[6, 2, 8, 4, 3, 9, 1, 2, 4],
        expected: Summary::new(9, 8),
    },
    Case {
        name: "random_even",
        values: &[6, 2, 8, 4, 3, 9, 1, 2, 4, 7],
        expected: Summary::new(9, 8),
    },
    Case {
        name: "all_zero",
        values: &[0, 0, 0, 0, 0],
        expected: Summary::new(0, 0),
    },
    Case {
        name: "all_one",
        values: &[1, 1, 1, 1, 1],
        expected: Summary::new(1, 1),
    },
];

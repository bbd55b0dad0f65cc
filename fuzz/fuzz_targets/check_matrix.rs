#![no_main]
use libfuzzer_sys::fuzz_target;

use weakord::{axioms, check_by, CheckSettings};

const LEN: usize = 10;

// Each input byte is one cell of a LEN x LEN relation matrix; missing bytes
// are false. The quadratic checker must agree with the brute-force oracle.
fuzz_target!(|data: &[u8]| {
    let mut matrix = [[false; LEN]; LEN];
    for (cell, byte) in matrix.iter_mut().flatten().zip(data) {
        *cell = *byte != 0;
    }
    let less = |x: &usize, y: &usize| matrix[*x][*y];

    let mut v = (0..LEN).collect::<Vec<_>>();
    let expected = axioms::find_violation(&v, less);
    let result = check_by(&mut v, &CheckSettings::default().prior_sort(true).explain(true), less);

    assert_eq!(
        result.ok,
        expected.is_none(),
        "checker says {:?}, oracle says {:?}",
        result.reason,
        expected,
    );
});

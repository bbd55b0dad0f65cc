//! Checks that a comparator behaves like a strict weak ordering.
//!
//! Sorting and ordered containers assume their `less` predicate is
//! irreflexive, asymmetric and transitive, and that "neither is less" is
//! transitive too. A comparator that breaks one of these rules usually only
//! misbehaves on particular inputs. [`check_by`] takes such an input and a
//! comparator and decides, exhaustively within that input, whether the
//! comparator is consistent with a strict weak ordering.
//!
//! The check is quadratic in the length of the sequence. It is meant as an
//! oracle for tests and fuzzing, not for hot paths.
//!
//! # Example
//!
//! ```
//! use weakord::{check, check_by, CheckSettings};
//!
//! let mut v = (0..100).collect::<Vec<i32>>();
//! assert!(check(&mut v).ok);
//!
//! let settings = CheckSettings::default().prior_sort(true).explain(true);
//! let result = check_by(&mut v, &settings, |a, b| a <= b);
//! assert!(!result.ok);
//! assert!(!result.reason.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub mod axioms;
pub mod float;
pub mod heap;
mod violation;

pub use violation::Violation;

/// Toggles for a single check. All of them default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Sort the sequence in place with the comparator under test before
    /// verifying it. Otherwise the sequence is verified as arranged.
    pub perform_prior_sort: bool,
    /// Fill [`CheckResult::reason`] on failure.
    pub explain_failure: bool,
    /// Not yet supported.
    pub show_elements: bool,
}

impl CheckSettings {
    pub fn prior_sort(mut self, yes: bool) -> Self {
        self.perform_prior_sort = yes;
        self
    }

    pub fn explain(mut self, yes: bool) -> Self {
        self.explain_failure = yes;
        self
    }
}

/// Outcome of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// True iff no violation was found.
    pub ok: bool,
    /// Human readable description of the violation. Empty unless the check
    /// failed with [`CheckSettings::explain_failure`] set.
    pub reason: String,
    /// The first violation found, if any.
    pub violation: Option<Violation>,
}

impl CheckResult {
    fn passed() -> CheckResult {
        CheckResult { ok: true, reason: String::new(), violation: None }
    }

    fn failed(violation: Violation, settings: &CheckSettings) -> CheckResult {
        let reason = if settings.explain_failure {
            violation.to_string()
        } else {
            String::new()
        };
        CheckResult { ok: false, reason, violation: Some(violation) }
    }

    /// Converts into a `Result` so a failed check can be propagated with `?`.
    pub fn into_result(self) -> Result<(), Violation> {
        match self.violation {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

/// Checks `v` with default settings and the natural `<` of `T`.
pub fn check<T: PartialOrd>(v: &mut [T]) -> CheckResult {
    check_with(v, &CheckSettings::default())
}

/// Checks `v` with the natural `<` of `T`.
pub fn check_with<T: PartialOrd>(v: &mut [T], settings: &CheckSettings) -> CheckResult {
    check_by(v, settings, |a: &T, b: &T| a < b)
}

/// Checks that `less` is consistent with a strict weak ordering on the
/// elements of `v`.
///
/// With [`CheckSettings::perform_prior_sort`] the slice is permuted in place,
/// and stays permuted after the call. `less` must answer the same way every
/// time it is asked about the same pair; otherwise the result is meaningless,
/// though the check still terminates after O(n^2) calls.
///
/// The first violation found ends the check. Scan order is: adjacent pairs
/// left to right, then for each equivalence group every pair inside the
/// group, then every pair across its right boundary.
pub fn check_by<T, F>(v: &mut [T], settings: &CheckSettings, mut less: F) -> CheckResult
    where F: FnMut(&T, &T) -> bool
{
    if settings.perform_prior_sort {
        trace!(len = v.len(), "sorting before check");
        heap::sort_by_less(v, &mut less);
    }

    match find_violation(v, &mut less) {
        None => CheckResult::passed(),
        Some(violation) => {
            debug!(%violation, len = v.len(), "comparator is not a strict weak ordering");
            CheckResult::failed(violation, settings)
        }
    }
}

fn find_violation<T, F>(v: &[T], less: &mut F) -> Option<Violation>
    where F: FnMut(&T, &T) -> bool
{
    let len = v.len();

    for next in 1..len {
        let prev = next - 1;
        if less(&v[next], &v[prev]) {
            return Some(Violation::Unsorted { prev, next });
        }
    }

    // `v` now looks sorted from up close. Split it into groups `[p, q)` where
    // `q` is the first position strictly greater than `v[p]`; every group must
    // be pairwise equivalent and strictly below everything to its right.
    let mut p = 0;
    while p < len {
        let mut q = p + 1;
        while q < len && !less(&v[p], &v[q]) {
            q += 1;
        }
        trace!(start = p, end = q, "equivalence group");

        for a in p..q {
            for b in a..q {
                if less(&v[a], &v[b]) || less(&v[b], &v[a]) {
                    return Some(Violation::NotEquivalent { first: a, second: b });
                }
            }
        }

        for a in p..q {
            for b in q..len {
                if !less(&v[a], &v[b]) || less(&v[b], &v[a]) {
                    return Some(Violation::NotOrdered { lower: a, upper: b });
                }
            }
        }

        p = q;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explain() -> CheckSettings {
        CheckSettings::default().explain(true)
    }

    #[test]
    fn empty_and_single() {
        let mut empty: [i32; 0] = [];
        assert!(check(&mut empty).ok);
        assert!(check_by(&mut empty, &explain(), |_, _| true).ok);

        let mut one = [42];
        assert!(check(&mut one).ok);
        assert!(check_by(&mut one, &explain(), |_, _| false).ok);
    }

    #[test]
    fn reflexive_single_element_fails() {
        let mut one = [42];
        let result = check_by(&mut one, &explain(), |a, b| a <= b);
        assert!(!result.ok);
        assert_eq!(result.violation, Some(Violation::NotEquivalent { first: 0, second: 0 }));
    }

    #[test]
    fn unsorted_reports_adjacent_pair() {
        let mut v = [1, 2, 5, 3, 4];
        let result = check_by(&mut v, &explain(), |a, b| a < b);
        assert!(!result.ok);
        assert_eq!(result.violation, Some(Violation::Unsorted { prev: 2, next: 3 }));
        assert_eq!(result.reason, "unsorted sequence: less(v[3], v[2]) is true");
    }

    #[test]
    fn reason_only_when_explaining() {
        let mut v = [2, 1];
        let quiet = check_with(&mut v, &CheckSettings::default());
        assert!(!quiet.ok);
        assert!(quiet.reason.is_empty());
        assert!(quiet.violation.is_some());

        let loud = check_with(&mut v, &explain());
        assert!(!loud.ok);
        assert!(!loud.reason.is_empty());

        let mut sorted = [1, 2];
        let passed = check_with(&mut sorted, &explain());
        assert!(passed.ok);
        assert!(passed.reason.is_empty());
    }

    #[test]
    fn less_transitivity_caught_across_groups() {
        // a < b and b < c, but not a < c.
        let less = |x: &char, y: &char| matches!((*x, *y), ('a', 'b') | ('b', 'c'));
        let mut v = ['a', 'b', 'c'];
        let result = check_by(&mut v, &explain(), less);
        assert!(!result.ok);
        assert_eq!(result.violation, Some(Violation::NotOrdered { lower: 0, upper: 2 }));
        assert!(result.reason.starts_with("not ordered"));
    }

    #[test]
    fn equivalence_transitivity_caught() {
        // a ~ b and b ~ c, but a < c.
        let less = |x: &char, y: &char| matches!((*x, *y), ('a', 'c'));
        let mut v = ['a', 'b', 'c'];
        let result = check_by(&mut v, &explain(), less);
        assert!(!result.ok);
        assert_eq!(result.violation, Some(Violation::NotOrdered { lower: 1, upper: 2 }));

        // Arranged so the group scan reaches all three first.
        let mut v = ['b', 'a', 'c'];
        let result = check_by(&mut v, &explain(), less);
        assert!(!result.ok);
        assert_eq!(result.violation, Some(Violation::NotEquivalent { first: 1, second: 2 }));
    }

    #[test]
    fn into_result_propagates() {
        fn run(v: &mut [i32]) -> Result<usize, Violation> {
            check(v).into_result()?;
            Ok(v.len())
        }
        assert_eq!(run(&mut [1, 2, 3]), Ok(3));
        assert_eq!(run(&mut [3, 2]), Err(Violation::Unsorted { prev: 0, next: 1 }));
    }

    #[test]
    fn settings_from_json() {
        let settings: CheckSettings = serde_json::from_str(r#"{"perform_prior_sort": true}"#).unwrap();
        assert!(settings.perform_prior_sort);
        assert!(!settings.explain_failure);
        assert_eq!(settings, CheckSettings::default().prior_sort(true));
    }

    #[test]
    fn comparator_calls_are_bounded() {
        let len = 50;
        let mut calls = 0usize;
        let mut v = (0..len).collect::<Vec<_>>();
        let result = check_by(&mut v, &CheckSettings::default(), |_, _| {
            calls += 1;
            false
        });
        assert!(result.ok);
        // One big group: adjacent scan, group extension, then a <= b pairs twice.
        assert!(calls <= 2 * len + len * (len + 1));
    }
}

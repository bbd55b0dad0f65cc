//! Brute-force check of the strict weak ordering axioms.
//!
//! This is an independent O(n^3) oracle for the quadratic checker: it looks
//! at every pair and triple of positions and never relies on the arrangement
//! of the sequence. Use it to cross-validate [`check_by`](crate::check_by) on
//! small inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four axioms of a strict weak ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axiom {
    /// `!less(a, a)`
    Irreflexivity,
    /// `less(a, b)` implies `!less(b, a)`
    Asymmetry,
    /// `less(a, b) && less(b, c)` implies `less(a, c)`
    Transitivity,
    /// `a ~ b && b ~ c` implies `a ~ c`, where `x ~ y` means neither is less.
    EquivalenceTransitivity,
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axiom::Irreflexivity => "irreflexivity",
            Axiom::Asymmetry => "asymmetry",
            Axiom::Transitivity => "transitivity",
            Axiom::EquivalenceTransitivity => "transitivity of equivalence",
        };
        f.write_str(name)
    }
}

/// The first axiom found broken, with the positions that witness it.
///
/// Unused slots of `positions` repeat the last meaningful position:
/// irreflexivity fills all three with `i`, asymmetry uses `(i, j, j)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxiomViolation {
    /// The broken axiom.
    pub axiom: Axiom,
    /// Witness positions `(i, j, k)`.
    pub positions: (usize, usize, usize),
}

impl fmt::Display for AxiomViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (i, j, k) = self.positions;
        match self.axiom {
            Axiom::Irreflexivity => write!(f, "{} broken at v[{}]", self.axiom, i),
            Axiom::Asymmetry => write!(f, "{} broken at v[{}], v[{}]", self.axiom, i, j),
            _ => write!(f, "{} broken at v[{}], v[{}], v[{}]", self.axiom, i, j, k),
        }
    }
}

/// Scans every pair and triple of positions of `v` and returns the first
/// broken axiom, or `None` if `less` is a strict weak ordering on `v`.
pub fn find_violation<T, F>(v: &[T], mut less: F) -> Option<AxiomViolation>
    where F: FnMut(&T, &T) -> bool
{
    let len = v.len();
    let found = |axiom, positions| Some(AxiomViolation { axiom, positions });

    for i in 0..len {
        if less(&v[i], &v[i]) {
            return found(Axiom::Irreflexivity, (i, i, i));
        }
    }

    for i in 0..len {
        for j in 0..len {
            if less(&v[i], &v[j]) && less(&v[j], &v[i]) {
                return found(Axiom::Asymmetry, (i, j, j));
            }
        }
    }

    for i in 0..len {
        for j in 0..len {
            for k in 0..len {
                if less(&v[i], &v[j]) && less(&v[j], &v[k]) && !less(&v[i], &v[k]) {
                    return found(Axiom::Transitivity, (i, j, k));
                }

                let mut equiv = |x: usize, y: usize| !less(&v[x], &v[y]) && !less(&v[y], &v[x]);
                if equiv(i, j) && equiv(j, k) && !equiv(i, k) {
                    return found(Axiom::EquivalenceTransitivity, (i, j, k));
                }
            }
        }
    }

    None
}

/// Returns true if `less` satisfies all four axioms on the elements of `v`.
pub fn holds<T, F>(v: &[T], less: F) -> bool
    where F: FnMut(&T, &T) -> bool
{
    find_violation(v, less).is_none()
}

//! The first pair of positions that broke the ordering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Describes where a comparator stopped behaving like a strict weak ordering.
///
/// All positions are indices into the sequence as it was arranged when the
/// violation was found, i.e. after the optional prior sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(tag = "kind")]
pub enum Violation {
    /// An element compares less than its predecessor.
    #[error("unsorted sequence: less(v[{next}], v[{prev}]) is true")]
    Unsorted {
        /// Position of the predecessor.
        prev: usize,
        /// Position right after `prev`.
        next: usize,
    },
    /// Two members of one equivalence group are not equivalent. With
    /// `first == second` the comparator is reflexive on that element.
    #[error("not equivalent: less(v[{first}], v[{second}]) or less(v[{second}], v[{first}]) is true")]
    NotEquivalent {
        /// Lower position inside the group.
        first: usize,
        /// Higher (or same) position inside the group.
        second: usize,
    },
    /// An element before a group boundary is not strictly less than an
    /// element after it.
    #[error("not ordered: less(v[{lower}], v[{upper}]) is false or less(v[{upper}], v[{lower}]) is true")]
    NotOrdered {
        /// Position inside the current group.
        lower: usize,
        /// Position after the current group.
        upper: usize,
    },
}

impl Violation {
    /// Returns the two positions involved, lower one first.
    pub fn positions(&self) -> (usize, usize) {
        match *self {
            Violation::Unsorted { prev, next } => (prev, next),
            Violation::NotEquivalent { first, second } => (first, second),
            Violation::NotOrdered { lower, upper } => (lower, upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_positions() {
        let v = Violation::Unsorted { prev: 3, next: 4 };
        assert_eq!(v.to_string(), "unsorted sequence: less(v[4], v[3]) is true");

        let v = Violation::NotOrdered { lower: 0, upper: 7 };
        assert!(v.to_string().contains("v[0]"));
        assert!(v.to_string().contains("v[7]"));
        assert_eq!(v.positions(), (0, 7));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let v = Violation::NotEquivalent { first: 1, second: 2 };
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["kind"], "NotEquivalent");
        assert_eq!(json["first"], 1);
        let back: Violation = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}

//! Longest-common-subsequence alignment of two sequences.
//!
//! The aligner works in two steps:
//!
//! 1. [`compute_lcs_table`] fills an `(m+1) x (n+1)` table of LCS lengths.
//!    This is the only step that can fail, with [`AlignError::Allocation`].
//! 2. [`reconstruct_alignment`] walks the table back from `(m, n)` and tags
//!    every element of both sequences as [`Tag::Match`], [`Tag::Deleted`]
//!    (expected only) or [`Tag::Inserted`] (actual only).
//!
//! The two tagged sequences keep their own order and length. They are meant
//! to be rendered separately, one line per side, not zipped together.
//!
//! ```
//! use simple_testsuite::align::{SequenceAligner, Tag};
//!
//! let expected: Vec<char> = "kitten".chars().collect();
//! let actual: Vec<char> = "sitting".chars().collect();
//! let result = SequenceAligner::new().align(&expected, &actual).unwrap();
//!
//! assert_eq!(result.lcs().len(), 4);
//! assert_eq!(result.expected_count(Tag::Deleted), 2);
//! assert_eq!(result.actual_count(Tag::Inserted), 3);
//! ```

mod backtrace;
mod table;

pub use backtrace::reconstruct_alignment;
pub use table::LcsTable;

use crate::errors::AlignError;

/// How an element takes part in the alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Present in both sequences at aligned positions.
    Match,
    /// Present only in the expected sequence.
    Deleted,
    /// Present only in the actual sequence.
    Inserted,
}

/// An element of one input sequence together with its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated<'a, T> {
    pub element: &'a T,
    pub tag: Tag,
}

impl<'a, T> Annotated<'a, T> {
    pub fn new(element: &'a T, tag: Tag) -> Self {
        Self { element, tag }
    }
}

/// Tagged copies of both input sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult<'a, T> {
    /// Expected elements in original order, tagged `Match` or `Deleted`.
    pub expected: Vec<Annotated<'a, T>>,
    /// Actual elements in original order, tagged `Match` or `Inserted`.
    pub actual: Vec<Annotated<'a, T>>,
}

impl<'a, T> AlignmentResult<'a, T> {
    /// Number of expected-side elements carrying `tag`.
    pub fn expected_count(&self, tag: Tag) -> usize {
        self.expected.iter().filter(|a| a.tag == tag).count()
    }

    /// Number of actual-side elements carrying `tag`.
    pub fn actual_count(&self, tag: Tag) -> usize {
        self.actual.iter().filter(|a| a.tag == tag).count()
    }

    /// The common subsequence, taken from the expected side.
    pub fn lcs(&self) -> Vec<&'a T> {
        self.expected
            .iter()
            .filter(|a| a.tag == Tag::Match)
            .map(|a| a.element)
            .collect()
    }

    /// True when no element was inserted or deleted.
    pub fn is_identical(&self) -> bool {
        self.expected
            .iter()
            .chain(self.actual.iter())
            .all(|a| a.tag == Tag::Match)
    }
}

/// Computes LCS tables and alignments, optionally bounded in table size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceAligner {
    cell_limit: Option<usize>,
}

impl SequenceAligner {
    /// Aligner limited only by available memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligner that refuses tables with more than `limit` cells.
    ///
    /// A refused table is reported exactly like a failed allocation.
    pub fn with_cell_limit(limit: usize) -> Self {
        Self {
            cell_limit: Some(limit),
        }
    }

    pub fn cell_limit(&self) -> Option<usize> {
        self.cell_limit
    }

    /// Build the LCS table for `expected` and `actual`.
    pub fn compute_table<T: PartialEq>(
        &self,
        expected: &[T],
        actual: &[T],
    ) -> Result<LcsTable, AlignError> {
        LcsTable::build(expected, actual, self.cell_limit)
    }

    /// Build the table and reconstruct the alignment in one call.
    pub fn align<'a, T: PartialEq>(
        &self,
        expected: &'a [T],
        actual: &'a [T],
    ) -> Result<AlignmentResult<'a, T>, AlignError> {
        let table = self.compute_table(expected, actual)?;
        Ok(reconstruct_alignment(&table, expected, actual))
    }
}

/// Build the LCS table for `expected` and `actual` without a size limit.
pub fn compute_lcs_table<T: PartialEq>(
    expected: &[T],
    actual: &[T],
) -> Result<LcsTable, AlignError> {
    SequenceAligner::new().compute_table(expected, actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Reference LCS length computed with two rolling rows.
    fn reference_lcs_len(x: &[u8], y: &[u8]) -> usize {
        let mut prev = vec![0usize; y.len() + 1];
        let mut curr = vec![0usize; y.len() + 1];
        for a in x {
            for (j, b) in y.iter().enumerate() {
                curr[j + 1] = if a == b {
                    prev[j] + 1
                } else {
                    curr[j].max(prev[j + 1])
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[y.len()]
    }

    fn is_subsequence<T: PartialEq>(needle: &[&T], haystack: &[T]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|n| it.any(|h| h == *n))
    }

    #[test]
    fn test_lcs_length_classic() {
        let x = chars("ABCBDAB");
        let y = chars("BDCABA");
        let table = compute_lcs_table(&x, &y).unwrap();
        assert_eq!(table.lcs_len(), 4);

        let result = reconstruct_alignment(&table, &x, &y);
        let lcs = result.lcs();
        assert_eq!(lcs.len(), 4);
        assert!(is_subsequence(&lcs, &x));
        assert!(is_subsequence(&lcs, &y));
    }

    #[test]
    fn test_empty_expected() {
        let x: Vec<char> = Vec::new();
        let y = chars("abc");
        let result = SequenceAligner::new().align(&x, &y).unwrap();
        assert!(result.expected.is_empty());
        assert_eq!(result.actual_count(Tag::Inserted), 3);
    }

    #[test]
    fn test_empty_actual() {
        let x = chars("abc");
        let y: Vec<char> = Vec::new();
        let result = SequenceAligner::new().align(&x, &y).unwrap();
        assert!(result.actual.is_empty());
        assert_eq!(result.expected_count(Tag::Deleted), 3);
    }

    #[test]
    fn test_identity() {
        let x = chars("identical input");
        let result = SequenceAligner::new().align(&x, &x).unwrap();
        assert!(result.is_identical());
        let expected: Vec<char> = result.expected.iter().map(|a| *a.element).collect();
        let actual: Vec<char> = result.actual.iter().map(|a| *a.element).collect();
        assert_eq!(expected, x);
        assert_eq!(actual, x);
    }

    #[test]
    fn test_generic_over_tokens() {
        let x = vec!["let", "x", "=", "1", ";"];
        let y = vec!["let", "mut", "x", "=", "2", ";"];
        let result = SequenceAligner::new().align(&x, &y).unwrap();
        assert_eq!(result.lcs(), vec![&"let", &"x", &"=", &";"]);
        assert_eq!(result.actual_count(Tag::Inserted), 2);
        assert_eq!(result.expected_count(Tag::Deleted), 1);
    }

    #[test]
    fn test_cell_limit_reports_allocation_failure() {
        let x = chars("a much longer expected value");
        let y = chars("a much longer actual value");
        let aligner = SequenceAligner::with_cell_limit(16);
        assert_eq!(aligner.cell_limit(), Some(16));
        assert_eq!(
            aligner.align(&x, &y),
            Err(AlignError::Allocation {
                rows: x.len() + 1,
                cols: y.len() + 1,
            })
        );
    }

    #[test]
    fn test_length_at_usize_limit_reports_allocation_failure() {
        // SAFETY: `()` is zero-sized, so the slice spans zero bytes.
        let huge: &[()] = unsafe {
            std::slice::from_raw_parts(std::ptr::NonNull::<()>::dangling().as_ptr(), usize::MAX)
        };
        let expected = AlignError::Allocation {
            rows: usize::MAX,
            cols: 2,
        };

        assert_eq!(compute_lcs_table(huge, &[()]), Err(expected.clone()));
        assert_eq!(SequenceAligner::new().align(huge, &[()]), Err(expected));
        assert!(SequenceAligner::with_cell_limit(16).align(&[()], huge).is_err());
    }

    proptest! {
        #[test]
        fn prop_table_matches_reference(
            x in proptest::collection::vec(0u8..4, 0..24),
            y in proptest::collection::vec(0u8..4, 0..24),
        ) {
            let table = compute_lcs_table(&x, &y).unwrap();
            prop_assert_eq!(table.lcs_len(), reference_lcs_len(&x, &y));
        }

        #[test]
        fn prop_tags_account_for_every_element(
            x in proptest::collection::vec(0u8..4, 0..24),
            y in proptest::collection::vec(0u8..4, 0..24),
        ) {
            let result = SequenceAligner::new().align(&x, &y).unwrap();
            let matched = result.expected_count(Tag::Match);

            prop_assert_eq!(matched, result.actual_count(Tag::Match));
            prop_assert_eq!(matched, reference_lcs_len(&x, &y));
            prop_assert_eq!(matched + result.expected_count(Tag::Deleted), x.len());
            prop_assert_eq!(matched + result.actual_count(Tag::Inserted), y.len());
            prop_assert_eq!(result.expected_count(Tag::Inserted), 0);
            prop_assert_eq!(result.actual_count(Tag::Deleted), 0);
        }

        #[test]
        fn prop_order_is_preserved(
            x in proptest::collection::vec(0u8..4, 0..24),
            y in proptest::collection::vec(0u8..4, 0..24),
        ) {
            let result = SequenceAligner::new().align(&x, &y).unwrap();
            let expected: Vec<u8> = result.expected.iter().map(|a| *a.element).collect();
            let actual: Vec<u8> = result.actual.iter().map(|a| *a.element).collect();
            prop_assert_eq!(expected, x);
            prop_assert_eq!(actual, y);
        }
    }
}

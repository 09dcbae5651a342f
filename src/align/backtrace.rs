//! Alignment reconstruction from a filled [`LcsTable`].

use super::table::LcsTable;
use super::{AlignmentResult, Annotated, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Match,
    Insert,
    Delete,
}

/// Walk `table` from `(m, n)` back to `(0, 0)` and tag every element.
///
/// At each cell a match is taken first, then an insertion when
/// `table[i][j-1] >= table[i-1][j]`, otherwise a deletion. On a tie the
/// insertion therefore wins.
///
/// # Panics
///
/// Panics if the dimensions of `table` do not fit `expected` and `actual`,
/// i.e. it was built from other sequences.
pub fn reconstruct_alignment<'a, T: PartialEq>(
    table: &LcsTable,
    expected: &'a [T],
    actual: &'a [T],
) -> AlignmentResult<'a, T> {
    assert!(
        table.rows() - 1 == expected.len() && table.cols() - 1 == actual.len(),
        "LCS table is {}x{} but the sequences need {}x{}",
        table.rows(),
        table.cols(),
        expected.len() + 1,
        actual.len() + 1,
    );

    let (mut i, mut j) = (expected.len(), actual.len());
    let mut moves = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && expected[i - 1] == actual[j - 1] {
            moves.push(Move::Match);
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            moves.push(Move::Insert);
            j -= 1;
        } else {
            // i > 0 here, and either j == 0 or table[i][j-1] < table[i-1][j].
            moves.push(Move::Delete);
            i -= 1;
        }
    }

    let mut expected_out = Vec::with_capacity(expected.len());
    let mut actual_out = Vec::with_capacity(actual.len());
    let (mut xi, mut yi) = (0, 0);

    for step in moves.into_iter().rev() {
        match step {
            Move::Match => {
                expected_out.push(Annotated::new(&expected[xi], Tag::Match));
                actual_out.push(Annotated::new(&actual[yi], Tag::Match));
                xi += 1;
                yi += 1;
            }
            Move::Insert => {
                actual_out.push(Annotated::new(&actual[yi], Tag::Inserted));
                yi += 1;
            }
            Move::Delete => {
                expected_out.push(Annotated::new(&expected[xi], Tag::Deleted));
                xi += 1;
            }
        }
    }

    AlignmentResult {
        expected: expected_out,
        actual: actual_out,
    }
}

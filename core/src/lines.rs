use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Coordinates of one candidate winning pattern, in board order.
pub type LineCells = SmallVec<[Coord2; 8]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Row(Coord),
    Column(Coord),
    Diagonal,
    AntiDiagonal,
}

/// One candidate winning pattern: `board_size` distinct coordinates forming
/// a row, a column, or one of the two main diagonals. Derived once at setup
/// and shared read-only by the win scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinLine {
    kind: LineKind,
    cells: LineCells,
}

impl WinLine {
    fn new(kind: LineKind, cells: LineCells) -> Self {
        Self { kind, cells }
    }

    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn cells(&self) -> &[Coord2] {
        &self.cells
    }
}

/// Derives every candidate winning line for a square board: rows in index
/// order, then columns in index order, then the main diagonal, then the
/// anti-diagonal. A board of size `n` yields `2n + 2` lines.
///
/// For `n == 1` both diagonals collapse onto the single cell and are kept
/// as duplicates.
pub fn derive_win_lines(board_size: Coord) -> Vec<WinLine> {
    let n = board_size;
    let mut lines = Vec::with_capacity(usize::from(n) * 2 + 2);

    for row in 0..n {
        let cells = (0..n).map(|col| (row, col)).collect();
        lines.push(WinLine::new(LineKind::Row(row), cells));
    }
    for col in 0..n {
        let cells = (0..n).map(|row| (row, col)).collect();
        lines.push(WinLine::new(LineKind::Column(col), cells));
    }
    lines.push(WinLine::new(
        LineKind::Diagonal,
        (0..n).map(|i| (i, i)).collect(),
    ));
    lines.push(WinLine::new(
        LineKind::AntiDiagonal,
        (0..n).map(|i| (i, n - 1 - i)).collect(),
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_is_two_n_plus_two() {
        for n in 2..=8 {
            let lines = derive_win_lines(n);
            assert_eq!(lines.len(), usize::from(n) * 2 + 2);
        }
    }

    #[test]
    fn every_line_has_n_distinct_in_bounds_cells() {
        for n in 2..=6 {
            for line in derive_win_lines(n) {
                assert_eq!(line.cells().len(), usize::from(n));
                for &(row, col) in line.cells() {
                    assert!(row < n && col < n);
                }
                for (i, a) in line.cells().iter().enumerate() {
                    assert!(!line.cells()[..i].contains(a));
                }
            }
        }
    }

    #[test]
    fn derivation_order_is_rows_columns_diagonals() {
        let lines = derive_win_lines(3);

        assert_eq!(lines[0].kind(), LineKind::Row(0));
        assert_eq!(lines[1].kind(), LineKind::Row(1));
        assert_eq!(lines[2].kind(), LineKind::Row(2));
        assert_eq!(lines[3].kind(), LineKind::Column(0));
        assert_eq!(lines[4].kind(), LineKind::Column(1));
        assert_eq!(lines[5].kind(), LineKind::Column(2));
        assert_eq!(lines[6].kind(), LineKind::Diagonal);
        assert_eq!(lines[7].kind(), LineKind::AntiDiagonal);

        assert_eq!(lines[1].cells(), &[(1, 0), (1, 1), (1, 2)]);
        assert_eq!(lines[4].cells(), &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(lines[6].cells(), &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(lines[7].cells(), &[(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn single_cell_board_keeps_duplicate_diagonals() {
        let lines = derive_win_lines(1);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2].cells(), &[(0, 0)]);
        assert_eq!(lines[2].cells(), lines[3].cells());
    }
}

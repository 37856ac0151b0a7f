//! Shape module - piece matrices and naive rotation
//!
//! A shape is a small rectangular binary matrix (at most 4x4). Cells outside
//! `rows x cols` are always empty, so derived equality compares shapes exactly.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_SHAPE_DIM};

/// Offset of a single occupied cell relative to the piece origin, as `(dx, dy)`
pub type MinoOffset = (i8, i8);

/// Occupied offsets of a shape (up to 16 for a full 4x4 matrix)
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of occupied flags
    ///
    /// Returns `None` for an empty matrix, ragged rows, or anything larger
    /// than 4x4.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self::build(rows))
    }

    /// Copy pre-validated rows into a matrix
    fn build(rows: &[&[bool]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..row.len()].copy_from_slice(row);
        }
        Self {
            rows: rows.len() as u8,
            cols: rows.first().map_or(0, |row| row.len()) as u8,
            cells,
        }
    }

    /// Unrotated shape of a piece kind
    pub fn base(kind: PieceKind) -> Self {
        Self::build(kind.base_rows())
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at shape-local (x, y) is occupied
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.cols as usize && y < self.rows as usize && self.cells[y][x]
    }

    /// Rotate 90° clockwise
    ///
    /// For an R x C matrix the result is C x R with
    /// `rotated[j][R - 1 - i] = original[i][j]`.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for i in 0..rows {
            for j in 0..cols {
                cells[j][rows - 1 - i] = self.cells[i][j];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Occupied offsets, row-major
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for y in 0..self.rows as usize {
            for x in 0..self.cols as usize {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rows as strings of `#` and `.` (for tests and debugging)
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.rows as usize)
            .map(|y| {
                (0..self.cols as usize)
                    .map(|x| if self.cells[y][x] { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dimensions() {
        let i = Shape::base(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));

        let o = Shape::base(PieceKind::O);
        assert_eq!((o.rows(), o.cols()), (2, 2));

        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            let s = Shape::base(kind);
            assert_eq!((s.rows(), s.cols()), (2, 3), "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let t = Shape::base(PieceKind::T);
        assert_eq!(t.to_strings(), vec![".#.", "###"]);

        let r = t.rotate_cw();
        assert_eq!(r.to_strings(), vec!["#.", "##", "#."]);
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let r = Shape::base(PieceKind::I).rotate_cw();
        assert_eq!((r.rows(), r.cols()), (4, 1));
        assert_eq!(r.minos().as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[]]).is_none());
        assert!(Shape::from_rows(&[&[true, true], &[true]]).is_none());
        assert!(Shape::from_rows(&[&[true; 5]]).is_none());
    }

    #[test]
    fn test_is_filled_outside_bounds() {
        let o = Shape::base(PieceKind::O);
        assert!(o.is_filled(1, 1));
        assert!(!o.is_filled(2, 0));
        assert!(!o.is_filled(0, 2));
    }
}

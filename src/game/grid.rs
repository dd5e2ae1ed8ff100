use std::fmt;

use super::Piece;
use crate::error::MoveError;

/// The vertical-drop playing field.
///
/// Cells are addressed as `(column, row)` with row 0 at the bottom. Pieces
/// only ever enter through [`Grid::drop_piece`], so every column is filled
/// bottom-up with no gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major, bottom row first
    cells: Vec<Piece>,
}

impl Grid {
    /// Create a grid with every cell empty
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`. Configured sizes are
    /// bounded by [`crate::config::MAX_GRID_SIDE`].
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width
            .checked_mul(height)
            .expect("grid dimensions overflow usize");
        Grid {
            width,
            height,
            cells: vec![Piece::Empty; cells],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the piece at a position, or `None` outside the grid
    pub fn get(&self, column: usize, row: usize) -> Option<Piece> {
        if column < self.width && row < self.height {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// Check if a column has no empty cell left.
    /// Columns outside the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_empty_row(column).is_none()
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Columns that can still accept a piece, left to right
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, piece: Piece) -> Result<usize, MoveError> {
        if column >= self.width {
            return Err(MoveError::InvalidColumn);
        }
        if piece.is_empty() {
            return Err(MoveError::EmptyPiece);
        }

        let row = self.lowest_empty_row(column).ok_or(MoveError::ColumnFull)?;
        self.cells[row * self.width + column] = piece;
        tracing::debug!(column, row, %piece, "piece dropped");
        Ok(row)
    }

    /// Rows from the top of the grid down, each as a left-to-right slice.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Piece]> + '_ {
        (0..self.height)
            .rev()
            .map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height).find(|&row| self.cells[row * self.width + column].is_empty())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(7, 6)
    }
}

impl fmt::Display for Grid {
    /// Column numbers (1-based) followed by the rows, top first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (1..=self.width).map(|c| c.to_string()).collect();
        writeln!(f, "{}", header.join(" "))?;
        for row in self.rows() {
            for piece in row {
                write!(f, "{} ", piece)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

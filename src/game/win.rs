//! Win detection: scans every line of the grid for a run of identical
//! non-empty pieces.
//!
//! All four axes share one routine, [`WinDetector::scan_line`], which walks a
//! line from a start cell along a direction vector and counts consecutive
//! equal pieces. An empty cell, or a change of piece, restarts the count.
//! Axes are checked in the order of [`Axis::ALL`]. Within an axis, lines are
//! checked in the order listed on each variant. The first run found is the
//! one reported.

use super::{Grid, Piece, Player};

/// Run length needed to win a standard game
pub const DEFAULT_RUN_LENGTH: usize = 4;

/// A direction in which runs are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Up each column, columns left to right
    Vertical,
    /// Along each row left to right, rows bottom to top
    Horizontal,
    /// Bottom-left to top-right; lines start on the bottom row left to
    /// right, then on the left column bottom to top
    DiagonalAscending,
    /// Bottom-right to top-left; lines start on the bottom row right to
    /// left, then on the right column bottom to top
    DiagonalDescending,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagonalAscending,
        Axis::DiagonalDescending,
    ];

    /// Step as `(column delta, row delta)`
    pub fn direction(self) -> (isize, isize) {
        match self {
            Axis::Vertical => (0, 1),
            Axis::Horizontal => (1, 0),
            Axis::DiagonalAscending => (1, 1),
            Axis::DiagonalDescending => (-1, 1),
        }
    }

    /// Start cells of every line along this axis, in scan order.
    fn line_starts(self, width: usize, height: usize) -> Vec<(usize, usize)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        match self {
            Axis::Vertical => (0..width).map(|col| (col, 0)).collect(),
            Axis::Horizontal => (0..height).map(|row| (0, row)).collect(),
            Axis::DiagonalAscending => (0..width)
                .map(|col| (col, 0))
                .chain((1..height).map(|row| (0, row)))
                .collect(),
            Axis::DiagonalDescending => (0..width)
                .rev()
                .map(|col| (col, 0))
                .chain((1..height).map(|row| (width - 1, row)))
                .collect(),
        }
    }
}

/// A winning run found on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub piece: Piece,
    pub axis: Axis,
    /// `(column, row)` of each piece in the run, in scan order
    pub cells: Vec<(usize, usize)>,
}

/// Finds runs of `run_length` identical non-empty pieces.
///
/// The detector holds no game state: it is recomputed from the grid on every
/// call, so repeated evaluation of an unchanged grid gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinDetector {
    run_length: usize,
}

impl WinDetector {
    /// A run length of zero is treated as one.
    pub fn new(run_length: usize) -> Self {
        WinDetector {
            run_length: run_length.max(1),
        }
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Find the winner of `grid`, if any, among `players`.
    ///
    /// A run of a piece nobody holds is logged and reported as no winner.
    pub fn evaluate<'p>(&self, grid: &Grid, players: &'p [Player]) -> Option<&'p Player> {
        let connection = self.find_connection(grid)?;
        let winner = players.iter().find(|p| p.piece() == connection.piece);
        if winner.is_none() {
            tracing::warn!(piece = %connection.piece, "winning piece has no owner");
        }
        winner
    }

    /// First winning run on the grid, scanning axes in [`Axis::ALL`] order.
    pub fn find_connection(&self, grid: &Grid) -> Option<Connection> {
        Axis::ALL
            .into_iter()
            .find_map(|axis| self.scan_axis(grid, axis))
    }

    fn scan_axis(&self, grid: &Grid, axis: Axis) -> Option<Connection> {
        axis.line_starts(grid.width(), grid.height())
            .into_iter()
            .find_map(|start| self.scan_line(grid, axis, start))
    }

    /// Walk one line until it leaves the grid, counting consecutive equal
    /// pieces.
    fn scan_line(&self, grid: &Grid, axis: Axis, start: (usize, usize)) -> Option<Connection> {
        let (dx, dy) = axis.direction();
        let mut position = (start.0 as isize, start.1 as isize);
        let mut previous = Piece::Empty;
        let mut run = 0;

        while let Some(piece) = cell_at(grid, position) {
            if piece.is_empty() || piece != previous {
                run = 1;
            } else {
                run += 1;
            }
            previous = piece;

            if !piece.is_empty() && run >= self.run_length {
                let cells = (0..self.run_length as isize)
                    .rev()
                    .map(|back| {
                        (
                            (position.0 - back * dx) as usize,
                            (position.1 - back * dy) as usize,
                        )
                    })
                    .collect();
                return Some(Connection { piece, axis, cells });
            }

            position = (position.0 + dx, position.1 + dy);
        }

        None
    }
}

impl Default for WinDetector {
    fn default() -> Self {
        WinDetector::new(DEFAULT_RUN_LENGTH)
    }
}

fn cell_at(grid: &Grid, (col, row): (isize, isize)) -> Option<Piece> {
    let col = usize::try_from(col).ok()?;
    let row = usize::try_from(row).ok()?;
    grid.get(col, row)
}

use super::PlayerColor;
use crate::error::GameError;

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;

/// Number of same-coloured discs in a line needed to win.
pub const CONNECT: usize = 4;

/// Axis directions as (column step, row step): vertical, horizontal, `/` and `\`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerColor),
}

impl Cell {
    pub fn color(self) -> Option<PlayerColor> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(color),
        }
    }
}

/// Fixed 7x6 grid stored column-major in a single buffer.
///
/// Cell `(column, row)` lives at `column * ROWS + row`; row 0 is the bottom.
/// Occupied cells of a column are always contiguous from row 0 upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; COLUMNS * ROWS],
    heights: [u8; COLUMNS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; COLUMNS * ROWS],
            heights: [0; COLUMNS],
        }
    }

    fn index(column: usize, row: usize) -> usize {
        column * ROWS + row
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[Self::index(column, row)]
    }

    /// Number of discs stacked in `column`.
    pub fn height(&self, column: usize) -> usize {
        self.heights[column] as usize
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= COLUMNS || self.height(column) == ROWS
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.disc_count() == COLUMNS * ROWS
    }

    /// Total discs on the board.
    pub fn disc_count(&self) -> usize {
        self.heights.iter().map(|&h| h as usize).sum()
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_disc(&mut self, column: usize, color: PlayerColor) -> Result<usize, GameError> {
        if column >= COLUMNS {
            return Err(GameError::out_of_bounds(column));
        }
        if self.is_column_full(column) {
            return Err(GameError::ColumnFull { column });
        }

        let row = self.height(column);
        self.cells[Self::index(column, row)] = Cell::Occupied(color);
        self.heights[column] += 1;
        Ok(row)
    }

    /// Check if the disc at (column, row) completes a line of four.
    pub fn check_win(&self, column: usize, row: usize) -> bool {
        let Some(color) = self.get(column, row).color() else {
            return false;
        };

        DIRECTIONS.iter().any(|&(dc, dr)| {
            let forward = self.run_length(column, row, dc, dr, color);
            let backward = self.run_length(column, row, -dc, -dr, color);
            forward + backward + 1 >= CONNECT
        })
    }

    /// Count consecutive `color` discs starting next to (column, row) and
    /// stepping by (dc, dr), stopping at the edge or the first mismatch.
    fn run_length(&self, column: usize, row: usize, dc: isize, dr: isize, color: PlayerColor) -> usize {
        let mut count = 0;
        let mut c = column as isize + dc;
        let mut r = row as isize + dr;

        while count < CONNECT - 1
            && (0..COLUMNS as isize).contains(&c)
            && (0..ROWS as isize).contains(&r)
            && self.get(c as usize, r as usize) == Cell::Occupied(color)
        {
            count += 1;
            c += dc;
            r += dr;
        }

        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt;

use crate::error::FenceError;

/// A plot coordinate: `row` indexes lines of the map, `col` indexes characters within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`, or `None` when that
    /// step would leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let Position { row, col } = self;
        match direction {
            Direction::Up => row.checked_sub(1).map(|row| Position { row, col }),
            Direction::Down => Some(Position { row: row + 1, col }),
            Direction::Left => col.checked_sub(1).map(|col| Position { row, col }),
            Direction::Right => Some(Position { row, col: col + 1 }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// How a plot relates to the plot next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// Same label and inside the map: the region carries on here.
    Continuation(Position),
    /// Off the map or a different label: a fence goes here.
    Border,
}

/// Read-only view over the garden rows. Rows may differ in length, so bounds
/// are checked against the row being addressed rather than a global width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Map {
    rows: Vec<Vec<char>>,
}

impl Map {
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Total number of plots across every row.
    pub fn plot_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.col < self.row_len(pos.row)
    }

    pub fn label_at(&self, pos: Position) -> Result<char, FenceError> {
        self.rows
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .ok_or(FenceError::OutOfRange {
                row: pos.row,
                col: pos.col,
            })
    }

    /// Every position on the map in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| (0..cells.len()).map(move |col| Position { row, col }))
    }

    fn classify(&self, pos: Position, label: char, direction: Direction) -> Neighbor {
        match pos.step(direction) {
            Some(next) if self.label_at(next).is_ok_and(|other| other == label) => {
                Neighbor::Continuation(next)
            }
            _ => Neighbor::Border,
        }
    }

    /// Classifies all four neighbours of `pos`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, pos: Position) -> Result<[(Direction, Neighbor); 4], FenceError> {
        let label = self.label_at(pos)?;
        Ok(Direction::ALL.map(|direction| (direction, self.classify(pos, label, direction))))
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for label in row {
                write!(f, "{}", label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

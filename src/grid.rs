//! Rectangular grid of maze cells
//!
//! [CellGrid] owns every [Cell] and is the only place where wall and
//! visited state is mutated. Walls between neighbors are always cleared in
//! pairs; the only single-sided removal is [CellGrid::open_boundary_wall],
//! which is restricted to walls facing outside of the grid.

use std::fmt;

use bitflags::bitflags;

use crate::error::{MazeError, Result};

/// Location of a cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Position one step towards `side`, if it does not underflow.
    ///
    /// The result is not checked against grid dimensions, see
    /// [CellGrid::neighbor] for that.
    pub fn step(self, side: Side) -> Option<Self> {
        let (dc, dr) = side.offset();
        Some(Self {
            col: self.col.checked_add_signed(dc)?,
            row: self.row.checked_add_signed(dr)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(usize, usize)> for Position {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

/// One side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Column and row delta of the neighbor on this side
    pub fn offset(self) -> (isize, isize) {
        match self {
            Side::Top => (0, -1),
            Side::Right => (1, 0),
            Side::Bottom => (0, 1),
            Side::Left => (-1, 0),
        }
    }

    /// Side of `a` that faces `b`, or `None` if the cells are not adjacent
    pub fn between(a: Position, b: Position) -> Option<Self> {
        let dc = b.col as i128 - a.col as i128;
        let dr = b.row as i128 - a.row as i128;
        match (dc, dr) {
            (0, -1) => Some(Side::Top),
            (1, 0) => Some(Side::Right),
            (0, 1) => Some(Side::Bottom),
            (-1, 0) => Some(Side::Left),
            _ => None,
        }
    }
}

bitflags! {
    /// Walls standing around a single cell, one bit per side.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
    }
}

impl From<Side> for Walls {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Walls::TOP,
            Side::Right => Walls::RIGHT,
            Side::Bottom => Walls::BOTTOM,
            Side::Left => Walls::LEFT,
        }
    }
}

/// Single maze cell
///
/// The `visited` flag is shared by generation ("carved") and solving
/// ("explored"); [CellGrid::reset_visited] must run between the phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    walls: Walls,
    visited: bool,
}

impl Cell {
    fn new(position: Position) -> Self {
        Self {
            position,
            walls: Walls::all(),
            visited: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, side: Side) -> bool {
        self.walls.contains(side.into())
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }
}

/// Fixed-size `num_cols × num_rows` collection of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    num_cols: usize,
    num_rows: usize,
    /// Cells in row-major order
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a grid with every wall standing and no cell visited.
    ///
    /// Returns [MazeError::InvalidDimensions] if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use maze_solver::grid::{CellGrid, Position, Side};
    ///
    /// let grid = CellGrid::new(3, 2).unwrap();
    /// let cell = grid.get(Position::new(2, 1)).unwrap();
    /// assert!(cell.has_wall(Side::Left));
    /// assert!(!cell.is_visited());
    /// assert!(CellGrid::new(0, 2).is_err());
    /// ```
    pub fn new(num_cols: usize, num_rows: usize) -> Result<Self> {
        if num_cols < 1 || num_rows < 1 {
            return Err(MazeError::InvalidDimensions { num_cols, num_rows });
        }
        let cells = (0..num_rows)
            .flat_map(|row| (0..num_cols).map(move |col| Cell::new(Position::new(col, row))))
            .collect();
        Ok(Self {
            num_cols,
            num_rows,
            cells,
        })
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, grids have at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Top-left corner, where the entrance is opened
    pub fn start(&self) -> Position {
        Position::new(0, 0)
    }

    /// Bottom-right corner, where the exit is opened
    pub fn goal(&self) -> Position {
        Position::new(self.num_cols - 1, self.num_rows - 1)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.num_cols && pos.row < self.num_rows
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.row * self.num_cols + pos.col)
        } else {
            Err(out_of_bounds(pos))
        }
    }

    pub fn get(&self, pos: Position) -> Result<&Cell> {
        let idx = self.index(pos)?;
        Ok(&self.cells[idx])
    }

    /// Look up a cell by signed coordinates, as given by an outside caller.
    ///
    /// Negative coordinates are reported as [MazeError::OutOfBounds].
    pub fn get_signed(&self, col: i64, row: i64) -> Result<&Cell> {
        match (usize::try_from(col), usize::try_from(row)) {
            (Ok(c), Ok(r)) => self.get(Position::new(c, r)),
            _ => Err(MazeError::OutOfBounds { col, row }),
        }
    }

    /// In-bounds neighbor of `pos` on `side`
    pub fn neighbor(&self, pos: Position, side: Side) -> Option<Position> {
        pos.step(side).filter(|n| self.contains(*n))
    }

    /// In-bounds neighbors of `pos`, enumerated in `order`
    pub fn neighbors<'a>(
        &'a self,
        pos: Position,
        order: &'a [Side],
    ) -> impl Iterator<Item = (Side, Position)> + 'a {
        order
            .iter()
            .filter_map(move |&side| self.neighbor(pos, side).map(|n| (side, n)))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn is_visited(&self, pos: Position) -> Result<bool> {
        Ok(self.get(pos)?.visited)
    }

    pub fn mark_visited(&mut self, pos: Position) -> Result<()> {
        let idx = self.index(pos)?;
        self.cells[idx].visited = true;
        Ok(())
    }

    /// Clear the visited flag of every cell. Walls are left as they are.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }

    /// Remove the wall shared by two adjacent cells.
    ///
    /// Both facing walls are cleared, or neither is: all checks run before
    /// the grid is touched.
    ///
    /// # Examples
    /// ```
    /// use maze_solver::grid::{CellGrid, Position, Side};
    /// use maze_solver::MazeError;
    ///
    /// let mut grid = CellGrid::new(3, 3).unwrap();
    /// let (a, b) = (Position::new(0, 0), Position::new(1, 0));
    /// grid.remove_wall_between(a, b).unwrap();
    /// assert!(!grid.get(a).unwrap().has_wall(Side::Right));
    /// assert!(!grid.get(b).unwrap().has_wall(Side::Left));
    ///
    /// let err = grid.remove_wall_between(a, Position::new(2, 2)).unwrap_err();
    /// assert!(matches!(err, MazeError::NotAdjacent { .. }));
    /// ```
    pub fn remove_wall_between(&mut self, a: Position, b: Position) -> Result<()> {
        let ia = self.index(a)?;
        let ib = self.index(b)?;
        let side = Side::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;

        self.cells[ia].walls.remove(side.into());
        self.cells[ib].walls.remove(side.opposite().into());
        Ok(())
    }

    /// True if the walls between two adjacent cells are open
    pub fn open_walls_between(&self, a: Position, b: Position) -> Result<bool> {
        let side = Side::between(a, b).ok_or(MazeError::NotAdjacent { a, b })?;
        let ca = self.get(a)?;
        let cb = self.get(b)?;
        Ok(!ca.has_wall(side) && !cb.has_wall(side.opposite()))
    }

    /// Clear a wall that faces outside of the grid (entrance or exit).
    ///
    /// Internal walls have a neighbor on the other side and must go through
    /// [Self::remove_wall_between]; asking for one here is an
    /// [MazeError::InvalidArgument].
    pub fn open_boundary_wall(&mut self, pos: Position, side: Side) -> Result<()> {
        let idx = self.index(pos)?;
        if let Some(n) = self.neighbor(pos, side) {
            return Err(MazeError::InvalidArgument(format!(
                "{side:?} wall of {pos} is shared with {n}, not a boundary wall"
            )));
        }
        self.cells[idx].walls.remove(side.into());
        Ok(())
    }

    /// Number of broken walls between pairs of cells, each pair counted once
    pub fn broken_internal_walls(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|cell| {
                [Side::Right, Side::Bottom]
                    .into_iter()
                    .filter(move |&side| !cell.has_wall(side))
                    .filter(move |&side| self.neighbor(cell.position, side).is_some())
            })
            .count()
    }
}

fn out_of_bounds(pos: Position) -> MazeError {
    MazeError::OutOfBounds {
        col: i64::try_from(pos.col).unwrap_or(i64::MAX),
        row: i64::try_from(pos.row).unwrap_or(i64::MAX),
    }
}

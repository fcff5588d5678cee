//! Maze solving

use log::{debug, trace};

use crate::error::Result;
use crate::grid::{CellGrid, Position, Side};
use crate::renderer::Renderer;

/// State of a cell after [MazeSolver::solve]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unvisited,
    /// On the path that reached the goal
    OnPath,
    /// Visited, then backtracked out of
    Explored,
}

/// Pending work of one cell on the search path
struct Frame {
    pos: Position,
    /// Index into the direction order of the next side to try
    next: usize,
}

/// Depth-first search through open walls.
///
/// The first path found is returned, which is not necessarily the
/// shortest. In a perfect maze there is only one.
pub struct MazeSolver {
    order: [Side; 4],
    path: Vec<Position>,
}

impl Default for MazeSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeSolver {
    /// Priority in which directions are tried from each cell
    pub const DIRECTION_ORDER: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub fn new() -> Self {
        Self {
            order: Self::DIRECTION_ORDER,
            path: Vec::new(),
        }
    }

    /// Use another direction priority
    pub fn with_order(mut self, order: [Side; 4]) -> Self {
        self.order = order;
        self
    }

    /// Path from start to goal found by the last successful solve, empty
    /// otherwise
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Solve from the top-left to the bottom-right corner of `grid`.
    pub fn solve(&mut self, grid: &mut CellGrid, renderer: &mut dyn Renderer) -> Result<bool> {
        let (start, goal) = (grid.start(), grid.goal());
        self.solve_between(grid, start, goal, renderer)
    }

    /// Search a path from `start` to `goal`.
    ///
    /// Expects the visited flags of `grid` to be cleared. Each step marks
    /// the current cell, then tries the directions in order, skipping
    /// cells outside the grid, cells already visited and sides where a
    /// wall stands. A dead end backtracks to the previous cell, reported
    /// to `renderer` as an undo move. Returns as soon as `goal` is
    /// reached.
    ///
    /// Fails with [crate::MazeError::OutOfBounds] before touching the grid if
    /// `start` or `goal` lies outside of it.
    pub fn solve_between(
        &mut self,
        grid: &mut CellGrid,
        start: Position,
        goal: Position,
        renderer: &mut dyn Renderer,
    ) -> Result<bool> {
        grid.get(start)?;
        grid.get(goal)?;
        self.path.clear();

        let mut frames = vec![Frame {
            pos: start,
            next: 0,
        }];
        self.visit(grid, start, renderer)?;

        let solved = if start == goal {
            true
        } else {
            self.search(grid, goal, &mut frames, renderer)?
        };

        if solved {
            self.path = frames.into_iter().map(|f| f.pos).collect();
        }
        debug!(
            "Solve {} -> {}: {}, path length {}",
            start,
            goal,
            solved,
            self.path.len()
        );
        Ok(solved)
    }

    fn search(
        &self,
        grid: &mut CellGrid,
        goal: Position,
        frames: &mut Vec<Frame>,
        renderer: &mut dyn Renderer,
    ) -> Result<bool> {
        while let Some(frame) = frames.last_mut() {
            let current = frame.pos;

            let Some(&side) = self.order.get(frame.next) else {
                // Every direction tried, dead end
                frames.pop();
                if let Some(parent) = frames.last() {
                    trace!("Backtrack {} -> {}", current, parent.pos);
                    renderer.on_move(grid, parent.pos, current, true);
                }
                continue;
            };
            frame.next += 1;

            let Some(candidate) = grid.neighbor(current, side) else {
                continue;
            };
            if grid.is_visited(candidate)? || grid.get(current)?.has_wall(side) {
                continue;
            }

            renderer.on_move(grid, current, candidate, false);
            frames.push(Frame {
                pos: candidate,
                next: 0,
            });
            self.visit(grid, candidate, renderer)?;
            if candidate == goal {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn visit(&self, grid: &mut CellGrid, pos: Position, renderer: &mut dyn Renderer) -> Result<()> {
        grid.mark_visited(pos)?;
        renderer.on_cell_explored(grid, pos);
        Ok(())
    }

    /// Classify `pos` after the last solve on `grid`
    pub fn cell_state(&self, grid: &CellGrid, pos: Position) -> Result<CellState> {
        Ok(if self.path.contains(&pos) {
            CellState::OnPath
        } else if grid.get(pos)?.is_visited() {
            CellState::Explored
        } else {
            CellState::Unvisited
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MazeError;
    use crate::grid::{CellGrid, Position, Side};
    use crate::maze_generator::{open_entrance_and_exit, MazeGenerator};
    use crate::maze_solver::{CellState, MazeSolver};
    use crate::renderer::{EventLog, NoopRenderer};

    fn maze(cols: usize, rows: usize, seed: u64) -> CellGrid {
        let mut grid = CellGrid::new(cols, rows).unwrap();
        let start = grid.start();
        MazeGenerator::new(Some(seed))
            .generate(&mut grid, start, &mut NoopRenderer)
            .unwrap();
        open_entrance_and_exit(&mut grid, &mut NoopRenderer).unwrap();
        grid.reset_visited();
        grid
    }

    /// Grid with a corridor along the top row and then down the last column
    fn corridor(cols: usize, rows: usize) -> CellGrid {
        let mut grid = CellGrid::new(cols, rows).unwrap();
        for col in 1..cols {
            grid.remove_wall_between(Position::new(col - 1, 0), Position::new(col, 0))
                .unwrap();
        }
        for row in 1..rows {
            grid.remove_wall_between(
                Position::new(cols - 1, row - 1),
                Position::new(cols - 1, row),
            )
            .unwrap();
        }
        grid
    }

    #[test]
    fn generated_mazes_are_solvable() {
        for (cols, rows) in [(1, 1), (2, 1), (1, 4), (5, 5), (30, 20)] {
            for seed in 0..4 {
                let mut grid = maze(cols, rows, seed);
                let mut solver = MazeSolver::new();
                assert!(solver.solve(&mut grid, &mut NoopRenderer).unwrap());

                let path = solver.path();
                assert_eq!(path.first(), Some(&grid.start()));
                assert_eq!(path.last(), Some(&grid.goal()));
                for step in path.windows(2) {
                    assert!(grid.open_walls_between(step[0], step[1]).unwrap());
                }
            }
        }
    }

    #[test]
    fn one_by_one_is_solved_immediately() {
        let mut grid = maze(1, 1, 0);
        let mut solver = MazeSolver::new();
        let mut log = EventLog::new();
        assert!(solver.solve(&mut grid, &mut log).unwrap());
        assert_eq!(solver.path(), &[Position::new(0, 0)]);
        assert_eq!(log.moves().count(), 0);
    }

    #[test]
    fn two_by_one_takes_one_step() {
        let mut grid = maze(2, 1, 5);
        let mut solver = MazeSolver::new();
        let mut log = EventLog::new();
        assert!(solver.solve(&mut grid, &mut log).unwrap());
        assert_eq!(solver.path(), &[Position::new(0, 0), Position::new(1, 0)]);
        assert_eq!(
            log.moves().collect::<Vec<_>>(),
            vec![(Position::new(0, 0), Position::new(1, 0), false)]
        );
    }

    #[test]
    fn dead_end_is_undone() {
        // (0,0)-(1,0) open, (0,0)-(0,1) open, goal (1,1) only reachable via (1,0)
        let mut grid = CellGrid::new(2, 2).unwrap();
        grid.remove_wall_between(Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        grid.remove_wall_between(Position::new(0, 0), Position::new(0, 1))
            .unwrap();
        grid.remove_wall_between(Position::new(1, 0), Position::new(1, 1))
            .unwrap();

        // Try bottom first so the dead end at (0,1) is explored
        let mut solver =
            MazeSolver::new().with_order([Side::Bottom, Side::Right, Side::Left, Side::Top]);
        let mut log = EventLog::new();
        assert!(solver.solve(&mut grid, &mut log).unwrap());

        let (a, b, c, d) = (
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1),
        );
        assert_eq!(
            log.moves().collect::<Vec<_>>(),
            vec![(a, b, false), (a, b, true), (a, c, false), (c, d, false)]
        );
        assert_eq!(solver.path(), &[a, c, d]);
        assert_eq!(solver.cell_state(&grid, b).unwrap(), CellState::Explored);
        assert_eq!(solver.cell_state(&grid, c).unwrap(), CellState::OnPath);
    }

    #[test]
    fn walls_block_the_search() {
        let mut grid = CellGrid::new(3, 3).unwrap();
        let mut solver = MazeSolver::new();
        assert!(!solver.solve(&mut grid, &mut NoopRenderer).unwrap());
        assert!(solver.path().is_empty());
        assert_eq!(
            solver.cell_state(&grid, Position::new(1, 1)).unwrap(),
            CellState::Unvisited
        );
        assert_eq!(
            solver.cell_state(&grid, Position::new(0, 0)).unwrap(),
            CellState::Explored
        );
    }

    #[test]
    fn corridor_path_is_followed() {
        let mut grid = corridor(4, 3);
        let mut solver = MazeSolver::new();
        assert!(solver.solve(&mut grid, &mut NoopRenderer).unwrap());
        assert_eq!(solver.path().len(), 6);
    }

    #[test]
    fn second_solve_needs_reset() {
        let mut grid = maze(6, 6, 2);
        let mut solver = MazeSolver::new();
        assert!(solver.solve(&mut grid, &mut NoopRenderer).unwrap());
        assert!(!solver.solve(&mut grid, &mut NoopRenderer).unwrap());
        grid.reset_visited();
        assert!(solver.solve(&mut grid, &mut NoopRenderer).unwrap());
    }

    #[test]
    fn endpoints_outside_grid_fail() {
        let mut grid = maze(3, 3, 0);
        let before = grid.clone();
        let mut solver = MazeSolver::new();
        let err = solver
            .solve_between(
                &mut grid,
                Position::new(0, 0),
                Position::new(3, 3),
                &mut NoopRenderer,
            )
            .unwrap_err();
        assert_eq!(err, MazeError::OutOfBounds { col: 3, row: 3 });
        assert_eq!(grid, before);
    }
}

//! Generate a perfect maze and find the way through it
//!
//! The maze is carved into a [CellGrid] by a randomized recursive
//! backtracker ([MazeGenerator]), which leaves exactly one path between
//! any two cells. The entrance is opened above the top-left cell and the
//! exit below the bottom-right cell. [MazeSolver] then walks from the
//! entrance to the exit with a depth-first search.
//!
//! Progress of both algorithms can be observed through a [Renderer].
//!
//! # Examples
//! ```
//! use maze_solver::Maze;
//!
//! let mut maze = Maze::new(8, 5, Some(13)).unwrap();
//! let solution = maze.solve().unwrap();
//! assert!(solution.solved);
//! assert_eq!(solution.path.first(), Some(&maze.grid().start()));
//! assert_eq!(solution.path.last(), Some(&maze.grid().goal()));
//! println!("{}", maze.render(Some(&solution)));
//! ```
//!
//! ## Driving the parts by hand
//! ```
//! use maze_solver::{maze_generator, CellGrid, MazeGenerator, MazeSolver, NoopRenderer};
//!
//! let mut grid = CellGrid::new(4, 4).unwrap();
//! let start = grid.start();
//! MazeGenerator::new(Some(1))
//!     .generate(&mut grid, start, &mut NoopRenderer)
//!     .unwrap();
//! maze_generator::open_entrance_and_exit(&mut grid, &mut NoopRenderer).unwrap();
//! assert_eq!(grid.broken_internal_walls(), 15);
//!
//! // Generation used the visited flags too
//! grid.reset_visited();
//! let mut solver = MazeSolver::new();
//! assert!(solver.solve(&mut grid, &mut NoopRenderer).unwrap());
//! ```

pub mod ascii;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod maze_solver;
pub mod random;
pub mod renderer;

use log::info;

pub use error::{MazeError, Result};
pub use grid::{Cell, CellGrid, Position, Side, Walls};
pub use maze_generator::MazeGenerator;
pub use maze_solver::{CellState, MazeSolver};
pub use random::RandomSource;
pub use renderer::{EventLog, NoopRenderer, RenderEvent, Renderer};

/// Generated maze with its solver
pub struct Maze {
    grid: CellGrid,
    solver: MazeSolver,
}

/// Result of [Maze::solve]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Whether the exit was reached
    pub solved: bool,
    /// Cells from entrance to exit, empty if not solved
    pub path: Vec<Position>,
}

impl Maze {
    /// Generate a `num_cols × num_rows` maze.
    ///
    /// - `seed`: Fixed seed for a reproducible maze, `None` for a random one.
    pub fn new(num_cols: usize, num_rows: usize, seed: Option<u64>) -> Result<Self> {
        Self::with_renderer(num_cols, num_rows, seed, &mut NoopRenderer)
    }

    /// Generate a maze, reporting every carved cell to `renderer`.
    pub fn with_renderer(
        num_cols: usize,
        num_rows: usize,
        seed: Option<u64>,
        renderer: &mut dyn Renderer,
    ) -> Result<Self> {
        let mut grid = CellGrid::new(num_cols, num_rows)?;
        let start = grid.start();
        MazeGenerator::new(seed).generate(&mut grid, start, renderer)?;
        maze_generator::open_entrance_and_exit(&mut grid, renderer)?;
        grid.reset_visited();
        info!("Generated {num_cols}x{num_rows} maze (seed {seed:?})");

        Ok(Self {
            grid,
            solver: MazeSolver::new(),
        })
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Find the path from entrance to exit
    ///
    /// Visited state is cleared first, so the maze can be solved any number
    /// of times.
    pub fn solve(&mut self) -> Result<Solution> {
        self.solve_with_renderer(&mut NoopRenderer)
    }

    /// [Self::solve], reporting each move and backtrack to `renderer`
    pub fn solve_with_renderer(&mut self, renderer: &mut dyn Renderer) -> Result<Solution> {
        self.grid.reset_visited();
        let solved = self.solver.solve(&mut self.grid, renderer)?;
        Ok(Solution {
            solved,
            path: self.solver.path().to_vec(),
        })
    }

    /// Text picture of the maze, with the solution path if given
    pub fn render(&self, solution: Option<&Solution>) -> String {
        let path = solution.map(|s| s.path.as_slice()).unwrap_or_default();
        ascii::render(&self.grid, path)
    }
}

impl Solution {
    /// Print report
    pub fn print_report(&self) {
        if self.solved {
            println!(
                "Found a path of {} steps from entrance to exit.",
                self.path.len().saturating_sub(1)
            )
        } else {
            println!("No path from entrance to exit.")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{CellState, Maze, MazeError, Position, Side};

    #[test]
    fn maze_has_entrance_and_exit() {
        let maze = Maze::new(6, 4, Some(3)).unwrap();
        let grid = maze.grid();
        assert!(!grid.get(grid.start()).unwrap().has_wall(Side::Top));
        assert!(!grid.get(grid.goal()).unwrap().has_wall(Side::Bottom));
        assert_eq!(grid.broken_internal_walls(), 23);
        assert!(grid.cells().all(|c| !c.is_visited()));
    }

    #[test]
    fn solve_can_be_repeated() {
        let mut maze = Maze::new(10, 10, Some(21)).unwrap();
        let first = maze.solve().unwrap();
        let second = maze.solve().unwrap();
        assert!(first.solved);
        assert_eq!(first, second);
    }

    #[test]
    fn path_cells_are_marked() {
        let mut maze = Maze::new(5, 5, Some(4)).unwrap();
        let solution = maze.solve().unwrap();
        for pos in &solution.path {
            assert_eq!(
                maze.solver.cell_state(maze.grid(), *pos).unwrap(),
                CellState::OnPath
            );
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = Maze::new(9, 7, Some(5)).unwrap();
        let b = Maze::new(9, 7, Some(5)).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.render(None), b.render(None));
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            Maze::new(0, 3, None).err(),
            Some(MazeError::InvalidDimensions {
                num_cols: 0,
                num_rows: 3
            })
        );
    }

    #[test]
    fn one_by_one_maze() {
        let mut maze = Maze::new(1, 1, None).unwrap();
        let solution = maze.solve().unwrap();
        assert!(solution.solved);
        assert_eq!(solution.path, vec![Position::new(0, 0)]);
        assert_eq!(maze.render(Some(&solution)), "+ +\n|*|\n+ +");
    }
}

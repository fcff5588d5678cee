//! Maze generation

use log::{debug, trace};

use crate::error::Result;
use crate::grid::{CellGrid, Position, Side};
use crate::random::RandomSource;
use crate::renderer::Renderer;

/// Perfect maze generator using the randomized recursive backtracker.
pub struct MazeGenerator {
    random: RandomSource,
    order: [Side; 4],
}

impl MazeGenerator {
    /// Order in which unvisited neighbors are listed before a random pick.
    ///
    /// Together with the seed it decides which maze comes out.
    pub const NEIGHBOR_ORDER: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: RandomSource::new(seed),
            order: Self::NEIGHBOR_ORDER,
        }
    }

    /// Use another neighbor enumeration order
    pub fn with_order(mut self, order: [Side; 4]) -> Self {
        self.order = order;
        self
    }

    /// Carve a spanning tree into `grid`, starting from `start`.
    ///
    /// From the current cell, pick a random unvisited neighbor, break the
    /// wall towards it and continue from there. When a cell has no
    /// unvisited neighbors left, backtrack to the previous cell and try
    /// again. Each wall is broken the moment its far cell is discovered,
    /// so the broken walls form a tree that reaches every cell.
    ///
    /// The call stack of the classic formulation is kept in a `Vec`, so
    /// depth is only bounded by memory.
    pub fn generate(
        &mut self,
        grid: &mut CellGrid,
        start: Position,
        renderer: &mut dyn Renderer,
    ) -> Result<()> {
        debug!(
            "Generating {}x{} maze from {}",
            grid.num_cols(),
            grid.num_rows(),
            start
        );
        grid.mark_visited(start)?;
        renderer.on_cell_drawn(grid, start);

        let mut stack = vec![start];
        while let Some(&current) = stack.last() {
            let unvisited: Vec<Position> = grid
                .neighbors(current, &self.order)
                .map(|(_, pos)| pos)
                .filter(|&pos| matches!(grid.is_visited(pos), Ok(false)))
                .collect();

            if unvisited.is_empty() {
                trace!("Backtrack from {current}");
                stack.pop();
                continue;
            }

            let next = unvisited[self.random.next_int(unvisited.len())?];
            trace!("Carve {current} -> {next}");
            grid.remove_wall_between(current, next)?;
            grid.mark_visited(next)?;
            renderer.on_cell_drawn(grid, next);
            stack.push(next);
        }

        debug!("Broke {} internal walls", grid.broken_internal_walls());
        Ok(())
    }
}

/// Open the entrance on top of the start corner and the exit below the
/// goal corner.
pub fn open_entrance_and_exit(grid: &mut CellGrid, renderer: &mut dyn Renderer) -> Result<()> {
    let (start, goal) = (grid.start(), grid.goal());
    grid.open_boundary_wall(start, Side::Top)?;
    renderer.on_cell_drawn(grid, start);
    grid.open_boundary_wall(goal, Side::Bottom)?;
    renderer.on_cell_drawn(grid, goal);
    Ok(())
}

//! CLI for maze generation and solving

use std::{env, thread, time::Duration};

use clap::Parser;
use maze_solver::{ascii, CellGrid, Maze, Position, Renderer};

/// Generate a perfect maze and find the way from entrance to exit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of columns
    #[arg(long, default_value_t = 30)]
    cols: usize,

    /// Number of rows
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Animate generation and solving on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 20)]
    frame_length: u64,

    /// Enable debug messages
    #[arg(short, long)]
    debug: bool,
}

/// Redraws the whole maze on every notification
struct TerminalRenderer {
    frame: Duration,
    /// Cells the solver currently stands on, from the entrance
    trail: Vec<Position>,
}

impl TerminalRenderer {
    fn new(frame_length: u64) -> Self {
        Self {
            frame: Duration::from_millis(frame_length),
            trail: Vec::new(),
        }
    }

    fn draw(&self, grid: &CellGrid) {
        print!("\x1B[2J\x1B[1;1H");
        println!("{}", ascii::render(grid, &self.trail));
        thread::sleep(self.frame);
    }
}

impl Renderer for TerminalRenderer {
    fn on_cell_drawn(&mut self, grid: &CellGrid, _cell: Position) {
        self.draw(grid);
    }

    fn on_move(&mut self, grid: &CellGrid, from: Position, to: Position, is_undo: bool) {
        if is_undo {
            self.trail.pop();
        } else {
            if self.trail.is_empty() {
                self.trail.push(from);
            }
            self.trail.push(to);
        }
        self.draw(grid);
    }
}

/// Generate, solve and print the maze
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    if args.playback {
        let mut renderer = TerminalRenderer::new(args.frame_length);
        let mut maze = Maze::with_renderer(args.cols, args.rows, args.seed, &mut renderer)?;
        maze.solve_with_renderer(&mut renderer)?.print_report();
    } else {
        let mut maze = Maze::new(args.cols, args.rows, args.seed)?;
        let solution = maze.solve()?;
        println!("{}", maze.render(Some(&solution)));
        solution.print_report();
    }
    Ok(())
}

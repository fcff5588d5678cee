//! CLI for maze generation

use std::env;

use clap::Parser;
use maze_solver::Maze;

/// Print a perfect maze without solving it
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

    /// Enable debug messages
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let maze = Maze::new(args.cols, args.rows, args.seed)?;
    println!("{}", maze.render(None));
    Ok(())
}

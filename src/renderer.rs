//! Progress notifications from generator and solver
//!
//! Drawing and animation pacing live behind [Renderer]; the algorithms
//! never depend on what a renderer does with the notifications.

use crate::grid::{CellGrid, Position};

/// Observer of generation and solving progress.
///
/// All methods default to doing nothing, implement the ones of interest.
pub trait Renderer {
    /// Wall state of `cell` is final for this generation step
    fn on_cell_drawn(&mut self, _grid: &CellGrid, _cell: Position) {}

    /// Solver marked `cell` as explored
    fn on_cell_explored(&mut self, _grid: &CellGrid, _cell: Position) {}

    /// Solver moved from `from` to `to`, or backtracked when `is_undo` is set
    fn on_move(&mut self, _grid: &CellGrid, _from: Position, _to: Position, _is_undo: bool) {}
}

/// Renderer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {}

/// Single recorded notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    CellDrawn(Position),
    CellExplored(Position),
    Move {
        from: Position,
        to: Position,
        is_undo: bool,
    },
}

/// Renderer that keeps every notification, in order
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<RenderEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded moves as `(from, to, is_undo)`
    pub fn moves(&self) -> impl Iterator<Item = (Position, Position, bool)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            RenderEvent::Move { from, to, is_undo } => Some((from, to, is_undo)),
            _ => None,
        })
    }

    /// Cells in the order they were drawn during generation
    pub fn drawn_cells(&self) -> Vec<Position> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                RenderEvent::CellDrawn(p) => Some(p),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for EventLog {
    fn on_cell_drawn(&mut self, _grid: &CellGrid, cell: Position) {
        self.events.push(RenderEvent::CellDrawn(cell));
    }

    fn on_cell_explored(&mut self, _grid: &CellGrid, cell: Position) {
        self.events.push(RenderEvent::CellExplored(cell));
    }

    fn on_move(&mut self, _grid: &CellGrid, from: Position, to: Position, is_undo: bool) {
        self.events.push(RenderEvent::Move { from, to, is_undo });
    }
}

//! Plain text picture of a maze

use itertools::Itertools;

use crate::grid::{CellGrid, Position, Side};

const CORNER: char = '+';
const H_WALL: char = '-';
const V_WALL: char = '|';
const OPEN: char = ' ';
const PATH: char = '*';

/// Character matrix of `grid`, `2 * rows + 1` lines of `2 * cols + 1`.
///
/// Cell `(col, row)` is drawn at line `2 * row + 1`, column `2 * col + 1`;
/// the characters around it are its walls. Cells of `path`, and the
/// passages between consecutive path cells, are marked with `*`.
pub fn render_chars(grid: &CellGrid, path: &[Position]) -> Vec<Vec<char>> {
    let (cols, rows) = (grid.num_cols(), grid.num_rows());
    let mut chars = vec![vec![OPEN; 2 * cols + 1]; 2 * rows + 1];

    for cell in grid.cells() {
        let Position { col, row } = cell.position();
        let (y, x) = (2 * row + 1, 2 * col + 1);
        for side in Side::ALL {
            let (dx, dy) = side.offset();
            let wy = y.wrapping_add_signed(dy);
            let wx = x.wrapping_add_signed(dx);
            let wall = match side {
                Side::Top | Side::Bottom => H_WALL,
                Side::Left | Side::Right => V_WALL,
            };
            chars[wy][wx] = if cell.has_wall(side) { wall } else { OPEN };
            // Corners on both ends of this wall
            let (c1, c2) = match side {
                Side::Top | Side::Bottom => ((wy, x - 1), (wy, x + 1)),
                Side::Left | Side::Right => ((y - 1, wx), (y + 1, wx)),
            };
            chars[c1.0][c1.1] = CORNER;
            chars[c2.0][c2.1] = CORNER;
        }
    }

    for pos in path {
        chars[2 * pos.row + 1][2 * pos.col + 1] = PATH;
    }
    for step in path.windows(2) {
        let (a, b) = (step[0], step[1]);
        if Side::between(a, b).is_some() {
            chars[a.row + b.row + 1][a.col + b.col + 1] = PATH;
        }
    }
    chars
}

/// [render_chars] joined into a single string
///
/// # Examples
/// ```
/// use maze_solver::{ascii, grid::CellGrid};
///
/// let grid = CellGrid::new(2, 1).unwrap();
/// assert_eq!(ascii::render(&grid, &[]), "+-+-+\n| | |\n+-+-+");
/// ```
pub fn render(grid: &CellGrid, path: &[Position]) -> String {
    render_chars(grid, path)
        .iter()
        .map(|row| row.iter().join(""))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use crate::ascii::render;
    use crate::grid::{CellGrid, Position, Side};

    #[test]
    fn closed_cell() {
        let grid = CellGrid::new(1, 1).unwrap();
        assert_eq!(render(&grid, &[]), "+-+\n| |\n+-+");
    }

    #[test]
    fn open_walls_and_path() {
        let mut grid = CellGrid::new(2, 2).unwrap();
        let (a, b, c) = (Position::new(0, 0), Position::new(1, 0), Position::new(1, 1));
        grid.remove_wall_between(a, b).unwrap();
        grid.remove_wall_between(b, c).unwrap();
        grid.open_boundary_wall(a, Side::Top).unwrap();
        grid.open_boundary_wall(c, Side::Bottom).unwrap();

        let expected = "\
+ +-+
|***|
+-+*+
| |*|
+-+ +";
        assert_eq!(render(&grid, &[a, b, c]), expected);
    }
}

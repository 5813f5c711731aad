// patterns.rs - Well-known Life patterns that can be stamped onto a grid

use crate::grid::Grid;

/// A named pattern, with cell coordinates relative to a stamp origin.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Resets the grid and stamps the pattern with its origin at `(ox, oy)`.
/// Cells that land outside the grid are dropped.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern, ox: isize, oy: isize) {
    grid.reset();
    for &(x, y) in pattern.cells {
        grid.set_cell(ox + x, oy + y, true);
    }
}

// grid.rs - Bounded 2D grid of cells with the classic Life update rule,
// random reseeding, and stall detection over a short frame history.

use std::collections::VecDeque;

use rand::Rng;

use crate::cell::Cell;

/// One full generation of cells, indexed `[x][y]`.
pub type Frame = Vec<Vec<Cell>>;

/// How many past frames the grid retains. Three frames are enough to catch
/// a fixed point and a period-2 oscillation; longer-period oscillators are
/// never reported as settled.
pub const HISTORY_DEPTH: usize = 3;

/// A bounded, non-wrapping Life grid. Edge and corner cells simply have
/// fewer neighbors; there is no toroidal wraparound.
///
/// Each `step` builds an entirely new generation of cells, so frames pushed
/// into the history are independent point-in-time snapshots.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Frame,
    survival_rate: f64,
    steps_taken: u64,
    frame_history: VecDeque<Frame>,
}

impl Grid {
    /// Creates a grid of the given dimensions and immediately seeds a random
    /// starting population at the default survival rate of 0.5.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            survival_rate: 0.5,
            steps_taken: 0,
            frame_history: VecDeque::with_capacity(HISTORY_DEPTH + 1),
        };
        grid.set_size(width, height);
        grid.generate_starting_life();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The live generation, indexed `[x][y]`.
    pub fn cells(&self) -> &Frame {
        &self.cells
    }

    /// Completed update steps since the last reset. `generate_starting_life`
    /// counts as one step.
    pub fn steps(&self) -> u64 {
        self.steps_taken
    }

    /// Probability in `[0, 1]` that a cell starts alive when reseeding.
    pub fn survival_rate(&self) -> f64 {
        self.survival_rate
    }

    pub fn set_survival_rate(&mut self, rate: f64) {
        self.survival_rate = rate;
    }

    /// Read-only view of the most recent frames, oldest first. Never longer
    /// than [`HISTORY_DEPTH`].
    pub fn frame_history(&self) -> &VecDeque<Frame> {
        &self.frame_history
    }

    /// Reallocates the cell grid to the new dimensions with every cell dead.
    /// Destructive: prior cell state is lost. History and step count are
    /// untouched; callers that want a clean slate use `reset` or
    /// `generate_starting_life`.
    ///
    /// Panics if either dimension is zero.
    pub fn set_size(&mut self, width: usize, height: usize) {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        self.width = width;
        self.height = height;
        self.cells = (0..width)
            .map(|x| (0..height).map(|y| Cell::new(x, y, false)).collect())
            .collect();
    }

    /// The cell at `(x, y)`, or `None` when the coordinate is out of bounds
    /// (including negative). Never panics.
    pub fn get_cell(&self, x: isize, y: isize) -> Option<&Cell> {
        if x < 0 || x >= self.width as isize || y < 0 || y >= self.height as isize {
            return None;
        }
        Some(&self.cells[x as usize][y as usize])
    }

    /// Sets the life state at `(x, y)`. Out-of-bounds writes are silently
    /// ignored.
    pub fn set_cell(&mut self, x: isize, y: isize, alive: bool) {
        if x < 0 || x >= self.width as isize || y < 0 || y >= self.height as isize {
            return;
        }
        self.cells[x as usize][y as usize].set_alive(alive);
    }

    /// The existing cells among the 8 Moore neighbors of `(x, y)`. Cells
    /// beyond the edge are omitted, so corners yield 3 and non-corner edge
    /// cells 5.
    pub fn neighbors(&self, x: isize, y: isize) -> Vec<&Cell> {
        let mut neighbors = Vec::with_capacity(8);
        for x_offset in -1..=1 {
            for y_offset in -1..=1 {
                if x_offset == 0 && y_offset == 0 {
                    continue;
                }
                if let Some(cell) = self.get_cell(x + x_offset, y + y_offset) {
                    neighbors.push(cell);
                }
            }
        }
        neighbors
    }

    /// Advances one generation, synchronously across the whole grid: every
    /// cell's next state is computed from the current frame only. The new
    /// frame replaces the live cells and is appended to the history.
    pub fn step(&mut self) {
        let mut next: Frame = Vec::with_capacity(self.width);
        for x in 0..self.width {
            let mut column = Vec::with_capacity(self.height);
            for y in 0..self.height {
                let alive_neighbors = self
                    .neighbors(x as isize, y as isize)
                    .iter()
                    .filter(|cell| cell.is_alive())
                    .count();
                let alive = self.cells[x][y].is_alive();
                let next_alive = match (alive, alive_neighbors) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
                column.push(Cell::new(x, y, next_alive));
            }
            next.push(column);
        }
        self.cells = next;
        self.push_to_frame_history();
    }

    /// Resets the grid, then brings each cell to life independently with
    /// probability `survival_rate`, and records the seeded frame as one
    /// history entry (counting as one step).
    pub fn generate_starting_life(&mut self) {
        let mut rng = rand::rng();
        self.seed_starting_life(&mut rng);
    }

    /// `generate_starting_life` with a caller-supplied rng, for
    /// deterministic seeding.
    pub fn seed_starting_life(&mut self, rng: &mut impl Rng) {
        self.reset();
        // Kept as `draw > 1 - rate` rather than `draw < rate`: at rate 1.0 a
        // drawn 0.0 still leaves the cell dead.
        let threshold = 1.0 - self.survival_rate;
        for x in 0..self.width {
            for y in 0..self.height {
                if rng.random::<f64>() > threshold {
                    self.cells[x][y].set_alive(true);
                }
            }
        }
        self.push_to_frame_history();
    }

    /// Empties the history, kills every cell, and zeroes the step count.
    pub fn reset(&mut self) {
        self.frame_history.clear();
        for column in &mut self.cells {
            for cell in column {
                cell.set_alive(false);
            }
        }
        self.steps_taken = 0;
    }

    /// Stall detector. NOTE the inverted polarity: `true` means the grid is
    /// still evolving (keep running), `false` means it has settled into a
    /// fixed point or a period-2 oscillation (restart). With fewer than two
    /// history entries there is not enough to judge, which also reads as
    /// `true`.
    pub fn is_stable(&self) -> bool {
        if self.frame_history.len() < 2 {
            return true;
        }
        let current = Self::encode(&self.cells);
        // Second-most-recent entry: the frame before the current one.
        let last = Self::encode(&self.frame_history[self.frame_history.len() - 2]);
        if current == last {
            return false;
        }
        // Oldest retained entry: up to two frames back, catching period 2.
        let first = Self::encode(&self.frame_history[0]);
        if current == first {
            return false;
        }
        true
    }

    fn push_to_frame_history(&mut self) {
        self.steps_taken += 1;
        self.frame_history.push_back(self.cells.clone());
        if self.frame_history.len() > HISTORY_DEPTH {
            self.frame_history.pop_front();
        }
    }

    /// Flattens a frame to its alive flags in column-major order, the
    /// comparison key for stall detection.
    fn encode(frame: &Frame) -> Vec<bool> {
        frame
            .iter()
            .flat_map(|column| column.iter().map(Cell::is_alive))
            .collect()
    }
}

// cell.rs - A single cell in the grid

/// One cell of the grid: a position plus an alive flag. Pure data holder;
/// the owning grid is responsible for keeping positions in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
}

impl Cell {
    pub fn new(x: usize, y: usize, alive: bool) -> Self {
        Self { x, y, alive }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_keeps_position_and_state() {
        let cell = Cell::new(3, 7, false);
        assert_eq!(cell.position(), (3, 7));
        assert!(!cell.is_alive());

        let cell = Cell::new(0, 0, true);
        assert!(cell.is_alive());
    }

    #[test]
    fn alive_flag_is_mutable() {
        let mut cell = Cell::new(1, 1, false);
        cell.set_alive(true);
        assert!(cell.is_alive());
        cell.set_alive(false);
        assert!(!cell.is_alive());
    }

    #[test]
    fn reposition_moves_the_cell() {
        let mut cell = Cell::new(0, 0, true);
        cell.set_position(4, 9);
        assert_eq!(cell.position(), (4, 9));
        assert!(cell.is_alive());
    }
}

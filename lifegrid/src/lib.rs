// lib.rs - Core simulation engine for Conway's Game of Life

pub mod cell;
pub mod grid;
pub mod patterns;

pub use cell::Cell;
pub use grid::{Frame, Grid};
pub use patterns::{PATTERNS, Pattern, apply_pattern};

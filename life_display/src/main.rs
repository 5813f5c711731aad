// main.rs - Screensaver-style driver for the lifegrid engine: ticks the
// simulation, renders it, and reseeds with a fresh random survival rate
// whenever the grid settles.

use eframe::egui;
use egui::Color32;
use rand::Rng;
use std::time::{Duration, Instant};

use lifegrid::{Grid, patterns};

mod ui;

// Playing-field dimensions in cells
pub const GRID_WIDTH: usize = 96;
pub const GRID_HEIGHT: usize = 64;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([880.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

pub struct LifeApp {
    grid: Grid,

    /// How many runs have been started, counting restarts after a stall.
    pub generation: u64,
    /// When the grid settles: reseed (true) or just pause (false).
    pub restart_on_unstable: bool,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
            generation: 1,
            restart_on_unstable: true,
            is_running: true,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(50),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }
}

impl LifeApp {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// One timer tick: advance the simulation, or handle a settled grid.
    /// `is_stable() == false` means the grid stopped changing (fixed point
    /// or period-2 oscillation), which is the restart trigger.
    pub fn tick(&mut self) {
        if self.grid.is_stable() {
            self.grid.step();
        } else {
            log::info!(
                "run {} settled after {} steps (survival rate {:.2})",
                self.generation,
                self.grid.steps(),
                self.grid.survival_rate(),
            );
            if self.restart_on_unstable {
                self.restart();
            } else {
                self.is_running = false;
            }
        }
    }

    /// Begins a new run with a freshly drawn random survival rate.
    pub fn restart(&mut self) {
        self.generation += 1;
        let rate = rand::rng().random::<f64>();
        self.grid.set_survival_rate(rate);
        self.grid.generate_starting_life();
    }

    /// Reseeds at the current survival rate without counting a new run.
    pub fn reseed(&mut self) {
        self.grid.generate_starting_life();
    }

    pub fn set_survival_rate(&mut self, rate: f64) {
        self.grid.set_survival_rate(rate);
    }

    pub fn stamp_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            let ox = (self.grid.width() / 2) as isize - 2;
            let oy = (self.grid.height() / 2) as isize - 2;
            patterns::apply_pattern(&mut self.grid, pattern, ox, oy);
        }
    }

    pub fn toggle_cell(&mut self, x: isize, y: isize) {
        if let Some(cell) = self.grid.get_cell(x, y) {
            let alive = cell.is_alive();
            self.grid.set_cell(x, y, !alive);
        }
    }
}

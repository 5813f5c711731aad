// ui.rs - egui rendering and controls for the Life screensaver

use eframe::egui;
use egui::{Color32, Rect, RichText, Stroke, Vec2};
use std::time::{Duration, Instant};

use lifegrid::patterns;

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-advance on the tick interval while running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.tick();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("🎲 Reseed").clicked() {
                    self.reseed();
                }

                ui.checkbox(&mut self.restart_on_unstable, "Restart when settled");

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Stamp Pattern").clicked() {
                    self.is_running = false;
                    self.stamp_selected_pattern();
                }
            });

            ui.separator();

            // Status line
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.generation));
                ui.label(format!("Steps: {}", self.grid().steps()));
                ui.label(format!("Survival rate: {:.2}", self.grid().survival_rate()));
                ui.label("Stable:");
                if self.grid().is_stable() {
                    ui.label(RichText::new("✓").color(Color32::GREEN));
                } else {
                    ui.label(RichText::new("✗").color(Color32::RED));
                }
            });

            ui.separator();

            // Speed, survival rate, colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Survival rate:");
                let mut rate = self.grid().survival_rate();
                if ui.add(egui::Slider::new(&mut rate, 0.0..=1.0)).changed() {
                    self.set_survival_rate(rate);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. The board reseeds itself once it settles or starts oscillating.");

            ui.separator();

            // Draw the grid
            let box_size = 7.5;
            let spacing = 0.5;
            let width = self.grid().width();
            let height = self.grid().height();

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * width as f32 - spacing,
                (box_size + spacing) * height as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let mut clicked_cell = None;
            for x in 0..width {
                for y in 0..height {
                    let px = start_pos.x + x as f32 * (box_size + spacing);
                    let py = start_pos.y + y as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(
                        egui::pos2(px, py),
                        Vec2::splat(box_size),
                    );

                    let cell_color = if self.grid().cells()[x][y].is_alive() {
                        self.live_color
                    } else {
                        self.dead_color
                    };

                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                    if !self.is_running && response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                clicked_cell = Some((x as isize, y as isize));
                            }
                        }
                    }
                }
            }
            if let Some((x, y)) = clicked_cell {
                self.toggle_cell(x, y);
            }

            ui.separator();

            // Statistics
            let total = width * height;
            let live_cells = self
                .grid()
                .cells()
                .iter()
                .flatten()
                .filter(|cell| cell.is_alive())
                .count();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total as f32) * 100.0
                ));
            });
        });

        // Keep the animation ticking while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

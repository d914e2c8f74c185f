// ui.rs - Drawing and controls for the oscillator viewer

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use periodic_conway::patterns;
use std::time::{Duration, Instant};

use crate::OscillatorViewer;

impl eframe::App for OscillatorViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rows, cols) = (self.grid.rows(), self.grid.cols());
            match &self.found {
                Some(width) => ui.heading(format!(
                    "Smallest oscillator: {} columns, period {}, seed {}",
                    width.cols, width.period, width.seed
                )),
                None => ui.heading(format!("No oscillator found up to {rows} x {cols}")),
            };

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.step();
                }

                if ui.button("↺ Oscillator").clicked() {
                    self.is_running = false;
                    self.reset_to_oscillator();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.grid.generation()));
                match self.period {
                    Some(period) => ui.label(format!("Period: {period}")),
                    None => ui.label("Period: too large to track"),
                };
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Edges wrap: the top row touches the bottom row, the left column the right.");
            ui.label("Click cells to toggle them while paused.");

            ui.separator();

            // Controls above may have resized the grid
            let (rows, cols) = (self.grid.rows(), self.grid.cols());
            let box_size = (480.0 / rows.max(cols) as f32).min(40.0);
            let spacing = 2.0;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * cols as f32 - spacing,
                (box_size + spacing) * rows as f32 - spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let mut clicked = None;
            for (index, &alive) in self.grid.cells().iter().enumerate() {
                let (row, col) = (index / cols, index % cols);
                let x = start_pos.x + col as f32 * (box_size + spacing);
                let y = start_pos.y + row as f32 * (box_size + spacing);

                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let cell_color = if alive { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 2.0, cell_color);
                painter.rect_stroke(rect, 2.0, Stroke::new(0.5, Color32::from_gray(60)));

                if !self.is_running && response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if rect.contains(pos) {
                            clicked = Some((row, col));
                        }
                    }
                }
            }
            if let Some((row, col)) = clicked {
                self.toggle_cell(row, col);
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Grid: {rows} x {cols}"));
                ui.label(format!("Live cells: {}", self.grid.live_cells()));
                if let Ok(state) = self.grid.to_compact() {
                    ui.label(format!("Compact state: {state}"));
                }
            });
        });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

// main.rs - Oscillator viewer
// Finds the narrowest oscillating torus for a row count and animates its cycle

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use periodic_conway::patterns::{self, PATTERNS};
use periodic_conway::{Compact, Grid, OscillatingWidth, eventual_period, find_smallest_oscillating_width};
use std::time::{Duration, Instant};
use tracing::{info, warn};

mod ui;

#[derive(Parser)]
#[command(name = "grid_display", version, about = "Animate the smallest oscillator on a periodic grid")]
struct Cli {
    /// Number of rows in the torus.
    #[arg(short, long, default_value_t = 3)]
    rows: usize,

    /// Give up after this many columns.
    #[arg(short, long, default_value_t = 8)]
    max_cols: usize,
}

fn main() -> Result<()> {
    periodic_conway::logging::init();
    let cli = Cli::parse();
    let viewer = OscillatorViewer::search(cli.rows, cli.max_cols)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Periodic Conway Oscillators",
        options,
        Box::new(move |_cc| Box::new(viewer)),
    )
    .map_err(|err| anyhow!("viewer failed: {err}"))
}

pub struct OscillatorViewer {
    pub grid: Grid,
    pub found: Option<OscillatingWidth>,
    /// `None` when the grid is too large to track by compact state.
    pub period: Option<usize>,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    random_seed: u64,
}

impl OscillatorViewer {
    /// Runs the width search up front; with no oscillator in range the viewer
    /// opens on an empty `rows x max_cols` grid.
    pub fn search(rows: usize, max_cols: usize) -> Result<Self> {
        let found = find_smallest_oscillating_width(rows, max_cols)
            .with_context(|| format!("search {rows}-row grids"))?;

        let cols = match &found {
            Some(width) => {
                info!(cols = width.cols, period = width.period, "showing oscillator");
                width.cols
            }
            None => {
                warn!(rows, max_cols, "no oscillator in range");
                max_cols
            }
        };

        let mut viewer = Self {
            grid: Grid::new(rows, cols)?,
            found,
            period: Some(1),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(500),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            random_seed: 0,
        };
        viewer.reset_to_oscillator();
        Ok(viewer)
    }

    pub fn oscillator_start(&self) -> Option<Compact> {
        self.found.as_ref().and_then(|width| width.cycle.first().copied())
    }

    pub fn reset_to_oscillator(&mut self) {
        match self.oscillator_start() {
            Some(state) => self.load(state),
            None => self.grid.clear(),
        }
        self.measure_period();
    }

    pub fn step(&mut self) {
        self.grid.step();
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.period = Some(1);
    }

    /// Stamps the selected pattern at the top-left corner, first enlarging the
    /// grid with a two-cell margin if the pattern would wrap onto itself.
    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            let (height, width) = pattern.extent();
            let rows = self.grid.rows().max(height + 4);
            let cols = self.grid.cols().max(width + 4);
            if (rows, cols) != (self.grid.rows(), self.grid.cols()) {
                match Grid::new(rows, cols) {
                    Ok(grid) => {
                        info!(pattern = pattern.name, rows, cols, "resized grid");
                        self.grid = grid;
                    }
                    Err(err) => warn!(rows, cols, %err, "cannot resize grid"),
                }
            }
            if let Err(err) = patterns::apply_pattern(&mut self.grid, pattern, (2, 2)) {
                warn!(pattern = pattern.name, %err, "pattern does not fit");
            }
            self.measure_period();
        }
    }

    pub fn apply_random_pattern(&mut self) {
        self.random_seed += 1;
        if let Err(err) = patterns::apply_random_pattern(&mut self.grid, self.random_seed) {
            warn!(%err, "random fill failed");
        }
        self.measure_period();
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let toggled = self
            .grid
            .get((row, col))
            .and_then(|value| self.grid.set((row, col), 1 - value));
        if let Err(err) = toggled {
            warn!(row, col, %err, "cannot toggle cell");
        }
        self.measure_period();
    }

    fn load(&mut self, state: Compact) {
        if let Err(err) = self.grid.from_compact(state) {
            warn!(state, %err, "cannot load state");
        }
    }

    // Measured on a copy so the displayed generation is untouched.
    fn measure_period(&mut self) {
        let mut copy = self.grid.clone();
        self.period = eventual_period(&mut copy).ok();
    }
}

// main.rs - One-dimensional cellular automaton viewer
// Builds the model from the command line, then either dumps it or shows it

use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use automaton::{BoundaryCondition, Mode, Model, Polygon};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use log::{debug, info};

mod config; // Command-line options
mod ui; // eframe::App implementation
mod viewport; // Visible window and panning

use config::Options;
use viewport::Viewport;

/// Height of the control strip above the polygon, in points.
const CONTROLS_HEIGHT: f32 = 64.0;

fn main() -> Result<()> {
    let options = Options::parse();
    simple_logger::SimpleLogger::new()
        .with_level(options.log_level)
        .init()?;
    info!("Starting automaton v{} ...", env!("CARGO_PKG_VERSION"));

    let model = build_model(&options)?;

    if options.dump {
        let stdout = io::stdout();
        return dump(model.polygon(), &mut BufWriter::new(stdout.lock()))
            .context("failed to write rows");
    }

    anyhow::ensure!(
        model.polygon().width() > 0 && options.window_width > 0 && options.window_height > 0,
        "nothing to display: the boundary condition or the window is empty"
    );

    let window = [options.window_width, options.window_height];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window[0] as f32, window[1] as f32 + CONTROLS_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    let view = AutomatonView::new(model, window, options.update_interval());
    eframe::run_native(
        "Automaton",
        native_options,
        Box::new(|_cc| Box::new(view)),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}

/// Turns the options into a model, computing every row in batch mode.
fn build_model(options: &Options) -> Result<Model> {
    let source = options.boundary_source()?;
    let rule = options.rule()?;
    let mode = options.mode()?;

    let boundary = BoundaryCondition::from_source(&source, &options.resources)
        .with_context(|| format!("failed to build boundary condition from {source:?}"))?;
    info!(
        "{rule}, width {}, height {}, {mode:?} mode",
        boundary.width(),
        options.height
    );

    let start = Instant::now();
    let model = Model::new(rule, boundary, options.height, mode)?;
    debug!("Model built in {:?}", start.elapsed());
    Ok(model)
}

/// Writes one line of '0'/'1' per row.
fn dump(polygon: &Polygon, out: &mut impl Write) -> Result<()> {
    write!(out, "{polygon}")?;
    out.flush()?;
    Ok(())
}

/// Window state around a model
pub struct AutomatonView {
    model: Model,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,

    viewport: Viewport,
    texture: Option<egui::TextureHandle>,
    dirty: bool, // texture needs rebuilding
}

impl AutomatonView {
    pub fn new(model: Model, window: [usize; 2], update_interval: Duration) -> Self {
        let polygon = model.polygon();
        let viewport = Viewport::new(window, polygon.width(), polygon.height());
        Self {
            model,
            is_running: false,
            last_update: Instant::now(),
            update_interval,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            viewport,
            texture: None,
            dirty: true,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.model.mode() == Mode::Interactive
    }

    /// Advances the model if it is running and the interval has passed.
    pub fn tick(&mut self) {
        if !self.is_running || self.last_update.elapsed() < self.update_interval {
            return;
        }
        match self.model.advance() {
            Ok(()) => self.dirty = true,
            Err(e) => {
                log::error!("{e}");
                self.is_running = false;
            }
        }
        self.last_update = Instant::now();
    }

    /// Pixels of the visible part, one per cell, oldest generation on top.
    pub fn visible_image(&self) -> egui::ColorImage {
        let view = self.viewport;
        let mut image = egui::ColorImage::new([view.width, view.height], self.dead_color);
        let rows: Vec<_> = self.model.polygon().chronological().collect();
        for (y, row) in view.rows().enumerate() {
            let Some(row) = rows.get(row) else { break };
            for (x, col) in view.columns().enumerate() {
                if row.get(col).unwrap_or(false) {
                    image.pixels[y * view.width + x] = self.live_color;
                }
            }
        }
        image
    }
}

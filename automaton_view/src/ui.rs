// ui.rs - Draws the visible part of the polygon and handles input
// Arrow keys pan, the controls run interactive models and pick colors

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use std::time::{Duration, Instant};

use crate::AutomatonView;
use crate::viewport::Moving;

const ARROWS: [egui::Key; 4] = [
    egui::Key::ArrowDown,
    egui::Key::ArrowRight,
    egui::Key::ArrowLeft,
    egui::Key::ArrowUp,
];

impl eframe::App for AutomatonView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        self.tick();

        // Panning
        let pressed: Vec<Moving> = ctx.input(|i| {
            ARROWS
                .iter()
                .filter(|&&key| i.key_pressed(key))
                .filter_map(|&key| Moving::from_key(key))
                .collect()
        });
        for side in pressed {
            let before = self.viewport;
            self.viewport.shift(side);
            if self.viewport != before {
                log::debug!("Viewport moved to ({}, {})", self.viewport.left, self.viewport.top);
                self.dirty = true;
            }
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_interactive() {
                    let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                    if ui.button(button_text).clicked() {
                        self.is_running = !self.is_running;
                        if self.is_running {
                            self.last_update = Instant::now();
                        }
                    }

                    ui.label("Speed:");
                    let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                    if ui
                        .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                        .changed()
                    {
                        self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                    }

                    ui.separator();
                }

                // Show current colors
                ui.label("Live:");
                if ui.color_edit_button_srgba(&mut self.live_color).changed() {
                    self.dirty = true;
                }
                ui.label("Dead:");
                if ui.color_edit_button_srgba(&mut self.dead_color).changed() {
                    self.dirty = true;
                }
            });

            let polygon = self.model.polygon();
            let newest = polygon
                .row_at(polygon.cursor())
                .map(|row| row.count_ones())
                .unwrap_or(0);
            ui.horizontal(|ui| {
                ui.label(format!("{}", self.model.rule()));
                ui.label(format!("Generation: {}", polygon.generation()));
                ui.label(format!("{} × {}", polygon.width(), polygon.height()));
                ui.label(format!("Live cells: {newest}"));
                ui.label(format!(
                    "View: ({}, {})",
                    self.viewport.left, self.viewport.top
                ));
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                if self.dirty || self.texture.is_none() {
                    let image = self.visible_image();
                    if let Some(texture) = self.texture.as_mut() {
                        texture.set(image, egui::TextureOptions::NEAREST);
                    } else {
                        let texture =
                            ctx.load_texture("polygon", image, egui::TextureOptions::NEAREST);
                        self.texture = Some(texture);
                    }
                    self.dirty = false;
                }

                let size: Vec2 = ui.available_size();
                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                if let Some(texture) = &self.texture {
                    painter.image(
                        texture.id(),
                        response.rect,
                        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
            });

        // Keep the timer going while running
        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

//! egui window for ScreenWatch.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  [ Start ]                        [ Stop ]   │
//! │              Similarity: 97.41%              │
//! │   ┌──────────────────────────────────────┐   │
//! │   │        latest capture (700×500)      │   │
//! │   └──────────────────────────────────────┘   │
//! │             Program is running               │
//! └──────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use eframe::egui::{self, RichText, Vec2};
use screenwatch_capture::FrameSource;
use screenwatch_core::MonitorConfig;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::state::{TriggerSlot, ViewState};
use crate::trigger::{spawn_preview, CaptureEvent, CaptureTrigger};

/// Builds a fresh capture source for each start and for the startup preview.
pub type SourceFactory = fn() -> Box<dyn FrameSource>;

// ── ScreenWatchApp ────────────────────────────────────────────────────────────

pub struct ScreenWatchApp {
    config:    MonitorConfig,
    view:      ViewState,
    trigger:   TriggerSlot,
    texture:   Option<egui::TextureHandle>,
    events_rx: mpsc::Receiver<CaptureEvent>,
    /// Cloned into every capture task.
    events_tx: mpsc::Sender<CaptureEvent>,
    new_source: SourceFactory,
    rt_handle: Handle,
}

impl ScreenWatchApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        rt_handle: Handle,
        config: MonitorConfig,
        new_source: SourceFactory,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel::<CaptureEvent>(config.channel_capacity);

        // Show what the screen looks like right away, before any Start.
        {
            let _guard = rt_handle.enter();
            spawn_preview(
                new_source(),
                config.display_area,
                events_tx.clone(),
                cc.egui_ctx.clone(),
            );
        }

        Self {
            config,
            view: ViewState::default(),
            trigger: TriggerSlot::default(),
            texture: None,
            events_rx,
            events_tx,
            new_source,
            rt_handle,
        }
    }

    fn start(&mut self, ctx: &egui::Context) {
        // Enter the tokio runtime context so tokio::spawn works from eframe's main thread.
        let _guard = self.rt_handle.enter();
        let new_source = self.new_source;
        let (period, area) = (self.config.capture_interval, self.config.display_area);
        let events = self.events_tx.clone();
        let started = self.trigger.start(|| {
            CaptureTrigger::spawn(new_source(), period, area, events, ctx.clone())
        });
        if started {
            self.view.set_running(true);
        }
    }

    fn stop(&mut self) {
        self.trigger.stop();
        self.view.set_running(false);
    }

    /// Drain the capture channel and upload the newest image, if any.
    fn poll_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.view.apply(event);
        }
        if self.trigger.reap() {
            self.view.set_running(false);
        }

        if let Some(preview) = self.view.take_pending_preview() {
            let size = [preview.width() as usize, preview.height() as usize];
            let image = egui::ColorImage::from_rgba_unmultiplied(size, preview.as_raw());
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture =
                        Some(ctx.load_texture("latest-capture", image, egui::TextureOptions::LINEAR));
                }
            }
        }
    }
}

// ── eframe::App implementation ────────────────────────────────────────────────

impl eframe::App for ScreenWatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events(ctx);
        if self.view.run_state.is_running() {
            // The capture task also wakes us; this is only a safety net.
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 4.0);

            // ── Buttons ───────────────────────────────────────────────────
            ui.horizontal(|ui| {
                if ui.add_sized([100.0, 24.0], egui::Button::new("Start")).clicked() {
                    self.start(ctx);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add_sized([100.0, 24.0], egui::Button::new("Stop")).clicked() {
                        self.stop();
                    }
                });
            });

            ui.vertical_centered(|ui| {
                // ── Similarity ────────────────────────────────────────────
                ui.label(RichText::new(self.view.similarity_text()).size(16.0));

                // ── Latest capture ────────────────────────────────────────
                let area = Vec2::new(
                    self.config.display_area.width as f32,
                    self.config.display_area.height as f32,
                );
                let (rect, _) = ui.allocate_exact_size(area, egui::Sense::hover());
                if let Some(texture) = &self.texture {
                    let image_rect = egui::Rect::from_center_size(rect.center(), texture.size_vec2());
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .paint_at(ui, image_rect);
                }

                // ── Running indicator ─────────────────────────────────────
                let run_state = self.view.run_state;
                ui.label(RichText::new(run_state.label()).color(run_state.color()));
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.stop();
    }
}

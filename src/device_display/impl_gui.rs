use crate::device_display::interface::DeviceDisplay;
use image::DynamicImage;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct LatestFrame {
    generation: u64,
    size: [usize; 2],
    rgb: Vec<u8>,
    lines: Vec<String>,
}

struct PreviewWindow {
    latest: Arc<Mutex<LatestFrame>>,
    quit: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
    texture: Option<egui::TextureHandle>,
    shown_generation: u64,
    lines: Vec<String>,
}

impl PreviewWindow {
    fn sync_frame(&mut self, ctx: &egui::Context) {
        let Ok(latest) = self.latest.lock() else {
            return;
        };
        if latest.generation == self.shown_generation || latest.rgb.is_empty() {
            return;
        }

        let image = egui::ColorImage::from_rgb(latest.size, &latest.rgb);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture("frame", image, egui::TextureOptions::LINEAR))
            }
        }
        self.lines = latest.lines.clone();
        self.shown_generation = latest.generation;
    }
}

impl eframe::App for PreviewWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let quit_pressed = ctx.input(|i| i.key_pressed(egui::Key::Q));
        let close_requested = ctx.input(|i| i.viewport().close_requested());
        if quit_pressed || close_requested {
            self.quit.store(true, Ordering::SeqCst);
        }
        if quit_pressed || self.closed.load(Ordering::SeqCst) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.sync_frame(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let Some(texture) = &self.texture else {
                    ui.centered_and_justified(|ui| {
                        ui.label(egui::RichText::new("Waiting for camera...").color(egui::Color32::WHITE));
                    });
                    return;
                };

                let available = ui.available_size();
                let texture_size = texture.size_vec2();
                let scale = (available.x / texture_size.x).min(available.y / texture_size.y);
                let response = ui.image((texture.id(), texture_size * scale));

                // Headline in green, advisory in white, like the on-frame captions of the camera feed.
                let painter = ui.painter();
                let mut position = response.rect.min + egui::vec2(10.0, 10.0);
                for (index, line) in self.lines.iter().enumerate() {
                    let (size, color) = if index == 0 {
                        (24.0, egui::Color32::from_rgb(0, 255, 0))
                    } else {
                        (16.0, egui::Color32::WHITE)
                    };
                    painter.text(
                        position,
                        egui::Align2::LEFT_TOP,
                        line,
                        egui::FontId::proportional(size),
                        color,
                    );
                    position.y += size + 10.0;
                }
            });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// Native window fed from another thread. The window's event loop must own
/// the main thread, so [`DeviceDisplayGui::run_window`] blocks there while the
/// preview loop calls [`DeviceDisplay::show`] from a worker.
pub struct DeviceDisplayGui {
    latest: Arc<Mutex<LatestFrame>>,
    quit: Arc<AtomicBool>,
    closed: Arc<AtomicBool>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            latest: Arc::new(Mutex::new(LatestFrame::default())),
            quit: Arc::new(AtomicBool::new(false)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn run_window(&self, title: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
            ..Default::default()
        };

        let window = PreviewWindow {
            latest: self.latest.clone(),
            quit: self.quit.clone(),
            closed: self.closed.clone(),
            texture: None,
            shown_generation: 0,
            lines: Vec::new(),
        };

        let result = eframe::run_native(title, options, Box::new(|_cc| Box::new(window)));

        // However the window went away, the preview loop has to stop.
        self.quit.store(true, Ordering::SeqCst);
        result.map_err(|e| e.to_string())?;
        Ok(())
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn show(&self, frame: &DynamicImage, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let rgb = frame.to_rgb8();
        let mut latest = self.latest.lock().map_err(|_| "display lock poisoned")?;
        latest.size = [rgb.width() as usize, rgb.height() as usize];
        latest.rgb = rgb.into_raw();
        latest.lines = lines.to_vec();
        latest.generation += 1;
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }

    fn close(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

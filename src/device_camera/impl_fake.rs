use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Field, water and rooftop tones.
const PALETTE: [[u8; 3]; 3] = [[34, 139, 34], [30, 90, 200], [150, 150, 150]];

/// Synthetic camera: solid frames cycling through a small palette, optionally
/// running dry after a fixed number of frames.
pub struct DeviceCameraFake {
    width: u32,
    height: u32,
    frame_limit: Option<usize>,
    captured: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            width: 640,
            height: 480,
            frame_limit: None,
            captured: AtomicUsize::new(0),
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }

    #[allow(dead_code)]
    pub fn with_frame_limit(mut self, frame_limit: usize) -> Self {
        self.frame_limit = Some(frame_limit);
        self
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        let index = self.captured.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.frame_limit {
            if index >= limit {
                return Err("fake camera has no more frames".into());
            }
        }

        let color = PALETTE[(index / 30) % PALETTE.len()];
        Ok(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
            self.width,
            self.height,
            Rgb(color),
        )))
    }
}

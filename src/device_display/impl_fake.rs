use crate::device_display::interface::DeviceDisplay;
use image::DynamicImage;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Records shown annotations and asks to quit after a set number of frames.
pub struct DeviceDisplayFake {
    quit_after: usize,
    shown: Mutex<Vec<Vec<String>>>,
    closed: AtomicBool,
}

impl DeviceDisplayFake {
    pub fn new(quit_after: usize) -> Self {
        Self {
            quit_after,
            shown: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    pub fn shown(&self) -> Vec<Vec<String>> {
        self.shown.lock().unwrap().clone()
    }

    pub fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show(&self, _frame: &DynamicImage, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shown.lock().unwrap().push(lines.to_vec());
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.shown.lock().unwrap().len() >= self.quit_after
    }

    fn close(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

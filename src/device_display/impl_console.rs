use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::error::Error;
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Headless preview: prints the annotation whenever it changes. Typing `q`
/// and Enter stops the loop.
pub struct DeviceDisplayConsole {
    last_lines: Mutex<Vec<String>>,
    quit: Arc<AtomicBool>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceDisplayConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let quit = Arc::new(AtomicBool::new(false));

        let stdin_quit = quit.clone();
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) if line.trim().eq_ignore_ascii_case("q") => {
                        stdin_quit.store(true, Ordering::SeqCst);
                        break;
                    }
                    Ok(_) => continue,
                    Err(_) => break,
                }
            }
        });

        Self {
            last_lines: Mutex::new(Vec::new()),
            quit,
            logger: logger.with_namespace("display").with_namespace("console"),
        }
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show(&self, frame: &DynamicImage, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut last_lines = self.last_lines.lock().map_err(|_| "display lock poisoned")?;
        if last_lines.as_slice() == lines {
            return Ok(());
        }

        self.logger.info(&format!(
            "[{}x{}] {}",
            frame.width(),
            frame.height(),
            lines.join(" | ")
        ))?;
        *last_lines = lines.to_vec();
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }

    fn close(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.quit.store(true, Ordering::SeqCst);
        Ok(())
    }
}

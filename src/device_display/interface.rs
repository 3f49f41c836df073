use image::DynamicImage;
use std::error::Error;

/// Surface for the live preview: the latest frame plus its annotation lines.
pub trait DeviceDisplay: Send + Sync {
    /// Replace what is on screen with `frame` captioned by `lines`.
    fn show(&self, frame: &DynamicImage, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// True once the viewer asked to stop (quit key or window closed).
    fn quit_requested(&self) -> bool;

    /// Called when the preview loop ends on its own, e.g. the camera went away.
    fn close(&self) -> Result<(), Box<dyn Error + Send + Sync>>;
}

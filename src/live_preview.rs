use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::terrain::advisory::advisory;
use crate::terrain::terrain_class::TerrainClass;
use crate::terrain_pipeline::pipeline::TerrainPipeline;
use std::sync::Arc;
use std::time::Duration;

/// Caption drawn over a live frame: the terrain headline, then the advisory.
pub fn overlay_lines(terrain: TerrainClass) -> Vec<String> {
    vec![
        format!("Terrain: {}", terrain),
        advisory(terrain).to_string(),
    ]
}

pub struct LivePreview {
    pipeline: Arc<TerrainPipeline>,
    camera: Arc<dyn DeviceCamera + Send + Sync>,
    display: Arc<dyn DeviceDisplay + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
    frame_interval: Duration,
}

impl LivePreview {
    pub fn new(
        pipeline: Arc<TerrainPipeline>,
        camera: Arc<dyn DeviceCamera + Send + Sync>,
        display: Arc<dyn DeviceDisplay + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
        frame_interval: Duration,
    ) -> Self {
        Self {
            pipeline,
            camera,
            display,
            logger: logger.with_namespace("live_preview"),
            frame_interval,
        }
    }

    /// Capture, classify and show frames until the viewer quits or the camera
    /// stops delivering. Returns the number of frames shown.
    pub fn run(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        if let Err(e) = self.camera.start() {
            self.display.close()?;
            return Err(e);
        }
        self.logger.info("📷 Starting webcam... Press Q to quit.")?;

        let result = self.preview_loop();

        let stopped = self.camera.stop();
        self.display.close()?;
        stopped?;

        let frames = result?;
        self.logger.info(&format!("Preview ended after {} frames", frames))?;
        Ok(frames)
    }

    fn preview_loop(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let mut frames = 0;

        while !self.display.quit_requested() {
            let frame = match self.camera.capture_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    self.logger.warn(&format!("Failed to grab frame. {}", e))?;
                    break;
                }
            };

            let terrain = self.pipeline.predict(&frame)?;
            self.display.show(&frame, &overlay_lines(terrain))?;
            frames += 1;

            std::thread::sleep(self.frame_interval);
        }

        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_camera::impl_fake::DeviceCameraFake;
    use crate::device_display::impl_fake::DeviceDisplayFake;
    use crate::library::logger::interface::Level;
    use crate::terrain_pipeline::tests::fixture::Fixture;

    fn preview(f: &Fixture, camera: DeviceCameraFake, display: Arc<DeviceDisplayFake>) -> LivePreview {
        LivePreview::new(
            f.pipeline.clone(),
            Arc::new(camera),
            display,
            Arc::new(f.logger.clone()),
            Duration::ZERO,
        )
    }

    #[test]
    fn overlay_shows_terrain_then_advisory() {
        let lines = overlay_lines(TerrainClass::River);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Terrain: River");
        assert_eq!(lines[1], advisory(TerrainClass::River).to_string());
    }

    #[test]
    fn stops_when_viewer_quits() {
        let f = Fixture::new(TerrainClass::Forest);
        let camera = DeviceCameraFake::new(Arc::new(f.logger.clone()));
        let display = Arc::new(DeviceDisplayFake::new(3));

        let frames = preview(&f, camera, display.clone()).run().unwrap();

        assert_eq!(frames, 3);
        let shown = display.shown();
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|lines| lines[0] == "Terrain: Forest"));
        assert!(display.was_closed());
    }

    #[test]
    fn stops_when_camera_runs_dry() {
        let f = Fixture::new(TerrainClass::SeaLake);
        let camera = DeviceCameraFake::new(Arc::new(f.logger.clone())).with_frame_limit(2);
        let display = Arc::new(DeviceDisplayFake::new(100));

        let frames = preview(&f, camera, display.clone()).run().unwrap();

        assert_eq!(frames, 2);
        assert!(display.was_closed());
        assert!(f.logger.contains(Level::Warn, "Failed to grab frame."));
    }

    #[test]
    fn preview_writes_no_output_files() {
        let f = Fixture::new(TerrainClass::Highway);
        let camera = DeviceCameraFake::new(Arc::new(f.logger.clone()));
        let display = Arc::new(DeviceDisplayFake::new(2));

        preview(&f, camera, display).run().unwrap();

        assert!(!f.config.audio_output_path.exists());
        assert!(!f.config.map_output_path.exists());
        assert_eq!(f.speech.calls(), 0);
    }
}

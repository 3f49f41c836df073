use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, RgbImage};
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::{imgproc, videoio};
use std::sync::{Arc, Mutex};

pub struct DeviceCameraOpenCv {
    device_index: i32,
    capture: Mutex<videoio::VideoCapture>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraOpenCv {
    pub fn new(
        device_index: i32,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            device_index,
            capture: Mutex::new(videoio::VideoCapture::default()?),
            logger: logger.with_namespace("camera").with_namespace("opencv"),
        })
    }
}

impl DeviceCamera for DeviceCameraOpenCv {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut capture = self.capture.lock().map_err(|_| "camera lock poisoned")?;
        self.logger
            .info(&format!("Opening camera device {}", self.device_index))?;
        if !capture.open(self.device_index, videoio::CAP_ANY)? || !capture.is_opened()? {
            return Err(format!("could not open camera device {}", self.device_index).into());
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut capture = self.capture.lock().map_err(|_| "camera lock poisoned")?;
        capture.release()?;
        self.logger.info("Camera released")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        let mut capture = self.capture.lock().map_err(|_| "camera lock poisoned")?;

        let mut bgr = Mat::default();
        if !capture.read(&mut bgr)? || bgr.empty() {
            return Err("camera returned no frame".into());
        }

        let mut rgb = Mat::default();
        imgproc::cvt_color(&bgr, &mut rgb, imgproc::COLOR_BGR2RGB, 0)?;

        let (width, height) = (rgb.cols() as u32, rgb.rows() as u32);
        let buffer = RgbImage::from_raw(width, height, rgb.data_bytes()?.to_vec())
            .ok_or("frame buffer does not match its dimensions")?;

        Ok(DynamicImage::ImageRgb8(buffer))
    }
}

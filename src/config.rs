use chrono::Offset;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Inclusive latitude/longitude box the placeholder location is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub labels_path: Option<PathBuf>,
    pub input_size: u32,
    pub audio_output_path: PathBuf,
    pub map_output_path: PathBuf,
    pub speech_endpoint: String,
    pub speech_language: String,
    pub map_zoom: u8,
    pub geo_bounds: GeoBounds,
    pub bind_address: SocketAddr,
    pub max_upload_bytes: usize,
    pub logger_timezone: chrono::FixedOffset,
    pub webcam_device_index: i32,
    pub webcam_frame_interval: Duration,
    pub archive_model_path: PathBuf,
    pub archive_output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("best_terrain_classifier_model.onnx"),
            labels_path: None,
            input_size: 128,
            audio_output_path: PathBuf::from("alert.mp3"),
            map_output_path: PathBuf::from("minimap.html"),
            speech_endpoint: "https://translate.google.com/translate_tts".to_string(),
            speech_language: "en".to_string(),
            map_zoom: 13,
            geo_bounds: GeoBounds {
                lat_min: 12.90,
                lat_max: 13.10,
                lon_min: 77.50,
                lon_max: 77.70,
            },
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, 7860)),
            max_upload_bytes: 20 * 1024 * 1024,
            logger_timezone: india_standard_time(),
            webcam_device_index: 0,
            webcam_frame_interval: Duration::from_millis(30),
            archive_model_path: PathBuf::from("best_terrain_model.onnx"),
            archive_output_path: PathBuf::from("best_terrain_model.zip"),
        }
    }
}

fn india_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap_or_else(|| chrono::Utc.fix())
}

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::interface::DeviceCamera;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use geo::impl_rand::RandomSourceRand;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use live_preview::LivePreview;
use output_sink::interface::OutputSink;
use speech::impl_google_translate::SpeechSynthesizerGoogleTranslate;
use std::sync::Arc;
use terrain_pipeline::pipeline::TerrainPipeline;
use web_ui::server::{start_server, WebState};

mod cli;
mod config;
mod device_camera;
mod device_display;
mod geo;
mod image_classifier;
mod library;
mod live_preview;
mod map;
mod model_archive;
mod output_sink;
mod speech;
mod terrain;
mod terrain_pipeline;
mod web_ui;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let mut config = Config::default();
    cli.apply(&mut config);

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    match &cli.command {
        None | Some(Commands::Serve { .. }) => serve(&config, cli.demo, logger),
        Some(Commands::Webcam {
            console,
            fake_camera,
            ..
        }) => webcam(&config, cli.demo, *console, *fake_camera, logger),
        Some(Commands::ZipModel { .. }) => zip_model(&config, logger),
    }
}

fn build_pipeline(
    config: &Config,
    demo: bool,
    sinks: Vec<Arc<dyn OutputSink + Send + Sync>>,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<TerrainPipeline>, BoxError> {
    let classifier: Arc<dyn ImageClassifier + Send + Sync> = if demo {
        logger.warn("Demo mode: terrain is picked at random, no model is loaded")?;
        Arc::new(ImageClassifierFake::new(logger.clone()))
    } else {
        Arc::new(ImageClassifierTractOnnx::new(
            &config.model_path,
            config.input_size,
            logger.clone(),
        )?)
    };

    let pipeline = TerrainPipeline::new(
        config,
        logger,
        classifier,
        Arc::new(RandomSourceRand::new()),
        sinks,
    )?;

    Ok(Arc::new(pipeline))
}

fn serve(config: &Config, demo: bool, logger: Arc<dyn Logger + Send + Sync>) -> Result<(), BoxError> {
    // The speech client blocks, so it is built and dropped outside the runtime.
    let speech = Arc::new(SpeechSynthesizerGoogleTranslate::new(
        &config.speech_endpoint,
        logger.clone(),
    )?);
    let sinks = TerrainPipeline::standard_sinks(config, speech);
    let pipeline = build_pipeline(config, demo, sinks, logger.clone())?;

    let state = WebState::new(config, pipeline.clone(), logger);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(start_server(config, state))?;
    runtime.shutdown_background();

    drop(pipeline);
    Ok(())
}

fn webcam(
    config: &Config,
    demo: bool,
    console: bool,
    fake_camera: bool,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), BoxError> {
    // The preview only overlays the prediction; no report, audio or map is produced.
    let pipeline = build_pipeline(config, demo, Vec::new(), logger.clone())?;
    let camera = open_camera(config, fake_camera, logger.clone())?;

    if console {
        let display = Arc::new(DeviceDisplayConsole::new(logger.clone()));
        let preview = LivePreview::new(pipeline, camera, display, logger, config.webcam_frame_interval);
        preview.run()?;
        return Ok(());
    }

    let display = Arc::new(DeviceDisplayGui::new());
    let preview = LivePreview::new(
        pipeline,
        camera,
        display.clone() as Arc<dyn DeviceDisplay + Send + Sync>,
        logger.clone(),
        config.webcam_frame_interval,
    );

    let worker = std::thread::spawn(move || preview.run());
    display.run_window("Drone Terrain Classifier")?;

    match worker.join() {
        Ok(result) => {
            result?;
        }
        Err(_) => {
            logger.error("Preview worker panicked")?;
            return Err("preview worker panicked".into());
        }
    }

    Ok(())
}

#[cfg(feature = "opencv-camera")]
fn open_camera(
    config: &Config,
    fake_camera: bool,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn DeviceCamera + Send + Sync>, BoxError> {
    if fake_camera {
        return Ok(Arc::new(DeviceCameraFake::new(logger)));
    }
    let camera = device_camera::impl_opencv::DeviceCameraOpenCv::new(config.webcam_device_index, logger)?;
    Ok(Arc::new(camera))
}

#[cfg(not(feature = "opencv-camera"))]
fn open_camera(
    config: &Config,
    fake_camera: bool,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn DeviceCamera + Send + Sync>, BoxError> {
    if !fake_camera {
        logger.warn(&format!(
            "Built without the opencv-camera feature, camera {} is unavailable; using generated frames",
            config.webcam_device_index
        ))?;
    }
    Ok(Arc::new(DeviceCameraFake::new(logger)))
}

fn zip_model(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Result<(), BoxError> {
    let logger = logger.with_namespace("zip_model");
    let written = model_archive::zip_model(&config.archive_model_path, &config.archive_output_path)?;
    logger.info(&format!(
        "✅ Model zipped as {} ({} bytes)",
        config.archive_output_path.display(),
        written
    ))?;
    Ok(())
}

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Drone terrain classifier
#[derive(Parser, Debug)]
#[command(name = "drone-terrain-classifier")]
#[command(version)]
#[command(about = "Classify drone camera terrain and raise voice and map alerts", long_about = None)]
pub struct Cli {
    /// ONNX model exported from the trained terrain classifier
    #[arg(long, global = true, env = "TERRAIN_MODEL_PATH")]
    pub model: Option<PathBuf>,

    /// Label file, one class per line, checked against the built-in class order
    #[arg(long, global = true, env = "TERRAIN_LABELS_PATH")]
    pub labels: Option<PathBuf>,

    /// Run without a model, answering with random terrain
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the upload page and JSON API
    Serve {
        #[arg(long, env = "TERRAIN_BIND_ADDRESS")]
        bind: Option<SocketAddr>,
    },

    /// Live webcam preview annotated with the predicted terrain
    Webcam {
        #[arg(long, env = "TERRAIN_CAMERA_INDEX")]
        device: Option<i32>,

        /// Print annotations to the terminal instead of opening a window
        #[arg(long)]
        console: bool,

        /// Use generated frames instead of a real camera
        #[arg(long)]
        fake_camera: bool,
    },

    /// Compress the model file into a zip archive
    ZipModel {
        #[arg(long)]
        source: Option<PathBuf>,

        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.model_path = model.clone();
        }
        if let Some(labels) = &self.labels {
            config.labels_path = Some(labels.clone());
        }

        match &self.command {
            Some(Commands::Serve { bind: Some(bind) }) => config.bind_address = *bind,
            Some(Commands::Webcam {
                device: Some(device),
                ..
            }) => config.webcam_device_index = *device,
            Some(Commands::ZipModel { source, output }) => {
                if let Some(source) = source {
                    config.archive_model_path = source.clone();
                }
                if let Some(output) = output {
                    config.archive_output_path = output.clone();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve_with_defaults() {
        let cli = Cli::try_parse_from(["drone-terrain-classifier"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert!(cli.command.is_none());
        assert_eq!(config.bind_address, Config::default().bind_address);
    }

    #[test]
    fn serve_flags_override_config() {
        let cli = Cli::try_parse_from([
            "drone-terrain-classifier",
            "--model",
            "other.onnx",
            "serve",
            "--bind",
            "0.0.0.0:8080",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.model_path, PathBuf::from("other.onnx"));
        assert_eq!(config.bind_address.port(), 8080);
    }

    #[test]
    fn zip_model_paths_override_config() {
        let cli = Cli::try_parse_from([
            "drone-terrain-classifier",
            "zip-model",
            "--source",
            "m.onnx",
            "--output",
            "m.zip",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.archive_model_path, PathBuf::from("m.onnx"));
        assert_eq!(config.archive_output_path, PathBuf::from("m.zip"));
    }

    #[test]
    fn webcam_accepts_device_and_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "drone-terrain-classifier",
            "webcam",
            "--device",
            "2",
            "--console",
            "--demo",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert!(cli.demo);
        assert_eq!(config.webcam_device_index, 2);
        assert!(matches!(cli.command, Some(Commands::Webcam { console: true, .. })));
    }
}

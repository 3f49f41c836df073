use crate::config::Config;
use crate::geo::fake_reading::FakeGeoGenerator;
use crate::geo::interface::RandomSource;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::preprocess::image_to_input_tensor;
use crate::library::logger::interface::Logger;
use crate::output_sink::audio_file::AudioFileSink;
use crate::output_sink::fan_out::fan_out;
use crate::output_sink::interface::OutputSink;
use crate::output_sink::map_file::MapFileSink;
use crate::output_sink::text_report::TextReportSink;
use crate::speech::interface::SpeechSynthesizer;
use crate::terrain::analysis::TerrainAnalysis;
use crate::terrain::labels::{verify_label_contract, LabelContractError};
use crate::terrain::terrain_class::TerrainClass;
use crate::terrain_pipeline::error::PipelineError;
use crate::terrain_pipeline::report::TerrainReport;
use image::DynamicImage;
use std::sync::Arc;

/// Image in, analysis and sink outputs out. Holds only read-only state, built
/// once at startup.
pub struct TerrainPipeline {
    input_size: u32,
    logger: Arc<dyn Logger + Send + Sync>,
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
    geo: FakeGeoGenerator,
    sinks: Vec<Arc<dyn OutputSink + Send + Sync>>,
}

impl TerrainPipeline {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
        random: Arc<dyn RandomSource + Send + Sync>,
        sinks: Vec<Arc<dyn OutputSink + Send + Sync>>,
    ) -> Result<Self, LabelContractError> {
        verify_label_contract(classifier.class_count(), config.labels_path.as_deref())?;

        Ok(Self {
            input_size: config.input_size,
            logger: logger.with_namespace("pipeline"),
            classifier,
            geo: FakeGeoGenerator::new(config.geo_bounds, random),
            sinks,
        })
    }

    /// The text report, spoken alert and minimap sinks, writing to the configured paths.
    pub fn standard_sinks(
        config: &Config,
        speech: Arc<dyn SpeechSynthesizer + Send + Sync>,
    ) -> Vec<Arc<dyn OutputSink + Send + Sync>> {
        vec![
            Arc::new(TextReportSink::new()),
            Arc::new(AudioFileSink::new(
                speech,
                &config.speech_language,
                config.audio_output_path.clone(),
            )),
            Arc::new(MapFileSink::new(config.map_zoom, config.map_output_path.clone())),
        ]
    }

    pub fn predict(&self, image: &DynamicImage) -> Result<TerrainClass, PipelineError> {
        let input = image_to_input_tensor(image, self.input_size)?;
        let index = self
            .classifier
            .predict(&input)
            .map_err(PipelineError::Inference)?;
        TerrainClass::from_index(index).ok_or(PipelineError::UnknownClassIndex(index))
    }

    pub fn classify_terrain(&self, image: &DynamicImage) -> Result<TerrainReport, PipelineError> {
        let terrain = self.predict(image)?;
        let analysis = TerrainAnalysis::new(terrain, self.geo.next_reading());

        let _ = self.logger.info(&format!(
            "{}x{} image classified as {}, action {}",
            image.width(),
            image.height(),
            analysis.terrain,
            analysis.action.name()
        ));

        let outcomes = fan_out(&self.sinks, &analysis, &self.logger);

        Ok(TerrainReport { analysis, outcomes })
    }
}

use crate::output_sink::interface::{OutputSink, SinkArtifact};
use crate::speech::interface::SpeechSynthesizer;
use crate::terrain::analysis::TerrainAnalysis;
use std::path::PathBuf;
use std::sync::Arc;

pub const AUDIO_SINK: &str = "audio";

/// Speaks the advisory message (without its icon) into a fixed MP3 file.
pub struct AudioFileSink {
    speech: Arc<dyn SpeechSynthesizer + Send + Sync>,
    language: String,
    path: PathBuf,
}

impl AudioFileSink {
    pub fn new(
        speech: Arc<dyn SpeechSynthesizer + Send + Sync>,
        language: &str,
        path: PathBuf,
    ) -> Self {
        Self {
            speech,
            language: language.to_string(),
            path,
        }
    }
}

impl OutputSink for AudioFileSink {
    fn name(&self) -> &'static str {
        AUDIO_SINK
    }

    fn emit(
        &self,
        analysis: &TerrainAnalysis,
    ) -> Result<SinkArtifact, Box<dyn std::error::Error + Send + Sync>> {
        let audio = self
            .speech
            .synthesize(analysis.advisory.message, &self.language)?;
        std::fs::write(&self.path, audio)?;
        Ok(SinkArtifact::File(self.path.clone()))
    }
}

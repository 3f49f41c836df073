use crate::output_sink::interface::{OutputSink, SinkArtifact};
use crate::terrain::analysis::TerrainAnalysis;

pub const TEXT_SINK: &str = "text";

pub struct TextReportSink {}

impl TextReportSink {
    pub fn new() -> Self {
        Self {}
    }
}

impl OutputSink for TextReportSink {
    fn name(&self) -> &'static str {
        TEXT_SINK
    }

    fn emit(
        &self,
        analysis: &TerrainAnalysis,
    ) -> Result<SinkArtifact, Box<dyn std::error::Error + Send + Sync>> {
        Ok(SinkArtifact::Text(analysis.report_text()))
    }
}

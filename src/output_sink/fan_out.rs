use crate::library::logger::interface::Logger;
use crate::output_sink::interface::{OutputSink, SinkArtifact};
use crate::terrain::analysis::TerrainAnalysis;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct SinkOutcome {
    pub sink: &'static str,
    pub result: Result<SinkArtifact, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SinkFailure {
    pub sink: &'static str,
    pub error: String,
}

/// Runs every sink against the same analysis. A failing sink is logged and
/// recorded; it never stops the remaining sinks and nothing is rolled back.
pub fn fan_out(
    sinks: &[Arc<dyn OutputSink + Send + Sync>],
    analysis: &TerrainAnalysis,
    logger: &Arc<dyn Logger + Send + Sync>,
) -> Vec<SinkOutcome> {
    sinks
        .iter()
        .map(|sink| {
            let result = sink.emit(analysis).map_err(|e| e.to_string());
            let _ = match &result {
                Ok(SinkArtifact::File(path)) => {
                    logger.info(&format!("{} sink wrote {}", sink.name(), path.display()))
                }
                Ok(SinkArtifact::Text(_)) => logger.info(&format!("{} sink done", sink.name())),
                Err(e) => logger.error(&format!("{} sink failed: {}", sink.name(), e)),
            };
            SinkOutcome {
                sink: sink.name(),
                result,
            }
        })
        .collect()
}

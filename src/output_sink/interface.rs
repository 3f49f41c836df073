use crate::terrain::analysis::TerrainAnalysis;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum SinkArtifact {
    Text(String),
    File(PathBuf),
}

/// One independent consumer of an analysis. Sinks never see each other's results.
pub trait OutputSink: Send + Sync {
    fn name(&self) -> &'static str;
    fn emit(
        &self,
        analysis: &TerrainAnalysis,
    ) -> Result<SinkArtifact, Box<dyn std::error::Error + Send + Sync>>;
}

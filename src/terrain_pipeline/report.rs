use crate::output_sink::fan_out::{SinkFailure, SinkOutcome};
use crate::output_sink::interface::SinkArtifact;
use crate::terrain::analysis::TerrainAnalysis;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct TerrainReport {
    pub analysis: TerrainAnalysis,
    pub outcomes: Vec<SinkOutcome>,
}

impl TerrainReport {
    pub fn text(&self, sink: &str) -> Option<&str> {
        self.artifact(sink).and_then(|artifact| match artifact {
            SinkArtifact::Text(text) => Some(text.as_str()),
            SinkArtifact::File(_) => None,
        })
    }

    pub fn file(&self, sink: &str) -> Option<&Path> {
        self.artifact(sink).and_then(|artifact| match artifact {
            SinkArtifact::File(path) => Some(path.as_path()),
            SinkArtifact::Text(_) => None,
        })
    }

    pub fn failures(&self) -> Vec<SinkFailure> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match &outcome.result {
                Err(error) => Some(SinkFailure {
                    sink: outcome.sink,
                    error: error.clone(),
                }),
                Ok(_) => None,
            })
            .collect()
    }

    fn artifact(&self, sink: &str) -> Option<&SinkArtifact> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.sink == sink)
            .and_then(|outcome| outcome.result.as_ref().ok())
    }
}

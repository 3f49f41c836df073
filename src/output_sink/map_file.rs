use crate::map::leaflet::render_minimap_html;
use crate::output_sink::interface::{OutputSink, SinkArtifact};
use crate::terrain::analysis::TerrainAnalysis;
use std::path::PathBuf;

pub const MAP_SINK: &str = "map";

pub struct MapFileSink {
    zoom: u8,
    path: PathBuf,
}

impl MapFileSink {
    pub fn new(zoom: u8, path: PathBuf) -> Self {
        Self { zoom, path }
    }
}

impl OutputSink for MapFileSink {
    fn name(&self) -> &'static str {
        MAP_SINK
    }

    fn emit(
        &self,
        analysis: &TerrainAnalysis,
    ) -> Result<SinkArtifact, Box<dyn std::error::Error + Send + Sync>> {
        let html = render_minimap_html(analysis.geo.lat, analysis.geo.lon, self.zoom);
        std::fs::write(&self.path, html)?;
        Ok(SinkArtifact::File(self.path.clone()))
    }
}

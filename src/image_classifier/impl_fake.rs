use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::preprocess::InputTensor;
use crate::library::logger::interface::Logger;
use crate::terrain::terrain_class::TerrainClass;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Stands in for the real model: a fixed answer, or a random terrain when none is set.
pub struct ImageClassifierFake {
    fixed: Option<TerrainClass>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            fixed: None,
            logger: logger.with_namespace("classifier").with_namespace("fake"),
        }
    }

    pub fn always(class: TerrainClass, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            fixed: Some(class),
            ..Self::new(logger)
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(&self, input: &InputTensor) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let index = match self.fixed {
            Some(class) => class as usize,
            None => {
                let index_dist = Uniform::new(0, TerrainClass::ALL.len())?;
                index_dist.sample(&mut rand::rng())
            }
        };

        self.logger.info(&format!(
            "Classified tensor {:?} as index {}",
            input.shape(),
            index
        ))?;

        Ok(index)
    }

    fn class_count(&self) -> Option<usize> {
        Some(TerrainClass::ALL.len())
    }
}

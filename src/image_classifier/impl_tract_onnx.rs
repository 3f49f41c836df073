use crate::image_classifier::interface::{argmax, ImageClassifier};
use crate::image_classifier::preprocess::InputTensor;
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// Runs the terrain model exported to ONNX, NHWC input `[1, size, size, 3]`.
pub struct ImageClassifierTractOnnx {
    model: OnnxPlan,
    class_count: Option<usize>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        model_path: &Path,
        input_size: u32,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("classifier").with_namespace("tract_onnx");
        logger.info(&format!("Loading model from {}", model_path.display()))?;

        let side = input_size as usize;
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, f32::fact([1, side, side, 3]).into())?
            .into_optimized()?;

        let class_count = model
            .output_fact(0)?
            .shape
            .as_concrete()
            .and_then(|shape| shape.last().copied());

        let model = model.into_runnable()?;

        logger.info(&format!(
            "Model ready, input {}x{}x3, {} output classes",
            side,
            side,
            class_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ))?;

        Ok(Self {
            model,
            class_count,
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(&self, input: &InputTensor) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let outputs = self.model.run(tvec!(input.clone().into_tensor().into_tvalue()))?;
        let scores: Vec<f32> = outputs[0].to_array_view::<f32>()?.iter().copied().collect();

        let index = argmax(&scores).ok_or("model produced no usable scores")?;
        self.logger
            .info(&format!("Predicted index {} of {}", index, scores.len()))?;

        Ok(index)
    }

    fn class_count(&self) -> Option<usize> {
        self.class_count
    }
}

use crate::image_classifier::preprocess::PreprocessError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("could not prepare image: {0}")]
    Preprocess(#[from] PreprocessError),
    #[error("inference failed: {0}")]
    Inference(Box<dyn std::error::Error + Send + Sync>),
    #[error("classifier returned index {0}, outside the known terrain labels")]
    UnknownClassIndex(usize),
}

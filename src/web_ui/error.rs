use crate::image_classifier::preprocess::PreprocessError;
use crate::terrain_pipeline::error::PipelineError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no image was uploaded (expected a form field named \"image\")")]
    MissingImage,
    #[error("could not read upload: {0}")]
    Upload(#[from] MultipartError),
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("classification worker stopped: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::MissingImage | WebError::Upload(_) | WebError::Decode(_) => {
                StatusCode::BAD_REQUEST
            }
            WebError::Pipeline(PipelineError::Preprocess(PreprocessError::EmptyImage { .. })) => {
                StatusCode::BAD_REQUEST
            }
            WebError::Pipeline(_) | WebError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

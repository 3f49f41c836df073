use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::output_sink::audio_file::AUDIO_SINK;
use crate::output_sink::fan_out::SinkFailure;
use crate::output_sink::map_file::MAP_SINK;
use crate::output_sink::text_report::TEXT_SINK;
use crate::terrain::terrain_class::TerrainClass;
use crate::terrain_pipeline::pipeline::TerrainPipeline;
use crate::terrain_pipeline::report::TerrainReport;
use crate::web_ui::error::WebError;
use crate::web_ui::pages::{render_error, render_index, render_report};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use image::DynamicImage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub const AUDIO_URL: &str = "/outputs/alert.mp3";
pub const MAP_URL: &str = "/outputs/minimap.html";

#[derive(Clone)]
pub struct WebState {
    pipeline: Arc<TerrainPipeline>,
    // Output files have fixed names, so runs must not overlap.
    run_lock: Arc<Mutex<()>>,
    audio_path: PathBuf,
    map_path: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl WebState {
    pub fn new(
        config: &Config,
        pipeline: Arc<TerrainPipeline>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            pipeline,
            run_lock: Arc::new(Mutex::new(())),
            audio_path: config.audio_output_path.clone(),
            map_path: config.map_output_path.clone(),
            logger: logger.with_namespace("web_ui"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub terrain: TerrainClass,
    pub message: String,
    pub geo_update: String,
    pub latitude: f64,
    pub longitude: f64,
    pub action: String,
    pub report: Option<String>,
    pub audio_url: Option<String>,
    pub map_url: Option<String>,
    pub failures: Vec<SinkFailure>,
}

impl From<&TerrainReport> for ClassifyResponse {
    fn from(report: &TerrainReport) -> Self {
        let analysis = &report.analysis;
        Self {
            terrain: analysis.terrain,
            message: analysis.advisory.to_string(),
            geo_update: analysis.geo.tweak.to_string(),
            latitude: analysis.geo.lat,
            longitude: analysis.geo.lon,
            action: analysis.action.to_string(),
            report: report.text(TEXT_SINK).map(str::to_string),
            audio_url: report.file(AUDIO_SINK).map(|_| AUDIO_URL.to_string()),
            map_url: report.file(MAP_SINK).map(|_| MAP_URL.to_string()),
            failures: report.failures(),
        }
    }
}

pub fn router(state: WebState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/classify", post(classify_page_handler))
        .route("/api/classify", post(classify_api_handler))
        .route(AUDIO_URL, get(audio_handler))
        .route(MAP_URL, get(map_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

pub async fn start_server(
    config: &Config,
    state: WebState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let logger = state.logger.clone();
    let app = router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    logger.info(&format!("Listening on http://{}", config.bind_address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logger.info("Server stopped")?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn index_handler() -> Html<String> {
    Html(render_index())
}

async fn classify_page_handler(State(state): State<WebState>, multipart: Multipart) -> Response {
    match classify_upload(&state, multipart).await {
        Ok(report) => {
            let version = chrono::Utc::now().timestamp_millis();
            Html(render_report(
                &report,
                report.file(AUDIO_SINK).map(|_| AUDIO_URL),
                report.file(MAP_SINK).map(|_| MAP_URL),
                version,
            ))
            .into_response()
        }
        Err(e) => (e.status(), Html(render_error(&e.to_string()))).into_response(),
    }
}

async fn classify_api_handler(
    State(state): State<WebState>,
    multipart: Multipart,
) -> Result<Json<ClassifyResponse>, WebError> {
    let report = classify_upload(&state, multipart).await?;
    Ok(Json(ClassifyResponse::from(&report)))
}

async fn classify_upload(state: &WebState, multipart: Multipart) -> Result<TerrainReport, WebError> {
    let image = read_image_field(multipart).await?;

    let pipeline = state.pipeline.clone();
    let run_lock = state.run_lock.clone();
    let result = tokio::task::spawn_blocking(move || {
        let _guard = run_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        pipeline.classify_terrain(&image)
    })
    .await?;

    if let Err(e) = &result {
        let _ = state.logger.error(&format!("Classification failed: {}", e));
    }

    Ok(result?)
}

async fn read_image_field(mut multipart: Multipart) -> Result<DynamicImage, WebError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }
        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(WebError::MissingImage);
        }
        return Ok(image::load_from_memory(&bytes)?);
    }
    Err(WebError::MissingImage)
}

async fn audio_handler(State(state): State<WebState>) -> Response {
    serve_output_file(&state.audio_path, "audio/mpeg").await
}

async fn map_handler(State(state): State<WebState>) -> Response {
    serve_output_file(&state.map_path, "text/html; charset=utf-8").await
}

async fn serve_output_file(path: &Path, content_type: &'static str) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, content_type),
                (header::CACHE_CONTROL, "no-store"),
            ],
            bytes,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::impl_fake::SpeechSynthesizerFake;
    use crate::terrain_pipeline::tests::fixture::Fixture;
    use axum::body::Body;
    use axum::http::Request;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;
    use tower::ServiceExt;

    const BOUNDARY: &str = "terrain-test-boundary";

    fn app(f: &Fixture) -> Router {
        let state = WebState::new(&f.config, f.pipeline.clone(), Arc::new(f.logger.clone()));
        router(state, f.config.max_upload_bytes)
    }

    fn green_png() -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(40, 30, Rgb([0, 200, 0])));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn multipart_request(uri: &str, field: &str, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"upload.png\"\r\nContent-Type: image/png\r\n\r\n",
                BOUNDARY, field
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let f = Fixture::new(TerrainClass::Forest);

        let response = app(&f)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Smart Drone Terrain Classifier"));
    }

    #[tokio::test]
    async fn test_api_classify_green_upload() {
        let f = Fixture::new(TerrainClass::Forest);

        let response = app(&f)
            .oneshot(multipart_request("/api/classify", "image", &green_png()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["terrain"], "Forest");
        assert_eq!(json["action"], "✅ Proceed");
        assert_eq!(json["audio_url"], AUDIO_URL);
        assert_eq!(json["map_url"], MAP_URL);
        assert!(json["report"].as_str().unwrap().contains("Terrain: Forest"));
        assert!(f.config.audio_output_path.exists());
        assert!(f.config.map_output_path.exists());
    }

    #[tokio::test]
    async fn test_page_classify_renders_outputs() {
        let f = Fixture::new(TerrainClass::Forest);

        let response = app(&f)
            .oneshot(multipart_request("/classify", "image", &green_png()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<audio controls"));
        assert!(html.contains("minimap.html</a>"));
    }

    #[tokio::test]
    async fn test_missing_image_field_is_bad_request() {
        let f = Fixture::new(TerrainClass::Forest);

        let response = app(&f)
            .oneshot(multipart_request("/api/classify", "photo", &green_png()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(f.speech.calls(), 0);
    }

    #[tokio::test]
    async fn test_garbage_upload_is_bad_request() {
        let f = Fixture::new(TerrainClass::Forest);

        let response = app(&f)
            .oneshot(multipart_request("/classify", "image", b"not an image"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn test_outputs_served_after_run() {
        let f = Fixture::new(TerrainClass::Forest);
        let app = app(&f);

        let before = app
            .clone()
            .oneshot(Request::get(MAP_URL).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(before.status(), StatusCode::NOT_FOUND);

        app.clone()
            .oneshot(multipart_request("/api/classify", "image", &green_png()))
            .await
            .unwrap();

        let audio = app
            .clone()
            .oneshot(Request::get(AUDIO_URL).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(audio.status(), StatusCode::OK);
        assert_eq!(audio.headers()[header::CONTENT_TYPE], "audio/mpeg");

        let map = app
            .oneshot(Request::get(MAP_URL).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(body_string(map).await.contains("Drone Location"));
    }

    #[tokio::test]
    async fn test_speech_outage_reported_in_json() {
        let f = Fixture::with_speech(TerrainClass::Forest, SpeechSynthesizerFake::failing());

        let response = app(&f)
            .oneshot(multipart_request("/api/classify", "image", &green_png()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["audio_url"].is_null());
        assert_eq!(json["failures"][0]["sink"], "audio");
    }
}

use crate::output_sink::text_report::TEXT_SINK;
use crate::terrain_pipeline::report::TerrainReport;
use ammonia::clean_text;

pub const TITLE: &str = "🚁 Smart Drone Terrain Classifier";
pub const DESCRIPTION: &str =
    "Upload a terrain image. Get smart predictions, voice alerts, and GPS-based mini-map.";

const STYLE: &str = r#"
    body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
    fieldset { border: 1px solid #ccc; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
    legend { font-weight: bold; }
    pre { background: #f4f4f4; padding: 1rem; border-radius: 6px; white-space: pre-wrap; }
    .error { color: #a00; }
"#;

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<h1>{title}</h1>\n<p>{description}</p>\n{body}\n</body>\n</html>\n",
        title = TITLE,
        style = STYLE,
        description = DESCRIPTION,
        body = body,
    )
}

fn upload_form() -> &'static str {
    r#"<form action="/classify" method="post" enctype="multipart/form-data">
<fieldset>
<legend>📷 Upload terrain image</legend>
<input type="file" name="image" accept="image/*" required />
<button type="submit">Analyze</button>
</fieldset>
</form>"#
}

pub fn render_index() -> String {
    layout(upload_form())
}

/// `version` busts browser caches, since the output files keep the same names.
pub fn render_report(report: &TerrainReport, audio_url: Option<&str>, map_url: Option<&str>, version: i64) -> String {
    let mut body = String::from(upload_form());

    body.push_str("\n<fieldset>\n<legend>🧠 Drone Analysis</legend>\n");
    match report.text(TEXT_SINK) {
        Some(text) => body.push_str(&format!("<pre>{}</pre>\n", clean_text(text))),
        None => body.push_str("<p class=\"error\">No report text was produced.</p>\n"),
    }
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset>\n<legend>🔊 Voice Alert</legend>\n");
    if let Some(url) = audio_url {
        body.push_str(&format!(
            "<audio controls src=\"{}?v={}\"></audio>\n",
            clean_text(url),
            version
        ));
    }
    body.push_str("</fieldset>\n");

    body.push_str("<fieldset>\n<legend>🗺️ View Map (HTML)</legend>\n");
    if let Some(url) = map_url {
        body.push_str(&format!(
            "<a href=\"{}?v={}\" target=\"_blank\">minimap.html</a>\n",
            clean_text(url),
            version
        ));
    }
    body.push_str("</fieldset>\n");

    for failure in report.failures() {
        body.push_str(&format!(
            "<p class=\"error\">{} output failed: {}</p>\n",
            clean_text(failure.sink),
            clean_text(&failure.error)
        ));
    }

    layout(&body)
}

pub fn render_error(message: &str) -> String {
    layout(&format!(
        "{}\n<p class=\"error\">{}</p>",
        upload_form(),
        clean_text(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_has_upload_field() {
        let html = render_index();
        assert!(html.contains("name=\"image\""));
        assert!(html.contains("enctype=\"multipart/form-data\""));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let html = render_error("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}

//! Standalone Leaflet page with a single marker, viewable offline apart
//! from the tile and script CDNs.

use serde_json::json;

const LEAFLET_VERSION: &str = "1.9.4";
pub const MARKER_POPUP: &str = "Drone Location 📍";

pub fn render_minimap_html(lat: f64, lon: f64, zoom: u8) -> String {
    // serde_json gives us correctly escaped JS literals for the data we inline.
    let center = json!([lat, lon]);
    let popup = json!(MARKER_POPUP);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Drone minimap</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css" />
    <script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
    <style>
        html, body {{ width: 100%; height: 100%; margin: 0; padding: 0; }}
        #minimap {{ position: absolute; top: 0; bottom: 0; right: 0; left: 0; }}
    </style>
</head>
<body>
    <div id="minimap"></div>
    <script>
        var center = {center};
        var minimap = L.map("minimap").setView(center, {zoom});
        L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
            maxZoom: 19,
            attribution: "&copy; OpenStreetMap contributors"
        }}).addTo(minimap);
        L.marker(center).addTo(minimap).bindPopup({popup});
    </script>
</body>
</html>
"#,
        version = LEAFLET_VERSION,
        center = center,
        zoom = zoom,
        popup = popup,
    )
}

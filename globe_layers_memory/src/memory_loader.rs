/// In-memory data source loader.
///
/// Documents are registered by url up front; `load` parses the stored text
/// and reports how many entities it would produce.

use futures::future::BoxFuture;
use rustc_hash::FxHashMap;
use serde_json::Value;
use globe_layers::globe::{Error, Result};
use globe_layers::globe::collection::{DataSource, DataSourceKind};
use globe_layers::globe::layers::{DataSourceLoader, LoadRequest};
use globe_layers::sdk_debug;

#[derive(Default)]
pub struct MemoryLoader {
    documents: FxHashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.documents.insert(url.into(), body.into());
    }

    fn parse(request: &LoadRequest, body: &str) -> Result<usize> {
        match request.kind() {
            DataSourceKind::GeoJson => geojson_entity_count(&parse_json(request, body)?)
                .ok_or_else(|| load_failed(request, "not a GeoJSON object")),
            DataSourceKind::Czml => czml_entity_count(&parse_json(request, body)?)
                .ok_or_else(|| load_failed(request, "CZML must be an array of packets")),
            DataSourceKind::Kml => kml_entity_count(body)
                .ok_or_else(|| load_failed(request, "missing <kml> root element")),
        }
    }
}

fn load_failed(request: &LoadRequest, reason: &str) -> Error {
    Error::LoadFailed(format!("{}: {}", request.url(), reason))
}

fn parse_json(request: &LoadRequest, body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|err| load_failed(request, &err.to_string()))
}

/// One entity per feature or bare geometry
fn geojson_entity_count(document: &Value) -> Option<usize> {
    match document.get("type")?.as_str()? {
        "FeatureCollection" => Some(document.get("features")?.as_array()?.len()),
        "Feature" | "Point" | "MultiPoint" | "LineString" | "MultiLineString" | "Polygon"
        | "MultiPolygon" | "GeometryCollection" => Some(1),
        _ => None,
    }
}

/// Every packet except the leading `document` packet
fn czml_entity_count(document: &Value) -> Option<usize> {
    let packets = document.as_array()?;
    Some(
        packets
            .iter()
            .filter(|packet| packet.get("id").and_then(Value::as_str) != Some("document"))
            .count(),
    )
}

fn kml_entity_count(body: &str) -> Option<usize> {
    if !body.contains("<kml") {
        return None;
    }
    Some(body.matches("<Placemark").count())
}

impl DataSourceLoader for MemoryLoader {
    fn load<'a>(&'a self, request: &'a LoadRequest) -> BoxFuture<'a, Result<DataSource>> {
        Box::pin(async move {
            let body = self
                .documents
                .get(request.url())
                .ok_or_else(|| load_failed(request, "not found"))?;
            let entity_count = Self::parse(request, body)?;
            sdk_debug!(
                "globe::memory::Loader",
                "Loaded {} ({} entities)",
                request.url(),
                entity_count
            );
            Ok(DataSource {
                name: request.url().to_string(),
                kind: request.kind(),
                url: request.url().to_string(),
                entity_count,
                show: true,
            })
        })
    }
}

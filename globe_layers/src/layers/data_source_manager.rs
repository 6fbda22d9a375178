/// Named data sources (GeoJSON, CZML, KML).
///
/// Loading is asynchronous and delegated to a [`DataSourceLoader`]. A load
/// runs in two phases: [`DataSourceManager::begin_load`] hands out a ticket,
/// [`DataSourceManager::finish_load`] registers the loaded source only if
/// that ticket is still the latest for its name. Any later load, direct add,
/// remove or clear of the name makes the ticket stale.

use std::sync::{Arc, Mutex};
use futures::future::BoxFuture;
use rustc_hash::FxHashMap;
use crate::collection::{DataSource, DataSourceCollection, DataSourceHandle, DataSourceKind};
use crate::error::{validate_name, Error, Result};
use crate::graphics::Color;
use crate::registry::Registry;
use crate::{sdk_debug, sdk_warn};

const SOURCE: &str = "globe::DataSourceManager";

/// GeoJSON styling applied while loading
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoJsonLoadOptions {
    /// Base for resolving relative links in the document
    pub source_uri: Option<String>,
    pub clamp_to_ground: bool,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub fill: Option<Color>,
    pub marker_color: Option<Color>,
    pub marker_size: Option<f64>,
    pub marker_symbol: Option<String>,
}

/// What to load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadRequest {
    GeoJson { url: String, options: GeoJsonLoadOptions },
    Czml { url: String },
    Kml { url: String },
}

impl LoadRequest {
    pub fn kind(&self) -> DataSourceKind {
        match self {
            LoadRequest::GeoJson { .. } => DataSourceKind::GeoJson,
            LoadRequest::Czml { .. } => DataSourceKind::Czml,
            LoadRequest::Kml { .. } => DataSourceKind::Kml,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            LoadRequest::GeoJson { url, .. } | LoadRequest::Czml { url } | LoadRequest::Kml { url } => url,
        }
    }
}

/// Fetches and parses data source documents
pub trait DataSourceLoader: Send + Sync {
    /// Load the document described by `request`
    ///
    /// Failures should be reported as `Error::LoadFailed`.
    fn load<'a>(&'a self, request: &'a LoadRequest) -> BoxFuture<'a, Result<DataSource>>;
}

/// Proof that a load was started for a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    name: String,
    generation: u64,
}

impl LoadTicket {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct DataSourceManager {
    registry: Registry<dyn DataSourceCollection, DataSourceKind>,
    loader: Arc<dyn DataSourceLoader>,
    /// Latest generation per name with a load in flight
    pending: FxHashMap<String, u64>,
    next_generation: u64,
}

impl DataSourceManager {
    pub fn new(sources: Arc<Mutex<dyn DataSourceCollection>>, loader: Arc<dyn DataSourceLoader>) -> Self {
        Self {
            registry: Registry::new(sources, SOURCE),
            loader,
            pending: FxHashMap::default(),
            next_generation: 1,
        }
    }

    pub fn loader(&self) -> &Arc<dyn DataSourceLoader> {
        &self.loader
    }

    /// Load a GeoJSON document and register it under `name`
    pub async fn add_geojson(
        &mut self,
        name: &str,
        url: &str,
        options: GeoJsonLoadOptions,
    ) -> Result<DataSourceHandle> {
        self.load_and_register(name, LoadRequest::GeoJson { url: url.to_string(), options }).await
    }

    /// Load a CZML document and register it under `name`
    pub async fn add_czml(&mut self, name: &str, url: &str) -> Result<DataSourceHandle> {
        self.load_and_register(name, LoadRequest::Czml { url: url.to_string() }).await
    }

    /// Load a KML document and register it under `name`
    pub async fn add_kml(&mut self, name: &str, url: &str) -> Result<DataSourceHandle> {
        self.load_and_register(name, LoadRequest::Kml { url: url.to_string() }).await
    }

    async fn load_and_register(&mut self, name: &str, request: LoadRequest) -> Result<DataSourceHandle> {
        let ticket = self.begin_load(name)?;
        let loader = Arc::clone(&self.loader);
        let source = match loader.load(&request).await {
            Ok(source) => source,
            Err(err) => {
                sdk_warn!(SOURCE, "Loading '{}' from {} failed: {}", name, request.url(), err);
                self.abandon_load(&ticket);
                return Err(err);
            }
        };
        self.finish_load(ticket, source)?
            .ok_or_else(|| Error::LoadFailed(format!("load of '{}' was superseded", name)))
    }

    /// Start a load for `name`, invalidating any load already in flight
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidName` if `name` is blank.
    pub fn begin_load(&mut self, name: &str) -> Result<LoadTicket> {
        validate_name(name)?;
        let generation = self.next_generation;
        self.next_generation += 1;
        self.pending.insert(name.to_string(), generation);
        Ok(LoadTicket { name: name.to_string(), generation })
    }

    /// Whether `ticket` is still the latest load for its name
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.pending.get(&ticket.name) == Some(&ticket.generation)
    }

    /// Drop a load that will not be finished
    pub fn abandon_load(&mut self, ticket: &LoadTicket) {
        if self.is_current(ticket) {
            self.pending.remove(&ticket.name);
        }
    }

    /// Register a loaded source if `ticket` is still current
    ///
    /// A stale ticket discards `source` without touching the host and
    /// returns `Ok(None)`. Otherwise the source takes the ticket's name and
    /// replaces any previous entry.
    pub fn finish_load(&mut self, ticket: LoadTicket, source: DataSource) -> Result<Option<DataSourceHandle>> {
        if !self.is_current(&ticket) {
            sdk_warn!(SOURCE, "Discarding stale load of '{}' (generation {})",
                ticket.name, ticket.generation);
            return Ok(None);
        }
        self.pending.remove(&ticket.name);
        self.register(&ticket.name, source).map(Some)
    }

    /// Register an already loaded source under `name`
    ///
    /// Any load in flight for `name` becomes stale.
    pub fn add(&mut self, name: &str, source: DataSource) -> Result<DataSourceHandle> {
        self.pending.remove(name);
        self.register(name, source)
    }

    fn register(&mut self, name: &str, mut source: DataSource) -> Result<DataSourceHandle> {
        source.name = name.to_string();
        let kind = source.kind;
        let entity_count = source.entity_count;
        let handle = self
            .registry
            .add(name, vec![source], kind)?
            .first()
            .copied()
            .ok_or_else(|| Error::BackendError(format!("no handle returned for '{}'", name)))?;
        sdk_debug!(SOURCE, "Attached {} source '{}' ({} entities)", kind.as_str(), name, entity_count);
        Ok(handle)
    }

    pub fn get(&self, name: &str) -> Option<DataSourceHandle> {
        self.registry.get(name).and_then(|handles| handles.first().copied())
    }

    /// Format of the source registered under `name`
    pub fn kind(&self, name: &str) -> Option<DataSourceKind> {
        self.registry.entry(name).map(|entry| *entry.meta())
    }

    pub fn show(&mut self, name: &str, visible: bool) -> bool {
        self.registry.show(name, visible)
    }

    /// Remove `name`; a load in flight for it becomes stale
    pub fn remove(&mut self, name: &str) -> bool {
        self.pending.remove(name);
        self.registry.remove(name)
    }

    /// Remove every source; every load in flight becomes stale
    pub fn clear(&mut self) {
        self.pending.clear();
        self.registry.clear();
    }

    pub fn ids(&self) -> Vec<String> {
        self.registry.ids()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn collection(&self) -> &Arc<Mutex<dyn DataSourceCollection>> {
        self.registry.collection()
    }
}

#[cfg(test)]
#[path = "data_source_manager_tests.rs"]
mod tests;

/// Imagery provider descriptors and the GeoServer provider builder.

use std::collections::BTreeMap;
use crate::error::{Error, Result};
use crate::graphics::Rectangle;

/// Tile addressing scheme of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TilingScheme {
    #[default]
    WebMercator,
    /// Equirectangular (EPSG:4326)
    Geographic,
}

/// Imagery source the host builds a provider from
#[derive(Debug, Clone, PartialEq)]
pub enum ImageryProviderDesc {
    WebMapService {
        url: String,
        layers: String,
        /// Extra GetMap query parameters
        parameters: BTreeMap<String, String>,
        enable_pick_features: bool,
    },
    WebMapTileService {
        /// Resource URL template
        url: String,
        layer: String,
        style: String,
        format: String,
        tile_matrix_set_id: String,
        tiling_scheme: TilingScheme,
    },
    UrlTemplate {
        url: String,
        tiling_scheme: TilingScheme,
    },
    SingleTile {
        url: String,
        rectangle: Option<Rectangle>,
    },
    OpenStreetMap {
        url: String,
    },
}

/// GeoServer service type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Wms,
    Wmts,
}

impl ServiceType {
    /// Parse a service name, case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedService` for anything but WMS or WMTS.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "WMS" => Ok(ServiceType::Wms),
            "WMTS" => Ok(ServiceType::Wmts),
            other => Err(Error::UnsupportedService(format!(
                "'{}' (only WMS and WMTS are supported)", other
            ))),
        }
    }
}

/// Options for [`geoserver_provider`]
#[derive(Debug, Clone, PartialEq)]
pub struct GeoserverOptions {
    /// Service base url
    pub url: String,
    pub layer: String,
    /// "WMS" (default) or "WMTS"
    pub service_type: String,
    /// Image format (default `image/png`)
    pub format: String,
    /// WMTS style (default empty)
    pub style: String,
    /// WMTS tile matrix set (default `EPSG:4326`)
    pub tile_matrix_set_id: String,
    /// WMS parameters, applied over the defaults
    pub parameters: BTreeMap<String, String>,
}

impl GeoserverOptions {
    /// WMS options for `layer` at `url` with every other field defaulted
    pub fn new(url: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            layer: layer.into(),
            service_type: "WMS".to_string(),
            format: "image/png".to_string(),
            style: String::new(),
            tile_matrix_set_id: "EPSG:4326".to_string(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn wmts(mut self) -> Self {
        self.service_type = "WMTS".to_string();
        self
    }
}

/// Build a WMS or WMTS provider for a GeoServer layer
///
/// WMS requests transparent tiles in `format` (caller parameters win) with
/// feature picking off. WMTS uses a REST resource template and geographic
/// tiling when the matrix set is EPSG:4326.
///
/// # Errors
///
/// Returns `Error::UnsupportedService` for other service types.
pub fn geoserver_provider(options: &GeoserverOptions) -> Result<ImageryProviderDesc> {
    match ServiceType::parse(&options.service_type)? {
        ServiceType::Wms => {
            let mut parameters = BTreeMap::new();
            parameters.insert("transparent".to_string(), "true".to_string());
            parameters.insert("format".to_string(), options.format.clone());
            parameters.extend(options.parameters.clone());
            Ok(ImageryProviderDesc::WebMapService {
                url: options.url.clone(),
                layers: options.layer.clone(),
                parameters,
                enable_pick_features: false,
            })
        }
        ServiceType::Wmts => {
            let url = format!(
                "{}/{}/{{style}}/{{TileMatrixSet}}/{{TileMatrixSet}}:{{TileMatrix}}/{{TileRow}}/{{TileCol}}?format={}",
                options.url, options.layer, options.format
            );
            let tiling_scheme = if options.tile_matrix_set_id == "EPSG:4326" {
                TilingScheme::Geographic
            } else {
                TilingScheme::WebMercator
            };
            Ok(ImageryProviderDesc::WebMapTileService {
                url,
                layer: options.layer.clone(),
                style: options.style.clone(),
                format: options.format.clone(),
                tile_matrix_set_id: options.tile_matrix_set_id.clone(),
                tiling_scheme,
            })
        }
    }
}

#[cfg(test)]
#[path = "imagery_provider_tests.rs"]
mod tests;

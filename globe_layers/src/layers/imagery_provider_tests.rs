use super::*;

#[test]
fn test_service_type_parse() {
    assert_eq!(ServiceType::parse("wms").unwrap(), ServiceType::Wms);
    assert_eq!(ServiceType::parse("WMTS").unwrap(), ServiceType::Wmts);
    assert!(matches!(ServiceType::parse("WFS"), Err(Error::UnsupportedService(_))));
}

#[test]
fn test_geoserver_wms_defaults() {
    let options = GeoserverOptions::new("http://localhost:8080/geoserver/wms", "topp:states");
    let provider = geoserver_provider(&options).unwrap();

    match provider {
        ImageryProviderDesc::WebMapService { url, layers, parameters, enable_pick_features } => {
            assert_eq!(url, "http://localhost:8080/geoserver/wms");
            assert_eq!(layers, "topp:states");
            assert_eq!(parameters.get("transparent").map(String::as_str), Some("true"));
            assert_eq!(parameters.get("format").map(String::as_str), Some("image/png"));
            assert!(!enable_pick_features);
        }
        other => panic!("expected WMS provider, got {:?}", other),
    }
}

#[test]
fn test_geoserver_wms_caller_parameters_override() {
    let mut options = GeoserverOptions::new("http://gs/wms", "l");
    options.parameters.insert("transparent".to_string(), "false".to_string());
    options.parameters.insert("cql_filter".to_string(), "a=1".to_string());

    let ImageryProviderDesc::WebMapService { parameters, .. } = geoserver_provider(&options).unwrap() else {
        panic!("expected WMS provider");
    };
    assert_eq!(parameters["transparent"], "false");
    assert_eq!(parameters["cql_filter"], "a=1");
}

#[test]
fn test_geoserver_wmts_template_and_tiling() {
    let options = GeoserverOptions::new("http://gs/gwc/rest/wmts", "ne:countries").wmts();
    let provider = geoserver_provider(&options).unwrap();

    let ImageryProviderDesc::WebMapTileService { url, tile_matrix_set_id, tiling_scheme, .. } = provider else {
        panic!("expected WMTS provider");
    };
    assert_eq!(
        url,
        "http://gs/gwc/rest/wmts/ne:countries/{style}/{TileMatrixSet}/{TileMatrixSet}:{TileMatrix}/{TileRow}/{TileCol}?format=image/png"
    );
    assert_eq!(tile_matrix_set_id, "EPSG:4326");
    assert_eq!(tiling_scheme, TilingScheme::Geographic);
}

#[test]
fn test_geoserver_wmts_other_matrix_set_keeps_default_tiling() {
    let mut options = GeoserverOptions::new("http://gs/wmts", "l").wmts();
    options.tile_matrix_set_id = "EPSG:900913".to_string();

    let ImageryProviderDesc::WebMapTileService { tiling_scheme, .. } = geoserver_provider(&options).unwrap() else {
        panic!("expected WMTS provider");
    };
    assert_eq!(tiling_scheme, TilingScheme::WebMercator);
}

#[test]
fn test_geoserver_unsupported_service() {
    let mut options = GeoserverOptions::new("http://gs", "l");
    options.service_type = "TMS".to_string();
    assert!(matches!(geoserver_provider(&options), Err(Error::UnsupportedService(_))));
}

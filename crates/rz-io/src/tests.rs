use std::collections::HashMap;

use rz_core::config::PoiTypeTable;
use rz_grid::GridBuilder;

use crate::cache::{load_cache, save_cache};
use crate::osm::parse_osm;

fn poi_types() -> PoiTypeTable {
    let mut amenity = HashMap::new();
    amenity.insert("hospital".to_string(), 1.0);
    let mut outer = HashMap::new();
    outer.insert("amenity".to_string(), amenity);
    PoiTypeTable(outer)
}

#[test]
fn osm_parses_poi_nodes_and_road_ways() {
    let xml = r#"<?xml version="1.0"?>
<osm version="0.6">
  <node id="1" lat="30.60" lon="-88.00">
    <tag k="amenity" v="hospital"/>
  </node>
  <node id="2" lat="30.61" lon="-88.01"/>
  <node id="3" lat="30.62" lon="-88.02"/>
  <way id="10">
    <nd ref="2"/>
    <nd ref="3"/>
    <tag k="highway" v="residential"/>
  </way>
</osm>"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.osm");
    std::fs::write(&path, xml).unwrap();

    let data = parse_osm(&path, &poi_types()).unwrap();
    assert_eq!(data.pois.len(), 1);
    assert!((data.pois[0].weight - 1.0).abs() < 1e-9);
    assert_eq!(data.roads.len(), 1);
    assert!(data.rivers.is_empty());
}

#[test]
fn osm_parses_river_ways() {
    let xml = r#"<?xml version="1.0"?>
<osm version="0.6">
  <node id="1" lat="30.60" lon="-88.00"/>
  <node id="2" lat="30.61" lon="-88.01"/>
  <way id="20">
    <nd ref="1"/>
    <nd ref="2"/>
    <tag k="waterway" v="river"/>
  </way>
</osm>"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.osm");
    std::fs::write(&path, xml).unwrap();

    let data = parse_osm(&path, &poi_types()).unwrap();
    assert!(data.roads.is_empty());
    assert_eq!(data.rivers.len(), 1);
}

#[test]
fn aoi_parses_polygon_outer_ring_only() {
    let geojson = r#"{
      "type": "FeatureCollection",
      "features": [{
        "type": "Feature",
        "properties": {},
        "geometry": {
          "type": "Polygon",
          "coordinates": [
            [[-88.0, 30.6], [-88.0, 30.7], [-87.9, 30.7], [-87.9, 30.6], [-88.0, 30.6]],
            [[-87.98, 30.62], [-87.98, 30.64], [-87.96, 30.64], [-87.96, 30.62], [-87.98, 30.62]]
          ]
        }
      }]
    }"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aoi.geojson");
    std::fs::write(&path, geojson).unwrap();

    let rings = crate::aoi::parse_aoi(&path).unwrap();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].0.len(), 5);
}

#[test]
fn cache_round_trip_reconstructs_the_grid() {
    let mut grid = GridBuilder::new(0.0, 0.0, 0.01, 0.01, 100.0, 3).build();
    grid.rebuild_zones_inside();
    for i in 0..grid.cell_count() {
        grid.risk[i] = i as f64 * 0.01;
        grid.rl[i] = ((i % 3) + 1) as u32;
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    save_cache(&path, &grid).unwrap();

    let mut loaded = GridBuilder::new(0.0, 0.0, 0.01, 0.01, 100.0, 3).build();
    load_cache(&path, &mut loaded).unwrap();

    assert_eq!(loaded.rl, grid.rl);
    assert_eq!(loaded.risk, grid.risk);
    assert_eq!(loaded.zones_inside, grid.zones_inside);
}

#[test]
fn cache_load_rejects_dimension_mismatch() {
    let mut grid = GridBuilder::new(0.0, 0.0, 0.01, 0.01, 100.0, 3).build();
    grid.rebuild_zones_inside();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    save_cache(&path, &grid).unwrap();

    let mut other = GridBuilder::new(0.0, 0.0, 0.02, 0.02, 100.0, 3).build();
    let err = load_cache(&path, &mut other).unwrap_err();
    assert!(matches!(err, crate::error::IoError::CacheCorrupted(_)));
}

#[test]
fn cache_load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, "{ not valid json").unwrap();

    let mut grid = GridBuilder::new(0.0, 0.0, 0.01, 0.01, 100.0, 3).build();
    let err = load_cache(&path, &mut grid).unwrap_err();
    assert!(matches!(err, crate::error::IoError::CacheCorrupted(_)));
}

#[test]
fn job_descriptor_parses_minimal_json() {
    let json = r#"{
      "left": -88.0, "bottom": 30.6, "right": -87.9, "top": 30.7,
      "zone_size": 100, "M": 4,
      "edus": {"loose": 2, "tight": 1},
      "edu_alg": "enhanced",
      "connectivity_threshold": 0.5,
      "cache_zones": false
    }"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.json");
    std::fs::write(&path, json).unwrap();

    let job = crate::job::load_job_descriptor(&path).unwrap();
    assert_eq!(job.m, 4);
    assert_eq!(job.edus.total(), 3);
    assert_eq!(job.edu_alg, rz_core::EduAlg::Balanced);
}

#[test]
fn job_descriptor_rejects_missing_zone_size() {
    let json = r#"{"left": -88.0, "bottom": 30.6, "right": -87.9, "top": 30.7, "M": 4}"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.json");
    std::fs::write(&path, json).unwrap();

    let err = crate::job::load_job_descriptor(&path).unwrap_err();
    assert!(matches!(err, rz_core::RzError::Config(_)));
}

#[test]
fn output_writers_produce_header_and_one_row_per_inside_cell() {
    let mut grid = GridBuilder::new(0.0, 0.0, 0.01, 0.01, 100.0, 2).build();
    grid.rebuild_zones_inside();
    let inside_count = grid.zones_inside.len();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.csv");
    crate::output::write_map(&path, &grid).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), inside_count + 1);
    assert!(lines[0].starts_with("id,lat,lon,rl"));
}

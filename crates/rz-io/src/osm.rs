//! OSM XML ingest (§6): parses a pruned `.osm` file into plain data —
//! `Poi`, `RoadSegment`, `RiverSegment` — and hands them to the core. The
//! core itself never touches XML.
//!
//! A node/way/relation contributes a PoI when one of its tags matches an
//! entry in `pois_types`; a way or relation tagged with a drivable
//! `highway` value contributes road segments between consecutive member
//! nodes; `water=river|lake` or `waterway=river` contributes river
//! segments the same way.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use roxmltree::Document;

use rz_core::config::PoiTypeTable;
use rz_core::GeoPoint;
use rz_grid::Poi;
use rz_raster::{RiverSegment, RoadSegment};

use crate::error::{IoError, IoResult};

const ROAD_HIGHWAYS: &[&str] = &[
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "unclassified",
    "residential",
];

/// Everything the OSM file contributes to a classification run.
#[derive(Default, Debug)]
pub struct OsmData {
    pub pois: Vec<Poi>,
    pub roads: Vec<RoadSegment>,
    pub rivers: Vec<RiverSegment>,
}

struct RawWay {
    refs: Vec<i64>,
    tags: Vec<(String, String)>,
}

struct RawRelation {
    members: Vec<(String, i64)>,
    tags: Vec<(String, String)>,
}

fn is_road_way(tags: &[(String, String)]) -> bool {
    tags.iter()
        .any(|(k, v)| k == "highway" && ROAD_HIGHWAYS.contains(&v.as_str()))
}

fn is_river_way(tags: &[(String, String)]) -> bool {
    tags.iter().any(|(k, v)| {
        (k == "water" && (v == "river" || v == "lake")) || (k == "waterway" && v == "river")
    })
}

fn poi_weight(tags: &[(String, String)], pois_types: &PoiTypeTable) -> Option<f64> {
    tags.iter().find_map(|(k, v)| pois_types.weight_for(k, v))
}

fn collect_tags(elem: roxmltree::Node) -> Vec<(String, String)> {
    elem.children()
        .filter(|c| c.has_tag_name("tag"))
        .filter_map(|c| Some((c.attribute("k")?.to_string(), c.attribute("v")?.to_string())))
        .collect()
}

/// Parse an OSM XML file, using `pois_types` to decide which tags are PoIs.
pub fn parse_osm(path: &Path, pois_types: &PoiTypeTable) -> IoResult<OsmData> {
    let text = fs::read_to_string(path)?;
    let doc = Document::parse(&text).map_err(|e| IoError::Osm(e.to_string()))?;

    let mut nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut node_tags: HashMap<i64, Vec<(String, String)>> = HashMap::new();
    let mut ways: HashMap<i64, RawWay> = HashMap::new();
    let mut relations: HashMap<i64, RawRelation> = HashMap::new();

    for elem in doc.root_element().children() {
        if elem.has_tag_name("node") {
            let id: i64 = elem
                .attribute("id")
                .ok_or_else(|| IoError::Osm("node missing id".into()))?
                .parse()
                .map_err(|_| IoError::Osm("node id not an integer".into()))?;
            let lat: f64 = elem
                .attribute("lat")
                .ok_or_else(|| IoError::Osm("node missing lat".into()))?
                .parse()
                .map_err(|_| IoError::Osm("node lat not numeric".into()))?;
            let lon: f64 = elem
                .attribute("lon")
                .ok_or_else(|| IoError::Osm("node missing lon".into()))?
                .parse()
                .map_err(|_| IoError::Osm("node lon not numeric".into()))?;
            nodes.insert(id, GeoPoint::new(lat, lon));
            let tags = collect_tags(elem);
            if !tags.is_empty() {
                node_tags.insert(id, tags);
            }
        } else if elem.has_tag_name("way") {
            let id: i64 = elem
                .attribute("id")
                .ok_or_else(|| IoError::Osm("way missing id".into()))?
                .parse()
                .map_err(|_| IoError::Osm("way id not an integer".into()))?;
            let refs: Vec<i64> = elem
                .children()
                .filter(|c| c.has_tag_name("nd"))
                .filter_map(|c| c.attribute("ref")?.parse().ok())
                .collect();
            let tags = collect_tags(elem);
            ways.insert(id, RawWay { refs, tags });
        } else if elem.has_tag_name("relation") {
            let id: i64 = elem
                .attribute("id")
                .ok_or_else(|| IoError::Osm("relation missing id".into()))?
                .parse()
                .map_err(|_| IoError::Osm("relation id not an integer".into()))?;
            let members: Vec<(String, i64)> = elem
                .children()
                .filter(|c| c.has_tag_name("member"))
                .filter_map(|c| {
                    let ty = c.attribute("type")?.to_string();
                    let r: i64 = c.attribute("ref")?.parse().ok()?;
                    Some((ty, r))
                })
                .collect();
            let tags = collect_tags(elem);
            relations.insert(id, RawRelation { members, tags });
        }
    }

    let mut data = OsmData::default();

    // Node PoIs.
    for (id, tags) in &node_tags {
        if let Some(weight) = poi_weight(tags, pois_types) {
            if let Some(&point) = nodes.get(id) {
                data.pois.push(Poi::new(point.lat, point.lon, weight));
            }
        }
    }

    // Way PoIs + road/river segments.
    for way in ways.values() {
        if let Some(weight) = poi_weight(&way.tags, pois_types) {
            if let Some(&first) = way.refs.first().and_then(|r| nodes.get(r)) {
                data.pois.push(Poi::new(first.lat, first.lon, weight));
            }
        }

        let road = is_road_way(&way.tags);
        let river = is_river_way(&way.tags);
        if !road && !river {
            continue;
        }
        for pair in way.refs.windows(2) {
            let (Some(&a), Some(&b)) = (nodes.get(&pair[0]), nodes.get(&pair[1])) else {
                continue;
            };
            if road {
                data.roads.push(RoadSegment::new(a, b));
            }
            if river {
                data.rivers.push(RiverSegment::new(a, b));
            }
        }
    }

    // Relation PoIs + road/river segments, walked per member way.
    for relation in relations.values() {
        if let Some(weight) = poi_weight(&relation.tags, pois_types) {
            let location = relation.members.iter().find_map(|(ty, r)| match ty.as_str() {
                "node" => nodes.get(r).copied(),
                "way" => ways.get(r).and_then(|w| w.refs.first()).and_then(|n| nodes.get(n)).copied(),
                _ => None,
            });
            if let Some(point) = location {
                data.pois.push(Poi::new(point.lat, point.lon, weight));
            }
        }

        let road = is_road_way(&relation.tags);
        let river = is_river_way(&relation.tags);
        if !road && !river {
            continue;
        }
        for (ty, r) in &relation.members {
            if ty != "way" {
                continue;
            }
            let Some(way) = ways.get(r) else { continue };
            for pair in way.refs.windows(2) {
                let (Some(&a), Some(&b)) = (nodes.get(&pair[0]), nodes.get(&pair[1])) else {
                    continue;
                };
                if road {
                    data.roads.push(RoadSegment::new(a, b));
                }
                if river {
                    data.rivers.push(RiverSegment::new(a, b));
                }
            }
        }
    }

    log::info!(
        "parsed OSM input: {} PoIs, {} road segments, {} river segments",
        data.pois.len(),
        data.roads.len(),
        data.rivers.len()
    );
    Ok(data)
}

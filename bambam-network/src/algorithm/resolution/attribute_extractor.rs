use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::speed_ops::{MaxSpeed, SpeedParser};
use crate::model::{
    osm::OsmWayId,
    profile::{TypeProfile, WayAttributes},
    tags::{tag_ops, TagReport},
};

/// length bounds for string attributes carried onto edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLimits {
    pub max_attribute_length: usize,
    pub max_name_length: usize,
}

impl Default for AttributeLimits {
    fn default() -> Self {
        Self {
            max_attribute_length: 40,
            max_name_length: 255,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeExtraction {
    pub attributes: WayAttributes,
    pub report: TagReport,
}

/// reads lanes, maxspeed and the descriptive string attributes of a way.
/// missing or unusable lanes and maxspeed values fall back to the type profile.
pub fn extract(
    way_id: OsmWayId,
    profile: &TypeProfile,
    tags: &HashMap<String, String>,
    speed_parser: &SpeedParser,
    limits: &AttributeLimits,
) -> AttributeExtraction {
    let tag = |k: &str| tags.get(k).map(|v| v.trim());
    let mut report = TagReport::default();

    let lanes = match tag("lanes") {
        Some(v) => {
            report.consume("lanes");
            parse_lanes(v).unwrap_or_else(|e| {
                log::debug!("way {way_id}: {e}");
                report.reject("lanes", v);
                profile.lanes
            })
        }
        None => profile.lanes,
    };

    let max_speed = match tag("maxspeed") {
        Some(v) => {
            report.consume("maxspeed");
            match speed_parser.parse(v) {
                Ok(MaxSpeed::Posted(speed)) => speed,
                Ok(MaxSpeed::TypeDefault) => profile.max_speed(),
                Err(e) => {
                    log::debug!("way {way_id}: {e}");
                    report.reject("maxspeed", v);
                    profile.max_speed()
                }
            }
        }
        None => profile.max_speed(),
    };

    let mut attribute = |key: &str| {
        tag(key).map(|v| {
            report.consume(key);
            bounded(way_id, key, v, limits.max_attribute_length)
        })
    };
    let sidewalk = attribute("sidewalk");
    let cycleway = attribute("cycleway");
    let surface = attribute("surface");
    let lit = attribute("lit");
    let parking_left = attribute("parking:lane:left").or_else(|| attribute("parking:left"));
    let parking_right = attribute("parking:lane:right").or_else(|| attribute("parking:right"));
    let parking_both = attribute("parking:lane:both").or_else(|| attribute("parking:both"));

    let name = tag("name").map(|v| {
        report.consume("name");
        bounded(way_id, "name", &tag_ops::strip_quotes(v), limits.max_name_length)
    });

    AttributeExtraction {
        attributes: WayAttributes {
            lanes,
            max_speed,
            sidewalk,
            cycleway,
            surface,
            lit,
            name,
            parking_left,
            parking_right,
            parking_both,
        },
        report,
    }
}

/// a lane count, or the smallest of several `;`-separated counts
pub fn parse_lanes(value: &str) -> Result<u32, String> {
    let counts = value
        .split(';')
        .map(|entry| {
            entry
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("lanes value '{value}' not a valid count: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    match counts.into_iter().min() {
        Some(0) => Err(format!("lanes value '{value}' contains a zero count")),
        Some(n) => Ok(n),
        None => Err(format!("lanes value '{value}' is empty")),
    }
}

fn bounded(way_id: OsmWayId, key: &str, value: &str, max_chars: usize) -> String {
    let (out, truncated) = tag_ops::truncate(value, max_chars);
    if truncated {
        log::warn!("way {way_id}: value of '{key}' truncated to {max_chars} characters");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mode::ModeSet;
    use uom::si::velocity;

    fn tags(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn run(entries: &[(&str, &str)]) -> AttributeExtraction {
        let profile = TypeProfile::new("highway_residential", ModeSet::ALL, 30.0, 1, false);
        let parser = SpeedParser::new().expect("test invariant failed: speed pattern");
        extract(
            OsmWayId(1),
            &profile,
            &tags(entries),
            &parser,
            &AttributeLimits::default(),
        )
    }

    #[test]
    fn test_lanes_minimum() {
        assert_eq!(parse_lanes("2;3;1"), Ok(1));
        assert_eq!(parse_lanes("4"), Ok(4));
        assert!(parse_lanes("2;x").is_err());
        assert!(parse_lanes("0").is_err());
    }

    #[test]
    fn test_defaults_without_tags() {
        let result = run(&[]);
        assert_eq!(result.attributes.lanes, 1);
        let speed = result.attributes.max_speed.get::<velocity::kilometer_per_hour>();
        assert!((speed - 30.0).abs() < 0.001);
        assert!(result.report.consumed.is_empty());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let result = run(&[("lanes", "two"), ("maxspeed", "fast")]);
        assert_eq!(result.attributes.lanes, 1);
        let speed = result.attributes.max_speed.get::<velocity::kilometer_per_hour>();
        assert!((speed - 30.0).abs() < 0.001);
        assert_eq!(result.report.erroneous.len(), 2);
    }

    #[test]
    fn test_maxspeed_signals_uses_default() {
        let result = run(&[("maxspeed", "signals")]);
        let speed = result.attributes.max_speed.get::<velocity::kilometer_per_hour>();
        assert!((speed - 30.0).abs() < 0.001);
        assert!(!result.report.has_errors());
    }

    #[test]
    fn test_maxspeed_60() {
        let result = run(&[("maxspeed", "60 km/h")]);
        let speed = result.attributes.max_speed.get::<velocity::meter_per_second>();
        assert!((speed - 16.666_666).abs() < 0.001, "{speed}");
    }

    #[test]
    fn test_strings_bounded() {
        let long_surface = "x".repeat(60);
        let result = run(&[
            ("surface", long_surface.as_str()),
            ("name", "\"Main\" Street"),
            ("parking:lane:left", "parallel"),
            ("parking:right", "no"),
        ]);
        assert_eq!(result.attributes.surface.map(|s| s.len()), Some(40));
        assert_eq!(result.attributes.name.as_deref(), Some("Main Street"));
        assert_eq!(result.attributes.parking_left.as_deref(), Some("parallel"));
        assert_eq!(result.attributes.parking_right.as_deref(), Some("no"));
        assert_eq!(result.attributes.parking_both, None);
    }
}

use std::collections::HashMap;

use super::{TypeProfile, TypeProfileConfig};
use crate::model::{mode::ModeSet, osm::RawWay, NetworkError};

const MOTOR: ModeSet = ModeSet::MOTORISED
    .union(ModeSet::PASSENGER)
    .union(ModeSet::DELIVERY)
    .union(ModeSet::BUS)
    .union(ModeSet::PSV);
const ROAD: ModeSet = MOTOR
    .union(ModeSet::MOPED)
    .union(ModeSet::FOOT)
    .union(ModeSet::BICYCLE)
    .union(ModeSet::HORSE)
    .union(ModeSet::SOFT);
const PATH: ModeSet = ModeSet::FOOT
    .union(ModeSet::BICYCLE)
    .union(ModeSet::HORSE)
    .union(ModeSet::SOFT);

/// (key, modes, max speed kph, lanes, oneway)
const DEFAULT_PROFILES: [(&str, ModeSet, f64, u32, bool); 34] = [
    ("highway_motorway", MOTOR, 130.0, 2, true),
    ("highway_motorway_link", MOTOR, 80.0, 1, true),
    ("highway_trunk", ROAD, 100.0, 2, false),
    ("highway_trunk_link", ROAD, 60.0, 1, false),
    ("highway_primary", ROAD, 70.0, 2, false),
    ("highway_primary_link", ROAD, 50.0, 1, false),
    ("highway_secondary", ROAD, 60.0, 2, false),
    ("highway_secondary_link", ROAD, 50.0, 1, false),
    ("highway_tertiary", ROAD, 50.0, 1, false),
    ("highway_tertiary_link", ROAD, 50.0, 1, false),
    ("highway_unclassified", ROAD, 50.0, 1, false),
    ("highway_road", ROAD, 50.0, 1, false),
    ("highway_residential", ROAD, 30.0, 1, false),
    ("highway_living_street", ROAD, 10.0, 1, false),
    ("highway_service", ROAD, 20.0, 1, false),
    ("highway_track", PATH.union(ModeSet::DELIVERY), 20.0, 1, false),
    ("highway_pedestrian", ModeSet::FOOT.union(ModeSet::SOFT), 5.0, 1, false),
    ("highway_footway", ModeSet::FOOT.union(ModeSet::SOFT), 5.0, 1, false),
    ("highway_steps", ModeSet::FOOT, 3.0, 1, false),
    ("highway_corridor", ModeSet::FOOT, 5.0, 1, false),
    ("highway_path", PATH, 10.0, 1, false),
    ("highway_cycleway", ModeSet::BICYCLE.union(ModeSet::SOFT), 20.0, 1, false),
    ("highway_bridleway", ModeSet::HORSE, 10.0, 1, false),
    ("highway_busway", ModeSet::BUS.union(ModeSet::PSV), 50.0, 1, false),
    ("highway_bus_guideway", ModeSet::BUS, 50.0, 1, false),
    ("highway_platform", ModeSet::FOOT, 5.0, 1, false),
    ("highway_construction", ModeSet::CLOSED, 5.0, 1, false),
    ("railway_rail", ModeSet::RAIL, 120.0, 1, true),
    ("railway_light_rail", ModeSet::RAIL, 80.0, 1, true),
    ("railway_subway", ModeSet::RAIL, 80.0, 1, true),
    ("railway_narrow_gauge", ModeSet::RAIL, 60.0, 1, true),
    ("railway_monorail", ModeSet::RAIL, 80.0, 1, true),
    ("railway_funicular", ModeSet::RAIL, 20.0, 1, false),
    ("railway_tram", ModeSet::TRAM, 50.0, 1, true),
];

/// lookup from `<category>_<subtype>` to its [`TypeProfile`]. ways whose key is
/// not present are not part of the network.
#[derive(Debug, Clone)]
pub struct TypeProfileTable {
    profiles: HashMap<String, TypeProfile>,
}

impl Default for TypeProfileTable {
    fn default() -> Self {
        let profiles = DEFAULT_PROFILES
            .iter()
            .map(|(key, modes, speed, lanes, oneway)| {
                let profile = TypeProfile::new(key, *modes, *speed, *lanes, *oneway);
                (String::from(*key), profile)
            })
            .collect();
        TypeProfileTable { profiles }
    }
}

impl TypeProfileTable {
    pub fn new(profiles: Vec<TypeProfile>) -> TypeProfileTable {
        let profiles = profiles.into_iter().map(|p| (p.key.clone(), p)).collect();
        TypeProfileTable { profiles }
    }

    /// the default table with entries replaced or added from configuration
    pub fn with_overrides(
        overrides: &HashMap<String, TypeProfileConfig>,
    ) -> Result<TypeProfileTable, NetworkError> {
        let mut table = TypeProfileTable::default();
        for (key, conf) in overrides.iter() {
            if !key.starts_with("highway_") && !key.starts_with("railway_") {
                return Err(NetworkError::ConfigurationError(format!(
                    "type profile key '{key}' must start with 'highway_' or 'railway_'"
                )));
            }
            let profile = conf.to_profile(key).map_err(NetworkError::ConfigurationError)?;
            if table.profiles.insert(key.clone(), profile).is_some() {
                log::info!("type profile '{key}' overridden by configuration");
            }
        }
        Ok(table)
    }

    pub fn get(&self, key: &str) -> Option<&TypeProfile> {
        self.profiles.get(key)
    }

    /// every known type of a way along with its category, highway first.
    pub fn matches<'s, 'w>(
        &'s self,
        way: &'w RawWay,
    ) -> impl Iterator<Item = (&'static str, &'s TypeProfile)> + use<'s, 'w> {
        way.type_keys()
            .filter_map(move |(category, key)| self.profiles.get(&key).map(|p| (category, p)))
    }

    /// the profile for a way: the first category tag that names a known type
    pub fn lookup(&self, way: &RawWay) -> Option<&TypeProfile> {
        self.matches(way).next().map(|(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

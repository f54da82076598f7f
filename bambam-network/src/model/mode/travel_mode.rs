use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::ModeSet;

/// a single travel mode, the named counterpart of one [`ModeSet`] bit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Foot,
    Bicycle,
    Moped,
    Motorised,
    Passenger,
    Delivery,
    Bus,
    Psv,
    Rail,
    Tram,
    Horse,
    Soft,
}

impl TravelMode {
    pub fn flag(&self) -> ModeSet {
        match self {
            TravelMode::Foot => ModeSet::FOOT,
            TravelMode::Bicycle => ModeSet::BICYCLE,
            TravelMode::Moped => ModeSet::MOPED,
            TravelMode::Motorised => ModeSet::MOTORISED,
            TravelMode::Passenger => ModeSet::PASSENGER,
            TravelMode::Delivery => ModeSet::DELIVERY,
            TravelMode::Bus => ModeSet::BUS,
            TravelMode::Psv => ModeSet::PSV,
            TravelMode::Rail => ModeSet::RAIL,
            TravelMode::Tram => ModeSet::TRAM,
            TravelMode::Horse => ModeSet::HORSE,
            TravelMode::Soft => ModeSet::SOFT,
        }
    }

    /// the OSM key used for per-mode access, oneway and direction tags.
    /// soft mobility has no key of its own.
    pub fn osm_key(&self) -> Option<&'static str> {
        match self {
            TravelMode::Foot => Some("foot"),
            TravelMode::Bicycle => Some("bicycle"),
            TravelMode::Moped => Some("moped"),
            TravelMode::Motorised => Some("motor_vehicle"),
            TravelMode::Passenger => Some("motorcar"),
            TravelMode::Delivery => Some("hgv"),
            TravelMode::Bus => Some("bus"),
            TravelMode::Psv => Some("psv"),
            TravelMode::Rail => Some("train"),
            TravelMode::Tram => Some("tram"),
            TravelMode::Horse => Some("horse"),
            TravelMode::Soft => None,
        }
    }

    /// all modes which carry an OSM key, paired with that key
    pub fn keyed() -> impl Iterator<Item = (TravelMode, &'static str)> {
        use strum::IntoEnumIterator;
        TravelMode::iter().filter_map(|m| m.osm_key().map(|k| (m, k)))
    }

    pub fn set_of(modes: &[TravelMode]) -> ModeSet {
        modes
            .iter()
            .fold(ModeSet::empty(), |acc, m| acc.union(m.flag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_flags_cover_all() {
        let all = TravelMode::set_of(&TravelMode::iter().collect::<Vec<_>>());
        assert_eq!(all, ModeSet::ALL);
    }

    #[test]
    fn test_keyed_modes() {
        let keys = TravelMode::keyed().map(|(_, k)| k).collect::<Vec<_>>();
        assert_eq!(keys.len(), 11);
        assert!(keys.contains(&"motor_vehicle"));
        assert_eq!(TravelMode::from_str("psv").ok(), Some(TravelMode::Psv));
    }
}

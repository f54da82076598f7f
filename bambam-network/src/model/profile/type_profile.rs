use serde::{Deserialize, Serialize};
use uom::si::f64::Velocity;
use uom::si::velocity;

use crate::model::mode::{ModeSet, TravelMode};

/// defaults applied to every way of a given `<category>_<subtype>`, before any
/// tag on the way itself is taken into account.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeProfile {
    pub key: String,
    pub modes: ModeSet,
    pub max_speed_kph: f64,
    pub lanes: u32,
    pub oneway: bool,
}

impl TypeProfile {
    pub fn new(key: &str, modes: ModeSet, max_speed_kph: f64, lanes: u32, oneway: bool) -> Self {
        TypeProfile {
            key: String::from(key),
            modes,
            max_speed_kph,
            lanes,
            oneway,
        }
    }

    pub fn max_speed(&self) -> Velocity {
        Velocity::new::<velocity::kilometer_per_hour>(self.max_speed_kph)
    }
}

/// user-facing form of a [`TypeProfile`], found in the `type_profiles` section
/// of the import configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeProfileConfig {
    pub modes: Vec<TravelMode>,
    #[serde(default)]
    pub closed: bool,
    pub max_speed_kph: f64,
    pub lanes: u32,
    #[serde(default)]
    pub oneway: bool,
}

impl TypeProfileConfig {
    pub fn to_profile(&self, key: &str) -> Result<TypeProfile, String> {
        if !(self.max_speed_kph.is_finite() && self.max_speed_kph > 0.0) {
            return Err(format!(
                "type profile '{key}' has invalid max_speed_kph {}",
                self.max_speed_kph
            ));
        }
        if self.lanes == 0 {
            return Err(format!("type profile '{key}' must have at least one lane"));
        }
        let mut modes = TravelMode::set_of(&self.modes);
        if self.closed {
            modes.insert(ModeSet::CLOSED);
        }
        Ok(TypeProfile::new(
            key,
            modes,
            self.max_speed_kph,
            self.lanes,
            self.oneway,
        ))
    }
}

use regex::Regex;
use uom::si::f64::Velocity;
use uom::si::velocity;

/// posted speed for `maxspeed=none` / `maxspeed=no`, in kph
pub const UNLIMITED_SPEED_KPH: f64 = 300.0;
/// posted speed for `maxspeed=walk`, taken as-is in meters per second
pub const WALK_SPEED_MPS: f64 = 5.0;

/// numeric speed with an optional unit suffix, such as `50`, `50 km/h` or `30mph`
const SPEED_PATTERN: &str = r"^\s*(\d+(?:\.\d+)?)\s*(km/h|kmh|kph|mph)?\s*$";

/// outcome of reading a single maxspeed entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxSpeed {
    Posted(Velocity),
    /// the way's type default applies (`maxspeed=signals`)
    TypeDefault,
}

/// parses OSM `maxspeed` values.
/// - bare numbers and `km/h`, `kmh` or `kph` suffixes are kilometers per hour
/// - `mph` suffixes are miles per hour
/// - keywords: `signals`, `none`, `no`, `walk`, `DE:rural`, `DE:urban`, `DE:living_street`
/// - `;`-separated lists resolve to the slowest entry
#[derive(Debug, Clone)]
pub struct SpeedParser {
    pattern: Regex,
}

impl SpeedParser {
    pub fn new() -> Result<SpeedParser, String> {
        let pattern = Regex::new(SPEED_PATTERN)
            .map_err(|e| format!("failure building maxspeed pattern: {e}"))?;
        Ok(SpeedParser { pattern })
    }

    pub fn parse(&self, value: &str) -> Result<MaxSpeed, String> {
        if value.contains(';') {
            let mut slowest: Option<MaxSpeed> = None;
            for entry in value.split(';') {
                let speed = self.parse_entry(entry)?;
                slowest = match (slowest, speed) {
                    (Some(MaxSpeed::Posted(a)), MaxSpeed::Posted(b)) if a <= b => slowest,
                    (Some(MaxSpeed::Posted(_)), MaxSpeed::TypeDefault) => slowest,
                    _ => Some(speed),
                };
            }
            slowest.ok_or_else(|| format!("maxspeed value '{value}' has no entries"))
        } else {
            self.parse_entry(value)
        }
    }

    fn parse_entry(&self, entry: &str) -> Result<MaxSpeed, String> {
        let entry = entry.trim();
        match entry {
            "signals" => return Ok(MaxSpeed::TypeDefault),
            "none" | "no" => return Ok(kph(UNLIMITED_SPEED_KPH)),
            "walk" => {
                return Ok(MaxSpeed::Posted(Velocity::new::<velocity::meter_per_second>(
                    WALK_SPEED_MPS,
                )))
            }
            "DE:rural" => return Ok(kph(100.0)),
            "DE:urban" => return Ok(kph(50.0)),
            "DE:living_street" => return Ok(kph(10.0)),
            _ => {}
        }
        let captures = self
            .pattern
            .captures(entry)
            .ok_or_else(|| format!("maxspeed value '{entry}' not recognized"))?;
        let speed = captures
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .parse::<f64>()
            .map_err(|e| format!("speed value {entry} not a valid number: {e}"))?;
        if speed == 0.0 || speed.is_nan() {
            return Err(format!("speed value {entry} is not a usable speed"));
        }
        match captures.get(2).map(|m| m.as_str()) {
            Some("mph") => Ok(MaxSpeed::Posted(Velocity::new::<velocity::mile_per_hour>(
                speed,
            ))),
            _ => Ok(kph(speed)),
        }
    }
}

fn kph(speed: f64) -> MaxSpeed {
    MaxSpeed::Posted(Velocity::new::<velocity::kilometer_per_hour>(speed))
}

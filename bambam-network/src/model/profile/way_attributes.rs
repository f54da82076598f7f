use uom::si::f64::Velocity;

/// scalar and descriptive attributes of a way, shared by all of its edges
#[derive(Debug, Clone, PartialEq)]
pub struct WayAttributes {
    pub lanes: u32,
    pub max_speed: Velocity,
    pub sidewalk: Option<String>,
    pub cycleway: Option<String>,
    pub surface: Option<String>,
    pub lit: Option<String>,
    pub name: Option<String>,
    pub parking_left: Option<String>,
    pub parking_right: Option<String>,
    pub parking_both: Option<String>,
}

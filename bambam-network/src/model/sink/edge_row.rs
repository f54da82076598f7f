use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uom::si::velocity;
use wkt::ToWkt;

use crate::model::network::NetworkEdge;

/// placeholder for values computed downstream (length, capacity)
pub const UNSET: i64 = -1;

/// flat, serializable form of a [`NetworkEdge`] as written to the edge table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub id: u64,
    pub oid: String,
    pub nodefrom: i64,
    pub nodeto: i64,
    pub numlanes: u32,
    pub length: f64,
    /// meters per second
    pub vmax: f64,
    pub street_type: String,
    pub capacity: i64,
    pub mode_walk: bool,
    pub mode_bike: bool,
    pub mode_pt: bool,
    pub mode_mit: bool,
    pub modes: u32,
    pub nodes: String,
    pub sidewalk: Option<String>,
    pub cycleway: Option<String>,
    pub surface: Option<String>,
    pub lit: Option<String>,
    pub name: Option<String>,
    pub parking_both: Option<String>,
    pub parking_left: Option<String>,
    pub parking_right: Option<String>,
    /// EWKT multi-line geometry
    pub geometry: String,
}

impl EdgeRow {
    pub fn new(id: u64, edge: &NetworkEdge, srid: u32) -> EdgeRow {
        let attrs = &edge.attributes;
        EdgeRow {
            id,
            oid: edge.id.to_string(),
            nodefrom: edge.src.0,
            nodeto: edge.dst.0,
            numlanes: attrs.lanes,
            length: UNSET as f64,
            vmax: attrs.max_speed.get::<velocity::meter_per_second>(),
            street_type: edge.street_type.clone(),
            capacity: UNSET,
            mode_walk: edge.modes.allows_walk(),
            mode_bike: edge.modes.allows_bike(),
            mode_pt: edge.modes.allows_public_transport(),
            mode_mit: edge.modes.allows_motorised_individual(),
            modes: edge.modes.bits(),
            nodes: format!("{{{}}}", edge.nodes.iter().join(",")),
            sidewalk: attrs.sidewalk.clone(),
            cycleway: attrs.cycleway.clone(),
            surface: attrs.surface.clone(),
            lit: attrs.lit.clone(),
            name: attrs.name.clone(),
            parking_both: attrs.parking_both.clone(),
            parking_left: attrs.parking_left.clone(),
            parking_right: attrs.parking_right.clone(),
            geometry: format!("SRID={srid};{}", edge.multi_line_string().to_wkt()),
        }
    }
}

use std::collections::HashMap;

use crate::model::{
    mode::{ModeSet, TravelMode},
    osm::OsmWayId,
    tags::{tag_ops, TagReport},
};

/// `oneway` values for ways traversed against their node order
const REVERSE: [&str; 2] = ["reverse", "-1"];

/// modes permitted along (forward) and against (backward) the node order of a way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionalResolution {
    pub forward: ModeSet,
    pub backward: ModeSet,
    pub report: TagReport,
}

/// splits resolved modes into forward and backward sets.
///
/// one-way ways (by type default, `oneway`, or an untagged roundabout) lose
/// [`ModeSet::ONEWAY_RESTRICTED`] in the opposing direction. `oneway:<mode>`
/// tags then re-enable or further restrict single modes in the opposing
/// direction. `<mode>:forward` and `<mode>:backward` are applied last.
///
/// a type default of one-way does not hold for ways with more than one
/// `tracks`. an explicit falsy `oneway` does not lift it, but keeps
/// `oneway:<mode>` from re-enabling modes against the flow.
pub fn resolve(
    way_id: OsmWayId,
    default_oneway: bool,
    tags: &HashMap<String, String>,
    modes: ModeSet,
) -> DirectionalResolution {
    let tag = |k: &str| tags.get(k).map(|v| v.trim());
    let mut report = TagReport::default();
    let mut forward = modes;
    let mut backward = modes;

    let multi_track = match tag("tracks") {
        Some(v) => {
            report.consume("tracks");
            match v.parse::<u32>() {
                Ok(n) => n > 1,
                Err(_) if v.contains(';') => true,
                Err(_) => {
                    report.reject("tracks", v);
                    false
                }
            }
        }
        None => false,
    };
    let default_oneway = default_oneway && !multi_track;
    let roundabout = match tag("junction") {
        Some(v) => {
            report.consume("junction");
            v == "roundabout"
        }
        None => false,
    };

    if default_oneway {
        backward.remove(ModeSet::ONEWAY_RESTRICTED);
    }

    if tag("oneway").is_some() {
        report.consume("oneway");
    }
    match tag("oneway").filter(|v| !v.is_empty()) {
        Some(v) if tag_ops::is_truthy(v) => {
            backward.remove(ModeSet::ONEWAY_RESTRICTED);
            apply_mode_oneway(tags, modes, &mut backward, &mut report);
        }
        Some(v) if REVERSE.contains(&v) => {
            forward.remove(ModeSet::ONEWAY_RESTRICTED);
            apply_mode_oneway(tags, modes, &mut forward, &mut report);
        }
        Some(v) if tag_ops::is_falsy(v) => {
            if !default_oneway {
                apply_mode_oneway(tags, modes, &mut backward, &mut report);
            }
        }
        Some(v) => {
            log::debug!("way {way_id} has unsupported oneway value '{v}'");
            report.reject("oneway", v);
            apply_mode_oneway(tags, modes, &mut backward, &mut report);
        }
        None => {
            if roundabout {
                backward.remove(ModeSet::ONEWAY_RESTRICTED);
            }
            apply_mode_oneway(tags, modes, &mut backward, &mut report);
        }
    }

    apply_direction_overrides(way_id, tags, &mut forward, &mut backward, &mut report);

    DirectionalResolution {
        forward,
        backward,
        report,
    }
}

/// `oneway:<mode>` tags act on the direction opposing the way's one-way flow,
/// or on the backward direction of a two-way way.
/// a falsy value restores a mode the way permits, a truthy value removes it.
fn apply_mode_oneway(
    tags: &HashMap<String, String>,
    modes: ModeSet,
    opposing: &mut ModeSet,
    report: &mut TagReport,
) {
    for (mode, osm_key) in TravelMode::keyed() {
        let key = format!("oneway:{osm_key}");
        if let Some(v) = tags.get(&key).map(|v| v.trim()) {
            report.consume(&key);
            let flag = mode.flag();
            if tag_ops::is_falsy(v) {
                if modes.contains(flag) {
                    opposing.insert(flag);
                }
            } else if tag_ops::is_truthy(v) {
                opposing.remove(flag);
            } else {
                report.reject(&key, v);
            }
        }
    }
}

/// `<mode>:forward` and `<mode>:backward` grant (`yes`) or deny (`no`) a single
/// mode in one direction, regardless of anything resolved before.
fn apply_direction_overrides(
    way_id: OsmWayId,
    tags: &HashMap<String, String>,
    forward: &mut ModeSet,
    backward: &mut ModeSet,
    report: &mut TagReport,
) {
    for (mode, osm_key) in TravelMode::keyed() {
        for (suffix, target) in [("forward", &mut *forward), ("backward", &mut *backward)] {
            let key = format!("{osm_key}:{suffix}");
            if let Some(v) = tags.get(&key).map(|v| v.trim()) {
                report.consume(&key);
                match v {
                    "yes" => target.insert(mode.flag()),
                    "no" => target.remove(mode.flag()),
                    _ => {
                        log::debug!("way {way_id} has unsupported {key} value '{v}'");
                        report.reject(&key, v);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    const ROAD: ModeSet = ModeSet::FOOT
        .union(ModeSet::BICYCLE)
        .union(ModeSet::MOTORISED)
        .union(ModeSet::BUS);

    #[test]
    fn test_two_way_without_tags() {
        let result = resolve(OsmWayId(1), false, &HashMap::new(), ROAD);
        assert_eq!(result.forward, ROAD);
        assert_eq!(result.backward, ROAD);
        assert!(!result.report.has_errors());
    }

    #[test]
    fn test_oneway_yes() {
        let result = resolve(OsmWayId(1), false, &tags(&[("oneway", "yes")]), ROAD);
        assert_eq!(result.forward, ROAD);
        assert_eq!(result.backward, ModeSet::FOOT | ModeSet::BUS);
        assert!(result.backward.intersection(ModeSet::ONEWAY_RESTRICTED).is_empty());
    }

    #[test]
    fn test_oneway_reverse_mirrors() {
        let result = resolve(OsmWayId(1), false, &tags(&[("oneway", "-1")]), ROAD);
        assert_eq!(result.forward, ModeSet::FOOT | ModeSet::BUS);
        assert_eq!(result.backward, ROAD);
    }

    #[test]
    fn test_oneway_bicycle_exception() {
        let t = tags(&[("oneway", "yes"), ("oneway:bicycle", "no")]);
        let result = resolve(OsmWayId(1), false, &t, ROAD);
        assert_eq!(result.backward, ModeSet::FOOT | ModeSet::BUS | ModeSet::BICYCLE);
        let t = tags(&[("oneway", "yes"), ("oneway:bus", "yes")]);
        let result = resolve(OsmWayId(1), false, &t, ROAD);
        assert_eq!(result.backward, ModeSet::FOOT);
    }

    #[test]
    fn test_default_oneway_and_tracks() {
        let rail = ModeSet::RAIL;
        let result = resolve(OsmWayId(1), true, &HashMap::new(), rail);
        assert_eq!(result.forward, rail);
        assert_eq!(result.backward, ModeSet::empty());
        let result = resolve(OsmWayId(1), true, &tags(&[("tracks", "2")]), rail);
        assert_eq!(result.backward, rail);
        let result = resolve(OsmWayId(1), true, &tags(&[("tracks", "1;2")]), rail);
        assert_eq!(result.backward, rail);
    }

    #[test]
    fn test_default_oneway_survives_oneway_tag() {
        let motorway = ModeSet::MOTORISED | ModeSet::PASSENGER | ModeSet::BUS;
        let result = resolve(OsmWayId(1), true, &tags(&[("oneway", "no")]), motorway);
        assert_eq!(result.forward, motorway);
        assert_eq!(result.backward, ModeSet::PASSENGER | ModeSet::BUS);
        assert!(!result.report.has_errors());

        let t = tags(&[("oneway", "no"), ("oneway:bus", "yes")]);
        let result = resolve(OsmWayId(1), true, &t, motorway);
        assert_eq!(result.backward, ModeSet::PASSENGER | ModeSet::BUS);

        let result = resolve(OsmWayId(1), true, &tags(&[("oneway", "-1")]), ModeSet::RAIL);
        assert_eq!(result.forward, ModeSet::empty());
        assert_eq!(result.backward, ModeSet::empty());

        let t = tags(&[("oneway", "no"), ("tracks", "2")]);
        let result = resolve(OsmWayId(1), true, &t, ModeSet::RAIL);
        assert_eq!(result.backward, ModeSet::RAIL);
    }

    #[test]
    fn test_mode_oneway_on_two_way_way() {
        let result = resolve(OsmWayId(1), false, &tags(&[("oneway:bicycle", "yes")]), ROAD);
        assert_eq!(result.forward, ROAD);
        assert_eq!(result.backward, ROAD.difference(ModeSet::BICYCLE));
        assert!(result.report.consumed.contains("oneway:bicycle"));

        let t = tags(&[("oneway", "no"), ("oneway:bicycle", "yes")]);
        let result = resolve(OsmWayId(1), false, &t, ROAD);
        assert_eq!(result.backward, ROAD.difference(ModeSet::BICYCLE));
    }

    #[test]
    fn test_roundabout() {
        let t = tags(&[("junction", "roundabout")]);
        let result = resolve(OsmWayId(1), false, &t, ROAD);
        assert_eq!(result.backward, ModeSet::FOOT | ModeSet::BUS);
        let t = tags(&[("junction", "roundabout"), ("oneway", "no")]);
        let result = resolve(OsmWayId(1), false, &t, ROAD);
        assert_eq!(result.backward, ROAD);
    }

    #[test]
    fn test_direction_overrides_win() {
        let t = tags(&[
            ("oneway", "yes"),
            ("oneway:bicycle", "no"),
            ("bicycle:backward", "no"),
            ("bus:forward", "no"),
        ]);
        let result = resolve(OsmWayId(1), false, &t, ROAD);
        assert!(!result.backward.contains(ModeSet::BICYCLE));
        assert!(!result.forward.contains(ModeSet::BUS));
        assert!(result.backward.contains(ModeSet::BUS));
    }

    #[test]
    fn test_direction_overrides_accept_only_yes_no() {
        let t = tags(&[("bicycle:backward", "designated"), ("bus:forward", "private")]);
        let result = resolve(OsmWayId(1), false, &t, ROAD);
        assert_eq!(result.forward, ROAD);
        assert_eq!(result.backward, ROAD);
        assert_eq!(
            result.report.erroneous.get("bicycle:backward").map(|s| s.as_str()),
            Some("designated")
        );
        assert_eq!(
            result.report.erroneous.get("bus:forward").map(|s| s.as_str()),
            Some("private")
        );

        let t = tags(&[("horse:forward", "yes")]);
        let result = resolve(OsmWayId(1), false, &t, ROAD);
        assert!(result.forward.contains(ModeSet::HORSE));
        assert!(!result.backward.contains(ModeSet::HORSE));
    }

    #[test]
    fn test_erroneous_oneway() {
        let result = resolve(OsmWayId(1), false, &tags(&[("oneway", "alternating")]), ROAD);
        assert_eq!(result.forward, ROAD);
        assert_eq!(result.backward, ROAD);
        assert_eq!(
            result.report.erroneous.get("oneway").map(|s| s.as_str()),
            Some("alternating")
        );
    }
}

use std::collections::HashMap;

use crate::model::{
    mode::{AccessPermission, ModeSet, TravelMode},
    tags::TagReport,
};

/// sidewalk values which make a way walkable
const SIDEWALK_FOOT: [&str; 6] = ["sidewalk", "crossing", "left", "right", "both", "yes"];
const SIDEWALK_NONE: [&str; 3] = ["none", "no", "separate"];
/// cycleway values which make a way cyclable
const CYCLEWAY_BICYCLE: [&str; 11] = [
    "track",
    "opposite_track",
    "segregated",
    "lane",
    "shared_lane",
    "opposite_lane",
    "share_busway",
    "right",
    "opposite",
    "yes",
    "shared",
];
const CYCLEWAY_NONE: [&str; 3] = ["no", "none", "separate"];

/// the travel modes of a way after applying its access-related tags to the
/// type default, independent of direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResolution {
    pub modes: ModeSet,
    pub cycleway: Option<String>,
    pub sidewalk: Option<String>,
    pub report: TagReport,
}

/// applies access tags to a type's default modes, in this order:
/// 1. `motorroad=yes` removes soft mobility and mopeds
/// 2. a `sidewalk` adds foot access
/// 3. a `cycleway` adds bicycle access
/// 4. a denying `access` value removes every mode
/// 5. per-mode keys (`foot`, `bicycle`, `bus`, ...) add or remove their mode
///
/// later steps win over earlier ones. values that cannot be interpreted are
/// reported as erroneous and otherwise ignored.
pub fn resolve(default_modes: ModeSet, tags: &HashMap<String, String>) -> TagResolution {
    let tag = |k: &str| tags.get(k).map(|v| v.trim());
    let mut modes = default_modes;
    let mut report = TagReport::default();

    if let Some(v) = tag("motorroad") {
        report.consume("motorroad");
        match v {
            "yes" => modes.remove(ModeSet::SOFT | ModeSet::MOPED),
            "no" => {}
            _ => report.reject("motorroad", v),
        }
    }

    let sidewalk = tag("sidewalk").map(|v| {
        report.consume("sidewalk");
        if SIDEWALK_FOOT.contains(&v) {
            modes.insert(ModeSet::FOOT);
        } else if !SIDEWALK_NONE.contains(&v) {
            report.reject("sidewalk", v);
        }
        String::from(v)
    });

    let cycleway = tag("cycleway").map(|v| {
        report.consume("cycleway");
        if CYCLEWAY_BICYCLE.contains(&v) {
            modes.insert(ModeSet::BICYCLE);
        } else if !CYCLEWAY_NONE.contains(&v) {
            report.reject("cycleway", v);
        }
        String::from(v)
    });

    if let Some(v) = tag("access") {
        report.consume("access");
        match AccessPermission::parse(v) {
            Some(p) if !p.allows() => modes = ModeSet::empty(),
            Some(_) => {}
            None => report.reject("access", v),
        }
    }

    for (mode, key) in TravelMode::keyed() {
        if let Some(v) = tag(key) {
            report.consume(key);
            match AccessPermission::parse(v) {
                Some(p) => modes.set(mode.flag(), p.allows()),
                None => report.reject(key, v),
            }
        }
    }

    TagResolution {
        modes,
        cycleway,
        sidewalk,
        report,
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

    const RESIDENTIAL: ModeSet = ModeSet::FOOT
        .union(ModeSet::BICYCLE)
        .union(ModeSet::MOTORISED)
        .union(ModeSet::PASSENGER);

    #[test]
    fn test_no_tags_keeps_default() {
        let result = resolve(RESIDENTIAL, &HashMap::new());
        assert_eq!(result.modes, RESIDENTIAL);
        assert!(result.report.erroneous.is_empty());
        assert!(result.report.consumed.is_empty());
        assert_eq!(result.sidewalk, None);
        assert_eq!(result.cycleway, None);
    }

    #[test]
    fn test_motorroad() {
        let result = resolve(
            RESIDENTIAL | ModeSet::SOFT | ModeSet::MOPED,
            &tags(&[("motorroad", "yes")]),
        );
        assert_eq!(result.modes, RESIDENTIAL);
        let result = resolve(RESIDENTIAL, &tags(&[("motorroad", "sometimes")]));
        assert_eq!(result.modes, RESIDENTIAL);
        assert!(result.report.erroneous.contains_key("motorroad"));
    }

    #[test]
    fn test_sidewalk_and_cycleway_add_modes() {
        let result = resolve(
            ModeSet::MOTORISED,
            &tags(&[("sidewalk", "both"), ("cycleway", "lane")]),
        );
        assert_eq!(
            result.modes,
            ModeSet::MOTORISED | ModeSet::FOOT | ModeSet::BICYCLE
        );
        assert_eq!(result.sidewalk.as_deref(), Some("both"));
        assert_eq!(result.cycleway.as_deref(), Some("lane"));
        assert!(!result.report.has_errors());
    }

    #[test]
    fn test_sidewalk_recognised_without_effect() {
        let result = resolve(ModeSet::MOTORISED, &tags(&[("sidewalk", "separate")]));
        assert_eq!(result.modes, ModeSet::MOTORISED);
        assert!(!result.report.has_errors());
        let result = resolve(ModeSet::MOTORISED, &tags(&[("sidewalk", "maybe")]));
        assert_eq!(result.modes, ModeSet::MOTORISED);
        assert!(result.report.erroneous.contains_key("sidewalk"));
    }

    #[test]
    fn test_cycleway_recognised_without_effect() {
        let result = resolve(ModeSet::MOTORISED, &tags(&[("cycleway", "separate")]));
        assert_eq!(result.modes, ModeSet::MOTORISED);
        assert!(result.report.consumed.contains("cycleway"));
        assert!(!result.report.has_errors());
        assert_eq!(result.cycleway.as_deref(), Some("separate"));
        let result = resolve(ModeSet::MOTORISED, &tags(&[("cycleway", "painted")]));
        assert_eq!(result.modes, ModeSet::MOTORISED);
        assert_eq!(
            result.report.erroneous.get("cycleway").map(|s| s.as_str()),
            Some("painted")
        );
    }

    #[test]
    fn test_access_deny_clears_everything() {
        let result = resolve(RESIDENTIAL, &tags(&[("access", "no"), ("sidewalk", "yes")]));
        assert_eq!(result.modes, ModeSet::empty());
    }

    #[test]
    fn test_per_mode_after_access() {
        let result = resolve(
            RESIDENTIAL,
            &tags(&[("access", "private"), ("foot", "yes"), ("bicycle", "designated")]),
        );
        assert_eq!(result.modes, ModeSet::FOOT | ModeSet::BICYCLE);
        let result = resolve(RESIDENTIAL, &tags(&[("motor_vehicle", "no")]));
        assert_eq!(result.modes, ModeSet::FOOT | ModeSet::BICYCLE | ModeSet::PASSENGER);
    }

    #[test]
    fn test_unknown_access_ignored() {
        let result = resolve(RESIDENTIAL, &tags(&[("access", "military"), ("bus", "maybe")]));
        assert_eq!(result.modes, RESIDENTIAL);
        assert_eq!(result.report.erroneous.len(), 2);
        assert!(result.report.consumed.contains("bus"));
    }

    #[test]
    fn test_idempotent() {
        let t = tags(&[("access", "no"), ("foot", "yes"), ("cycleway", "track")]);
        assert_eq!(resolve(RESIDENTIAL, &t), resolve(RESIDENTIAL, &t));
    }
}

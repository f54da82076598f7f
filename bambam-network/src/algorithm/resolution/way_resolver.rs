use super::{
    attribute_extractor::{self, AttributeLimits},
    directional_resolver,
    speed_ops::SpeedParser,
    tag_resolver,
};
use crate::model::{
    osm::RawWay,
    profile::{TypeProfile, TypeProfileTable, WayProfile},
    tags::{IgnoredTags, TagAudit, TagReport},
    NetworkError,
};

/// runs tag, direction and attribute resolution for single ways. holds no
/// mutable state, so one instance is shared across worker threads.
#[derive(Debug, Clone)]
pub struct WayResolver {
    table: TypeProfileTable,
    speed_parser: SpeedParser,
    limits: AttributeLimits,
    ignored: IgnoredTags,
}

impl WayResolver {
    pub fn new(
        table: TypeProfileTable,
        limits: AttributeLimits,
        ignored: IgnoredTags,
    ) -> Result<WayResolver, NetworkError> {
        let speed_parser = SpeedParser::new().map_err(NetworkError::InternalError)?;
        Ok(WayResolver {
            table,
            speed_parser,
            limits,
            ignored,
        })
    }

    /// the type profile for a way, or None if the way is not part of the network
    pub fn type_profile(&self, way: &RawWay) -> Option<&TypeProfile> {
        self.table.lookup(way)
    }

    /// resolves a way into its [`WayProfile`]. ways with no known
    /// `<category>_<subtype>` resolve to None. a railway type found alongside
    /// a highway type adds its modes to the highway defaults.
    pub fn resolve(&self, way: &RawWay) -> Option<WayProfile> {
        let mut matches = self.table.matches(way);
        let (category, profile) = matches.next()?;

        let mut category_report = TagReport::default();
        category_report.consume(category);
        let mut default_modes = profile.modes;
        for (other, shared) in matches {
            category_report.consume(other);
            default_modes |= shared.modes;
        }

        let access = tag_resolver::resolve(default_modes, &way.tags);
        let direction =
            directional_resolver::resolve(way.id, profile.oneway, &way.tags, access.modes);
        let extraction = attribute_extractor::extract(
            way.id,
            profile,
            &way.tags,
            &self.speed_parser,
            &self.limits,
        );

        let report = category_report
            .merge(access.report)
            .merge(direction.report)
            .merge(extraction.report);
        if report.has_errors() {
            log::debug!(
                "way {} has {} erroneous tag(s)",
                way.id,
                report.erroneous.len()
            );
        }

        Some(WayProfile {
            way_id: way.id,
            street_type: profile.key.clone(),
            forward: direction.forward,
            backward: direction.backward,
            attributes: extraction.attributes,
            report,
        })
    }

    /// the unconsumed and erroneous tags of a resolved way
    pub fn audit(&self, way: &RawWay, profile: &WayProfile) -> TagAudit {
        TagAudit::new(&way.tags, &profile.report, &self.ignored)
    }
}

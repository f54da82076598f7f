pub mod attribute_extractor;
pub mod directional_resolver;
pub mod speed_ops;
pub mod tag_resolver;
mod way_resolver;

pub use attribute_extractor::AttributeLimits;
pub use way_resolver::WayResolver;

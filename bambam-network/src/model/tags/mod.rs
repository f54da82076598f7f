mod ignored_tags;
mod tag_audit;
pub mod tag_ops;
mod tag_report;

pub use ignored_tags::IgnoredTags;
pub use tag_audit::{TagAudit, TagAuditRow};
pub use tag_report::TagReport;

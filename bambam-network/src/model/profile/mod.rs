mod type_profile;
mod type_profile_table;
mod way_attributes;
mod way_profile;

pub use type_profile::{TypeProfile, TypeProfileConfig};
pub use type_profile_table::TypeProfileTable;
pub use way_attributes::WayAttributes;
pub use way_profile::WayProfile;

mod access_permission;
mod mode_set;
mod travel_mode;

pub use access_permission::AccessPermission;
pub use mode_set::ModeSet;
pub use travel_mode::TravelMode;

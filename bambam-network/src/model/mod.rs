pub mod mode;
pub mod network;
mod network_cli_error;
mod network_error;
pub mod osm;
pub mod profile;
pub mod sink;
pub mod tags;

pub use network_cli_error::NetworkCliError;
pub use network_error::NetworkError;

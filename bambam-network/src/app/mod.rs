mod network_app;
mod network_builder;

pub use network_app::{run_import, NetworkApp, NetworkOperation, SUMMARY_FILENAME};
pub use network_builder::{NetworkBuilder, NetworkSummary};

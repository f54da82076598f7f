mod network_import_configuration;

pub use network_import_configuration::NetworkImportConfiguration;

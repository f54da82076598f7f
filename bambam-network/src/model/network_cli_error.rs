use super::NetworkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure building network: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("failure reading configuration: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}

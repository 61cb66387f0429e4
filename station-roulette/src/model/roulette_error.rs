use super::network::StationId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouletteError {
    #[error("no candidate stations to select from")]
    EmptyCandidates,
    #[error("attempting to get station '{0}' not in distance table")]
    StationNotFound(StationId),
    #[error("station '{0}' is unreachable from the source station")]
    StationUnreachable(StationId),
    #[error("random value {0} is not in the range [0, 1)")]
    InvalidRandomValue(f64),
    #[error("invalid roulette configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure reading {filepath}: {source}")]
    CsvReadError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}

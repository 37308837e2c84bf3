use rp_core::CoreError;
use rp_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("no such place: {0:?}")]
    UnknownLocation(String),

    #[error(transparent)]
    Network(NetworkError),
}

impl From<NetworkError> for PlannerError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::UnknownLocation(name) => PlannerError::UnknownLocation(name),
            other => PlannerError::Network(other),
        }
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;

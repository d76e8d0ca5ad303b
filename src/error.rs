use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown production line id: {0}")]
    UnknownLine(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

//! Engine error type.

/// Errors raised by graph construction and the removal process.
///
/// None of these leave a simulation partially updated: a failing call
/// returns before touching the graph or the history.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid network parameter: {0}")]
    InvalidParameter(String),
    #[error("Graph has no nodes to remove")]
    EmptyGraph,
    #[error("Every original node has already been removed")]
    AlreadyExhausted,
}

pub type Result<T> = std::result::Result<T, SimulationError>;

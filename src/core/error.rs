use thiserror::Error;

/// An operation referenced a vertex that was never added to the graph.
///
/// The error carries the identifier that was looked up.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("vertex does not exist")]
pub struct UnknownVertex<V>(pub V);

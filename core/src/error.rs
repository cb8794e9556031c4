use thiserror::Error;

/// Errors raised by graph mutations, path queries and step lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("node '{0}' already exists")]
    DuplicateNode(String),

    #[error("edge '{0}' already exists")]
    DuplicateEdge(String),

    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("unknown edge '{0}'")]
    UnknownEdge(String),

    #[error("invalid edge weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),

    #[error("distance to node '{0}' overflows a finite value")]
    DistanceOverflow(String),

    #[error("step {index} is out of range ({count} steps recorded)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("no more letters available for node labels")]
    AlphabetExhausted,

    /// Engine state that should be impossible, surfaced instead of ignored.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

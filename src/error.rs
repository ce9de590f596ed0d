//! Error taxonomy for graph construction and layout.

/// Rejected graph input. Raised while building a [`crate::Graph`], never during layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("edge {edge_index} references unknown vertex '{label}'")]
    UnknownVertex { edge_index: usize, label: String },
}

/// The engine could not produce a drawing it is willing to emit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout still invalid after {attempts} attempts: {reason}")]
    Infeasible { attempts: usize, reason: String },

    #[error("acyclic reduction of component still contains a cycle")]
    CyclicReduction,

    #[error("edge {edge} has no route in the finished drawing")]
    MissingRoute { edge: usize },
}

/// Any failure surfaced by the public API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("invalid layout preferences: {message}")]
    Prefs { message: String },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

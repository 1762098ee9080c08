use thiserror::Error;

/// Errors surfaced by the coupling layer before a mapping loop runs.
///
/// Every condition here is a caller-side defect in the inputs; the
/// mappings themselves are deterministic and have no partial-success
/// mode.
#[derive(Debug, Error)]
pub enum CouplingError {
    #[error("nodes per element must be 2 or 3, got {0}")]
    UnsupportedElementOrder(usize),

    #[error("{n_nodes} nodes cannot be partitioned into {nodes_per_element}-node elements")]
    NodeElementMismatch {
        n_nodes: usize,
        nodes_per_element: usize,
    },

    #[error("section must have at least one chordwise panel")]
    EmptySection,

    #[error("grid shape {found:?} does not match (chord points, beam nodes) {expected:?}")]
    GridShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("beam loads hold {found} nodes, expected {expected}")]
    LoadShapeMismatch { expected: usize, found: usize },

    #[error("failed to read coupling input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse coupling input: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// A reference to a vertex, either by its key or by its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexRef {
    Id(String),
    Index(usize),
}

impl fmt::Display for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRef::Id(id) => write!(f, "'{id}'"),
            VertexRef::Index(index) => write!(f, "at index {index}"),
        }
    }
}

impl From<&str> for VertexRef {
    fn from(id: &str) -> Self {
        VertexRef::Id(id.to_string())
    }
}

impl From<usize> for VertexRef {
    fn from(index: usize) -> Self {
        VertexRef::Index(index)
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum DigraphError {
    #[error("Vertex '{id}' already exists")]
    #[diagnostic(
        code(digraph_dfs::duplicate_vertex),
        help("Vertex ids must be unique within a graph")
    )]
    DuplicateVertex { id: String },

    #[error("Unknown vertex {vertex}")]
    #[diagnostic(
        code(digraph_dfs::unknown_vertex),
        help("Add the vertex before referencing it from an edge")
    )]
    UnknownVertex { vertex: VertexRef },

    #[error("Cannot compute {operation}: {requirement}")]
    #[diagnostic(
        code(digraph_dfs::precondition_violated),
        help("Call is_cyclic() on the current graph before querying its structure")
    )]
    PreconditionViolated {
        operation: &'static str,
        requirement: &'static str,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(digraph_dfs::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(digraph_dfs::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(digraph_dfs::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(digraph_dfs::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_duplicate_vertex_display() {
        let error = DigraphError::DuplicateVertex {
            id: "A".to_string(),
        };
        assert_eq!(error.to_string(), "Vertex 'A' already exists");
    }

    #[test]
    fn test_unknown_vertex_display() {
        let by_id = DigraphError::UnknownVertex {
            vertex: VertexRef::from("ghost"),
        };
        assert_eq!(by_id.to_string(), "Unknown vertex 'ghost'");

        let by_index = DigraphError::UnknownVertex {
            vertex: VertexRef::from(7),
        };
        assert_eq!(by_index.to_string(), "Unknown vertex at index 7");
    }

    #[test]
    fn test_precondition_display() {
        let error = DigraphError::PreconditionViolated {
            operation: "topological order",
            requirement: "the graph contains a cycle",
        };
        assert_eq!(
            error.to_string(),
            "Cannot compute topological order: the graph contains a cycle"
        );
    }

    #[test]
    fn test_error_codes() {
        let error = DigraphError::DuplicateVertex {
            id: "A".to_string(),
        };

        use miette::Diagnostic;
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: DigraphError = io_err.into();

        match err {
            DigraphError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_configuration_error() {
        let error = DigraphError::ConfigurationError {
            message: "Missing required field: format".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: format"
        );
    }
}

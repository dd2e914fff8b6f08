//! Error types shared by graph construction and traversal.

use thiserror::Error;

use crate::types::NodeId;

/// Reason reported when an id token is not made of ASCII digits.
pub const NON_NUMERIC_ID: &str = "non-numeric id";
/// Reason reported when an id token is all digits but overflows `u64`.
pub const ID_OUT_OF_RANGE: &str = "id out of range";
/// Reason reported when a line carries more than two tokens.
pub const UNEXPECTED_TOKEN: &str = "unexpected token";

/// Unified error for every fallible operation in the crate.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A line of the edge-list input could not be parsed.
    #[error("parse error on line {line}: {reason} `{token}`")]
    Parse {
        line: usize,
        token: String,
        reason: &'static str,
    },

    /// The requested node is not part of the graph.
    #[error("node {0} does not exist")]
    NotFound(NodeId),

    /// A frontier was popped while empty.
    #[error("frontier is empty")]
    Empty,

    /// A traversal was aborted because a node could not be visited.
    #[error("error when visiting node {id}")]
    Visit {
        id: NodeId,
        #[source]
        source: Box<GraphError>,
    },

    /// Configuration could not be read or was malformed.
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Wrap `self` as the cause of a failed visit of `id`.
    pub fn visiting(self, id: NodeId) -> Self {
        Self::Visit {
            id,
            source: Box::new(self),
        }
    }

    /// The innermost error, following `Visit` wrappers.
    pub fn root_cause(&self) -> &GraphError {
        let mut current = self;
        while let Self::Visit { source, .. } = current {
            current = source;
        }
        current
    }

    /// True when the root cause is a missing node.
    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), Self::NotFound(_))
    }

    /// True for construction-time parse failures.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_names_line_and_token() {
        let err = GraphError::Parse {
            line: 3,
            token: "a".into(),
            reason: NON_NUMERIC_ID,
        };
        assert_eq!(err.to_string(), "parse error on line 3: non-numeric id `a`");
        assert!(err.is_parse());
    }

    #[test]
    fn root_cause_unwraps_nested_visits() {
        let err = GraphError::NotFound(9).visiting(4).visiting(1);
        assert!(matches!(err.root_cause(), GraphError::NotFound(9)));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "error when visiting node 1");
    }

    #[test]
    fn visit_error_exposes_source() {
        use std::error::Error as _;

        let err = GraphError::NotFound(7).visiting(7);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("node 7 does not exist"));
    }

    #[test]
    fn empty_is_not_a_lookup_failure() {
        assert!(!GraphError::Empty.is_not_found());
        assert!(!GraphError::Empty.is_parse());
    }
}

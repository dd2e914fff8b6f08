//! Line-oriented edge-list parser.
//!
//! Each non-blank line is either `<id>` (a lone vertex) or `<id> <id>` (an
//! adjacency entry from the first vertex to the second). Ids are unsigned
//! decimal integers that fit in a `u64`. The first malformed line fails the
//! whole input.

use crate::error::{GraphError, Result, ID_OUT_OF_RANGE, NON_NUMERIC_ID, UNEXPECTED_TOKEN};
use crate::types::NodeId;

/// One parsed line of the edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub source: NodeId,
    pub target: Option<NodeId>,
}

/// Parse a whole edge-list document. Blank lines are skipped.
pub fn parse_edge_list(input: &str) -> Result<Vec<EdgeLine>> {
    let mut lines = Vec::new();
    for (idx, text) in input.lines().enumerate() {
        if let Some(parsed) = parse_line(idx + 1, text)? {
            lines.push(parsed);
        }
    }
    Ok(lines)
}

/// Parse a single line. Returns `Ok(None)` for blank lines.
pub fn parse_line(line: usize, text: &str) -> Result<Option<EdgeLine>> {
    let mut tokens = text.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    let source = parse_id(line, first)?;
    let target = tokens.next().map(|t| parse_id(line, t)).transpose()?;

    if let Some(extra) = tokens.next() {
        return Err(GraphError::Parse {
            line,
            token: extra.to_string(),
            reason: UNEXPECTED_TOKEN,
        });
    }

    Ok(Some(EdgeLine {
        line,
        source,
        target,
    }))
}

/// Parse a single id token.
///
/// `u64::from_str` accepts a leading `+`, so the digit check runs first to
/// hold ids to `[0-9]+`.
pub fn parse_id(line: usize, token: &str) -> Result<NodeId> {
    let err = |reason: &'static str| GraphError::Parse {
        line,
        token: token.to_string(),
        reason,
    };
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err(NON_NUMERIC_ID));
    }
    token.parse::<NodeId>().map_err(|_| err(ID_OUT_OF_RANGE))
}

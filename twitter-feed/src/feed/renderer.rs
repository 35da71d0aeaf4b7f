//! Feed renderer
//!
//! Renders the follow graph and message board to the plain-text feed format:
//!
//! ```text
//! Alan
//! <tab>@Alan: message
//! Martin
//! ```

use crate::domain::entities::{FollowGraph, MessageBoard};
use crate::error::DataError;

/// Render every user's feed, users in lexicographic order.
///
/// Each user gets a name line followed by one tab-indented line per visible
/// message, in posting order. Fails with `DataError::NoUsers` when the graph
/// has no users.
pub fn render_feed(graph: &FollowGraph, board: &MessageBoard) -> Result<String, DataError> {
    if graph.is_empty() {
        return Err(DataError::NoUsers);
    }

    let mut buf = String::new();
    for user in graph.users() {
        buf.push_str(user);
        buf.push('\n');

        for message in board.messages(user) {
            buf.push('\t');
            buf.push_str(message.as_str());
            buf.push('\n');
        }
    }

    Ok(buf)
}

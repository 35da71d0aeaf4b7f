//! Follow-relationship parser
//!
//! Parses lines like "Ward follows Martin, Alan" into the follow graph.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::FollowGraph;
use crate::error::DataError;

/// Separator between followed users on the right-hand side
pub const FOLLOW_SEPARATOR: &str = ", ";

static FOLLOW_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+) follows ([A-Za-z]+(?:, [A-Za-z]+)*)$")
        .expect("follow line pattern is valid")
});

/// Classification of a single follow-file line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowLine<'a> {
    /// Empty or whitespace-only line
    Blank,

    /// `follower follows users[0], users[1], ...`
    Follows {
        follower: &'a str,
        users: Vec<&'a str>,
    },

    /// Non-blank line that does not match the grammar
    Malformed,
}

/// Classify a raw line; leading and trailing whitespace is ignored
pub fn parse_follow_line(line: &str) -> FollowLine<'_> {
    let line = line.trim();
    if line.is_empty() {
        return FollowLine::Blank;
    }

    match FOLLOW_LINE.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(follower), Some(users)) => FollowLine::Follows {
                follower: follower.as_str(),
                users: users.as_str().split(FOLLOW_SEPARATOR).collect(),
            },
            _ => FollowLine::Malformed,
        },
        None => FollowLine::Malformed,
    }
}

/// Build the follow graph from the lines of a follow file.
///
/// Every follower follows themself, as does every followed user. Blank lines
/// are skipped; the first malformed line aborts parsing.
pub fn parse_follow_graph<S: AsRef<str>>(lines: &[S]) -> Result<FollowGraph, DataError> {
    tracing::debug!("Parsing user data");
    let mut graph = FollowGraph::new();

    for (index, raw) in lines.iter().enumerate() {
        let line_number = index + 1;
        let raw = raw.as_ref();

        match parse_follow_line(raw) {
            FollowLine::Blank => {
                tracing::warn!(
                    line = line_number,
                    "Line contains only whitespace/empty line, skipping"
                );
            }
            FollowLine::Follows { follower, users } => {
                tracing::debug!(follower, users = ?users, "User record");

                let unique: BTreeSet<&str> = users.iter().copied().collect();
                if unique.len() != users.len() {
                    tracing::debug!(
                        follower,
                        line = line_number,
                        "Duplicate users found in record"
                    );
                }

                for user in unique {
                    graph.add_follow(follower, user);
                }
                graph.register(follower);
            }
            FollowLine::Malformed => {
                return Err(DataError::MalformedFollow {
                    line: line_number,
                    record: raw.trim().to_string(),
                });
            }
        }
    }

    Ok(graph)
}

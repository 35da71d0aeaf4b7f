//! Test fixtures
//!
//! Sample input lines and helpers for inspecting parsed structures.

use crate::domain::entities::{FollowGraph, MessageBoard};

/// Follow file used throughout the tests
pub fn follows_fixture() -> Vec<String> {
    vec![
        "Ward follows Alan".to_string(),
        "Alan follows Martin".to_string(),
        "Ward follows Martin, Alan".to_string(),
    ]
}

/// Tweet file matching `follows_fixture`
pub fn tweets_fixture() -> Vec<String> {
    vec![
        "Alan> If you have a procedure with 10 parameters, you probably missed some.".to_string(),
        "Ward> There are only two hard things in Computer Science: cache invalidation, naming things and off-by-1 errors.".to_string(),
        "Alan> Random numbers should not be generated with a method chosen at random.".to_string(),
    ]
}

/// Feed produced from `follows_fixture` and `tweets_fixture`
pub const EXPECTED_FEED: &str = "Alan\n\
\t@Alan: If you have a procedure with 10 parameters, you probably missed some.\n\
\t@Alan: Random numbers should not be generated with a method chosen at random.\n\
Martin\n\
Ward\n\
\t@Alan: If you have a procedure with 10 parameters, you probably missed some.\n\
\t@Ward: There are only two hard things in Computer Science: cache invalidation, naming things and off-by-1 errors.\n\
\t@Alan: Random numbers should not be generated with a method chosen at random.\n";

/// Followers of `user` as plain names, in order; empty for unknown users
pub fn follower_names<'a>(graph: &'a FollowGraph, user: &str) -> Vec<&'a str> {
    graph
        .followers(user)
        .map(|set| set.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Messages visible to `recipient` as plain strings, in posting order
pub fn message_texts<'a>(board: &'a MessageBoard, recipient: &str) -> Vec<&'a str> {
    board
        .messages(recipient)
        .iter()
        .map(|message| message.as_str())
        .collect()
}

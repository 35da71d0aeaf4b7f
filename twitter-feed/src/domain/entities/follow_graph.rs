//! Follow graph domain entity
//!
//! Maps every known user to the set of users allowed to see their posts.

use std::collections::{BTreeMap, BTreeSet};

/// Mapping from user name to the set of that user's followers.
///
/// Invariant: every user present as a key is a member of their own follower
/// set, so a user always sees their own posts. Keys and follower sets iterate
/// in lexicographic order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowGraph {
    followers: BTreeMap<String, BTreeSet<String>>,
}

impl FollowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `follower` follows `user`.
    ///
    /// Both users end up registered, so the self-visibility invariant holds
    /// for each of them.
    pub fn add_follow(&mut self, follower: &str, user: &str) {
        self.register(follower);
        self.register(user);
        if let Some(set) = self.followers.get_mut(user) {
            set.insert(follower.to_string());
        }
    }

    /// Make `user` known to the graph as their own follower.
    ///
    /// Idempotent: registering an existing user leaves their followers intact.
    pub fn register(&mut self, user: &str) {
        self.followers
            .entry(user.to_string())
            .or_default()
            .insert(user.to_string());
    }

    /// Followers of `user`, including `user` themself, if the user is known
    pub fn followers(&self, user: &str) -> Option<&BTreeSet<String>> {
        self.followers.get(user)
    }

    pub fn contains(&self, user: &str) -> bool {
        self.followers.contains_key(user)
    }

    /// All known users in lexicographic order
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.followers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }
}

//! Tweet domain entity
//!
//! A single posted message and its rendered feed form.

/// Maximum number of characters in a tweet body
pub const MAX_TWEET_CHARS: usize = 140;

/// A message posted by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub author: String,
    pub text: String,
}

impl Tweet {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Render the tweet as it appears in a feed: `@<author>: <text>`
    pub fn render(&self) -> RenderedMessage {
        RenderedMessage(format!("@{}: {}", self.author, self.text))
    }
}

/// A tweet in its feed form, e.g. `@Alan: Hello`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage(String);

impl RenderedMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RenderedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

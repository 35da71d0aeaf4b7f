//! Message board domain entity
//!
//! Holds, per recipient, the rendered messages they should see.

use std::collections::HashMap;

use crate::domain::entities::RenderedMessage;

/// Mapping from recipient to the messages in their feed, in posting order
#[derive(Debug, Clone, Default)]
pub struct MessageBoard {
    messages: HashMap<String, Vec<RenderedMessage>>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to the feed of every recipient
    pub fn deliver<'a, I>(&mut self, recipients: I, message: &RenderedMessage)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for recipient in recipients {
            self.messages
                .entry(recipient.to_string())
                .or_default()
                .push(message.clone());
        }
    }

    /// Messages visible to `recipient`; empty for unknown recipients
    pub fn messages(&self, recipient: &str) -> &[RenderedMessage] {
        self.messages
            .get(recipient)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of deliveries across all recipients
    pub fn delivery_count(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }
}

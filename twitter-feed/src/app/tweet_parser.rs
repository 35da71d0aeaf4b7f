//! Tweet parser
//!
//! Parses lines like "Alan> Hello world" and fans each tweet out to the
//! author's followers.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{FollowGraph, MessageBoard, Tweet, MAX_TWEET_CHARS};
use crate::error::DataError;

static TWEET_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^([A-Za-z]+)> ([^\r\n]{{1,{}}})$", MAX_TWEET_CHARS))
        .expect("tweet line pattern is valid")
});

/// Classification of a single tweet-file line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TweetLine {
    /// Empty or whitespace-only line
    Blank,

    /// A well-formed tweet
    Tweet(Tweet),

    /// Non-blank line that does not match the grammar
    Malformed,
}

/// Classify a raw line; leading and trailing whitespace is ignored
pub fn parse_tweet_line(line: &str) -> TweetLine {
    let line = line.trim();
    if line.is_empty() {
        return TweetLine::Blank;
    }

    match TWEET_LINE.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(author), Some(text)) => {
                TweetLine::Tweet(Tweet::new(author.as_str(), text.as_str()))
            }
            _ => TweetLine::Malformed,
        },
        None => TweetLine::Malformed,
    }
}

/// Build the message board from the lines of a tweet file.
///
/// Each tweet is delivered, in posting order, to every follower of its
/// author. An author missing from `graph` is registered as their own sole
/// follower first. Blank lines are skipped; the first malformed line aborts
/// parsing. No lines at all is a valid, empty board.
pub fn parse_message_board<S: AsRef<str>>(
    lines: &[S],
    graph: &mut FollowGraph,
) -> Result<MessageBoard, DataError> {
    tracing::debug!("Parsing tweet data");
    let mut board = MessageBoard::new();

    for (index, raw) in lines.iter().enumerate() {
        let line_number = index + 1;
        let raw = raw.as_ref();

        match parse_tweet_line(raw) {
            TweetLine::Blank => {
                tracing::warn!(
                    line = line_number,
                    "Line contains only whitespace/empty line, skipping"
                );
            }
            TweetLine::Tweet(tweet) => {
                tracing::debug!(author = %tweet.author, text = %tweet.text, "Tweet record");

                if !graph.contains(&tweet.author) {
                    tracing::debug!(
                        author = %tweet.author,
                        "Tweet author has no followers, adding self"
                    );
                    graph.register(&tweet.author);
                }

                if let Some(followers) = graph.followers(&tweet.author) {
                    board.deliver(followers.iter().map(String::as_str), &tweet.render());
                }
            }
            TweetLine::Malformed => {
                return Err(DataError::MalformedTweet {
                    line: line_number,
                    record: raw.trim().to_string(),
                });
            }
        }
    }

    Ok(board)
}

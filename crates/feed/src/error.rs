// ABOUTME: Error types for podcast feed parsing operations.
// ABOUTME: Provides FeedError enum with Parse, MissingChannel, and Invalid variants.

use std::fmt;
use thiserror::Error;

/// Errors that can surface from the document-level parse.
///
/// Element-level defects never show up here: a malformed field is dropped
/// and an entity without enough data is simply absent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The bytes could not be turned into an element tree (malformed XML).
    #[error("failed to parse feed: {0}")]
    Parse(String),

    /// The document has no RSS channel element.
    #[error("feed has no channel element")]
    MissingChannel,

    /// The channel was found but lacks the data required to build a podcast.
    #[error("invalid feed: {0}")]
    Invalid(String),
}

impl FeedError {
    /// Creates a Parse error from an underlying XML error.
    pub fn parse(err: impl fmt::Display) -> Self {
        FeedError::Parse(err.to_string())
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        FeedError::Invalid(msg.into())
    }
}

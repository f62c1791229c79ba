//! Error types for the application
//!
//! This module defines all error types used throughout the application using the
//! `thiserror` crate. Each error variant provides detailed context about what went wrong.

use thiserror::Error;

/// Application error types
///
/// This enum represents all possible errors that can occur during the execution
/// of the program. None of them are recovered from: the first one aborts the run.
#[derive(Error, Debug)]
pub enum AppError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Transport-level HTTP error (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Non-success HTTP status
    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },
    /// Package page without a level-1 heading
    #[error("No <h1> heading found in {url}")]
    MissingHeading { url: String },
    /// Invalid CSS selector
    #[error("Invalid selector `{selector}`: {reason}")]
    SelectorError { selector: String, reason: String },
    /// Empty chapter identifier
    #[error("Invalid chapter identifier: {chapter:?}")]
    InvalidChapter { chapter: String },
}

impl AppError {
    /// Create a new HttpStatus error
    pub fn http_status(url: &str, status: reqwest::StatusCode) -> Self {
        AppError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        }
    }
}

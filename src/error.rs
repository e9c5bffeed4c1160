use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Input problems caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title to search")]
    EmptySearchTitle,
    #[error("Please select a movie to update")]
    UpdateNeedsSelection,
    #[error("Please select a movie to delete")]
    DeleteNeedsSelection,
    #[error("Please enter a numeric budget")]
    InvalidBudget(String),
}

/// One gateway call against the movie API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListAll,
    SearchByTitle,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message shown to the user when this call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListAll => "Failed to fetch movies",
            Operation::SearchByTitle => "Movie not found",
            Operation::Create => "Failed to create movie",
            Operation::Update => "Failed to update movie",
            Operation::Delete => "Failed to delete movie",
        }
    }

    /// Short tag used in log lines.
    pub fn log_tag(self) -> &'static str {
        match self {
            Operation::ListAll => "GET ALL",
            Operation::SearchByTitle => "GET BY TITLE",
            Operation::Create => "POST",
            Operation::Update => "PUT",
            Operation::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.log_tag())
    }
}

#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("server answered with status {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// A gateway call that did not complete successfully.
#[derive(Debug, Error)]
#[error("{}", .operation.failure_message())]
pub struct FetchError {
    pub operation: Operation,
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(operation: Operation, cause: impl Into<FetchCause>) -> Self {
        Self {
            operation,
            cause: cause.into(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match &self.cause {
            FetchCause::Status(status) => Some(*status),
            FetchCause::Request(e) => e.status(),
        }
    }
}

/// Why a user action stopped early.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("cancelled by user")]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("base url {0} must use http or https")]
    UnsupportedScheme(String),
    #[error("could not build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

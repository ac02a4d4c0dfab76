// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by every resource flow.

/// Error for a single user intent.
///
/// Both variants terminate the intent that produced them. Neither one touches
/// the field store or the list cache.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing form input, caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// Network failure or non-success HTTP status. The response body is not decoded.
    #[error("Request failed: {0}")]
    Transport(String),
}

impl AppError {
    /// Build a validation error for one named field.
    pub fn invalid_field(field: &str, reason: impl std::fmt::Display) -> Self {
        AppError::Validation(format!("{}: {}", field, reason))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let reason = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    // Struct-level checks are reported under "__all__"
                    if field == "__all__" {
                        reason
                    } else {
                        format!("{}: {}", field, reason)
                    }
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

/// Result type alias for intents and remote calls.
pub type Result<T> = std::result::Result<T, AppError>;

// SPDX-FileCopyrightText: 2026 ade-available contributors
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// Response carried a status other than `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub endpoint: String,
    pub code: u16,
    pub canonical_reason: Option<String>,
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(reason) = &self.canonical_reason {
            write!(
                f,
                "unexpected HTTP status code {} {} from API endpoint '{}'",
                self.code, reason, self.endpoint
            )
        } else {
            write!(
                f,
                "unexpected HTTP status code {} from API endpoint '{}'",
                self.code, self.endpoint
            )
        }
    }
}

impl std::error::Error for StatusError {}

#[derive(Debug)]
pub enum DecodeError {
    /// Body could not be read to completion
    Body(reqwest::Error),
    Json(serde_json::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body(err) => write!(f, "failed to read response body: {}", err),
            Self::Json(err) => write!(f, "failed to decode device list: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Body(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Transport(reqwest::Error),
    Status(StatusError),
    Decode(DecodeError),
}

impl Error {
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(err) => Some(err.code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "request failed: {}", err),
            Self::Status(err) => write!(f, "{}", err),
            Self::Decode(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<StatusError> for Error {
    fn from(err: StatusError) -> Self {
        Self::Status(err)
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(DecodeError::Json(err))
    }
}

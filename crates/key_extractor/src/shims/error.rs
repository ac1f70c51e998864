// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use crate::file::KeyFileError;
use crate::key::KeyDecodeError;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ExtractCliError {
    #[error("{0}")]
    Usage(String),
    #[error("Key file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("{0}")]
    Decode(String),
    #[error("Decoded data too short: {actual} bytes (expected at least {minimum})")]
    Length { actual: usize, minimum: usize },
    #[error("{0}")]
    Unexpected(String),
}

impl From<KeyFileError> for ExtractCliError {
    fn from(value: KeyFileError) -> Self {
        match value {
            KeyFileError::NotFound(path) => Self::NotFound(path),
            KeyFileError::Decode(error) => error.into(),
            _ => Self::Unexpected(value.to_string()),
        }
    }
}

impl From<KeyDecodeError> for ExtractCliError {
    fn from(value: KeyDecodeError) -> Self {
        match value {
            KeyDecodeError::Base64(_) => Self::Decode(value.to_string()),
            KeyDecodeError::TooShort { actual, minimum } => Self::Length { actual, minimum },
        }
    }
}

impl From<clap::Error> for ExtractCliError {
    fn from(value: clap::Error) -> Self {
        Self::Usage(value.render().to_string().trim_end().to_owned())
    }
}

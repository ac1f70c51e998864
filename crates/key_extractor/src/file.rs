// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::key::{KeyDecodeError, KeyRecord};

/// Reads the whole key file, closing it before the contents are decoded.
pub fn load_key_record_from_file(path: &Path) -> Result<KeyRecord, KeyFileError> {
    debug!("reading key file {}", path.display());
    let contents = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => KeyFileError::NotFound(path.to_owned()),
        _ => KeyFileError::CouldNotRead(path.to_owned(), err.to_string()),
    })?;

    let text =
        String::from_utf8(contents).map_err(|_| KeyFileError::NotText(path.to_owned()))?;
    let record = KeyRecord::from_base64(&text)?;

    debug!(
        "decoded key record from {} (scheme: {})",
        path.display(),
        record.scheme()
    );
    Ok(record)
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyFileError {
    #[error("Key file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Unable to read from {:?}. Error: {}.", .0, .1)]
    CouldNotRead(PathBuf, String),
    #[error("The supplied file {:?} does not contain text.", .0)]
    NotText(PathBuf),
    #[error(transparent)]
    Decode(#[from] KeyDecodeError),
}

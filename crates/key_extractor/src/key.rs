// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoding of `flag || privkey` key records.
//!
//! A key record is the base64 encoding of a single flag byte followed by 32
//! bytes of private key material. Anything after the key material is ignored,
//! and the flag is only used to name the scheme in diagnostics.

use std::fmt;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use tracing::debug;

pub const FLAG_LEN: usize = 1;
pub const KEY_MATERIAL_LEN: usize = 32;
/// Smallest decoded payload that contains a full record.
pub const MIN_RECORD_LEN: usize = FLAG_LEN + KEY_MATERIAL_LEN;

pub const ED25519_FLAG: u8 = 0x00;
pub const SECP256K1_FLAG: u8 = 0x01;

/// Standard alphabet with required padding. Set bits left over after the
/// last full byte are ignored rather than rejected.
const KEY_FILE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

fn is_base64_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyDecodeError {
    #[error("Key file contents are not valid base64: {0}")]
    Base64(String),
    #[error("Decoded data too short: {actual} bytes (expected at least {minimum}).")]
    TooShort { actual: usize, minimum: usize },
}

/// Signature scheme named by the flag byte. Unrecognised flags are kept
/// rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyScheme {
    Ed25519,
    Secp256k1,
    Unknown(u8),
}

impl From<u8> for KeyScheme {
    fn from(flag: u8) -> Self {
        match flag {
            ED25519_FLAG => Self::Ed25519,
            SECP256K1_FLAG => Self::Secp256k1,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for KeyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::Secp256k1 => write!(f, "Secp256k1"),
            Self::Unknown(flag) => write!(f, "unknown (flag {flag:#04x})"),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct KeyRecord {
    flag: u8,
    key_material: [u8; KEY_MATERIAL_LEN],
}

impl KeyRecord {
    /// Splits a decoded payload into its flag and key material.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyDecodeError> {
        if bytes.len() < MIN_RECORD_LEN {
            return Err(KeyDecodeError::TooShort {
                actual: bytes.len(),
                minimum: MIN_RECORD_LEN,
            });
        }

        let flag = bytes[0];
        let mut key_material = [0_u8; KEY_MATERIAL_LEN];
        key_material.copy_from_slice(&bytes[FLAG_LEN..MIN_RECORD_LEN]);

        Ok(Self { flag, key_material })
    }

    /// Decodes the textual contents of a key file. Characters outside the
    /// base64 alphabet (line breaks, stray punctuation) are discarded before
    /// decoding; padding is still required.
    pub fn from_base64(text: &str) -> Result<Self, KeyDecodeError> {
        let text = text.trim();
        let decoded = if text.chars().all(is_base64_symbol) {
            KEY_FILE_ENGINE.decode(text)
        } else {
            let symbols: String = text.chars().filter(|&c| is_base64_symbol(c)).collect();
            KEY_FILE_ENGINE.decode(symbols)
        };
        let bytes = decoded.map_err(|err| KeyDecodeError::Base64(err.to_string()))?;
        debug!("decoded {} bytes of key data", bytes.len());

        Self::from_bytes(&bytes)
    }

    pub fn flag(&self) -> u8 {
        self.flag
    }

    pub fn scheme(&self) -> KeyScheme {
        KeyScheme::from(self.flag)
    }

    pub fn key_material(&self) -> &[u8; KEY_MATERIAL_LEN] {
        &self.key_material
    }

    /// Lowercase hex of the key material, without separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.key_material)
    }
}

// Key material stays out of debug output and therefore out of logs.
impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRecord")
            .field("flag", &self.flag)
            .field("key_material", &"<redacted>")
            .finish()
    }
}

// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Functionality for printing the private key held in a base64 key file as hex
use std::{ffi::OsString, io::Write, path::PathBuf, process::ExitCode};

use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use super::error::ExtractCliError;
use crate::file::load_key_record_from_file;
use crate::key::KeyScheme;

/// The single argument is always the key file path. There are no flags, so
/// `--help` and the like are read as paths too.
#[derive(Debug, Parser)]
#[clap(
    name = "extract-privatekey",
    about = "Prints the private key stored in a base64 `flag || privkey` key file as hex",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ExtractKeyOpts {
    #[clap(
        allow_hyphen_values = true,
        help = "Path of the base64 encoded key file"
    )]
    pub key_file: PathBuf,
}

/// How the process should exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Parses the full argument list, program name included. Anything other than
/// exactly one argument after the program name is a usage error.
pub fn parse_opts<I, T>(args: I) -> Result<ExtractKeyOpts, ExtractCliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        let usage = ExtractKeyOpts::command().render_usage().to_string();
        return Err(ExtractCliError::Usage(usage.trim_end().to_owned()));
    }
    Ok(ExtractKeyOpts::try_parse_from(args)?)
}

pub fn main<W: Write, E: Write>(
    opts: &ExtractKeyOpts,
    stdout: &mut W,
    stderr: &mut E,
) -> Result<Status, std::io::Error> {
    match run(opts) {
        Ok(key_hex) => {
            writeln!(stdout, "{key_hex}")?;
            Ok(Status::Success)
        }
        Err(err) => {
            writeln!(stderr, "ERROR: {err}")?;
            Ok(Status::Failure)
        }
    }
}

pub fn run(opts: &ExtractKeyOpts) -> Result<String, ExtractCliError> {
    let record = load_key_record_from_file(&opts.key_file)?;

    match record.scheme() {
        KeyScheme::Unknown(flag) => info!("flag byte {flag:#04x} does not name a known scheme"),
        scheme => debug!("key scheme is {scheme}"),
    }

    Ok(record.to_hex())
}

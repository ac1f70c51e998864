// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::stderr;
use std::io::stdout;
use std::io::Write;
use std::process::ExitCode;

use key_extractor::log::init_log;
use key_extractor::shims::extract_key::{self, Status};

fn main() -> ExitCode {
    match run() {
        Ok(status) => status.into(),
        // stdout or stderr itself failed; nothing left to report to
        Err(_) => ExitCode::FAILURE,
    }
}

fn run() -> Result<Status, std::io::Error> {
    let opts = match extract_key::parse_opts(std::env::args_os()) {
        Ok(opts) => opts,
        Err(err) => {
            writeln!(&mut stderr(), "{err}")?;
            return Ok(Status::Failure);
        }
    };

    if let Err(err) = init_log() {
        writeln!(&mut stderr(), "ERROR: could not set up logging: {err}")?;
        return Ok(Status::Failure);
    }

    extract_key::main(&opts, &mut stdout(), &mut stderr())
}

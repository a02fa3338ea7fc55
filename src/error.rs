// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Failed to open the input file.
    OpenFailed(PathBuf),

    /// Failed to write the output file.
    WriteFailed(PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::OpenFailed(ref path) => {
                write!(f, "failed to open '{}'", path.display())
            }
            Error::WriteFailed(ref path) => {
                write!(f, "failed to write '{}'", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}

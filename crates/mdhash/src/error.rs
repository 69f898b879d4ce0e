// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Hashing error
///
/// Hashing is all-or-nothing: any error aborts the computation and no partial
/// digest is produced.
#[derive(Error, Debug)]
pub enum HashError {
    /// The input could not be opened
    #[error("failed to open {}", path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input could not be read
    #[error("failed to read input")]
    Read(#[source] io::Error),
}

impl HashError {
    /// The I/O error behind this failure
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. } => source,
            Self::Read(source) => source,
        }
    }
}

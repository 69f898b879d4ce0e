// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash computation per FIPS 180-4 Sections 6.2 and 6.4

use crate::compress::State;
use crate::digest::Digest;
use crate::reader::BlockReader;
use crate::source::{ByteSource, SliceSource};
use crate::variant::{Sha256, Sha512, Variant};

/// Hash everything `source` yields.
///
/// Blocks are pulled one at a time and folded into a running state that
/// starts at H(0). A read failure aborts the computation and is returned
/// unchanged.
pub fn hash_source<V: Variant, S: ByteSource>(source: S) -> Result<Digest<V::Word>, S::Error> {
    let mut reader = BlockReader::<V, S>::new(source);
    let mut state = State::<V>::new();

    while let Some(block) = reader.next_block()? {
        state.compress_block(block);
    }

    Ok(Digest::new(state.into_words()))
}

/// Hash an in-memory message
pub fn hash<V: Variant>(data: &[u8]) -> Digest<V::Word> {
    match hash_source::<V, _>(SliceSource::new(data)) {
        Ok(digest) => digest,
        Err(never) => match never {},
    }
}

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> Digest<u32> {
    hash::<Sha256>(data)
}

/// SHA-512 of `data`
pub fn sha512(data: &[u8]) -> Digest<u64> {
    hash::<Sha512>(data)
}

/// Hash everything `reader` yields until end of input
#[cfg(feature = "std")]
pub fn hash_reader<V: Variant, R: std::io::Read>(
    reader: R,
) -> Result<Digest<V::Word>, crate::HashError> {
    hash_source::<V, _>(crate::source::IoSource::new(reader)).map_err(crate::HashError::Read)
}

/// Hash the contents of the file at `path`
#[cfg(feature = "std")]
pub fn hash_file<V: Variant>(
    path: impl AsRef<std::path::Path>,
) -> Result<Digest<V::Word>, crate::HashError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| crate::HashError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    hash_reader::<V, _>(std::io::BufReader::new(file))
}

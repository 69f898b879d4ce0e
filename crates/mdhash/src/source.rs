// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte sources feeding the block reader.

use core::convert::Infallible;

/// Sequentially readable byte stream of unknown total length.
pub trait ByteSource {
    /// Error raised when the underlying storage cannot be read
    type Error;

    /// Read up to `buf.len()` bytes into `buf` and return how many were read.
    ///
    /// `Ok(0)` for a non-empty `buf` signals end of input. Returning fewer
    /// bytes than requested does not imply end of input.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read_into(buf)
    }
}

/// In-memory source over a borrowed buffer. Never fails.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    remaining: &'a [u8],
}

impl<'a> SliceSource<'a> {
    /// Wrap `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { remaining: data }
    }

    /// Bytes not yet handed out
    pub fn remaining(&self) -> &'a [u8] {
        self.remaining
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
        let n = core::cmp::min(buf.len(), self.remaining.len());
        let (head, tail) = self.remaining.split_at(n);
        buf[..n].copy_from_slice(head);
        self.remaining = tail;
        Ok(n)
    }
}

/// Adapter from any [`std::io::Read`].
///
/// `ErrorKind::Interrupted` is retried; every other error is surfaced.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// Wrap `inner`
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    type Error = std::io::Error;

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, std::io::Error> {
        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                result => return result,
            }
        }
    }
}

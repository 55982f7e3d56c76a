use std::fmt::{self, Debug, Display, Formatter};

use subtle::ConstantTimeEq;

use super::errors::{reject, ErrorKind, Result};

/// Digest produced by a finalized hasher.
///
/// Equality is constant-time in the digest contents.
#[derive(Clone)]
pub struct Output {
    bytes: Vec<u8>,
}

impl Output {
    pub(crate) fn new(bytes: Vec<u8>) -> Output {
        Output { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Compares against `expected` without branching on where they differ.
    pub fn ct_eq(&self, expected: &[u8]) -> bool {
        self.bytes.as_slice().ct_eq(expected).into()
    }
}

/// Allocates room for a digest of `n` bytes.
pub(crate) fn reserve(n: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    if let Err(err) = bytes.try_reserve_exact(n) {
        let msg = format!("fail to reserve {} bytes for digest", n);
        return Err(reject(ErrorKind::AllocationFailure, msg).cause_by(err));
    }
    Ok(bytes)
}

impl PartialEq for Output {
    fn eq(&self, other: &Output) -> bool {
        self.ct_eq(&other.bytes)
    }
}

impl Eq for Output {}

impl PartialEq<[u8]> for Output {
    fn eq(&self, other: &[u8]) -> bool {
        self.ct_eq(other)
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Output> for Vec<u8> {
    fn from(output: Output) -> Vec<u8> {
        output.bytes
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Output({})", self.to_hex())
    }
}

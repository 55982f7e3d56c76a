use bytes::BufMut;

use super::traits::{Algorithm, Digester, ExtendableDigester};
use super::xof::{put_squeezed, XofReader};
use super::MAX_XOF_LENGTH;
use crate::evp::errors::{reject, ErrorKind, Result};

pub const BLAKE3_DIGEST_LENGTH: usize = blake3::OUT_LEN;
pub const BLAKE3_BLOCK_SIZE: usize = blake3::BLOCK_LEN;

/// Unkeyed BLAKE3 truncated or extended to a runtime output length.
#[derive(Clone, Copy, Debug)]
pub struct Blake3Algorithm {
    digest_length: usize,
}

impl Blake3Algorithm {
    pub fn new(digest_length: usize) -> Result<Blake3Algorithm> {
        if digest_length == 0 || digest_length > MAX_XOF_LENGTH {
            let msg = format!("blake3 digest length {} not in 1..={}", digest_length, MAX_XOF_LENGTH);
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        }
        Ok(Blake3Algorithm { digest_length })
    }
}

impl Default for Blake3Algorithm {
    fn default() -> Self {
        Blake3Algorithm { digest_length: BLAKE3_DIGEST_LENGTH }
    }
}

impl Algorithm for Blake3Algorithm {
    type Digester = Blake3Digester;

    fn digester(&self) -> Self::Digester {
        Blake3Digester { hasher: blake3::Hasher::new(), digest_length: self.digest_length }
    }

    fn digest_length(&self) -> usize {
        self.digest_length
    }
}

#[derive(Clone)]
pub struct Blake3Digester {
    hasher: blake3::Hasher,
    digest_length: usize,
}

impl Digester for Blake3Digester {
    fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn digest(self, buf: &mut impl BufMut) {
        let mut reader = self.hasher.finalize_xof();
        put_squeezed(buf, self.digest_length, |chunk| reader.fill(chunk));
    }

    fn digest_length(&self) -> usize {
        self.digest_length
    }
}

impl ExtendableDigester for Blake3Digester {
    type Reader = XofReader;

    fn finalize_xof(self) -> XofReader {
        XofReader::from_blake3(self.hasher.finalize_xof())
    }
}

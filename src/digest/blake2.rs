use blake2::digest::{Update, VariableOutput};
use blake2::{Blake2bVar, Blake2sVar};
use bytes::BufMut;

use super::traits::{Algorithm, Digester};
use crate::evp::errors::{reject, ErrorKind, Result};

pub const BLAKE2B_MAX_DIGEST_LENGTH: usize = 64;
pub const BLAKE2B_BLOCK_SIZE: usize = 128;
pub const BLAKE2S_MAX_DIGEST_LENGTH: usize = 32;
pub const BLAKE2S_BLOCK_SIZE: usize = 64;

/// Unkeyed BLAKE2b with output length chosen at runtime.
#[derive(Clone)]
pub struct Blake2bAlgorithm {
    template: Blake2bVar,
}

impl Blake2bAlgorithm {
    pub fn new(digest_length: usize) -> Result<Blake2bAlgorithm> {
        let Ok(template) = Blake2bVar::new(digest_length) else {
            let msg = format!("blake2b digest length {} not in 1..={}", digest_length, BLAKE2B_MAX_DIGEST_LENGTH);
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        };
        Ok(Blake2bAlgorithm { template })
    }
}

impl Algorithm for Blake2bAlgorithm {
    type Digester = Blake2bDigester;

    fn digester(&self) -> Self::Digester {
        Blake2bDigester { hasher: self.template.clone() }
    }

    fn digest_length(&self) -> usize {
        self.template.output_size()
    }
}

#[derive(Clone)]
pub struct Blake2bDigester {
    hasher: Blake2bVar,
}

impl Digester for Blake2bDigester {
    fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn digest(self, buf: &mut impl BufMut) {
        buf.put_slice(&self.hasher.finalize_boxed());
    }

    fn digest_length(&self) -> usize {
        self.hasher.output_size()
    }
}

/// Unkeyed BLAKE2s with output length chosen at runtime.
#[derive(Clone)]
pub struct Blake2sAlgorithm {
    template: Blake2sVar,
}

impl Blake2sAlgorithm {
    pub fn new(digest_length: usize) -> Result<Blake2sAlgorithm> {
        let Ok(template) = Blake2sVar::new(digest_length) else {
            let msg = format!("blake2s digest length {} not in 1..={}", digest_length, BLAKE2S_MAX_DIGEST_LENGTH);
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        };
        Ok(Blake2sAlgorithm { template })
    }
}

impl Algorithm for Blake2sAlgorithm {
    type Digester = Blake2sDigester;

    fn digester(&self) -> Self::Digester {
        Blake2sDigester { hasher: self.template.clone() }
    }

    fn digest_length(&self) -> usize {
        self.template.output_size()
    }
}

#[derive(Clone)]
pub struct Blake2sDigester {
    hasher: Blake2sVar,
}

impl Digester for Blake2sDigester {
    fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn digest(self, buf: &mut impl BufMut) {
        buf.put_slice(&self.hasher.finalize_boxed());
    }

    fn digest_length(&self) -> usize {
        self.hasher.output_size()
    }
}

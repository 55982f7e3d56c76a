use bytes::BufMut;
use sha1::{Digest, Sha1};

use super::traits::{Algorithm, Digester};

pub const SHA1_DIGEST_LENGTH: usize = 20;
pub const SHA1_BLOCK_SIZE: usize = 64;

#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1Algorithm;

impl Algorithm for Sha1Algorithm {
    type Digester = Sha1Digester;

    fn digester(&self) -> Self::Digester {
        Sha1Digester { hasher: Sha1::new() }
    }

    fn digest_length(&self) -> usize {
        SHA1_DIGEST_LENGTH
    }
}

#[derive(Clone)]
pub struct Sha1Digester {
    hasher: Sha1,
}

impl Digester for Sha1Digester {
    fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn digest(self, buf: &mut impl BufMut) {
        buf.put_slice(&self.hasher.finalize());
    }

    fn digest_length(&self) -> usize {
        SHA1_DIGEST_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::traits::{Algorithm, Digester};
    use super::Sha1Algorithm;

    #[test]
    fn test_sha1() {
        let mut vec = Vec::new();
        Sha1Algorithm.oneshot(b"abc", &mut vec);
        assert_eq!("a9993e364706816aba3e25717850c26c9cd0d89d", hex::encode(&vec));

        let mut digester = Sha1Algorithm.digester();
        digester.update(b"hel");
        digester.update(b"lo");
        assert_eq!(20, digester.digest_length());

        vec.clear();
        digester.digest(&mut vec);
        assert_eq!("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d", hex::encode(&vec));
    }
}

use bytes::BufMut;
use md5::{Digest, Md5};

use super::traits::{Algorithm, Digester};

pub const MD5_DIGEST_LENGTH: usize = 16;
pub const MD5_BLOCK_SIZE: usize = 64;

#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Algorithm;

impl Algorithm for Md5Algorithm {
    type Digester = Md5Digester;

    fn digester(&self) -> Self::Digester {
        Md5Digester { hasher: Md5::new() }
    }

    fn digest_length(&self) -> usize {
        MD5_DIGEST_LENGTH
    }
}

#[derive(Clone)]
pub struct Md5Digester {
    hasher: Md5,
}

impl Digester for Md5Digester {
    fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    fn digest(self, buf: &mut impl BufMut) {
        buf.put_slice(&self.hasher.finalize());
    }

    fn digest_length(&self) -> usize {
        MD5_DIGEST_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::traits::{Algorithm, Digester};
    use super::Md5Algorithm;

    fn md5_hex(chunks: &[&[u8]]) -> String {
        let mut digester = Md5Algorithm.digester();
        for chunk in chunks {
            digester.update(chunk);
        }
        let mut vec = Vec::new();
        digester.digest(&mut vec);
        assert_eq!(16, vec.len());
        hex::encode(vec)
    }

    #[test]
    fn test_md5() {
        assert_eq!("d41d8cd98f00b204e9800998ecf8427e", md5_hex(&[]));
        assert_eq!("900150983cd24fb0d6963f7d28e17f72", md5_hex(&[b"abc"]));
        assert_eq!("900150983cd24fb0d6963f7d28e17f72", md5_hex(&[b"a", b"", b"bc"]));
        assert_eq!("5d41402abc4b2a76b9719d911017c592", md5_hex(&[b"hello"]));
    }
}

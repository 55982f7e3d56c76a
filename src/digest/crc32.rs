use bytes::BufMut;
use crc32fast::Hasher;

use super::traits::{Algorithm, Digester};

pub const CRC32_DIGEST_LENGTH: usize = 4;

#[derive(Clone)]
pub struct Crc32Digester {
    hasher: Hasher,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32Algorithm;

impl Algorithm for Crc32Algorithm {
    type Digester = Crc32Digester;

    fn digester(&self) -> Self::Digester {
        Crc32Digester { hasher: Hasher::new() }
    }

    fn digest_length(&self) -> usize {
        CRC32_DIGEST_LENGTH
    }
}

impl Digester for Crc32Digester {
    fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Writes the checksum big-endian, the way it is conventionally printed.
    fn digest(self, buf: &mut impl BufMut) {
        buf.put_u32(self.hasher.finalize());
    }

    fn digest_length(&self) -> usize {
        CRC32_DIGEST_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use bytes::Buf;
    use pretty_assertions::assert_eq;

    use super::super::traits::{Algorithm, Digester};
    use super::{Crc32Algorithm, Crc32Digester};

    fn checksum(digester: Crc32Digester) -> u32 {
        let mut vec = Vec::new();
        digester.digest(&mut vec);
        assert_eq!(4, vec.len());

        let mut buf = vec.as_slice();
        buf.get_u32()
    }

    #[test]
    fn test_crc32() {
        let algorithm = Crc32Algorithm;
        let digester = algorithm.digester();

        assert_eq!(4, algorithm.digest_length());
        assert_eq!(4, digester.digest_length());

        assert_eq!(0, checksum(digester));

        let mut digester = algorithm.digester();
        digester.update(b"abcdefg");
        assert_eq!(0x312a6aa6, checksum(digester));

        let mut digester = algorithm.digester();
        digester.update(b"1234");
        digester.update(b"56789");
        assert_eq!(0xcbf43926, checksum(digester));
    }

    #[test]
    fn test_byte_order() {
        let mut vec = Vec::new();
        Crc32Algorithm.oneshot(b"hello", &mut vec);
        assert_eq!("3610a686", hex::encode(vec));
    }
}

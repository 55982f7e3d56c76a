use bytes::BufMut;

use crate::sponge::Sponge;

/// Reader over the unbounded output of an extendable-output configuration.
///
/// Reading `n` then `m` bytes yields the same bytes as reading `n + m` at once.
#[derive(Clone)]
pub struct XofReader {
    repr: XofReaderRepr,
}

#[derive(Clone)]
enum XofReaderRepr {
    Sponge(Sponge),
    Blake3(blake3::OutputReader),
}

impl XofReader {
    pub(crate) fn from_sponge(mut sponge: Sponge) -> XofReader {
        sponge.finalize();
        XofReader { repr: XofReaderRepr::Sponge(sponge) }
    }

    pub(crate) fn from_blake3(reader: blake3::OutputReader) -> XofReader {
        XofReader { repr: XofReaderRepr::Blake3(reader) }
    }

    /// Fills `out` with the next output bytes.
    pub fn read(&mut self, out: &mut [u8]) {
        match &mut self.repr {
            XofReaderRepr::Sponge(sponge) => sponge.squeeze(out),
            XofReaderRepr::Blake3(reader) => reader.fill(out),
        }
    }

    /// Writes the next `n` output bytes into `buf`.
    pub fn read_into(&mut self, n: usize, buf: &mut impl BufMut) {
        put_squeezed(buf, n, |chunk| self.read(chunk));
    }
}

/// Moves `n` bytes from `fill` into `buf` through a stack block.
pub(crate) fn put_squeezed(buf: &mut impl BufMut, mut n: usize, mut fill: impl FnMut(&mut [u8])) {
    let mut block = [0u8; 256];
    while n != 0 {
        let len = n.min(block.len());
        fill(&mut block[..len]);
        buf.put_slice(&block[..len]);
        n -= len;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::XofReader;
    use crate::sponge::{Sponge, SHAKE_SUFFIX};

    #[test]
    fn test_shake128_empty() {
        let mut reader = XofReader::from_sponge(Sponge::new(168, SHAKE_SUFFIX));
        let mut out = [0u8; 32];
        reader.read(&mut out);
        assert_eq!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26", hex::encode(out));
    }

    #[test]
    fn test_continuation() {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"hello");
        let whole = {
            let mut reader = XofReader::from_blake3(hasher.finalize_xof());
            let mut vec = Vec::new();
            reader.read_into(1000, &mut vec);
            vec
        };
        assert_eq!(1000, whole.len());
        assert_eq!("ea8f163db38682925e4491c5e58d4bb3506ef8c14eb78a86e908c5624a67200f", hex::encode(&whole[..32]));

        let mut reader = XofReader::from_blake3(hasher.finalize_xof());
        let mut pieces = Vec::new();
        for n in [1, 63, 64, 300, 572] {
            reader.read_into(n, &mut pieces);
        }
        assert_eq!(whole, pieces);
    }
}

use bytes::BufMut;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

use super::traits::{Algorithm, Digester};

/// Member of the SHA-2 family.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sha2Variant {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
}

impl Sha2Variant {
    pub const fn digest_length(self) -> usize {
        match self {
            Sha2Variant::Sha224 | Sha2Variant::Sha512_224 => 28,
            Sha2Variant::Sha256 | Sha2Variant::Sha512_256 => 32,
            Sha2Variant::Sha384 => 48,
            Sha2Variant::Sha512 => 64,
        }
    }

    pub const fn block_size(self) -> usize {
        match self {
            Sha2Variant::Sha224 | Sha2Variant::Sha256 => 64,
            _ => 128,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Sha2Algorithm {
    variant: Sha2Variant,
}

impl Sha2Algorithm {
    pub fn new(variant: Sha2Variant) -> Sha2Algorithm {
        Sha2Algorithm { variant }
    }
}

impl Algorithm for Sha2Algorithm {
    type Digester = Sha2Digester;

    fn digester(&self) -> Self::Digester {
        let repr = match self.variant {
            Sha2Variant::Sha224 => HasherRepr::Sha224(Sha224::new()),
            Sha2Variant::Sha256 => HasherRepr::Sha256(Sha256::new()),
            Sha2Variant::Sha384 => HasherRepr::Sha384(Sha384::new()),
            Sha2Variant::Sha512 => HasherRepr::Sha512(Sha512::new()),
            Sha2Variant::Sha512_224 => HasherRepr::Sha512_224(Sha512_224::new()),
            Sha2Variant::Sha512_256 => HasherRepr::Sha512_256(Sha512_256::new()),
        };
        Sha2Digester { repr }
    }

    fn digest_length(&self) -> usize {
        self.variant.digest_length()
    }
}

#[derive(Clone)]
enum HasherRepr {
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Sha512_224(Sha512_224),
    Sha512_256(Sha512_256),
}

impl HasherRepr {
    fn variant(&self) -> Sha2Variant {
        match self {
            HasherRepr::Sha224(_) => Sha2Variant::Sha224,
            HasherRepr::Sha256(_) => Sha2Variant::Sha256,
            HasherRepr::Sha384(_) => Sha2Variant::Sha384,
            HasherRepr::Sha512(_) => Sha2Variant::Sha512,
            HasherRepr::Sha512_224(_) => Sha2Variant::Sha512_224,
            HasherRepr::Sha512_256(_) => Sha2Variant::Sha512_256,
        }
    }
}

#[derive(Clone)]
pub struct Sha2Digester {
    repr: HasherRepr,
}

impl Digester for Sha2Digester {
    fn update(&mut self, bytes: &[u8]) {
        match &mut self.repr {
            HasherRepr::Sha224(hasher) => hasher.update(bytes),
            HasherRepr::Sha256(hasher) => hasher.update(bytes),
            HasherRepr::Sha384(hasher) => hasher.update(bytes),
            HasherRepr::Sha512(hasher) => hasher.update(bytes),
            HasherRepr::Sha512_224(hasher) => hasher.update(bytes),
            HasherRepr::Sha512_256(hasher) => hasher.update(bytes),
        }
    }

    fn digest(self, buf: &mut impl BufMut) {
        match self.repr {
            HasherRepr::Sha224(hasher) => buf.put_slice(&hasher.finalize()),
            HasherRepr::Sha256(hasher) => buf.put_slice(&hasher.finalize()),
            HasherRepr::Sha384(hasher) => buf.put_slice(&hasher.finalize()),
            HasherRepr::Sha512(hasher) => buf.put_slice(&hasher.finalize()),
            HasherRepr::Sha512_224(hasher) => buf.put_slice(&hasher.finalize()),
            HasherRepr::Sha512_256(hasher) => buf.put_slice(&hasher.finalize()),
        }
    }

    fn digest_length(&self) -> usize {
        self.repr.variant().digest_length()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::traits::{Algorithm, Digester};
    use super::{Sha2Algorithm, Sha2Variant};

    fn sha2_hex(variant: Sha2Variant, bytes: &[u8]) -> String {
        let algorithm = Sha2Algorithm::new(variant);
        let mut vec = Vec::new();
        algorithm.oneshot(bytes, &mut vec);
        assert_eq!(algorithm.digest_length(), vec.len());
        hex::encode(vec)
    }

    #[test]
    fn test_sha2_hello() {
        assert_eq!("ea09ae9cc6768c50fcee903ed054556e5bfc8347907f12598aa24193", sha2_hex(Sha2Variant::Sha224, b"hello"));
        assert_eq!(
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            sha2_hex(Sha2Variant::Sha256, b"hello")
        );
        assert_eq!(
            "59e1748777448c69de6b800d7a33bbfb9ff1b463e44354c3553bcdb9c666fa90125a3c79f90397bdf5f6a13de828684f",
            sha2_hex(Sha2Variant::Sha384, b"hello")
        );
        assert_eq!(
            "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca72323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043",
            sha2_hex(Sha2Variant::Sha512, b"hello")
        );
        assert_eq!(
            "fe8509ed1fb7dcefc27e6ac1a80eddbec4cb3d2c6fe565244374061c",
            sha2_hex(Sha2Variant::Sha512_224, b"hello")
        );
        assert_eq!(
            "e30d87cfa2a75db545eac4d61baf970366a8357c7f72fa95b52d0accb698f13a",
            sha2_hex(Sha2Variant::Sha512_256, b"hello")
        );
    }

    #[test]
    fn test_streaming() {
        let algorithm = Sha2Algorithm::new(Sha2Variant::Sha256);
        let mut digester = algorithm.digester();
        digester.update(b"a");
        digester.update(b"bc");
        assert_eq!(32, digester.digest_length());
        let mut vec = Vec::new();
        digester.digest(&mut vec);
        assert_eq!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad", hex::encode(vec));
    }

    #[test]
    fn test_block_size() {
        assert_eq!(48, Sha2Algorithm::new(Sha2Variant::Sha384).digester().digest_length());
        assert_eq!(28, Sha2Algorithm::new(Sha2Variant::Sha512_224).digester().digest_length());
        assert_eq!(64, Sha2Variant::Sha256.block_size());
        assert_eq!(128, Sha2Variant::Sha512_256.block_size());
    }
}

use std::mem;

use bytes::BufMut;

mod blake2;
mod blake3;
mod crc32;
mod keccak;
mod md5;
mod sha1;
mod sha2;
pub mod traits;
mod xof;

use self::blake2::{Blake2bAlgorithm, Blake2bDigester, Blake2sAlgorithm, Blake2sDigester};
pub use self::blake2::{BLAKE2B_BLOCK_SIZE, BLAKE2B_MAX_DIGEST_LENGTH, BLAKE2S_BLOCK_SIZE, BLAKE2S_MAX_DIGEST_LENGTH};
use self::blake3::{Blake3Algorithm, Blake3Digester};
pub use self::blake3::{BLAKE3_BLOCK_SIZE, BLAKE3_DIGEST_LENGTH};
use self::crc32::{Crc32Algorithm, Crc32Digester};
pub use self::crc32::CRC32_DIGEST_LENGTH;
pub use self::keccak::KeccakAlgorithm;
use self::keccak::KeccakDigester;
use self::md5::{Md5Algorithm, Md5Digester};
pub use self::md5::{MD5_BLOCK_SIZE, MD5_DIGEST_LENGTH};
use self::sha1::{Sha1Algorithm, Sha1Digester};
pub use self::sha1::{SHA1_BLOCK_SIZE, SHA1_DIGEST_LENGTH};
use self::sha2::{Sha2Algorithm, Sha2Digester};
pub use self::sha2::Sha2Variant;
use self::traits::ExtendableDigester;
pub use self::xof::XofReader;
use crate::evp::errors::{reject_static, ErrorKind, Result};
use crate::evp::{Descriptor, Family};

/// Longest output an extendable-output configuration may be asked to produce in one digest.
pub const MAX_XOF_LENGTH: usize = 1 << 24;

/// Bytes of per-handle state each family keeps inline.
pub const fn context_size(family: Family) -> usize {
    match family {
        Family::Md5 => mem::size_of::<Md5Digester>(),
        Family::Sha1 => mem::size_of::<Sha1Digester>(),
        Family::Sha2(_) => mem::size_of::<Sha2Digester>(),
        Family::Sponge(_) => mem::size_of::<KeccakDigester>(),
        Family::Blake2b => mem::size_of::<Blake2bDigester>(),
        Family::Blake2s => mem::size_of::<Blake2sDigester>(),
        Family::Blake3 => mem::size_of::<Blake3Digester>(),
        Family::Crc32 => mem::size_of::<Crc32Digester>(),
    }
}

#[derive(Clone)]
enum DigesterRepr {
    Md5(Md5Digester),
    Sha1(Sha1Digester),
    Sha2(Sha2Digester),
    Keccak(KeccakDigester),
    Blake2b(Blake2bDigester),
    Blake2s(Blake2sDigester),
    Blake3(Blake3Digester),
    Crc32(Crc32Digester),
}

#[derive(Clone)]
pub struct Digester {
    repr: DigesterRepr,
}

#[derive(Clone)]
enum AlgorithmRepr {
    Md5(Md5Algorithm),
    Sha1(Sha1Algorithm),
    Sha2(Sha2Algorithm),
    Keccak(KeccakAlgorithm),
    Blake2b(Blake2bAlgorithm),
    Blake2s(Blake2sAlgorithm),
    Blake3(Blake3Algorithm),
    Crc32(Crc32Algorithm),
}

/// Configured algorithm of any family.
#[derive(Clone)]
pub struct Algorithm {
    repr: AlgorithmRepr,
}

impl Algorithm {
    /// Builds the default configuration of a descriptor.
    pub fn new(descriptor: &Descriptor) -> Result<Algorithm> {
        let repr = match descriptor.family() {
            Family::Md5 => AlgorithmRepr::Md5(Md5Algorithm),
            Family::Sha1 => AlgorithmRepr::Sha1(Sha1Algorithm),
            Family::Sha2(variant) => AlgorithmRepr::Sha2(Sha2Algorithm::new(variant)),
            Family::Sponge(params) if params.xof => {
                let algorithm = KeccakAlgorithm::extendable(params.rate, params.suffix, descriptor.digest_length());
                AlgorithmRepr::Keccak(algorithm)
            },
            Family::Sponge(params) => AlgorithmRepr::Keccak(KeccakAlgorithm::standard(params.rate, params.suffix)),
            Family::Blake2b => AlgorithmRepr::Blake2b(Blake2bAlgorithm::new(descriptor.digest_length())?),
            Family::Blake2s => AlgorithmRepr::Blake2s(Blake2sAlgorithm::new(descriptor.digest_length())?),
            Family::Blake3 => AlgorithmRepr::Blake3(Blake3Algorithm::default()),
            Family::Crc32 => AlgorithmRepr::Crc32(Crc32Algorithm),
        };
        Ok(Algorithm { repr })
    }

    /// Sponge configuration if this is a member of the Keccak family.
    pub fn keccak(&self) -> Option<&KeccakAlgorithm> {
        match &self.repr {
            AlgorithmRepr::Keccak(algorithm) => Some(algorithm),
            _ => None,
        }
    }

    /// Whether output can be read past the digest length through an [XofReader].
    pub fn is_xof(&self) -> bool {
        match &self.repr {
            AlgorithmRepr::Keccak(algorithm) => algorithm.is_custom(),
            AlgorithmRepr::Blake3(_) => true,
            _ => false,
        }
    }

    pub fn with_digest_length(&self, digest_length: usize) -> Result<Algorithm> {
        let repr = match &self.repr {
            AlgorithmRepr::Keccak(algorithm) => AlgorithmRepr::Keccak(algorithm.with_digest_length(digest_length)?),
            AlgorithmRepr::Blake2b(_) => AlgorithmRepr::Blake2b(Blake2bAlgorithm::new(digest_length)?),
            AlgorithmRepr::Blake2s(_) => AlgorithmRepr::Blake2s(Blake2sAlgorithm::new(digest_length)?),
            AlgorithmRepr::Blake3(_) => AlgorithmRepr::Blake3(Blake3Algorithm::new(digest_length)?),
            _ => return Err(reject_static(ErrorKind::InvalidConfiguration, "digest length is fixed")),
        };
        Ok(Algorithm { repr })
    }

    pub fn with_keccak_rate(&self, rate: usize) -> Result<Algorithm> {
        self.map_keccak(|algorithm| algorithm.with_rate(rate))
    }

    pub fn with_keccak_custom(&self, custom: bool) -> Result<Algorithm> {
        self.map_keccak(|algorithm| algorithm.with_custom(custom))
    }

    pub fn with_keccak_suffix(&self, suffix: u8) -> Result<Algorithm> {
        self.map_keccak(|algorithm| algorithm.with_suffix(suffix))
    }

    fn map_keccak<F>(&self, f: F) -> Result<Algorithm>
    where
        F: FnOnce(&KeccakAlgorithm) -> Result<KeccakAlgorithm>, {
        let AlgorithmRepr::Keccak(algorithm) = &self.repr else {
            return Err(reject_static(ErrorKind::InvalidConfiguration, "not a sponge algorithm"));
        };
        Ok(Algorithm { repr: AlgorithmRepr::Keccak(f(algorithm)?) })
    }
}

impl traits::Algorithm for Algorithm {
    type Digester = Digester;

    fn digester(&self) -> Self::Digester {
        let repr = match &self.repr {
            AlgorithmRepr::Md5(algorithm) => DigesterRepr::Md5(algorithm.digester()),
            AlgorithmRepr::Sha1(algorithm) => DigesterRepr::Sha1(algorithm.digester()),
            AlgorithmRepr::Sha2(algorithm) => DigesterRepr::Sha2(algorithm.digester()),
            AlgorithmRepr::Keccak(algorithm) => DigesterRepr::Keccak(algorithm.digester()),
            AlgorithmRepr::Blake2b(algorithm) => DigesterRepr::Blake2b(algorithm.digester()),
            AlgorithmRepr::Blake2s(algorithm) => DigesterRepr::Blake2s(algorithm.digester()),
            AlgorithmRepr::Blake3(algorithm) => DigesterRepr::Blake3(algorithm.digester()),
            AlgorithmRepr::Crc32(algorithm) => DigesterRepr::Crc32(algorithm.digester()),
        };
        Digester { repr }
    }

    fn digest_length(&self) -> usize {
        match &self.repr {
            AlgorithmRepr::Md5(algorithm) => algorithm.digest_length(),
            AlgorithmRepr::Sha1(algorithm) => algorithm.digest_length(),
            AlgorithmRepr::Sha2(algorithm) => algorithm.digest_length(),
            AlgorithmRepr::Keccak(algorithm) => algorithm.digest_length(),
            AlgorithmRepr::Blake2b(algorithm) => algorithm.digest_length(),
            AlgorithmRepr::Blake2s(algorithm) => algorithm.digest_length(),
            AlgorithmRepr::Blake3(algorithm) => algorithm.digest_length(),
            AlgorithmRepr::Crc32(algorithm) => algorithm.digest_length(),
        }
    }
}

impl Digester {
    /// Switches to extendable output, or hands the digester back if its family has none.
    pub fn finalize_xof(self) -> std::result::Result<XofReader, Digester> {
        match self.repr {
            DigesterRepr::Keccak(digester) => Ok(digester.finalize_xof()),
            DigesterRepr::Blake3(digester) => Ok(digester.finalize_xof()),
            repr => Err(Digester { repr }),
        }
    }
}

impl traits::Digester for Digester {
    fn update(&mut self, bytes: &[u8]) {
        match &mut self.repr {
            DigesterRepr::Md5(digester) => digester.update(bytes),
            DigesterRepr::Sha1(digester) => digester.update(bytes),
            DigesterRepr::Sha2(digester) => digester.update(bytes),
            DigesterRepr::Keccak(digester) => digester.update(bytes),
            DigesterRepr::Blake2b(digester) => digester.update(bytes),
            DigesterRepr::Blake2s(digester) => digester.update(bytes),
            DigesterRepr::Blake3(digester) => digester.update(bytes),
            DigesterRepr::Crc32(digester) => digester.update(bytes),
        }
    }

    fn digest(self, buf: &mut impl BufMut) {
        match self.repr {
            DigesterRepr::Md5(digester) => digester.digest(buf),
            DigesterRepr::Sha1(digester) => digester.digest(buf),
            DigesterRepr::Sha2(digester) => digester.digest(buf),
            DigesterRepr::Keccak(digester) => digester.digest(buf),
            DigesterRepr::Blake2b(digester) => digester.digest(buf),
            DigesterRepr::Blake2s(digester) => digester.digest(buf),
            DigesterRepr::Blake3(digester) => digester.digest(buf),
            DigesterRepr::Crc32(digester) => digester.digest(buf),
        }
    }

    fn digest_length(&self) -> usize {
        match &self.repr {
            DigesterRepr::Md5(digester) => digester.digest_length(),
            DigesterRepr::Sha1(digester) => digester.digest_length(),
            DigesterRepr::Sha2(digester) => digester.digest_length(),
            DigesterRepr::Keccak(digester) => digester.digest_length(),
            DigesterRepr::Blake2b(digester) => digester.digest_length(),
            DigesterRepr::Blake2s(digester) => digester.digest_length(),
            DigesterRepr::Blake3(digester) => digester.digest_length(),
            DigesterRepr::Crc32(digester) => digester.digest_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::traits::{Algorithm as _, Digester as _};
    use super::*;
    use crate::evp::AlgorithmId;

    fn digest_hex(algorithm: &Algorithm, chunks: &[&[u8]]) -> String {
        let mut digester = algorithm.digester();
        for chunk in chunks {
            digester.update(chunk);
        }
        assert_eq!(algorithm.digest_length(), digester.digest_length());
        let mut vec = Vec::new();
        digester.digest(&mut vec);
        assert_eq!(algorithm.digest_length(), vec.len());
        hex::encode(vec)
    }

    #[test]
    fn test_default_lengths() {
        for id in AlgorithmId::iter() {
            let descriptor = id.descriptor();
            let algorithm = Algorithm::new(descriptor).unwrap();
            assert_eq!(descriptor.digest_length(), algorithm.digest_length(), "{}", id);
            assert_eq!(descriptor.is_sponge(), algorithm.keccak().is_some(), "{}", id);
        }
    }

    #[test]
    fn test_split_updates() {
        for id in AlgorithmId::iter() {
            let algorithm = Algorithm::new(id.descriptor()).unwrap();
            let whole = digest_hex(&algorithm, &[b"hello world"]);
            assert_eq!(whole, digest_hex(&algorithm, &[b"hello", b" ", b"", b"world"]), "{}", id);

            let mut vec = Vec::new();
            algorithm.oneshot(b"hello world", &mut vec);
            assert_eq!(whole, hex::encode(vec), "{}", id);
        }
    }

    #[test]
    fn test_fixed_length() {
        let algorithm = Algorithm::new(AlgorithmId::Sha2_256.descriptor()).unwrap();
        let err = algorithm.with_digest_length(16).err().unwrap();
        assert_eq!(ErrorKind::InvalidConfiguration, err.kind());
        let err = algorithm.with_keccak_rate(136).err().unwrap();
        assert_eq!(ErrorKind::InvalidConfiguration, err.kind());
    }

    #[test]
    fn test_xof() {
        let algorithm = Algorithm::new(AlgorithmId::Sha3_256.descriptor()).unwrap();
        assert!(!algorithm.is_xof());
        assert!(algorithm.with_keccak_custom(true).unwrap().is_xof());
        assert!(Algorithm::new(AlgorithmId::Shake128.descriptor()).unwrap().is_xof());
        assert!(Algorithm::new(AlgorithmId::Blake3.descriptor()).unwrap().is_xof());

        let algorithm = Algorithm::new(AlgorithmId::Md5.descriptor()).unwrap();
        assert!(!algorithm.is_xof());
        let digester = algorithm.digester().finalize_xof().err().unwrap();
        let mut vec = Vec::new();
        digester.digest(&mut vec);
        assert_eq!("d41d8cd98f00b204e9800998ecf8427e", hex::encode(vec));
    }

    #[test]
    fn test_variable_length() {
        let algorithm = Algorithm::new(AlgorithmId::Blake2b.descriptor()).unwrap().with_digest_length(32).unwrap();
        assert_eq!(32, algorithm.digest_length());
        let algorithm = Algorithm::new(AlgorithmId::Blake3.descriptor()).unwrap().with_digest_length(64).unwrap();
        assert_eq!(
            "ea8f163db38682925e4491c5e58d4bb3506ef8c14eb78a86e908c5624a67200fe992405f0d785b599a2e3387f6d34d01faccfeb22fb697ef3fd53541241a338c",
            digest_hex(&algorithm, &[b"he", b"llo"])
        );
    }

    #[test]
    fn test_context_size() {
        assert!(context_size(Family::Blake3) > context_size(Family::Crc32));
        let params = crate::evp::SpongeParams { rate: 136, suffix: crate::sponge::SHA3_SUFFIX, xof: false };
        assert!(context_size(Family::Sponge(params)) >= 200);
    }
}

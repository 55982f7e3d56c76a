use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use strum::{EnumCount, IntoEnumIterator};

use super::errors::{reject, ErrorKind, HashError, Result};
use crate::digest::{
    self,
    Sha2Variant,
    BLAKE2B_BLOCK_SIZE,
    BLAKE2B_MAX_DIGEST_LENGTH,
    BLAKE2S_BLOCK_SIZE,
    BLAKE2S_MAX_DIGEST_LENGTH,
    BLAKE3_BLOCK_SIZE,
    BLAKE3_DIGEST_LENGTH,
    CRC32_DIGEST_LENGTH,
    MD5_BLOCK_SIZE,
    MD5_DIGEST_LENGTH,
    SHA1_BLOCK_SIZE,
    SHA1_DIGEST_LENGTH,
};
use crate::sponge::{KECCAK_SUFFIX, SHA3_SUFFIX, SHAKE_SUFFIX};

/// Identifier of a supported digest algorithm.
///
/// [Display] renders the canonical name, which is stable.
///
/// [Display]: std::fmt::Display
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount
)]
#[repr(u8)]
pub enum AlgorithmId {
    #[strum(serialize = "md5")]
    Md5,
    #[strum(serialize = "sha1")]
    Sha1,
    #[strum(serialize = "sha2-224")]
    Sha2_224,
    #[strum(serialize = "sha2-256")]
    Sha2_256,
    #[strum(serialize = "sha2-384")]
    Sha2_384,
    #[strum(serialize = "sha2-512")]
    Sha2_512,
    #[strum(serialize = "sha2-512/224")]
    Sha2_512_224,
    #[strum(serialize = "sha2-512/256")]
    Sha2_512_256,
    #[strum(serialize = "sha3-224")]
    Sha3_224,
    #[strum(serialize = "sha3-256")]
    Sha3_256,
    #[strum(serialize = "sha3-384")]
    Sha3_384,
    #[strum(serialize = "sha3-512")]
    Sha3_512,
    #[strum(serialize = "keccak-224")]
    Keccak224,
    #[strum(serialize = "keccak-256")]
    Keccak256,
    #[strum(serialize = "keccak-384")]
    Keccak384,
    #[strum(serialize = "keccak-512")]
    Keccak512,
    #[strum(serialize = "shake128")]
    Shake128,
    #[strum(serialize = "shake256")]
    Shake256,
    #[strum(serialize = "blake2b")]
    Blake2b,
    #[strum(serialize = "blake2s")]
    Blake2s,
    #[strum(serialize = "blake3")]
    Blake3,
    #[strum(serialize = "crc32")]
    Crc32,
}

impl AlgorithmId {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn descriptor(self) -> &'static Descriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Resolves a name case-insensitively, ignoring surrounding whitespace.
    pub fn lookup(name: &str) -> Option<AlgorithmId> {
        NAMES.get(normalize(name).as_str()).copied()
    }
}

impl FromStr for AlgorithmId {
    type Err = HashError;

    fn from_str(name: &str) -> Result<AlgorithmId> {
        match AlgorithmId::lookup(name) {
            Some(id) => Ok(id),
            None => Err(reject(ErrorKind::UnknownAlgorithm, format!("{:?}", name))),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

const ALIASES: [(&str, AlgorithmId); 6] = [
    ("sha224", AlgorithmId::Sha2_224),
    ("sha256", AlgorithmId::Sha2_256),
    ("sha384", AlgorithmId::Sha2_384),
    ("sha512", AlgorithmId::Sha2_512),
    ("sha512/224", AlgorithmId::Sha2_512_224),
    ("sha512/256", AlgorithmId::Sha2_512_256),
];

lazy_static! {
    static ref NAMES: HashMap<&'static str, AlgorithmId> = {
        let mut names: HashMap<_, _> = AlgorithmId::iter().map(|id| (id.name(), id)).collect();
        names.extend(ALIASES);
        names
    };
}

/// Sponge parameters of a Keccak family member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpongeParams {
    pub rate: usize,
    pub suffix: u8,
    /// Natively extendable output, always in custom mode.
    pub xof: bool,
}

/// Adapter family an algorithm is implemented by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Family {
    Md5,
    Sha1,
    Sha2(Sha2Variant),
    Sponge(SpongeParams),
    Blake2b,
    Blake2s,
    Blake3,
    Crc32,
}

/// Immutable per-algorithm record.
#[derive(Debug)]
pub struct Descriptor {
    id: AlgorithmId,
    family: Family,
    digest_length: usize,
    block_size: usize,
    context_size: usize,
}

impl Descriptor {
    const fn new(id: AlgorithmId, family: Family, digest_length: usize, block_size: usize) -> Descriptor {
        Descriptor { id, family, digest_length, block_size, context_size: digest::context_size(family) }
    }

    const fn sha2(id: AlgorithmId, variant: Sha2Variant) -> Descriptor {
        Descriptor::new(id, Family::Sha2(variant), variant.digest_length(), variant.block_size())
    }

    const fn sponge(id: AlgorithmId, digest_length: usize, suffix: u8) -> Descriptor {
        let rate = crate::sponge::WIDTH - 2 * digest_length;
        Descriptor::new(id, Family::Sponge(SpongeParams { rate, suffix, xof: false }), digest_length, rate)
    }

    const fn shake(id: AlgorithmId, rate: usize, digest_length: usize) -> Descriptor {
        let params = SpongeParams { rate, suffix: SHAKE_SUFFIX, xof: true };
        Descriptor::new(id, Family::Sponge(params), digest_length, rate)
    }

    pub fn id(&self) -> AlgorithmId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Default digest length in bytes.
    pub fn digest_length(&self) -> usize {
        self.digest_length
    }

    /// Input block size in bytes, the rate for sponge members.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Bytes of streaming state a handle of this algorithm holds.
    pub fn context_size(&self) -> usize {
        self.context_size
    }

    pub fn sponge_params(&self) -> Option<SpongeParams> {
        match self.family {
            Family::Sponge(params) => Some(params),
            _ => None,
        }
    }

    pub fn is_sponge(&self) -> bool {
        matches!(self.family, Family::Sponge(_))
    }

    /// Whether the digest length may be configured.
    pub fn is_variable_length(&self) -> bool {
        matches!(self.family, Family::Sponge(_) | Family::Blake2b | Family::Blake2s | Family::Blake3)
    }
}

/// Descriptors indexed by [AlgorithmId] discriminant.
pub static DESCRIPTORS: [Descriptor; AlgorithmId::COUNT] = [
    Descriptor::new(AlgorithmId::Md5, Family::Md5, MD5_DIGEST_LENGTH, MD5_BLOCK_SIZE),
    Descriptor::new(AlgorithmId::Sha1, Family::Sha1, SHA1_DIGEST_LENGTH, SHA1_BLOCK_SIZE),
    Descriptor::sha2(AlgorithmId::Sha2_224, Sha2Variant::Sha224),
    Descriptor::sha2(AlgorithmId::Sha2_256, Sha2Variant::Sha256),
    Descriptor::sha2(AlgorithmId::Sha2_384, Sha2Variant::Sha384),
    Descriptor::sha2(AlgorithmId::Sha2_512, Sha2Variant::Sha512),
    Descriptor::sha2(AlgorithmId::Sha2_512_224, Sha2Variant::Sha512_224),
    Descriptor::sha2(AlgorithmId::Sha2_512_256, Sha2Variant::Sha512_256),
    Descriptor::sponge(AlgorithmId::Sha3_224, 28, SHA3_SUFFIX),
    Descriptor::sponge(AlgorithmId::Sha3_256, 32, SHA3_SUFFIX),
    Descriptor::sponge(AlgorithmId::Sha3_384, 48, SHA3_SUFFIX),
    Descriptor::sponge(AlgorithmId::Sha3_512, 64, SHA3_SUFFIX),
    Descriptor::sponge(AlgorithmId::Keccak224, 28, KECCAK_SUFFIX),
    Descriptor::sponge(AlgorithmId::Keccak256, 32, KECCAK_SUFFIX),
    Descriptor::sponge(AlgorithmId::Keccak384, 48, KECCAK_SUFFIX),
    Descriptor::sponge(AlgorithmId::Keccak512, 64, KECCAK_SUFFIX),
    Descriptor::shake(AlgorithmId::Shake128, 168, 32),
    Descriptor::shake(AlgorithmId::Shake256, 136, 64),
    Descriptor::new(AlgorithmId::Blake2b, Family::Blake2b, BLAKE2B_MAX_DIGEST_LENGTH, BLAKE2B_BLOCK_SIZE),
    Descriptor::new(AlgorithmId::Blake2s, Family::Blake2s, BLAKE2S_MAX_DIGEST_LENGTH, BLAKE2S_BLOCK_SIZE),
    Descriptor::new(AlgorithmId::Blake3, Family::Blake3, BLAKE3_DIGEST_LENGTH, BLAKE3_BLOCK_SIZE),
    Descriptor::new(AlgorithmId::Crc32, Family::Crc32, CRC32_DIGEST_LENGTH, 1),
];

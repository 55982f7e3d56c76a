use super::descriptor::AlgorithmId;
use super::errors::{reject, ErrorKind, Result};
use crate::digest::Algorithm;
use crate::sponge::WIDTH;

/// Options to construct a configured [Hasher](super::Hasher).
///
/// Settings are applied in a fixed order: custom mode, suffix, digest length and then rate.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct HasherOptions {
    id: AlgorithmId,
    digest_length: Option<usize>,
    keccak_rate: Option<usize>,
    keccak_custom: Option<bool>,
    keccak_suffix: Option<u8>,
}

impl HasherOptions {
    /// Constructs options for algorithm's default configuration.
    pub fn new(id: AlgorithmId) -> HasherOptions {
        HasherOptions { id, digest_length: None, keccak_rate: None, keccak_custom: None, keccak_suffix: None }
    }

    pub fn by_name(name: &str) -> Result<HasherOptions> {
        Ok(HasherOptions::new(name.parse()?))
    }

    pub fn algorithm_id(&self) -> AlgorithmId {
        self.id
    }

    pub fn digest_length(self, digest_length: usize) -> Self {
        HasherOptions { digest_length: Some(digest_length), ..self }
    }

    /// Sponge rate in bytes.
    pub fn keccak_rate(self, rate: usize) -> Self {
        HasherOptions { keccak_rate: Some(rate), ..self }
    }

    /// Decouples sponge rate from digest length.
    pub fn keccak_custom(self, custom: bool) -> Self {
        HasherOptions { keccak_custom: Some(custom), ..self }
    }

    /// Domain-separation suffix byte of sponge padding.
    pub fn keccak_suffix(self, suffix: u8) -> Self {
        HasherOptions { keccak_suffix: Some(suffix), ..self }
    }

    pub(super) fn configure(&self, algorithm: &Algorithm) -> Result<Algorithm> {
        let mut algorithm = algorithm.clone();
        if let Some(custom) = self.keccak_custom {
            algorithm = algorithm.with_keccak_custom(custom)?;
        }
        if let Some(suffix) = self.keccak_suffix {
            algorithm = algorithm.with_keccak_suffix(suffix)?;
        }
        let standard = algorithm.keccak().map_or(false, |keccak| !keccak.is_custom());
        if let (true, Some(digest_length), Some(rate)) = (standard, self.digest_length, self.keccak_rate) {
            if digest_length.checked_mul(2).and_then(|doubled| doubled.checked_add(rate)) != Some(WIDTH) {
                let msg = format!(
                    "unfulfilled sponge requirement: rate({}) + 2 * digest_length({}) == {}",
                    rate, digest_length, WIDTH
                );
                return Err(reject(ErrorKind::InvalidConfiguration, msg));
            }
        }
        if let Some(digest_length) = self.digest_length {
            algorithm = algorithm.with_digest_length(digest_length)?;
        }
        if let Some(rate) = self.keccak_rate {
            algorithm = algorithm.with_keccak_rate(rate)?;
        }
        Ok(algorithm)
    }
}

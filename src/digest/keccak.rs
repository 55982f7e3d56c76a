use bytes::BufMut;

use super::traits::{Algorithm, Digester, ExtendableDigester};
use super::xof::{put_squeezed, XofReader};
use super::MAX_XOF_LENGTH;
use crate::evp::errors::{reject, reject_static, ErrorKind, Result};
use crate::sponge::{self, Sponge, WIDTH};

/// Sponge configuration: rate, domain-separation suffix and output length.
///
/// In standard mode the digest length is tied to the rate by `rate + 2 * digest_length == 200`. Custom
/// mode decouples them so any output length may be squeezed at any valid rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeccakAlgorithm {
    rate: usize,
    suffix: u8,
    digest_length: usize,
    custom: bool,
    xof_only: bool,
}

impl KeccakAlgorithm {
    /// Standard configuration for a fixed-length member.
    pub(crate) fn standard(rate: usize, suffix: u8) -> KeccakAlgorithm {
        debug_assert!(sponge::is_valid_rate(rate) && rate < WIDTH);
        KeccakAlgorithm { rate, suffix, digest_length: (WIDTH - rate) / 2, custom: false, xof_only: false }
    }

    /// Custom configuration for a natively extendable-output member, which can not leave custom mode.
    pub(crate) fn extendable(rate: usize, suffix: u8, digest_length: usize) -> KeccakAlgorithm {
        debug_assert!(sponge::is_valid_rate(rate));
        KeccakAlgorithm { rate, suffix, digest_length, custom: true, xof_only: true }
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn suffix(&self) -> u8 {
        self.suffix
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn with_digest_length(&self, digest_length: usize) -> Result<KeccakAlgorithm> {
        if self.custom {
            if digest_length == 0 || digest_length > MAX_XOF_LENGTH {
                let msg = format!("sponge digest length {} not in 1..={}", digest_length, MAX_XOF_LENGTH);
                return Err(reject(ErrorKind::InvalidConfiguration, msg));
            }
            return Ok(KeccakAlgorithm { digest_length, ..*self });
        }
        let Some(rate) = sponge::standard_rate(digest_length) else {
            let msg = format!("sponge digest length {} has no standard rate", digest_length);
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        };
        Ok(KeccakAlgorithm { rate, digest_length, ..*self })
    }

    pub fn with_rate(&self, rate: usize) -> Result<KeccakAlgorithm> {
        if !sponge::is_valid_rate(rate) {
            let msg = format!("sponge rate {} is not a multiple of 8 in {}..={}", rate, sponge::MIN_RATE, WIDTH);
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        }
        if self.custom {
            return Ok(KeccakAlgorithm { rate, ..*self });
        }
        if rate == WIDTH {
            return Err(reject_static(ErrorKind::InvalidConfiguration, "full-width rate leaves no standard digest"));
        }
        Ok(KeccakAlgorithm { rate, digest_length: (WIDTH - rate) / 2, ..*self })
    }

    pub fn with_custom(&self, custom: bool) -> Result<KeccakAlgorithm> {
        if custom == self.custom {
            return Ok(*self);
        }
        if custom {
            return Ok(KeccakAlgorithm { custom, ..*self });
        }
        if self.xof_only {
            return Err(reject_static(ErrorKind::InvalidConfiguration, "extendable-output sponge is always custom"));
        }
        let Some(rate) = sponge::standard_rate(self.digest_length) else {
            let msg = format!("sponge digest length {} has no standard rate", self.digest_length);
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        };
        Ok(KeccakAlgorithm { rate, custom, ..*self })
    }

    pub fn with_suffix(&self, suffix: u8) -> Result<KeccakAlgorithm> {
        if !sponge::is_valid_suffix(suffix) {
            let msg = format!("sponge suffix {:#04x} not in 0x01..=0x7f", suffix);
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        }
        Ok(KeccakAlgorithm { suffix, ..*self })
    }
}

impl Algorithm for KeccakAlgorithm {
    type Digester = KeccakDigester;

    fn digester(&self) -> Self::Digester {
        KeccakDigester { sponge: Sponge::new(self.rate, self.suffix), digest_length: self.digest_length }
    }

    fn digest_length(&self) -> usize {
        self.digest_length
    }
}

#[derive(Clone)]
pub struct KeccakDigester {
    sponge: Sponge,
    digest_length: usize,
}

impl Digester for KeccakDigester {
    fn update(&mut self, bytes: &[u8]) {
        self.sponge.absorb(bytes);
    }

    fn digest(mut self, buf: &mut impl BufMut) {
        self.sponge.finalize();
        put_squeezed(buf, self.digest_length, |chunk| self.sponge.squeeze(chunk));
    }

    fn digest_length(&self) -> usize {
        self.digest_length
    }
}

impl ExtendableDigester for KeccakDigester {
    type Reader = XofReader;

    fn finalize_xof(self) -> XofReader {
        XofReader::from_sponge(self.sponge)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::traits::{Algorithm, Digester};
    use super::KeccakAlgorithm;
    use crate::evp::ErrorKind;
    use crate::sponge::{KECCAK_SUFFIX, SHA3_SUFFIX, SHAKE_SUFFIX};

    fn keccak_hex(algorithm: &KeccakAlgorithm, bytes: &[u8]) -> String {
        let mut vec = Vec::new();
        algorithm.oneshot(bytes, &mut vec);
        assert_eq!(algorithm.digest_length(), vec.len());
        hex::encode(vec)
    }

    #[test]
    fn test_standard_lengths() {
        for (rate, digest_length) in [(144, 28), (136, 32), (104, 48), (72, 64)] {
            let algorithm = KeccakAlgorithm::standard(rate, SHA3_SUFFIX);
            assert_eq!(digest_length, algorithm.digest_length());
            assert_eq!(digest_length, algorithm.digester().digest_length());
        }
    }

    #[test]
    fn test_hello() {
        assert_eq!(
            "3338be694f50c5f338814986cdf0686453a888b84f424d792af4b9202398f392",
            keccak_hex(&KeccakAlgorithm::standard(136, SHA3_SUFFIX), b"hello")
        );
        assert_eq!(
            "1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8",
            keccak_hex(&KeccakAlgorithm::standard(136, KECCAK_SUFFIX), b"hello")
        );
        assert_eq!(
            "45524ec454bcc7d4b8f74350c4a4e62809fcb49bc29df62e61b69fa4",
            keccak_hex(&KeccakAlgorithm::standard(144, KECCAK_SUFFIX), b"hello")
        );
    }

    #[test]
    fn test_digest_length_moves_rate() {
        let algorithm = KeccakAlgorithm::standard(136, SHA3_SUFFIX).with_digest_length(64).unwrap();
        assert_eq!(72, algorithm.rate());
        assert_eq!(KeccakAlgorithm::standard(72, SHA3_SUFFIX), algorithm);

        let algorithm = KeccakAlgorithm::standard(136, SHA3_SUFFIX);
        for digest_length in [0, 30, 97, 100] {
            let err = algorithm.with_digest_length(digest_length).unwrap_err();
            assert_eq!(ErrorKind::InvalidConfiguration, err.kind());
        }
    }

    #[test]
    fn test_rate_moves_digest_length() {
        let algorithm = KeccakAlgorithm::standard(136, SHA3_SUFFIX).with_rate(144).unwrap();
        assert_eq!(28, algorithm.digest_length());
        assert_eq!(
            "b87f88c72702fff1748e58b87e9141a42c0dbedc29a78cb0d4a5cd81",
            keccak_hex(&algorithm, b"hello")
        );

        let algorithm = KeccakAlgorithm::standard(136, SHA3_SUFFIX);
        for rate in [0, 4, 137, 200, 208] {
            assert_eq!(ErrorKind::InvalidConfiguration, algorithm.with_rate(rate).unwrap_err().kind());
        }
    }

    #[test]
    fn test_custom() {
        let algorithm = KeccakAlgorithm::standard(168, SHAKE_SUFFIX).with_custom(true).unwrap();
        let algorithm = algorithm.with_digest_length(32).unwrap();
        assert_eq!(168, algorithm.rate());
        assert_eq!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26", keccak_hex(&algorithm, b""));

        let algorithm = algorithm.with_rate(200).unwrap().with_digest_length(1000).unwrap();
        assert_eq!(200, algorithm.rate());
        assert_eq!(1000, keccak_hex(&algorithm, b"abc").len() / 2);

        // 1000 bytes have no standard rate.
        assert_eq!(ErrorKind::InvalidConfiguration, algorithm.with_custom(false).unwrap_err().kind());

        let algorithm = algorithm.with_digest_length(64).unwrap().with_custom(false).unwrap();
        assert_eq!(72, algorithm.rate());
        assert!(!algorithm.is_custom());
    }

    #[test]
    fn test_extendable_stays_custom() {
        let algorithm = KeccakAlgorithm::extendable(136, SHAKE_SUFFIX, 64);
        assert!(algorithm.is_custom());
        assert_eq!(ErrorKind::InvalidConfiguration, algorithm.with_custom(false).unwrap_err().kind());
        assert_eq!(algorithm, algorithm.with_custom(true).unwrap());
    }

    #[test]
    fn test_suffix() {
        let algorithm = KeccakAlgorithm::standard(136, SHA3_SUFFIX).with_suffix(KECCAK_SUFFIX).unwrap();
        assert_eq!(KeccakAlgorithm::standard(136, KECCAK_SUFFIX), algorithm);
        assert_eq!(ErrorKind::InvalidConfiguration, algorithm.with_suffix(0).unwrap_err().kind());
        assert_eq!(ErrorKind::InvalidConfiguration, algorithm.with_suffix(0x80).unwrap_err().kind());
    }
}

//! Keccak sponge over keccak-f[1600].
//!
//! A [Sponge] absorbs arbitrary input into the first `rate` bytes of a 200-byte state, pads with a
//! domain-separation suffix and squeezes output of any length. It performs no validation: callers
//! check rates and suffixes with [is_valid_rate] and [is_valid_suffix] before construction.

mod keccakf;

pub use self::keccakf::{keccak_f1600, ROUNDS};

/// Sponge width in bytes.
pub const WIDTH: usize = 200;

/// Smallest rate in bytes, one lane.
pub const MIN_RATE: usize = 8;

/// Delimited suffix of SHA-3 fixed-length digests: bits `01` followed by the first padding bit.
pub const SHA3_SUFFIX: u8 = 0x06;

/// Delimited suffix of the original Keccak submission, which pads with no suffix bits.
pub const KECCAK_SUFFIX: u8 = 0x01;

/// Delimited suffix of SHAKE extendable-output functions: bits `1111` followed by the first padding bit.
pub const SHAKE_SUFFIX: u8 = 0x1f;

/// Returns whether `rate` is a usable sponge rate in bytes.
pub const fn is_valid_rate(rate: usize) -> bool {
    rate >= MIN_RATE && rate <= WIDTH && rate % 8 == 0
}

/// Returns whether `suffix` is a delimited suffix that fits in one byte ahead of the final padding bit.
pub const fn is_valid_suffix(suffix: u8) -> bool {
    suffix != 0 && suffix < 0x80
}

/// Rate of a standard single-squeeze configuration producing `digest_length` bytes.
pub const fn standard_rate(digest_length: usize) -> Option<usize> {
    if digest_length == 0 || digest_length >= WIDTH / 2 {
        return None;
    }
    let rate = WIDTH - 2 * digest_length;
    if is_valid_rate(rate) {
        Some(rate)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Absorbing,
    Squeezing,
}

/// Keccak sponge state.
#[derive(Clone)]
pub struct Sponge {
    lanes: [u64; 25],
    rate: usize,
    suffix: u8,
    absorb_index: usize,
    squeeze_index: usize,
    phase: Phase,
}

impl Sponge {
    pub fn new(rate: usize, suffix: u8) -> Sponge {
        debug_assert!(is_valid_rate(rate), "invalid sponge rate {}", rate);
        debug_assert!(is_valid_suffix(suffix), "invalid sponge suffix {:#04x}", suffix);
        Sponge { lanes: [0; 25], rate, suffix, absorb_index: 0, squeeze_index: 0, phase: Phase::Absorbing }
    }

    /// Returns to the freshly constructed state, keeping rate and suffix.
    pub fn reset(&mut self) {
        self.lanes = [0; 25];
        self.absorb_index = 0;
        self.squeeze_index = 0;
        self.phase = Phase::Absorbing;
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn capacity(&self) -> usize {
        WIDTH - self.rate
    }

    pub fn suffix(&self) -> u8 {
        self.suffix
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn absorb(&mut self, mut bytes: &[u8]) {
        debug_assert_eq!(self.phase, Phase::Absorbing, "absorb after squeezing began");
        while !bytes.is_empty() {
            let take = (self.rate - self.absorb_index).min(bytes.len());
            xor_into_lanes(&mut self.lanes, self.absorb_index, &bytes[..take]);
            self.absorb_index += take;
            bytes = &bytes[take..];
            if self.absorb_index == self.rate {
                keccak_f1600(&mut self.lanes);
                self.absorb_index = 0;
            }
        }
    }

    /// Pads the pending block with the suffix and pad10*1, permutes and switches to squeezing.
    ///
    /// Does nothing once squeezing has begun.
    pub fn finalize(&mut self) {
        if self.phase == Phase::Squeezing {
            return;
        }
        xor_into_lanes(&mut self.lanes, self.absorb_index, &[self.suffix]);
        xor_into_lanes(&mut self.lanes, self.rate - 1, &[0x80]);
        keccak_f1600(&mut self.lanes);
        self.absorb_index = 0;
        self.squeeze_index = 0;
        self.phase = Phase::Squeezing;
    }

    /// Fills `out` with the next output bytes, finalizing first if still absorbing.
    pub fn squeeze(&mut self, mut out: &mut [u8]) {
        self.finalize();
        while !out.is_empty() {
            if self.squeeze_index == self.rate {
                keccak_f1600(&mut self.lanes);
                self.squeeze_index = 0;
            }
            let take = (self.rate - self.squeeze_index).min(out.len());
            let (head, tail) = std::mem::take(&mut out).split_at_mut(take);
            copy_from_lanes(&self.lanes, self.squeeze_index, head);
            self.squeeze_index += take;
            out = tail;
        }
    }
}

fn xor_byte(lanes: &mut [u64; 25], offset: usize, byte: u8) {
    lanes[offset / 8] ^= u64::from(byte) << (8 * (offset % 8));
}

fn xor_into_lanes(lanes: &mut [u64; 25], mut offset: usize, mut bytes: &[u8]) {
    while offset % 8 != 0 {
        let Some((&byte, rest)) = bytes.split_first() else {
            return;
        };
        xor_byte(lanes, offset, byte);
        offset += 1;
        bytes = rest;
    }
    let mut words = bytes.chunks_exact(8);
    for chunk in &mut words {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        lanes[offset / 8] ^= u64::from_le_bytes(word);
        offset += 8;
    }
    for &byte in words.remainder() {
        xor_byte(lanes, offset, byte);
        offset += 1;
    }
}

fn copy_from_lanes(lanes: &[u64; 25], offset: usize, out: &mut [u8]) {
    for (i, byte) in out.iter_mut().enumerate() {
        let position = offset + i;
        *byte = lanes[position / 8].to_le_bytes()[position % 8];
    }
}

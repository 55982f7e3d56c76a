use std::mem;

use log::debug;

use super::descriptor::{AlgorithmId, Descriptor};
use super::errors::{reject, ErrorKind, Result};
use super::options::HasherOptions;
use super::output::{self, Output};
use crate::digest::traits::{Algorithm as _, Digester as _};
use crate::digest::{Algorithm, Digester, XofReader};

/// Lifecycle state of a [Hasher].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HasherState {
    /// Nothing absorbed yet, configuration may change.
    Fresh,
    Streaming,
    Finalized,
}

/// Streaming digest handle over a runtime-selected algorithm.
///
/// A hasher exclusively owns its configuration and streaming context. Setters are accepted only while
/// [HasherState::Fresh]; [Hasher::reinit] returns to it from any state.
#[derive(Clone)]
pub struct Hasher {
    descriptor: &'static Descriptor,
    algorithm: Algorithm,
    digester: Digester,
    state: HasherState,
}

impl Hasher {
    /// Constructs hasher in algorithm's default configuration.
    pub fn new(id: AlgorithmId) -> Result<Hasher> {
        let descriptor = id.descriptor();
        let algorithm = Algorithm::new(descriptor)?;
        let hasher = Hasher::with_algorithm(descriptor, algorithm);
        debug!("{} hasher created with {} bytes context", descriptor.name(), descriptor.context_size());
        Ok(hasher)
    }

    /// Constructs hasher by algorithm name, case-insensitively.
    pub fn by_name(name: &str) -> Result<Hasher> {
        Hasher::new(name.parse()?)
    }

    /// Constructs hasher with options applied.
    pub fn with_options(options: HasherOptions) -> Result<Hasher> {
        let descriptor = options.algorithm_id().descriptor();
        let algorithm = options.configure(&Algorithm::new(descriptor)?)?;
        let hasher = Hasher::with_algorithm(descriptor, algorithm);
        debug!("{} hasher created with options {:?}", descriptor.name(), options);
        Ok(hasher)
    }

    fn with_algorithm(descriptor: &'static Descriptor, algorithm: Algorithm) -> Hasher {
        let digester = algorithm.digester();
        Hasher { descriptor, algorithm, digester, state: HasherState::Fresh }
    }

    pub fn descriptor(&self) -> &'static Descriptor {
        self.descriptor
    }

    pub fn algorithm_id(&self) -> AlgorithmId {
        self.descriptor.id()
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    pub fn state(&self) -> HasherState {
        self.state
    }

    /// Bytes [Hasher::finalize] produces in current configuration.
    pub fn digest_length(&self) -> usize {
        self.algorithm.digest_length()
    }

    /// Sponge rate, for sponge members only.
    pub fn keccak_rate(&self) -> Option<usize> {
        self.algorithm.keccak().map(|keccak| keccak.rate())
    }

    pub fn keccak_suffix(&self) -> Option<u8> {
        self.algorithm.keccak().map(|keccak| keccak.suffix())
    }

    pub fn is_keccak_custom(&self) -> bool {
        self.algorithm.keccak().map_or(false, |keccak| keccak.is_custom())
    }

    /// Whether [Hasher::finalize_xof] is available in current configuration.
    pub fn is_xof(&self) -> bool {
        self.algorithm.is_xof()
    }

    pub fn set_digest_length(&mut self, digest_length: usize) -> Result<()> {
        self.configure("digest length", |algorithm| algorithm.with_digest_length(digest_length))
    }

    pub fn set_keccak_rate(&mut self, rate: usize) -> Result<()> {
        self.configure("sponge rate", |algorithm| algorithm.with_keccak_rate(rate))
    }

    pub fn set_keccak_custom(&mut self, custom: bool) -> Result<()> {
        self.configure("sponge custom mode", |algorithm| algorithm.with_keccak_custom(custom))
    }

    pub fn set_keccak_suffix(&mut self, suffix: u8) -> Result<()> {
        self.configure("sponge suffix", |algorithm| algorithm.with_keccak_suffix(suffix))
    }

    fn configure<F>(&mut self, setting: &str, f: F) -> Result<()>
    where
        F: FnOnce(&Algorithm) -> Result<Algorithm>, {
        if self.state != HasherState::Fresh {
            let msg = format!("{} {} can not change after data absorbed or finalized", self.name(), setting);
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        }
        let algorithm = f(&self.algorithm)?;
        self.digester = algorithm.digester();
        self.algorithm = algorithm;
        debug!("{} hasher changed {}, digest length {}", self.name(), setting, self.digest_length());
        Ok(())
    }

    fn check_not_finalized(&self, operation: &str) -> Result<()> {
        if self.state == HasherState::Finalized {
            let msg = format!("{} {} on finalized hasher", self.name(), operation);
            return Err(reject(ErrorKind::AlreadyFinalized, msg));
        }
        Ok(())
    }

    /// Absorbs bytes. Empty input changes nothing.
    pub fn update(&mut self, bytes: &[u8]) -> Result<()> {
        self.check_not_finalized("update")?;
        if bytes.is_empty() {
            return Ok(());
        }
        self.digester.update(bytes);
        self.state = HasherState::Streaming;
        Ok(())
    }

    /// Produces exactly [Hasher::digest_length] bytes and moves to [HasherState::Finalized].
    pub fn finalize(&mut self) -> Result<Output> {
        self.check_not_finalized("finalize")?;
        let mut bytes = output::reserve(self.digest_length())?;
        let digester = mem::replace(&mut self.digester, self.algorithm.digester());
        digester.digest(&mut bytes);
        self.state = HasherState::Finalized;
        debug!("{} hasher finalized {} bytes digest", self.name(), bytes.len());
        Ok(Output::new(bytes))
    }

    /// Finalizes into a reader of unbounded output.
    pub fn finalize_xof(&mut self) -> Result<XofReader> {
        self.check_not_finalized("finalize_xof")?;
        if !self.is_xof() {
            let msg = format!("{} has no extendable output in current configuration", self.name());
            return Err(reject(ErrorKind::InvalidConfiguration, msg));
        }
        let digester = mem::replace(&mut self.digester, self.algorithm.digester());
        match digester.finalize_xof() {
            Ok(reader) => {
                self.state = HasherState::Finalized;
                debug!("{} hasher finalized to extendable output", self.name());
                Ok(reader)
            },
            Err(digester) => {
                self.digester = digester;
                let msg = format!("{} digester has no extendable output", self.name());
                Err(reject(ErrorKind::InvalidConfiguration, msg))
            },
        }
    }

    /// Finalizes and compares digest against `expected` in constant time.
    pub fn verify(&mut self, expected: &[u8]) -> Result<bool> {
        let output = self.finalize()?;
        Ok(output.ct_eq(expected))
    }

    /// Discards absorbed data, keeping configuration.
    pub fn reinit(&mut self) {
        self.digester = self.algorithm.digester();
        self.state = HasherState::Fresh;
        debug!("{} hasher reinitialized", self.name());
    }

    /// Releases the hasher and its context.
    pub fn release(self) {
        debug!("{} hasher released in state {:?}", self.name(), self.state);
    }
}

//! Runtime-selected digest handles over the algorithm descriptor table.

mod descriptor;
pub(crate) mod errors;
mod hasher;
mod options;
mod output;

pub use self::descriptor::{AlgorithmId, Descriptor, Family, SpongeParams, DESCRIPTORS};
pub use self::errors::{ErrorKind, HashError, Result};
pub use self::hasher::{Hasher, HasherState};
pub use self::options::HasherOptions;
pub use self::output::Output;
use crate::digest::traits::Algorithm as _;
use crate::digest::Algorithm;

/// Digests `bytes` in one call with algorithm's default configuration.
pub fn hash(id: AlgorithmId, bytes: &[u8]) -> Result<Output> {
    let algorithm = Algorithm::new(id.descriptor())?;
    let mut digest = output::reserve(algorithm.digest_length())?;
    algorithm.oneshot(bytes, &mut digest);
    Ok(Output::new(digest))
}

/// Same as [hash] with algorithm resolved by name.
pub fn hash_by_name(name: &str, bytes: &[u8]) -> Result<Output> {
    hash(name.parse()?, bytes)
}

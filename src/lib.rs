//! Streaming digests selected at runtime behind one handle type.
//!
//! ```
//! use hasha::{AlgorithmId, Hasher};
//!
//! let mut hasher = Hasher::new(AlgorithmId::Sha3_256).unwrap();
//! hasher.update(b"hel").unwrap();
//! hasher.update(b"lo").unwrap();
//! let digest = hasher.finalize().unwrap();
//! assert_eq!("3338be694f50c5f338814986cdf0686453a888b84f424d792af4b9202398f392", digest.to_hex());
//! ```

mod digest;
mod error;
mod evp;
mod marker;
pub mod prelude;
pub mod report;
pub mod sponge;

pub use digest::{Sha2Variant, XofReader, MAX_XOF_LENGTH};
pub use error::Error;
pub use evp::{
    hash,
    hash_by_name,
    AlgorithmId,
    Descriptor,
    ErrorKind,
    Family,
    HashError,
    Hasher,
    HasherOptions,
    HasherState,
    Output,
    Result,
    SpongeParams,
    DESCRIPTORS,
};

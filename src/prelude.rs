//! Export types with less chance to conflict with other crates in case of no renaming.
pub use crate::{
    AlgorithmId,
    Error as HashaError,
    ErrorKind as HashaErrorKind,
    Hasher,
    HasherOptions,
    HasherState,
    Output as DigestOutput,
    XofReader,
};

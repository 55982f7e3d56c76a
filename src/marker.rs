use static_assertions::assert_impl_all;

use crate::digest::XofReader;
use crate::evp::{AlgorithmId, Descriptor, HashError, Hasher, HasherOptions, Output};

assert_impl_all!(Hasher: Send, Sync, Clone);
assert_impl_all!(XofReader: Send, Sync, Clone);
assert_impl_all!(Output: Send, Sync, Eq);
assert_impl_all!(HasherOptions: Send, Sync);
assert_impl_all!(AlgorithmId: Send, Sync, Copy, std::hash::Hash);
assert_impl_all!(Descriptor: Send, Sync);
assert_impl_all!(HashError: Send, Sync, std::error::Error);

//! Incremental digest and MAC accumulators with iterated finalization
//!
//! Feed bytes, strings, files or streams into an accumulator bound to a
//! digest or HMAC algorithm, then `finalize`, optionally re-applying the
//! digest to its own output a number of times.

#![forbid(unsafe_code)]

pub mod accumulator;
pub mod algorithm;
pub mod config;
pub mod engine;
pub mod error;
mod finalize;
pub mod hash_result;
pub mod key;
pub mod oneshot;
pub mod passes;

// Re-export error types
pub use error::{HashError, HashErrorKind, Result};

pub use accumulator::{
    Accumulator, Authentication, ByteHash, ByteMac, FileHash, FileMac, Fragmenting,
    FragmentingHash, FragmentingMac, Hashing, Immediate, ImmediateHash, ImmediateMac, Kind, Mode,
    StreamHash, StreamMac, StringHash, StringMac,
};
pub use algorithm::{AlgorithmDescriptor, HashAlgorithm, MacAlgorithm};
pub use config::AccumulatorConfig;
pub use engine::{Engine, EngineFactory, RustCryptoFactory};
pub use hash_result::{Finalized, HashResult};
pub use key::MacKey;
pub use passes::HashPasses;

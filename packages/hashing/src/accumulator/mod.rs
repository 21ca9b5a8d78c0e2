//! Accumulators over digest and MAC engines
//!
//! [`Accumulator`] is generic over how sources are absorbed ([`Mode`]) and
//! over what the engine computes ([`Kind`]):
//!
//! - [`Immediate`]: byte and string sources are fed straight into the engine.
//! - [`Fragmenting`]: each file or stream source is digested on its own and
//!   queued; fragments are merged at finalize time.
//!
//! ```
//! use accrue_hashing::{HashAlgorithm, StringHash};
//!
//! let mut hash = StringHash::new(HashAlgorithm::Sha256)?;
//! let digest = hash.add_str("abc").finalize();
//! assert_eq!(
//!     digest.to_hex().as_deref(),
//!     Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
//! );
//! # Ok::<(), accrue_hashing::HashError>(())
//! ```

mod fragmenting;
mod immediate;

pub use fragmenting::Fragmenting;
pub use immediate::Immediate;

use crate::Result;
use crate::algorithm::AlgorithmDescriptor;
use crate::config::AccumulatorConfig;
use crate::engine::{Engine, EngineFactory, RustCryptoFactory};
use crate::hash_result::Finalized;
use crate::key::MacKey;
use crate::passes::HashPasses;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// How an accumulator absorbs its sources
pub trait Mode: sealed::Sealed + Default + Send {
    /// Mode name used in diagnostics
    const NAME: &'static str;

    #[doc(hidden)]
    fn discard(&mut self);

    #[doc(hidden)]
    fn merge(&mut self, engine: &mut dyn Engine, times: i32) -> Option<Vec<u8>>;
}

/// What the engine computes
pub trait Kind: sealed::Sealed + Send {
    /// `times` used by [`Accumulator::finalize`]
    const DEFAULT_TIMES: i32;
    /// Kind name used in diagnostics
    const NAME: &'static str;
}

/// Unkeyed digest accumulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Hashing;

/// Keyed authentication (MAC) accumulation
#[derive(Debug, Clone, Copy, Default)]
pub struct Authentication;

impl sealed::Sealed for Hashing {}
impl sealed::Sealed for Authentication {}

impl Kind for Hashing {
    const DEFAULT_TIMES: i32 = 0;
    const NAME: &'static str = "hash";
}

impl Kind for Authentication {
    const DEFAULT_TIMES: i32 = 1;
    const NAME: &'static str = "mac";
}

/// Incremental digest or MAC accumulator.
///
/// Owns its engine exclusively. Not meant for concurrent use: every operation
/// takes `&mut self` and runs to completion on the caller's thread.
pub struct Accumulator<M: Mode, K: Kind> {
    descriptor: AlgorithmDescriptor,
    engine: Box<dyn Engine>,
    empty: bool,
    mode: M,
    chunk_size: usize,
    _kind: PhantomData<K>,
}

/// Byte and string hashing
pub type ImmediateHash = Accumulator<Immediate, Hashing>;
/// File and stream hashing
pub type FragmentingHash = Accumulator<Fragmenting, Hashing>;
/// Byte and string authentication
pub type ImmediateMac = Accumulator<Immediate, Authentication>;
/// File and stream authentication
pub type FragmentingMac = Accumulator<Fragmenting, Authentication>;

/// Hash accumulator for byte sources
pub type ByteHash = ImmediateHash;
/// Hash accumulator for string sources
pub type StringHash = ImmediateHash;
/// Hash accumulator for file sources
pub type FileHash = FragmentingHash;
/// Hash accumulator for byte stream sources
pub type StreamHash = FragmentingHash;
/// MAC accumulator for byte sources
pub type ByteMac = ImmediateMac;
/// MAC accumulator for string sources
pub type StringMac = ImmediateMac;
/// MAC accumulator for file sources
pub type FileMac = FragmentingMac;
/// MAC accumulator for byte stream sources
pub type StreamMac = FragmentingMac;

impl<M: Mode> Accumulator<M, Hashing> {
    /// Hash accumulator backed by [`RustCryptoFactory`]
    ///
    /// # Errors
    ///
    /// Returns `HashError::AlgorithmUnavailable` if the algorithm cannot be
    /// supplied, or the descriptor's override if one is set.
    pub fn new(algorithm: impl Into<AlgorithmDescriptor>) -> Result<Self> {
        Self::with_config(algorithm, &AccumulatorConfig::default())
    }

    /// Hash accumulator using `config` for overrides and read buffering
    ///
    /// # Errors
    ///
    /// As [`Self::new`].
    pub fn with_config(
        algorithm: impl Into<AlgorithmDescriptor>,
        config: &AccumulatorConfig,
    ) -> Result<Self> {
        Self::with_factory(algorithm, config, &RustCryptoFactory)
    }

    /// Hash accumulator resolving its engine through `factory`
    ///
    /// # Errors
    ///
    /// Propagates the factory's error, translated through the override.
    pub fn with_factory<F: EngineFactory + ?Sized>(
        algorithm: impl Into<AlgorithmDescriptor>,
        config: &AccumulatorConfig,
        factory: &F,
    ) -> Result<Self> {
        let descriptor = config.resolve(algorithm.into());
        let engine = factory
            .digest(&descriptor)
            .map_err(|e| unresolved(&descriptor, e))?;
        Ok(Self::assemble(descriptor, engine, config))
    }
}

impl<M: Mode> Accumulator<M, Authentication> {
    /// MAC accumulator keyed with `key`, backed by [`RustCryptoFactory`]
    ///
    /// # Errors
    ///
    /// Returns `HashError::AlgorithmUnavailable` (or the descriptor's
    /// override) if the algorithm cannot be supplied, and
    /// `HashError::InvalidKey` if the engine rejects the key.
    pub fn new(algorithm: impl Into<AlgorithmDescriptor>, key: &MacKey) -> Result<Self> {
        Self::with_config(algorithm, key, &AccumulatorConfig::default())
    }

    /// MAC accumulator using `config` for overrides and read buffering
    ///
    /// # Errors
    ///
    /// As [`Self::new`].
    pub fn with_config(
        algorithm: impl Into<AlgorithmDescriptor>,
        key: &MacKey,
        config: &AccumulatorConfig,
    ) -> Result<Self> {
        Self::with_factory(algorithm, key, config, &RustCryptoFactory)
    }

    /// MAC accumulator resolving its engine through `factory`
    ///
    /// # Errors
    ///
    /// Propagates the factory's error, translated through the override.
    pub fn with_factory<F: EngineFactory + ?Sized>(
        algorithm: impl Into<AlgorithmDescriptor>,
        key: &MacKey,
        config: &AccumulatorConfig,
        factory: &F,
    ) -> Result<Self> {
        let descriptor = config.resolve(algorithm.into());
        let engine = factory
            .keyed(&descriptor, key)
            .map_err(|e| unresolved(&descriptor, e))?;
        Ok(Self::assemble(descriptor, engine, config))
    }
}

fn unresolved(descriptor: &AlgorithmDescriptor, err: crate::HashError) -> crate::HashError {
    tracing::warn!(algorithm = descriptor.name(), error = %err, "engine factory rejected algorithm");
    descriptor.translate(err)
}

impl<M: Mode, K: Kind> Accumulator<M, K> {
    fn assemble(
        descriptor: AlgorithmDescriptor,
        engine: Box<dyn Engine>,
        config: &AccumulatorConfig,
    ) -> Self {
        tracing::debug!(
            algorithm = descriptor.name(),
            kind = K::NAME,
            mode = M::NAME,
            "accumulator created"
        );
        Self {
            descriptor,
            engine,
            empty: true,
            mode: M::default(),
            chunk_size: config.chunk_size(),
            _kind: PhantomData,
        }
    }

    /// Descriptor the accumulator was bound to
    #[must_use]
    pub fn algorithm(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    /// Length of a finalized value in bytes
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.engine.output_size()
    }

    /// Whether nothing has been added since creation, `clear`, or the last
    /// finalize that produced a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Discard everything accumulated, keeping the algorithm binding
    pub fn clear(&mut self) -> &mut Self {
        self.mode.discard();
        self.engine.reset();
        self.empty = true;
        tracing::debug!(algorithm = self.descriptor.name(), "accumulator cleared");
        self
    }

    /// Finalize with the kind's default `times` (0 for hashing, 1 for MACs)
    pub fn finalize(&mut self) -> Finalized {
        self.finalize_times(K::DEFAULT_TIMES)
    }

    /// Finalize, applying the digest `times` times in total.
    ///
    /// `times <= 1` yields the plain digest of everything added. Returns an
    /// empty container, leaving state untouched, when nothing was added.
    pub fn finalize_times(&mut self, times: i32) -> Finalized {
        if self.empty {
            tracing::trace!(algorithm = self.descriptor.name(), "finalize on empty accumulator");
            return Finalized::none();
        }
        let value = self.mode.merge(self.engine.as_mut(), times);
        self.empty = true;
        Finalized::from(value)
    }

    /// Finalize with a named iteration preset
    pub fn finalize_passes(&mut self, passes: HashPasses) -> Finalized {
        self.finalize_times(passes.times())
    }
}

impl<M: Mode + std::fmt::Debug, K: Kind> std::fmt::Debug for Accumulator<M, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accumulator")
            .field("algorithm", &self.descriptor.name())
            .field("kind", &K::NAME)
            .field("empty", &self.empty)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

//! Digest and keyed authentication engines
//!
//! Accumulators never implement a primitive. They drive an opaque [`Engine`]
//! obtained from an [`EngineFactory`].

mod rustcrypto;

pub use rustcrypto::RustCryptoFactory;

use crate::Result;
use crate::algorithm::AlgorithmDescriptor;
use crate::key::MacKey;

/// Stateful digest or MAC engine
pub trait Engine: Send {
    /// Logical algorithm name
    fn algorithm(&self) -> &str;

    /// Update the running value with `data`
    fn feed(&mut self, data: &[u8]);

    /// Finalize the running value and reset to the initial state.
    ///
    /// A keyed engine keeps its key across resets.
    fn extract(&mut self) -> Vec<u8>;

    /// Discard any fed data
    fn reset(&mut self);

    /// Length of an extracted value in bytes
    fn output_size(&self) -> usize;
}

/// Resolves algorithm descriptors into engines
pub trait EngineFactory {
    /// Unkeyed digest engine for `descriptor`
    ///
    /// # Errors
    ///
    /// Returns `HashError::AlgorithmUnavailable` if the name cannot be resolved.
    fn digest(&self, descriptor: &AlgorithmDescriptor) -> Result<Box<dyn Engine>>;

    /// Keyed authentication engine for `descriptor`, initialised with `key`
    ///
    /// # Errors
    ///
    /// Returns `HashError::AlgorithmUnavailable` if the name cannot be resolved,
    /// or `HashError::InvalidKey` if the engine rejects the key.
    fn keyed(&self, descriptor: &AlgorithmDescriptor, key: &MacKey) -> Result<Box<dyn Engine>>;
}

impl<F: EngineFactory + ?Sized> EngineFactory for &F {
    fn digest(&self, descriptor: &AlgorithmDescriptor) -> Result<Box<dyn Engine>> {
        (**self).digest(descriptor)
    }

    fn keyed(&self, descriptor: &AlgorithmDescriptor, key: &MacKey) -> Result<Box<dyn Engine>> {
        (**self).keyed(descriptor, key)
    }
}

//! Accumulator configuration and the algorithm override table

use crate::algorithm::AlgorithmDescriptor;
use crate::error::{HashError, HashErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulator configuration.
///
/// ```json
/// { "read_chunk_size": 65536, "overrides": { "MD2": "configuration" } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorConfig {
    /// Buffer size used while consuming file and stream sources, clamped to
    /// `1..=MAX_READ_CHUNK_SIZE`
    #[serde(default = "default_read_chunk_size")]
    pub read_chunk_size: usize,
    /// Algorithm name to substitute error kind, raised when the name cannot be resolved
    #[serde(default)]
    pub overrides: BTreeMap<String, HashErrorKind>,
}

/// Largest read buffer an accumulator will allocate
pub const MAX_READ_CHUNK_SIZE: usize = 1 << 20;

fn default_read_chunk_size() -> usize {
    8 * 1024
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            read_chunk_size: default_read_chunk_size(),
            overrides: BTreeMap::new(),
        }
    }
}

impl AccumulatorConfig {
    /// Parse a JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns `HashError::Configuration` if the document is not valid JSON or
    /// names an unknown error kind.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HashError::Configuration(e.to_string()))
    }

    /// Register an override for `name`
    #[must_use]
    pub fn with_override(mut self, name: impl Into<String>, kind: HashErrorKind) -> Self {
        self.overrides.insert(name.into(), kind);
        self
    }

    /// Descriptor for `name` carrying its configured override, if any
    #[must_use]
    pub fn descriptor(&self, name: &str) -> AlgorithmDescriptor {
        let descriptor = AlgorithmDescriptor::new(name.to_owned());
        match self.overrides.get(name) {
            Some(kind) => descriptor.with_override(*kind),
            None => descriptor,
        }
    }

    /// Apply the override table to an existing descriptor.
    ///
    /// An override already on the descriptor wins over the table.
    #[must_use]
    pub fn resolve(&self, descriptor: AlgorithmDescriptor) -> AlgorithmDescriptor {
        if descriptor.override_error().is_some() {
            return descriptor;
        }
        match self.overrides.get(descriptor.name()) {
            Some(kind) => descriptor.with_override(*kind),
            None => descriptor,
        }
    }

    pub(crate) fn chunk_size(&self) -> usize {
        self.read_chunk_size.clamp(1, MAX_READ_CHUNK_SIZE)
    }
}

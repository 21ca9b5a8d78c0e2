//! Extracted digest values and the finalization result container

/// Digest or MAC bytes produced by one finalization
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashResult(Vec<u8>);

impl HashResult {
    /// Wrap extracted engine output
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Give up the wrapper
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.0
    }

    /// Lowercase hex
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Standard padded base64
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{Engine as _, engine::general_purpose::STANDARD};
        STANDARD.encode(&self.0)
    }

    /// Unpadded URL-safe base64
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.0)
    }

    /// Output length in bytes, equal to the engine's output size
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Only true for a zero-length engine output
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for HashResult {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.0
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Outcome of a `finalize` call.
///
/// Holds no value when nothing was accumulated since construction, the last
/// `clear`, or the last successful finalize. Never mutated after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Finalized {
    value: Option<HashResult>,
}

impl Finalized {
    /// Container without a value
    #[must_use]
    pub fn none() -> Self {
        Self { value: None }
    }

    /// Container holding `bytes`
    #[must_use]
    pub fn some(bytes: Vec<u8>) -> Self {
        Self {
            value: Some(HashResult::new(bytes)),
        }
    }

    /// Borrow the value, if any
    #[must_use]
    pub fn value(&self) -> Option<&HashResult> {
        self.value.as_ref()
    }

    /// Whether a value is present
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Raw bytes of the value, if any
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.value.as_ref().map(HashResult::as_bytes)
    }

    /// Hex encoding of the value, if any
    #[must_use]
    pub fn to_hex(&self) -> Option<String> {
        self.value.as_ref().map(HashResult::to_hex)
    }

    /// Take the value out of the container
    #[must_use]
    pub fn into_option(self) -> Option<HashResult> {
        self.value
    }

    /// Take the raw bytes out of the container
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        self.value.map(HashResult::to_vec)
    }
}

impl From<Option<Vec<u8>>> for Finalized {
    fn from(value: Option<Vec<u8>>) -> Self {
        Self {
            value: value.map(HashResult::new),
        }
    }
}

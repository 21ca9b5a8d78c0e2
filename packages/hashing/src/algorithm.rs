//! Logical algorithm names and their descriptors

use crate::error::{HashError, HashErrorKind};
use std::borrow::Cow;

/// Immutable binding of a logical algorithm name to an optional override.
///
/// The override kind is raised in place of
/// [`HashError::AlgorithmUnavailable`] when the engine factory cannot resolve
/// the name. It is never consulted on success.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlgorithmDescriptor {
    name: Cow<'static, str>,
    override_error: Option<HashErrorKind>,
}

impl AlgorithmDescriptor {
    /// Descriptor for `name` with no override
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            override_error: None,
        }
    }

    /// Same descriptor carrying `kind` as its override
    #[must_use]
    pub fn with_override(self, kind: HashErrorKind) -> Self {
        Self {
            name: self.name,
            override_error: Some(kind),
        }
    }

    /// Logical algorithm name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured override, if any
    #[must_use]
    pub fn override_error(&self) -> Option<HashErrorKind> {
        self.override_error
    }

    /// Translate a resolution failure through the override.
    ///
    /// Only `AlgorithmUnavailable` is substituted; key and input errors pass
    /// through unchanged.
    #[must_use]
    pub fn translate(&self, err: HashError) -> HashError {
        match (err, self.override_error) {
            (HashError::AlgorithmUnavailable { algorithm }, Some(kind)) => {
                tracing::warn!(algorithm = %algorithm, %kind, "override replaces unavailable algorithm");
                HashError::Overridden { algorithm, kind }
            }
            (err, _) => err,
        }
    }
}

impl std::fmt::Display for AlgorithmDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

macro_rules! algorithm_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every catalogued variant
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Logical name passed to the engine factory
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Descriptor without an override
            #[must_use]
            pub fn descriptor(self) -> AlgorithmDescriptor {
                AlgorithmDescriptor::new(self.name())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = HashError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|a| a.name() == s)
                    .ok_or_else(|| HashError::unavailable(s))
            }
        }

        impl From<$name> for AlgorithmDescriptor {
            fn from(algorithm: $name) -> Self {
                algorithm.descriptor()
            }
        }
    };
}

algorithm_enum! {
    /// Unkeyed digest algorithms
    HashAlgorithm {
        /// SHA-1
        Sha1 => "SHA-1",
        /// SHA-224
        Sha224 => "SHA-224",
        /// SHA-256
        Sha256 => "SHA-256",
        /// SHA-384
        Sha384 => "SHA-384",
        /// SHA-512
        Sha512 => "SHA-512",
        /// SHA-512/224
        Sha512_224 => "SHA-512/224",
        /// SHA-512/256
        Sha512_256 => "SHA-512/256",
        /// SHA3-224
        Sha3_224 => "SHA3-224",
        /// SHA3-256
        Sha3_256 => "SHA3-256",
        /// SHA3-384
        Sha3_384 => "SHA3-384",
        /// SHA3-512
        Sha3_512 => "SHA3-512",
        /// BLAKE2b with 512-bit output
        Blake2b512 => "BLAKE2b-512",
        /// BLAKE2s with 256-bit output
        Blake2s256 => "BLAKE2s-256",
        /// MD5
        Md5 => "MD5",
        /// MD2 (catalogued, not supplied by the default factory)
        Md2 => "MD2",
    }
}

algorithm_enum! {
    /// Keyed authentication algorithms
    MacAlgorithm {
        /// HMAC over SHA-1
        HmacSha1 => "HmacSHA1",
        /// HMAC over SHA-224
        HmacSha224 => "HmacSHA224",
        /// HMAC over SHA-256
        HmacSha256 => "HmacSHA256",
        /// HMAC over SHA-384
        HmacSha384 => "HmacSHA384",
        /// HMAC over SHA-512
        HmacSha512 => "HmacSHA512",
        /// HMAC over SHA3-256
        HmacSha3_256 => "HmacSHA3-256",
        /// HMAC over SHA3-512
        HmacSha3_512 => "HmacSHA3-512",
        /// HMAC over MD5
        HmacMd5 => "HmacMD5",
        /// SSLv3 MAC over SHA-1 (catalogued, not supplied by the default factory)
        SslMacSha1 => "SslMacSHA1",
        /// SSLv3 MAC over MD5 (catalogued, not supplied by the default factory)
        SslMacMd5 => "SslMacMD5",
    }
}

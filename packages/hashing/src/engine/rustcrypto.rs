//! Engine factory backed by the RustCrypto hash and HMAC crates

use super::{Engine, EngineFactory};
use crate::{HashError, Result};
use crate::algorithm::{AlgorithmDescriptor, HashAlgorithm, MacAlgorithm};
use crate::key::MacKey;
use digest::DynDigest;
use hmac::digest::{FixedOutputReset, KeyInit, OutputSizeUser, Reset};
use hmac::{Hmac, Mac};

/// Default engine factory.
///
/// Resolves the names catalogued in [`HashAlgorithm`] and [`MacAlgorithm`].
/// `MD2`, `SslMacSHA1` and `SslMacMD5` are catalogued but not supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoFactory;

impl EngineFactory for RustCryptoFactory {
    fn digest(&self, descriptor: &AlgorithmDescriptor) -> Result<Box<dyn Engine>> {
        let algorithm: HashAlgorithm = descriptor.name().parse()?;
        let inner: Box<dyn DynDigest + Send> = match algorithm {
            HashAlgorithm::Sha1 => Box::new(sha1::Sha1::default()),
            HashAlgorithm::Sha224 => Box::new(sha2::Sha224::default()),
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            HashAlgorithm::Sha384 => Box::new(sha2::Sha384::default()),
            HashAlgorithm::Sha512 => Box::new(sha2::Sha512::default()),
            HashAlgorithm::Sha512_224 => Box::new(sha2::Sha512_224::default()),
            HashAlgorithm::Sha512_256 => Box::new(sha2::Sha512_256::default()),
            HashAlgorithm::Sha3_224 => Box::new(sha3::Sha3_224::default()),
            HashAlgorithm::Sha3_256 => Box::new(sha3::Sha3_256::default()),
            HashAlgorithm::Sha3_384 => Box::new(sha3::Sha3_384::default()),
            HashAlgorithm::Sha3_512 => Box::new(sha3::Sha3_512::default()),
            HashAlgorithm::Blake2b512 => Box::new(blake2::Blake2b512::default()),
            HashAlgorithm::Blake2s256 => Box::new(blake2::Blake2s256::default()),
            HashAlgorithm::Md5 => Box::new(md5::Md5::default()),
            HashAlgorithm::Md2 => return Err(HashError::unavailable(algorithm.name())),
        };
        Ok(Box::new(DigestEngine {
            name: algorithm.name(),
            inner,
        }))
    }

    fn keyed(&self, descriptor: &AlgorithmDescriptor, key: &MacKey) -> Result<Box<dyn Engine>> {
        let algorithm: MacAlgorithm = descriptor.name().parse()?;
        let name = algorithm.name();
        match algorithm {
            MacAlgorithm::HmacSha1 => keyed_engine::<Hmac<sha1::Sha1>>(name, key),
            MacAlgorithm::HmacSha224 => keyed_engine::<Hmac<sha2::Sha224>>(name, key),
            MacAlgorithm::HmacSha256 => keyed_engine::<Hmac<sha2::Sha256>>(name, key),
            MacAlgorithm::HmacSha384 => keyed_engine::<Hmac<sha2::Sha384>>(name, key),
            MacAlgorithm::HmacSha512 => keyed_engine::<Hmac<sha2::Sha512>>(name, key),
            MacAlgorithm::HmacSha3_256 => keyed_engine::<Hmac<sha3::Sha3_256>>(name, key),
            MacAlgorithm::HmacSha3_512 => keyed_engine::<Hmac<sha3::Sha3_512>>(name, key),
            MacAlgorithm::HmacMd5 => keyed_engine::<Hmac<md5::Md5>>(name, key),
            MacAlgorithm::SslMacSha1 | MacAlgorithm::SslMacMd5 => {
                Err(HashError::unavailable(name))
            }
        }
    }
}

struct DigestEngine {
    name: &'static str,
    inner: Box<dyn DynDigest + Send>,
}

impl Engine for DigestEngine {
    fn algorithm(&self) -> &str {
        self.name
    }

    fn feed(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn extract(&mut self) -> Vec<u8> {
        self.inner.finalize_reset().into_vec()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn output_size(&self) -> usize {
        self.inner.output_size()
    }
}

struct KeyedEngine<M> {
    name: &'static str,
    mac: M,
}

fn keyed_engine<M>(name: &'static str, key: &MacKey) -> Result<Box<dyn Engine>>
where
    M: Mac + KeyInit + FixedOutputReset + Reset + Send + 'static,
{
    let mac = <M as KeyInit>::new_from_slice(key.expose()).map_err(|e| HashError::InvalidKey {
        algorithm: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Box::new(KeyedEngine { name, mac }))
}

impl<M> Engine for KeyedEngine<M>
where
    M: Mac + FixedOutputReset + Reset + Send,
{
    fn algorithm(&self) -> &str {
        self.name
    }

    fn feed(&mut self, data: &[u8]) {
        Mac::update(&mut self.mac, data);
    }

    fn extract(&mut self) -> Vec<u8> {
        Mac::finalize_reset(&mut self.mac).into_bytes().to_vec()
    }

    fn reset(&mut self) {
        Mac::reset(&mut self.mac);
    }

    fn output_size(&self) -> usize {
        <M as OutputSizeUser>::output_size()
    }
}

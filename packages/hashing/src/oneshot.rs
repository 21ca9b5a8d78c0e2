//! One-call helpers: build an accumulator, add one source, finalize
//!
//! The plain forms use the kind's default `times` (0 for hashing, 1 for MACs).

use crate::Result;
use crate::accumulator::{FragmentingHash, FragmentingMac, ImmediateHash, ImmediateMac};
use crate::algorithm::{HashAlgorithm, MacAlgorithm};
use crate::hash_result::Finalized;
use crate::key::MacKey;
use std::io::Read;
use std::path::Path;

/// Digest of `input`
///
/// # Errors
///
/// Returns `HashError::AlgorithmUnavailable` if the algorithm cannot be supplied.
pub fn hash_bytes(algorithm: HashAlgorithm, input: &[u8]) -> Result<Finalized> {
    Ok(ImmediateHash::new(algorithm)?.add(input).finalize())
}

/// Digest of `input`, applied `times` times
///
/// # Errors
///
/// As [`hash_bytes`].
pub fn hash_bytes_times(algorithm: HashAlgorithm, input: &[u8], times: i32) -> Result<Finalized> {
    Ok(ImmediateHash::new(algorithm)?.add(input).finalize_times(times))
}

/// Digest of the UTF-8 bytes of `input`
///
/// # Errors
///
/// As [`hash_bytes`].
pub fn hash_str(algorithm: HashAlgorithm, input: &str) -> Result<Finalized> {
    Ok(ImmediateHash::new(algorithm)?.add_str(input).finalize())
}

/// Digest of characters `start..end` of `input`, applied `times` times
///
/// # Errors
///
/// As [`hash_bytes`], plus `HashError::InvalidInput` for an out-of-range window.
pub fn hash_str_range_times(
    algorithm: HashAlgorithm,
    input: &str,
    start: usize,
    end: usize,
    times: i32,
) -> Result<Finalized> {
    Ok(ImmediateHash::new(algorithm)?
        .add_str_range(input, start, end)?
        .finalize_times(times))
}

/// Digest of the UTF-8 bytes of `input`, applied `times` times
///
/// # Errors
///
/// As [`hash_bytes`].
pub fn hash_str_times(algorithm: HashAlgorithm, input: &str, times: i32) -> Result<Finalized> {
    Ok(ImmediateHash::new(algorithm)?.add_str(input).finalize_times(times))
}

/// Digest of the file at `path`
///
/// # Errors
///
/// As [`hash_bytes`], plus `HashError::SourceRead` if the file cannot be read.
pub fn hash_file(algorithm: HashAlgorithm, path: impl AsRef<Path>) -> Result<Finalized> {
    Ok(FragmentingHash::new(algorithm)?.add_file(path)?.finalize())
}

/// Digest of the file at `path`, applied `times` times
///
/// # Errors
///
/// As [`hash_file`].
pub fn hash_file_times(
    algorithm: HashAlgorithm,
    path: impl AsRef<Path>,
    times: i32,
) -> Result<Finalized> {
    Ok(FragmentingHash::new(algorithm)?
        .add_file(path)?
        .finalize_times(times))
}

/// Digest of everything `reader` yields
///
/// # Errors
///
/// As [`hash_bytes`], plus `HashError::SourceRead` if a read fails.
pub fn hash_reader<R: Read>(algorithm: HashAlgorithm, reader: R) -> Result<Finalized> {
    Ok(FragmentingHash::new(algorithm)?.add_reader(reader)?.finalize())
}

/// Digest of everything `reader` yields, applied `times` times
///
/// # Errors
///
/// As [`hash_reader`].
pub fn hash_reader_times<R: Read>(
    algorithm: HashAlgorithm,
    reader: R,
    times: i32,
) -> Result<Finalized> {
    Ok(FragmentingHash::new(algorithm)?
        .add_reader(reader)?
        .finalize_times(times))
}

/// MAC of `input`
///
/// # Errors
///
/// Returns `HashError::AlgorithmUnavailable` if the algorithm cannot be
/// supplied and `HashError::InvalidKey` if the key is rejected.
pub fn mac_bytes(algorithm: MacAlgorithm, key: &MacKey, input: &[u8]) -> Result<Finalized> {
    Ok(ImmediateMac::new(algorithm, key)?.add(input).finalize())
}

/// MAC of `input`, applied `times` times
///
/// # Errors
///
/// As [`mac_bytes`].
pub fn mac_bytes_times(
    algorithm: MacAlgorithm,
    key: &MacKey,
    input: &[u8],
    times: i32,
) -> Result<Finalized> {
    Ok(ImmediateMac::new(algorithm, key)?
        .add(input)
        .finalize_times(times))
}

/// MAC of the UTF-8 bytes of `input`
///
/// # Errors
///
/// As [`mac_bytes`].
pub fn mac_str(algorithm: MacAlgorithm, key: &MacKey, input: &str) -> Result<Finalized> {
    Ok(ImmediateMac::new(algorithm, key)?.add_str(input).finalize())
}

/// MAC of the UTF-8 bytes of `input`, applied `times` times
///
/// # Errors
///
/// As [`mac_bytes`].
pub fn mac_str_times(
    algorithm: MacAlgorithm,
    key: &MacKey,
    input: &str,
    times: i32,
) -> Result<Finalized> {
    Ok(ImmediateMac::new(algorithm, key)?
        .add_str(input)
        .finalize_times(times))
}

/// MAC of the file at `path`
///
/// # Errors
///
/// As [`mac_bytes`], plus `HashError::SourceRead` if the file cannot be read.
pub fn mac_file(algorithm: MacAlgorithm, key: &MacKey, path: impl AsRef<Path>) -> Result<Finalized> {
    Ok(FragmentingMac::new(algorithm, key)?.add_file(path)?.finalize())
}

/// MAC of the file at `path`, applied `times` times
///
/// # Errors
///
/// As [`mac_file`].
pub fn mac_file_times(
    algorithm: MacAlgorithm,
    key: &MacKey,
    path: impl AsRef<Path>,
    times: i32,
) -> Result<Finalized> {
    Ok(FragmentingMac::new(algorithm, key)?
        .add_file(path)?
        .finalize_times(times))
}

/// MAC of everything `reader` yields
///
/// # Errors
///
/// As [`mac_bytes`], plus `HashError::SourceRead` if a read fails.
pub fn mac_reader<R: Read>(algorithm: MacAlgorithm, key: &MacKey, reader: R) -> Result<Finalized> {
    Ok(FragmentingMac::new(algorithm, key)?
        .add_reader(reader)?
        .finalize())
}

/// MAC of everything `reader` yields, applied `times` times
///
/// # Errors
///
/// As [`mac_reader`].
pub fn mac_reader_times<R: Read>(
    algorithm: MacAlgorithm,
    key: &MacKey,
    reader: R,
    times: i32,
) -> Result<Finalized> {
    Ok(FragmentingMac::new(algorithm, key)?
        .add_reader(reader)?
        .finalize_times(times))
}

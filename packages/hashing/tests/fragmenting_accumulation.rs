//! File and stream accumulators: fragment queueing and merge semantics

use accrue_hashing::{
    FileHash, FileMac, HashAlgorithm, HashErrorKind, MacAlgorithm, MacKey, Result, StreamHash,
    StreamMac, oneshot,
};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FIRST: &str = "This sentence is for hashing\nThis is my sample hashing\nThis is a unit testing class\n";
const SECOND: &str = "Hash\nAbstractHash\nFileHash\n";

struct Fixture {
    _dir: TempDir,
    empty: PathBuf,
    first: PathBuf,
    second: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let empty = dir.path().join("TestFile1.txt");
    let first = dir.path().join("TestFile2.txt");
    let second = dir.path().join("TestFile3.txt");
    fs::write(&empty, "").expect("empty file should be written");
    fs::write(&first, FIRST).expect("first file should be written");
    fs::write(&second, SECOND).expect("second file should be written");
    Fixture {
        _dir: dir,
        empty,
        first,
        second,
    }
}

#[test]
fn test_single_file_equals_one_shot_digest() -> Result<()> {
    let files = fixture();
    for times in [-1, 0, 1] {
        let result = FileHash::new(HashAlgorithm::Sha256)?
            .add_file(&files.first)?
            .finalize_times(times);
        assert_eq!(result.into_bytes(), Some(Sha256::digest(FIRST).to_vec()));
    }
    Ok(())
}

#[test]
fn test_empty_file_still_yields_a_value() -> Result<()> {
    let files = fixture();
    let mut hash = FileHash::new(HashAlgorithm::Md5)?;
    assert!(hash.add_file(&files.empty)?.finalize().is_present());
    assert!(hash.add_file(&files.empty)?.finalize_times(5).is_present());
    Ok(())
}

#[test]
fn test_single_file_rehashed_matches_iterated_reference() -> Result<()> {
    let files = fixture();
    let result = FileHash::new(HashAlgorithm::Sha256)?
        .add_file(&files.first)?
        .finalize_times(2);

    let mut reference = Sha256::new();
    reference.update(FIRST);
    let once = reference.finalize_reset();
    reference.update(once);
    assert_eq!(result.into_bytes(), Some(reference.finalize().to_vec()));
    Ok(())
}

#[test]
fn test_two_fragments_merge_in_insertion_order() -> Result<()> {
    let files = fixture();
    let forward = FileHash::new(HashAlgorithm::Sha256)?
        .add_file(&files.first)?
        .add_file(&files.second)?
        .finalize();
    let backward = FileHash::new(HashAlgorithm::Sha256)?
        .add_file(&files.second)?
        .add_file(&files.first)?
        .finalize();
    assert_ne!(forward, backward);

    let mut reference = Sha256::new();
    reference.update(Sha256::digest(FIRST));
    reference.update(Sha256::digest(SECOND));
    assert_eq!(forward.into_bytes(), Some(reference.finalize().to_vec()));
    Ok(())
}

#[test]
fn test_three_fragments_rehash_times_minus_two() -> Result<()> {
    let files = fixture();
    let times = 4;
    let result = FileHash::new(HashAlgorithm::Sha256)?
        .add_file(&files.empty)?
        .add_file(&files.first)?
        .add_file(&files.second)?
        .finalize_times(times);

    let mut reference = Sha256::new();
    for content in ["", FIRST, SECOND] {
        reference.update(Sha256::digest(content));
    }
    for _ in 0..times - 2 {
        let value = reference.finalize_reset();
        reference.update(value);
    }
    assert_eq!(result.into_bytes(), Some(reference.finalize().to_vec()));
    Ok(())
}

#[test]
fn test_finalize_drains_queue_and_empties() -> Result<()> {
    let files = fixture();
    let mut hash = FileHash::new(HashAlgorithm::Sha1)?;
    hash.add_file(&files.first)?.add_file(&files.second)?;
    assert_eq!(hash.pending_len(), 2);
    assert!(!hash.is_empty());

    assert!(hash.finalize().is_present());
    assert_eq!(hash.pending_len(), 0);
    assert!(hash.is_empty());
    assert!(!hash.finalize_times(3).is_present());
    Ok(())
}

#[test]
fn test_clear_discards_fragments() -> Result<()> {
    let files = fixture();
    let mut hash = FileHash::new(HashAlgorithm::Sha512)?;
    hash.add_file(&files.first)?.add_file(&files.second)?;
    hash.clear();
    assert_eq!(hash.pending_len(), 0);
    for times in [0, 1, 2, 10] {
        assert!(!hash.finalize_times(times).is_present());
    }

    // After clear the accumulator behaves like a fresh one.
    let after = hash.add_file(&files.second)?.finalize();
    assert_eq!(after, oneshot::hash_file(HashAlgorithm::Sha512, &files.second)?);
    Ok(())
}

#[test]
fn test_never_added_is_none() -> Result<()> {
    let mut hash = StreamHash::new(HashAlgorithm::Sha256)?;
    assert!(!hash.finalize().is_present());
    assert!(!hash.finalize_times(5).is_present());
    Ok(())
}

#[test]
fn test_file_and_stream_agree() -> Result<()> {
    let files = fixture();
    let from_file = FileHash::new(HashAlgorithm::Blake2b512)?
        .add_file(&files.first)?
        .add_file(&files.second)?
        .finalize_times(3);
    let from_stream = StreamHash::new(HashAlgorithm::Blake2b512)?
        .add_reader(FIRST.as_bytes())?
        .add_reader(fs::File::open(&files.second).map_err(|e| {
            accrue_hashing::HashError::source_read("second", e)
        })?)?
        .finalize_times(3);
    assert_eq!(from_file, from_stream);
    Ok(())
}

#[test]
fn test_missing_file_keeps_queued_fragments() -> Result<()> {
    let files = fixture();
    let mut hash = FileHash::new(HashAlgorithm::Sha256)?;
    hash.add_file(&files.first)?;
    let err = hash.add_file(files.first.with_extension("missing")).err();
    assert_eq!(err.map(|e| e.kind()), Some(HashErrorKind::SourceRead));
    assert_eq!(hash.pending_len(), 1);
    assert_eq!(
        hash.finalize().into_bytes(),
        Some(Sha256::digest(FIRST).to_vec())
    );
    Ok(())
}

#[test]
fn test_mac_fragments_are_macs_of_each_source() -> Result<()> {
    let files = fixture();
    let key = MacKey::new(b"fragment key".to_vec());
    let mac = |data: &[u8]| -> Vec<u8> {
        let mut m = Hmac::<Sha256>::new_from_slice(key.expose()).expect("any key length is valid");
        m.update(data);
        m.finalize().into_bytes().to_vec()
    };

    let single = FileMac::new(MacAlgorithm::HmacSha256, &key)?
        .add_file(&files.first)?
        .finalize();
    assert_eq!(single.into_bytes(), Some(mac(FIRST.as_bytes())));

    let merged = StreamMac::new(MacAlgorithm::HmacSha256, &key)?
        .add_reader(FIRST.as_bytes())?
        .add_reader(SECOND.as_bytes())?
        .finalize();
    let mut joined = mac(FIRST.as_bytes());
    joined.extend(mac(SECOND.as_bytes()));
    assert_eq!(merged.into_bytes(), Some(mac(&joined)));
    Ok(())
}

#[test]
fn test_mac_file_helpers_match_accumulator() -> Result<()> {
    let files = fixture();
    let key = MacKey::new(vec![7u8; 32]);
    let helper = oneshot::mac_file_times(MacAlgorithm::HmacSha384, &key, &files.second, 2)?;
    let direct = FileMac::new(MacAlgorithm::HmacSha384, &key)?
        .add_file(&files.second)?
        .finalize_times(2);
    assert_eq!(helper, direct);
    Ok(())
}

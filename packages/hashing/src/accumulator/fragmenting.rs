//! File and stream sources, each digested into its own queued fragment

use super::{Accumulator, Kind, Mode, sealed};
use crate::{HashError, Result};
use crate::engine::Engine;
use crate::finalize;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Every `add` consumes one whole source into a fragment queued for finalize
#[derive(Debug, Clone, Default)]
pub struct Fragmenting {
    pending: VecDeque<Vec<u8>>,
}

impl sealed::Sealed for Fragmenting {}

impl Mode for Fragmenting {
    const NAME: &'static str = "fragmenting";

    fn discard(&mut self) {
        self.pending.clear();
    }

    fn merge(&mut self, engine: &mut dyn Engine, times: i32) -> Option<Vec<u8>> {
        finalize::queue_merge(engine, &mut self.pending, times)
    }
}

impl<K: Kind> Accumulator<Fragmenting, K> {
    /// Digest the file at `path` into one fragment
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidInput` for an empty path and
    /// `HashError::SourceRead` if the file cannot be opened or read. No
    /// fragment is queued on error.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(HashError::invalid_input("empty file path"));
        }
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| {
            tracing::warn!(source = %name, error = %e, "failed to open source");
            HashError::source_read(name.clone(), e)
        })?;
        self.consume(file, &name)
    }

    /// Digest everything `reader` yields until EOF into one fragment
    ///
    /// # Errors
    ///
    /// Returns `HashError::SourceRead` if a read fails. No fragment is queued
    /// and fragments from earlier calls are kept.
    pub fn add_reader<R: Read>(&mut self, reader: R) -> Result<&mut Self> {
        self.consume(reader, "stream")
    }

    /// Number of fragments waiting to be merged
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.mode.pending.len()
    }

    fn consume<R: Read>(&mut self, mut reader: R, name: &str) -> Result<&mut Self> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut total = 0usize;
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    self.engine.feed(&buf[..n]);
                    total += n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    // Drop the partial source so the next fragment starts clean.
                    self.engine.reset();
                    tracing::warn!(source = name, read = total, error = %e, "source read failed");
                    return Err(HashError::source_read(name, e));
                }
            }
        }
        let fragment = self.engine.extract();
        self.mode.pending.push_back(fragment);
        self.empty = false;
        tracing::trace!(
            algorithm = self.descriptor.name(),
            source = name,
            len = total,
            fragments = self.mode.pending.len(),
            "queued fragment"
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HashAlgorithm, HashErrorKind, StreamHash};
    use std::io;

    /// Yields `data` once, then fails
    struct Failing<'a> {
        data: Option<&'a [u8]>,
    }

    impl Read for Failing<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.take() {
                Some(data) => {
                    let n = data.len().min(buf.len());
                    buf[..n].copy_from_slice(&data[..n]);
                    Ok(n)
                }
                None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone")),
            }
        }
    }

    /// Interrupts before every successful read
    struct Flaky<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Flaky<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_failed_read_queues_nothing_and_keeps_prior_fragments() -> Result<()> {
        let mut hash = StreamHash::new(HashAlgorithm::Sha256)?;
        hash.add_reader(&b"first"[..])?;

        let err = hash.add_reader(Failing { data: Some(&b"partial"[..]) }).err();
        assert_eq!(err.map(|e| e.kind()), Some(HashErrorKind::SourceRead));
        assert_eq!(hash.pending_len(), 1);

        let expected = StreamHash::new(HashAlgorithm::Sha256)?
            .add_reader(&b"first"[..])?
            .finalize();
        assert_eq!(hash.finalize(), expected);
        Ok(())
    }

    #[test]
    fn test_failed_read_does_not_leak_into_next_fragment() -> Result<()> {
        let mut hash = StreamHash::new(HashAlgorithm::Sha256)?;
        assert!(hash.add_reader(Failing { data: Some(&b"junk"[..]) }).is_err());
        assert!(hash.is_empty());
        hash.add_reader(&b"clean"[..])?;

        let expected = StreamHash::new(HashAlgorithm::Sha256)?
            .add_reader(&b"clean"[..])?
            .finalize();
        assert_eq!(hash.finalize(), expected);
        Ok(())
    }

    #[test]
    fn test_interrupted_reads_are_retried() -> Result<()> {
        let data = vec![0x5au8; 10_000];
        let flaky = StreamHash::new(HashAlgorithm::Sha384)?
            .add_reader(Flaky {
                data: &data,
                interrupt: false,
            })?
            .finalize();
        let steady = StreamHash::new(HashAlgorithm::Sha384)?
            .add_reader(&data[..])?
            .finalize();
        assert_eq!(flaky, steady);
        Ok(())
    }

    #[test]
    fn test_chunk_size_does_not_change_digest() -> Result<()> {
        let data: Vec<u8> = (0..=255u8).cycle().take(5000).collect();
        let tiny = crate::AccumulatorConfig {
            read_chunk_size: 7,
            ..crate::AccumulatorConfig::default()
        };
        let a = StreamHash::with_config(HashAlgorithm::Sha256, &tiny)?
            .add_reader(&data[..])?
            .finalize();
        let b = StreamHash::new(HashAlgorithm::Sha256)?
            .add_reader(&data[..])?
            .finalize();
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_oversized_chunk_config_still_reads() -> Result<()> {
        let huge = crate::AccumulatorConfig::from_json(r#"{ "read_chunk_size": 18446744073709551615 }"#)?;
        let a = StreamHash::with_config(HashAlgorithm::Sha256, &huge)?
            .add_reader(&b"abc"[..])?
            .finalize();
        let zero = crate::AccumulatorConfig {
            read_chunk_size: 0,
            ..crate::AccumulatorConfig::default()
        };
        let b = StreamHash::with_config(HashAlgorithm::Sha256, &zero)?
            .add_reader(&b"abc"[..])?
            .finalize();
        assert_eq!(a, b);
        assert_eq!(a, StreamHash::new(HashAlgorithm::Sha256)?.add_reader(&b"abc"[..])?.finalize());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_source_read() -> Result<()> {
        let mut hash = crate::FileHash::new(HashAlgorithm::Sha256)?;
        let err = hash.add_file("/definitely/not/here.bin").err();
        assert_eq!(err.map(|e| e.kind()), Some(HashErrorKind::SourceRead));
        let err = hash.add_file("").err();
        assert_eq!(err.map(|e| e.kind()), Some(HashErrorKind::InvalidInput));
        assert_eq!(hash.pending_len(), 0);
        Ok(())
    }
}

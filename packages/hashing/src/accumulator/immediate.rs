//! Byte and string sources fed straight into the shared engine

use super::{Accumulator, Kind, Mode, sealed};
use crate::{HashError, Result};
use crate::engine::Engine;
use crate::finalize;

/// Every `add` updates the one engine in place
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl sealed::Sealed for Immediate {}

impl Mode for Immediate {
    const NAME: &'static str = "immediate";

    fn discard(&mut self) {}

    fn merge(&mut self, engine: &mut dyn Engine, times: i32) -> Option<Vec<u8>> {
        Some(finalize::single_engine(engine, times))
    }
}

impl<K: Kind> Accumulator<Immediate, K> {
    /// Feed `input`
    pub fn add(&mut self, input: impl AsRef<[u8]>) -> &mut Self {
        self.feed(input.as_ref())
    }

    /// Feed a single byte
    pub fn add_byte(&mut self, byte: u8) -> &mut Self {
        self.feed(&[byte])
    }

    /// Feed `input[start..end]`
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidInput` if the window is out of bounds or
    /// `start > end`. Nothing is fed in that case.
    pub fn add_range(&mut self, input: &[u8], start: usize, end: usize) -> Result<&mut Self> {
        let window = input.get(start..end).ok_or_else(|| {
            HashError::invalid_input(format!(
                "range {start}..{end} out of bounds for {} bytes",
                input.len()
            ))
        })?;
        Ok(self.feed(window))
    }

    /// Feed the UTF-8 bytes of `input`
    pub fn add_str(&mut self, input: &str) -> &mut Self {
        self.feed(input.as_bytes())
    }

    /// Feed `input` from character `start` to the end
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidInput` if `start` exceeds the character count.
    pub fn add_str_from(&mut self, input: &str, start: usize) -> Result<&mut Self> {
        let slice = char_window(input, start, None)?;
        Ok(self.feed(slice.as_bytes()))
    }

    /// Feed characters `start..end` of `input`
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidInput` if either index exceeds the character
    /// count or `start > end`.
    pub fn add_str_range(&mut self, input: &str, start: usize, end: usize) -> Result<&mut Self> {
        let slice = char_window(input, start, Some(end))?;
        Ok(self.feed(slice.as_bytes()))
    }

    fn feed(&mut self, bytes: &[u8]) -> &mut Self {
        self.engine.feed(bytes);
        self.empty = false;
        tracing::trace!(algorithm = self.descriptor.name(), len = bytes.len(), "fed bytes");
        self
    }
}

/// Substring by character indices, bounds-checked
fn char_window(input: &str, start: usize, end: Option<usize>) -> Result<&str> {
    let chars = input.chars().count();
    let end = end.unwrap_or(chars);
    if start > end || end > chars {
        return Err(HashError::invalid_input(format!(
            "range {start}..{end} out of bounds for string of {chars} characters"
        )));
    }
    let offset = |index: usize| {
        input
            .char_indices()
            .nth(index)
            .map_or(input.len(), |(offset, _)| offset)
    };
    Ok(&input[offset(start)..offset(end)])
}

//! Iterated finalization
//!
//! `times` counts how often the digest is applied. In single-engine mode the
//! engine already holds everything fed, so `max(times - 1, 0)` rehash rounds
//! follow. In queue-merge mode the fragments are themselves digests, so the
//! merge feed counts as one application and `max(times - 2, 0)` rounds follow.
//! A lone fragment with `times <= 1` is returned as-is.

use crate::engine::Engine;
use std::collections::VecDeque;

/// Rehash rounds remaining after `applied` applications
fn rounds(times: i32, applied: i32) -> u32 {
    u32::try_from(times.saturating_sub(applied)).unwrap_or(0)
}

/// `feed(extract())`, `rounds` times
fn rehash(engine: &mut dyn Engine, rounds: u32) {
    for _ in 0..rounds {
        let value = engine.extract();
        engine.feed(&value);
    }
}

/// Finalize an engine that was fed directly
pub(crate) fn single_engine(engine: &mut dyn Engine, times: i32) -> Vec<u8> {
    let rounds = rounds(times, 1);
    tracing::trace!(algorithm = engine.algorithm(), times, rounds, "single-engine finalize");
    rehash(engine, rounds);
    engine.extract()
}

/// Merge queued fragments in insertion order and finalize.
///
/// Returns `None` only when the queue is empty. The queue is always drained.
pub(crate) fn queue_merge(
    engine: &mut dyn Engine,
    pending: &mut VecDeque<Vec<u8>>,
    times: i32,
) -> Option<Vec<u8>> {
    tracing::trace!(
        algorithm = engine.algorithm(),
        times,
        fragments = pending.len(),
        "queue-merge finalize"
    );
    match pending.len() {
        0 => None,
        1 if times <= 1 => pending.pop_front(),
        _ => {
            while let Some(fragment) = pending.pop_front() {
                engine.feed(&fragment);
            }
            rehash(engine, rounds(times, 2));
            Some(engine.extract())
        }
    }
}

//! Heap Usage Probes
//!
//! The memory phase of the protocol needs two host capabilities: a hint to
//! reclaim unreachable memory before reading, and a reading of bytes in use.
//! The hint is optional; a probe that cannot honor it returns `false` and the
//! measurement simply gets noisier.

use crate::allocator::{live_bytes, tracking_active};

/// Process-wide heap reader used by the runner's memory phase
pub trait HeapProbe {
    /// Best-effort request to reclaim unreachable memory
    ///
    /// Returns `false` when the host exposes no such capability.
    fn collect(&self) -> bool {
        false
    }

    /// Bytes currently in use on the heap
    fn heap_used(&self) -> u64;

    /// Whether `heap_used` reflects real allocations
    fn is_available(&self) -> bool {
        true
    }
}

/// Reads the counters kept by [`crate::TrackingAllocator`]
///
/// Rust frees memory deterministically on drop, so there is nothing for
/// `collect` to do.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllocatorProbe;

impl HeapProbe for AllocatorProbe {
    fn heap_used(&self) -> u64 {
        live_bytes()
    }

    fn is_available(&self) -> bool {
        tracking_active()
    }
}

/// Probe that never observes anything; memory deltas read as zero
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProbe;

impl HeapProbe for NullProbe {
    fn heap_used(&self) -> u64 {
        0
    }

    fn is_available(&self) -> bool {
        false
    }
}

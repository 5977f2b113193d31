//! Global Allocator Interceptor
//!
//! `TrackingAllocator` forwards to the system allocator and keeps process-wide
//! counters of allocated and freed bytes. Install it in the benchmark binary:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: acbench_core::TrackingAllocator = acbench_core::TrackingAllocator;
//! ```
//!
//! Without it every counter stays at zero and memory deltas read as 0.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATED_BYTES: AtomicU64 = AtomicU64::new(0);
static FREED_BYTES: AtomicU64 = AtomicU64::new(0);
static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// Counting wrapper around [`System`]
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            ALLOCATED_BYTES.fetch_add(layout.size() as u64, Ordering::Relaxed);
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            ALLOCATED_BYTES.fetch_add(layout.size() as u64, Ordering::Relaxed);
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        FREED_BYTES.fetch_add(layout.size() as u64, Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            FREED_BYTES.fetch_add(layout.size() as u64, Ordering::Relaxed);
            ALLOCATED_BYTES.fetch_add(new_size as u64, Ordering::Relaxed);
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Bytes allocated and allocation count since the last reset
pub fn current_allocation() -> (u64, u64) {
    (
        ALLOCATED_BYTES.load(Ordering::Relaxed),
        ALLOCATIONS.load(Ordering::Relaxed),
    )
}

/// Bytes currently held on the heap (allocated minus freed)
pub fn live_bytes() -> u64 {
    let allocated = ALLOCATED_BYTES.load(Ordering::Relaxed);
    let freed = FREED_BYTES.load(Ordering::Relaxed);
    allocated.saturating_sub(freed)
}

/// Zero the allocation counters
///
/// Resets `live_bytes` too, so only call this between measurements.
pub fn reset_allocation_counter() {
    ALLOCATED_BYTES.store(0, Ordering::Relaxed);
    FREED_BYTES.store(0, Ordering::Relaxed);
    ALLOCATIONS.store(0, Ordering::Relaxed);
}

/// Whether `TrackingAllocator` is the process's global allocator
pub fn tracking_active() -> bool {
    let (_, before) = current_allocation();
    let probe = std::hint::black_box(Box::new([0u8; 64]));
    let (_, after) = current_allocation();
    drop(probe);
    after > before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        // The test harness uses the system allocator, so nothing is tracked
        // until the allocator is called directly.
        assert!(!tracking_active());

        let layout = Layout::from_size_align(128, 8).unwrap();
        let (bytes_before, count_before) = current_allocation();
        unsafe {
            let ptr = TrackingAllocator.alloc(layout);
            assert!(!ptr.is_null());
            assert_eq!(live_bytes(), 128);
            TrackingAllocator.dealloc(ptr, layout);
        }
        let (bytes_after, count_after) = current_allocation();
        assert_eq!(bytes_after, bytes_before + 128);
        assert_eq!(count_after, count_before + 1);
        assert_eq!(live_bytes(), 0);

        reset_allocation_counter();
        assert_eq!(current_allocation(), (0, 0));
    }
}

//! Already-converted ASCII domains take a scan-only fast path that
//! borrows the input. This file holds a single test so nothing else runs
//! concurrently against the counting allocator.

use std::alloc::{GlobalAlloc, Layout, System};
use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};

use idn::{to_ascii, to_unicode};

struct CountingAllocator;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATIONS.fetch_add(1, Ordering::SeqCst);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[test]
fn ascii_fast_path_does_not_allocate() {
    let domain = "www.example.com";
    // First call absorbs any harness-level one-time allocations.
    let _ = to_ascii(domain);
    let _ = to_unicode(domain);

    let before = ALLOCATIONS.load(Ordering::SeqCst);
    for _ in 0..100 {
        let (output, result) = to_ascii(domain);
        assert!(result.is_ok());
        assert!(matches!(output, Cow::Borrowed(_)));

        let (output, result) = to_unicode(domain);
        assert!(result.is_ok());
        assert!(matches!(output, Cow::Borrowed(_)));
    }
    let after = ALLOCATIONS.load(Ordering::SeqCst);
    assert_eq!(
        after, before,
        "converting an ASCII domain should not allocate"
    );
}

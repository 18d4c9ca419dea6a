// src/page_id_allocator.rs

use std::sync::atomic::{AtomicU64, Ordering};

use crate::page::PageId;

/// Hands out dense, strictly increasing page IDs.
///
/// IDs are never reused. The counter only moves forward for the lifetime of the allocator.
#[derive(Debug)]
pub struct PageIdAllocator {
    next_id: AtomicU64,
}

impl PageIdAllocator {
    pub fn new(start: u64) -> Self {
        Self { next_id: AtomicU64::new(start) }
    }

    pub fn allocate(&self) -> PageId {
        PageId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_allocate_is_dense_from_start() {
        let allocator = PageIdAllocator::new(7);
        let ids: Vec<PageId> = (0..5).map(|_| allocator.allocate()).collect();
        assert_eq!(ids, vec![PageId(7), PageId(8), PageId(9), PageId(10), PageId(11)]);
    }

    #[test]
    fn test_allocate_concurrent_no_duplicates() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 1000;

        let allocator = Arc::new(PageIdAllocator::new(0));
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let allocator = Arc::clone(&allocator);
                thread::spawn(move || {
                    (0..PER_THREAD).map(|_| allocator.allocate().0).collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();

        let expected: Vec<u64> = (0..(THREADS * PER_THREAD) as u64).collect();
        assert_eq!(all, expected);
    }
}

// src/page_store.rs

use crate::error::Result;
use crate::page::PageId;

/// Page-granular storage consumed by higher layers (buffer pool, indexes).
///
/// Contract shared by every implementation:
/// - `allocate` never fails and returns `0, 1, 2, ...` with no gaps or repeats.
/// - `write` stores exactly `buf.len()` bytes at the page's offset and returns that count.
/// - `read` returns `Err(Error::Eof)` when nothing is stored at the page's offset, and
///   otherwise the number of bytes available, up to `buf.len()`.
pub trait PageStore: Send + Sync {
    /// Reserves the next page ID. Does not touch storage.
    fn allocate(&self) -> PageId;

    /// Reads the page `page_id` into `buf`.
    fn read(&self, page_id: PageId, buf: &mut [u8]) -> Result<usize>;

    /// Writes `buf` at the start of page `page_id`.
    fn write(&self, page_id: PageId, buf: &[u8]) -> Result<usize>;

    /// Flushes written pages to stable storage.
    fn sync(&self) -> Result<()>;
}

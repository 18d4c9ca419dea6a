// src/mem_store.rs

use std::collections::BTreeMap;
use std::io;
use std::sync::{PoisonError, RwLock};

use log::trace;

use crate::config::PAGE_SIZE;
use crate::error::{Error, Result};
use crate::page::PageId;
use crate::page_id_allocator::PageIdAllocator;
use crate::page_store::PageStore;

type Slot = Box<[u8; PAGE_SIZE]>;

/// Sparse stand-in for the heap file: only slots that were written hold memory.
#[derive(Debug, Default)]
struct Heap {
    slots: BTreeMap<u64, Slot>,
    len: u64,
}

/// In-memory page store with the same read/write/EOF behaviour as `DiskManager`.
///
/// Writes past the end grow the logical length and leave a hole, which reads back as zeros.
/// Reads at or past the logical length report `Error::Eof`.
#[derive(Debug)]
pub struct MemStore {
    heap: RwLock<Heap>,
    allocator: PageIdAllocator,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            heap: RwLock::new(Heap::default()),
            allocator: PageIdAllocator::new(0),
        }
    }

    /// Logical length of the heap in bytes, the equivalent of the heap file's size.
    pub fn len(&self) -> u64 {
        self.heap.read().unwrap_or_else(PoisonError::into_inner).len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Start and end offsets of `len` bytes at `page_id`.
fn span(page_id: PageId, len: usize) -> Result<(u64, u64)> {
    let start = page_id.offset()?;
    let end = start.checked_add(len as u64).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} bytes at page {} overflow the heap offset", len, page_id),
        )
    })?;
    Ok((start, end))
}

/// Splits the byte range starting at `pos` into per-slot pieces: `(slot, offset in slot, len)`.
fn pieces(mut pos: u64, mut remaining: usize) -> impl Iterator<Item = (u64, usize, usize)> {
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let slot = pos / PAGE_SIZE as u64;
        let within = (pos % PAGE_SIZE as u64) as usize;
        let take = remaining.min(PAGE_SIZE - within);
        pos += take as u64;
        remaining -= take;
        Some((slot, within, take))
    })
}

impl PageStore for MemStore {
    fn allocate(&self) -> PageId {
        let page_id = self.allocator.allocate();
        trace!("allocated in-memory page {}", page_id);
        page_id
    }

    fn read(&self, page_id: PageId, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let (start, _) = span(page_id, buf.len())?;

        let heap = self.heap.read().unwrap_or_else(PoisonError::into_inner);
        if start >= heap.len {
            return Err(Error::Eof);
        }
        let n = (buf.len() as u64).min(heap.len - start) as usize;

        let mut copied = 0;
        for (slot, within, take) in pieces(start, n) {
            let dst = &mut buf[copied..copied + take];
            match heap.slots.get(&slot) {
                Some(data) => dst.copy_from_slice(&data[within..within + take]),
                None => dst.fill(0),
            }
            copied += take;
        }
        Ok(n)
    }

    fn write(&self, page_id: PageId, buf: &[u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let (start, end) = span(page_id, buf.len())?;

        let mut heap = self.heap.write().unwrap_or_else(PoisonError::into_inner);
        let mut copied = 0;
        for (slot, within, take) in pieces(start, buf.len()) {
            let data = heap
                .slots
                .entry(slot)
                .or_insert_with(|| Box::new([0u8; PAGE_SIZE]));
            data[within..within + take].copy_from_slice(&buf[copied..copied + take]);
            copied += take;
        }
        heap.len = heap.len.max(end);
        Ok(buf.len())
    }

    fn sync(&self) -> Result<()> {
        Ok(())
    }
}

// src/disk_manager.rs

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::config::PAGE_SIZE;
use crate::error::{Error, Result};
use crate::file_io;
use crate::page::PageId;
use crate::page_id_allocator::PageIdAllocator;
use crate::page_store::PageStore;

/// File-backed page store.
///
/// Owns one heap file, logically split into `PAGE_SIZE` slots, and the page ID counter.
/// All I/O is positioned, so a `DiskManager` can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct DiskManager {
    heap_file: File,
    path: PathBuf,
    allocator: PageIdAllocator,
}

impl DiskManager {
    /// Opens the heap file at `path`, creating it if absent.
    ///
    /// Allocation resumes at `file_len / PAGE_SIZE`. Pages that were allocated but never
    /// written before the file was last closed are not remembered.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(crate::config::HEAP_FILE_MODE);
        }
        let heap_file = options.open(&path)?;

        let file_len = heap_file.metadata()?.len();
        let next_page_id = file_len / PAGE_SIZE as u64;
        debug!(
            "opened heap file {:?}: len={} bytes, next page id={}",
            path, file_len, next_page_id
        );

        Ok(Self {
            heap_file,
            path,
            allocator: PageIdAllocator::new(next_page_id),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn allocate(&self) -> PageId {
        let page_id = self.allocator.allocate();
        trace!("allocated page {}", page_id);
        page_id
    }

    pub fn read(&self, page_id: PageId, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let offset = io_offset(page_id, buf.len())?;

        let n = file_io::read_at(&self.heap_file, buf, offset)?;
        if n == 0 {
            debug!("read page {} at offset {}: end of file", page_id, offset);
            return Err(Error::Eof);
        }
        trace!("read page {} at offset {}: {}/{} bytes", page_id, offset, n, buf.len());
        Ok(n)
    }

    pub fn write(&self, page_id: PageId, buf: &[u8]) -> Result<usize> {
        let offset = io_offset(page_id, buf.len())?;

        file_io::write_all_at(&self.heap_file, buf, offset)?;
        trace!("wrote page {} at offset {}: {} bytes", page_id, offset, buf.len());
        Ok(buf.len())
    }

    pub fn sync(&self) -> Result<()> {
        self.heap_file.sync_all()?;
        debug!("synced heap file {:?}", self.path);
        Ok(())
    }
}

/// Offset of `page_id`, checked so that `len` bytes from it stay addressable.
fn io_offset(page_id: PageId, len: usize) -> io::Result<u64> {
    let offset = page_id.offset()?;
    offset.checked_add(len as u64).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} bytes at page {} overflow the heap file offset", len, page_id),
        )
    })?;
    Ok(offset)
}

impl PageStore for DiskManager {
    fn allocate(&self) -> PageId {
        DiskManager::allocate(self)
    }

    fn read(&self, page_id: PageId, buf: &mut [u8]) -> Result<usize> {
        DiskManager::read(self, page_id, buf)
    }

    fn write(&self, page_id: PageId, buf: &[u8]) -> Result<usize> {
        DiskManager::write(self, page_id, buf)
    }

    fn sync(&self) -> Result<()> {
        DiskManager::sync(self)
    }
}

// src/page.rs

use std::fmt;
use std::io;

use crate::config::PAGE_SIZE;

/// Logical page identifier. Page `p` lives at byte offset `p * PAGE_SIZE` of the heap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(pub u64);

impl PageId {
    /// Byte offset of this page's slot in the heap file.
    ///
    /// Fails with `InvalidInput` if the offset does not fit in a `u64`.
    pub fn offset(self) -> io::Result<u64> {
        self.0.checked_mul(PAGE_SIZE as u64).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("page {} is past the addressable end of the heap file", self.0),
            )
        })
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        PageId(id)
    }
}

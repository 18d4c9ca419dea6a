// src/config.rs

pub const PAGE_SIZE: usize = 4096; // size of one page slot in the heap file (fixed)
pub const HEAP_FILE_MODE: u32 = 0o666; // permission bits for a newly created heap file (unix)

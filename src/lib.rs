pub mod config; pub use config::*;
pub mod error; pub use error::*;
pub mod page; pub use page::*;
pub mod page_id_allocator; pub use page_id_allocator::*;
pub mod page_store; pub use page_store::*; // the interface higher layers program against
pub mod disk_manager; pub use disk_manager::*; // the heap file backed store
pub mod mem_store; pub use mem_store::*; // in-memory store for tests of higher layers
mod file_io; // positioned read/write helpers

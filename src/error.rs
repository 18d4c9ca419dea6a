// src/error.rs

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Nothing is stored at the requested offset yet: the page was never written,
    /// or the heap file was truncated below it.
    #[error("end of file: page has no data on disk")]
    Eof,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Eof)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_is_distinct_from_io() {
        assert!(Error::Eof.is_eof());

        let io_err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(!io_err.is_eof());
        match io_err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            Error::Eof => panic!("io error turned into eof"),
        }
    }
}

//! Whole-file text loader. Bytes are kept raw; no UTF-8 decoding happens.

use std::{
    fs::File,
    io::{self, Read},
};

use crate::core::error::HistError;

/// Drain `src` into memory.
///
/// # Errors
/// Any I/O error raised while reading.
pub fn read_text<R: Read>(mut src: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    src.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Load the file at `path`, or standard input when `path` is `-`.
///
/// # Errors
/// [`HistError::FileNotFound`] when the file cannot be found,
/// [`HistError::Io`] for any other read failure.
pub fn read_text_from_path(path: &str) -> Result<Vec<u8>, HistError> {
    if path == "-" {
        return Ok(read_text(io::stdin().lock())?);
    }
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HistError::FileNotFound {
            path: path.to_owned(),
        },
        _ => HistError::Io(e),
    })?;
    Ok(read_text(file)?)
}

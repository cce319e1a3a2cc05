//! Reading BMP files from disk.

use alloc::string::ToString;
use alloc::vec::Vec;
use std::path::Path;

use log::debug;

use crate::error::BmpError;

/// Read a whole file into memory for [`crate::decode`].
///
/// I/O failures become [`BmpError::FileAccess`]; no parsing happens here.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, BmpError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| BmpError::FileAccess {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

//! Opening and reading files.
//!
//! The returned [`File`] closes itself when dropped; an outcome holding it
//! only owns it like any other payload.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use outcome::{failure, propagate, success};

use crate::error::{IoError, IoOutcome};
use crate::mode::OpenMode;

/// Open `path` with `mode`.
///
/// Fails with `"Invalid open mode."` for a flag combination that has no
/// mode string, and with the OS error plus `"Failed to open file."` when
/// the open itself fails.
pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> IoOutcome<File> {
    let path = path.as_ref();
    let Some(options) = mode.to_open_options() else {
        tracing::warn!(bits = mode.bits(), "rejecting invalid open mode");
        return failure(IoError::new("Invalid open mode.")).into();
    };

    let mut file = match options.open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(path = %path.display(), %mode, error = %e, "open failed");
            return failure(IoError::from_io(e, "Failed to open file.")).into();
        }
    };

    if mode.seeks_to_end() {
        if let Err(e) = file.seek(SeekFrom::End(0)) {
            return failure(IoError::from_io(e, "Failed to seek to end of file.")).into();
        }
    }

    tracing::debug!(path = %path.display(), %mode, "opened file");
    success(file).into()
}

/// Size of the file in bytes.
pub fn file_size(file: &File) -> IoOutcome<u64> {
    file.metadata()
        .map(|meta| meta.len())
        .map_err(|e| IoError::from_io(e, "Unable to stat file."))
        .into()
}

/// Read the rest of the file as bytes, expecting exactly the file's size.
///
/// Reading starts at the current position, so a file opened with
/// [`OpenMode::ATE`] has nothing left and fails the size check.
pub fn as_bytes(file: &mut File) -> IoOutcome<Vec<u8>> {
    let size = propagate!(file_size(file), "Failed to get the size of the file.");
    let Ok(expected) = usize::try_from(size) else {
        return failure(IoError::new("File is too large to read into memory.")).into();
    };

    let mut buf = Vec::with_capacity(expected);
    if let Err(e) = file.by_ref().take(size).read_to_end(&mut buf) {
        return failure(IoError::from_io(e, "Failed to read entire file.")).into();
    }
    if buf.len() != expected {
        tracing::debug!(expected, read = buf.len(), "short read");
        return failure(IoError::new("Failed to read entire file.")).into();
    }
    success(buf).into()
}

/// Read the rest of the file as UTF-8 text.
pub fn as_string(file: &mut File) -> IoOutcome<String> {
    let bytes = propagate!(as_bytes(file));
    match String::from_utf8(bytes) {
        Ok(text) => success(text).into(),
        Err(_) => failure(IoError::new("File is not valid UTF-8.")).into(),
    }
}

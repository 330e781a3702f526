//! Filesystem helpers for the conversion pipeline

use std::fs;
use std::path::Path;

use crate::error::ConvertError;

/// Read the whole input file as UTF-8 text.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String, ConvertError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))
}

/// Write the generated script to an existing directory.
///
/// A missing parent directory is an error; nothing is created besides the
/// file itself.
pub fn write_output<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<(), ConvertError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the generated script, creating parent directories if needed.
///
/// Only used for an explicitly requested output path.
pub fn write_output_creating_dirs<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    contents: C,
) -> Result<(), ConvertError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConvertError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    write_output(path, contents)
}

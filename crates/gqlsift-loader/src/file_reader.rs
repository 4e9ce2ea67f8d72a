use crate::LoaderError;
use std::path::Path;

/// Reads `file_path` and decodes it as UTF-8.
///
/// Missing files, read failures, and decode failures each surface as a
/// distinct [`LoaderError`] variant carrying the path.
pub fn read_content(file_path: &Path) -> Result<String, LoaderError> {
    if !file_path.is_file() {
        return Err(LoaderError::FileNotFound {
            path: file_path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(file_path).map_err(|source| LoaderError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| LoaderError::FileDecode {
        path: file_path.to_path_buf(),
        source,
    })
}

use std::{fs, io::ErrorKind, path::Path};

use quill_buffer::model::{Buffer, TextBuffer};

use crate::error::AppError;

pub fn read_file(path: &Path) -> Result<TextBuffer, AppError> {
    let content = fs::read_to_string(path)?;
    tracing::debug!("read {} characters from {:?}", content.chars().count(), path);

    Ok(TextBuffer::new(Buffer::new(
        &content,
        Some(path.to_path_buf()),
    )))
}

/// Like `read_file`, but a file that does not exist yet becomes an empty
/// buffer bound to its path.
pub fn read_startup_file(path: &Path) -> Result<TextBuffer, AppError> {
    match read_file(path) {
        Err(AppError::FileOperationFailed(error)) if error.kind() == ErrorKind::NotFound => {
            tracing::info!("starting new file {:?}", path);
            Ok(TextBuffer::new(Buffer::new("", Some(path.to_path_buf()))))
        }
        result => result,
    }
}

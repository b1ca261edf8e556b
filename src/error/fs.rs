//! File system errors

use super::FragmentaError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> FragmentaError {
    FragmentaError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> FragmentaError {
    FragmentaError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory creation failed error
pub fn dir_create_failed(path: impl Into<String>, reason: impl Into<String>) -> FragmentaError {
    FragmentaError::DirectoryCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> FragmentaError {
    FragmentaError::IoError {
        message: message.into(),
    }
}

//! Persistence layer
//!
//! - [`storage`]: named key-value slots (file or memory backed)
//! - [`Collections`]: the four record collections, stored as one blob
//! - [`Store`]: load / save / transactional mutation of the blob
//! - [`seed`]: default records for a fresh install

pub mod collections;
pub mod seed;
pub mod storage;
pub mod store;

pub use collections::Collections;
pub use seed::SeedConfig;
pub use storage::{
    AUTH_TOKEN_SLOT, DB_SLOT, FileStorage, KvStorage, MemoryStorage, StorageError, StorageResult,
    UNVERIFIED_EMAIL_SLOT,
};
pub use store::Store;

use shared::error::{AppError, ErrorCode};

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::Corrupted(_) | StorageError::Json(_) => {
                AppError::with_message(ErrorCode::StorageCorrupted, err.to_string())
            }
            StorageError::Io(io) if io.kind() == std::io::ErrorKind::StorageFull => {
                AppError::with_message(ErrorCode::StorageFull, err.to_string())
            }
            StorageError::Io(_) | StorageError::InvalidKey(_) => {
                AppError::with_message(ErrorCode::StorageUnavailable, err.to_string())
            }
        }
    }
}

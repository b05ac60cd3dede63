pub mod file_store;

use thiserror::Error;

use crate::{codec::CodecError, schema::TableSchema};

// A store persists one schema block per table; the codec owns the byte
// format, the store owns where the bytes live.
pub trait SchemaStore {
    fn load(&self, table_name: &str) -> Result<TableSchema, StoreError>;
    fn save(&self, schema: &TableSchema) -> Result<(), StoreError>;
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("StoreError - I/O Error: {0}")]
    IoError(String),
    #[error("StoreError - Codec Error: {0}")]
    CodecError(#[from] CodecError),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err.to_string())
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    codec,
    schema::TableSchema,
    store::{SchemaStore, StoreError},
};

pub struct FileStore<'a> {
    base_path: &'a Path,
}

impl<'a> FileStore<'a> {
    pub fn new(base_path: &'a Path) -> Self {
        Self { base_path }
    }

    fn schema_file(&self, table_name: &str) -> PathBuf {
        self.base_path.join(format!("{}.jdb", table_name))
    }
}

impl SchemaStore for FileStore<'_> {
    fn load(&self, table_name: &str) -> Result<TableSchema, StoreError> {
        let bytes = fs::read(self.schema_file(table_name))?;

        // The schema block is the whole file, leftover bytes are corruption
        Ok(codec::decode_exact(&bytes)?)
    }

    fn save(&self, schema: &TableSchema) -> Result<(), StoreError> {
        fs::write(self.schema_file(schema.name()), codec::encode(schema))?;
        Ok(())
    }
}

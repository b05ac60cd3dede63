use std::collections::HashSet;

use derive_getters::Getters;
use thiserror::Error;

// Name lengths and the column count are stored as a single byte on disk,
// so the model rejects anything that would not fit the prefix.
pub const MAX_NAME_LEN: usize = 255;
pub const MAX_COLUMNS: usize = 255;

/// Column type with its frozen on-disk tag. Tags are part of the file
/// format: new types get new numbers, existing numbers are never reused
/// or renumbered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeCode {
    Integer,   // 1
    Text,      // 2
    Blob,      // 3
    Real,      // 4
    Boolean,   // 5
    Timestamp, // 6
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Name '{name}' is {len} bytes, maximum is 255")]
    NameTooLong { name: String, len: usize },
    #[error("Schema has {0} columns, maximum is 255")]
    TooManyColumns(usize),
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),
}

#[derive(Getters, Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    name: String,
    type_code: TypeCode,
}

#[derive(Getters, Clone, Debug, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    columns: Vec<ColumnDef>,
}

impl TypeCode {
    pub fn tag(self) -> u32 {
        match self {
            TypeCode::Integer => 1,
            TypeCode::Text => 2,
            TypeCode::Blob => 3,
            TypeCode::Real => 4,
            TypeCode::Boolean => 5,
            TypeCode::Timestamp => 6,
        }
    }

    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            1 => Some(TypeCode::Integer),
            2 => Some(TypeCode::Text),
            3 => Some(TypeCode::Blob),
            4 => Some(TypeCode::Real),
            5 => Some(TypeCode::Boolean),
            6 => Some(TypeCode::Timestamp),
            _ => None,
        }
    }
}

fn validate_name(name: &str) -> Result<(), SchemaError> {
    if name.is_empty() {
        return Err(SchemaError::EmptyName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(SchemaError::NameTooLong {
            name: name.to_string(),
            len: name.len(),
        });
    }
    Ok(())
}

impl ColumnDef {
    pub fn new(name: &str, type_code: TypeCode) -> Result<Self, SchemaError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            type_code,
        })
    }
}

impl TableSchema {
    pub fn new(name: &str, columns: Vec<ColumnDef>) -> Result<Self, SchemaError> {
        validate_name(name)?;
        if columns.len() > MAX_COLUMNS {
            return Err(SchemaError::TooManyColumns(columns.len()));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(columns.len());
        for col in &columns {
            if !seen.insert(&col.name) {
                return Err(SchemaError::DuplicateColumn(col.name.clone()));
            }
        }

        Ok(Self {
            name: name.to_string(),
            columns,
        })
    }
}

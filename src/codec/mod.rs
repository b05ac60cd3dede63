use thiserror::Error;

use crate::schema::{ColumnDef, SchemaError, TableSchema, TypeCode};

// Schema block layout
// -------------------
// 1 byte   table name length L_t
// L_t bytes table name (UTF-8, no terminator)
// 1 byte   column count C
// per column:
//   1 byte   column name length L_c
//   L_c bytes column name (UTF-8)
//   4 bytes  type tag, u32 big-endian

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Input truncated at byte {offset}: needed {needed} more bytes, {remaining} remain")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("Name of {len} bytes at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize, len: usize },
    #[error("Unknown type code {tag:#010x} at byte {offset}")]
    UnknownTypeCode { offset: usize, tag: u32 },
    #[error("{remaining} trailing bytes after schema block of {consumed} bytes")]
    TrailingBytes { consumed: usize, remaining: usize },
    #[error("Decoded schema is invalid: {0}")]
    InvalidSchema(#[from] SchemaError),
}

/// Serializes a schema into one contiguous schema block. Cannot fail:
/// `TableSchema` construction already guarantees every length fits its
/// single prefix byte.
pub fn encode(schema: &TableSchema) -> Vec<u8> {
    let mut bytes = Vec::new();
    push_name(&mut bytes, schema.name());
    bytes.push(schema.columns().len() as u8);
    for col in schema.columns() {
        push_name(&mut bytes, col.name());
        bytes.extend_from_slice(&col.type_code().tag().to_be_bytes());
    }
    bytes
}

fn push_name(bytes: &mut Vec<u8>, name: &str) {
    // 1 byte for length + actual name bytes
    bytes.push(name.len() as u8);
    bytes.extend_from_slice(name.as_bytes());
}

/// Parses one schema block from the front of `bytes`.
///
/// All-or-nothing: the first malformed field aborts the parse and no
/// partial schema is ever returned. On success returns the schema and
/// the number of bytes consumed, so callers can detect trailing data.
pub fn decode(bytes: &[u8]) -> Result<(TableSchema, usize), CodecError> {
    let mut cursor = Cursor::new(bytes);

    let table_name = cursor.read_name()?;
    let column_count = cursor.read_u8()? as usize;

    let mut columns = Vec::with_capacity(column_count);
    for _ in 0..column_count {
        let col_name = cursor.read_name()?;
        let tag_offset = cursor.offset;
        let tag = cursor.read_u32()?;
        let type_code = TypeCode::from_tag(tag).ok_or(CodecError::UnknownTypeCode {
            offset: tag_offset,
            tag,
        })?;
        columns.push(ColumnDef::new(&col_name, type_code)?);
    }

    let schema = TableSchema::new(&table_name, columns)?;
    Ok((schema, cursor.offset))
}

/// Like [`decode`], but the block must span the whole input. Used when a
/// schema block is the entire file, where leftover bytes mean corruption.
pub fn decode_exact(bytes: &[u8]) -> Result<TableSchema, CodecError> {
    let (schema, consumed) = decode(bytes)?;
    if consumed < bytes.len() {
        return Err(CodecError::TrailingBytes {
            consumed,
            remaining: bytes.len() - consumed,
        });
    }
    Ok(schema)
}

struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.data.len() - self.offset;
        if remaining < needed {
            return Err(CodecError::Truncated {
                offset: self.offset,
                needed,
                remaining,
            });
        }
        let bytes = &self.data[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Result<u32, CodecError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes(bytes.try_into().unwrap()))
    }

    fn read_name(&mut self) -> Result<String, CodecError> {
        let len = self.read_u8()? as usize;
        let offset = self.offset;
        let bytes = self.take(len)?;
        match std::str::from_utf8(bytes) {
            Ok(name) => Ok(name.to_string()),
            Err(_) => Err(CodecError::InvalidUtf8 { offset, len }),
        }
    }
}

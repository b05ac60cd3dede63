pub mod codec;
pub mod schema;
pub mod store;

pub use codec::{CodecError, decode, decode_exact, encode};
pub use schema::{ColumnDef, SchemaError, TableSchema, TypeCode};

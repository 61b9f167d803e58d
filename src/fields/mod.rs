//! Field schema - decoding entity string keys into typed entity fields

mod encode;
mod table;
mod value;

pub use encode::{encode_entity, encode_pool, EncodeError};
pub use table::{Accessor, FieldDescriptor, FieldFlags, FieldKind, FieldTable, FieldTarget};
pub use value::{escape, parse_float, parse_int, parse_vector, unescape};

//! Writing entities back out as entity string records

use std::fmt::Write;

use thiserror::Error;

use super::table::{FieldKind, FieldTable, FieldTarget};
use super::value::escape;
use crate::entity::{Entity, EntityPool, SpawnTemp, Vec3};

/// A string value the entity string syntax cannot carry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value of '{field}' cannot be written as a token: {value:?}")]
pub struct EncodeError {
    pub field: &'static str,
    pub value: String,
}

/// Encode the entity fields of `ent` as one `{ ... }` record.
///
/// Only spawnable fields stored on the entity are written, and only when they
/// differ from the zero value. The `angle` shorthand is skipped since `angles`
/// carries the same data.
///
/// Quoted tokens have no escape for `"`, so a string containing one is written
/// as a bare word. That fails when the string also holds whitespace or starts
/// with `"` or `//`. A string that is exactly `}` always fails, since the
/// reader takes it for the end of the record.
pub fn encode_entity(ent: &Entity, table: &FieldTable) -> Result<String, EncodeError> {
    let mut scratch = ent.clone();
    let mut st = SpawnTemp::default();
    let mut out = String::from("{\n");

    for field in table.iter().filter(|f| f.is_spawnable()) {
        if field.kind.target() != Some(FieldTarget::Entity) {
            continue;
        }

        let value = match field.kind {
            FieldKind::String(a) => a.get(&mut scratch, &mut st).as_deref().map(escape),
            FieldKind::Vector(a) => Some(*a.get(&mut scratch, &mut st))
                .filter(|v| *v != [0.0; 3])
                .map(format_vector),
            FieldKind::Int(a) => Some(*a.get(&mut scratch, &mut st))
                .filter(|v| *v != 0)
                .map(|v| v.to_string()),
            FieldKind::Float(a) => Some(*a.get(&mut scratch, &mut st))
                .filter(|v| *v != 0.0)
                .map(|v| v.to_string()),
            FieldKind::AngleHack(_) | FieldKind::Ignore => None,
        };
        let Some(value) = value else { continue };

        let _ = match token_form(&value) {
            Some(TokenForm::Quoted) => writeln!(out, "\"{}\" \"{}\"", field.name, value),
            Some(TokenForm::Bare) => writeln!(out, "\"{}\" {}", field.name, value),
            None => {
                return Err(EncodeError {
                    field: field.name,
                    value,
                })
            }
        };
    }

    out.push_str("}\n");
    Ok(out)
}

/// Encode every live entity of a pool, world first
pub fn encode_pool(pool: &EntityPool, table: &FieldTable) -> Result<String, EncodeError> {
    pool.live()
        .map(|(_, ent)| encode_entity(ent, table))
        .collect()
}

enum TokenForm {
    Quoted,
    Bare,
}

fn token_form(value: &str) -> Option<TokenForm> {
    if value == "}" {
        return None;
    }
    if !value.contains('"') {
        return Some(TokenForm::Quoted);
    }
    let bare = !value.starts_with('"')
        && !value.starts_with("//")
        && value.bytes().all(|b| b > b' ');
    bare.then_some(TokenForm::Bare)
}

fn format_vector(v: Vec3) -> String {
    format!("{} {} {}", v[0], v[1], v[2])
}

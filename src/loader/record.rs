//! Single record parsing

use tracing::trace;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::entity::{Entity, SpawnTemp};
use crate::fields::FieldTable;
use crate::lexer::Lexer;

use super::LoadError;

/// Parse the body of one record, after its opening brace, into `ent` and `st`.
///
/// `st` is reset first. Keys starting with `_` are editor-only and dropped.
/// Unknown keys are reported and skipped. A record with no pairs leaves `ent`
/// fully zeroed.
pub fn parse_record(
    lexer: &mut Lexer<'_>,
    ent: &mut Entity,
    st: &mut SpawnTemp,
    fields: &FieldTable,
    diagnostics: &mut Diagnostics,
) -> Result<(), LoadError> {
    st.reset();
    let mut init = false;

    loop {
        let key = lexer
            .next_token()
            .ok_or(LoadError::UnexpectedEof { line: lexer.line() })?;
        if key.is_close_brace() {
            break;
        }

        let value = lexer
            .next_token()
            .ok_or(LoadError::UnexpectedEof { line: lexer.line() })?;
        if value.is_close_brace() {
            return Err(LoadError::BraceWithoutData { line: value.line });
        }

        init = true;

        if key.text.starts_with('_') {
            trace!("dropping editor key '{}'", key.text);
            continue;
        }

        if !fields.apply(key.text, value.text, ent, st) {
            diagnostics.warn(Diagnostic::UnknownField {
                key: key.text.to_string(),
                value: value.text.to_string(),
                line: key.line,
            });
        }
    }

    if !init {
        *ent = Entity::default();
    }

    Ok(())
}

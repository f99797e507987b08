//! # Entry Parser
//!
//! Turns one table line into a [`TableEntry`]. Table lines follow a positional convention:
//!
//! ```text
//! BUILTIN_TABLE   int   do_builtin_cd(int argc, std::string argv[]);
//! ^ token 0       ^ 1   ^ token 2: identifier runs up to the first `(`
//! ```
//!
//! The label is one `_`-separated segment of the identifier (`do_builtin_cd` -> `cd` for
//! segment 2, `handle_sigchld` -> `SIGCHLD` for segment 1 upper-cased). Every assumption of
//! the convention is checked; a line that breaks one yields a [`ParseError`] instead of a
//! wrong label.

use crate::error::{ParseError, ParseErrorKind};
use crate::profile::{LabelCase, LabelRule};
use crate::scanner::ScannedLine;

/// Index of the declaration token (`name(args...`) within a table line.
const SIGNATURE_TOKEN: usize = 2;

/// One parsed table line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub line_number: usize,
    pub raw_line: String,
    pub primary_identifier: String,
    pub secondary_label: String,
}

/// Parses a scanned table line under `rule`. Same input, same output.
pub fn parse_entry(line: &ScannedLine, rule: &LabelRule) -> Result<TableEntry, ParseError> {
    let fail = |kind: ParseErrorKind| ParseError {
        line_number: line.number,
        raw_line: line.text.clone(),
        kind,
    };

    let tokens: Vec<&str> = line.text.split_whitespace().collect();
    let signature = *tokens
        .get(SIGNATURE_TOKEN)
        .ok_or_else(|| fail(ParseErrorKind::TooFewTokens { found: tokens.len() }))?;

    let (identifier, _) = signature.split_once('(').ok_or_else(|| {
        fail(ParseErrorKind::MissingParen {
            token: signature.to_string(),
        })
    })?;

    if !is_identifier(identifier) {
        return Err(fail(ParseErrorKind::InvalidIdentifier {
            identifier: identifier.to_string(),
        }));
    }

    let label = derive_label(identifier, rule).map_err(fail)?;

    Ok(TableEntry {
        line_number: line.number,
        raw_line: line.text.clone(),
        primary_identifier: identifier.to_string(),
        secondary_label: label,
    })
}

/// Cuts the configured `_` segment out of `identifier` and applies the case rule.
pub fn derive_label(identifier: &str, rule: &LabelRule) -> Result<String, ParseErrorKind> {
    let segment = identifier
        .split('_')
        .nth(rule.segment)
        .ok_or_else(|| ParseErrorKind::MissingSegment {
            identifier: identifier.to_string(),
            index: rule.segment,
        })?;

    if segment.is_empty() {
        return Err(ParseErrorKind::EmptySegment {
            identifier: identifier.to_string(),
            index: rule.segment,
        });
    }

    Ok(match rule.case {
        LabelCase::Keep => segment.to_string(),
        LabelCase::Upper => segment.to_ascii_uppercase(),
    })
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

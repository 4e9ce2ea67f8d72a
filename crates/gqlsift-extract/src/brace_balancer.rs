//! Minimal brace-balanced prefix of a token sequence.

use crate::ExtractError;
use crate::Marker;
use crate::Token;

/// Returns the minimal prefix of `tokens` whose `{`/`}` nesting returns
/// to zero after having opened: everything from the slice start through
/// the `}` matching the first `{`.
///
/// Balancing is purely by brace count, independent of keyword semantics;
/// a `{` opened by any nested construct (namespace or selection set) must
/// close before the enclosing block's `}` counts as matched. `construct`
/// names the enclosing declaration in error messages only.
///
/// # Errors
///
/// - [`ExtractError::MissingBlock`] if the slice ends, or a stray `}`
///   appears, before any `{` opens.
/// - [`ExtractError::BraceMismatch`] if the slice ends while braces
///   remain open.
pub fn balance_braces<'t>(
    tokens: &'t [Token],
    construct: &str,
) -> Result<&'t [Token], ExtractError> {
    let mut depth: usize = 0;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Marker(Marker::CurlyBraceOpen) => {
                depth += 1;
            }
            Token::Marker(Marker::CurlyBraceClose) => {
                if depth == 0 {
                    // A closer with no opener: the declaration in front of
                    // us never opened a block of its own.
                    return Err(ExtractError::MissingBlock {
                        construct: construct.to_string(),
                    });
                }
                depth -= 1;
                if depth == 0 {
                    return Ok(&tokens[..=index]);
                }
            }
            Token::Marker(_) | Token::Prose(_) => {}
        }
    }

    if depth == 0 {
        Err(ExtractError::MissingBlock {
            construct: construct.to_string(),
        })
    } else {
        Err(ExtractError::BraceMismatch {
            construct: construct.to_string(),
            depth,
        })
    }
}

//! Tokenizer: splits preprocessed source text into a marker/prose stream.

use crate::Token;
use crate::lexeme_scanner;

/// Tokenizes `text` into an ordered sequence of marker and prose tokens.
///
/// The scanner is applied repeatedly to the remaining text: anything
/// before a match becomes a prose token when non-empty after
/// whitespace normalization, the match itself becomes a marker token, and
/// any non-empty tail after the last match becomes a final prose token.
/// Adjacent markers emit no prose between them; no marker is ever dropped
/// or duplicated.
pub fn chunk(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut remaining = text;

    while let Some(found) = lexeme_scanner::next_lexeme(remaining) {
        push_prose(&mut tokens, &remaining[..found.start]);
        tokens.push(Token::Marker(found.marker));
        remaining = &remaining[found.end..];
    }
    push_prose(&mut tokens, remaining);

    tokens
}

/// Appends `text` as a prose token, trimmed and with internal whitespace
/// runs collapsed to one space, unless it normalizes to nothing.
fn push_prose(tokens: &mut Vec<Token>, text: &str) {
    let mut normalized = String::new();
    for word in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }

    if !normalized.is_empty() {
        tokens.push(Token::Prose(normalized));
    }
}

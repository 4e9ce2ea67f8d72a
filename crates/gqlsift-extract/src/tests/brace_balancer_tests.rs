//! Tests for the brace balancer.

use crate::ExtractError;
use crate::Marker;
use crate::Token;
use crate::brace_balancer::balance_braces;
use crate::chunker::chunk;

/// Counts `{` and `}` markers and asserts the balancer's structural
/// guarantees: equal counts, and nesting never dips below zero.
fn assert_balanced(block: &[Token]) {
    let mut depth: isize = 0;
    for token in block {
        if token.is_marker(Marker::CurlyBraceOpen) {
            depth += 1;
        } else if token.is_marker(Marker::CurlyBraceClose) {
            depth -= 1;
        }
        assert!(depth >= 0, "nesting went negative inside a balanced block");
    }
    assert_eq!(depth, 0, "unequal brace counts inside a balanced block");
}

/// Verifies that a flat block is delimited through its closing brace.
#[test]
fn test_simple_block() {
    let tokens = chunk("query Q { f } trailing");
    let block = balance_braces(&tokens, "query").unwrap();

    assert_eq!(block.len(), 5);
    assert!(block.last().unwrap().is_marker(Marker::CurlyBraceClose));
    assert_balanced(block);
}

/// Verifies that nested braces are balanced purely by count: the inner
/// block must close before the outer closing brace counts as matched.
#[test]
fn test_nested_blocks() {
    let tokens = chunk("query Q { a { b { c } } d } rest");
    let block = balance_braces(&tokens, "query").unwrap();

    // Everything through the outermost `}` and nothing after it.
    assert_eq!(block.last().unwrap(), &Token::Marker(Marker::CurlyBraceClose));
    assert_eq!(tokens[block.len()], Token::Prose("rest".to_string()));
    assert_balanced(block);
}

/// Verifies that a nested namespace inside the block is treated as plain
/// braces, independent of keyword semantics.
#[test]
fn test_keywords_do_not_affect_balancing() {
    let tokens = chunk("namespace A { namespace B { query Q { f } } }");
    // Balance from the name token, as the extractor does.
    let block = balance_braces(&tokens[1..], "A").unwrap();

    assert_eq!(block.len(), tokens.len() - 1);
    assert_balanced(block);
}

/// Verifies that running out of tokens while braces remain open is a
/// brace mismatch carrying the open depth.
#[test]
fn test_unterminated_block() {
    let tokens = chunk("query Q { f { g }");
    let err = balance_braces(&tokens, "query").unwrap_err();

    assert_eq!(
        err,
        ExtractError::BraceMismatch {
            construct: "query".to_string(),
            depth: 1,
        },
    );
}

/// Verifies that a sequence with no `{` at all reports a missing block.
#[test]
fn test_no_block_at_all() {
    let tokens = chunk("query Q");
    let err = balance_braces(&tokens, "query").unwrap_err();

    assert_eq!(
        err,
        ExtractError::MissingBlock {
            construct: "query".to_string(),
        },
    );
}

/// Verifies that a stray `}` before any `{` also reports a missing
/// block rather than underflowing the depth counter.
#[test]
fn test_stray_close_before_open() {
    let tokens = chunk("query Q } {");
    let err = balance_braces(&tokens, "query").unwrap_err();

    assert_eq!(
        err,
        ExtractError::MissingBlock {
            construct: "query".to_string(),
        },
    );
}

/// Verifies that an empty token slice reports a missing block.
#[test]
fn test_empty_slice() {
    let err = balance_braces(&[], "query").unwrap_err();
    assert!(matches!(err, ExtractError::MissingBlock { .. }));
}

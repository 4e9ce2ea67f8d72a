//! Tests for the leftmost-lexeme scanner.

use crate::Marker;
use crate::lexeme_scanner::LexemeMatch;
use crate::lexeme_scanner::next_lexeme;

/// Verifies that the leftmost lexeme wins regardless of kind.
#[test]
fn test_finds_leftmost_lexeme() {
    let found = next_lexeme("foo { query").unwrap();
    assert_eq!(
        found,
        LexemeMatch {
            marker: Marker::CurlyBraceOpen,
            start: 4,
            end: 5,
        }
    );
}

/// Verifies that a keyword at the very start of the buffer matches.
#[test]
fn test_keyword_at_start() {
    let found = next_lexeme("query Q { f }").unwrap();
    assert_eq!(found.marker, Marker::Query);
    assert_eq!((found.start, found.end), (0, 5));
}

/// Verifies that every keyword lexeme is recognized.
#[test]
fn test_all_keywords_recognized() {
    for (text, marker) in [
        ("fragment", Marker::Fragment),
        ("mutation", Marker::Mutation),
        ("namespace", Marker::Namespace),
        ("query", Marker::Query),
    ] {
        let found = next_lexeme(text).unwrap();
        assert_eq!(found.marker, marker, "lexeme `{text}`");
        assert_eq!((found.start, found.end), (0, text.len()));
    }
}

/// Verifies that keywords embedded in larger identifiers do not match:
/// word-boundary semantics apply on both sides.
#[test]
fn test_keyword_inside_identifier_rejected() {
    assert_eq!(next_lexeme("subquery"), None);
    assert_eq!(next_lexeme("queryable"), None);
    assert_eq!(next_lexeme("query_builder"), None);
    assert_eq!(next_lexeme("_namespace"), None);
    assert_eq!(next_lexeme("mutation9"), None);
}

/// Verifies that a keyword preceded by an identifier still matches at a
/// later, properly bounded occurrence.
#[test]
fn test_skips_to_bounded_occurrence() {
    let found = next_lexeme("subquery query").unwrap();
    assert_eq!(found.marker, Marker::Query);
    assert_eq!((found.start, found.end), (9, 14));
}

/// Verifies that braces match literally, even glued to identifiers.
#[test]
fn test_braces_match_anywhere() {
    let open = next_lexeme("a{b").unwrap();
    assert_eq!(open.marker, Marker::CurlyBraceOpen);
    assert_eq!(open.start, 1);

    let close = next_lexeme("ab}").unwrap();
    assert_eq!(close.marker, Marker::CurlyBraceClose);
    assert_eq!(close.start, 2);
}

/// Verifies that a keyword directly followed by a brace matches: `{` is
/// not a word character.
#[test]
fn test_keyword_followed_by_brace() {
    let found = next_lexeme("query{f}").unwrap();
    assert_eq!(found.marker, Marker::Query);
    assert_eq!((found.start, found.end), (0, 5));
}

/// Verifies that text without any lexeme reports no match.
#[test]
fn test_no_match() {
    assert_eq!(next_lexeme(""), None);
    assert_eq!(next_lexeme("const answer = 42;"), None);
}

/// Verifies that offsets are byte offsets even with multi-byte characters
/// in front of the match.
#[test]
fn test_byte_offsets_with_multibyte_prefix() {
    let text = "émoji 🎉 {";
    let found = next_lexeme(text).unwrap();
    assert_eq!(found.marker, Marker::CurlyBraceOpen);
    assert_eq!(&text[found.start..found.end], "{");
}

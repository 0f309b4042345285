use crate::{tokenize, LexErrorKind, Position, TokenKind, TokenList};
use pretty_assertions::assert_eq;

use super::Lexer;

use crate::TokenKind::{
    Bool, Colon, Comma, Dedent, Description, Eof, Equals, Identifier, Indent, LBracket, LParen,
    Newline, Number, RBracket, RParen, String as Str,
};

fn lex(source: &str) -> TokenList {
    tokenize(source).unwrap_or_else(|err| panic!("lexing {source:?} failed: {err}"))
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).kinds()
}

/// `(kind, text)` pairs for content tokens, skipping layout.
fn content(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .into_iter()
        .filter(|t| !t.is_structural())
        .map(|t| (t.kind, t.text))
        .collect()
}

// === Basics ===

#[test]
fn empty_source_is_just_eof() {
    let tokens = lex("");
    assert_eq!(tokens.kinds(), vec![Eof]);
    assert_eq!(tokens[0].position, Position::new(1, 1));
}

#[test]
fn whitespace_only_source_is_just_eof() {
    assert_eq!(kinds("   \t  "), vec![Eof]);
}

#[test]
fn model_header() {
    let tokens = lex("model Model");
    assert_eq!(tokens[0].kind, Identifier);
    assert_eq!(tokens[0].text, "model");
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].text, "Model");
    assert_eq!(tokens[1].position, Position::new(1, 7));
    assert_eq!(tokens.kinds(), vec![Identifier, Identifier, Eof]);
    assert_eq!(tokens[2].position, Position::new(1, 12));
}

#[test]
fn lexer_value_tokenizes_once() {
    let tokens = Lexer::new("ref table Sales").tokenize().unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens.last().map(|t| t.kind), Some(Eof));
}

#[test]
fn leading_bom_is_ignored() {
    let tokens = lex("\u{FEFF}model Model");
    assert_eq!(tokens[0].text, "model");
    assert_eq!(tokens[0].position, Position::new(1, 1));
}

// === Indentation ===

#[test]
fn nested_objects() {
    let source = "\
table Sales
    column Qty
        dataType: int64
    measure M = 1
ref table X";
    assert_eq!(
        kinds(source),
        vec![
            Identifier, Identifier, Newline, //
            Indent, Identifier, Identifier, Newline, //
            Indent, Identifier, Colon, Identifier, Newline, //
            Dedent, Identifier, Identifier, Equals, Number, Newline, //
            Dedent, Identifier, Identifier, Identifier, //
            Eof,
        ]
    );
}

#[test]
fn indent_token_carries_width_and_position() {
    let tokens = lex("a\n    b");
    let indent = &tokens[2];
    assert_eq!(indent.kind, Indent);
    assert_eq!(indent.text, "    ");
    assert_eq!(indent.position, Position::new(2, 5));
}

#[test]
fn dedent_multiple_levels_at_once() {
    let tokens = lex("a\n  b\n    c\nd");
    assert_eq!(
        tokens.kinds(),
        vec![
            Identifier, Newline, Indent, Identifier, Newline, Indent, Identifier, Newline, Dedent,
            Dedent, Identifier, Eof,
        ]
    );
    assert_eq!(tokens[8].position, Position::new(4, 1));
    assert_eq!(tokens[9].position, Position::new(4, 1));
}

#[test]
fn tab_and_eight_spaces_are_the_same_level() {
    let source = "table T\n\tcolumn A\n        column B";
    assert_eq!(
        kinds(source),
        vec![
            Identifier, Identifier, Newline, //
            Indent, Identifier, Identifier, Newline, //
            Identifier, Identifier, //
            Dedent, Eof,
        ]
    );
    assert_eq!(lex(source)[3].text, " ".repeat(8));
}

#[test]
fn blank_lines_are_indentation_neutral() {
    assert_eq!(
        kinds("a\n    b\n\n  \n    c"),
        vec![
            Identifier, Newline, Indent, Identifier, Newline, Newline, Newline, Identifier,
            Dedent, Eof,
        ]
    );
}

#[test]
fn trailing_dedents_flushed_at_eof() {
    let tokens = lex("a\n  b\n    c");
    let tail: Vec<_> = tokens.iter().rev().take(3).map(|t| t.kind).collect();
    assert_eq!(tail, vec![Eof, Dedent, Dedent]);
    assert_eq!(tokens.last().unwrap().position, Position::new(3, 6));
}

#[test]
fn trailing_whitespace_before_eof_only_flushes() {
    assert_eq!(
        kinds("a\n    b\n   "),
        vec![Identifier, Newline, Indent, Identifier, Newline, Dedent, Eof]
    );
    assert_eq!(
        kinds("a\n    b\n"),
        vec![Identifier, Newline, Indent, Identifier, Newline, Dedent, Eof]
    );
}

#[test]
fn unicode_whitespace_only_lines_are_blank() {
    let expected = vec![Identifier, Newline, Indent, Identifier, Newline, Dedent, Eof];
    assert_eq!(kinds("a\n    b\n  \x0c"), expected);
    assert_eq!(kinds("a\n    b\n  \u{a0}"), expected);

    // A blank line in the middle still yields its NEWLINE.
    assert_eq!(
        kinds("a\n    b\n  \r \n    c"),
        vec![Identifier, Newline, Indent, Identifier, Newline, Newline, Identifier, Dedent, Eof]
    );
}

#[test]
fn comment_lines_take_part_in_indentation() {
    assert_eq!(
        kinds("a\n    # note\n    b"),
        vec![Identifier, Newline, Indent, Newline, Identifier, Dedent, Eof]
    );
}

#[test]
fn inconsistent_dedent_is_an_error() {
    let err = tokenize("a\n    b\n        c\n      d").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::InconsistentIndentation {
            width: 6,
            expected: 4
        }
    );
    assert_eq!((err.line(), err.column()), (4, 7));
}

#[test]
fn dedent_below_first_level_is_an_error() {
    let err = tokenize("a\n    b\n  c").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::InconsistentIndentation {
            width: 2,
            expected: 0
        }
    );
    assert_eq!(err.line(), 3);
}

#[test]
fn crlf_line_endings() {
    let tokens = lex("table T\r\n    column C\r\n");
    assert_eq!(
        tokens.kinds(),
        vec![
            Identifier, Identifier, Newline, Indent, Identifier, Identifier, Newline, Dedent, Eof,
        ]
    );
    assert_eq!(tokens[2].position, Position::new(1, 9));
}

// === Token Kinds ===

#[test]
fn quoted_names() {
    assert_eq!(
        content("ref table 'Sales Order'\ncolumn 'O''Brien'"),
        vec![
            (Identifier, "ref".to_string()),
            (Identifier, "table".to_string()),
            (Identifier, "Sales Order".to_string()),
            (Identifier, "column".to_string()),
            (Identifier, "O'Brien".to_string()),
        ]
    );
}

#[test]
fn string_property() {
    assert_eq!(
        content("formatString: \"$ #,##0\""),
        vec![
            (Identifier, "formatString".to_string()),
            (Colon, ":".to_string()),
            (Str, "$ #,##0".to_string()),
        ]
    );
    assert_eq!(
        content(r#"x = "She said ""hi""""#)[2],
        (Str, r#"She said "hi""#.to_string())
    );
}

#[test]
fn version_annotation() {
    assert_eq!(
        content("annotation PBIDesktopVersion = 2.103.661.0 (22.03)"),
        vec![
            (Identifier, "annotation".to_string()),
            (Identifier, "PBIDesktopVersion".to_string()),
            (Equals, "=".to_string()),
            (Number, "2.103.661.0".to_string()),
            (LParen, "(".to_string()),
            (Number, "22.03".to_string()),
            (RParen, ")".to_string()),
        ]
    );
}

#[test]
fn list_annotation() {
    assert_eq!(
        kinds(r#"annotation PBI_QueryOrder = ["HttpSource","Customer"]"#),
        vec![Identifier, Identifier, Equals, LBracket, Str, Comma, Str, RBracket, Eof]
    );
}

#[test]
fn negative_number_and_hyphenated_identifier() {
    assert_eq!(
        content("culture: en-US\nsummarizeBy: -1"),
        vec![
            (Identifier, "culture".to_string()),
            (Colon, ":".to_string()),
            (Identifier, "en-US".to_string()),
            (Identifier, "summarizeBy".to_string()),
            (Colon, ":".to_string()),
            (Number, "-1".to_string()),
        ]
    );
}

#[test]
fn bool_values() {
    assert_eq!(
        content("isHidden: TRUE\nisKey: false"),
        vec![
            (Identifier, "isHidden".to_string()),
            (Colon, ":".to_string()),
            (Bool, "true".to_string()),
            (Identifier, "isKey".to_string()),
            (Colon, ":".to_string()),
            (Bool, "false".to_string()),
        ]
    );
}

#[test]
fn description_then_object() {
    let tokens = lex("/// Sales facts\ntable Sales");
    assert_eq!(
        tokens.kinds(),
        vec![Description, Newline, Identifier, Identifier, Eof]
    );
    assert_eq!(tokens[0].text, "Sales facts");
    assert_eq!(tokens[0].position, Position::new(1, 1));
}

#[test]
fn comments_produce_no_tokens() {
    assert_eq!(
        kinds("# exported by tooling\nmodel M # trailing"),
        vec![Newline, Identifier, Identifier, Eof]
    );
}

#[test]
fn tokens_are_in_source_order() {
    let tokens = lex("table A\n    column B: 1\n    column C\ntable D");
    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

// === Errors ===

#[test]
fn unexpected_character() {
    let err = tokenize("model @x").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '@' });
    assert_eq!((err.line(), err.column()), (1, 7));
}

#[test]
fn lone_slash_is_unexpected() {
    let err = tokenize("a / b").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '/' });
    assert_eq!(err.column(), 3);
}

#[test]
fn minus_without_digit_is_unexpected() {
    let err = tokenize("x: -y").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '-' });
    assert_eq!((err.line(), err.column()), (1, 4));
}

#[test]
fn first_error_wins() {
    let err = tokenize("a\n  b $\n c").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '$' });
    assert_eq!(err.line(), 2);
}

// === Isolation ===

#[test]
fn independent_inputs_lex_concurrently() {
    let sources = ["a\n    b\n        c", "x\n\ty", "model M", "p\n  q\n r"];
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || tokenize(source)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for (source, result) in sources.iter().zip(results) {
        assert_eq!(result, tokenize(source), "{source:?}");
    }
    assert!(tokenize(sources[3]).is_err());
}

// === Property Tests ===

mod proptest_lexer {
    use crate::{tokenize, TokenKind};
    use proptest::prelude::*;

    /// Lines of lowercase words, each at most one level deeper than the last.
    fn indented_source() -> impl Strategy<Value = String> {
        proptest::collection::vec((0usize..6, "[a-z]{1,8}"), 0..24).prop_map(|lines| {
            let mut depth = 0;
            let mut out = String::new();
            for (wanted, word) in lines {
                depth = wanted.min(depth + 1);
                out.push_str(&"    ".repeat(depth));
                out.push_str(&word);
                out.push('\n');
            }
            out
        })
    }

    proptest! {
        #[test]
        fn indents_and_dedents_balance(source in indented_source()) {
            let tokens = tokenize(&source).unwrap();
            prop_assert_eq!(tokens.count(TokenKind::Indent), tokens.count(TokenKind::Dedent));
        }

        #[test]
        fn success_always_ends_with_single_eof(source in any::<String>()) {
            if let Ok(tokens) = tokenize(&source) {
                prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
                prop_assert_eq!(tokens.count(TokenKind::Eof), 1);
            }
        }
    }
}

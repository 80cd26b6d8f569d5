//! Edge case tests for plc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexErrorKind, Lexer, ParseError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    fn error(source: &str) -> ParseError {
        tokenize(source).unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("LET {} = 1;", name));
        assert_eq!(t[1], Token::new(TokenKind::Identifier, name, 4));
    }

    #[test]
    fn test_edge_keywords_are_identifiers() {
        assert_eq!(kinds("LET IF DO END"), vec![TokenKind::Identifier; 4]);
    }

    #[test]
    fn test_edge_two_decimals_in_stream() {
        assert_eq!(
            lex_all("10.70.10"),
            vec![
                Token::new(TokenKind::Decimal, "10.70", 0),
                Token::new(TokenKind::Operator, ".", 5),
                Token::new(TokenKind::Integer, "10", 6),
            ]
        );
    }

    #[test]
    fn test_edge_dangling_point_in_stream() {
        assert_eq!(error("x = 10. + 1"), ParseError::new(LexErrorKind::MissingFraction, 7));
    }

    #[test]
    fn test_edge_leading_zero_in_stream() {
        assert_eq!(error("f(0, 007)"), ParseError::new(LexErrorKind::LeadingZero, 6));
    }

    #[test]
    fn test_edge_zero_followed_by_identifier() {
        assert_eq!(kinds("0x"), vec![TokenKind::Integer, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(
            lex_all("10a1.5"),
            vec![
                Token::new(TokenKind::Integer, "10", 0),
                Token::new(TokenKind::Identifier, "a1", 2),
                Token::new(TokenKind::Operator, ".", 4),
                Token::new(TokenKind::Integer, "5", 5),
            ]
        );
    }

    #[test]
    fn test_edge_adjacent_literals() {
        assert_eq!(
            lex_all("\"a\"'b'\"\""),
            vec![
                Token::new(TokenKind::String, "\"a\"", 0),
                Token::new(TokenKind::Character, "'b'", 3),
                Token::new(TokenKind::String, "\"\"", 6),
            ]
        );
    }

    #[test]
    fn test_edge_unterminated_after_tokens() {
        assert_eq!(
            error("LET s = \"abc"),
            ParseError::new(LexErrorKind::UnterminatedString, 12)
        );
        assert_eq!(
            error("LET c = 'a"),
            ParseError::new(LexErrorKind::UnterminatedCharacter, 10)
        );
    }

    #[test]
    fn test_edge_unterminated_index_is_byte_length() {
        let source = "\"héllo";
        assert_eq!(error(source).index(), source.len());
    }

    #[test]
    fn test_edge_crlf_between_tokens() {
        assert_eq!(
            lex_all("a\r\nb"),
            vec![
                Token::new(TokenKind::Identifier, "a", 0),
                Token::new(TokenKind::Identifier, "b", 3),
            ]
        );
    }

    #[test]
    fn test_edge_other_whitespace_is_an_operator() {
        assert_eq!(
            lex_all("a\u{0B}b"),
            vec![
                Token::new(TokenKind::Identifier, "a", 0),
                Token::new(TokenKind::Operator, "\u{0B}", 1),
                Token::new(TokenKind::Identifier, "b", 2),
            ]
        );
    }

    #[test]
    fn test_edge_signs() {
        assert_eq!(
            lex_all("1 - -1 + +1"),
            vec![
                Token::new(TokenKind::Integer, "1", 0),
                Token::new(TokenKind::Operator, "-", 2),
                Token::new(TokenKind::Integer, "-1", 4),
                Token::new(TokenKind::Operator, "+", 7),
                Token::new(TokenKind::Integer, "+1", 9),
            ]
        );
        assert_eq!(kinds("--1"), vec![TokenKind::Operator, TokenKind::Integer]);
    }

    #[test]
    fn test_edge_trailing_sign() {
        assert_eq!(lex_all("-"), vec![Token::new(TokenKind::Operator, "-", 0)]);
    }

    #[test]
    fn test_edge_all_compound_operators() {
        assert_eq!(
            lex_all("!= <= >= =="),
            vec![
                Token::new(TokenKind::Operator, "!=", 0),
                Token::new(TokenKind::Operator, "<=", 3),
                Token::new(TokenKind::Operator, ">=", 6),
                Token::new(TokenKind::Operator, "==", 9),
            ]
        );
    }

    #[test]
    fn test_edge_lex_then_lex_token_continues() {
        let mut lexer = Lexer::new("a b");
        assert_eq!(lexer.lex_token().unwrap(), Token::new(TokenKind::Identifier, "a", 0));
        assert_eq!(
            lexer.lex().unwrap(),
            vec![Token::new(TokenKind::Identifier, "b", 2)]
        );
        assert!(lexer.lex().unwrap().is_empty());
    }
}

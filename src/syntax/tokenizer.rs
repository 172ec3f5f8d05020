use crate::syntax::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Lenient Siddhi tokenizer producing a flat, lossless stream of `Token`s.
///
/// Scope:
/// - Meant for editor input, so half-typed and invalid text still tokenizes.
/// - Whitespace and comments are emitted as tokens; joining every token's text
///   gives back the input.
///
/// Behavior:
/// - `-- ...` and `// ...` run to the end of the line (newline excluded).
/// - `/* ... */` block comments; an unterminated one runs to the end of input.
/// - `[A-Za-z_][A-Za-z0-9_]*` runs become keywords or identifiers.
/// - Digit runs become int literals, `L`-suffixed ones long literals, and runs
///   with a fraction or exponent float literals.
/// - Single- or double-quoted strings; unterminated ones run to the end.
///
/// Never fails.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);

        let kind = if c.is_whitespace() {
            while chars.next_if(|&(_, n)| n.is_whitespace()).is_some() {}
            TokenKind::Whitespace
        } else if (c == '-' && next == Some('-')) || (c == '/' && next == Some('/')) {
            while chars.next_if(|&(_, n)| n != '\n').is_some() {}
            TokenKind::LineComment
        } else if c == '/' && next == Some('*') {
            chars.next();
            let mut prev = '\0';
            for (_, n) in chars.by_ref() {
                if prev == '*' && n == '/' {
                    break;
                }
                prev = n;
            }
            TokenKind::BlockComment
        } else if c.is_ascii_alphabetic() || c == '_' {
            while chars
                .next_if(|&(_, n)| n.is_ascii_alphanumeric() || n == '_')
                .is_some()
            {}
            let end = chars.peek().map_or(text.len(), |&(i, _)| i);
            Keyword::from_lower(&text[start..end].to_ascii_lowercase())
                .map(TokenKind::Keyword)
                .unwrap_or(TokenKind::Identifier)
        } else if c.is_ascii_digit() {
            let mut kind = TokenKind::IntLiteral;
            while chars.next_if(|&(_, n)| n.is_ascii_digit()).is_some() {}
            if chars.next_if(|&(_, n)| n == '.').is_some() {
                kind = TokenKind::FloatLiteral;
                while chars.next_if(|&(_, n)| n.is_ascii_digit()).is_some() {}
            }
            if chars.next_if(|&(_, n)| n == 'e' || n == 'E').is_some() {
                kind = TokenKind::FloatLiteral;
                chars.next_if(|&(_, n)| n == '-' || n == '+');
                while chars.next_if(|&(_, n)| n.is_ascii_digit()).is_some() {}
            }
            if kind == TokenKind::IntLiteral && chars.next_if(|&(_, n)| n == 'l' || n == 'L').is_some() {
                kind = TokenKind::LongLiteral;
            } else if chars
                .next_if(|&(_, n)| matches!(n, 'f' | 'F' | 'd' | 'D'))
                .is_some()
            {
                kind = TokenKind::FloatLiteral;
            }
            kind
        } else if c == '\'' || c == '"' {
            for (_, n) in chars.by_ref() {
                if n == c {
                    break;
                }
            }
            TokenKind::StringLiteral
        } else {
            match c {
                '(' => TokenKind::OpenPar,
                ')' => TokenKind::ClosePar,
                '[' => TokenKind::OpenSquare,
                ']' => TokenKind::CloseSquare,
                ',' => TokenKind::Comma,
                ';' => TokenKind::Semicolon,
                '.' => TokenKind::Dot,
                '#' => TokenKind::Hash,
                '@' => TokenKind::At,
                ':' => TokenKind::Colon,
                '=' => TokenKind::Assign,
                other => TokenKind::Other(other),
            }
        };

        let end = chars.peek().map_or(text.len(), |&(i, _)| i);
        out.push(Token::new(kind, &text[start..end], start));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::keyword::Keyword;
    use rstest::rstest;

    const SAMPLE: &str = "@App:name('Test-SiddhiApp');\n\
        \n\
        define stream sensorStream (sensorId string, temperature double);\n\
        \n\
        @info(name = 'query1')\n\
        from sensorStream#log()\n\
        select sensorId, avg(temperature) as avgTemp\n\
        insert into outputStream;";

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text)
            .into_iter()
            .filter(|t| !t.is_trivia())
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn is_lossless() {
        let joined: String = tokenize(SAMPLE).into_iter().map(|t| t.text).collect();
        assert_eq!(joined, SAMPLE);
    }

    #[test]
    fn spans_are_contiguous() {
        let tokens = tokenize(SAMPLE);
        for pair in tokens.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(tokens.last().map(|t| t.end), Some(SAMPLE.len()));
    }

    #[test]
    fn output_rate_clause() {
        assert_eq!(
            kinds("output every 5 events insert"),
            vec![
                TokenKind::Keyword(Keyword::Output),
                TokenKind::Keyword(Keyword::Every),
                TokenKind::IntLiteral,
                TokenKind::Keyword(Keyword::Events),
                TokenKind::Keyword(Keyword::Insert),
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive_and_identifiers_keep_case() {
        let tokens = tokenize("INSERT Into OutStream");
        assert!(tokens[0].is_keyword(Keyword::Insert));
        assert!(tokens[2].is_keyword(Keyword::Into));
        assert_eq!(tokens[4].kind, TokenKind::Identifier);
        assert_eq!(tokens[4].text, "OutStream");
    }

    #[rstest]
    #[case("-- note\ninsert", TokenKind::LineComment, "-- note")]
    #[case("// note\ninsert", TokenKind::LineComment, "// note")]
    #[case("/* a\n b */insert", TokenKind::BlockComment, "/* a\n b */")]
    #[case("/* open", TokenKind::BlockComment, "/* open")]
    fn comments_are_tokens(#[case] text: &str, #[case] kind: TokenKind, #[case] lexeme: &str) {
        let first = &tokenize(text)[0];
        assert_eq!(first.kind, kind);
        assert_eq!(first.text, lexeme);
    }

    #[rstest]
    #[case("5", TokenKind::IntLiteral)]
    #[case("100L", TokenKind::LongLiteral)]
    #[case("2.5", TokenKind::FloatLiteral)]
    #[case("1e-3", TokenKind::FloatLiteral)]
    #[case("3f", TokenKind::FloatLiteral)]
    #[case("'abc'", TokenKind::StringLiteral)]
    #[case("\"unterminated", TokenKind::StringLiteral)]
    fn literals(#[case] text: &str, #[case] kind: TokenKind) {
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, kind);
    }

    #[test]
    fn punctuation_and_unknown_characters() {
        assert_eq!(
            kinds("#[a.b]:=;*"),
            vec![
                TokenKind::Hash,
                TokenKind::OpenSquare,
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::CloseSquare,
                TokenKind::Colon,
                TokenKind::Assign,
                TokenKind::Semicolon,
                TokenKind::Other('*'),
            ]
        );
    }

    #[test]
    fn minus_alone_is_other() {
        assert_eq!(kinds("a - b")[1], TokenKind::Other('-'));
    }
}

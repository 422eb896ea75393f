//! Tolerant tokenizer for the chapter rich-text dialect.
//!
//! Chapter content is a constrained HTML dialect (paragraphs, headings,
//! emphasis, lists, blockquotes) written by a rich-text editor, so the
//! tokenizer never fails: a `<` that does not open a recognizable tag is
//! emitted as literal text, comments and declarations are skipped, and a tag
//! left open at end of input is simply never closed. Text is emitted with
//! character entities decoded.

/// A single lexical token of the dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening tag, name lowercased (`<p>`, `<STRONG class="x">`).
    Open(String),
    /// Closing tag, name lowercased (`</p>`).
    Close(String),
    /// Self-closing tag (`<br/>`).
    SelfClose(String),
    /// Text content with entities decoded.
    Text(String),
}

/// Iterator over the tokens of a rich-text string.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Lex the tag at the start of `rest` (which begins with `<`).
    ///
    /// Returns `None` without advancing when the `<` does not start a
    /// well-formed tag, in which case the caller emits it as literal text.
    fn lex_tag(&mut self, rest: &str) -> Option<Token> {
        let bytes = rest.as_bytes();
        let closing = bytes.len() > 1 && bytes[1] == b'/';
        let name_start = if closing { 2 } else { 1 };

        if !bytes
            .get(name_start)
            .is_some_and(|b| b.is_ascii_alphabetic())
        {
            return None;
        }

        let mut name_end = name_start;
        while bytes
            .get(name_end)
            .is_some_and(|b| b.is_ascii_alphanumeric())
        {
            name_end += 1;
        }

        // Scan for the closing `>`, ignoring any inside quoted attributes.
        let mut quote: Option<u8> = None;
        let mut i = name_end;
        let mut tag_end = None;
        while i < bytes.len() {
            match (quote, bytes[i]) {
                (Some(q), b) if b == q => quote = None,
                (Some(_), _) => {}
                (None, b'"') | (None, b'\'') => quote = Some(bytes[i]),
                (None, b'>') => {
                    tag_end = Some(i);
                    break;
                }
                _ => {}
            }
            i += 1;
        }
        let tag_end = tag_end?;

        let name = rest[name_start..name_end].to_ascii_lowercase();
        let self_closing = rest[name_end..tag_end].trim_end().ends_with('/');
        self.pos += tag_end + 1;

        Some(if closing {
            Token::Close(name)
        } else if self_closing {
            Token::SelfClose(name)
        } else {
            Token::Open(name)
        })
    }

    fn next_token(&mut self) -> Option<Token> {
        while self.pos < self.input.len() {
            // Copy the input reference out so `rest` does not hold a borrow
            // of `self` across the `lex_tag` call.
            let input = self.input;
            let rest = &input[self.pos..];

            let Some(lt) = rest.find('<') else {
                self.pos = self.input.len();
                return Some(Token::Text(decode_entities(rest)));
            };
            if lt > 0 {
                self.pos += lt;
                return Some(Token::Text(decode_entities(&rest[..lt])));
            }

            // Comments and declarations carry no content; skip and rescan.
            if rest.starts_with("<!--") {
                match rest.find("-->") {
                    Some(end) => self.pos += end + 3,
                    None => self.pos = self.input.len(),
                }
                continue;
            }
            let bytes = rest.as_bytes();
            if bytes.len() > 1 && (bytes[1] == b'!' || bytes[1] == b'?') {
                match rest.find('>') {
                    Some(end) => self.pos += end + 1,
                    None => self.pos = self.input.len(),
                }
                continue;
            }

            return match self.lex_tag(rest) {
                Some(token) => Some(token),
                None => {
                    // Not a tag; emit the `<` as literal text.
                    self.pos += 1;
                    Some(Token::Text("<".to_string()))
                }
            };
        }
        None
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Decode character entities in a text segment.
///
/// Handles the named entities the dialect's editor emits plus numeric
/// references. An unrecognized `&...;` sequence is kept verbatim.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        // Entity names are short; a distant `;` means a bare ampersand.
        let semi = rest[1..].find(';').map(|i| i + 1).filter(|&i| i <= 10);
        match semi.and_then(|i| decode_entity(&rest[1..i]).map(|c| (c, i))) {
            Some((decoded, i)) => {
                out.push(decoded);
                rest = &rest[i + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Tokenizer::new(input).collect()
    }

    #[test]
    fn test_simple_paragraph() {
        assert_eq!(
            tokens("<p>Hello</p>"),
            vec![
                Token::Open("p".to_string()),
                Token::Text("Hello".to_string()),
                Token::Close("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_tag_names_lowercased() {
        assert_eq!(
            tokens("<P><STRONG>x</STRONG></P>"),
            vec![
                Token::Open("p".to_string()),
                Token::Open("strong".to_string()),
                Token::Text("x".to_string()),
                Token::Close("strong".to_string()),
                Token::Close("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_attributes_are_ignored() {
        assert_eq!(
            tokens(r#"<p class="intro" data-x="a>b">Hi</p>"#),
            vec![
                Token::Open("p".to_string()),
                Token::Text("Hi".to_string()),
                Token::Close("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(
            tokens("a<br/>b"),
            vec![
                Token::Text("a".to_string()),
                Token::SelfClose("br".to_string()),
                Token::Text("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        assert_eq!(
            tokens("1 < 2"),
            vec![
                Token::Text("1 ".to_string()),
                Token::Text("<".to_string()),
                Token::Text(" 2".to_string()),
            ]
        );
    }

    #[test]
    fn test_unterminated_tag_degrades_to_text() {
        let toks = tokens("<p>a<stro");
        assert_eq!(toks[0], Token::Open("p".to_string()));
        assert_eq!(toks[1], Token::Text("a".to_string()));
        // "<stro" never closes; the `<` becomes text and lexing continues.
        assert_eq!(toks[2], Token::Text("<".to_string()));
        assert_eq!(toks[3], Token::Text("stro".to_string()));
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            tokens("a<!-- note -->b"),
            vec![Token::Text("a".to_string()), Token::Text("b".to_string())]
        );
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(
            tokens("<p>Fish &amp; Chips &lt;3</p>"),
            vec![
                Token::Open("p".to_string()),
                Token::Text("Fish & Chips <3".to_string()),
                Token::Close("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_entities("&#8217;tis &#x2014; so"), "\u{2019}tis \u{2014} so");
    }

    #[test]
    fn test_bare_ampersand_preserved() {
        assert_eq!(decode_entities("AT&T & &bogus; Sons"), "AT&T & &bogus; Sons");
    }
}

use crate::coerce::coerce;
use crate::errors::ParseError;
use crate::schema::FieldSchema;
use crate::types::{Condition, Operator, Value};
use regex::Regex;
use std::sync::OnceLock;

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

fn number_regex() -> &'static Regex {
    NUMBER_REGEX.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap())
}

fn identifier_regex() -> &'static Regex {
    IDENTIFIER_REGEX.get_or_init(|| Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*$").unwrap())
}

/// A `(field, operator, literal-text)` triple found by the scanner, before any
/// type coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCondition {
    pub field: String,
    pub operator: Operator,
    pub literal: String,
}

impl RawCondition {
    pub fn new(field: impl Into<String>, operator: Operator, literal: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            literal: literal.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Word(String),
    Number(String),
    Quoted(String),
    /// `contains(` with no space before the parenthesis
    ContainsCall,
    RParen,
    Other(String),
}

impl TokenKind {
    fn literal(&self) -> Option<&str> {
        match self {
            TokenKind::Number(text) | TokenKind::Quoted(text) => Some(text),
            _ => None,
        }
    }

    fn text(&self) -> String {
        match self {
            TokenKind::Word(text) | TokenKind::Number(text) | TokenKind::Other(text) => {
                text.clone()
            }
            TokenKind::Quoted(text) => format!("'{}'", text),
            TokenKind::ContainsCall => "contains(".to_string(),
            TokenKind::RParen => ")".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    /// Whitespace came right before this token
    spaced: bool,
}

struct Tokenizer {
    input: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        self.pos > start
    }

    fn read_while<F>(&mut self, predicate: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut result = String::new();
        while let Some(ch) = self.peek() {
            if predicate(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_quoted(&mut self) -> TokenKind {
        // Opening quote
        self.advance();
        let content = self.read_while(|c| c != '\'');
        if self.advance().is_some() {
            TokenKind::Quoted(content)
        } else {
            TokenKind::Other(format!("'{}", content))
        }
    }

    fn read_word(&mut self) -> TokenKind {
        let word = self.read_while(|c| c.is_alphanumeric() || c == '_' || c == '.');
        if word == "contains" && self.peek() == Some('(') {
            self.advance();
            TokenKind::ContainsCall
        } else if number_regex().is_match(&word) {
            TokenKind::Number(word)
        } else if identifier_regex().is_match(&word) {
            TokenKind::Word(word)
        } else {
            TokenKind::Other(word)
        }
    }

    fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let spaced = self.skip_whitespace();
            let ch = match self.peek() {
                Some(c) => c,
                None => break,
            };

            let kind = match ch {
                '\'' => self.read_quoted(),
                ')' => {
                    self.advance();
                    TokenKind::RParen
                }
                _ if ch.is_alphanumeric() || ch == '_' || ch == '.' => self.read_word(),
                _ => {
                    self.advance();
                    TokenKind::Other(ch.to_string())
                }
            };
            tokens.push(Token { kind, spaced });
        }

        tokens
    }
}

/// Tries to read one condition at the start of `tokens`, returning it together
/// with the number of tokens it spans.
fn match_condition(tokens: &[Token]) -> Option<(RawCondition, usize)> {
    let field = match tokens.first().map(|t| &t.kind) {
        Some(TokenKind::Word(field)) => field,
        _ => return None,
    };
    let next = tokens.get(1).filter(|t| t.spaced)?;

    match &next.kind {
        TokenKind::Word(keyword) => {
            let operator = Operator::from_keyword(keyword)?;
            let literal = tokens.get(2).filter(|t| t.spaced)?.kind.literal()?;
            Some((RawCondition::new(field, operator, literal), 3))
        }
        TokenKind::ContainsCall => {
            let literal = tokens.get(2)?.kind.literal()?;
            match tokens.get(3).map(|t| &t.kind) {
                Some(TokenKind::RParen) => {
                    Some((RawCondition::new(field, Operator::Contains, literal), 4))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn log_skipped(skipped: &mut Vec<String>) {
    if !skipped.is_empty() {
        let err = ParseError::UnparsableCondition(skipped.join(" "));
        tracing::debug!("Skipping filter fragment: {}", err);
        skipped.clear();
    }
}

/// Extracts every recognizable condition from already-decoded filter text, in
/// order of appearance. Text that matches no condition pattern is skipped.
pub fn scan(text: &str) -> Vec<RawCondition> {
    let tokens = Tokenizer::new(text).tokenize();
    let mut conditions = Vec::new();
    let mut skipped = Vec::new();
    let mut pos = 0;

    while pos < tokens.len() {
        match match_condition(&tokens[pos..]) {
            Some((condition, consumed)) => {
                log_skipped(&mut skipped);
                conditions.push(condition);
                pos += consumed;
            }
            None => {
                skipped.push(tokens[pos].kind.text());
                pos += 1;
            }
        }
    }
    log_skipped(&mut skipped);

    conditions
}

/// Resolves percent escapes in a `$filter` value. A literal `+` is kept as is,
/// so already-decoded text passes through unchanged. Input that does not decode
/// to UTF-8 is used as received.
pub fn decode_filter(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::warn!("Filter is not valid percent-encoded UTF-8, using it as is: {}", e);
            raw.to_string()
        }
    }
}

/// Parses a `$filter` value into typed conditions, implicitly joined by AND.
///
/// Unrecognized fragments and `contains` on non-string fields are dropped. A
/// literal that cannot be coerced to its field's type keeps its raw text, so the
/// condition matches no record. A condition on a field outside `schema` fails the
/// whole parse with [`ParseError::UnknownField`]; callers discard the filter.
pub fn parse(filter_text: &str, schema: &FieldSchema) -> Result<Vec<Condition>, ParseError> {
    let decoded = decode_filter(filter_text);
    let mut conditions = Vec::new();

    for raw in scan(&decoded) {
        match coerce(&raw, schema) {
            Ok(condition) => conditions.push(condition),
            Err(err @ ParseError::UnknownField(_)) => {
                tracing::warn!("Discarding filter \"{}\": {}", decoded, err);
                return Err(err);
            }
            Err(err @ ParseError::TypeMismatch { .. }) => {
                tracing::warn!("{}; condition will match nothing", err);
                conditions.push(Condition {
                    field: raw.field,
                    operator: raw.operator,
                    literal: Value::String(raw.literal),
                });
            }
            Err(err) => tracing::debug!("Dropping condition: {}", err),
        }
    }

    Ok(conditions)
}

use std::str::FromStr;

use crate::{
    CompoundValue, Error, ListValue, MAX_DEPTH, Result, TagValue, cold_path,
    util::is_allowed_in_unquoted,
};

/// Recursive-descent SNBT parser over a borrowed string.
pub(crate) struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    #[inline]
    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        cold_path();
        match self.peek() {
            Some(c) => Error::syntax(self.pos, format!("expected {expected} but found {c:?}")),
            None => Error::syntax(
                self.pos,
                format!("expected {expected} but reached end of input"),
            ),
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(self.unexpected(&format!("{expected:?}")))
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            cold_path();
            return Err(Error::DepthLimit(MAX_DEPTH));
        }
        Ok(())
    }

    /// Fails unless only whitespace remains.
    pub(crate) fn finish(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.unexpected("end of input"));
        }
        Ok(())
    }

    fn read_unquoted(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_allowed_in_unquoted(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    /// Reads a string delimited by `mark`; the opening mark is next.
    fn read_quoted(&mut self, mark: char) -> Result<String> {
        let start = self.pos;
        self.bump();
        let mut value = String::new();
        loop {
            let Some(c) = self.bump() else {
                cold_path();
                return Err(Error::syntax(start, "unterminated quoted string"));
            };
            match c {
                '\\' => {
                    let escape_pos = self.pos;
                    let escaped = match self.bump() {
                        Some('\\') => '\\',
                        Some('\'') => '\'',
                        Some('"') => '"',
                        Some('?') => '?',
                        Some('a') => '\x07',
                        Some('b') => '\x08',
                        Some('f') => '\x0c',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('v') => '\x0b',
                        Some(other) => {
                            cold_path();
                            return Err(Error::syntax(
                                escape_pos,
                                format!("the character {other:?} cannot be escaped"),
                            ));
                        }
                        None => {
                            cold_path();
                            return Err(Error::syntax(start, "unterminated quoted string"));
                        }
                    };
                    value.push(escaped);
                }
                c if c == mark => return Ok(value),
                c => value.push(c),
            }
        }
    }

    fn read_name(&mut self) -> Result<String> {
        match self.peek() {
            Some(mark @ ('"' | '\'')) => self.read_quoted(mark),
            _ => {
                let name = self.read_unquoted();
                if name.is_empty() {
                    return Err(self.unexpected("a name"));
                }
                Ok(name.to_owned())
            }
        }
    }

    /// Parses one value, skipping leading whitespace.
    pub(crate) fn parse_value(&mut self) -> Result<TagValue> {
        self.skip_whitespace();
        match self.peek() {
            Some(mark @ ('"' | '\'')) => self.read_quoted(mark).map(TagValue::String),
            Some('{') => self.parse_compound().map(TagValue::Compound),
            Some('[') => self.parse_list_or_array(),
            _ => self.parse_bare(),
        }
    }

    fn parse_compound(&mut self) -> Result<CompoundValue> {
        self.enter()?;
        self.expect('{')?;
        self.skip_whitespace();
        let mut compound = CompoundValue::new();
        if self.peek() == Some('}') {
            self.pos += 1;
        } else {
            loop {
                let name = self.read_name()?;
                self.skip_whitespace();
                self.expect(':')?;
                let value = self.parse_value()?;
                compound.insert_if_absent(name, value);
                self.skip_whitespace();
                if self.peek() == Some('}') {
                    self.pos += 1;
                    break;
                }
                self.expect(',')?;
                self.skip_whitespace();
            }
        }
        self.depth -= 1;
        Ok(compound)
    }

    fn parse_list_or_array(&mut self) -> Result<TagValue> {
        self.enter()?;
        self.expect('[')?;
        let value = match (self.peek(), self.peek_second()) {
            (Some('B'), Some(';')) => {
                self.pos += 2;
                TagValue::ByteArray(self.parse_array(parse_byte_element)?)
            }
            (Some('I'), Some(';')) => {
                self.pos += 2;
                TagValue::IntArray(self.parse_array(parse_int_element)?)
            }
            (Some('L'), Some(';')) => {
                self.pos += 2;
                TagValue::LongArray(self.parse_array(parse_long_element)?)
            }
            _ => TagValue::List(self.parse_list()?),
        };
        self.depth -= 1;
        Ok(value)
    }

    fn parse_array<T>(&mut self, parse_element: fn(&str) -> Option<T>) -> Result<Vec<T>> {
        self.skip_whitespace();
        let mut values = Vec::new();
        if self.peek() == Some(']') {
            self.pos += 1;
            return Ok(values);
        }
        loop {
            let start = self.pos;
            let token = self.read_unquoted();
            if token.is_empty() {
                return Err(self.unexpected("an array element"));
            }
            let value = parse_element(token).ok_or_else(|| {
                Error::syntax(start, format!("invalid array element {token:?}"))
            })?;
            values.push(value);
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.pos += 1;
                return Ok(values);
            }
            self.expect(',')?;
            self.skip_whitespace();
        }
    }

    /// The first element fixes the element kind; `[]` is an End-kind list.
    fn parse_list(&mut self) -> Result<ListValue> {
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.pos += 1;
            return Ok(ListValue::default());
        }
        let first = self.parse_value()?;
        let element_id = first.tag_id();
        let mut items = vec![first];
        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.pos += 1;
                return Ok(ListValue::from_parts(element_id, items));
            }
            self.expect(',')?;
            self.skip_whitespace();
            let start = self.pos;
            let item = self.parse_value()?;
            if item.tag_id() != element_id {
                cold_path();
                return Err(Error::syntax(
                    start,
                    format!(
                        "list element mismatch: expected {element_id}, found {}",
                        item.tag_id()
                    ),
                ));
            }
            items.push(item);
        }
    }

    /// Classifies an unquoted token by its suffix.
    fn parse_bare(&mut self) -> Result<TagValue> {
        let start = self.pos;
        let token = self.read_unquoted();
        let Some(last) = token.chars().next_back() else {
            return Err(self.unexpected("a value"));
        };
        let value = match token {
            "true" => Some(TagValue::Byte(1)),
            "false" => Some(TagValue::Byte(0)),
            _ => {
                let body = &token[..token.len() - last.len_utf8()];
                match last.to_ascii_lowercase() {
                    'b' => parse_number(body).map(TagValue::Byte),
                    's' => parse_number(body).map(TagValue::Short),
                    'l' => parse_number(body).map(TagValue::Long),
                    'f' => parse_number(body).map(TagValue::Float),
                    'd' => parse_number(body).map(TagValue::Double),
                    _ if token.contains('.') => parse_number(token).map(TagValue::Double),
                    _ => parse_number(token).map(TagValue::Int),
                }
            }
        };
        value.ok_or_else(|| {
            cold_path();
            Error::syntax(start, format!("invalid number {token:?}"))
        })
    }
}

#[inline]
fn parse_number<T: FromStr>(token: &str) -> Option<T> {
    token.parse().ok()
}

/// Strips one trailing `suffix` (either case) if present.
fn strip_suffix(token: &str, suffix: char) -> &str {
    match token.chars().next_back() {
        Some(c) if c.to_ascii_lowercase() == suffix => &token[..token.len() - 1],
        _ => token,
    }
}

fn parse_byte_element(token: &str) -> Option<i8> {
    match token {
        "true" => Some(1),
        "false" => Some(0),
        _ => parse_number(strip_suffix(token, 'b')),
    }
}

fn parse_int_element(token: &str) -> Option<i32> {
    parse_number(token)
}

fn parse_long_element(token: &str) -> Option<i64> {
    parse_number(strip_suffix(token, 'l'))
}

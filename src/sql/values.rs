//! Tokenizer for the value list of a single `INSERT` statement.

use core::str::Chars;

/// The literal the dump uses for SQL `NULL`.
const NULL_LITERAL: &str = "NULL";

/// A single positional value of an `INSERT` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// SQL `NULL`.
    Null,
    /// Any other value, with quotes removed and escapes kept verbatim.
    Text(String),
}

impl Value {
    /// Builds a value from an already trimmed segment of the value list.
    fn from_segment(segment: &str) -> Self {
        if segment == NULL_LITERAL {
            Self::Null
        } else {
            Self::Text(segment.into())
        }
    }

    /// Returns the text of the value, or `None` for `NULL`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Returns the text of the value, treating `NULL` and empty text alike.
    #[must_use]
    pub fn non_empty(&self) -> Option<&str> {
        self.as_text().filter(|text| !text.is_empty())
    }

    /// Returns whether the value is `NULL`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Lexer position relative to quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside of any quoted section.
    Normal,
    /// Inside a section opened by the given quote character.
    Quoted(char),
    /// The previous character was a backslash. Holds the quote to return to.
    Escaped(Option<char>),
}

/// Splits a raw value list into [`Value`]s.
///
/// Commas separate values only when they appear outside of quotes and at
/// brace depth zero, so embedded JSON such as `{"days":7,"weeks":1}` stays a
/// single value. Quote characters delimiting a section are dropped, braces
/// and backslash escapes are kept verbatim.
///
/// Unbalanced quotes or braces are not an error: the scan simply finishes in
/// whatever state it ended in. Use [`ValueTokenizer::is_balanced`] after
/// exhaustion to find out whether that happened.
///
/// A trailing segment that is empty after trimming is not emitted, while
/// empty segments between two commas are emitted as empty text.
///
/// # Example
///
/// ```
/// use strain_dump_extract::sql::{Value, ValueTokenizer};
///
/// let values: Vec<Value> = ValueTokenizer::new("1, 'a,b', NULL").collect();
/// assert_eq!(
///     values,
///     vec![Value::Text("1".into()), Value::Text("a,b".into()), Value::Null]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ValueTokenizer<'a> {
    chars: Chars<'a>,
    state: State,
    brace_depth: isize,
    buffer: String,
    finished: bool,
}

impl<'a> ValueTokenizer<'a> {
    /// Create a new tokenizer over the given value list.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            state: State::Normal,
            brace_depth: 0,
            buffer: String::new(),
            finished: false,
        }
    }

    /// Current brace nesting depth. Negative after unmatched `}`.
    #[must_use]
    pub fn brace_depth(&self) -> isize {
        self.brace_depth
    }

    /// Whether the scan so far left no quote, escape or brace open.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.state == State::Normal && self.brace_depth == 0
    }

    fn quote(&self) -> Option<char> {
        match self.state {
            State::Quoted(quote) => Some(quote),
            State::Normal | State::Escaped(_) => None,
        }
    }

    fn take_value(&mut self) -> Value {
        let value = Value::from_segment(self.buffer.trim());
        self.buffer.clear();
        value
    }

    /// Feed one character, returning a value when it terminates one.
    fn step(&mut self, c: char) -> Option<Value> {
        match (self.state, c) {
            (State::Escaped(quote), _) => {
                self.buffer.push(c);
                self.state = quote.map_or(State::Normal, State::Quoted);
            }
            (State::Normal | State::Quoted(_), '\\') => {
                self.buffer.push(c);
                self.state = State::Escaped(self.quote());
            }
            (State::Normal, '\'' | '"') => self.state = State::Quoted(c),
            (State::Quoted(quote), _) if c == quote => self.state = State::Normal,
            (State::Quoted(_), _) => self.buffer.push(c),
            (State::Normal, '{') => {
                self.brace_depth += 1;
                self.buffer.push(c);
            }
            (State::Normal, '}') => {
                self.brace_depth -= 1;
                self.buffer.push(c);
            }
            (State::Normal, ',') if self.brace_depth == 0 => return Some(self.take_value()),
            (State::Normal, _) => self.buffer.push(c),
        }
        None
    }
}

impl Iterator for ValueTokenizer<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.finished {
            return None;
        }
        while let Some(c) = self.chars.next() {
            if let Some(value) = self.step(c) {
                return Some(value);
            }
        }
        self.finished = true;
        if self.buffer.trim().is_empty() {
            None
        } else {
            Some(self.take_value())
        }
    }
}

impl core::iter::FusedIterator for ValueTokenizer<'_> {}

/// Tokenize a whole value list.
#[must_use]
pub fn parse_values(input: &str) -> Vec<Value> {
    ValueTokenizer::new(input).collect()
}

//! Text input fields and integer parsing
//!
//! The engines only take integers and indices. Turning typed text into those
//! happens here: trimmed text must parse as an `i64` value or a `usize`
//! index, anything else is rejected before an engine sees it.

use crate::engine::OpError;
use crate::memory::Value;

/// Which input field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Value,
    Index,
}

impl Field {
    pub fn toggle(self) -> Self {
        match self {
            Field::Value => Field::Index,
            Field::Index => Field::Value,
        }
    }
}

/// The value and index text boxes
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub value: String,
    pub index: String,
}

/// Longest text a field accepts; enough for any i64
const MAX_FIELD_LEN: usize = 20;

impl InputState {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Value => &self.value,
            Field::Index => &self.index,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Value => &mut self.value,
            Field::Index => &mut self.index,
        }
    }

    /// Append a typed character. Only digits go in, plus a leading minus
    /// sign in the value field. Returns whether the character was taken.
    pub fn type_char(&mut self, field: Field, c: char) -> bool {
        let text = self.field_mut(field);
        let accepted = text.len() < MAX_FIELD_LEN
            && (c.is_ascii_digit() || (c == '-' && field == Field::Value && text.is_empty()));
        if accepted {
            text.push(c);
        }
        accepted
    }

    pub fn backspace(&mut self, field: Field) {
        self.field_mut(field).pop();
    }

    pub fn clear(&mut self, field: Field) {
        self.field_mut(field).clear();
    }

    pub fn parse_value(&self) -> Result<Value, OpError> {
        parse_value(&self.value)
    }

    pub fn parse_index(&self) -> Result<usize, OpError> {
        parse_index(&self.index)
    }
}

/// Parse a value the way the number input does: surrounding whitespace is
/// ignored, anything that is not an `i64` is invalid
pub fn parse_value(text: &str) -> Result<Value, OpError> {
    let trimmed = text.trim();
    trimmed
        .parse::<Value>()
        .map_err(|_| OpError::InvalidValue(trimmed.to_string()))
}

/// Parse a non-negative index
pub fn parse_index(text: &str) -> Result<usize, OpError> {
    let trimmed = text.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| OpError::UnparsableIndex(trimmed.to_string()))
}

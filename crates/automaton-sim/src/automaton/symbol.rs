//! Symbol types for automata transitions.

use std::fmt;

use crate::error::FormatError;

/// Label carried by a transition.
///
/// `Epsilon` marks a move that consumes no input. Every other symbol is a
/// single character, which is also how input strings are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Symbol {
    Epsilon,
    Input(char),
}

/// Shorthand for [`Symbol::Epsilon`].
pub const EPSILON: Symbol = Symbol::Epsilon;

/// Label accepted as an alternative spelling of the empty string.
const EPSILON_GLYPH: &str = "ε";
const EPSILON_CHAR: char = 'ε';

impl Symbol {
    /// Check if this is an epsilon transition label.
    #[inline]
    pub fn is_epsilon(self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// The consumed character, or `None` for epsilon.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Epsilon => None,
            Symbol::Input(c) => Some(c),
        }
    }

    /// Parse the persisted label form: `""` or `"ε"` is epsilon, any other
    /// label must be exactly one character.
    pub fn parse(label: &str) -> Result<Self, FormatError> {
        if label.is_empty() || label == EPSILON_GLYPH {
            return Ok(Symbol::Epsilon);
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Symbol::Input(c)),
            _ => Err(FormatError::InvalidSymbol {
                label: label.to_string(),
            }),
        }
    }
}

/// `'ε'` is epsilon, matching the persisted label form.
impl From<char> for Symbol {
    fn from(c: char) -> Self {
        if c == EPSILON_CHAR {
            Symbol::Epsilon
        } else {
            Symbol::Input(c)
        }
    }
}

impl TryFrom<String> for Symbol {
    type Error = FormatError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Symbol::parse(&label)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Epsilon => String::new(),
            Symbol::Input(c) => c.to_string(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Epsilon => f.write_str(EPSILON_GLYPH),
            Symbol::Input(c) => write!(f, "{c}"),
        }
    }
}

use thiserror::Error;

/// Errors produced while parsing a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,

    #[error("invalid selector '{selector}' at column {column}: {reason}")]
    Invalid {
        selector: String,
        column: u32,
        reason: String,
    },
}

/// Errors produced by tree mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no element with id '{0}'")]
    NotFound(String),

    #[error("element '{0}' has no parent")]
    NoParent(String),
}

/// Errors produced while parsing CSS edge shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgesParseError {
    #[error("expected 1 to 4 values, got {0}")]
    Arity(usize),

    #[error("'{0}' is not a pixel length")]
    Unit(String),

    #[error("'{0}' is not a number")]
    Number(String),
}
